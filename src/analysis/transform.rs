//! Token transforms.
//!
//! A transform rewrites the text of a single token: lowercasing, trimming
//! punctuation, stemming. Transforms run in configuration order after the
//! tokenizer. A token whose text becomes empty is kept unless a filter such
//! as [`RemoveEmptyFilter`](crate::analysis::filter::RemoveEmptyFilter)
//! drops it.
//!
//! # Examples
//!
//! ```
//! use pike::analysis::transform::{LowercaseTransform, Transform};
//!
//! let transform = LowercaseTransform::new();
//! assert_eq!(transform.transform("WORLD"), "world");
//! ```
//!
//! Implementing a custom transform:
//!
//! ```
//! use pike::analysis::transform::Transform;
//!
//! struct ReverseTransform;
//!
//! impl Transform for ReverseTransform {
//!     fn transform(&self, token: &str) -> String {
//!         token.chars().rev().collect()
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "reverse"
//!     }
//! }
//!
//! assert_eq!(ReverseTransform.transform("abc"), "cba");
//! ```

/// Trait for transforms that rewrite a token's text.
pub trait Transform: Send + Sync {
    /// Rewrite one token.
    fn transform(&self, token: &str) -> String;

    /// Get the name of this transform (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod stem;
pub mod trimmer;

pub use lowercase::LowercaseTransform;
pub use stem::{PorterStemmer, StemTransform, Stemmer};
pub use trimmer::TrimmerTransform;
