//! Token filters.
//!
//! A filter decides whether a transformed token is kept. Filters run after
//! every transform, in configuration order; a token is indexed only when all
//! filters keep it.
//!
//! # Examples
//!
//! ```
//! use pike::analysis::filter::{StopWordFilter, TokenFilter};
//!
//! let filter = StopWordFilter::new();
//! assert!(!filter.keep("the"));
//! assert!(filter.keep("quick"));
//! ```

/// Trait for filters that keep or drop tokens.
pub trait TokenFilter: Send + Sync {
    /// Return `true` to keep the token.
    fn keep(&self, token: &str) -> bool;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod remove_empty;
pub mod stop;

pub use remove_empty::RemoveEmptyFilter;
pub use stop::StopWordFilter;
