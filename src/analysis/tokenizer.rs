//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first stage of a pipeline: they split raw field or
//! query text into [`Token`](crate::analysis::token::Token)s that transforms
//! and filters then normalize.
//!
//! # Examples
//!
//! ```
//! use pike::analysis::tokenizer::{RegexTokenizer, Tokenizer};
//!
//! let tokenizer = RegexTokenizer::with_gaps(r"[\s\-]+").unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("full-text search").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[1].text, "text");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a pipeline can be shared between
/// index versions held by different threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;

pub use regex::RegexTokenizer;
