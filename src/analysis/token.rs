//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows from a tokenizer through the transforms
//! and filters of a [`Pipeline`](crate::analysis::pipeline::Pipeline). The
//! index itself only keeps the token text; position and offsets are retained
//! so custom transforms and filters can inspect where a token came from.
//!
//! # Examples
//!
//! ```
//! use pike::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.position, 1);
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

/// A single unit of text produced by tokenization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token text; rewritten by each transform.
    pub text: String,

    /// Ordinal of the token within its field or query, from 0.
    pub position: usize,

    /// Byte range of the token in the analyzed text.
    pub start_offset: usize,
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }
}

/// A stream of tokens, as returned by tokenizers.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;
