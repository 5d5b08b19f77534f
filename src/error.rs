//! Error types for the Pike library.
//!
//! Every fallible operation returns [`Result`], whose error side is the closed
//! [`PikeError`] enum. All variants are expected, recoverable conditions; the
//! index never panics on a precondition violation.
//!
//! # Examples
//!
//! ```
//! use pike::error::{PikeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PikeError::EmptyQuery)
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => assert_eq!(e.to_string(), "Error query is empty."),
//! }
//! ```

use thiserror::Error;

/// The main error type for Pike operations.
///
/// The display strings are stable and part of the public contract; the
/// structured fields carry the offending reference or query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PikeError {
    /// The document's extracted reference is empty.
    #[error("Error document has an empty unique id (ref).")]
    EmptyReference,

    /// `add` targeted a reference that is already indexed.
    #[error("Error adding document that allready exists.")]
    DuplicateReference { reference: String },

    /// Tokenizing every field of the document produced no tokens.
    #[error("Error after tokenisation there are no terms to index.")]
    NoIndexableTerms { reference: String },

    /// `remove` or `update` targeted a reference that is not indexed.
    #[error("Error document is not in index.")]
    ReferenceNotFound { reference: String },

    /// Search attempted on an index without documents.
    #[error("Error there are no documents in index to search.")]
    EmptyIndex,

    /// The query string is empty or whitespace only.
    #[error("Error query is empty.")]
    EmptyQuery,

    /// The query tokenized to nothing.
    #[error("Error after tokenisation there are no terms to search for.")]
    NoQueryTerms { query: String },

    /// Analysis pipeline construction errors (bad patterns, failing factories).
    #[error("Analysis error: {0}")]
    Analysis(String),
}

/// Result type alias for operations that may fail with PikeError.
pub type Result<T> = std::result::Result<T, PikeError>;

impl PikeError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PikeError::Analysis(msg.into())
    }

    /// Create a duplicate reference error.
    pub fn duplicate_reference<S: Into<String>>(reference: S) -> Self {
        PikeError::DuplicateReference {
            reference: reference.into(),
        }
    }

    /// Create a reference not found error.
    pub fn reference_not_found<S: Into<String>>(reference: S) -> Self {
        PikeError::ReferenceNotFound {
            reference: reference.into(),
        }
    }

    /// The document reference this error is about, if any.
    pub fn reference(&self) -> Option<&str> {
        match self {
            PikeError::DuplicateReference { reference }
            | PikeError::NoIndexableTerms { reference }
            | PikeError::ReferenceNotFound { reference } => Some(reference.as_str()),
            _ => None,
        }
    }
}
