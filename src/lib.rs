//! # Pike
//!
//! An immutable in-memory full-text search index for Rust.
//!
//! ## Features
//!
//! - Multi-field documents with per-field boosts
//! - Pluggable analysis pipeline (tokenizer, transforms, filters)
//! - Trie-backed postings shared between index versions
//! - TF-IDF vector-space ranking by cosine similarity
//! - Every mutation yields a new index value; failures leave the old one intact

pub mod analysis;
pub mod error;
pub mod index;

pub mod prelude {
    pub use crate::error::{PikeError, Result};
    pub use crate::index::config::{Config, SimpleConfig};
    pub use crate::index::{Index, SearchResult};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
