//! Text analysis module for Pike.
//!
//! Turns raw field and query text into normalized tokens. A pipeline is a
//! tokenizer followed by ordered transforms (`token -> token`) and filters
//! (`token -> bool`); see [`pipeline::Pipeline`].

pub mod filter;
pub mod pipeline;
pub mod token;
pub mod tokenizer;
pub mod transform;

pub use filter::TokenFilter;
pub use pipeline::{FilterFactory, Pipeline, TransformFactory};
pub use token::{Token, TokenStream};
pub use tokenizer::Tokenizer;
pub use transform::Transform;
