//! Remove empty filter implementation.

use crate::analysis::filter::TokenFilter;

/// A filter that drops empty and whitespace-only tokens.
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl TokenFilter for RemoveEmptyFilter {
    fn keep(&self, token: &str) -> bool {
        !token.trim().is_empty()
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}
