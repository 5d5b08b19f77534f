//! Document store: reference → distinct tokens the document contributed.
//!
//! The stored token set is what lets `remove` reverse a document's postings
//! without re-tokenizing the caller's document.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::index::trie::TrieMap;

/// Distinct tokens of one document, in sorted order.
pub type DocumentTokens = BTreeSet<String>;

/// Persistent map from document reference to its token set.
///
/// Versions share every entry they did not touch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentStore {
    documents: TrieMap<Arc<DocumentTokens>>,
}

impl DocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        DocumentStore::default()
    }

    /// Store the token set of `reference`.
    ///
    /// Token sets are never empty; an empty set is a caller bug.
    pub fn insert(&mut self, reference: &str, tokens: DocumentTokens) {
        debug_assert!(!tokens.is_empty(), "document {reference} has no tokens");
        self.documents.insert(reference, Arc::new(tokens));
    }

    /// Remove `reference`, returning its token set.
    pub fn remove(&mut self, reference: &str) -> Option<Arc<DocumentTokens>> {
        self.documents.remove(reference)
    }

    /// The token set of `reference`.
    pub fn get(&self, reference: &str) -> Option<&DocumentTokens> {
        self.documents.get(reference).map(Arc::as_ref)
    }

    /// Check if `reference` is stored.
    pub fn contains(&self, reference: &str) -> bool {
        self.documents.contains_key(reference)
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Stored references, sorted.
    pub fn references(&self) -> Vec<String> {
        self.documents.keys().collect()
    }
}
