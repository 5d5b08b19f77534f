//! Inverse document frequency and its memo table.

use std::sync::Arc;

use ahash::AHashMap;

/// IDF of a token found in `document_frequency` of `total_documents` documents.
///
/// Uses `ln(1 + N / df)`, which stays positive even for a token present in
/// every document. A token with no documents gets 0 and drops out of scoring.
pub fn inverse_document_frequency(total_documents: usize, document_frequency: usize) -> f64 {
    if document_frequency == 0 {
        return 0.0;
    }
    (1.0 + total_documents as f64 / document_frequency as f64).ln()
}

/// Memoized IDF values.
///
/// Filled lazily during scoring and discarded wholesale whenever the corpus
/// changes; it is never patched incrementally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdfCache {
    values: Arc<AHashMap<String, f64>>,
}

impl IdfCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        IdfCache::default()
    }

    /// Cached IDF of `token`.
    pub fn get(&self, token: &str) -> Option<f64> {
        self.values.get(token).copied()
    }

    /// Memoize the IDF of `token`.
    pub fn insert(&mut self, token: &str, idf: f64) {
        Arc::make_mut(&mut self.values).insert(token.to_string(), idf);
    }

    /// Drop every cached value.
    pub fn clear(&mut self) {
        if !self.values.is_empty() {
            self.values = Arc::default();
        }
    }

    /// Number of cached tokens.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_document_frequency() {
        assert_eq!(inverse_document_frequency(10, 0), 0.0);
        assert!((inverse_document_frequency(1, 1) - 2f64.ln()).abs() < 1e-12);
        assert!((inverse_document_frequency(10, 2) - 6f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_rarer_tokens_weigh_more() {
        let common = inverse_document_frequency(100, 100);
        let rare = inverse_document_frequency(100, 1);
        assert!(common > 0.0);
        assert!(rare > common);
    }

    #[test]
    fn test_cache_insert_and_clear() {
        let mut cache = IdfCache::new();
        cache.insert("alpha", 1.5);

        assert_eq!(cache.get("alpha"), Some(1.5));
        assert_eq!(cache.get("beta"), None);
        assert_eq!(cache.len(), 1);

        let snapshot = cache.clone();
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(snapshot.get("alpha"), Some(1.5));
    }
}
