//! Corpus vocabulary and its vector-space dimensions.
//!
//! [`CorpusTokens`] holds every distinct token ever indexed together with a
//! stable ordinal per token: its rank in lexicographic order. Rebuilding the
//! positions from the same token set always yields the same ordinals.
//!
//! The vocabulary only grows. Removing the last document that contained a
//! token leaves the token (and its ordinal) in place; recomputing corpus-wide
//! statistics on every removal is not worth the cost.

use std::collections::BTreeSet;
use std::sync::Arc;

use ahash::AHashMap;

/// Monotonically growing token vocabulary with ordinal positions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CorpusTokens {
    tokens: Arc<BTreeSet<String>>,
    positions: Arc<AHashMap<String, usize>>,
}

impl CorpusTokens {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        CorpusTokens::default()
    }

    /// Union `tokens` into the vocabulary and rebuild positions if needed.
    ///
    /// Returns the number of tokens added.
    pub fn extend<'a, I>(&mut self, tokens: I) -> usize
    where
        I: IntoIterator<Item = &'a String>,
    {
        let added = self.insert_tokens(tokens);
        self.reindex();
        added
    }

    /// Union `tokens` into the vocabulary without touching positions.
    ///
    /// Call [`reindex`](Self::reindex) once the batch is in; until then new
    /// tokens have no position.
    pub fn insert_tokens<'a, I>(&mut self, tokens: I) -> usize
    where
        I: IntoIterator<Item = &'a String>,
    {
        let fresh: Vec<&String> = tokens
            .into_iter()
            .filter(|token| !self.tokens.contains(*token))
            .collect();
        if fresh.is_empty() {
            return 0;
        }

        Arc::make_mut(&mut self.tokens).extend(fresh.iter().map(|token| (*token).clone()));
        fresh.len()
    }

    /// Recompute positions from sorted order if tokens arrived since the
    /// last rebuild.
    pub fn reindex(&mut self) {
        if self.positions.len() == self.tokens.len() {
            return;
        }
        self.positions = Arc::new(
            self.tokens
                .iter()
                .enumerate()
                .map(|(position, token)| (token.clone(), position))
                .collect(),
        );
    }

    /// Ordinal position of `token`.
    pub fn position(&self, token: &str) -> Option<usize> {
        self.positions.get(token).copied()
    }

    /// Check if `token` was ever indexed.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_positions_follow_sorted_order() {
        let mut corpus = CorpusTokens::new();
        assert_eq!(corpus.extend(&set(&["pear", "apple", "melon"])), 3);

        assert_eq!(corpus.position("apple"), Some(0));
        assert_eq!(corpus.position("melon"), Some(1));
        assert_eq!(corpus.position("pear"), Some(2));
        assert_eq!(corpus.position("kiwi"), None);
    }

    #[test]
    fn test_extend_reassigns_positions() {
        let mut corpus = CorpusTokens::new();
        corpus.extend(&set(&["pear", "melon"]));
        assert_eq!(corpus.extend(&set(&["apple", "pear"])), 1);

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.position("apple"), Some(0));
        assert_eq!(corpus.position("pear"), Some(2));
        assert_eq!(corpus.iter().collect::<Vec<_>>(), vec!["apple", "melon", "pear"]);
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let mut first = CorpusTokens::new();
        first.extend(&set(&["b", "a"]));
        first.extend(&set(&["c"]));

        let mut second = CorpusTokens::new();
        second.extend(&set(&["c", "b", "a"]));

        assert_eq!(first, second);
    }

    #[test]
    fn test_extend_with_known_tokens_is_noop() {
        let mut corpus = CorpusTokens::new();
        corpus.extend(&set(&["alpha"]));
        let before = corpus.clone();

        assert_eq!(corpus.extend(&set(&["alpha"])), 0);
        assert!(Arc::ptr_eq(&before.positions, &corpus.positions));
    }

    #[test]
    fn test_insert_tokens_defers_positions_until_reindex() {
        let mut corpus = CorpusTokens::new();
        corpus.extend(&set(&["melon"]));

        assert_eq!(corpus.insert_tokens(&set(&["apple"])), 1);
        assert_eq!(corpus.insert_tokens(&set(&["pear", "apple"])), 1);
        assert!(corpus.contains("apple"));
        assert_eq!(corpus.position("apple"), None);
        assert_eq!(corpus.position("melon"), Some(0));

        corpus.reindex();
        let mut expected = CorpusTokens::new();
        expected.extend(&set(&["apple", "melon", "pear"]));
        assert_eq!(corpus, expected);

        let positions = Arc::clone(&corpus.positions);
        corpus.reindex();
        assert!(Arc::ptr_eq(&positions, &corpus.positions));
    }
}
