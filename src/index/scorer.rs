//! Term scoring and vector-space ranking.
//!
//! Documents are scored per token with boost-weighted, field-length
//! normalized term frequency ([`term_score`]). At query time the query and
//! each candidate document become [`SparseVector`]s over the corpus ordinals
//! of the query tokens and are compared by cosine similarity.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Distinct tokens one field produced for a document, with the field's boost.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldTokens {
    pub boost: f64,
    pub tokens: BTreeSet<String>,
}

impl FieldTokens {
    pub fn new(boost: f64, tokens: BTreeSet<String>) -> Self {
        FieldTokens { boost, tokens }
    }
}

/// Combined score of `token` across every field of a document.
///
/// Each field containing the token contributes `boost / |field tokens|`;
/// fields without it contribute nothing. A short, heavily boosted field
/// therefore dominates.
pub fn term_score(token: &str, fields: &[FieldTokens]) -> f64 {
    fields
        .iter()
        .filter(|field| field.tokens.contains(token))
        .map(|field| field.boost / field.tokens.len() as f64)
        .sum()
}

/// Sparse vector keyed by corpus ordinal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SparseVector {
    components: BTreeMap<usize, f64>,
}

impl SparseVector {
    pub fn new() -> Self {
        SparseVector::default()
    }

    /// Set the component at `position`.
    pub fn insert(&mut self, position: usize, value: f64) {
        self.components.insert(position, value);
    }

    pub fn get(&self, position: usize) -> Option<f64> {
        self.components.get(&position).copied()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn magnitude(&self) -> f64 {
        self.components.values().map(|v| v * v).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .components
            .iter()
            .filter_map(|(position, value)| large.get(*position).map(|o| value * o))
            .sum()
    }

    /// Cosine similarity; 0 when either vector has zero magnitude.
    pub fn cosine_similarity(&self, other: &SparseVector) -> f64 {
        let denominator = self.magnitude() * other.magnitude();
        if denominator == 0.0 {
            return 0.0;
        }
        self.dot(other) / denominator
    }
}

/// A ranked search hit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Reference of the matching document.
    pub reference: String,
    /// Cosine similarity between the query and the document.
    pub score: f64,
}

impl SearchResult {
    pub fn new<S: Into<String>>(reference: S, score: f64) -> Self {
        SearchResult {
            reference: reference.into(),
            score,
        }
    }
}

/// Sort by descending score; equal scores fall back to ascending reference.
pub fn rank(mut results: Vec<SearchResult>) -> Vec<SearchResult> {
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.reference.cmp(&b.reference))
    });
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(boost: f64, words: &[&str]) -> FieldTokens {
        FieldTokens::new(boost, words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_term_score_sums_fields() {
        let fields = vec![
            field(5.0, &["first", "titl"]),
            field(1.0, &["titl", "word", "explan", "exampl"]),
        ];

        assert_eq!(term_score("first", &fields), 2.5);
        assert_eq!(term_score("titl", &fields), 2.5 + 0.25);
        assert_eq!(term_score("word", &fields), 0.25);
        assert_eq!(term_score("absent", &fields), 0.0);
    }

    #[test]
    fn test_term_score_ignores_empty_fields() {
        let fields = vec![field(5.0, &[]), field(2.0, &["only"])];
        assert_eq!(term_score("only", &fields), 2.0);
    }

    #[test]
    fn test_cosine_similarity() {
        let mut a = SparseVector::new();
        a.insert(0, 1.0);
        a.insert(3, 1.0);

        let mut b = SparseVector::new();
        b.insert(0, 2.0);
        b.insert(3, 2.0);

        assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-12);

        let mut c = SparseVector::new();
        c.insert(1, 1.0);
        assert_eq!(a.cosine_similarity(&c), 0.0);
    }

    #[test]
    fn test_cosine_similarity_zero_magnitude() {
        let mut a = SparseVector::new();
        a.insert(0, 1.0);
        assert_eq!(a.cosine_similarity(&SparseVector::new()), 0.0);
    }

    #[test]
    fn test_dot_and_magnitude() {
        let mut a = SparseVector::new();
        a.insert(0, 3.0);
        a.insert(1, 4.0);

        let mut b = SparseVector::new();
        b.insert(1, 2.0);

        assert_eq!(a.magnitude(), 5.0);
        assert_eq!(a.dot(&b), 8.0);
        assert_eq!(b.dot(&a), 8.0);
    }

    #[test]
    fn test_rank_breaks_ties_by_reference() {
        let ranked = rank(vec![
            SearchResult::new("b", 0.5),
            SearchResult::new("c", 0.9),
            SearchResult::new("a", 0.5),
        ]);

        let references: Vec<&str> = ranked.iter().map(|r| r.reference.as_str()).collect();
        assert_eq!(references, vec!["c", "a", "b"]);
    }
}
