//! Stemming transform and stemmer implementations.

use std::sync::Arc;

use super::Transform;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub mod porter;

pub use porter::PorterStemmer;

/// Transform that applies a stemmer to every token.
#[derive(Clone)]
pub struct StemTransform {
    stemmer: Arc<dyn Stemmer>,
}

impl std::fmt::Debug for StemTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemTransform")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemTransform {
    /// Create a new stem transform with the Porter stemmer.
    pub fn new() -> Self {
        StemTransform {
            stemmer: Arc::new(PorterStemmer::new()),
        }
    }

    /// Create a stem transform with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemTransform { stemmer }
    }

    /// Get the stemmer used by this transform.
    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }
}

impl Default for StemTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for StemTransform {
    fn transform(&self, token: &str) -> String {
        self.stemmer.stem(token)
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
