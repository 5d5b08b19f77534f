//! Analysis pipeline combining a tokenizer with transforms and filters.
//!
//! A [`Pipeline`] is built from factories bound to an index type tag, so a
//! pipeline materialized for one index format is never silently reused by an
//! index of another. The index builds its pipeline lazily on first
//! tokenization and carries it forward in every later version.
//!
//! ```text
//! text → Tokenizer → Transform* → TokenFilter* → tokens
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use pike::analysis::pipeline::{Pipeline, default_filter_factories, default_transform_factories};
//! use pike::analysis::tokenizer::RegexTokenizer;
//!
//! let pipeline = Pipeline::build(
//!     "my-index",
//!     Arc::new(RegexTokenizer::separators().unwrap()),
//!     &default_transform_factories(),
//!     &default_filter_factories(),
//! )
//! .unwrap();
//!
//! let tokens = pipeline.analyze("The Running Dogs!").unwrap();
//! assert_eq!(tokens, vec!["run", "dog"]);
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::analysis::filter::{RemoveEmptyFilter, StopWordFilter, TokenFilter};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::transform::{
    LowercaseTransform, PorterStemmer, StemTransform, Transform, TrimmerTransform,
};
use crate::error::Result;

/// Builds a transform for the given index type.
pub type TransformFactory = Arc<dyn Fn(&str) -> Result<Arc<dyn Transform>> + Send + Sync>;

/// Builds a filter for the given index type.
pub type FilterFactory = Arc<dyn Fn(&str) -> Result<Arc<dyn TokenFilter>> + Send + Sync>;

/// Wrap a ready-made transform in a factory that ignores the index type.
pub fn transform_factory<T: Transform + Clone + 'static>(transform: T) -> TransformFactory {
    Arc::new(move |_index_type: &str| -> Result<Arc<dyn Transform>> {
        Ok(Arc::new(transform.clone()))
    })
}

/// Wrap a ready-made filter in a factory that ignores the index type.
pub fn filter_factory<F: TokenFilter + Clone + 'static>(filter: F) -> FilterFactory {
    Arc::new(move |_index_type: &str| -> Result<Arc<dyn TokenFilter>> {
        Ok(Arc::new(filter.clone()))
    })
}

/// Default transforms: lowercase, trimmer, Porter stemmer.
pub fn default_transform_factories() -> Vec<TransformFactory> {
    vec![
        transform_factory(LowercaseTransform::new()),
        transform_factory(TrimmerTransform::new()),
        transform_factory(StemTransform::new()),
    ]
}

/// Default filters: stemmed English stop words, empty tokens.
pub fn default_filter_factories() -> Vec<FilterFactory> {
    let stop_words: FilterFactory = Arc::new(|_index_type: &str| -> Result<Arc<dyn TokenFilter>> {
        Ok(Arc::new(StopWordFilter::stemmed(&PorterStemmer::new())))
    });

    vec![stop_words, filter_factory(RemoveEmptyFilter::new())]
}

/// A materialized analysis pipeline.
#[derive(Clone)]
pub struct Pipeline {
    index_type: String,
    tokenizer: Arc<dyn Tokenizer>,
    transforms: Vec<Arc<dyn Transform>>,
    filters: Vec<Arc<dyn TokenFilter>>,
}

impl Pipeline {
    /// Run every factory for `index_type` and assemble the pipeline.
    pub fn build(
        index_type: &str,
        tokenizer: Arc<dyn Tokenizer>,
        transform_factories: &[TransformFactory],
        filter_factories: &[FilterFactory],
    ) -> Result<Self> {
        let transforms = transform_factories
            .iter()
            .map(|factory| factory(index_type))
            .collect::<Result<Vec<_>>>()?;
        let filters = filter_factories
            .iter()
            .map(|factory| factory(index_type))
            .collect::<Result<Vec<_>>>()?;

        let pipeline = Pipeline {
            index_type: index_type.to_string(),
            tokenizer,
            transforms,
            filters,
        };

        debug!(
            target: "pike::analysis",
            index_type,
            tokenizer = pipeline.tokenizer.name(),
            transforms = ?pipeline.transform_names(),
            filters = ?pipeline.filter_names(),
            "Materialized analysis pipeline"
        );

        Ok(pipeline)
    }

    /// The index type this pipeline was built for.
    pub fn index_type(&self) -> &str {
        &self.index_type
    }

    /// Names of the transforms, in application order.
    pub fn transform_names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }

    /// Names of the filters, in application order.
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Tokenize `text` and return the surviving normalized tokens.
    ///
    /// Order and duplicates are preserved. Only the configured filters drop
    /// tokens, empty ones included.
    pub fn analyze(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tokenizer.tokenize(text)?;

        Ok(tokens
            .filter_map(|token| {
                let text = self
                    .transforms
                    .iter()
                    .fold(token.text, |text, transform| transform.transform(&text));
                self.filters
                    .iter()
                    .all(|filter| filter.keep(&text))
                    .then_some(text)
            })
            .collect())
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("index_type", &self.index_type)
            .field("tokenizer", &self.tokenizer.name())
            .field("transforms", &self.transform_names())
            .field("filters", &self.filter_names())
            .finish()
    }
}
