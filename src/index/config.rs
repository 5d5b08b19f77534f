//! Index configuration.
//!
//! [`SimpleConfig`] names the reference and the boosted fields and takes the
//! default analysis pipeline. [`Config`] additionally controls the index type
//! tag, the tokenizer, and the transform and filter factories.
//!
//! # Examples
//!
//! ```
//! use pike::index::config::SimpleConfig;
//!
//! struct Doc {
//!     cid: String,
//!     title: String,
//!     body: String,
//! }
//!
//! let config = SimpleConfig::new(|doc: &Doc| doc.cid.clone())
//!     .field(|doc: &Doc| doc.title.clone(), 5.0)
//!     .field(|doc: &Doc| doc.body.clone(), 1.0);
//!
//! assert_eq!(config.fields().len(), 2);
//! ```

use std::sync::Arc;

use crate::analysis::pipeline::{
    FilterFactory, TransformFactory, default_filter_factories, default_transform_factories,
};
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer, regex::DEFAULT_SEPARATOR_PATTERN};
use crate::error::Result;

/// Index type tag used when none is configured.
pub const DEFAULT_INDEX_TYPE: &str = "-= Pike Index Type 1 =-";

/// Extracts a document's unique reference.
pub type ReferenceFn<D> = Arc<dyn Fn(&D) -> String + Send + Sync>;

/// Extracts the text of a single-valued field.
pub type FieldFn<D> = Arc<dyn Fn(&D) -> String + Send + Sync>;

/// Extracts the texts of a multi-valued field.
pub type ListFieldFn<D> = Arc<dyn Fn(&D) -> Vec<String> + Send + Sync>;

/// A boosted single-valued field.
pub struct Field<D> {
    pub accessor: FieldFn<D>,
    pub boost: f64,
}

impl<D> Clone for Field<D> {
    fn clone(&self) -> Self {
        Field {
            accessor: Arc::clone(&self.accessor),
            boost: self.boost,
        }
    }
}

/// A boosted multi-valued field; all its values form one field token set.
pub struct ListField<D> {
    pub accessor: ListFieldFn<D>,
    pub boost: f64,
}

impl<D> Clone for ListField<D> {
    fn clone(&self) -> Self {
        ListField {
            accessor: Arc::clone(&self.accessor),
            boost: self.boost,
        }
    }
}

fn check_boost(boost: f64) {
    debug_assert!(
        boost.is_finite() && boost > 0.0,
        "field boost must be a positive number, got {boost}"
    );
}

/// Reference and fields, with the default pipeline.
pub struct SimpleConfig<D> {
    reference: ReferenceFn<D>,
    fields: Vec<Field<D>>,
    list_fields: Vec<ListField<D>>,
}

impl<D> SimpleConfig<D> {
    /// Create a config with the given reference extractor and no fields.
    pub fn new<R>(reference: R) -> Self
    where
        R: Fn(&D) -> String + Send + Sync + 'static,
    {
        SimpleConfig {
            reference: Arc::new(reference),
            fields: Vec::new(),
            list_fields: Vec::new(),
        }
    }

    /// Add a single-valued field with a positive boost.
    pub fn field<F>(mut self, accessor: F, boost: f64) -> Self
    where
        F: Fn(&D) -> String + Send + Sync + 'static,
    {
        check_boost(boost);
        self.fields.push(Field {
            accessor: Arc::new(accessor),
            boost,
        });
        self
    }

    /// Add a multi-valued field with a positive boost.
    pub fn list_field<F>(mut self, accessor: F, boost: f64) -> Self
    where
        F: Fn(&D) -> Vec<String> + Send + Sync + 'static,
    {
        check_boost(boost);
        self.list_fields.push(ListField {
            accessor: Arc::new(accessor),
            boost,
        });
        self
    }

    /// Get the configured single-valued fields.
    pub fn fields(&self) -> &[Field<D>] {
        &self.fields
    }

    /// Get the configured multi-valued fields.
    pub fn list_fields(&self) -> &[ListField<D>] {
        &self.list_fields
    }
}

/// Full index configuration.
pub struct Config<D> {
    pub(crate) index_type: String,
    pub(crate) reference: ReferenceFn<D>,
    pub(crate) fields: Vec<Field<D>>,
    pub(crate) list_fields: Vec<ListField<D>>,
    pub(crate) tokenizer: Option<Arc<dyn Tokenizer>>,
    pub(crate) transform_factories: Vec<TransformFactory>,
    pub(crate) filter_factories: Vec<FilterFactory>,
}

impl<D> Config<D> {
    /// Create a config with defaults for everything but the reference.
    pub fn new<R>(reference: R) -> Self
    where
        R: Fn(&D) -> String + Send + Sync + 'static,
    {
        SimpleConfig::new(reference).into()
    }

    /// Set the index type tag handed to every pipeline factory.
    pub fn index_type<S: Into<String>>(mut self, index_type: S) -> Self {
        self.index_type = index_type.into();
        self
    }

    /// Replace the tokenizer.
    pub fn tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Replace the transform factories.
    pub fn transform_factories(mut self, factories: Vec<TransformFactory>) -> Self {
        self.transform_factories = factories;
        self
    }

    /// Replace the filter factories.
    pub fn filter_factories(mut self, factories: Vec<FilterFactory>) -> Self {
        self.filter_factories = factories;
        self
    }

    /// Add a single-valued field with a positive boost.
    pub fn field<F>(mut self, accessor: F, boost: f64) -> Self
    where
        F: Fn(&D) -> String + Send + Sync + 'static,
    {
        check_boost(boost);
        self.fields.push(Field {
            accessor: Arc::new(accessor),
            boost,
        });
        self
    }

    /// Add a multi-valued field with a positive boost.
    pub fn list_field<F>(mut self, accessor: F, boost: f64) -> Self
    where
        F: Fn(&D) -> Vec<String> + Send + Sync + 'static,
    {
        check_boost(boost);
        self.list_fields.push(ListField {
            accessor: Arc::new(accessor),
            boost,
        });
        self
    }

    /// Get the index type tag.
    pub fn get_index_type(&self) -> &str {
        &self.index_type
    }

    /// Sum of every field boost, single- and multi-valued.
    pub fn total_boost(&self) -> f64 {
        self.fields.iter().map(|f| f.boost).sum::<f64>()
            + self.list_fields.iter().map(|f| f.boost).sum::<f64>()
    }

    /// The configured tokenizer, or the default separator tokenizer.
    pub(crate) fn resolve_tokenizer(&self) -> Result<Arc<dyn Tokenizer>> {
        match &self.tokenizer {
            Some(tokenizer) => Ok(Arc::clone(tokenizer)),
            None => Ok(Arc::new(RegexTokenizer::with_gaps(
                DEFAULT_SEPARATOR_PATTERN,
            )?)),
        }
    }
}

impl<D> From<SimpleConfig<D>> for Config<D> {
    fn from(config: SimpleConfig<D>) -> Self {
        Config {
            index_type: DEFAULT_INDEX_TYPE.to_string(),
            reference: config.reference,
            fields: config.fields,
            list_fields: config.list_fields,
            tokenizer: None,
            transform_factories: default_transform_factories(),
            filter_factories: default_filter_factories(),
        }
    }
}

impl<D> std::fmt::Debug for Config<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("index_type", &self.index_type)
            .field(
                "field_boosts",
                &self.fields.iter().map(|f| f.boost).collect::<Vec<_>>(),
            )
            .field(
                "list_field_boosts",
                &self.list_fields.iter().map(|f| f.boost).collect::<Vec<_>>(),
            )
            .field(
                "tokenizer",
                &self.tokenizer.as_ref().map(|t| t.name()).unwrap_or("default"),
            )
            .field("transform_factories", &self.transform_factories.len())
            .field("filter_factories", &self.filter_factories.len())
            .finish()
    }
}
