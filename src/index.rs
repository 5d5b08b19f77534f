//! The immutable full-text index.
//!
//! An [`Index`] is a value: `add`, `remove`, `update` and `search` borrow the
//! current version and return a new one. Sub-stores are shared between
//! versions through `Arc` and copied on write, so producing a new version
//! costs roughly the size of what changed, and a version held by another
//! thread is never mutated. A failed operation returns `Err` and leaves the
//! caller's version as it was.
//!
//! # Examples
//!
//! ```
//! use pike::index::Index;
//! use pike::index::config::SimpleConfig;
//!
//! struct Doc {
//!     cid: String,
//!     title: String,
//!     body: String,
//! }
//!
//! let index = Index::new(
//!     SimpleConfig::new(|doc: &Doc| doc.cid.clone())
//!         .field(|doc: &Doc| doc.title.clone(), 5.0)
//!         .field(|doc: &Doc| doc.body.clone(), 1.0),
//! );
//!
//! let index = index
//!     .add(&Doc {
//!         cid: "id1".to_string(),
//!         title: "First Title".to_string(),
//!         body: "Words in this example document with explanations.".to_string(),
//!     })
//!     .unwrap();
//!
//! let (_index, results) = index.search("explanations").unwrap();
//! assert_eq!(results[0].reference, "id1");
//! assert!(results[0].score > 0.0);
//! ```

pub mod config;
pub mod corpus;
pub mod document_store;
pub mod idf;
pub mod scorer;
pub mod trie;

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::analysis::pipeline::Pipeline;
use crate::error::{PikeError, Result};
use crate::index::config::{Config, SimpleConfig};
use crate::index::corpus::CorpusTokens;
use crate::index::document_store::{DocumentStore, DocumentTokens};
use crate::index::idf::{IdfCache, inverse_document_frequency};
use crate::index::scorer::{FieldTokens, SparseVector, rank, term_score};
use crate::index::trie::{Postings, PostingsTrie};

pub use crate::index::scorer::SearchResult;

/// An immutable, versioned full-text index over documents of type `D`.
pub struct Index<D> {
    config: Arc<Config<D>>,
    pipeline: Option<Arc<Pipeline>>,
    corpus: CorpusTokens,
    document_store: DocumentStore,
    token_store: PostingsTrie,
    idf_cache: IdfCache,
}

impl<D> Clone for Index<D> {
    fn clone(&self) -> Self {
        Index {
            config: Arc::clone(&self.config),
            pipeline: self.pipeline.clone(),
            corpus: self.corpus.clone(),
            document_store: self.document_store.clone(),
            token_store: self.token_store.clone(),
            idf_cache: self.idf_cache.clone(),
        }
    }
}

impl<D> std::fmt::Debug for Index<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Index")
            .field("config", &self.config)
            .field("pipeline", &self.pipeline)
            .field("documents", &self.document_store.len())
            .field("corpus_tokens", &self.corpus.len())
            .field("idf_cache", &self.idf_cache.len())
            .finish()
    }
}

impl<D> Index<D> {
    /// Create an empty index with the default analysis pipeline.
    pub fn new(config: SimpleConfig<D>) -> Self {
        Self::new_with(config.into())
    }

    /// Create an empty index with full control over the configuration.
    pub fn new_with(config: Config<D>) -> Self {
        Index {
            config: Arc::new(config),
            pipeline: None,
            corpus: CorpusTokens::new(),
            document_store: DocumentStore::new(),
            token_store: PostingsTrie::new(),
            idf_cache: IdfCache::new(),
        }
    }

    /// The index type tag, fixed at creation.
    pub fn index_type(&self) -> &str {
        &self.config.index_type
    }

    /// The index configuration.
    pub fn config(&self) -> &Config<D> {
        &self.config
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.document_store.len()
    }

    /// Check if `reference` is indexed.
    pub fn contains_reference(&self, reference: &str) -> bool {
        self.document_store.contains(reference)
    }

    /// Every token ever indexed, with its vector ordinal.
    pub fn corpus(&self) -> &CorpusTokens {
        &self.corpus
    }

    /// Reference → token set of every indexed document.
    pub fn document_store(&self) -> &DocumentStore {
        &self.document_store
    }

    /// Token → postings.
    pub fn token_store(&self) -> &PostingsTrie {
        &self.token_store
    }

    /// Memoized IDF values.
    pub fn idf_cache(&self) -> &IdfCache {
        &self.idf_cache
    }

    /// Check if the analysis pipeline has been materialized.
    pub fn is_pipeline_built(&self) -> bool {
        self.pipeline.is_some()
    }

    /// Add a document.
    ///
    /// Fails with `EmptyReference`, `DuplicateReference` or `NoIndexableTerms`.
    pub fn add(&self, doc: &D) -> Result<Self> {
        let mut next = self.clone();
        next.insert(doc)?;
        next.corpus.reindex();
        Ok(next)
    }

    /// Add documents in order, collecting failures instead of stopping.
    ///
    /// Each error is paired with the position of its document in `docs`.
    /// The batch is built in one version, so documents indexed earlier in the
    /// batch are not copied again by later ones.
    pub fn add_docs(&self, docs: &[D]) -> (Self, Vec<(usize, PikeError)>) {
        let mut next = self.clone();
        let mut errors = Vec::new();
        for (position, doc) in docs.iter().enumerate() {
            if let Err(err) = next.insert(doc) {
                errors.push((position, err));
            }
        }
        next.corpus.reindex();

        debug!(
            target: "pike::index",
            added = docs.len() - errors.len(),
            failed = errors.len(),
            "Added documents"
        );
        (next, errors)
    }

    /// Remove a document and all of its postings.
    ///
    /// The corpus vocabulary is left as is: tokens only seen in the removed
    /// document keep their ordinals. Fails with `EmptyReference` or
    /// `ReferenceNotFound`.
    pub fn remove(&self, doc: &D) -> Result<Self> {
        let reference = (self.config.reference)(doc);
        if reference.is_empty() {
            return Err(PikeError::EmptyReference);
        }

        let mut next = self.clone();
        let tokens = next
            .document_store
            .remove(&reference)
            .ok_or_else(|| PikeError::reference_not_found(reference.as_str()))?;
        for token in tokens.iter() {
            next.token_store.remove(token, &reference);
        }
        next.idf_cache.clear();

        debug!(
            target: "pike::index",
            reference = %reference,
            tokens = tokens.len(),
            "Removed document"
        );

        Ok(next)
    }

    /// Replace a document: remove it, then add it to the resulting index.
    ///
    /// Fails with `ReferenceNotFound` when the document is not indexed, or
    /// with any `add` error for the new content.
    pub fn update(&self, doc: &D) -> Result<Self> {
        let mut next = self.remove(doc)?;
        next.insert(doc)?;
        next.corpus.reindex();
        Ok(next)
    }

    /// `update` when the document is indexed, `add` otherwise.
    pub fn add_or_update(&self, doc: &D) -> Result<Self> {
        let reference = (self.config.reference)(doc);
        if self.document_store.contains(&reference) {
            self.update(doc)
        } else {
            self.add(doc)
        }
    }

    /// Rank the documents containing every query token.
    ///
    /// Returns the next index version (the pipeline and IDF cache may have
    /// been filled) with results sorted by descending cosine similarity,
    /// ties broken by ascending reference. Fails with `EmptyIndex`,
    /// `EmptyQuery` or `NoQueryTerms`.
    pub fn search(&self, query: &str) -> Result<(Self, Vec<SearchResult>)> {
        if self.document_store.is_empty() {
            return Err(PikeError::EmptyIndex);
        }
        if query.trim().is_empty() {
            return Err(PikeError::EmptyQuery);
        }

        let mut next = self.clone();
        let query_tokens: BTreeSet<String> =
            next.pipeline()?.analyze(query)?.into_iter().collect();
        if query_tokens.is_empty() {
            return Err(PikeError::NoQueryTerms {
                query: query.to_string(),
            });
        }

        let total_boost = next.config.total_boost();
        let mut query_vector = SparseVector::new();
        let mut dimensions = Vec::with_capacity(query_tokens.len());
        for token in &query_tokens {
            let Some(position) = next.corpus.position(token) else {
                continue;
            };
            let idf = next.idf(token);
            query_vector.insert(position, idf * total_boost);
            dimensions.push((token.as_str(), position));
        }

        let results = next.score_candidates(&query_tokens, &dimensions, &query_vector);
        trace!(
            target: "pike::index",
            query,
            tokens = query_tokens.len(),
            results = results.len(),
            "Scored search candidates"
        );

        Ok((next, rank(results)))
    }

    fn score_candidates(
        &self,
        query_tokens: &BTreeSet<String>,
        dimensions: &[(&str, usize)],
        query_vector: &SparseVector,
    ) -> Vec<SearchResult> {
        let Some(postings) = query_tokens
            .iter()
            .map(|token| self.token_store.postings(token))
            .collect::<Option<Vec<&Postings>>>()
        else {
            return Vec::new();
        };

        let Some(smallest) = postings.iter().min_by_key(|p| p.len()) else {
            return Vec::new();
        };

        smallest
            .keys()
            .filter(|reference| postings.iter().all(|p| p.contains_key(reference)))
            .map(|reference| {
                let mut document_vector = SparseVector::new();
                for (token, position) in dimensions {
                    if let Some(score) = self.token_store.score(token, &reference) {
                        document_vector.insert(*position, score);
                    }
                }
                let score = query_vector.cosine_similarity(&document_vector);
                SearchResult::new(reference, score)
            })
            .collect()
    }

    /// Index `doc` into this version in place.
    ///
    /// Every check and all analysis run before the first store is touched, so
    /// an `Err` leaves the stores as they were. New corpus tokens get their
    /// positions on the next `corpus.reindex()`.
    fn insert(&mut self, doc: &D) -> Result<()> {
        let reference = (self.config.reference)(doc);
        if reference.is_empty() {
            return Err(PikeError::EmptyReference);
        }
        if self.document_store.contains(&reference) {
            return Err(PikeError::duplicate_reference(reference));
        }

        let fields = self.field_tokens(doc)?;
        let tokens: DocumentTokens = fields
            .iter()
            .flat_map(|field| field.tokens.iter().cloned())
            .collect();
        if tokens.is_empty() {
            return Err(PikeError::NoIndexableTerms { reference });
        }

        for token in &tokens {
            self.token_store.add(token, &reference, term_score(token, &fields));
        }
        let new_tokens = self.corpus.insert_tokens(&tokens);
        debug!(
            target: "pike::index",
            reference = %reference,
            tokens = tokens.len(),
            new_tokens,
            "Added document"
        );
        self.document_store.insert(&reference, tokens);
        self.idf_cache.clear();

        Ok(())
    }

    /// IDF of `token`, memoized in the cache.
    fn idf(&mut self, token: &str) -> f64 {
        if let Some(idf) = self.idf_cache.get(token) {
            return idf;
        }
        let idf = inverse_document_frequency(
            self.document_store.len(),
            self.token_store.document_frequency(token),
        );
        trace!(target: "pike::index", token, idf, "IDF cache miss");
        self.idf_cache.insert(token, idf);
        idf
    }

    /// The pipeline, materialized on first use.
    fn pipeline(&mut self) -> Result<Arc<Pipeline>> {
        if let Some(pipeline) = &self.pipeline {
            return Ok(Arc::clone(pipeline));
        }

        let pipeline = Arc::new(Pipeline::build(
            &self.config.index_type,
            self.config.resolve_tokenizer()?,
            &self.config.transform_factories,
            &self.config.filter_factories,
        )?);
        self.pipeline = Some(Arc::clone(&pipeline));
        Ok(pipeline)
    }

    /// Distinct tokens of every field of `doc`, single-valued fields first.
    fn field_tokens(&mut self, doc: &D) -> Result<Vec<FieldTokens>> {
        let pipeline = self.pipeline()?;
        let mut fields =
            Vec::with_capacity(self.config.fields.len() + self.config.list_fields.len());

        for field in &self.config.fields {
            let tokens = pipeline.analyze(&(field.accessor)(doc))?;
            fields.push(FieldTokens::new(field.boost, tokens.into_iter().collect()));
        }
        for field in &self.config.list_fields {
            let mut tokens = BTreeSet::new();
            for text in (field.accessor)(doc) {
                tokens.extend(pipeline.analyze(&text)?);
            }
            fields.push(FieldTokens::new(field.boost, tokens));
        }

        Ok(fields)
    }
}
