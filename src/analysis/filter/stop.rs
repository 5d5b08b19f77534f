//! Stop word filter implementation.
//!
//! Removes common words that do not contribute to relevance. Because the
//! default pipeline stems before filtering, [`StopWordFilter::stemmed`] runs
//! the stop list through the same stemmer so `"this"` still matches once it
//! has become `"thi"`.
//!
//! # Examples
//!
//! ```
//! use pike::analysis::filter::{StopWordFilter, TokenFilter};
//! use pike::analysis::transform::PorterStemmer;
//!
//! let filter = StopWordFilter::stemmed(&PorterStemmer::new());
//! assert!(!filter.keep("thi"));
//! assert!(filter.keep("search"));
//! ```

use ahash::AHashSet;

use crate::analysis::filter::TokenFilter;
use crate::analysis::transform::Stemmer;

/// Default English stop words list.
pub const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "able", "about", "across", "after", "all", "almost", "also", "am", "among", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "but", "by", "can", "cannot", "could",
    "dear", "did", "do", "does", "either", "else", "ever", "every", "for", "from", "get", "got",
    "had", "has", "have", "he", "her", "hers", "him", "his", "how", "however", "i", "if", "in",
    "into", "is", "it", "its", "just", "least", "let", "like", "likely", "may", "me", "might",
    "most", "must", "my", "neither", "no", "nor", "not", "of", "off", "often", "on", "only", "or",
    "other", "our", "own", "rather", "said", "say", "says", "she", "should", "since", "so",
    "some", "than", "that", "the", "their", "them", "then", "there", "these", "they", "this",
    "tis", "to", "too", "twas", "us", "wants", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "would", "yet", "you", "your",
];

/// A filter that drops tokens found in a stop word set.
#[derive(Clone, Debug)]
pub struct StopWordFilter {
    stop_words: AHashSet<String>,
}

impl StopWordFilter {
    /// Create a stop filter with the default English list.
    pub fn new() -> Self {
        Self::with_words(DEFAULT_ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Create a stop filter with a custom word list.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopWordFilter {
            stop_words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a stop filter whose default English list is passed through `stemmer`.
    pub fn stemmed(stemmer: &dyn Stemmer) -> Self {
        Self::with_words(
            DEFAULT_ENGLISH_STOP_WORDS
                .iter()
                .map(|word| stemmer.stem(word)),
        )
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopWordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFilter for StopWordFilter {
    fn keep(&self, token: &str) -> bool {
        !self.is_stop_word(token)
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::transform::PorterStemmer;

    #[test]
    fn test_stop_filter() {
        let filter = StopWordFilter::new();
        assert!(!filter.keep("the"));
        assert!(!filter.keep("and"));
        assert!(filter.keep("quick"));
        assert!(filter.keep("brown"));
    }

    #[test]
    fn test_custom_stop_words() {
        let filter = StopWordFilter::with_words(["custom", "words"]);
        assert_eq!(filter.len(), 2);
        assert!(filter.is_stop_word("custom"));
        assert!(!filter.is_stop_word("the"));
    }

    #[test]
    fn test_stemmed_stop_words() {
        let filter = StopWordFilter::stemmed(&PorterStemmer::new());
        assert!(filter.is_stop_word("thi"));
        assert!(filter.is_stop_word("the"));
        assert!(!filter.is_stop_word("this"));
        assert!(filter.keep("explan"));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopWordFilter::new().name(), "stop");
    }
}
