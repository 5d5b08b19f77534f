//! Porter stemming algorithm.
//!
//! Applies the five rewrite steps of the Porter algorithm:
//! 1. Plurals, -ed/-ing suffixes and a final -y after a vowel-bearing stem
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and -ll
//!
//! Only ASCII words are stemmed; anything else is lowercased and returned
//! as is.
//!
//! # Examples
//!
//! ```
//! use pike::analysis::transform::stem::{PorterStemmer, Stemmer};
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! assert_eq!(stemmer.stem("document"), "document");
//! ```

use crate::analysis::transform::stem::Stemmer;

const STEP2_SUFFIXES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3_SUFFIXES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemmer for English words.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    fn is_vowel(word: &[u8], pos: usize) -> bool {
        match word.get(pos) {
            Some(b'a' | b'e' | b'i' | b'o' | b'u') => true,
            Some(b'y') if pos > 0 => !Self::is_vowel(word, pos - 1),
            _ => false,
        }
    }

    /// Number of vowel-consonant sequences in the word.
    fn measure(word: &str) -> usize {
        let bytes = word.as_bytes();
        let n = bytes.len();
        let mut m = 0;
        let mut i = 0;

        while i < n && !Self::is_vowel(bytes, i) {
            i += 1;
        }

        while i < n {
            while i < n && Self::is_vowel(bytes, i) {
                i += 1;
            }
            if i >= n {
                break;
            }
            m += 1;
            while i < n && !Self::is_vowel(bytes, i) {
                i += 1;
            }
        }

        m
    }

    fn contains_vowel(word: &str) -> bool {
        (0..word.len()).any(|i| Self::is_vowel(word.as_bytes(), i))
    }

    fn ends_with_double_consonant(word: &str) -> bool {
        let bytes = word.as_bytes();
        let len = bytes.len();
        len >= 2 && bytes[len - 1] == bytes[len - 2] && !Self::is_vowel(bytes, len - 1)
    }

    /// Consonant-vowel-consonant ending where the last consonant is not w, x or y.
    fn ends_cvc(word: &str) -> bool {
        let bytes = word.as_bytes();
        let len = bytes.len();
        len >= 3
            && !Self::is_vowel(bytes, len - 3)
            && Self::is_vowel(bytes, len - 2)
            && !Self::is_vowel(bytes, len - 1)
            && !matches!(bytes[len - 1], b'w' | b'x' | b'y')
    }

    fn strip<'a>(word: &'a str, suffix: &str) -> &'a str {
        &word[..word.len() - suffix.len()]
    }

    fn replace_suffix(word: &str, old: &str, new: &str, min_measure: usize) -> String {
        if word.ends_with(old) {
            let stem = Self::strip(word, old);
            if Self::measure(stem) >= min_measure {
                return format!("{stem}{new}");
            }
        }
        word.to_string()
    }

    fn step1a(word: &str) -> String {
        if word.ends_with("sses") {
            format!("{}ss", Self::strip(word, "sses"))
        } else if word.ends_with("ies") {
            format!("{}i", Self::strip(word, "ies"))
        } else if word.ends_with("ss") {
            word.to_string()
        } else if word.ends_with('s') && word.len() > 1 {
            Self::strip(word, "s").to_string()
        } else {
            word.to_string()
        }
    }

    fn step1b(word: &str) -> String {
        let stemmed = if word.ends_with("eed") {
            Self::replace_suffix(word, "eed", "ee", 1)
        } else if word.ends_with("ed") && Self::contains_vowel(Self::strip(word, "ed")) {
            Self::strip(word, "ed").to_string()
        } else if word.ends_with("ing") && Self::contains_vowel(Self::strip(word, "ing")) {
            Self::strip(word, "ing").to_string()
        } else {
            word.to_string()
        };

        if stemmed == word {
            return stemmed;
        }

        if stemmed.ends_with("at") || stemmed.ends_with("bl") || stemmed.ends_with("iz") {
            format!("{stemmed}e")
        } else if Self::ends_with_double_consonant(&stemmed)
            && !stemmed.ends_with('l')
            && !stemmed.ends_with('s')
            && !stemmed.ends_with('z')
        {
            stemmed[..stemmed.len() - 1].to_string()
        } else if Self::measure(&stemmed) == 1 && Self::ends_cvc(&stemmed) {
            format!("{stemmed}e")
        } else {
            stemmed
        }
    }

    fn step1c(word: &str) -> String {
        match word.strip_suffix('y') {
            Some(stem) if Self::contains_vowel(stem) => format!("{stem}i"),
            _ => word.to_string(),
        }
    }

    /// Rewrite the longest matching suffix only; a failed measure check
    /// leaves the word alone.
    fn replace_longest_matching(word: &str, suffixes: &[(&str, &str)]) -> String {
        suffixes
            .iter()
            .filter(|(old, _)| word.ends_with(old))
            .max_by_key(|(old, _)| old.len())
            .map(|(old, new)| Self::replace_suffix(word, old, new, 1))
            .unwrap_or_else(|| word.to_string())
    }

    fn step4(word: &str) -> String {
        let Some(suffix) = STEP4_SUFFIXES
            .iter()
            .filter(|suffix| word.ends_with(*suffix))
            .max_by_key(|suffix| suffix.len())
        else {
            return word.to_string();
        };

        let stem = Self::strip(word, suffix);
        if Self::measure(stem) > 1
            && (*suffix != "ion" || stem.ends_with('s') || stem.ends_with('t'))
        {
            stem.to_string()
        } else {
            word.to_string()
        }
    }

    fn step5(word: &str) -> String {
        let word = if word.ends_with('e') {
            let stem = Self::strip(word, "e");
            let m = Self::measure(stem);
            if m > 1 || (m == 1 && !Self::ends_cvc(stem)) {
                stem.to_string()
            } else {
                word.to_string()
            }
        } else {
            word.to_string()
        };

        if word.ends_with("ll") && Self::measure(&word) > 1 {
            word[..word.len() - 1].to_string()
        } else {
            word
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if word.len() <= 2 || !word.is_ascii() {
            return word;
        }

        let word = Self::step1a(&word);
        let word = Self::step1b(&word);
        let word = Self::step1c(&word);
        let word = Self::replace_longest_matching(&word, STEP2_SUFFIXES);
        let word = Self::replace_longest_matching(&word, STEP3_SUFFIXES);
        let word = Self::step4(&word);
        Self::step5(&word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porter_stemmer() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("died"), "di");
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("disabled"), "disabl");
        assert_eq!(stemmer.stem("measuring"), "measur");
        assert_eq!(stemmer.stem("itemization"), "item");
        assert_eq!(stemmer.stem("sensational"), "sensat");
        assert_eq!(stemmer.stem("traditional"), "tradit");
    }

    #[test]
    fn test_porter_step4_stops_at_longest_suffix() {
        let stemmer = PorterStemmer::new();

        // "-ment" wins over "-ent"; its stem is too short to strip.
        assert_eq!(stemmer.stem("document"), "document");
        assert_eq!(stemmer.stem("argument"), "argument");
        assert_eq!(stemmer.stem("adjustment"), "adjust");
        assert_eq!(stemmer.stem("replacement"), "replac");
    }

    #[test]
    fn test_porter_final_y() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("happy"), "happi");
        assert_eq!(stemmer.stem("happiness"), "happi");
        assert_eq!(stemmer.stem("body"), "bodi");
        assert_eq!(stemmer.stem("sky"), "sky");
    }

    #[test]
    fn test_porter_measure() {
        assert_eq!(PorterStemmer::measure("tree"), 0);
        assert_eq!(PorterStemmer::measure("trees"), 1);
        assert_eq!(PorterStemmer::measure("trouble"), 1);
        assert_eq!(PorterStemmer::measure("troubles"), 2);
    }

    #[test]
    fn test_porter_vowel_detection() {
        let word = b"trouble";

        assert!(!PorterStemmer::is_vowel(word, 0)); // t
        assert!(!PorterStemmer::is_vowel(word, 1)); // r
        assert!(PorterStemmer::is_vowel(word, 2)); // o
        assert!(PorterStemmer::is_vowel(word, 3)); // u
        assert!(!PorterStemmer::is_vowel(word, 4)); // b
        assert!(!PorterStemmer::is_vowel(word, 5)); // l
        assert!(PorterStemmer::is_vowel(word, 6)); // e
    }

    #[test]
    fn test_porter_non_ascii_passthrough() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("Über"), "über");
        assert_eq!(stemmer.stem("naïveties"), "naïveties");
    }

    #[test]
    fn test_porter_short_words() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("Is"), "is");
        assert_eq!(stemmer.stem("a"), "a");
    }
}
