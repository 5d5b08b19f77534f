//! Trimmer transform implementation.

use crate::analysis::transform::Transform;

/// A transform that strips leading and trailing non-word characters.
///
/// Word characters are alphanumerics and `_`. Punctuation inside a token
/// (`don't`, `e.g`) is kept. A token made only of punctuation trims to the
/// empty string, which the default filters then drop.
#[derive(Clone, Debug, Default)]
pub struct TrimmerTransform;

impl TrimmerTransform {
    /// Create a new trimmer transform.
    pub fn new() -> Self {
        TrimmerTransform
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl Transform for TrimmerTransform {
    fn transform(&self, token: &str) -> String {
        token.trim_matches(|c: char| !is_word_char(c)).to_string()
    }

    fn name(&self) -> &'static str {
        "trimmer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmer_transform() {
        let transform = TrimmerTransform::new();
        assert_eq!(transform.transform("explanations."), "explanations");
        assert_eq!(transform.transform("(hello)"), "hello");
        assert_eq!(transform.transform("\"don't\""), "don't");
        assert_eq!(transform.transform("snake_case"), "snake_case");
        assert_eq!(transform.transform("..."), "");
    }

    #[test]
    fn test_transform_name() {
        assert_eq!(TrimmerTransform::new().name(), "trimmer");
    }
}
