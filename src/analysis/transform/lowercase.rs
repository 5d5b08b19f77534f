//! Lowercase transform implementation.

use crate::analysis::transform::Transform;

/// A transform that converts tokens to lowercase for case-insensitive matching.
#[derive(Clone, Debug, Default)]
pub struct LowercaseTransform;

impl LowercaseTransform {
    /// Create a new lowercase transform.
    pub fn new() -> Self {
        LowercaseTransform
    }
}

impl Transform for LowercaseTransform {
    fn transform(&self, token: &str) -> String {
        if token.is_ascii() {
            token.to_ascii_lowercase()
        } else {
            token.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_transform() {
        let transform = LowercaseTransform::new();
        assert_eq!(transform.transform("Hello"), "hello");
        assert_eq!(transform.transform("WORLD"), "world");
        assert_eq!(transform.transform("ÉCOLE"), "école");
    }

    #[test]
    fn test_transform_name() {
        assert_eq!(LowercaseTransform::new().name(), "lowercase");
    }
}
