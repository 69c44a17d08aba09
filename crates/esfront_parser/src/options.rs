//! Parser configuration.

use serde::Deserialize;

/// Options that control parser limits and strictness.
///
/// Every field has a default, so partial JSON such as `{"maxDepth": 50}`
/// deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserOptions {
    /// Deepest allowed ancestor-context stack.
    pub max_depth: usize,
    /// Fail when a top-level statement leaves operands unconsumed. When
    /// false the leftover operands are dropped with a warning diagnostic.
    pub strict_operand_stack: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: 200,
            strict_operand_stack: true,
        }
    }
}

impl ParserOptions {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParserOptions::default();
        assert_eq!(options.max_depth, 200);
        assert!(options.strict_operand_stack);
    }

    #[test]
    fn test_partial_json() {
        let options = ParserOptions::from_json(r#"{"maxDepth": 50}"#).unwrap();
        assert_eq!(options.max_depth, 50);
        assert!(options.strict_operand_stack);

        let options = ParserOptions::from_json(r#"{"strictOperandStack": false}"#).unwrap();
        assert!(!options.strict_operand_stack);
    }

    #[test]
    fn test_invalid_json() {
        assert!(ParserOptions::from_json(r#"{"maxDepth": "deep"}"#).is_err());
    }
}
