//! Runs single expressions against a document and classifies their output.

use crate::engine::{Engine, EngineError};
use std::path::{Path, PathBuf};

/// The token the engine prints when an expression selects nothing.
pub const NULL_TOKEN: &str = "null";

/// Binds an [`Engine`] to one document so expressions can be tested in turn.
pub struct ExpressionTester<E> {
    engine: E,
    document: PathBuf,
}

impl<E: Engine> ExpressionTester<E> {
    pub fn new<P: AsRef<Path>>(engine: E, document: P) -> Self {
        ExpressionTester {
            engine,
            document: document.as_ref().to_path_buf(),
        }
    }

    /// Path of the document expressions are run against.
    pub fn document(&self) -> &Path {
        &self.document
    }

    /// Runs `expression` and returns its output with surrounding whitespace
    /// trimmed.
    ///
    /// # Errors
    ///
    /// Returns the engine's error when the expression could not be evaluated.
    /// No output is returned in that case.
    pub fn test(&self, expression: &str) -> Result<String, EngineError> {
        let output = self.engine.run(expression, &self.document)?;
        Ok(output.trim().to_string())
    }
}

/// Returns true when `output` is worth reporting: non-empty and not the
/// engine's "no value" token.
pub fn is_useful(output: &str, null_token: &str) -> bool {
    !output.is_empty() && output != null_token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_useful() {
        assert!(is_useful("1", NULL_TOKEN));
        assert!(is_useful("- a\n- b", NULL_TOKEN));
        assert!(!is_useful("", NULL_TOKEN));
        assert!(!is_useful("null", NULL_TOKEN));
    }

    #[test]
    fn test_is_useful_custom_null_token() {
        assert!(is_useful("null", "~"));
        assert!(!is_useful("~", "~"));
    }

    #[test]
    fn test_null_inside_output_is_useful() {
        assert!(is_useful("null\nnull", NULL_TOKEN));
    }
}
