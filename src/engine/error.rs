//! Error types for query engine invocations.

use std::fmt;

/// Errors that can occur when running an expression through the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The engine binary could not be launched.
    Spawn { program: String, message: String },
    /// The engine ran but exited unsuccessfully.
    Failed {
        expression: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Spawn { program, message } => {
                write!(f, "Failed to run '{}': {}", program, message)
            }
            EngineError::Failed {
                expression,
                code: Some(code),
                stderr,
            } => write!(
                f,
                "Expression '{}' failed with exit code {}: {}",
                expression,
                code,
                stderr.trim()
            ),
            EngineError::Failed {
                expression,
                code: None,
                stderr,
            } => write!(
                f,
                "Expression '{}' was terminated by a signal: {}",
                expression,
                stderr.trim()
            ),
        }
    }
}

impl std::error::Error for EngineError {}
