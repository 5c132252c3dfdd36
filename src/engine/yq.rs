//! Process-backed engine that runs the `yq` command line tool.

use super::{Engine, EngineError};
use std::path::Path;
use std::process::Command;

/// Default name of the engine binary, resolved through `PATH`.
pub const DEFAULT_PROGRAM: &str = "yq";

/// Runs expressions by invoking `<program> <expression> <document>`.
///
/// Each call spawns one process and waits for it to exit. There is no
/// timeout; a hung engine blocks the caller.
#[derive(Debug, Clone)]
pub struct YqEngine {
    program: String,
}

impl YqEngine {
    /// Creates an engine that runs the given program.
    pub fn new(program: impl Into<String>) -> Self {
        YqEngine {
            program: program.into(),
        }
    }

    /// Returns the program this engine invokes.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for YqEngine {
    fn default() -> Self {
        YqEngine::new(DEFAULT_PROGRAM)
    }
}

impl Engine for YqEngine {
    fn run(&self, expression: &str, document: &Path) -> Result<String, EngineError> {
        let output = Command::new(&self.program)
            .arg(expression)
            .arg(document)
            .output()
            .map_err(|e| EngineError::Spawn {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            return Err(EngineError::Failed {
                expression: expression.to_string(),
                code: output.status.code(),
                stderr,
            });
        }

        // Combined output: stdout first, then anything the engine wrote to stderr.
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&stderr);
        Ok(combined)
    }
}
