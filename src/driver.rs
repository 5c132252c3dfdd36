//! The exploration run: validate the base, test every candidate, report.

use crate::continuation::generate;
use crate::engine::{Engine, EngineError};
use crate::tester::{is_useful, ExpressionTester, NULL_TOKEN};
use std::fmt;
use std::io::{self, Write};
use tracing::{debug, info};

/// Settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Output treated as "no value".
    pub null_token: String,
    /// Add key-derived candidates by querying the document.
    pub discover_keys: bool,
    /// Print the base expression's own output before the continuations.
    pub show_base_output: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            null_token: NULL_TOKEN.to_string(),
            discover_keys: true,
            show_base_output: true,
        }
    }
}

/// Errors that end a run.
#[derive(Debug)]
pub enum DriverError {
    /// The base expression itself failed against the engine.
    InvalidBase {
        expression: String,
        source: EngineError,
    },
    /// The report could not be written.
    Io(io::Error),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::InvalidBase { .. } => write!(f, "Base expression is invalid"),
            DriverError::Io(e) => write!(f, "Failed to write report: {}", e),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::InvalidBase { source, .. } => Some(source),
            DriverError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for DriverError {
    fn from(e: io::Error) -> Self {
        DriverError::Io(e)
    }
}

/// Explores continuations of `base` and writes the report to `out`.
///
/// The base expression is tested first; if it fails nothing else runs. Each
/// candidate is then tested one at a time and the useful ones are written as
/// `Continuation: <expr>` lines as soon as they are found.
///
/// Returns the continuations in the order they were reported.
pub fn run<E: Engine, W: Write>(
    tester: &ExpressionTester<E>,
    base: &str,
    options: &RunOptions,
    out: &mut W,
) -> Result<Vec<String>, DriverError> {
    writeln!(out, "Testing potential YQ expression continuations:")?;
    writeln!(out, "----------------------------------------------")?;

    let base_output = tester
        .test(base)
        .map_err(|source| DriverError::InvalidBase {
            expression: base.to_string(),
            source,
        })?;

    if options.show_base_output {
        writeln!(out, "Output of base expression:")?;
        writeln!(out, "{}", base_output)?;
    }

    let candidates = if options.discover_keys {
        generate(base, Some(tester))
    } else {
        generate::<E>(base, None)
    };
    info!(base, candidates = candidates.len(), "testing candidates");

    let mut continuations = Vec::new();
    for candidate in candidates {
        match tester.test(&candidate) {
            Ok(output) if is_useful(&output, &options.null_token) => {
                writeln!(out, "Continuation: {}", candidate)?;
                continuations.push(candidate);
            }
            Ok(_) => debug!(%candidate, "discarded: empty or null output"),
            Err(e) => debug!(%candidate, error = %e, "discarded: engine failure"),
        }
    }

    info!(base, found = continuations.len(), "exploration finished");
    Ok(continuations)
}
