//! Key discovery under a base expression.

use crate::engine::Engine;
use crate::tester::ExpressionTester;
use tracing::debug;

/// A way of asking the engine for the keys under an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStrategy {
    /// `<base> | keys`, printed as a YAML list.
    Keys,
    /// `<base> | to_entries | .[] | .key`, one key per document.
    EntryKeys,
}

/// Strategies in the order they are tried.
pub const STRATEGIES: [KeyStrategy; 2] = [KeyStrategy::Keys, KeyStrategy::EntryKeys];

impl KeyStrategy {
    /// Builds the query this strategy runs for `base`.
    pub fn query(self, base: &str) -> String {
        match self {
            KeyStrategy::Keys => format!("{} | keys", base),
            KeyStrategy::EntryKeys => format!("{} | to_entries | .[] | .key", base),
        }
    }
}

/// Parses engine output into keys, one per line.
///
/// Blank lines and bare `-` markers are skipped and a leading `- ` list
/// marker is stripped.
pub fn parse_keys(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != "-")
        .map(|line| line.strip_prefix("- ").unwrap_or(line).to_string())
        .collect()
}

/// Discovers the keys under `base`.
///
/// Tries each strategy in [`STRATEGIES`] until one yields at least one key.
/// Engine failures are not surfaced; when nothing works the result is empty.
pub fn discover_keys<E: Engine>(tester: &ExpressionTester<E>, base: &str) -> Vec<String> {
    STRATEGIES
        .iter()
        .find_map(|strategy| {
            let query = strategy.query(base);
            match tester.test(&query) {
                Ok(output) => {
                    let keys = parse_keys(&output);
                    if keys.is_empty() {
                        debug!(?strategy, "key discovery returned no keys");
                        None
                    } else {
                        Some(keys)
                    }
                }
                Err(e) => {
                    debug!(?strategy, error = %e, "key discovery failed");
                    None
                }
            }
        })
        .unwrap_or_default()
}
