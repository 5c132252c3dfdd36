//! Candidate continuation generation.
//!
//! A base expression is extended with every suffix in the fixed
//! [`catalog::SUFFIXES`] list. When the document is available, the keys found
//! under the base expression each add three more candidates: dotted access,
//! bracket access, and a `has(...)` check.
//!
//! # Examples
//!
//! ```
//! use yq_continuations::continuation::generate_from_catalog;
//!
//! let candidates = generate_from_catalog(".");
//! assert_eq!(candidates[0], ".[]");
//! assert!(candidates.contains(&".| length".to_string()));
//! ```

pub mod catalog;
pub mod keys;

use crate::engine::Engine;
use crate::tester::ExpressionTester;
use catalog::{join, quote_key, SUFFIXES};

pub use keys::{discover_keys, KeyStrategy};

/// Candidates built from the suffix catalog alone, in catalog order.
pub fn generate_from_catalog(base: &str) -> Vec<String> {
    SUFFIXES.iter().map(|suffix| join(base, suffix)).collect()
}

/// The three candidates derived from a single key.
pub fn key_candidates(base: &str, key: &str) -> [String; 3] {
    let quoted = quote_key(key);
    [
        join(base, &format!(".{}", key)),
        join(base, &format!(".[{}]", quoted)),
        format!("{} | has({})", base, quoted),
    ]
}

/// Generates every candidate continuation of `base`.
///
/// Catalog candidates come first. If `document` is given, key-derived
/// candidates follow in the order the keys were discovered. The result is
/// deterministic for a given base and document.
pub fn generate<E: Engine>(base: &str, document: Option<&ExpressionTester<E>>) -> Vec<String> {
    let mut candidates = generate_from_catalog(base);

    if let Some(tester) = document {
        for key in discover_keys(tester, base) {
            candidates.extend(key_candidates(base, &key));
        }
    }

    candidates
}
