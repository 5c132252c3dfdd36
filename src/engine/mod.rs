//! External query engine abstraction.
//!
//! The rest of the crate never spawns processes directly; it talks to an
//! [`Engine`], which keeps the tester and the driver testable against a fake.
//! [`YqEngine`] is the production implementation that shells out to `yq`.

pub mod error;
pub mod yq;

use std::path::Path;

pub use error::EngineError;
pub use yq::YqEngine;

/// Evaluates query expressions against a YAML document.
pub trait Engine {
    /// Runs `expression` against the document at `document`.
    ///
    /// Returns the raw, untrimmed output on success. Any failure reported by
    /// the engine (launch failure, non-zero exit) is an `Err`.
    fn run(&self, expression: &str, document: &Path) -> Result<String, EngineError>;
}

impl<E: Engine + ?Sized> Engine for &E {
    fn run(&self, expression: &str, document: &Path) -> Result<String, EngineError> {
        (**self).run(expression, document)
    }
}
