//! yq-continuations - suggests next steps for a yq expression.
//!
//! Given a YAML document and a base expression, the crate enumerates candidate
//! continuations (catalog suffixes and keys found under the base expression),
//! runs each one through an external query engine, and keeps the ones that
//! produce output.

pub mod config;
pub mod continuation;
pub mod driver;
pub mod engine;
pub mod tester;
