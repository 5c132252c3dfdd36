//! A fake query engine for integration tests.
//!
//! `FakeEngine` answers the handful of expression shapes the tool generates
//! against an in-memory YAML document, so no `yq` binary is needed.

#![allow(dead_code)]

use serde_yaml::Value;
use std::cell::RefCell;
use std::collections::HashSet;
use std::path::Path;
use yq_continuations::engine::{Engine, EngineError};

pub struct FakeEngine {
    root: Value,
    failing: HashSet<String>,
    calls: RefCell<Vec<String>>,
}

impl FakeEngine {
    pub fn new(yaml: &str) -> Self {
        FakeEngine {
            root: serde_yaml::from_str(yaml).expect("test document should parse"),
            failing: HashSet::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Forces `expression` to fail regardless of the document.
    pub fn failing(mut self, expression: &str) -> Self {
        self.failing.insert(expression.to_string());
        self
    }

    /// Expressions run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn fail(expression: &str) -> EngineError {
        EngineError::Failed {
            expression: expression.to_string(),
            code: Some(1),
            stderr: format!("Error: cannot evaluate {}", expression),
        }
    }

    fn dump(value: &Value) -> String {
        match value {
            Value::String(s) => format!("{}\n", s),
            other => serde_yaml::to_string(other).expect("value should serialize"),
        }
    }

    fn key_names(&self, expression: &str) -> Result<Vec<String>, EngineError> {
        match &self.root {
            Value::Mapping(map) => Ok(map
                .keys()
                .map(|k| Self::dump(k).trim().to_string())
                .collect()),
            Value::Sequence(items) => Ok((0..items.len()).map(|i| i.to_string()).collect()),
            _ => Err(Self::fail(expression)),
        }
    }

    fn lookup(&self, key: &str, expression: &str) -> Result<String, EngineError> {
        match &self.root {
            Value::Mapping(map) => Ok(map
                .get(Value::String(key.to_string()))
                .map(Self::dump)
                .unwrap_or_else(|| "null\n".to_string())),
            _ => Err(Self::fail(expression)),
        }
    }

    fn eval(&self, expression: &str) -> Result<String, EngineError> {
        match expression {
            "." => return Ok(Self::dump(&self.root)),
            ". | keys" => {
                let keys = self.key_names(expression)?;
                return Ok(keys.iter().map(|k| format!("- {}\n", k)).collect());
            }
            ". | to_entries | .[] | .key" => {
                let keys = self.key_names(expression)?;
                return Ok(keys.iter().map(|k| format!("{}\n", k)).collect());
            }
            ".| length" => {
                let len = match &self.root {
                    Value::Mapping(map) => map.len(),
                    Value::Sequence(items) => items.len(),
                    Value::String(s) => s.chars().count(),
                    Value::Null => 0,
                    _ => return Err(Self::fail(expression)),
                };
                return Ok(format!("{}\n", len));
            }
            _ => {}
        }

        if let Some(key) = expression
            .strip_prefix(". | has(\"")
            .and_then(|rest| rest.strip_suffix("\")"))
        {
            return match &self.root {
                Value::Mapping(map) => Ok(format!(
                    "{}\n",
                    map.contains_key(Value::String(key.to_string()))
                )),
                _ => Err(Self::fail(expression)),
            };
        }

        if let Some(key) = expression
            .strip_prefix(".[\"")
            .and_then(|rest| rest.strip_suffix("\"]"))
        {
            return self.lookup(key, expression);
        }

        if let Some(key) = expression.strip_prefix('.') {
            if !key.is_empty() && key.chars().all(|c| c.is_alphanumeric() || c == '_') {
                return self.lookup(key, expression);
            }
        }

        Err(Self::fail(expression))
    }
}

impl Engine for FakeEngine {
    fn run(&self, expression: &str, _document: &Path) -> Result<String, EngineError> {
        self.calls.borrow_mut().push(expression.to_string());
        if self.failing.contains(expression) {
            return Err(Self::fail(expression));
        }
        self.eval(expression)
    }
}
