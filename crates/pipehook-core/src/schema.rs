//! Variable schema documents.
//!
//! A JSON-Schema-like description of the user variables a hook accepts,
//! attached to its metadata and returned by discovery. Purely descriptive:
//! the host uses it to collect and validate input before invoking build;
//! the synthesizer itself only consults its override table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema for the full variable mapping of one hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableSchema {
    /// Always `"object"` for a variable mapping.
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Per-variable specs, keyed by variable name. A `BTreeMap` keeps the
    /// advertised order identical across calls.
    pub properties: BTreeMap<String, VariableSpec>,
}

impl VariableSchema {
    /// Build an object schema from (name, spec) pairs.
    pub fn object<I, S>(vars: I) -> Self
    where
        I: IntoIterator<Item = (S, VariableSpec)>,
        S: Into<String>,
    {
        Self {
            schema_type: "object".to_string(),
            properties: vars.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Whether a variable name is declared.
    pub fn declares(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }
}

/// Type and constraints for one variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableSpec {
    /// Variable type ("string", "number", ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Maximum accepted length for string variables. Advisory to the
    /// caller; build does not enforce it.
    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
}

impl VariableSpec {
    /// A string variable with no constraints.
    pub fn string() -> Self {
        Self {
            kind: "string".to_string(),
            max_length: None,
        }
    }

    /// Set the maximum length constraint.
    pub fn with_max_length(mut self, max: i64) -> Self {
        self.max_length = Some(max);
        self
    }
}
