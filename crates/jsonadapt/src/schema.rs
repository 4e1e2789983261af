//! # Schema Model
//!
//! A [`Schema`] is a declarative description of the output shape: an
//! insertion-ordered mapping from output key to [`FieldDef`]. Each field
//! definition names where to look in the source document, how to validate
//! what was found, how to reshape it, and what to fall back to.
//!
//! ## Invariants
//!
//! - Output keys are unique; duplicates are rejected at construction
//!   ([`SchemaError::DuplicateKey`]) rather than silently overwritten.
//! - A `FieldDef` is immutable once built. The engine reads it; nothing
//!   mutates it, so one schema can drive any number of adaptations.
//! - All four members of a field definition are mandatory by construction;
//!   there is no partially-specified field.

use std::fmt;

use serde_json::Value;

use crate::error::SchemaError;

/// Validation predicate: receives the extracted raw value and the entire
/// source document, so validation may depend on cross-field context.
pub type ValidateFn = Box<dyn Fn(&Value, &Value) -> bool + Send + Sync>;

/// Reshape transform: converts a validated raw value into its final output
/// form. An `Err` counts as a recoverable reshape failure and resolves to
/// the field's default.
pub type ReshapeFn = Box<dyn Fn(&Value, &Value) -> anyhow::Result<Value> + Send + Sync>;

/// Where to look for a field's raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValuePaths {
    /// One dotted path, resolved directly; a miss is Absent.
    Single(String),
    /// Ordered candidates, first truthy resolution wins; a total miss is
    /// the Null sentinel.
    Ordered(Vec<String>),
}

impl From<&str> for ValuePaths {
    fn from(path: &str) -> Self {
        Self::Single(path.to_string())
    }
}

impl From<String> for ValuePaths {
    fn from(path: String) -> Self {
        Self::Single(path)
    }
}

impl From<Vec<String>> for ValuePaths {
    fn from(paths: Vec<String>) -> Self {
        Self::Ordered(paths)
    }
}

impl From<Vec<&str>> for ValuePaths {
    fn from(paths: Vec<&str>) -> Self {
        Self::Ordered(paths.into_iter().map(String::from).collect())
    }
}

/// How to extract, validate, and reshape one output field.
pub struct FieldDef {
    value_paths: ValuePaths,
    validate: ValidateFn,
    reshape: ReshapeFn,
    default: Value,
}

impl FieldDef {
    /// Build a field definition. All four members are required; there is
    /// no builder with optional parts because a field with a missing
    /// validator or reshape has no meaningful behavior.
    pub fn new<P, V, R>(value_paths: P, validate: V, reshape: R, default: Value) -> Self
    where
        P: Into<ValuePaths>,
        V: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
        R: Fn(&Value, &Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self {
            value_paths: value_paths.into(),
            validate: Box::new(validate),
            reshape: Box::new(reshape),
            default,
        }
    }

    /// The path or ordered path candidates for this field.
    pub fn value_paths(&self) -> &ValuePaths {
        &self.value_paths
    }

    /// The validation predicate.
    pub fn validate(&self) -> &ValidateFn {
        &self.validate
    }

    /// The reshape transform.
    pub fn reshape(&self) -> &ReshapeFn {
        &self.reshape
    }

    /// The fallback value used on validation rejection or reshape failure.
    pub fn default_value(&self) -> &Value {
        &self.default
    }
}

impl fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("value_paths", &self.value_paths)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

/// Insertion-ordered mapping from output key to [`FieldDef`].
///
/// Iteration order is the order fields were registered. Consumers must
/// not rely on key order for correctness, but a stable order keeps
/// diagnostics and serialized output deterministic.
#[derive(Debug, Default)]
pub struct Schema {
    fields: Vec<(String, FieldDef)>,
}

impl Schema {
    /// Empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field definition under an output key.
    ///
    /// Consumes and returns the schema for chaining. Fails if the key is
    /// already registered.
    pub fn field(mut self, key: impl Into<String>, def: FieldDef) -> Result<Self, SchemaError> {
        let key = key.into();
        if self.fields.iter().any(|(existing, _)| *existing == key) {
            return Err(SchemaError::DuplicateKey(key));
        }
        self.fields.push((key, def));
        Ok(self)
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Output keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// Fields in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDef)> {
        self.fields.iter().map(|(key, def)| (key.as_str(), def))
    }
}
