//! # Adapter Engine
//!
//! The per-field apply loop: for every schema key, fetch a raw value from
//! the source document, validate it, reshape it, and fall back to the
//! field's default when validation rejects or reshape fails.
//!
//! ## Guarantees
//!
//! - The output key set always equals the schema key set exactly. There is
//!   no partially-populated result: one failing field costs only that
//!   field its value, never the whole pass.
//! - Source document and schema are never mutated; the result map is
//!   freshly allocated per call and owned by the caller.
//! - Only reshape failures are absorbed. Panics from caller-supplied
//!   callbacks propagate: a validator that panics violated its contract,
//!   and the engine offers no recovery for that.
//! - Diagnostics are advisory. They fire only when the injected
//!   [`RunMode`] enables them and never change the result.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::diag::{DiagnosticSink, TracingSink};
use crate::mode::RunMode;
use crate::path::{first_value_at_paths, resolve_path};
use crate::schema::{Schema, ValuePaths};

/// Schema-driven adapter over JSON documents.
///
/// Holds only configuration (run mode and diagnostic sink); all per-call
/// state lives on the stack, so one adapter may serve concurrent calls.
#[derive(Clone)]
pub struct Adapter {
    mode: RunMode,
    sink: Arc<dyn DiagnosticSink>,
}

impl Adapter {
    /// Adapter with the given mode and the default `tracing`-backed sink.
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            sink: Arc::new(TracingSink),
        }
    }

    /// Adapter with an explicit diagnostic sink.
    pub fn with_sink(mode: RunMode, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { mode, sink }
    }

    /// Run the schema against a source document.
    ///
    /// Every schema key appears in the returned map, carrying either the
    /// reshaped value or the field's default. See the module docs for the
    /// full failure policy.
    pub fn adapt(&self, data: &Value, schema: &Schema) -> Map<String, Value> {
        if self.mode.diagnostics_enabled() {
            self.sink.info(&format!(
                "will try to adapt keys [{}] from source: {data}",
                schema.keys().collect::<Vec<_>>().join(", ")
            ));
        }

        let mut result = Map::with_capacity(schema.len());

        for (key, field) in schema.iter() {
            let raw = match field.value_paths() {
                ValuePaths::Single(path) => {
                    // Absent surfaces to the callbacks as null; JSON has
                    // no second "missing" value to hand them.
                    resolve_path(data, path).unwrap_or(Value::Null)
                }
                ValuePaths::Ordered(paths) => first_value_at_paths(data, paths),
            };

            let value = if (field.validate())(&raw, data) {
                match (field.reshape())(&raw, data) {
                    Ok(reshaped) => reshaped,
                    Err(error) => {
                        if self.mode.diagnostics_enabled() {
                            self.sink.error(&format!(
                                "failed to reshape value for key '{key}': {error:#}"
                            ));
                        }
                        field.default_value().clone()
                    }
                }
            } else {
                if self.mode.diagnostics_enabled() {
                    self.sink
                        .error(&format!("invalidated value for key '{key}': {raw}"));
                }
                field.default_value().clone()
            };

            result.insert(key.to_string(), value);
        }

        result
    }

    /// Adapt and deserialize the result into a typed shape.
    ///
    /// The engine performs no structural verification beyond what `T`'s
    /// `Deserialize` impl enforces; a schema whose output does not match
    /// `T` surfaces here as a `serde_json::Error`.
    pub fn adapt_as<T: DeserializeOwned>(
        &self,
        data: &Value,
        schema: &Schema,
    ) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.adapt(data, schema)))
    }
}

impl Default for Adapter {
    fn default() -> Self {
        Self::new(RunMode::Production)
    }
}

impl std::fmt::Debug for Adapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Adapter")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

/// Adapt with default configuration (production mode, diagnostics off).
pub fn adapt(data: &Value, schema: &Schema) -> Map<String, Value> {
    Adapter::default().adapt(data, schema)
}
