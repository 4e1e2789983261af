//! # jsonadapt — Declarative JSON Adaptation
//!
//! Decouples external data shapes (API responses, third-party payloads)
//! from the shape an application wants to consume. A [`Schema`] declares,
//! per output field, where to look in the source document (one dotted path
//! or an ordered list of candidates), how to validate the extracted value,
//! how to reshape it, and what default to fall back to when validation
//! rejects or reshape fails.
//!
//! ## Key Design Principles
//!
//! 1. **Fixed record for field definitions.** A [`FieldDef`] always has
//!    all four members; a partially-specified field is unrepresentable.
//! 2. **Failure is local.** A rejected or un-reshapeable field costs only
//!    that field its value. The output key set always equals the schema
//!    key set.
//! 3. **No hidden globals.** The diagnostic channel is driven by an
//!    injected [`RunMode`] and a pluggable [`DiagnosticSink`]; the engine
//!    never reads the process environment on its own.
//! 4. **Distinct sentinels.** A path that fails to resolve is Absent
//!    (`None` from [`resolve_path`]); a multi-path lookup with no truthy
//!    hit is Null ([`first_value_at_paths`]).
//!
//! ## Sharp Edge
//!
//! Path traversal is truthiness-gated, a legacy compatibility constraint:
//! a stored `0`, `""`, `false`, or `null` at a non-terminal path position
//! reads as Absent. See [`path`] for the full story.
//!
//! ## Example
//!
//! ```
//! use jsonadapt::{adapt, FieldDef, Schema};
//! use serde_json::{json, Value};
//!
//! let data = json!({"user": {"name": "john"}});
//!
//! let schema = Schema::new().field(
//!     "firstname",
//!     FieldDef::new(
//!         vec!["user.name", "firstName"],
//!         |value, _doc| value.is_string(),
//!         |value, _doc| {
//!             let s = value.as_str().unwrap_or_default();
//!             let mut chars = s.chars();
//!             Ok(match chars.next() {
//!                 Some(c) => Value::from(c.to_uppercase().collect::<String>() + chars.as_str()),
//!                 None => Value::from(""),
//!             })
//!         },
//!         Value::Null,
//!     ),
//! )?;
//!
//! let result = adapt(&data, &schema);
//! assert_eq!(result["firstname"], json!("John"));
//! # Ok::<(), jsonadapt::SchemaError>(())
//! ```
//!
//! ## Crate Policy
//!
//! - Fully synchronous, no I/O, no shared mutable state across calls.
//! - Source document and schema are read-only from the engine's
//!   perspective; the result map is freshly allocated per call.
//! - No `unsafe` code; no `panic!()` or `.unwrap()` outside tests.

pub mod diag;
pub mod engine;
pub mod error;
pub mod mode;
pub mod path;
pub mod schema;

// Re-export primary types for ergonomic imports.
pub use diag::{DiagnosticSink, NullSink, TracingSink};
pub use engine::{adapt, Adapter};
pub use error::SchemaError;
pub use mode::{RunMode, RUN_MODE_ENV_VAR};
pub use path::{first_value_at_paths, is_truthy, resolve_path};
pub use schema::{FieldDef, ReshapeFn, Schema, ValidateFn, ValuePaths};
