//! # Error Types
//!
//! The adapter engine itself is infallible: absence resolves to sentinels,
//! validation rejections and reshape failures resolve to defaults. What
//! remains is the contract-violation class, which surfaces at schema
//! construction time and is never absorbed.

use thiserror::Error;

/// Error building a [`crate::Schema`].
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Two field definitions were registered under the same output key.
    /// Output keys must be unique; silently overwriting one definition
    /// with another would hide a caller bug.
    #[error("duplicate schema key '{0}'")]
    DuplicateKey(String),
}
