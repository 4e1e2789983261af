//! # Diagnostic Sink
//!
//! Advisory notifications emitted by the adapter engine: which keys it is
//! about to adapt, which values were rejected by validation, and which
//! reshape callbacks failed. Notifications are informational only and
//! never influence control flow or the returned result.
//!
//! The sink is pluggable so tests can assert on emitted diagnostics
//! without capturing log output. The default is [`TracingSink`], which
//! forwards to the `tracing` ecosystem; whoever owns `main` installs the
//! subscriber.

/// Receiver for advisory diagnostics from the adapter engine.
pub trait DiagnosticSink: Send + Sync {
    /// Informational notification (e.g. "about to adapt").
    fn info(&self, message: &str);

    /// Problem notification (validation rejection, reshape failure).
    fn error(&self, message: &str);
}

/// Default sink: forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: "jsonadapt", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "jsonadapt", "{message}");
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

/// Test support: a sink that records diagnostics for assertion.
///
/// Shared by this crate's unit tests and the integration suite; not part
/// of the supported API surface.
#[doc(hidden)]
pub mod testing {
    use std::sync::{Mutex, PoisonError};

    use super::DiagnosticSink;

    /// Records every diagnostic for later assertion.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        /// Messages received via `info`.
        pub infos: Mutex<Vec<String>>,
        /// Messages received via `error`.
        pub errors: Mutex<Vec<String>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn info(&self, message: &str) {
            self.infos
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(message.to_string());
        }
    }
}
