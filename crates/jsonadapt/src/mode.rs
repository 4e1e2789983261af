//! # Run Mode
//!
//! The advisory diagnostic channel is only active in development and test
//! configurations. Rather than reading ambient process state inside the
//! engine, the mode is parsed once and injected into [`crate::Adapter`],
//! so tests control it without touching process-wide environment.

/// Execution mode governing whether advisory diagnostics are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RunMode {
    /// Local development; diagnostics on.
    Development,
    /// Automated test runs; diagnostics on.
    Test,
    /// Everything else; diagnostics off.
    #[default]
    Production,
}

/// Environment variable consulted by [`RunMode::from_env`].
pub const RUN_MODE_ENV_VAR: &str = "JSONADAPT_ENV";

impl RunMode {
    /// Map an environment indicator string to a mode.
    ///
    /// Recognizes `"development"` and `"test"`; any other value, including
    /// the empty string, is `Production`. Unrecognized indicators are not
    /// an error: an unset or exotic environment simply means diagnostics
    /// stay off.
    pub fn from_indicator(indicator: &str) -> Self {
        match indicator {
            "development" => Self::Development,
            "test" => Self::Test,
            _ => Self::Production,
        }
    }

    /// Read the mode from the `JSONADAPT_ENV` environment variable.
    ///
    /// Convenience for binaries; the engine itself never reads the
    /// environment.
    pub fn from_env() -> Self {
        std::env::var(RUN_MODE_ENV_VAR)
            .map(|value| Self::from_indicator(&value))
            .unwrap_or(Self::Production)
    }

    /// Whether the diagnostic channel is active in this mode.
    pub fn diagnostics_enabled(self) -> bool {
        matches!(self, Self::Development | Self::Test)
    }
}
