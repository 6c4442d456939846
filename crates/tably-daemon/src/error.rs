//! Error types for the daemon binary.
//!
//! [`DaemonError`] is the top-level error type that wraps all possible
//! failure modes during startup, providing a single type `main` can
//! propagate with `?`.

/// Top-level error for the daemon binary.
#[derive(Debug, thiserror::Error)]
pub enum DaemonError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: tably_core::config::ConfigError,
    },

    /// The rollover schedule is invalid.
    #[error("schedule error: {source}")]
    Schedule {
        /// The underlying schedule error.
        #[from]
        source: tably_core::rollover::ScheduleError,
    },

    /// The server failed to start.
    #[error("server error: {source}")]
    Server {
        /// The underlying startup error.
        #[from]
        source: tably_server::startup::StartupError,
    },
}
