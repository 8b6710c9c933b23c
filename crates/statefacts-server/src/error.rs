//! Error types for the server binary.
//!
//! [`AppError`] is the top-level error type that wraps all possible
//! failure modes during startup and serving.

/// Top-level error for the server binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: statefacts_core::ConfigError,
    },

    /// The reference dataset could not be loaded.
    #[error("dataset error: {source}")]
    Dataset {
        /// The underlying dataset error.
        #[from]
        source: statefacts_core::DatasetError,
    },

    /// Connecting to the fact store failed.
    #[error("fact store error: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: statefacts_db::DbError,
    },

    /// The HTTP server failed to start or stopped with an error.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: statefacts_api::ServerError,
    },

    /// The logging subscriber could not be installed.
    #[error("logging error: {message}")]
    Logging {
        /// Description of the failure.
        message: String,
    },
}
