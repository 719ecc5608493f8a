//! Error types for suburb-search.
//!
//! A small hierarchical taxonomy built with `thiserror`. Every layer owns its
//! error enum and converts into [`AppError`] via `From`, so `main` composes
//! them with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned from `main`
//!   - [`CandidateError`] - candidate file could not be read
//!   - [`ConfigError`](crate::config::ConfigError) - config file unreadable or malformed
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing subscriber setup failed
//!   - [`TuiError`](crate::view::TuiError) - terminal I/O failed
//!
//! # Recovery Strategy
//!
//! All of these are fatal and happen at startup or in the terminal shell.
//! The autocomplete widget itself never produces errors: empty queries,
//! zero matches and empty candidate sets all degrade to a closed dropdown.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Domain-specific errors convert into this type automatically, which keeps
/// `main` a straight line of `?` calls.
#[derive(Debug, Error)]
pub enum AppError {
    /// The configured candidate file could not be loaded.
    ///
    /// Only raised when a file was explicitly requested (config, env or CLI).
    /// The built-in suburb list cannot fail.
    #[error("Failed to load candidates: {0}")]
    Candidates(#[from] CandidateError),

    /// Configuration file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup, rendering or event polling failed.
    ///
    /// **Recovery**: the terminal is restored before this reaches `main`,
    /// so the message can be printed to stderr safely.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Errors encountered when loading a candidate list from disk.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CandidateError {
    /// The candidate file could not be read (missing, permissions, not UTF-8).
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use suburb_search::model::error::CandidateError;
    ///
    /// let err = CandidateError::Read {
    ///     path: PathBuf::from("/tmp/suburbs.txt"),
    ///     reason: "No such file or directory".to_string(),
    /// };
    /// assert!(err.to_string().contains("/tmp/suburbs.txt"));
    /// ```
    #[error("Failed to read candidate file at {path}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O failure, rendered.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_error_converts_into_app_error() {
        let err = CandidateError::Read {
            path: PathBuf::from("/tmp/x.txt"),
            reason: "denied".to_string(),
        };
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Candidates(_)));
        assert!(app.to_string().contains("Failed to load candidates"));
    }

    #[test]
    fn app_error_from_tui_io_error() {
        let io_err = std::io::Error::other("broken pipe");
        let app: AppError = crate::view::TuiError::from(io_err).into();
        assert!(app.to_string().contains("broken pipe"));
    }
}
