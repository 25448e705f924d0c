//! # Error Handling
//!
//! This module defines the centralized error type for the `pygame-ios`
//! library. It uses `thiserror` to build an `Error` enum covering every
//! failure the provisioning and merge steps can hit, with messages that
//! carry enough context (URL, path) to act on.
//!
//! "Expected" outcomes are deliberately *not* errors. An already-present
//! template or a version the release feed does not publish are reported
//! through [`crate::provision::ProvisionOutcome`] instead, so callers can
//! decide how to present them without matching on error strings.
//!
//! The `Result` alias is used throughout the library. The binary wraps these
//! errors in `anyhow` and adds context where it helps the user.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for pygame-ios operations
#[derive(Error, Debug)]
pub enum Error {
    /// A transport-level failure talking to the release feed (DNS, connect,
    /// TLS, truncated body) or an unexpected response from the release index.
    #[error("Network operation error: {url} - {message}")]
    Network { url: String, message: String },

    /// The template archive could not be read or extracted.
    #[error("Archive error for {}: {message}", path.display())]
    Archive { path: PathBuf, message: String },

    /// The designated entry script was not present after copying the project.
    #[error("Entry script not found after copy: {}", path.display())]
    EntryScriptMissing { path: PathBuf },

    /// A failure while creating, deleting or copying files.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// A path argument could not be used as given.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// An endpoint URL could not be parsed or joined.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON decoding error from one of the feed documents.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A zip container error, wrapped from `zip::result::ZipError`.
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
