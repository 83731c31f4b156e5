//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitPermalinkError`] which covers every way a link request can
//! fail. It uses `thiserror` for ergonomic error definitions and includes constructor
//! helpers for the variants that carry data.
//!
//! # Public API
//! - [`GitPermalinkError`]: Main error enum covering all failure modes
//! - [`FailureKind`]: The link failures, as reported in debug output
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitPermalinkError>`
//!
//! # Error Categories
//! - **Link failures**: No file, not a repository, no remotes, no remote URL, untracked file
//! - **Input errors**: Malformed line selections, unrecognized remote URLs
//! - **Environment errors**: git2 failures, I/O, browser and clipboard launch failures
//! - **Configuration errors**: Unreadable or unparseable config files

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-permalink
#[derive(Error, Debug)]
pub enum GitPermalinkError {
    // Link pipeline failures
    #[error("No active file. Pass the path of the file to link")]
    NoActiveEditor,

    #[error("Not in a git repository")]
    NotAGitRepository,

    #[error("Repository has no remotes configured")]
    NoRemotes,

    #[error("Remote '{remote}' has neither a fetch nor a push URL")]
    NoRemoteUrl { remote: String },

    #[error("File is untracked and has no remote URL: {path}")]
    UntrackedFile { path: String },

    // Input errors
    #[error("Invalid line selection: '{input}'. Use format like: 12, 12-15 or 12:15")]
    InvalidLineSelection { input: String },

    #[error("Unrecognized remote URL: '{url}'")]
    UnrecognizedRemoteUrl { url: String },

    #[error("Cannot build a link without a file path")]
    EmptyFilePath,

    #[error("File is outside the repository working tree: {path}")]
    FileOutsideRepository { path: PathBuf },

    // Git and I/O errors
    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Output collaborators
    #[error("Failed to open browser for '{url}': {source}")]
    BrowserOpenFailed { url: String, source: std::io::Error },

    #[error("No clipboard utility available (tried: {tried})")]
    ClipboardUnavailable { tried: String },

    // Configuration errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using GitPermalinkError
pub type Result<T> = std::result::Result<T, GitPermalinkError>;

/// The link failures a user can act on; each aborts a command without a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    NoActiveEditor,
    NotAGitRepository,
    NoRemotes,
    NoRemoteUrl,
    UntrackedFile,
}

impl GitPermalinkError {
    /// The link failure this error represents, if it is one
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::NoActiveEditor => Some(FailureKind::NoActiveEditor),
            Self::NotAGitRepository => Some(FailureKind::NotAGitRepository),
            Self::NoRemotes => Some(FailureKind::NoRemotes),
            Self::NoRemoteUrl { .. } => Some(FailureKind::NoRemoteUrl),
            Self::UntrackedFile { .. } => Some(FailureKind::UntrackedFile),
            _ => None,
        }
    }
}

impl GitPermalinkError {
    /// Create a no remote URL error for the named remote
    pub fn no_remote_url(remote: impl Into<String>) -> Self {
        Self::NoRemoteUrl {
            remote: remote.into(),
        }
    }

    /// Create an untracked file error
    pub fn untracked_file(path: impl Into<String>) -> Self {
        Self::UntrackedFile { path: path.into() }
    }

    /// Create an invalid line selection error
    pub fn invalid_line_selection(input: impl Into<String>) -> Self {
        Self::InvalidLineSelection {
            input: input.into(),
        }
    }

    /// Create an unrecognized remote URL error
    pub fn unrecognized_remote_url(url: impl Into<String>) -> Self {
        Self::UnrecognizedRemoteUrl { url: url.into() }
    }

    /// Create a file outside repository error
    pub fn file_outside_repository(path: impl Into<PathBuf>) -> Self {
        Self::FileOutsideRepository { path: path.into() }
    }

    /// Create a browser open failed error
    pub fn browser_open_failed(url: impl Into<String>, source: std::io::Error) -> Self {
        Self::BrowserOpenFailed {
            url: url.into(),
            source,
        }
    }

    /// Create a clipboard unavailable error listing the utilities that were tried
    pub fn clipboard_unavailable(tried: &[&str]) -> Self {
        Self::ClipboardUnavailable {
            tried: tried.join(", "),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }
}
