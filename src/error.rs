//! # Error Handling
//!
//! This module defines the centralized error type for the `gito` library. It
//! uses the `thiserror` library to create an `Error` enum that covers every
//! failure mode the library reports, with messages that name the repository,
//! path or workspace involved.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the library.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Some conditions are deliberately absent from the enum:
//!
//! - An ambiguous lookup is not an error. The locator returns every match and
//!   leaves the choice to the caller.
//! - Remote URL normalization never fails; unrecognized input falls back to a
//!   best-effort `https://` form.
//! - Directory-listing failures during a search are absorbed by the locator
//!   and only show up in debug logs.

use thiserror::Error;

/// Main error type for gito operations
#[derive(Error, Debug)]
pub enum Error {
    /// No repository matched the query after alias, custom and tree search.
    #[error("{query:?} not found")]
    NotFound { query: String },

    /// A path expected to be a repository checkout has no `.git` marker.
    #[error("no repo @ {path:?}")]
    NotARepository { path: String },

    /// Something already occupies the destination of a clone.
    #[error("something already exists at {path:?}")]
    AlreadyExists { path: String },

    /// None of the resolved paths reported a remote URL.
    #[error("no URLs found for {query:?}")]
    NoRemoteUrls { query: String },

    /// The requested workspace is not present in the configuration.
    #[error("workspace {name:?} not found (available: {})", available.join(", "))]
    WorkspaceNotFound {
        name: String,
        available: Vec<String>,
    },

    /// An error occurred while decoding or validating the configuration.
    ///
    /// This error includes the specific issue and optionally a hint about how
    /// to fix it.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An error occurred while cloning a Git repository.
    #[error("Git clone error for {url}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    GitClone {
        url: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// An error occurred while executing a Git command inside a checkout.
    #[error("Git command failed in {dir}: {command} - {stderr}")]
    GitCommand {
        command: String,
        dir: String,
        stderr: String,
    },

    /// An error occurred with a path-related operation.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML error, wrapped from `serde_yaml::Error`.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
