//! # Repository Fetching and Remote Lookup
//!
//! This module provides the `RepositoryManager`, the single place where gito
//! touches git itself: cloning a repository into its computed destination and
//! asking an existing checkout for its `origin` URL.
//!
//! ## Design
//!
//! The manager is built on the **`GitOperations`** trait, which abstracts
//! the three git commands gito needs. In the application,
//! `DefaultGitOperations` shells out to the system `git` binary. In tests a
//! fake implementation records calls and serves canned remotes, so the
//! orchestration logic can be exercised without network access or a git
//! installation.

use std::path::Path;

use log::info;

use crate::error::{Error, Result};

/// Trait for git operations - allows mocking in tests
pub trait GitOperations: Send + Sync {
    /// Clone `url` into `target_dir`.
    fn clone_repo(&self, url: &str, target_dir: &Path) -> Result<()>;

    /// Initialize and update all submodules of the checkout at `repo_dir`.
    fn update_submodules(&self, repo_dir: &Path) -> Result<()>;

    /// The raw `origin` remote string of the checkout at `repo_dir`.
    fn remote_url(&self, repo_dir: &Path) -> Result<String>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command to perform real Git operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultGitOperations;

impl GitOperations for DefaultGitOperations {
    fn clone_repo(&self, url: &str, target_dir: &Path) -> Result<()> {
        crate::git::clone(url, target_dir)
    }

    fn update_submodules(&self, repo_dir: &Path) -> Result<()> {
        crate::git::update_submodules(repo_dir)
    }

    fn remote_url(&self, repo_dir: &Path) -> Result<String> {
        crate::git::remote_url(repo_dir)
    }
}

/// Options for [`RepositoryManager::fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Run a recursive submodule update after cloning.
    pub submodules: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { submodules: true }
    }
}

/// The main entry point for fetching repositories and reading their remotes.
pub struct RepositoryManager {
    git_ops: Box<dyn GitOperations>,
}

impl RepositoryManager {
    /// Creates a `RepositoryManager` backed by the system `git` binary.
    pub fn new() -> Self {
        Self::with_operations(Box::new(DefaultGitOperations))
    }

    /// Creates a `RepositoryManager` with a custom `GitOperations`
    /// implementation.
    pub fn with_operations(git_ops: Box<dyn GitOperations>) -> Self {
        Self { git_ops }
    }

    /// Clone `url` into `destination`.
    ///
    /// This method will:
    /// 1.  Refuse to run if anything already exists at `destination`.
    /// 2.  Clone the repository, creating parent directories as needed.
    /// 3.  Optionally fetch all submodules recursively.
    pub fn fetch(&self, url: &str, destination: &Path, options: FetchOptions) -> Result<()> {
        if destination.exists() {
            return Err(Error::AlreadyExists {
                path: destination.display().to_string(),
            });
        }

        self.git_ops.clone_repo(url, destination)?;

        if options.submodules {
            self.git_ops.update_submodules(destination)?;
        }

        info!("fetched {} into {}", url, destination.display());
        Ok(())
    }

    /// The raw `origin` remote string of the checkout at `repo_dir`.
    pub fn remote_url(&self, repo_dir: &Path) -> Result<String> {
        self.git_ops.remote_url(repo_dir)
    }
}

impl Default for RepositoryManager {
    fn default() -> Self {
        Self::new()
    }
}
