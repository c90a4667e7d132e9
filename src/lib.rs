//! # Gito Library
//!
//! This library provides the core functionality behind the `gito` command-line
//! tool: finding a repository somewhere under your workspace directories from a
//! short or partial name, and turning its git remote into a browsable URL.
//!
//! ## Quick Example
//!
//! ```
//! use gito::config::Workspace;
//! use gito::filesystem::MemoryFS;
//! use gito::locator::RepoLocator;
//! use gito::remote::extract_url;
//!
//! let mut fs = MemoryFS::new();
//! fs.add_repo("/home/me/src/github.com/acme/foo");
//!
//! let workspace = Workspace::new("default", "/home/me").unwrap();
//! let matches = RepoLocator::new(&workspace, &fs).resolve("foo", true).unwrap();
//! assert_eq!(matches.len(), 1);
//!
//! assert_eq!(
//!     extract_url("git@github.com:acme/foo.git"),
//!     "https://github.com/acme/foo"
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - **Workspaces (`config`)**: each workspace names one or more root
//!   directories (its configured path list, each with `src` appended) plus an
//!   alias table, custom-location overrides and an optional self location.
//! - **Locator (`locator`)**: resolves a name through aliases and overrides,
//!   then searches the roots in parallel, at most four levels deep, returning
//!   every plausible match.
//! - **Remotes (`remote`)**: normalizes SSH shorthand, `ssh://`, `http://` and
//!   `https://` remotes into one `https://host/path` form.
//! - **Orchestrator (`orchestrator`)**: the `get`/`where`/`url`/`alias`/`set`/
//!   `self` operations, tying the above to git (`repository`, `git`) and to
//!   the persisted config (`store`).

pub mod config;
pub mod defaults;
pub mod error;
pub mod filesystem;
pub mod git;
pub mod locator;
pub mod orchestrator;
pub mod path;
pub mod remote;
pub mod repository;
pub mod store;
pub mod suggestions;

#[cfg(test)]
mod remote_proptest;
