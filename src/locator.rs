//! # Repository Locator
//!
//! Finds every directory under a workspace's roots that plausibly matches a
//! short or partial repository name.
//!
//! ## Resolution order
//!
//! 1.  **Alias**: the query is replaced by its alias target, once. Chains are
//!     not followed.
//! 2.  **Custom override**: a name registered with `set` resolves to its stored
//!     location without touching the filesystem.
//! 3.  **Tree search**: otherwise every root is searched and the matches are
//!     unioned into one [`MatchSet`].
//!
//! ## Tree search
//!
//! At each level the search checks whether `<dir>/<query>` is a match. A
//! query such as `acme/foo` or just `foo` therefore finds
//! `<root>/github.com/acme/foo`. When nothing matches at a level, every
//! subdirectory is searched in parallel on the rayon pool, and the level
//! returns once all of them are done. The walk stops [`MAX_SEARCH_DEPTH`]
//! levels below each root and never enters `.git` directories.
//!
//! Directories that cannot be listed contribute no matches; the rest of the
//! walk is unaffected. All matches go through a single mutex-guarded set
//! owned by the top-level call.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::debug;
use rayon::prelude::*;

use crate::config::Workspace;
use crate::defaults::{GIT_MARKER, MAX_SEARCH_DEPTH};
use crate::error::{Error, Result};
use crate::filesystem::FileSystem;

/// Absolute paths matching a query. Order carries no meaning.
pub type MatchSet = HashSet<PathBuf>;

/// Resolves repository names against one workspace.
pub struct RepoLocator<'a> {
    workspace: &'a Workspace,
    fs: &'a dyn FileSystem,
}

impl<'a> RepoLocator<'a> {
    pub fn new(workspace: &'a Workspace, fs: &'a dyn FileSystem) -> Self {
        Self { workspace, fs }
    }

    /// Resolve `query` through aliases, custom overrides and the tree search.
    ///
    /// With `require_git_marker`, only directories containing `.git` match.
    /// Custom overrides are returned as-is regardless of the flag.
    pub fn resolve(&self, query: &str, require_git_marker: bool) -> Result<MatchSet> {
        let name = self.workspace.alias(query);
        if name != query {
            debug!("alias {:?} -> {:?}", query, name);
        }

        if let Some(path) = self.workspace.custom_path(name) {
            debug!("custom location for {:?}: {}", name, path.display());
            return Ok(MatchSet::from([path.to_path_buf()]));
        }

        let matches = self.search(name, require_git_marker);
        if matches.is_empty() {
            return Err(Error::NotFound {
                query: query.to_string(),
            });
        }
        Ok(matches)
    }

    /// Search every root for `name`, without alias or custom resolution.
    ///
    /// Only the plain segments of `name` are used to build candidates, so a
    /// leading `/` or a `..` cannot lead the search outside the roots. An
    /// empty set means nothing matched.
    pub fn search(&self, name: &str, require_git_marker: bool) -> MatchSet {
        let relative = confine(name);
        if relative.as_os_str().is_empty() {
            debug!("nothing to search for in {:?}", name);
            return MatchSet::new();
        }

        let matches = Mutex::new(MatchSet::new());
        let search = Search {
            fs: self.fs,
            query: name,
            relative: &relative,
            require_git_marker,
            matches: &matches,
        };

        self.workspace
            .roots()
            .par_iter()
            .for_each(|root| search.descend("", root, 0));

        matches.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The normal components of `name`, joined into a relative path.
fn confine(name: &str) -> PathBuf {
    Path::new(name)
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect()
}

/// State shared by every branch of one search.
struct Search<'a> {
    fs: &'a dyn FileSystem,
    query: &'a str,
    relative: &'a Path,
    require_git_marker: bool,
    matches: &'a Mutex<MatchSet>,
}

impl Search<'_> {
    fn descend(&self, segment: &str, so_far: &Path, depth: usize) {
        if depth == MAX_SEARCH_DEPTH {
            return;
        }

        let dir = if segment.is_empty() {
            so_far.to_path_buf()
        } else {
            so_far.join(segment)
        };
        let candidate = dir.join(self.relative);
        let qualified = !self.require_git_marker || self.fs.is_repo(&candidate);

        if segment == self.query && qualified {
            self.record(candidate);
            return;
        }

        // partial name, e.g. "acme/foo" for "github.com/acme/foo"
        if qualified && self.fs.is_dir(&candidate) {
            self.record(candidate);
            return;
        }

        let children = match self.fs.list_dirs(&dir) {
            Ok(children) => children,
            Err(e) => {
                debug!("skipping {}: {}", dir.display(), e);
                return;
            }
        };

        children
            .par_iter()
            .filter(|child| child.as_str() != GIT_MARKER)
            .for_each(|child| self.descend(child, &dir, depth + 1));
    }

    fn record(&self, path: PathBuf) {
        debug!("match: {}", path.display());
        self.matches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path);
    }
}
