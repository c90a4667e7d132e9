//! # Orchestrator
//!
//! [`Gito`] binds the named user operations to the locator, the remote-URL
//! normalizer, the repository manager and the active workspace.
//!
//! | Operation | Behavior |
//! |---|---|
//! | `get` | clone `https://{host/path}.git` under the primary root |
//! | `where_is` | every checkout matching a name |
//! | `url` | canonical browsable URL of each match (or of the current directory) |
//! | `alias` | record a short name for something that resolves today |
//! | `set` | pin a name to a checkout outside the roots |
//! | `set_self` / `self_location` | the user's default code directory |
//!
//! Mutating operations change the active workspace in memory and then write
//! the whole config back through the [`ConfigStore`] before returning.

use std::env;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::Config;
use crate::defaults::CURRENT_DIR_SENTINEL;
use crate::error::{Error, Result};
use crate::filesystem::{FileSystem, OsFileSystem};
use crate::locator::{MatchSet, RepoLocator};
use crate::path::absolutize;
use crate::remote::{clone_url, extract_url, repo_identifier};
use crate::repository::{FetchOptions, RepositoryManager};
use crate::store::ConfigStore;

/// Where `get` will clone a repository from and to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneTarget {
    /// `host/path` identifier of the repository.
    pub identifier: String,
    /// Address handed to `git clone`.
    pub url: String,
    /// Checkout location under the primary root.
    pub destination: PathBuf,
}

/// The gito operations for one loaded config.
pub struct Gito {
    config: Config,
    store: Box<dyn ConfigStore>,
    repos: RepositoryManager,
    fs: Box<dyn FileSystem>,
}

impl Gito {
    /// Operate on `config`, persisting changes to `store`, using the real
    /// filesystem and the system `git`.
    pub fn new(config: Config, store: Box<dyn ConfigStore>) -> Self {
        Self {
            config,
            store,
            repos: RepositoryManager::new(),
            fs: Box::new(OsFileSystem),
        }
    }

    /// Replace the repository manager, e.g. with one backed by fake git.
    pub fn with_repository_manager(mut self, repos: RepositoryManager) -> Self {
        self.repos = repos;
        self
    }

    /// Replace the filesystem the locator searches.
    pub fn with_filesystem(mut self, fs: Box<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn locator(&self) -> RepoLocator<'_> {
        RepoLocator::new(self.config.active(), self.fs.as_ref())
    }

    /// Compute where `repo` would be cloned from and to.
    pub fn clone_target(&self, repo: &str) -> Result<CloneTarget> {
        let identifier = repo_identifier(repo)?;
        let destination = self.config.active().primary_root().join(&identifier);
        Ok(CloneTarget {
            url: clone_url(&identifier),
            identifier,
            destination,
        })
    }

    /// Clone `repo` under the primary root and return the checkout path.
    pub fn get(&self, repo: &str, options: FetchOptions) -> Result<PathBuf> {
        let target = self.clone_target(repo)?;
        self.repos.fetch(&target.url, &target.destination, options)?;
        Ok(target.destination)
    }

    /// Every repository checkout matching `repo`, sorted.
    ///
    /// More than one path means the name is ambiguous; the caller decides.
    pub fn where_is(&self, repo: &str) -> Result<Vec<PathBuf>> {
        self.locator().resolve(repo, true).map(sorted)
    }

    /// Canonical browsable URLs for `repo`, or for the current directory when
    /// `repo` is `.`.
    ///
    /// Matches whose remote cannot be read are skipped; the call fails only if
    /// none of them yields a URL.
    pub fn url(&self, repo: &str) -> Result<Vec<String>> {
        let paths = if repo == CURRENT_DIR_SENTINEL {
            vec![env::current_dir()?]
        } else {
            self.where_is(repo)?
        };

        let urls: Vec<String> = paths
            .iter()
            .filter_map(|path| match self.repos.remote_url(path) {
                Ok(raw) => Some(extract_url(&raw)),
                Err(e) => {
                    warn!("no remote for {}: {}", path.display(), e);
                    None
                }
            })
            .collect();

        if urls.is_empty() {
            return Err(Error::NoRemoteUrls {
                query: repo.to_string(),
            });
        }
        Ok(urls)
    }

    /// Make `from` an alias of `to`, which must currently resolve.
    pub fn alias(&mut self, from: &str, to: &str) -> Result<()> {
        self.where_is(to)?;

        self.config
            .active_mut()
            .aliases
            .insert(from.to_string(), to.to_string());
        self.persist()
    }

    /// Pin `name` to the checkout at `location`, returning the stored path.
    pub fn set(&mut self, name: &str, location: &Path) -> Result<PathBuf> {
        let location = absolutize(location)?;
        if !self.fs.is_repo(&location) {
            return Err(Error::NotARepository {
                path: location.display().to_string(),
            });
        }

        self.config
            .active_mut()
            .custom
            .insert(name.to_string(), location.to_string_lossy().into_owned());
        self.persist()?;
        Ok(location)
    }

    /// Record `name` as the self location; it must resolve to some directory.
    pub fn set_self(&mut self, name: &str) -> Result<()> {
        self.locator().resolve(name, false)?;

        self.config.active_mut().self_name = Some(name.to_string());
        self.persist()
    }

    /// The directory the self location currently resolves to, if one is set.
    pub fn self_location(&self) -> Result<Option<PathBuf>> {
        let Some(name) = self.config.active().self_name.as_deref() else {
            return Ok(None);
        };

        let matches = sorted(self.locator().resolve(name, false)?);
        if matches.len() > 1 {
            warn!(
                "self location {:?} is ambiguous, using {}",
                name,
                matches[0].display()
            );
        }
        Ok(matches.into_iter().next())
    }

    fn persist(&mut self) -> Result<()> {
        debug!("saving config");
        self.config.save(self.store.as_mut())
    }
}

fn sorted(matches: MatchSet) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = matches.into_iter().collect();
    paths.sort();
    paths
}
