//! # Configuration Schema and Parsing
//!
//! This module defines the data structures stored in `gito.yaml` and the
//! logic that turns the persisted document into a ready-to-use [`Config`].
//!
//! ## Key Components
//!
//! - **`Workspace`**: a named set of search roots together with the user's
//!   alias table, custom-path overrides and optional self location.
//!
//! - **`Config`**: the ordered list of workspaces plus the index of the one
//!   that is active for this invocation.
//!
//! ## Lifecycle
//!
//! A `Config` is loaded once per process from a [`ConfigStore`], mutated in
//! memory by the alias/set/self operations, and written back in full with
//! [`Config::save`]. Nothing is saved implicitly.
//!
//! ```
//! use gito::config::Config;
//!
//! let yaml = r#"
//! workspaces:
//!   - name: personal
//!     path: /home/me
//!     aliases:
//!       g: gito
//! "#;
//! let config = Config::parse(yaml, None).unwrap();
//! assert_eq!(config.active().name, "personal");
//! assert_eq!(config.active().alias("g"), "gito");
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::defaults::{default_workspace_path, DEFAULT_WORKSPACE_NAME};
use crate::error::{Error, Result};
use crate::path::root_paths;
use crate::store::ConfigStore;

/// A named search context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    /// Unique workspace name, selected with `-w`.
    pub name: String,

    /// OS-style path list; each entry plus `src` becomes a search root.
    #[serde(default)]
    pub path: String,

    /// Short name to repository name, applied once before any lookup.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, String>,

    /// Name to location overrides that bypass the tree search.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom: BTreeMap<String, String>,

    /// Name of the user's default code directory.
    #[serde(default, rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_name: Option<String>,

    #[serde(skip)]
    roots: Vec<PathBuf>,
}

impl Workspace {
    /// Create a workspace from a name and a path list, deriving its roots.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Result<Self> {
        let mut workspace = Self {
            name: name.into(),
            path: path.into(),
            aliases: BTreeMap::new(),
            custom: BTreeMap::new(),
            self_name: None,
            roots: Vec::new(),
        };
        workspace.derive_roots()?;
        Ok(workspace)
    }

    /// Recompute the search roots from `path`.
    ///
    /// Fails when the path list yields no usable entry, so a loaded workspace
    /// always has at least one root.
    fn derive_roots(&mut self) -> Result<()> {
        self.roots = root_paths(&self.path);
        if self.roots.is_empty() {
            return Err(Error::ConfigParse {
                message: format!("workspace {:?} has no path", self.name),
                hint: Some("Add a 'path:' entry pointing at your code directory".to_string()),
            });
        }
        Ok(())
    }

    /// Search roots in configured order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// The first root, where `get` places new clones.
    pub fn primary_root(&self) -> &Path {
        // roots is non-empty once derive_roots has succeeded
        &self.roots[0]
    }

    /// Single-hop alias substitution; names without an alias map to themselves.
    pub fn alias<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map(String::as_str).unwrap_or(name)
    }

    /// The custom location registered for `name`, if any.
    pub fn custom_path(&self, name: &str) -> Option<&Path> {
        self.custom.get(name).map(Path::new)
    }
}

/// All configured workspaces plus the active one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub workspaces: Vec<Workspace>,

    #[serde(skip)]
    active: usize,
}

impl Config {
    /// Build a fresh single-workspace config.
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspaces: vec![workspace],
            active: 0,
        }
    }

    /// Parse a YAML document and select the active workspace.
    ///
    /// With `workspace` set, the workspace of that name becomes active and its
    /// absence is an error. Otherwise the first workspace is active.
    pub fn parse(yaml: &str, workspace: Option<&str>) -> Result<Self> {
        let mut config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.select(workspace)?;
        Ok(config)
    }

    /// Load the config from `store`, creating and persisting a default one
    /// when the store is empty.
    ///
    /// The default workspace is named after `workspace` (or `default`) and
    /// points at `$GOPATH`, falling back to the home directory.
    pub fn load(store: &mut dyn ConfigStore, workspace: Option<&str>) -> Result<Self> {
        match store.read()? {
            Some(contents) => Self::parse(&contents, workspace),
            None => {
                let config = Self::first_run(workspace)?;
                info!("creating config with workspace {:?}", config.active().name);
                config.save(store)?;
                Ok(config)
            }
        }
    }

    /// Like [`Config::load`], but an empty store yields the first-run config
    /// without writing it back.
    pub fn load_or_default(store: &mut dyn ConfigStore, workspace: Option<&str>) -> Result<Self> {
        match store.read()? {
            Some(contents) => Self::parse(&contents, workspace),
            None => Self::first_run(workspace),
        }
    }

    fn first_run(workspace: Option<&str>) -> Result<Self> {
        let name = workspace.unwrap_or(DEFAULT_WORKSPACE_NAME);
        let path = default_workspace_path()?;
        debug!("default workspace {:?} at {}", name, path);
        Ok(Self::new(Workspace::new(name, path)?))
    }

    /// Serialize the whole config and replace the store's contents with it.
    pub fn save(&self, store: &mut dyn ConfigStore) -> Result<()> {
        store.write(&self.to_yaml()?)
    }

    /// Render the config as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// The workspace selected for this invocation.
    pub fn active(&self) -> &Workspace {
        &self.workspaces[self.active]
    }

    /// Mutable access to the active workspace.
    pub fn active_mut(&mut self) -> &mut Workspace {
        &mut self.workspaces[self.active]
    }

    fn validate(&mut self) -> Result<()> {
        if self.workspaces.is_empty() {
            return Err(Error::ConfigParse {
                message: "no workspaces defined".to_string(),
                hint: Some("Add at least one entry under 'workspaces:'".to_string()),
            });
        }

        let mut seen = HashSet::new();
        for workspace in &mut self.workspaces {
            if !seen.insert(workspace.name.clone()) {
                return Err(Error::ConfigParse {
                    message: format!("workspace {:?} is defined more than once", workspace.name),
                    hint: Some("Workspace names must be unique".to_string()),
                });
            }
            workspace.derive_roots()?;
        }
        Ok(())
    }

    fn select(&mut self, workspace: Option<&str>) -> Result<()> {
        let Some(name) = workspace else {
            self.active = 0;
            return Ok(());
        };

        self.active = self
            .workspaces
            .iter()
            .position(|w| w.name == name)
            .ok_or_else(|| Error::WorkspaceNotFound {
                name: name.to_string(),
                available: self.workspaces.iter().map(|w| w.name.clone()).collect(),
            })?;
        Ok(())
    }
}
