//! The module table: every module the resolver knows, keyed by name.
//!
//! The table is the single source of truth the resolver reads. It is
//! immutable once loaded and is injected into the [`crate::resolve::Resolver`]
//! rather than read from globals, so tests can resolve against synthetic
//! tables.
//!
//! # Table File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "editorOnlyModules": ["UnrealEd", "Slate"],
//!   "modules": {
//!     "AbleCoreSP": {
//!       "directory": "Source/AbleCoreSP",
//!       "baseline": {
//!         "publicIncludePaths": ["Classes", "Public"],
//!         "publicDependencies": ["Core", "Engine"]
//!       },
//!       "rules": [
//!         { "name": "editor-support", "when": "editorBuild", "adds": { "privateDependencies": ["UnrealEd"] } }
//!       ]
//!     }
//!   }
//! }
//! ```

pub mod builtin;

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::consts::TABLE_VERSION;
use crate::descriptor::DescriptorFragment;
use crate::platform::paths::table_path;
use crate::rules::Rule;
use crate::util::hash::Hashable;

/// The static description of one module: its baseline and its rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleEntry {
  /// Module directory; relative include paths are joined onto it.
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub directory: String,
  /// What the module needs in every build context.
  #[serde(default)]
  pub baseline: DescriptorFragment,
  /// Context-gated additions, folded in declaration order.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub rules: Vec<Rule>,
}

impl ModuleEntry {
  pub fn new(directory: impl Into<String>, baseline: DescriptorFragment) -> Self {
    Self {
      directory: directory.into(),
      baseline,
      rules: Vec::new(),
    }
  }

  pub fn with_rule(mut self, rule: Rule) -> Self {
    self.rules.push(rule);
    self
  }
}

/// A versioned registry of module entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleTable {
  /// Table format version.
  pub version: u32,
  /// Modules that must never be linked into a non-editor build.
  #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
  pub editor_only_modules: BTreeSet<String>,
  #[serde(default)]
  pub modules: BTreeMap<String, ModuleEntry>,
}

impl Hashable for ModuleTable {}

/// Where a loaded table came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
  Builtin,
  File(PathBuf),
}

impl std::fmt::Display for TableSource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Builtin => write!(f, "built-in"),
      Self::File(path) => write!(f, "{}", path.display()),
    }
  }
}

/// Errors that can occur when reading or writing module tables.
#[derive(Debug, Error)]
pub enum TableError {
  /// Failed to read the table file.
  #[error("failed to read module table {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Failed to write the table file.
  #[error("failed to write module table {path}: {source}")]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Failed to parse the table JSON.
  #[error("failed to parse module table: {0}")]
  Parse(#[source] serde_json::Error),

  /// Failed to serialize the table.
  #[error("failed to serialize module table: {0}")]
  Serialize(#[source] serde_json::Error),

  /// Table version is not supported.
  #[error("unsupported module table version {0}, expected {TABLE_VERSION}")]
  UnsupportedVersion(u32),

  /// Refused to overwrite an existing table.
  #[error("module table already exists: {0}")]
  AlreadyExists(PathBuf),

  /// A rule could add something to a non-editor build that the matching
  /// editor build would not get.
  #[error("rule '{rule}' of module '{module}' matches without an editor build but not with one; rules must only add to editor builds")]
  NonMonotonicRule { module: String, rule: String },
}

impl Default for ModuleTable {
  fn default() -> Self {
    Self::new()
  }
}

impl ModuleTable {
  /// Create a new empty table.
  pub fn new() -> Self {
    Self {
      version: TABLE_VERSION,
      editor_only_modules: BTreeSet::new(),
      modules: BTreeMap::new(),
    }
  }

  /// The table shipped with the crate.
  pub fn builtin() -> Self {
    builtin::builtin_table()
  }

  pub fn with_module(mut self, name: impl Into<String>, entry: ModuleEntry) -> Self {
    self.modules.insert(name.into(), entry);
    self
  }

  pub fn with_editor_only_modules<I: IntoIterator<Item = S>, S: Into<String>>(mut self, modules: I) -> Self {
    self.editor_only_modules.extend(modules.into_iter().map(Into::into));
    self
  }

  pub fn get(&self, name: &str) -> Option<&ModuleEntry> {
    self.modules.get(name)
  }

  pub fn module_names(&self) -> impl Iterator<Item = &str> {
    self.modules.keys().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.modules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.modules.is_empty()
  }

  /// Parse a table from JSON, rejecting unknown format versions.
  pub fn from_json(content: &str) -> Result<Self, TableError> {
    let table: ModuleTable = serde_json::from_str(content).map_err(TableError::Parse)?;

    if table.version != TABLE_VERSION {
      return Err(TableError::UnsupportedVersion(table.version));
    }

    table.validate()?;
    Ok(table)
  }

  /// Check that every rule only adds to editor builds.
  ///
  /// A rule gated on `not(editorBuild)` would let a runtime descriptor depend
  /// on something the editor descriptor of the same context lacks.
  pub fn validate(&self) -> Result<(), TableError> {
    for (module, entry) in &self.modules {
      if let Some(rule) = entry.rules.iter().find(|rule| !rule.when.is_editor_monotone()) {
        return Err(TableError::NonMonotonicRule {
          module: module.clone(),
          rule: rule.name.clone(),
        });
      }
    }
    Ok(())
  }

  /// Load a table from the given path.
  pub fn load(path: &Path) -> Result<Self, TableError> {
    let content = fs::read_to_string(path).map_err(|source| TableError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    let table = Self::from_json(&content)?;
    debug!(path = ?path, modules = table.len(), "loaded module table");
    Ok(table)
  }

  /// Load the table the environment points at.
  ///
  /// An explicit path wins, then `MODRULES_TABLE`, then the table in the
  /// configuration directory. Without any of those the built-in table is used.
  pub fn discover(explicit: Option<&Path>) -> Result<(Self, TableSource), TableError> {
    let path = explicit.map(Path::to_path_buf).or_else(table_path);
    match path {
      Some(path) => {
        let table = Self::load(&path)?;
        Ok((table, TableSource::File(path)))
      }
      None => {
        debug!("no module table configured, using built-in table");
        Ok((Self::builtin(), TableSource::Builtin))
      }
    }
  }

  pub fn to_json_pretty(&self) -> Result<String, TableError> {
    serde_json::to_string_pretty(self).map_err(TableError::Serialize)
  }

  /// Write the table to `path`, replacing any existing file.
  pub fn save(&self, path: &Path) -> Result<(), TableError> {
    let mut content = self.to_json_pretty()?;
    content.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent).map_err(|source| TableError::Write {
        path: parent.to_path_buf(),
        source,
      })?;
    }

    fs::write(path, content).map_err(|source| TableError::Write {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Write the table to `path`, failing if a file already exists there.
  pub fn save_new(&self, path: &Path) -> Result<(), TableError> {
    if path.exists() {
      return Err(TableError::AlreadyExists(path.to_path_buf()));
    }
    self.save(path)
  }
}
