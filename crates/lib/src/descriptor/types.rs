use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::{BuildConfiguration, BuildContext};
use crate::platform::Platform;
use crate::util::hash::Hashable;

/// Whether the toolchain may optimize a module's translation units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationPolicy {
  /// Toolchain default for the build configuration.
  #[default]
  Default,
  /// Optimization disabled, for debuggability.
  Never,
}

impl OptimizationPolicy {
  /// Combine two policies. `Never` dominates.
  pub fn combine(self, other: OptimizationPolicy) -> OptimizationPolicy {
    match (self, other) {
      (Self::Never, _) | (_, Self::Never) => Self::Never,
      _ => Self::Default,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Default => "default",
      Self::Never => "never",
    }
  }
}

impl fmt::Display for OptimizationPolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// A partial descriptor: what one baseline or rule contributes.
///
/// Include paths are relative to the module directory unless absolute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescriptorFragment {
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub public_include_paths: Vec<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub private_include_paths: Vec<String>,
  #[serde(skip_serializing_if = "BTreeSet::is_empty")]
  pub public_dependencies: BTreeSet<String>,
  #[serde(skip_serializing_if = "BTreeSet::is_empty")]
  pub private_dependencies: BTreeSet<String>,
  #[serde(skip_serializing_if = "BTreeSet::is_empty")]
  pub dynamically_loaded_modules: BTreeSet<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub optimization_policy: Option<OptimizationPolicy>,
}

fn owned<I, S>(items: I) -> impl Iterator<Item = String>
where
  I: IntoIterator<Item = S>,
  S: Into<String>,
{
  items.into_iter().map(Into::into)
}

impl DescriptorFragment {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_public_include_paths<I: IntoIterator<Item = S>, S: Into<String>>(mut self, paths: I) -> Self {
    self.public_include_paths.extend(owned(paths));
    self
  }

  pub fn with_private_include_paths<I: IntoIterator<Item = S>, S: Into<String>>(mut self, paths: I) -> Self {
    self.private_include_paths.extend(owned(paths));
    self
  }

  pub fn with_public_dependencies<I: IntoIterator<Item = S>, S: Into<String>>(mut self, modules: I) -> Self {
    self.public_dependencies.extend(owned(modules));
    self
  }

  pub fn with_private_dependencies<I: IntoIterator<Item = S>, S: Into<String>>(mut self, modules: I) -> Self {
    self.private_dependencies.extend(owned(modules));
    self
  }

  pub fn with_dynamically_loaded_modules<I: IntoIterator<Item = S>, S: Into<String>>(mut self, modules: I) -> Self {
    self.dynamically_loaded_modules.extend(owned(modules));
    self
  }

  pub fn with_optimization_policy(mut self, policy: OptimizationPolicy) -> Self {
    self.optimization_policy = Some(policy);
    self
  }

  /// True if folding this fragment would change nothing.
  pub fn is_empty(&self) -> bool {
    self == &Self::default()
  }

  /// Every module name this fragment references.
  pub fn modules(&self) -> impl Iterator<Item = &String> {
    self
      .public_dependencies
      .iter()
      .chain(&self.private_dependencies)
      .chain(&self.dynamically_loaded_modules)
  }

  /// Rewrite relative include paths so they hang off `directory`.
  pub fn rooted_at(&self, directory: &str) -> Self {
    let root = |paths: &[String]| -> Vec<String> { paths.iter().map(|p| join_module_path(directory, p)).collect() };
    Self {
      public_include_paths: root(&self.public_include_paths),
      private_include_paths: root(&self.private_include_paths),
      ..self.clone()
    }
  }
}

/// Join an include path onto a module directory with `/`.
///
/// Trailing separators are dropped so `Public` and `Public/` name the same
/// path. Absolute paths and an empty directory are otherwise left unchanged.
pub fn join_module_path(directory: &str, path: &str) -> String {
  let path = match path.trim_end_matches(['/', '\\']) {
    "" => path,
    trimmed if trimmed.ends_with(':') => path,
    trimmed => trimmed,
  };
  let drive_root = matches!(path.get(1..3), Some(":\\") | Some(":/"));
  let absolute = path.starts_with('/') || path.starts_with('\\') || drive_root;
  if directory.is_empty() || absolute {
    return path.to_string();
  }
  format!(
    "{}/{}",
    directory.trim_end_matches(['/', '\\']),
    path.trim_start_matches("./")
  )
}

/// The effective build configuration of one module for one build context.
///
/// # Example
///
/// ```json
/// {
///   "moduleName": "AbleCoreSP",
///   "publicIncludePaths": ["Source/AbleCoreSP/Classes", "Source/AbleCoreSP/Public"],
///   "privateIncludePaths": ["Source/AbleCoreSP/Private"],
///   "publicDependencies": ["AIModule", "Core", "..."],
///   "privateDependencies": ["MoeGameCore", "UnLua"],
///   "dynamicallyLoadedModules": [],
///   "optimizationPolicy": "default",
///   "configuration": "development"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDescriptor {
  pub module_name: String,
  /// Header directories exposed to dependents, in search order.
  pub public_include_paths: Vec<String>,
  /// Header directories visible only inside this module.
  pub private_include_paths: Vec<String>,
  pub public_dependencies: BTreeSet<String>,
  pub private_dependencies: BTreeSet<String>,
  /// Modules the host loads at runtime instead of the linker.
  pub dynamically_loaded_modules: BTreeSet<String>,
  pub optimization_policy: OptimizationPolicy,
  pub configuration: BuildConfiguration,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub platform: Option<Platform>,
}

impl Hashable for ModuleDescriptor {}

impl ModuleDescriptor {
  /// An empty descriptor for `module_name`, stamped with the context's
  /// pass-through fields.
  pub fn empty(module_name: impl Into<String>, ctx: &BuildContext) -> Self {
    Self {
      module_name: module_name.into(),
      public_include_paths: Vec::new(),
      private_include_paths: Vec::new(),
      public_dependencies: BTreeSet::new(),
      private_dependencies: BTreeSet::new(),
      dynamically_loaded_modules: BTreeSet::new(),
      optimization_policy: OptimizationPolicy::Default,
      configuration: ctx.configuration,
      platform: ctx.platform,
    }
  }

  /// Fold a fragment into this descriptor. Never removes anything.
  pub fn apply(&mut self, fragment: &DescriptorFragment) {
    append_unique(&mut self.public_include_paths, &fragment.public_include_paths);
    append_unique(&mut self.private_include_paths, &fragment.private_include_paths);
    self
      .public_dependencies
      .extend(fragment.public_dependencies.iter().cloned());
    self
      .private_dependencies
      .extend(fragment.private_dependencies.iter().cloned());
    self
      .dynamically_loaded_modules
      .extend(fragment.dynamically_loaded_modules.iter().cloned());
    if let Some(policy) = fragment.optimization_policy {
      self.optimization_policy = self.optimization_policy.combine(policy);
    }
  }

  /// Drop private declarations of modules that are also public.
  ///
  /// Public visibility wins. Returns the names that were demoted from the
  /// private set, in sorted order.
  pub fn resolve_visibility_conflicts(&mut self) -> Vec<String> {
    let conflicts: Vec<String> = self
      .private_dependencies
      .intersection(&self.public_dependencies)
      .cloned()
      .collect();
    for name in &conflicts {
      self.private_dependencies.remove(name);
    }
    conflicts
  }

  /// Remove every listed module from all dependency sets.
  ///
  /// Returns the names that were actually present.
  pub fn strip_modules(&mut self, modules: &BTreeSet<String>) -> BTreeSet<String> {
    let mut removed = BTreeSet::new();
    for set in [
      &mut self.public_dependencies,
      &mut self.private_dependencies,
      &mut self.dynamically_loaded_modules,
    ] {
      set.retain(|name| {
        let keep = !modules.contains(name);
        if !keep {
          removed.insert(name.clone());
        }
        keep
      });
    }
    removed
  }

  /// True if `module` appears in any dependency set.
  pub fn depends_on(&self, module: &str) -> bool {
    self.public_dependencies.contains(module)
      || self.private_dependencies.contains(module)
      || self.dynamically_loaded_modules.contains(module)
  }
}

fn append_unique(target: &mut Vec<String>, items: &[String]) {
  for item in items {
    if !target.contains(item) {
      target.push(item.clone());
    }
  }
}
