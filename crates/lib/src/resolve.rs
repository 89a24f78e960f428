//! Descriptor resolution.
//!
//! [`Resolver::resolve`] turns a module name and a [`BuildContext`] into a
//! [`ModuleDescriptor`]. It is a pure function of the injected
//! [`ModuleTable`] and its arguments: identical inputs always produce
//! structurally identical descriptors, and nothing is cached between calls.
//!
//! # Algorithm
//!
//! 1. Look up the module entry; a missing entry is [`ResolveError::UnknownModule`].
//! 2. Fold the entry's baseline into an empty descriptor.
//! 3. Fold the fragment of every rule whose condition matches, in
//!    declaration order.
//! 4. Keep dependencies declared both public and private as public only.
//! 5. For non-editor builds, drop every editor-only module the table names.
//!
//! The resolver never returns a partially populated descriptor.

use thiserror::Error;
use tracing::{debug, warn};

use crate::context::{BuildContext, ContextError, ContextSpec};
use crate::descriptor::ModuleDescriptor;
use crate::table::ModuleTable;

/// Errors that can occur while resolving a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
  /// The module has no entry in the table.
  #[error("unknown module '{0}': no entry in the module table")]
  UnknownModule(String),

  /// The build context carried a value outside the closed enums.
  #[error("invalid build context: {0}")]
  InvalidContext(#[from] ContextError),
}

/// Resolves module descriptors against a borrowed module table.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
  table: &'a ModuleTable,
}

impl<'a> Resolver<'a> {
  pub fn new(table: &'a ModuleTable) -> Self {
    Self { table }
  }

  pub fn table(&self) -> &'a ModuleTable {
    self.table
  }

  /// Resolve one module for one build context.
  pub fn resolve(&self, module_name: &str, ctx: &BuildContext) -> Result<ModuleDescriptor, ResolveError> {
    let entry = self
      .table
      .get(module_name)
      .ok_or_else(|| ResolveError::UnknownModule(module_name.to_string()))?;

    let mut descriptor = ModuleDescriptor::empty(module_name, ctx);
    descriptor.apply(&entry.baseline.rooted_at(&entry.directory));

    for rule in &entry.rules {
      if rule.applies(ctx) {
        debug!(module = module_name, rule = %rule.name, "rule matched");
        descriptor.apply(&rule.adds.rooted_at(&entry.directory));
      }
    }

    for name in descriptor.resolve_visibility_conflicts() {
      warn!(
        module = module_name,
        dependency = %name,
        "dependency declared both public and private, keeping it public"
      );
    }

    if !ctx.is_editor_build {
      for name in descriptor.strip_modules(&self.table.editor_only_modules) {
        warn!(
          module = module_name,
          dependency = %name,
          "editor-only module requested outside an editor build, dropping it"
        );
      }
    }

    debug!(
      module = module_name,
      public = descriptor.public_dependencies.len(),
      private = descriptor.private_dependencies.len(),
      optimization = %descriptor.optimization_policy,
      "resolved module descriptor"
    );

    Ok(descriptor)
  }

  /// Validate an unchecked context, then resolve.
  pub fn resolve_spec(&self, module_name: &str, spec: &ContextSpec) -> Result<ModuleDescriptor, ResolveError> {
    let ctx = BuildContext::try_from(spec)?;
    self.resolve(module_name, &ctx)
  }

  /// Resolve several modules for the same context, each independently.
  ///
  /// Stops at the first module that fails.
  pub fn resolve_many<I, S>(&self, module_names: I, ctx: &BuildContext) -> Result<Vec<ModuleDescriptor>, ResolveError>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    module_names
      .into_iter()
      .map(|name| self.resolve(name.as_ref(), ctx))
      .collect()
  }
}

/// Resolve `module_name` against `table`.
pub fn resolve(table: &ModuleTable, module_name: &str, ctx: &BuildContext) -> Result<ModuleDescriptor, ResolveError> {
  Resolver::new(table).resolve(module_name, ctx)
}
