//! Implementation of the `modrules resolve` command.
//!
//! Builds a build context from flags (or a context file written by an
//! orchestrator), resolves every requested module against the module table,
//! and prints the descriptors.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use modrules_lib::util::hash::Hashable;
use modrules_lib::{BuildContext, ContextSpec, ModuleDescriptor, ModuleTable, ResolveError, Resolver};

use crate::output::{OutputFormat, print_json, print_list, print_stat, print_success, truncate_hash};

/// Arguments of the resolve command.
#[derive(Debug, Clone, Default)]
pub struct ResolveArgs {
  pub modules: Vec<String>,
  pub editor: bool,
  pub target: String,
  pub configuration: Option<String>,
  pub platform: Option<String>,
  pub context: Option<PathBuf>,
}

impl ResolveArgs {
  /// The unchecked build context these arguments describe.
  fn context_spec(&self) -> Result<ContextSpec> {
    match &self.context {
      Some(path) => {
        let content =
          fs::read_to_string(path).with_context(|| format!("Failed to read context file: {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("Failed to parse context file: {}", path.display()))
      }
      None => Ok(ContextSpec {
        is_editor_build: self.editor,
        target_type: self.target.clone(),
        configuration: self.configuration.clone(),
        platform: self.platform.clone(),
      }),
    }
  }
}

#[derive(Serialize)]
struct ResolvedOutput<'a> {
  fingerprint: String,
  #[serde(flatten)]
  descriptor: &'a ModuleDescriptor,
}

pub fn cmd_resolve(args: &ResolveArgs, table_path: Option<&Path>, format: OutputFormat) -> Result<()> {
  let spec = args.context_spec()?;
  let ctx = BuildContext::try_from(&spec)
    .map_err(ResolveError::from)
    .context("Failed to resolve module descriptor")?;

  let (table, source) = ModuleTable::discover(table_path).context("Failed to load module table")?;
  debug!(table = %source, context = ?ctx, "resolving {} module(s)", args.modules.len());
  let resolver = Resolver::new(&table);

  let descriptors = resolver
    .resolve_many(&args.modules, &ctx)
    .context("Failed to resolve module descriptor")?;

  let resolved = descriptors
    .iter()
    .map(|descriptor| {
      let fingerprint = descriptor.compute_hash().context("Failed to fingerprint descriptor")?;
      Ok::<_, anyhow::Error>(ResolvedOutput {
        fingerprint: fingerprint.0,
        descriptor,
      })
    })
    .collect::<Result<Vec<_>>>()?;

  if format.is_json() {
    return print_json(&resolved);
  }

  for (i, output) in resolved.iter().enumerate() {
    if i > 0 {
      println!();
    }
    print_descriptor(output, &ctx);
  }

  Ok(())
}

fn print_descriptor(output: &ResolvedOutput<'_>, ctx: &BuildContext) {
  let desc = output.descriptor;
  let editor = if ctx.is_editor_build { ", editor build" } else { "" };

  print_success(&format!(
    "{} ({}, {}{})",
    desc.module_name, ctx.target_type, desc.configuration, editor
  ));
  print_stat("Fingerprint", truncate_hash(&output.fingerprint));
  if let Some(platform) = desc.platform {
    print_stat("Platform", &platform.to_string());
  }
  print_stat("Optimization", desc.optimization_policy.as_str());
  print_list("Public include paths", &desc.public_include_paths);
  print_list("Private include paths", &desc.private_include_paths);
  print_list("Public dependencies", &desc.public_dependencies);
  print_list("Private dependencies", &desc.private_dependencies);
  print_list("Dynamically loaded modules", &desc.dynamically_loaded_modules);
}
