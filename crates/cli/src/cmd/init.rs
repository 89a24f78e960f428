//! Implementation of the `modrules init` command.
//!
//! Writes the built-in module table as JSON so it can be edited and extended.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use modrules_lib::ModuleTable;
use modrules_lib::consts::TABLE_ENV_VAR;
use modrules_lib::platform::paths::default_table_path;

use crate::output::symbols;

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the table already exists (unless `force`) or cannot be written.
pub fn cmd_init(path: Option<&Path>, force: bool) -> Result<()> {
  let path = path.map(Path::to_path_buf).unwrap_or_else(default_table_path);
  let table = ModuleTable::builtin();

  let written = if force { table.save(&path) } else { table.save_new(&path) };
  written.context("Failed to write module table")?;

  println!(
    "{} {}",
    symbols::SUCCESS.green(),
    "Wrote module table".green().bold()
  );
  println!();
  println!("  {} Table:   {}", symbols::INFO.cyan(), path.display());
  println!("  {} Modules: {}", symbols::INFO.cyan(), table.len());
  println!();
  println!(
    "Point {} at it (or pass {}) to resolve against it.",
    TABLE_ENV_VAR.cyan(),
    format!("--table {}", path.display()).cyan()
  );

  Ok(())
}
