//! Implementation of the `modrules modules` command.

use std::path::Path;

use anyhow::{Context, Result};

use modrules_lib::ModuleTable;

use crate::output::{OutputFormat, print_info, print_json, symbols};

pub fn cmd_modules(table_path: Option<&Path>, format: OutputFormat) -> Result<()> {
  let (table, source) = ModuleTable::discover(table_path).context("Failed to load module table")?;

  if format.is_json() {
    let modules: Vec<_> = table
      .modules
      .iter()
      .map(|(name, entry)| {
        let rules: Vec<_> = entry.rules.iter().map(|r| r.name.as_str()).collect();
        serde_json::json!({ "name": name, "directory": entry.directory, "rules": rules })
      })
      .collect();
    return print_json(&serde_json::json!({ "source": source.to_string(), "modules": modules }));
  }

  if table.is_empty() {
    print_info(&format!("No modules in table ({})", source));
    return Ok(());
  }

  println!("Modules ({}):", source);
  for (name, entry) in &table.modules {
    let rules = entry.rules.len();
    println!(
      "  {} {} ({} rule{})",
      symbols::INFO,
      name,
      rules,
      if rules == 1 { "" } else { "s" }
    );
  }

  Ok(())
}
