//! Implementation of the `modrules info` command.

use std::path::Path;

use anyhow::{Context, Result};

use modrules_lib::ModuleTable;
use modrules_lib::platform::paths::config_dir;
use modrules_lib::platform::platform_triple;
use modrules_lib::util::hash::Hashable;

use crate::output::{OutputFormat, print_json, print_stat, print_warning};

pub fn cmd_info(table_path: Option<&Path>, format: OutputFormat) -> Result<()> {
  let (table, source) = ModuleTable::discover(table_path).context("Failed to load module table")?;
  let fingerprint = table.compute_hash().context("Failed to fingerprint module table")?;
  let platform = platform_triple();

  if format.is_json() {
    return print_json(&serde_json::json!({
      "version": env!("CARGO_PKG_VERSION"),
      "platform": platform,
      "configDir": config_dir(),
      "table": {
        "source": source.to_string(),
        "version": table.version,
        "modules": table.len(),
        "fingerprint": fingerprint.0,
      },
    }));
  }

  println!("modrules v{}", env!("CARGO_PKG_VERSION"));
  match platform {
    Some(triple) => print_stat("Platform", &triple),
    None => print_warning("Could not detect platform."),
  }
  print_stat("Config dir", &config_dir().display().to_string());
  println!();
  println!("Module table:");
  print_stat("Source", &source.to_string());
  print_stat("Version", &table.version.to_string());
  print_stat("Modules", &table.len().to_string());
  print_stat("Fingerprint", &fingerprint.0);

  Ok(())
}
