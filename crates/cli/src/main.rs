mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::ResolveArgs;
use crate::output::{OutputFormat, print_error};

/// modrules - resolve how a module is built for a build context
#[derive(Parser)]
#[command(name = "modrules")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Log filter directive (overrides RUST_LOG)
  #[arg(long, global = true, value_name = "FILTER")]
  log_level: Option<String>,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  /// Module table to read (default: $MODRULES_TABLE, then the config directory, then built-in)
  #[arg(long, global = true, value_name = "PATH")]
  table: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Resolve the descriptor of one or more modules
  Resolve {
    /// Module names to resolve
    #[arg(required = true)]
    modules: Vec<String>,

    /// Build the interactive editor rather than a runtime target
    #[arg(long)]
    editor: bool,

    /// Target type: game, editor, server, client or program
    #[arg(short, long, default_value = "game")]
    target: String,

    /// Build configuration (default: development)
    #[arg(short, long)]
    configuration: Option<String>,

    /// Platform triple recorded on the descriptor (e.g. x86_64-linux)
    #[arg(short, long)]
    platform: Option<String>,

    /// Read the build context from a JSON file instead of flags
    #[arg(long, value_name = "PATH", conflicts_with_all = ["editor", "target", "configuration", "platform"])]
    context: Option<PathBuf>,
  },

  /// List the modules in the module table
  Modules,

  /// Write the built-in module table to a file for editing
  Init {
    /// Destination (default: the config directory)
    path: Option<PathBuf>,

    /// Overwrite an existing table
    #[arg(short, long)]
    force: bool,
  },

  /// Show platform and module table information
  Info,
}

fn init_tracing(verbose: bool, directive: Option<&str>) {
  let filter = match directive {
    Some(directive) => EnvFilter::new(directive),
    None if verbose => EnvFilter::new("debug"),
    None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn run(cli: Cli) -> Result<()> {
  let table = cli.table.as_deref();

  match cli.command {
    Commands::Resolve {
      modules,
      editor,
      target,
      configuration,
      platform,
      context,
    } => {
      let args = ResolveArgs {
        modules,
        editor,
        target,
        configuration,
        platform,
        context,
      };
      cmd::cmd_resolve(&args, table, cli.output)
    }
    Commands::Modules => cmd::cmd_modules(table, cli.output),
    Commands::Init { path, force } => cmd::cmd_init(path.as_deref(), force),
    Commands::Info => cmd::cmd_info(table, cli.output),
  }
}

fn main() {
  let cli = Cli::parse();
  init_tracing(cli.verbose, cli.log_level.as_deref());

  if let Err(err) = run(cli) {
    print_error(&format!("{:#}", err));
    std::process::exit(1);
  }
}
