use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use opengv_dist_lib::build::EntryPoint;
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use output::{OutputFormat, print_error};

/// opengv-dist - Build wheels for the pyopengv Python binding
#[derive(Parser)]
#[command(name = "opengv-dist")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build a wheel using the stock purity heuristic
  Wheel(BuildArgs),

  /// Build a wheel that is always tagged for this platform and ABI
  PlatformWheel(BuildArgs),

  /// Show package metadata and host platform tags
  Info {
    /// Project directory containing the package
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,
  },
}

/// Options shared by both build entry points.
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
  /// Project directory containing the readme and package directories
  #[arg(long, default_value = ".")]
  pub project_dir: PathBuf,

  /// Directory for the built wheel (default: <project-dir>/dist)
  #[arg(long)]
  pub out_dir: Option<PathBuf>,

  /// Long-description resource (default: <project-dir>/README.txt)
  #[arg(long)]
  pub readme: Option<PathBuf>,

  /// Target Python version as MAJOR.MINOR (default: probe the interpreter)
  #[arg(long)]
  pub python_version: Option<String>,

  /// Interpreter probed for its version (default: python3)
  #[arg(long)]
  pub python: Option<String>,

  /// Platform tag to use instead of the host's
  #[arg(long)]
  pub plat_name: Option<String>,
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let result = match &cli.command {
    Commands::Wheel(args) => cmd::cmd_wheel(args, EntryPoint::Default, cli.output),
    Commands::PlatformWheel(args) => cmd::cmd_wheel(args, EntryPoint::PlatformTagged, cli.output),
    Commands::Info { project_dir } => cmd::cmd_info(project_dir, cli.output),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}
