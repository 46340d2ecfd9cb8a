//! `cf-create-venv` command implementation.

use std::path::PathBuf;

use clap::Parser;

use crate::adapters::DEFAULT_PYTHON;
use crate::app::api::{self, CreateVenvOptions};
use crate::app::logging::init_logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "cf-create-venv")]
#[command(version)]
#[command(
    about = "Create a relocatable virtual environment below $CF_VENV_BASE",
    long_about = None
)]
struct Cli {
    /// Environment name; names ending in _dev share the parent interpreter's packages
    name: Option<String>,
    /// Interpreter used to run the venv module
    #[arg(long, default_value = DEFAULT_PYTHON)]
    python: String,
    /// Requirements file installed into the new environment (repeatable)
    #[arg(short, long = "requirements", value_name = "FILE")]
    requirements: Vec<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Entry point for the CLI.
pub fn run() {
    let cli: Cli = super::parse_or_exit();
    init_logging(cli.verbose);
    super::exit_on_error(run_create(cli));
}

fn run_create(cli: Cli) -> Result<(), AppError> {
    let name = cli.name.unwrap_or_default();
    let options = CreateVenvOptions { requirements: cli.requirements };

    let outcome = api::create_venv(&name, &cli.python, &options)?;

    println!("✅ Created {} environment at {}", outcome.mode, outcome.path.display());
    for requirements in &outcome.installed {
        println!("  • installed {}", requirements.display());
    }
    Ok(())
}
