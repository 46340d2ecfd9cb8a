//! `cf-sync-submodules` command implementation.

use clap::Parser;

use crate::app::api;
use crate::app::logging::init_logging;
use crate::domain::{AppError, SubmoduleState};

#[derive(Parser)]
#[command(name = "cf-sync-submodules")]
#[command(version)]
#[command(
    about = "Initialize missing submodules below modules/ of $CF_BASE and $CF_REPO_BASE",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Entry point for the CLI.
pub fn run() {
    let cli: Cli = super::parse_or_exit();
    init_logging(cli.verbose);
    super::exit_on_error(run_sync());
}

fn run_sync() -> Result<(), AppError> {
    let outcome = api::sync_submodules()?;

    if outcome.remote_job {
        println!("ℹ️ Remote job, submodules left untouched");
        return Ok(());
    }

    for synced in &outcome.submodules {
        let path = synced.entry.path();
        match synced.state {
            SubmoduleState::Initialized => println!("✅ Initialized {}", path.display()),
            SubmoduleState::Updated => println!("✅ Updated {}", path.display()),
            SubmoduleState::Skipped(reason) => {
                println!("ℹ️ Skipped {} ({})", path.display(), reason)
            }
        }
    }
    if outcome.submodules.is_empty() {
        println!("ℹ️ No submodules found");
    }
    Ok(())
}
