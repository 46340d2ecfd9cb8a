//! CLI Adapter.

pub mod create_venv;
pub mod sync_submodules;

use clap::Parser;

use crate::domain::AppError;
use crate::domain::error::EXIT_INVALID_ARGUMENT;

/// Parse arguments; usage errors count as invalid invocations.
fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { EXIT_INVALID_ARGUMENT } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

/// Report an error on stderr and exit with its mapped code.
fn exit_on_error(result: Result<(), AppError>) {
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
