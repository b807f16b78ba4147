//! Entry point for the `platewise` command-line interface.
#![forbid(unsafe_code)]

use platewise_cli::CliError;

fn main() -> eyre::Result<()> {
    match platewise_cli::run() {
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        outcome => outcome.map_err(eyre::Report::from),
    }
}
