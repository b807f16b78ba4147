//! Command-line interface for Platewise restaurant recommendations.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod catalog;
mod error;
mod localities;
mod recommend;

pub use error::CliError;

use localities::{LocalitiesArgs, run_localities};
use recommend::{RecommendArgs, run_recommend};

const ARG_RECOMMEND_CATALOG: &str = "catalog";
const ARG_RECOMMEND_CITY: &str = "city";
const ARG_RECOMMEND_MAX_PRICE: &str = "max-price";
const ARG_RECOMMEND_TOP_K: &str = "top-k";
const ARG_RECOMMEND_LLM_BASE_URL: &str = "llm-base-url";
const ARG_RECOMMEND_LLM_MODEL: &str = "llm-model";
const ARG_RECOMMEND_LLM_TIMEOUT_SECS: &str = "llm-timeout-secs";
const ENV_RECOMMEND_CATALOG: &str = "PLATEWISE_CMDS_RECOMMEND_CATALOG";
const ENV_RECOMMEND_CITY: &str = "PLATEWISE_CMDS_RECOMMEND_CITY";
const ENV_RECOMMEND_MAX_PRICE: &str = "PLATEWISE_CMDS_RECOMMEND_MAX_PRICE";

const ARG_LOCALITIES_CATALOG: &str = "catalog";
const ENV_LOCALITIES_CATALOG: &str = "PLATEWISE_CMDS_LOCALITIES_CATALOG";

/// Run the Platewise CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Localities(args) => run_localities(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "platewise",
    about = "Restaurant recommendations by locality and budget",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend restaurants for a locality and budget.
    Recommend(RecommendArgs),
    /// List the localities known to a catalog.
    Localities(LocalitiesArgs),
}

#[cfg(test)]
mod tests;
