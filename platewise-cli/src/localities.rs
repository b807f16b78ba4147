//! Localities command implementation for the Platewise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog::load_catalog;
use crate::{ARG_LOCALITIES_CATALOG, CliError, ENV_LOCALITIES_CATALOG};

/// CLI arguments for the `localities` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the localities known to a catalog")]
#[ortho_config(prefix = "PLATEWISE")]
pub(crate) struct LocalitiesArgs {
    /// Path to a JSON array of restaurants.
    #[arg(long = ARG_LOCALITIES_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl LocalitiesArgs {
    fn into_catalog_path(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        merged.catalog.ok_or(CliError::MissingArgument {
            field: ARG_LOCALITIES_CATALOG,
            env: ENV_LOCALITIES_CATALOG,
        })
    }
}

pub(crate) fn run_localities(args: LocalitiesArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_localities_with(args, &mut stdout)
}

pub(crate) fn run_localities_with(
    args: LocalitiesArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let path = args.into_catalog_path()?;
    let catalog = load_catalog(&path)?;
    for locality in catalog.localities() {
        writeln!(writer, "{locality}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}
