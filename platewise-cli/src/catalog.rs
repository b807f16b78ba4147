//! Catalog loading for CLI commands.

use std::io::BufReader;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use log::info;
use platewise_core::{Catalog, Restaurant};

use crate::CliError;

/// Load a JSON array of restaurants from `path`.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<Catalog, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenCatalog {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let records: Vec<Restaurant> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            CliError::ParseCatalog {
                path: path.to_path_buf(),
                source,
            }
        })?;
    let catalog = Catalog::new(records).map_err(|source| CliError::InvalidCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded {} restaurants from {path}", catalog.len());
    Ok(catalog)
}
