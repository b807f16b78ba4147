//! Error types emitted by the Platewise CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use platewise_core::{CriteriaError, RestaurantError};
use thiserror::Error;

/// Errors emitted by the Platewise CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The search criteria failed validation.
    #[error("invalid search criteria: {0}")]
    InvalidCriteria(#[from] CriteriaError),
    /// Opening the catalog file failed.
    #[error("failed to open catalog at {path:?}: {source}")]
    OpenCatalog {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Catalog JSON could not be decoded.
    #[error("failed to parse catalog JSON at {path:?}: {source}")]
    ParseCatalog {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A catalog record failed validation.
    #[error("catalog at {path:?} contains an invalid restaurant: {source}")]
    InvalidCatalog {
        path: Utf8PathBuf,
        #[source]
        source: RestaurantError,
    },
    /// Serializing the recommendations failed.
    #[error("failed to serialize recommendations: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
