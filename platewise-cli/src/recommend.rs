//! Recommend command implementation for the Platewise CLI.

use std::io::Write;
use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Parser;
use log::{info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use platewise_core::{CompletionProvider, RankingSource, RecommendationResult, UserCriteria};
use platewise_llm::{
    API_KEY_ENV, CompletionConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, HttpCompletionProvider,
};
use platewise_ranker::RankingEngine;
use platewise_scorer::{Integrator, PoolStatistics};
use serde::{Deserialize, Serialize};

use crate::catalog::load_catalog;
use crate::{
    ARG_RECOMMEND_CATALOG, ARG_RECOMMEND_CITY, ARG_RECOMMEND_LLM_BASE_URL,
    ARG_RECOMMEND_LLM_MODEL, ARG_RECOMMEND_LLM_TIMEOUT_SECS, ARG_RECOMMEND_MAX_PRICE,
    ARG_RECOMMEND_TOP_K, CliError, ENV_RECOMMEND_CATALOG, ENV_RECOMMEND_CITY,
    ENV_RECOMMEND_MAX_PRICE,
};

/// Number of recommendations returned when `--top-k` is not given.
pub(crate) const DEFAULT_TOP_K: usize = 10;
/// Completion timeout used when `--llm-timeout-secs` is not given.
pub(crate) const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend restaurants in a locality within a budget. The \
                 catalog is filtered and scored, then ranked by the \
                 completion service when GROQ_API_KEY is set, or by rating, \
                 popularity and price otherwise.",
    about = "Recommend restaurants for a locality and budget"
)]
#[ortho_config(prefix = "PLATEWISE")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON array of restaurants.
    #[arg(long = ARG_RECOMMEND_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Locality to search, matched case-insensitively.
    #[arg(long = ARG_RECOMMEND_CITY, value_name = "name")]
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// Maximum approximate cost for two.
    #[arg(long = ARG_RECOMMEND_MAX_PRICE, value_name = "amount")]
    #[serde(default)]
    pub(crate) max_price: Option<f64>,
    /// Number of recommendations to return (default 10).
    #[arg(long = ARG_RECOMMEND_TOP_K, value_name = "count")]
    #[serde(default)]
    pub(crate) top_k: Option<usize>,
    /// Root of the OpenAI-compatible completion API.
    #[arg(long = ARG_RECOMMEND_LLM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) llm_base_url: Option<String>,
    /// Completion model identifier.
    #[arg(long = ARG_RECOMMEND_LLM_MODEL, value_name = "model")]
    #[serde(default)]
    pub(crate) llm_model: Option<String>,
    /// Completion request timeout in seconds (default 30).
    #[arg(long = ARG_RECOMMEND_LLM_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) llm_timeout_secs: Option<u64>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Path to the catalog JSON.
    pub(crate) catalog: Utf8PathBuf,
    /// Validated locality and budget.
    pub(crate) criteria: UserCriteria,
    /// Maximum number of recommendations.
    pub(crate) top_k: usize,
    /// Completion API root.
    pub(crate) llm_base_url: String,
    /// Completion model.
    pub(crate) llm_model: String,
    /// Completion request timeout.
    pub(crate) llm_timeout: Duration,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_CATALOG,
            env: ENV_RECOMMEND_CATALOG,
        })?;
        let city = args.city.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_CITY,
            env: ENV_RECOMMEND_CITY,
        })?;
        let max_price = args.max_price.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_MAX_PRICE,
            env: ENV_RECOMMEND_MAX_PRICE,
        })?;
        let criteria = UserCriteria::new(city, max_price)?;

        Ok(Self {
            catalog,
            criteria,
            top_k: args.top_k.unwrap_or(DEFAULT_TOP_K),
            llm_base_url: args
                .llm_base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            llm_model: args.llm_model.unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            llm_timeout: Duration::from_secs(
                args.llm_timeout_secs.unwrap_or(DEFAULT_LLM_TIMEOUT_SECS),
            ),
        })
    }
}

/// Builds the completion provider for the current recommend invocation.
///
/// Returning `None` makes the ranking engine use its fallback ordering.
pub(crate) trait ProviderBuilder {
    fn build(&self, config: &RecommendConfig) -> Option<Box<dyn CompletionProvider>>;
}

/// Builds an HTTP provider when `GROQ_API_KEY` is set.
pub(crate) struct EnvProviderBuilder;

impl ProviderBuilder for EnvProviderBuilder {
    fn build(&self, config: &RecommendConfig) -> Option<Box<dyn CompletionProvider>> {
        http_provider(CompletionConfig::from_env(), config)
    }
}

/// Build an HTTP provider from `settings` with the command's overrides.
///
/// Missing settings or a provider that fails to build yield `None`, so the
/// command falls back to the deterministic ranking.
pub(crate) fn http_provider(
    settings: Option<CompletionConfig>,
    config: &RecommendConfig,
) -> Option<Box<dyn CompletionProvider>> {
    let Some(settings) = settings else {
        warn!("{API_KEY_ENV} is not set; using fallback ranking");
        return None;
    };
    let settings = settings
        .with_base_url(config.llm_base_url.clone())
        .with_model(config.llm_model.clone())
        .with_timeout(config.llm_timeout);
    match HttpCompletionProvider::with_config(settings) {
        Ok(provider) => Some(Box::new(provider)),
        Err(err) => {
            warn!("failed to build completion provider: {err}; using fallback ranking");
            None
        }
    }
}

/// JSON document written by the `recommend` command.
#[derive(Debug, Serialize)]
struct RecommendOutput<'a> {
    count: usize,
    source: Option<RankingSource>,
    statistics: PoolStatistics,
    recommendations: &'a [RecommendationResult],
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &EnvProviderBuilder, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn ProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_recommend(&config, builder, writer)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    builder: &dyn ProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let catalog = load_catalog(&config.catalog)?;
    let integrator = Integrator::new(catalog);
    let pool = integrator.integrate(&config.criteria);
    let statistics = Integrator::statistics(&pool);
    let engine = RankingEngine::new(builder.build(config));
    info!(
        "ranking {} of {} restaurants with {}",
        pool.len(),
        integrator.catalog().len(),
        if engine.has_provider() {
            "the completion service"
        } else {
            "the fallback order"
        }
    );
    let report = engine.rank(&pool, &config.criteria, config.top_k);

    let output = RecommendOutput {
        count: report.len(),
        source: report.source(),
        statistics,
        recommendations: &report.results,
    };
    let payload = serde_json::to_string_pretty(&output).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
