//! Recommend command implementation for the Hotelier CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use hotelier_core::{FilterSet, Persona, RecommendationRequest, Recommendations};
use hotelier_data::DEFAULT_GEOCODER_URL;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::service::{DefaultServiceBuilder, EngineSettings, ServiceBuilder, write_json};
use crate::{ARG_CITY, ARG_DATASET, ARG_GEOCODER_URL, CliError, DEFAULT_DATASET, ENV_RECOMMEND_CITY};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Recommend up to five hotels for a traveller persona in a \
                 city. Preferences and the optional filters narrow and \
                 re-rank the candidates; an area that matches no address is \
                 geocoded and used to sort by distance.",
    about = "Recommend hotels for a traveller"
)]
#[ortho_config(prefix = "HOTELIER")]
pub(crate) struct RecommendArgs {
    /// Path to the JSON dataset (default `hotels.json`).
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Base URL of the geocoding service.
    #[arg(long = ARG_GEOCODER_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) geocoder_url: Option<String>,
    /// Traveller persona: family, business, luxury, solo or couple.
    #[arg(long, value_name = "persona")]
    #[serde(default)]
    pub(crate) persona: Option<String>,
    /// Target city, or `all`.
    #[arg(long = ARG_CITY, value_name = "city")]
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// Free-text preference; repeat for several.
    #[arg(long = "preference", value_name = "text")]
    #[serde(default)]
    pub(crate) preferences: Vec<String>,
    /// Inclusive lower price bound; needs `--price-max`.
    #[arg(long, value_name = "amount")]
    #[serde(default)]
    pub(crate) price_min: Option<f64>,
    /// Inclusive upper price bound; needs `--price-min`.
    #[arg(long, value_name = "amount")]
    #[serde(default)]
    pub(crate) price_max: Option<f64>,
    /// Accepted star rating; repeat for several.
    #[arg(long = "stars", value_name = "stars")]
    #[serde(default)]
    pub(crate) stars: Vec<u8>,
    /// Inclusive lower bound on the average score.
    #[arg(long, value_name = "score")]
    #[serde(default)]
    pub(crate) rating_min: Option<f64>,
    /// Inclusive upper bound on the average score.
    #[arg(long, value_name = "score")]
    #[serde(default)]
    pub(crate) rating_max: Option<f64>,
    /// Neighbourhood or landmark to search near.
    #[arg(long, value_name = "text")]
    #[serde(default)]
    pub(crate) area: Option<String>,
    /// Extra free-text requirements added to the search.
    #[arg(long, value_name = "text")]
    #[serde(default)]
    pub(crate) extra: Option<String>,
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
    /// Dataset and geocoder settings.
    pub(crate) engine: EngineSettings,
    /// The request to answer.
    pub(crate) request: RecommendationRequest,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let city = args.city.ok_or(CliError::MissingArgument {
            field: ARG_CITY,
            env: ENV_RECOMMEND_CITY,
        })?;
        let engine = EngineSettings {
            dataset: args
                .dataset
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATASET)),
            geocoder_url: args
                .geocoder_url
                .unwrap_or_else(|| DEFAULT_GEOCODER_URL.to_owned()),
        };
        let persona = args.persona.as_deref().and_then(Persona::parse_lenient);
        let filters = FilterSet {
            price_min: args.price_min,
            price_max: args.price_max,
            star_ratings: args.stars,
            avg_rating_min: args.rating_min,
            avg_rating_max: args.rating_max,
            area: args.area,
            extra_requirements: args.extra,
        };
        let request = RecommendationRequest {
            persona,
            city,
            preferences: args.preferences,
            filters,
        };
        Ok(Self { engine, request })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &DefaultServiceBuilder, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn ServiceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let response = execute_recommend(args, builder)?;
    write_json(writer, &response)
}

fn execute_recommend(
    args: RecommendArgs,
    builder: &dyn ServiceBuilder,
) -> Result<Recommendations, CliError> {
    let config = args.into_config()?;
    config.engine.validate_sources()?;
    let service = builder.build(&config.engine)?;
    Ok(service.recommend(&config.request))
}
