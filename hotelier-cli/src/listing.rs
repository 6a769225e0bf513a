//! `cities` and `search` command implementations.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use hotelier_data::DEFAULT_GEOCODER_URL;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::service::{DefaultServiceBuilder, EngineSettings, ServiceBuilder, write_json};
use crate::{ARG_CITY, ARG_DATASET, CliError, DEFAULT_DATASET, ENV_SEARCH_CITY};

/// CLI arguments for the `cities` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "cities", about = "List the cities present in the dataset")]
#[ortho_config(prefix = "HOTELIER")]
pub(crate) struct CitiesArgs {
    /// Path to the JSON dataset (default `hotels.json`).
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
}

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "search",
    long_about = "List every hotel whose city matches exactly, ignoring \
                 case. Pass `all` to list the whole dataset.",
    about = "List the hotels in a city"
)]
#[ortho_config(prefix = "HOTELIER")]
pub(crate) struct SearchArgs {
    /// Path to the JSON dataset (default `hotels.json`).
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// City to list, or `all`.
    #[arg(long = ARG_CITY, value_name = "city")]
    #[serde(default)]
    pub(crate) city: Option<String>,
}

/// Listings never geocode, so the default service URL is only a placeholder.
fn settings_for(dataset: Option<Utf8PathBuf>) -> EngineSettings {
    EngineSettings {
        dataset: dataset.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATASET)),
        geocoder_url: DEFAULT_GEOCODER_URL.to_owned(),
    }
}

pub(crate) fn run_cities(args: CitiesArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_cities_with(args, &DefaultServiceBuilder, &mut stdout)
}

pub(crate) fn run_cities_with(
    args: CitiesArgs,
    builder: &dyn ServiceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let settings = settings_for(merged.dataset);
    settings.validate_sources()?;
    let cities = builder.build(&settings)?.available_cities();
    write_json(writer, &cities)
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_search_with(args, &DefaultServiceBuilder, &mut stdout)
}

pub(crate) fn run_search_with(
    args: SearchArgs,
    builder: &dyn ServiceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let city = merged.city.ok_or(CliError::MissingArgument {
        field: ARG_CITY,
        env: ENV_SEARCH_CITY,
    })?;
    let settings = settings_for(merged.dataset);
    settings.validate_sources()?;
    let hotels = builder.build(&settings)?.search_hotels_by_city(&city);
    write_json(writer, &hotels)
}
