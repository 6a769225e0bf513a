//! Command-line interface for the Hotelier recommendation engine.
//!
//! Every subcommand loads the JSON dataset, aggregates it once and prints
//! its answer as pretty JSON on stdout. Options layer from flags,
//! `HOTELIER_`-prefixed environment variables and configuration files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod listing;
mod recommend;
mod service;

pub use error::CliError;
use listing::{CitiesArgs, SearchArgs, run_cities, run_search};
use recommend::{RecommendArgs, run_recommend};

const ARG_DATASET: &str = "dataset";
const ARG_CITY: &str = "city";
const ARG_GEOCODER_URL: &str = "geocoder-url";
const ENV_RECOMMEND_CITY: &str = "HOTELIER_CMDS_RECOMMEND_CITY";
const ENV_SEARCH_CITY: &str = "HOTELIER_CMDS_SEARCH_CITY";
const DEFAULT_DATASET: &str = "hotels.json";

/// Run the Hotelier CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Cities(args) => run_cities(args),
        Command::Search(args) => run_search(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "hotelier",
    about = "Persona-aware hotel recommendations from a local dataset",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend hotels for a traveller.
    Recommend(RecommendArgs),
    /// List the cities present in the dataset.
    Cities(CitiesArgs),
    /// List every hotel in a city.
    Search(SearchArgs),
}

#[cfg(test)]
mod tests;
