//! The single error type returned by every `hotelier` subcommand.

use std::sync::Arc;

use camino::Utf8PathBuf;
use hotelier_data::ProviderBuildError;
use thiserror::Error;

/// Reasons a `hotelier` invocation fails before printing its answer.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line did not parse.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Merging flags, environment and config files failed.
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// No layer supplied a required option.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The dataset path does not exist.
    #[error("dataset {path:?} given by --{field} does not exist")]
    MissingDataset {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// The dataset path exists but is not a file.
    #[error("dataset {path:?} given by --{field} is not a regular file")]
    DatasetNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// Reading the dataset path's metadata failed.
    #[error("cannot inspect dataset {path:?} given by --{field}: {source}")]
    InspectDataset {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Constructing the geocoder failed.
    #[error("failed to build geocoder for {base_url:?}: {source}")]
    BuildGeocoder {
        base_url: String,
        #[source]
        source: ProviderBuildError,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
