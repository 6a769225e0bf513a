//! Engine construction and output helpers shared by every subcommand.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use hotelier_core::{
    AggregatedHotel, GeocodeProvider, RecommendationRequest, Recommendations, RecordSource,
    TextMatcher,
};
use hotelier_data::{HttpGeocoder, HttpGeocoderConfig, JsonFileSource};
use hotelier_engine::RecommendationEngine;
use serde::Serialize;

use crate::{ARG_DATASET, CliError};

/// The engine operations the CLI exposes.
pub(crate) trait HotelService {
    fn recommend(&self, request: &RecommendationRequest) -> Recommendations;
    fn available_cities(&self) -> Vec<String>;
    fn search_hotels_by_city(&self, city: &str) -> Vec<AggregatedHotel>;
}

impl<S, G, M> HotelService for RecommendationEngine<S, G, M>
where
    S: RecordSource,
    G: GeocodeProvider,
    M: TextMatcher,
{
    fn recommend(&self, request: &RecommendationRequest) -> Recommendations {
        Self::recommend(self, request)
    }

    fn available_cities(&self) -> Vec<String> {
        Self::available_cities(self)
    }

    fn search_hotels_by_city(&self, city: &str) -> Vec<AggregatedHotel> {
        Self::search_hotels_by_city(self, city)
    }
}

/// Resolved inputs for building an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EngineSettings {
    /// Path to the JSON dataset.
    pub(crate) dataset: Utf8PathBuf,
    /// Base URL of the geocoding service.
    pub(crate) geocoder_url: String,
}

impl EngineSettings {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.dataset, ARG_DATASET)
    }
}

/// Builds the engine for the current invocation.
pub(crate) trait ServiceBuilder {
    fn build(&self, settings: &EngineSettings) -> Result<Box<dyn HotelService>, CliError>;
}

pub(crate) struct DefaultServiceBuilder;

impl ServiceBuilder for DefaultServiceBuilder {
    fn build(&self, settings: &EngineSettings) -> Result<Box<dyn HotelService>, CliError> {
        let geocoder =
            HttpGeocoder::with_config(HttpGeocoderConfig::new(settings.geocoder_url.clone()))
                .map_err(|source| CliError::BuildGeocoder {
                    base_url: settings.geocoder_url.clone(),
                    source,
                })?;
        let source = JsonFileSource::new(settings.dataset.clone());
        Ok(Box::new(RecommendationEngine::new(source, geocoder)))
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::DatasetNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingDataset {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectDataset {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn file_is_file(path: &Utf8Path) -> std::io::Result<bool> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path.file_name().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, format!("{path} has no file name"))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok(dir.metadata(name)?.is_file())
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
