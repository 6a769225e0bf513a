//! Test helpers for writing datasets and building engines without network
//! access.

use std::fs;

use camino::Utf8PathBuf;
use hotelier_core::test_support::RecordingGeocoder;
use hotelier_data::JsonFileSource;
use hotelier_engine::RecommendationEngine;
use tempfile::TempDir;

use crate::CliError;
use crate::service::{EngineSettings, HotelService, ServiceBuilder};

/// Two hotels: a Delhi property with a pool and a Mumbai seafront property.
pub(super) const SAMPLE_DATASET: &str = r#"[
  {
    "hotel_name": "Lotus Inn",
    "hotel_address": "12 Janpath, New Delhi",
    "city": "Delhi",
    "country": "India",
    "hotel_star_rating": "4",
    "hotel_facilities": "Pool",
    "price": "3200",
    "avg_score": 8.0,
    "ratings_json": "{\"booking\": {\"rating\": 8.0, \"reviews_count\": 100}}"
  },
  {
    "hotel_name": "Harbour View",
    "hotel_address": "Marine Drive, Mumbai",
    "city": "Mumbai",
    "country": "India",
    "hotel_star_rating": "5",
    "hotel_facilities": "Sea View | Bar",
    "price": 6400,
    "lat": 18.943,
    "lng": 72.823,
    "avg_score": "9.0",
    "ratings_json": "{\"booking\": {\"rating\": 9.0, \"reviews_count\": 900}}"
  }
]"#;

/// A temporary directory holding a dataset file.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn dataset_path(&self) -> Utf8PathBuf {
        self.root.join("hotels.json")
    }

    pub(super) fn root(&self) -> &camino::Utf8Path {
        &self.root
    }

    pub(super) fn write_dataset(&self, contents: &str) -> Utf8PathBuf {
        let path = self.dataset_path();
        fs::write(path.as_std_path(), contents).expect("write dataset file");
        path
    }
}

/// Builds a real engine over the dataset with a geocoder that never resolves.
pub(super) struct OfflineServiceBuilder;

impl ServiceBuilder for OfflineServiceBuilder {
    fn build(&self, settings: &EngineSettings) -> Result<Box<dyn HotelService>, CliError> {
        let source = JsonFileSource::new(settings.dataset.clone());
        Ok(Box::new(RecommendationEngine::new(
            source,
            RecordingGeocoder::unavailable(),
        )))
    }
}
