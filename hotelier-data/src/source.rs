//! JSON dataset loader.

use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use hotelier_core::{RawHotelRecord, RecordSource, SourceError};

/// A [`RecordSource`] reading a JSON array of rows from a UTF-8 path.
///
/// Rows are decoded leniently (see [`RawHotelRecord`]); the file is re-read
/// on every [`load`](RecordSource::load).
///
/// # Examples
/// ```no_run
/// use hotelier_core::RecordSource;
/// use hotelier_data::JsonFileSource;
///
/// let rows = JsonFileSource::new("data/hotels.json").load()?;
/// println!("{} rows", rows.len());
/// # Ok::<(), hotelier_core::SourceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    path: Utf8PathBuf,
}

impl JsonFileSource {
    /// Read rows from `path`.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The dataset path.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<RawHotelRecord>, SourceError> {
        let origin = self.path.to_string();
        let file = fs_utf8::File::open_ambient(&self.path, ambient_authority()).map_err(|err| {
            SourceError::Unavailable {
                origin: origin.clone(),
                message: err.to_string(),
            }
        })?;
        let records: Vec<RawHotelRecord> = serde_json::from_reader(BufReader::new(file))
            .map_err(|err| SourceError::Malformed {
                origin: origin.clone(),
                message: err.to_string(),
            })?;
        log::debug!("loaded {} rows from {origin}", records.len());
        Ok(records)
    }
}
