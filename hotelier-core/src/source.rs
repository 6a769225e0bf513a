//! Access to the raw dataset.
//!
//! The `RecordSource` trait hands the engine an ordered sequence of
//! [`RawHotelRecord`] rows. Fetching and parsing are the source's concern; the
//! engine only consumes the rows, once, on first use.

use thiserror::Error;

use crate::RawHotelRecord;

/// Errors from [`RecordSource::load`].
///
/// The engine never propagates these: a failed load leaves it serving an
/// empty collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The dataset could not be reached or opened.
    #[error("dataset {origin} is unavailable: {message}")]
    Unavailable {
        /// Path or URL of the dataset.
        origin: String,
        /// Description of the underlying failure.
        message: String,
    },
    /// The dataset was read but could not be decoded.
    #[error("dataset {origin} is malformed: {message}")]
    Malformed {
        /// Path or URL of the dataset.
        origin: String,
        /// Description of the decoding failure.
        message: String,
    },
}

/// Supply raw hotel rows in dataset order.
///
/// # Examples
///
/// ```rust
/// use hotelier_core::{RawHotelRecord, RecordSource, SourceError};
///
/// struct SingleRow;
///
/// impl RecordSource for SingleRow {
///     fn load(&self) -> Result<Vec<RawHotelRecord>, SourceError> {
///         Ok(vec![RawHotelRecord {
///             name: "Lotus Inn".into(),
///             ..RawHotelRecord::default()
///         }])
///     }
/// }
///
/// assert_eq!(SingleRow.load()?.len(), 1);
/// # Ok::<(), SourceError>(())
/// ```
pub trait RecordSource {
    /// Return every row of the dataset.
    fn load(&self) -> Result<Vec<RawHotelRecord>, SourceError>;
}

impl<T: RecordSource + ?Sized> RecordSource for Box<T> {
    fn load(&self) -> Result<Vec<RawHotelRecord>, SourceError> {
        (**self).load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemorySource;
    use rstest::rstest;

    #[rstest]
    fn memory_source_preserves_order() {
        let rows = vec![
            RawHotelRecord {
                name: "A".into(),
                ..RawHotelRecord::default()
            },
            RawHotelRecord {
                name: "B".into(),
                ..RawHotelRecord::default()
            },
        ];
        let source = MemorySource::with_records(rows.clone());
        assert_eq!(source.load(), Ok(rows));
    }

    #[rstest]
    fn boxed_sources_delegate() {
        let source: Box<dyn RecordSource> = Box::new(MemorySource::failing("offline"));
        let err = source.load().expect_err("failing source");
        assert!(matches!(err, SourceError::Unavailable { .. }));
    }
}
