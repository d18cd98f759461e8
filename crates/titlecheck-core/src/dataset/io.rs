//! Semicolon-delimited corpus files.
//!
//! Two layouts share one reader: the minimal `Title;Label` files written by
//! the generator and merger, and the extended
//! `Title;Author;ISBN;PublishYear;Publisher;Genre;Label` files written by the
//! catalogue fetcher.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;

use crate::error::{Result, TitleCheckError};
use crate::types::{LabeledTitle, TitleRecord};

/// Field delimiter of every corpus file.
pub const DELIMITER: u8 = b';';

/// Load every row of a corpus file.
///
/// # Errors
///
/// Returns `TitleCheckError::EmptyDataset` if the file has a header but no
/// rows, and `TitleCheckError::Csv` for unreadable or malformed files.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<TitleRecord>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new().delimiter(DELIMITER).from_path(path)?;

    let records = reader
        .deserialize::<TitleRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if records.is_empty() {
        return Err(TitleCheckError::EmptyDataset {
            path: path.display().to_string(),
        });
    }

    tracing::info!(path = %path.display(), rows = records.len(), "loaded corpus");
    Ok(records)
}

/// Write records with the extended header.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[TitleRecord]) -> Result<()> {
    write_rows(path.as_ref(), &TitleRecord::HEADER, records)
}

/// Write rows with the minimal `Title;Label` header.
pub fn write_labeled_titles<P: AsRef<Path>>(path: P, rows: &[LabeledTitle]) -> Result<()> {
    write_rows(path.as_ref(), &LabeledTitle::HEADER, rows)
}

/// Write a single-column `Publisher` file.
pub fn write_publishers<P: AsRef<Path>>(path: P, publishers: &[String]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = WriterBuilder::new().delimiter(DELIMITER).from_path(path)?;
    writer.write_record(["Publisher"])?;
    for publisher in publishers {
        writer.write_record([publisher])?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = publishers.len(), "wrote publishers");
    Ok(())
}

/// The header is written explicitly so an empty corpus still carries it.
fn write_rows<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = rows.len(), "wrote corpus");
    Ok(())
}
