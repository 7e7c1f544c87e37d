use csv::QuoteStyle;
use flate2::read::GzDecoder;
use flate2::{write::GzEncoder, Compression};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;

use super::FeedError;
use transitnet_core::model::{Stop, StopVisit};

/// builds a gzipped CSV writer for an accumulated table, truncating any
/// prior content. creating both table writers up front is what purges the
/// store before a merge.
pub fn create_table_writer(path: &Path) -> Result<csv::Writer<GzEncoder<File>>, FeedError> {
    let file = File::create(path)
        .map_err(|e| FeedError::TableCreateError(path.display().to_string(), e))?;
    let buffer = GzEncoder::new(file, Compression::default());
    let writer = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(buffer);
    Ok(writer)
}

pub fn read_stops(path: &Path) -> Result<Vec<Stop>, FeedError> {
    read_table(path)
}

pub fn read_stop_visits(path: &Path) -> Result<Vec<StopVisit>, FeedError> {
    read_table(path)
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, FeedError> {
    let filename = path.display().to_string();
    let file =
        File::open(path).map_err(|e| FeedError::TableReadError(filename.clone(), e.to_string()))?;
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(GzDecoder::new(file));
    reader
        .into_deserialize::<T>()
        .map(|row| row.map_err(|e| FeedError::TableReadError(filename.clone(), e.to_string())))
        .collect::<Result<Vec<T>, FeedError>>()
}
