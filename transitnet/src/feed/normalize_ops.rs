use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

use super::FeedError;
use transitnet_core::model::{Stop, StopVisit};

/// a raw row of a feed's stops file. only the columns needed downstream are
/// kept; extra source columns are ignored by the reader. a missing column
/// fails the whole feed.
#[derive(Debug, Deserialize)]
struct RawStopRow {
    stop_id: String,
    stop_name: String,
    stop_lat: f64,
    stop_lon: f64,
}

/// a raw row of a feed's stop-times file.
#[derive(Debug, Deserialize)]
struct RawStopVisitRow {
    trip_id: String,
    stop_id: String,
    arrival_time: String,
    departure_time: String,
    stop_sequence: u32,
}

/// suffixes the feed name onto a raw identifier so that identical raw ids
/// from different feeds never collide. collisions are structurally
/// prevented here and not checked again downstream.
fn namespace(raw: &str, feed_name: &str) -> String {
    format!("{raw}_{feed_name}")
}

/// normalizes one extracted feed directory into canonical stop and
/// stop-visit records with feed-namespaced stop and trip ids. referential
/// integrity is not checked: a visit referencing an unknown stop passes
/// through.
pub fn parse_feed(feed_dir: &Path, feed_name: &str) -> Result<(Vec<Stop>, Vec<StopVisit>), FeedError> {
    let stops = read_feed_rows::<RawStopRow>(&feed_dir.join("stops.txt"))?
        .into_iter()
        .map(|row| Stop {
            stop_id: namespace(&row.stop_id, feed_name),
            stop_name: row.stop_name,
            stop_lat: row.stop_lat,
            stop_lon: row.stop_lon,
        })
        .collect();

    let visits = read_feed_rows::<RawStopVisitRow>(&feed_dir.join("stop_times.txt"))?
        .into_iter()
        .map(|row| StopVisit {
            trip_id: namespace(&row.trip_id, feed_name),
            stop_id: namespace(&row.stop_id, feed_name),
            arrival_time: row.arrival_time,
            departure_time: row.departure_time,
            stop_sequence: row.stop_sequence,
        })
        .collect();

    Ok((stops, visits))
}

fn read_feed_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, FeedError> {
    let filename = path.display().to_string();
    if !path.exists() {
        return Err(FeedError::MissingFeedFile(filename));
    }
    let reader = csv::ReaderBuilder::new()
        .from_path(path)
        .map_err(|e| FeedError::FeedReadError(filename.clone(), e))?;
    reader
        .into_deserialize::<T>()
        .map(|row| row.map_err(|e| FeedError::FeedReadError(filename.clone(), e)))
        .collect::<Result<Vec<T>, FeedError>>()
}
