use serde::{Deserialize, Serialize};

/// a row in the accumulated stop-visits table: one scheduled call of a trip
/// at a stop. trip and stop ids carry the same `_<feedname>` suffix as the
/// stops table.
///
/// arrival and departure times are `HH:MM:SS` clock strings where the hour
/// may exceed 23 for trips crossing midnight, so they stay unparsed here and
/// are converted to seconds during edge derivation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StopVisit {
    /// namespaced trip identifier
    pub trip_id: String,
    /// namespaced stop identifier
    pub stop_id: String,
    /// scheduled arrival clock time, `HH:MM:SS`
    pub arrival_time: String,
    /// scheduled departure clock time, `HH:MM:SS`. retained for the table
    /// schema but unused in edge weighting.
    pub departure_time: String,
    /// position of this call within its trip
    pub stop_sequence: u32,
}
