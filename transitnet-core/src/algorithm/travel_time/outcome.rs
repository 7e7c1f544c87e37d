use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// result of one (origin, destination) travel time query. failures are
/// per-pair: a missing stop or an unreachable destination never aborts the
/// sibling queries unless the batch runs fail-fast.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TravelTimeOutcome {
    /// shortest-path travel time in hours
    Hours(f64),
    /// both stops exist but no path connects them
    Unreachable,
    /// the named stop is not a node of the graph
    MissingStop(String),
}

impl TravelTimeOutcome {
    pub fn as_hours(&self) -> Option<f64> {
        match self {
            TravelTimeOutcome::Hours(hours) => Some(*hours),
            _ => None,
        }
    }
}

impl Display for TravelTimeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TravelTimeOutcome::Hours(hours) => write!(f, "{hours}"),
            TravelTimeOutcome::Unreachable => write!(f, "unreachable"),
            TravelTimeOutcome::MissingStop(stop_id) => write!(f, "missing stop '{stop_id}'"),
        }
    }
}

/// batch-level failure semantics for travel time queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFailurePolicy {
    /// per-pair failures are reported in place and siblings keep running
    Isolate,
    /// the first pair without a travel time fails the whole batch
    FailFast,
}
