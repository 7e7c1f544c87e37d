use serde::{Deserialize, Serialize};

use super::EdgeKind;

/// a directed, time-weighted edge of the multimodal graph. edges live in
/// explicit lists keyed by their position (a synthetic edge id); the
/// (start, end) pair is never a unique key, so parallel edges between the
/// same ordered stop pair are all preserved.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NetworkEdge {
    /// namespaced id of the stop this edge leaves
    pub start: String,
    /// namespaced id of the stop this edge reaches
    pub end: String,
    /// traversal time in seconds. named `distance` in the serialized
    /// artifact, matching the edge attribute queried by the engine.
    #[serde(rename = "distance")]
    pub weight: f64,
    pub kind: EdgeKind,
}

impl NetworkEdge {
    pub fn transit(start: String, end: String, weight: f64) -> NetworkEdge {
        NetworkEdge {
            start,
            end,
            weight,
            kind: EdgeKind::Transit,
        }
    }

    pub fn walk(start: String, end: String, weight: f64) -> NetworkEdge {
        NetworkEdge {
            start,
            end,
            weight,
            kind: EdgeKind::Walk,
        }
    }
}
