use serde::{Deserialize, Serialize};

/// geospatial constants for network construction. an explicit immutable
/// value passed into the spatial index and the edge builders rather than
/// ambient global state.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    /// sphere radius used for great-circle distances, in meters
    pub earth_radius_meters: f64,
    /// maximum distance covered by a walking connection, in meters
    pub max_walk_meters: f64,
    /// preferred walking speed, in meters per second
    pub walking_speed_mps: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            earth_radius_meters: 6_371_000.0,
            max_walk_meters: 500.0,
            walking_speed_mps: 1.2,
        }
    }
}

impl NetworkConfig {
    /// the walking radius as a central angle on the configured sphere, in
    /// radians. this is the cutoff used by spatial radius queries.
    pub fn walk_radius_radians(&self) -> f64 {
        self.max_walk_meters / self.earth_radius_meters
    }
}
