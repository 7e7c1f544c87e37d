mod stop_rtree;

pub use stop_rtree::{RadiusMatch, StopSpatialIndex};
