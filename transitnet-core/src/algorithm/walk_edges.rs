use kdam::tqdm;

use super::spatial::StopSpatialIndex;
use crate::model::graph::NetworkEdge;
use crate::model::{NetworkConfig, Stop};

/// derives directed walking edges between all stop pairs within the walking
/// radius. each stop is queried in turn (sequentially, with a progress
/// indicator), so both directions of every nearby pair are produced; self
/// pairs are excluded. weight = great-circle distance on the configured
/// sphere divided by the preferred walking speed, in seconds.
pub fn derive_walk_edges(
    stops: &[Stop],
    index: &StopSpatialIndex,
    config: &NetworkConfig,
) -> Vec<NetworkEdge> {
    let mut edges: Vec<NetworkEdge> = vec![];
    let iter = tqdm!(
        stops.iter().enumerate(),
        total = stops.len(),
        desc = "walk edges"
    );
    for (i, start) in iter {
        for neighbor in index.within_walk_radius(i) {
            if neighbor.index == i {
                continue;
            }
            let Some(end) = stops.get(neighbor.index) else {
                continue;
            };
            let meters = neighbor.angular_distance * config.earth_radius_meters;
            edges.push(NetworkEdge::walk(
                start.stop_id.clone(),
                end.stop_id.clone(),
                meters / config.walking_speed_mps,
            ));
        }
    }
    eprintln!();
    edges
}
