use geo::Point;
use itertools::Itertools;
use rstar::primitives::GeomWithData;
use rstar::{RTree, AABB};

use crate::model::{NetworkConfig, Stop};

/// index entry: lon,lat in degrees tagged with the stop's position in the
/// source slice.
type IndexedLocation = GeomWithData<[f64; 2], usize>;

/// one neighbor returned by a radius query: the position of the matched stop
/// in the source slice and its great-circle central angle from the query
/// point, in radians. multiplying the angle by the sphere radius yields the
/// distance in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusMatch {
    pub index: usize,
    pub angular_distance: f64,
}

/// balanced spatial tree over all stop locations answering true range
/// queries ("all stops within the walking radius of stop S"), not k-nearest
/// lookups. candidates come from a degree bounding envelope around the query
/// point; exact haversine filtering on the configured sphere follows. the
/// query point always appears in its own result set.
pub struct StopSpatialIndex {
    tree: RTree<IndexedLocation>,
    locations: Vec<Point<f64>>,
    config: NetworkConfig,
}

impl StopSpatialIndex {
    /// bulk-loads the tree from all stops' coordinates. built once per
    /// network; queries never mutate it.
    pub fn new(stops: &[Stop], config: NetworkConfig) -> StopSpatialIndex {
        let locations = stops
            .iter()
            .map(|stop| Point::new(stop.stop_lon, stop.stop_lat))
            .collect_vec();
        let entries = locations
            .iter()
            .enumerate()
            .map(|(index, point)| GeomWithData::new([point.x(), point.y()], index))
            .collect_vec();
        StopSpatialIndex {
            tree: RTree::bulk_load(entries),
            locations,
            config,
        }
    }

    /// all stops within the configured walking radius of the stop at
    /// `index`, the stop itself included. out-of-range indices match
    /// nothing.
    pub fn within_walk_radius(&self, index: usize) -> Vec<RadiusMatch> {
        let Some(origin) = self.locations.get(index) else {
            return vec![];
        };
        let cutoff = self.config.walk_radius_radians();
        let envelope = degree_envelope(
            origin,
            self.config.max_walk_meters,
            self.config.earth_radius_meters,
        );
        self.tree
            .locate_in_envelope(&envelope)
            .filter_map(|entry| {
                let candidate = self.locations[entry.data];
                let angular_distance = haversine_radians(origin, &candidate);
                (angular_distance <= cutoff).then_some(RadiusMatch {
                    index: entry.data,
                    angular_distance,
                })
            })
            .collect()
    }
}

/// bounding box in degrees guaranteed to contain the radius circle. the
/// longitude span widens with latitude and degenerates to the full range
/// near the poles.
fn degree_envelope(origin: &Point<f64>, radius_meters: f64, earth_radius_meters: f64) -> AABB<[f64; 2]> {
    let dlat = (radius_meters / earth_radius_meters).to_degrees();
    let cos_lat = origin.y().to_radians().cos().abs();
    let dlon = if cos_lat > f64::EPSILON {
        (dlat / cos_lat).min(180.0)
    } else {
        180.0
    };
    AABB::from_corners(
        [origin.x() - dlon, origin.y() - dlat],
        [origin.x() + dlon, origin.y() + dlat],
    )
}

/// great-circle central angle between two degree coordinates, in radians
/// (haversine form). the metric of this index; radius-independent, so the
/// caller scales by the configured sphere.
fn haversine_radians(a: &Point<f64>, b: &Point<f64>) -> f64 {
    let (lat_a, lat_b) = (a.y().to_radians(), b.y().to_radians());
    let half_dlat = (lat_b - lat_a) / 2.0;
    let half_dlon = (b.x() - a.x()).to_radians() / 2.0;
    let h = half_dlat.sin().powi(2) + lat_a.cos() * lat_b.cos() * half_dlon.sin().powi(2);
    2.0 * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod test {
    use super::StopSpatialIndex;
    use crate::model::{NetworkConfig, Stop};

    fn mock_stop(stop_id: &str, lat: f64, lon: f64) -> Stop {
        Stop {
            stop_id: String::from(stop_id),
            stop_name: format!("stop {stop_id}"),
            stop_lat: lat,
            stop_lon: lon,
        }
    }

    fn mock_config(max_walk_meters: f64) -> NetworkConfig {
        NetworkConfig {
            max_walk_meters,
            ..Default::default()
        }
    }

    #[test]
    fn test_query_point_appears_in_own_result() {
        let stops = vec![mock_stop("a_f", 47.5, 19.05)];
        let index = StopSpatialIndex::new(&stops, mock_config(500.0));
        let matches = index.within_walk_radius(0);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].index, 0);
        assert_eq!(matches[0].angular_distance, 0.0);
    }

    #[test]
    fn test_radius_cutoff_excludes_distant_stops() {
        // B is ~50m north of A, C is ~2000m north of A
        let stops = vec![
            mock_stop("a_f", 47.0, 19.0),
            mock_stop("b_f", 47.00045, 19.0),
            mock_stop("c_f", 47.018, 19.0),
        ];
        let config = mock_config(500.0);
        let index = StopSpatialIndex::new(&stops, config);

        let matched: Vec<usize> = index.within_walk_radius(0).iter().map(|m| m.index).collect();
        assert!(matched.contains(&0));
        assert!(matched.contains(&1));
        assert!(!matched.contains(&2));

        let near = index
            .within_walk_radius(0)
            .into_iter()
            .find(|m| m.index == 1)
            .expect("test invariant failed: B not matched");
        let meters = near.angular_distance * config.earth_radius_meters;
        assert!((meters - 50.0).abs() < 1.0, "distance was {meters}m");
    }

    #[test]
    fn test_symmetric_matches() {
        let stops = vec![
            mock_stop("a_f", 47.0, 19.0),
            mock_stop("b_f", 47.00045, 19.0),
        ];
        let index = StopSpatialIndex::new(&stops, mock_config(500.0));
        assert!(index.within_walk_radius(0).iter().any(|m| m.index == 1));
        assert!(index.within_walk_radius(1).iter().any(|m| m.index == 0));
    }

    #[test]
    fn test_out_of_range_index_matches_nothing() {
        let stops = vec![mock_stop("a_f", 47.0, 19.0)];
        let index = StopSpatialIndex::new(&stops, mock_config(500.0));
        assert!(index.within_walk_radius(7).is_empty());
    }
}
