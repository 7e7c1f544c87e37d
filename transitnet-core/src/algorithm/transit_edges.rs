use itertools::Itertools;
use std::collections::HashMap;

use crate::model::graph::NetworkEdge;
use crate::model::{NetworkError, StopVisit};
use crate::util::time_ops;

/// derives directed transit edges from consecutive stop visits that share a
/// trip. visits are ordered by (trip_id, stop_sequence) before pairing, so
/// the result does not depend on source row order; pairs spanning a trip
/// boundary are dropped. weights are the arrival time difference in whole
/// seconds.
///
/// with `prune`, duplicate (start, end) pairs collapse to their minimum
/// weight; otherwise every consecutive pair keeps its own edge and the
/// multigraph holds them all.
pub fn derive_transit_edges(
    visits: &[StopVisit],
    prune: bool,
) -> Result<Vec<NetworkEdge>, NetworkError> {
    let ordered = visits
        .iter()
        .sorted_by(|a, b| {
            a.trip_id
                .cmp(&b.trip_id)
                .then(a.stop_sequence.cmp(&b.stop_sequence))
        })
        .collect_vec();

    let mut edges: Vec<NetworkEdge> = Vec::with_capacity(ordered.len().saturating_sub(1));
    for (prev, next) in ordered.iter().tuple_windows() {
        if prev.trip_id != next.trip_id {
            continue;
        }
        let arrival_prev = time_ops::parse_clock_time(&prev.arrival_time)?;
        let arrival_next = time_ops::parse_clock_time(&next.arrival_time)?;
        edges.push(NetworkEdge::transit(
            prev.stop_id.clone(),
            next.stop_id.clone(),
            (arrival_next - arrival_prev) as f64,
        ));
    }

    if !prune {
        return Ok(edges);
    }

    // minimum weight per ordered (start, end) pair, in first-seen order
    let mut pruned: Vec<NetworkEdge> = Vec::with_capacity(edges.len());
    let mut positions: HashMap<(String, String), usize> = HashMap::new();
    for edge in edges {
        let key = (edge.start.clone(), edge.end.clone());
        match positions.get(&key) {
            Some(i) => {
                if edge.weight < pruned[*i].weight {
                    pruned[*i].weight = edge.weight;
                }
            }
            None => {
                positions.insert(key, pruned.len());
                pruned.push(edge);
            }
        }
    }
    Ok(pruned)
}

#[cfg(test)]
mod test {
    use super::derive_transit_edges;
    use crate::model::StopVisit;

    fn mock_visit(trip_id: &str, stop_id: &str, arrival: &str, sequence: u32) -> StopVisit {
        StopVisit {
            trip_id: String::from(trip_id),
            stop_id: String::from(stop_id),
            arrival_time: String::from(arrival),
            departure_time: String::from(arrival),
            stop_sequence: sequence,
        }
    }

    #[test]
    fn test_consecutive_visits_weighted_by_arrival_difference() {
        let visits = vec![
            mock_visit("t1_f", "a_f", "08:00:00", 1),
            mock_visit("t1_f", "b_f", "08:05:30", 2),
            mock_visit("t1_f", "c_f", "08:10:00", 3),
        ];
        let edges = derive_transit_edges(&visits, false).expect("should derive edges");
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].start, "a_f");
        assert_eq!(edges[0].end, "b_f");
        assert_eq!(edges[0].weight, 330.0);
        assert_eq!(edges[1].start, "b_f");
        assert_eq!(edges[1].end, "c_f");
        assert_eq!(edges[1].weight, 270.0);
        // no edge skips the middle visit
        assert!(!edges.iter().any(|e| e.start == "a_f" && e.end == "c_f"));
    }

    #[test]
    fn test_trip_boundaries_produce_no_edges() {
        // adjacent rows from different trips must not pair up
        let visits = vec![
            mock_visit("t1_f", "a_f", "08:00:00", 1),
            mock_visit("t1_f", "b_f", "08:04:00", 2),
            mock_visit("t2_f", "c_f", "09:00:00", 1),
            mock_visit("t2_f", "d_f", "09:07:00", 2),
        ];
        let edges = derive_transit_edges(&visits, false).expect("should derive edges");
        assert_eq!(edges.len(), 2);
        assert!(!edges.iter().any(|e| e.start == "b_f" && e.end == "c_f"));
    }

    #[test]
    fn test_unsorted_input_is_ordered_by_sequence() {
        let visits = vec![
            mock_visit("t1_f", "c_f", "08:10:00", 3),
            mock_visit("t1_f", "a_f", "08:00:00", 1),
            mock_visit("t1_f", "b_f", "08:05:30", 2),
        ];
        let edges = derive_transit_edges(&visits, false).expect("should derive edges");
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].start, "a_f");
        assert_eq!(edges[0].end, "b_f");
        assert_eq!(edges[0].weight, 330.0);
    }

    #[test]
    fn test_prune_collapses_duplicate_pairs_to_minimum() {
        let visits = vec![
            mock_visit("t1_f", "x_f", "08:00:00", 1),
            mock_visit("t1_f", "y_f", "08:01:40", 2),
            mock_visit("t2_f", "x_f", "09:00:00", 1),
            mock_visit("t2_f", "y_f", "09:01:20", 2),
        ];
        let pruned = derive_transit_edges(&visits, true).expect("should derive edges");
        assert_eq!(pruned.len(), 1);
        assert_eq!(pruned[0].weight, 80.0);

        let unpruned = derive_transit_edges(&visits, false).expect("should derive edges");
        assert_eq!(unpruned.len(), 2);
    }

    #[test]
    fn test_malformed_arrival_time_fails() {
        let visits = vec![
            mock_visit("t1_f", "a_f", "08:00:00", 1),
            mock_visit("t1_f", "b_f", "late", 2),
        ];
        assert!(derive_transit_edges(&visits, false).is_err());
    }
}
