use itertools::Itertools;
use std::collections::{BTreeMap, HashSet};

use super::{table_ops, FeedError};
use crate::config::AppConfiguration;
use transitnet_core::model::{Stop, StopVisit};

/// per-publisher counts over the accumulated tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSummary {
    pub publisher: String,
    pub stops: usize,
    pub stop_visits: usize,
    pub trips: usize,
}

/// summarizes the accumulated tables by publisher (the feed suffix baked
/// into every namespaced id).
pub fn summarize(stops: &[Stop], visits: &[StopVisit]) -> Vec<FeedSummary> {
    let mut by_publisher: BTreeMap<&str, FeedSummary> = BTreeMap::new();
    for stop in stops {
        let publisher = stop.publisher();
        by_publisher
            .entry(publisher)
            .or_insert_with(|| FeedSummary {
                publisher: String::from(publisher),
                stops: 0,
                stop_visits: 0,
                trips: 0,
            })
            .stops += 1;
    }

    let mut trips_seen: HashSet<&str> = HashSet::new();
    for visit in visits {
        let publisher = visit.stop_id.rsplit('_').next().unwrap_or(&visit.stop_id);
        let entry = by_publisher
            .entry(publisher)
            .or_insert_with(|| FeedSummary {
                publisher: String::from(publisher),
                stops: 0,
                stop_visits: 0,
                trips: 0,
            });
        entry.stop_visits += 1;
        if trips_seen.insert(&visit.trip_id) {
            entry.trips += 1;
        }
    }

    by_publisher.into_values().collect_vec()
}

/// reads the accumulated tables and prints one row per publisher.
pub fn run_summary(config: &AppConfiguration) -> Result<(), FeedError> {
    let stops = table_ops::read_stops(&config.stops_table_path())?;
    let visits = table_ops::read_stop_visits(&config.visits_table_path())?;
    let summaries = summarize(&stops, &visits);

    println!("publisher,stops,stop_visits,trips");
    for summary in summaries.iter() {
        println!(
            "{},{},{},{}",
            summary.publisher, summary.stops, summary.stop_visits, summary.trips
        );
    }
    println!(
        "total: {} publishers, {} stops, {} stop visits",
        summaries.len(),
        stops.len(),
        visits.len()
    );
    Ok(())
}

#[cfg(test)]
mod test {
    use super::summarize;
    use transitnet_core::model::{Stop, StopVisit};

    fn mock_stop(stop_id: &str) -> Stop {
        Stop {
            stop_id: String::from(stop_id),
            stop_name: format!("stop {stop_id}"),
            stop_lat: 47.0,
            stop_lon: 19.0,
        }
    }

    fn mock_visit(trip_id: &str, stop_id: &str, sequence: u32) -> StopVisit {
        StopVisit {
            trip_id: String::from(trip_id),
            stop_id: String::from(stop_id),
            arrival_time: String::from("08:00:00"),
            departure_time: String::from("08:00:00"),
            stop_sequence: sequence,
        }
    }

    #[test]
    fn test_counts_grouped_by_publisher() {
        let stops = vec![
            mock_stop("1_feedA"),
            mock_stop("2_feedA"),
            mock_stop("1_feedB"),
        ];
        let visits = vec![
            mock_visit("T1_feedA", "1_feedA", 1),
            mock_visit("T1_feedA", "2_feedA", 2),
            mock_visit("T2_feedA", "1_feedA", 1),
            mock_visit("T9_feedB", "1_feedB", 1),
        ];
        let summaries = summarize(&stops, &visits);
        assert_eq!(summaries.len(), 2);

        assert_eq!(summaries[0].publisher, "feedA");
        assert_eq!(summaries[0].stops, 2);
        assert_eq!(summaries[0].stop_visits, 3);
        assert_eq!(summaries[0].trips, 2);

        assert_eq!(summaries[1].publisher, "feedB");
        assert_eq!(summaries[1].stops, 1);
        assert_eq!(summaries[1].stop_visits, 1);
        assert_eq!(summaries[1].trips, 1);
    }
}
