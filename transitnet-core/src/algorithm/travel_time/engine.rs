use kdam::{tqdm, BarExt};
use petgraph::algo::dijkstra;
use rayon::prelude::*;
use std::sync::{Arc, Mutex};

use super::{BatchFailurePolicy, TravelTimeOutcome};
use crate::model::graph::TransitGraph;
use crate::model::NetworkError;
use crate::util::time_ops;

/// computes shortest-path travel times for an ordered batch of
/// (origin, destination) stop id pairs. each pair is an independent task on
/// a fixed pool of `parallelism` workers sharing the read-only graph; the
/// indexed collect puts every outcome back into its input slot, so results
/// always come back in input order regardless of scheduling.
///
/// the optional progress bar is updated from workers as tasks finish and
/// has no effect on ordering or results.
pub fn batch_travel_times(
    graph: &TransitGraph,
    pairs: &[(String, String)],
    parallelism: usize,
    progress: bool,
    policy: BatchFailurePolicy,
) -> Result<Vec<TravelTimeOutcome>, NetworkError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(parallelism)
        .build()
        .map_err(|e| NetworkError::WorkerPoolError(e.to_string()))?;

    let bar = if progress {
        Some(Arc::new(Mutex::new(tqdm!(
            total = pairs.len(),
            desc = "travel times"
        ))))
    } else {
        None
    };

    let outcomes: Vec<TravelTimeOutcome> = pool.install(|| {
        pairs
            .par_iter()
            .map(|(origin, destination)| {
                let outcome = travel_time(graph, origin, destination);
                if let Some(bar) = &bar {
                    if let Ok(mut bar) = bar.lock() {
                        let _ = bar.update(1);
                    }
                }
                outcome
            })
            .collect()
    });
    if progress {
        eprintln!();
    }

    match policy {
        BatchFailurePolicy::Isolate => Ok(outcomes),
        BatchFailurePolicy::FailFast => {
            for (index, ((origin, destination), outcome)) in
                pairs.iter().zip(outcomes.iter()).enumerate()
            {
                if outcome.as_hours().is_none() {
                    return Err(NetworkError::QueryFailure(
                        index,
                        origin.clone(),
                        destination.clone(),
                        outcome.to_string(),
                    ));
                }
            }
            Ok(outcomes)
        }
    }
}

/// single-pair shortest path over the `distance` edge attribute (seconds),
/// converted to hours. non-negative weights are guaranteed at assembly, so
/// Dijkstra applies.
fn travel_time(graph: &TransitGraph, origin: &str, destination: &str) -> TravelTimeOutcome {
    let Some(start) = graph.node_index(origin) else {
        return TravelTimeOutcome::MissingStop(origin.to_string());
    };
    let Some(goal) = graph.node_index(destination) else {
        return TravelTimeOutcome::MissingStop(destination.to_string());
    };
    let distances = dijkstra(graph.graph(), start, Some(goal), |edge| edge.weight().weight);
    match distances.get(&goal) {
        Some(seconds) => TravelTimeOutcome::Hours(seconds / time_ops::HOUR as f64),
        None => TravelTimeOutcome::Unreachable,
    }
}
