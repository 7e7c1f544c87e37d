use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::io::Write;

use super::CliError;
use crate::config::AppConfiguration;
use crate::feed::{merge_ops, summary_ops};
use crate::network::network_ops;
use transitnet_core::algorithm::travel_time::{
    batch_travel_times, BatchFailurePolicy, TravelTimeOutcome,
};

#[derive(Debug, Clone, Subcommand)]
pub enum TransitnetOperation {
    /// extract all configured feed archives and rebuild the accumulated
    /// stop and stop-visit tables
    MergeFeeds {
        /// path to a TOML or JSON run configuration file
        #[arg(long)]
        config: String,
    },
    /// assemble the multimodal travel graph and persist the network artifact
    BuildNetwork {
        #[arg(long)]
        config: String,
        /// collapse duplicate (start, end) transit edges to their minimum weight
        #[arg(long, default_value_t = true)]
        prune: bool,
        /// rebuild the graph even when a cached artifact exists
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// answer a batch of point-to-point travel time queries against the
    /// assembled graph
    TravelTimes {
        #[arg(long)]
        config: String,
        /// CSV file with origin,destination stop id columns
        #[arg(long)]
        queries: String,
        /// output CSV path; results go to stdout when omitted
        #[arg(long)]
        output: Option<String>,
        #[arg(long, default_value_t = 1)]
        parallelism: usize,
        #[arg(long, default_value_t = false)]
        progress: bool,
        /// abort the whole batch on the first failed pair instead of
        /// reporting failures per pair
        #[arg(long, default_value_t = false)]
        fail_fast: bool,
    },
    /// report per-publisher counts over the accumulated tables
    Summary {
        #[arg(long)]
        config: String,
    },
}

impl TransitnetOperation {
    pub fn run(&self) {
        match self {
            TransitnetOperation::MergeFeeds { config } => {
                let conf = AppConfiguration::try_from(config)
                    .expect("failed reading run configuration");
                merge_ops::merge_feeds(&conf).expect("failed merging feeds")
            }
            TransitnetOperation::BuildNetwork {
                config,
                prune,
                overwrite,
            } => {
                let conf = AppConfiguration::try_from(config)
                    .expect("failed reading run configuration");
                let graph = network_ops::load_network(&conf, *prune, *overwrite)
                    .expect("failed building network");
                println!(
                    "network has {} stops and {} edges",
                    graph.n_nodes(),
                    graph.n_edges()
                );
            }
            TransitnetOperation::TravelTimes {
                config,
                queries,
                output,
                parallelism,
                progress,
                fail_fast,
            } => {
                let conf = AppConfiguration::try_from(config)
                    .expect("failed reading run configuration");
                let graph = network_ops::load_network(&conf, true, false)
                    .expect("failed loading network");
                let pairs = read_query_pairs(queries).expect("failed reading query pairs");
                let policy = if *fail_fast {
                    BatchFailurePolicy::FailFast
                } else {
                    BatchFailurePolicy::Isolate
                };
                let outcomes =
                    batch_travel_times(&graph, &pairs, *parallelism, *progress, policy)
                        .expect("travel time batch failed");
                write_results(&pairs, &outcomes, output.as_deref())
                    .expect("failed writing query results")
            }
            TransitnetOperation::Summary { config } => {
                let conf = AppConfiguration::try_from(config)
                    .expect("failed reading run configuration");
                summary_ops::run_summary(&conf).expect("failed summarizing tables")
            }
        }
    }
}

/// a row of the queries CSV: one (origin, destination) stop id pair.
#[derive(Debug, Deserialize)]
struct QueryRow {
    origin: String,
    destination: String,
}

/// a row of the results CSV. `hours` is empty for pairs without a travel
/// time; `status` tells unreachable pairs apart from missing stops.
#[derive(Debug, Serialize)]
struct ResultRow {
    origin: String,
    destination: String,
    hours: Option<f64>,
    status: String,
}

fn read_query_pairs(path: &str) -> Result<Vec<(String, String)>, CliError> {
    let reader = csv::ReaderBuilder::new()
        .from_path(path)
        .map_err(|e| CliError::QueryReadError(String::from(path), e.to_string()))?;
    reader
        .into_deserialize::<QueryRow>()
        .map(|row| {
            row.map(|q| (q.origin, q.destination))
                .map_err(|e| CliError::QueryReadError(String::from(path), e.to_string()))
        })
        .collect::<Result<Vec<_>, CliError>>()
}

fn write_results(
    pairs: &[(String, String)],
    outcomes: &[TravelTimeOutcome],
    output: Option<&str>,
) -> Result<(), CliError> {
    match output {
        Some(path) => {
            let writer = csv::Writer::from_path(path)
                .map_err(|e| CliError::ResultWriteError(String::from(path), e.to_string()))?;
            write_result_rows(pairs, outcomes, writer, path)
        }
        None => {
            let writer = csv::Writer::from_writer(std::io::stdout());
            write_result_rows(pairs, outcomes, writer, "stdout")
        }
    }
}

fn write_result_rows<W: Write>(
    pairs: &[(String, String)],
    outcomes: &[TravelTimeOutcome],
    mut writer: csv::Writer<W>,
    sink: &str,
) -> Result<(), CliError> {
    for ((origin, destination), outcome) in pairs.iter().zip(outcomes.iter()) {
        let status = match outcome {
            TravelTimeOutcome::Hours(_) => String::from("ok"),
            TravelTimeOutcome::Unreachable => String::from("unreachable"),
            TravelTimeOutcome::MissingStop(_) => String::from("missing_stop"),
        };
        let row = ResultRow {
            origin: origin.clone(),
            destination: destination.clone(),
            hours: outcome.as_hours(),
            status,
        };
        writer
            .serialize(row)
            .map_err(|e| CliError::ResultWriteError(String::from(sink), e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| CliError::ResultWriteError(String::from(sink), e.to_string()))
}
