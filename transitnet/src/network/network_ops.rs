use crate::app::CliError;
use crate::config::AppConfiguration;
use crate::feed::table_ops;
use transitnet_core::algorithm::spatial::StopSpatialIndex;
use transitnet_core::algorithm::{derive_transit_edges, derive_walk_edges};
use transitnet_core::model::graph::TransitGraph;

/// returns the multimodal travel graph: loads the cached artifact when one
/// exists and overwrite is not forced, otherwise builds from the
/// accumulated tables and persists the result. an unreadable artifact
/// triggers a rebuild rather than an error.
pub fn load_network(
    config: &AppConfiguration,
    prune: bool,
    overwrite: bool,
) -> Result<TransitGraph, CliError> {
    let artifact_path = config.artifact_path();
    if artifact_path.exists() && !overwrite {
        match TransitGraph::read_artifact(&artifact_path) {
            Ok(graph) => {
                log::info!("loaded network artifact from {}", artifact_path.display());
                return Ok(graph);
            }
            Err(e) => log::warn!("rebuilding network, artifact unreadable: {e}"),
        }
    }
    let graph = build_network(config, prune)?;
    graph.write_artifact(&artifact_path)?;
    log::info!("wrote network artifact to {}", artifact_path.display());
    Ok(graph)
}

/// assembles the graph from the accumulated tables: all stops as nodes,
/// transit edges from consecutive stop visits, then walking edges from the
/// spatial proximity join.
pub fn build_network(config: &AppConfiguration, prune: bool) -> Result<TransitGraph, CliError> {
    let stops = table_ops::read_stops(&config.stops_table_path())?;
    let visits = table_ops::read_stop_visits(&config.visits_table_path())?;
    log::info!(
        "building network from {} stops and {} stop visits",
        stops.len(),
        visits.len()
    );

    let mut edges = derive_transit_edges(&visits, prune)?;
    let index = StopSpatialIndex::new(&stops, config.network);
    edges.extend(derive_walk_edges(&stops, &index, &config.network));

    let graph = TransitGraph::assemble(stops, edges)?;
    log::info!(
        "assembled network with {} nodes and {} edges",
        graph.n_nodes(),
        graph.n_edges()
    );
    Ok(graph)
}
