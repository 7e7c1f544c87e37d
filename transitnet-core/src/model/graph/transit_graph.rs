use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::NetworkEdge;
use crate::model::{NetworkError, Stop};

/// serialized snapshot of the assembled graph: all stops as nodes plus the
/// explicit edge list. this format is owned by transitnet and stays
/// independent of the in-memory graph representation, so the artifact is
/// portable across implementations.
#[derive(Serialize, Deserialize, Debug)]
pub struct NetworkArtifact {
    pub nodes: Vec<Stop>,
    pub edges: Vec<NetworkEdge>,
}

/// the assembled multimodal travel graph. a directed multigraph: parallel
/// edges between the same ordered stop pair are distinct edges, each with
/// its own weight and kind. read-only once query processing begins.
#[derive(Debug)]
pub struct TransitGraph {
    graph: DiGraph<Stop, NetworkEdge>,
    node_lookup: HashMap<String, NodeIndex>,
}

impl TransitGraph {
    /// builds the graph from all stops and the derived edge list. every
    /// edge endpoint must name a known stop and every weight must be
    /// non-negative.
    pub fn assemble(stops: Vec<Stop>, edges: Vec<NetworkEdge>) -> Result<TransitGraph, NetworkError> {
        let mut graph: DiGraph<Stop, NetworkEdge> =
            DiGraph::with_capacity(stops.len(), edges.len());
        let mut node_lookup: HashMap<String, NodeIndex> = HashMap::with_capacity(stops.len());
        for stop in stops {
            let stop_id = stop.stop_id.clone();
            let index = graph.add_node(stop);
            node_lookup.insert(stop_id, index);
        }
        for edge in edges {
            let start = *node_lookup
                .get(&edge.start)
                .ok_or_else(|| NetworkError::MissingEdgeEndpoint(edge.start.clone()))?;
            let end = *node_lookup
                .get(&edge.end)
                .ok_or_else(|| NetworkError::MissingEdgeEndpoint(edge.end.clone()))?;
            if edge.weight < 0.0 {
                return Err(NetworkError::NegativeEdgeWeight(
                    edge.start.clone(),
                    edge.end.clone(),
                    edge.weight,
                ));
            }
            graph.add_edge(start, end, edge);
        }
        Ok(TransitGraph { graph, node_lookup })
    }

    pub fn node_index(&self, stop_id: &str) -> Option<NodeIndex> {
        self.node_lookup.get(stop_id).copied()
    }

    pub fn n_nodes(&self) -> usize {
        self.graph.node_count()
    }

    pub fn n_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// the underlying petgraph structure, for shortest path traversal.
    pub fn graph(&self) -> &DiGraph<Stop, NetworkEdge> {
        &self.graph
    }

    /// snapshot of all nodes and edges in insertion order.
    pub fn to_artifact(&self) -> NetworkArtifact {
        NetworkArtifact {
            nodes: self.graph.node_weights().cloned().collect(),
            edges: self.graph.edge_weights().cloned().collect(),
        }
    }

    pub fn from_artifact(artifact: NetworkArtifact) -> Result<TransitGraph, NetworkError> {
        TransitGraph::assemble(artifact.nodes, artifact.edges)
    }

    /// writes the JSON snapshot of this graph, replacing any prior file.
    pub fn write_artifact(&self, path: &Path) -> Result<(), NetworkError> {
        let file = File::create(path).map_err(|e| {
            NetworkError::ArtifactWriteError(path.display().to_string(), e.to_string())
        })?;
        let writer = BufWriter::new(file);
        serde_json::to_writer(writer, &self.to_artifact()).map_err(|e| {
            NetworkError::ArtifactWriteError(path.display().to_string(), e.to_string())
        })
    }

    /// reads a previously written snapshot verbatim. the artifact is not
    /// re-validated against the source tables it was built from.
    pub fn read_artifact(path: &Path) -> Result<TransitGraph, NetworkError> {
        let file = File::open(path).map_err(|e| {
            NetworkError::ArtifactReadError(path.display().to_string(), e.to_string())
        })?;
        let artifact: NetworkArtifact =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                NetworkError::ArtifactReadError(path.display().to_string(), e.to_string())
            })?;
        TransitGraph::from_artifact(artifact)
    }
}

#[cfg(test)]
mod test {
    use super::{NetworkEdge, TransitGraph};
    use crate::model::{NetworkError, Stop};

    fn mock_stop(stop_id: &str) -> Stop {
        Stop {
            stop_id: String::from(stop_id),
            stop_name: format!("stop {stop_id}"),
            stop_lat: 47.5,
            stop_lon: 19.0,
        }
    }

    #[test]
    fn test_assemble_keeps_parallel_edges() {
        let stops = vec![mock_stop("a_f"), mock_stop("b_f")];
        let edges = vec![
            NetworkEdge::transit(String::from("a_f"), String::from("b_f"), 100.0),
            NetworkEdge::transit(String::from("a_f"), String::from("b_f"), 80.0),
            NetworkEdge::walk(String::from("a_f"), String::from("b_f"), 120.0),
        ];
        let graph = TransitGraph::assemble(stops, edges)
            .expect("test invariant failed: could not assemble graph");
        assert_eq!(graph.n_nodes(), 2);
        assert_eq!(graph.n_edges(), 3);
    }

    #[test]
    fn test_assemble_rejects_unknown_endpoint() {
        let stops = vec![mock_stop("a_f")];
        let edges = vec![NetworkEdge::walk(
            String::from("a_f"),
            String::from("ghost_f"),
            60.0,
        )];
        match TransitGraph::assemble(stops, edges) {
            Err(NetworkError::MissingEdgeEndpoint(id)) => assert_eq!(id, "ghost_f"),
            other => panic!("expected MissingEdgeEndpoint, got {other:?}"),
        }
    }

    #[test]
    fn test_assemble_rejects_negative_weight() {
        let stops = vec![mock_stop("a_f"), mock_stop("b_f")];
        let edges = vec![NetworkEdge::transit(
            String::from("a_f"),
            String::from("b_f"),
            -30.0,
        )];
        assert!(matches!(
            TransitGraph::assemble(stops, edges),
            Err(NetworkError::NegativeEdgeWeight(_, _, _))
        ));
    }

    #[test]
    fn test_artifact_round_trip() {
        let stops = vec![mock_stop("a_f"), mock_stop("b_f"), mock_stop("c_f")];
        let edges = vec![
            NetworkEdge::transit(String::from("a_f"), String::from("b_f"), 330.0),
            NetworkEdge::walk(String::from("b_f"), String::from("c_f"), 41.7),
        ];
        let graph = TransitGraph::assemble(stops, edges)
            .expect("test invariant failed: could not assemble graph");

        let path = std::env::temp_dir().join("transitnet-test-artifact-round-trip.json");
        graph
            .write_artifact(&path)
            .expect("test invariant failed: could not write artifact");
        let reloaded = TransitGraph::read_artifact(&path)
            .expect("test invariant failed: could not read artifact");
        let _ = std::fs::remove_file(&path);

        let before = graph.to_artifact();
        let after = reloaded.to_artifact();
        assert_eq!(before.nodes, after.nodes);
        assert_eq!(before.edges, after.edges);
    }

    #[test]
    fn test_read_artifact_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("transitnet-test-no-such-artifact.json");
        assert!(matches!(
            TransitGraph::read_artifact(&path),
            Err(NetworkError::ArtifactReadError(_, _))
        ));
    }
}
