use crate::graph::traits::{Graph, MutableGraph, NodeId};
use crate::Result;
use num_traits::Float;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Debug;

/// Nested adjacency mapping: node -> (neighbor -> weight)
pub type AdjacencyMap<N, W> = HashMap<N, HashMap<N, W>>;

/// A directed graph keyed by node identifiers, stored as adjacency lists
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    /// Outgoing edges for each node: node -> [(target, weight)]
    outgoing_edges: HashMap<N, Vec<(N, W)>>,

    /// Incoming edges for each node: node -> [(source, weight)]
    incoming_edges: HashMap<N, Vec<(N, W)>>,
}

impl<N, W> Default for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            outgoing_edges: HashMap::new(),
            incoming_edges: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        AdjacencyGraph {
            outgoing_edges: HashMap::with_capacity(nodes),
            incoming_edges: HashMap::with_capacity(nodes),
        }
    }

    /// Builds a graph from a nested adjacency mapping.
    ///
    /// Neighbors that are not top-level keys become nodes without outgoing edges.
    pub fn from_adjacency_map(map: AdjacencyMap<N, W>) -> Self {
        let mut graph = AdjacencyGraph::with_capacity(map.len());
        for (node, neighbors) in map {
            graph.add_node(node.clone());
            for (neighbor, weight) in neighbors {
                graph.add_edge(node.clone(), neighbor, weight);
            }
        }
        graph
    }

    /// Converts the graph back into a nested adjacency mapping
    pub fn to_adjacency_map(&self) -> AdjacencyMap<N, W> {
        self.outgoing_edges
            .iter()
            .map(|(node, edges)| (node.clone(), edges.iter().cloned().collect()))
            .collect()
    }
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: NodeId + DeserializeOwned,
    W: Float + Debug + DeserializeOwned,
{
    /// Parses a JSON object of the form `{"A": {"B": 1.0}}` and validates its weights
    pub fn from_json(json: &str) -> Result<Self> {
        let map: AdjacencyMap<N, W> = serde_json::from_str(json)?;
        let graph = Self::from_adjacency_map(map);
        graph.validate_weights()?;
        Ok(graph)
    }
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: NodeId + Serialize,
    W: Float + Debug + Serialize,
{
    /// Serializes the graph as a nested JSON adjacency object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_adjacency_map())?)
    }
}

impl<N, W> Graph<N, W> for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    fn node_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.outgoing_edges.keys())
    }

    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(node) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn incoming_edges(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_> {
        if let Some(edges) = self.incoming_edges.get(node) {
            Box::new(edges.iter().map(|(source, weight)| (source, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn contains_node(&self, node: &N) -> bool {
        self.outgoing_edges.contains_key(node)
    }
}

impl<N, W> MutableGraph<N, W> for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.outgoing_edges.contains_key(&node) {
            return false;
        }
        self.incoming_edges.insert(node.clone(), Vec::new());
        self.outgoing_edges.insert(node, Vec::new());
        true
    }

    fn remove_node(&mut self, node: &N) -> bool {
        let Some(outgoing) = self.outgoing_edges.remove(node) else {
            return false;
        };

        for (target, _) in outgoing {
            if let Some(incoming) = self.incoming_edges.get_mut(&target) {
                incoming.retain(|(source, _)| source != node);
            }
        }

        if let Some(incoming) = self.incoming_edges.remove(node) {
            for (source, _) in incoming {
                if let Some(outgoing) = self.outgoing_edges.get_mut(&source) {
                    outgoing.retain(|(target, _)| target != node);
                }
            }
        }

        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) {
        if !self.update_edge_weight(&from, &to, weight) {
            self.add_node(from.clone());
            self.add_node(to.clone());
            self.outgoing_edges
                .entry(from.clone())
                .or_default()
                .push((to.clone(), weight));
            self.incoming_edges.entry(to).or_default().push((from, weight));
        }
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        let mut removed = false;

        if let Some(outgoing) = self.outgoing_edges.get_mut(from) {
            let len_before = outgoing.len();
            outgoing.retain(|(target, _)| target != to);
            removed = len_before > outgoing.len();
        }

        if let Some(incoming) = self.incoming_edges.get_mut(to) {
            incoming.retain(|(source, _)| source != from);
        }

        removed
    }

    fn update_edge_weight(&mut self, from: &N, to: &N, weight: W) -> bool {
        let mut updated = false;

        if let Some(outgoing) = self.outgoing_edges.get_mut(from) {
            if let Some(edge) = outgoing.iter_mut().find(|(target, _)| target == to) {
                edge.1 = weight;
                updated = true;
            }
        }

        if updated {
            if let Some(incoming) = self.incoming_edges.get_mut(to) {
                if let Some(edge) = incoming.iter_mut().find(|(source, _)| source == from) {
                    edge.1 = weight;
                }
            }
        }

        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn reference_graph() -> AdjacencyGraph<&'static str, f64> {
        let mut graph = AdjacencyGraph::new();
        graph.add_undirected_edge("A", "B", 1.0);
        graph.add_undirected_edge("A", "C", 3.0);
        graph.add_undirected_edge("B", "D", 2.0);
        graph.add_undirected_edge("C", "D", 4.0);
        graph
    }

    #[test]
    fn test_counts_and_lookup() {
        let graph = reference_graph();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 8);
        assert!(graph.has_edge(&"A", &"B"));
        assert!(graph.has_edge(&"B", &"A"));
        assert!(!graph.has_edge(&"A", &"D"));
        assert_eq!(graph.edge_weight(&"C", &"D"), Some(4.0));
        assert_eq!(graph.incoming_edges(&"D").count(), 2);
    }

    #[test]
    fn test_add_edge_overwrites_weight() {
        let mut graph = reference_graph();
        graph.add_edge("A", "B", 7.0);
        assert_eq!(graph.edge_weight(&"A", &"B"), Some(7.0));
        assert_eq!(graph.edge_count(), 8);
        let incoming: Vec<_> = graph.incoming_edges(&"B").collect();
        assert!(incoming.contains(&(&"A", 7.0)));
    }

    #[test]
    fn test_neighbor_only_node_is_registered() {
        let mut map: AdjacencyMap<String, f64> = HashMap::new();
        map.insert("x".to_string(), HashMap::from([("y".to_string(), 2.0)]));
        let graph = AdjacencyGraph::from_adjacency_map(map);
        assert!(graph.contains_node(&"y".to_string()));
        assert_eq!(graph.outgoing_edges(&"y".to_string()).count(), 0);
        assert_eq!(graph.to_adjacency_map()["y"].len(), 0);
    }

    #[test]
    fn test_remove_node_drops_touching_edges() {
        let mut graph = reference_graph();
        assert!(graph.remove_node(&"B"));
        assert!(!graph.remove_node(&"B"));
        assert_eq!(graph.node_count(), 3);
        assert!(!graph.has_edge(&"A", &"B"));
        assert_eq!(graph.incoming_edges(&"D").count(), 1);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_remove_and_update_edge() {
        let mut graph = reference_graph();
        assert!(graph.remove_edge(&"A", &"C"));
        assert!(!graph.remove_edge(&"A", &"C"));
        assert!(graph.has_edge(&"C", &"A"));
        assert!(!graph.update_edge_weight(&"A", &"C", 1.0));
        assert!(graph.update_edge_weight(&"C", &"A", 1.0));
        assert_eq!(graph.edge_weight(&"C", &"A"), Some(1.0));
    }

    #[test]
    fn test_validate_weights() {
        let mut graph = reference_graph();
        assert_eq!(graph.validate_weights(), Ok(()));
        graph.add_edge("D", "E", -2.5);
        assert_eq!(graph.validate_weights(), Err(Error::NegativeWeight(-2.5)));
        graph.update_edge_weight(&"D", &"E", f64::NAN);
        assert_eq!(graph.validate_weights(), Err(Error::InvalidWeight));
    }

    #[test]
    fn test_json_adjacency() {
        let json = r#"{"A": {"B": 1, "C": 3}, "B": {"D": 2}}"#;
        let graph: AdjacencyGraph<String, f64> = AdjacencyGraph::from_json(json).unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_weight(&"A".to_string(), &"C".to_string()), Some(3.0));

        let back: AdjacencyGraph<String, f64> =
            AdjacencyGraph::from_json(&graph.to_json().unwrap()).unwrap();
        assert_eq!(back.to_adjacency_map(), graph.to_adjacency_map());
    }

    #[test]
    fn test_json_rejects_bad_input() {
        let negative = AdjacencyGraph::<String, f64>::from_json(r#"{"A": {"B": -1}}"#);
        assert_eq!(negative.unwrap_err(), Error::NegativeWeight(-1.0));

        let malformed = AdjacencyGraph::<String, f64>::from_json(r#"{"A": ["B"]}"#);
        assert!(matches!(malformed, Err(Error::Parse(_))));
    }
}
