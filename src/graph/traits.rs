use crate::{Error, Result};
use log::warn;
use num_traits::Float;
use std::fmt::Debug;
use std::hash::Hash;

/// Bound shared by every node identifier: an opaque, hashable token
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Debug {}

/// Trait representing a weighted directed graph keyed by node identifiers
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: Float + Debug,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every node of the graph
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns an iterator over the outgoing edges of a node.
    ///
    /// A node that is unknown or has no outgoing edges yields nothing.
    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_>;

    /// Returns an iterator over the incoming edges of a node
    fn incoming_edges(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_>;

    /// Returns true if the node exists in the graph
    fn contains_node(&self, node: &N) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }

    /// Checks that every edge weight is a non-negative number
    fn validate_weights(&self) -> Result<()> {
        for from in self.nodes() {
            for (to, weight) in self.outgoing_edges(from) {
                if weight.is_nan() {
                    warn!("edge {:?} -> {:?} has a NaN weight", from, to);
                    return Err(Error::InvalidWeight);
                }
                if weight < W::zero() {
                    warn!("edge {:?} -> {:?} has negative weight {:?}", from, to, weight);
                    return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
                }
            }
        }
        Ok(())
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    /// Adds a node without edges. Returns false if it already existed.
    fn add_node(&mut self, node: N) -> bool;

    /// Removes a node and every edge touching it
    fn remove_node(&mut self, node: &N) -> bool;

    /// Adds (or overwrites) a directed edge, registering both endpoints
    fn add_edge(&mut self, from: N, to: N, weight: W);

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &N, to: &N) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(&mut self, from: &N, to: &N, weight: W) -> bool;

    /// Adds the edge in both directions with the same weight
    fn add_undirected_edge(&mut self, a: N, b: N, weight: W) {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }
}
