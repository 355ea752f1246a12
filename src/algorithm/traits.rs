use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::graph::traits::NodeId;
use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    /// Distance from the source to every node of the graph; `W::infinity()` if unreached
    pub distances: HashMap<N, W>,

    /// Predecessor of each reached node in the shortest path tree
    pub predecessors: HashMap<N, N>,

    /// Source node
    pub source: N,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: NodeId,
    W: Float + Debug,
{
    /// Distance to `node`, or `None` if the node is not part of the graph
    pub fn distance(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied()
    }

    /// True if `node` has a finite distance
    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node).is_some_and(|d| d.is_finite())
    }

    /// Number of nodes with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    /// Iterates over the reached nodes and their distances
    pub fn finite_distances(&self) -> impl Iterator<Item = (&N, W)> + '_ {
        self.distances
            .iter()
            .filter(|(_, d)| d.is_finite())
            .map(|(node, d)| (node, *d))
    }

    /// Reconstructs the shortest path from the source to `target`
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while *current != self.source {
            current = self.predecessors.get(current)?;
            path.push(current.clone());
            // a tree path never revisits a node
            if path.len() > self.distances.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: NodeId,
    W: Float + Debug,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, result: &ShortestPathResult<N, W>, target: &N) -> Option<Vec<N>> {
        result.path_to(target)
    }
}
