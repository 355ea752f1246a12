use log::{debug, trace};
use num_traits::Float;
use ordered_float::OrderedFloat;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinQueue;
use crate::graph::traits::NodeId;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic label-setting Dijkstra over a binary heap without decrease-key
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Whether to reject negative or NaN weights before solving
    validate_weights: bool,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

/// Dense working state of one solve, indexed by node position
struct Search<'g, N, W> {
    nodes: Vec<&'g N>,
    distances: Vec<W>,
    predecessors: Vec<Option<usize>>,
    source_idx: usize,
    target_idx: Option<usize>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance that validates weights
    pub fn new() -> Self {
        Dijkstra {
            validate_weights: true,
        }
    }

    /// Enable or disable the up-front weight check.
    ///
    /// With validation off, negative weights give unspecified distances.
    pub fn with_weight_validation(mut self, enabled: bool) -> Self {
        self.validate_weights = enabled;
        self
    }

    /// Shortest distance and path from `source` to `target`.
    ///
    /// Stops as soon as `target` is settled. Returns `Ok(None)` when the
    /// target is unreachable.
    pub fn shortest_path<N, W, G>(&self, graph: &G, source: &N, target: &N) -> Result<Option<(W, Vec<N>)>>
    where
        N: NodeId,
        W: Float + Debug,
        G: Graph<N, W>,
    {
        let search = self.search(graph, source, Some(target))?;
        let Some(target_idx) = search.target_idx else {
            return Err(Error::TargetNotFound);
        };
        let distance = search.distances[target_idx];
        if !distance.is_finite() {
            return Ok(None);
        }

        let mut path = vec![target.clone()];
        let mut current = target_idx;
        while current != search.source_idx {
            let Some(pred) = search.predecessors[current] else {
                break;
            };
            path.push(search.nodes[pred].clone());
            current = pred;
        }
        path.reverse();

        Ok(Some((distance, path)))
    }

    fn search<'g, N, W, G>(
        &self,
        graph: &'g G,
        source: &N,
        target: Option<&N>,
    ) -> Result<Search<'g, N, W>>
    where
        N: NodeId,
        W: Float + Debug,
        G: Graph<N, W>,
    {
        if !graph.contains_node(source) {
            return Err(Error::SourceNotFound);
        }
        if let Some(target) = target {
            if !graph.contains_node(target) {
                return Err(Error::TargetNotFound);
            }
        }
        if self.validate_weights {
            graph.validate_weights()?;
        }

        let nodes: Vec<&N> = graph.nodes().collect();
        let index: HashMap<&N, usize> = nodes.iter().enumerate().map(|(i, n)| (*n, i)).collect();
        let n = nodes.len();
        // contains_node and nodes() may disagree on foreign Graph impls
        let source_idx = index.get(source).copied().ok_or(Error::SourceNotFound)?;
        let target_idx = match target {
            Some(t) => Some(index.get(t).copied().ok_or(Error::TargetNotFound)?),
            None => None,
        };

        debug!(
            "dijkstra from {:?}: {} nodes, {} edges",
            source,
            n,
            graph.edge_count()
        );

        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source_idx] = W::zero();

        let mut queue = MinQueue::with_capacity(n);
        queue.push(source_idx, OrderedFloat(W::zero()));

        let mut settled = 0usize;
        let mut stale = 0usize;

        while let Some((u, OrderedFloat(dist_u))) = queue.pop() {
            // superseded by a later relaxation
            if dist_u > distances[u] {
                stale += 1;
                continue;
            }

            settled += 1;
            trace!("settled {:?} at {:?}", nodes[u], dist_u);
            if target_idx == Some(u) {
                break;
            }

            for (neighbor, weight) in graph.outgoing_edges(nodes[u]) {
                let Some(&v) = index.get(neighbor) else {
                    continue;
                };

                let candidate = dist_u + weight;
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    queue.push(v, OrderedFloat(candidate));
                }
            }
        }

        debug!(
            "dijkstra from {:?}: settled {} nodes, skipped {} stale entries",
            source, settled, stale
        );

        Ok(Search {
            nodes,
            distances,
            predecessors,
            source_idx,
            target_idx,
        })
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: NodeId,
    W: Float + Debug,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
        let search = self.search(graph, source, None)?;

        let distances = search
            .nodes
            .iter()
            .zip(&search.distances)
            .map(|(node, dist)| ((*node).clone(), *dist))
            .collect();

        let predecessors = search
            .predecessors
            .iter()
            .enumerate()
            .filter_map(|(v, pred)| {
                pred.map(|u| (search.nodes[v].clone(), search.nodes[u].clone()))
            })
            .collect();

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
        })
    }
}
