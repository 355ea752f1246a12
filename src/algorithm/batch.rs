use log::debug;
use num_traits::Float;
use rayon::prelude::*;
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::traits::NodeId;
use crate::graph::Graph;
use crate::Result;

/// Solves from every source in parallel over one shared, read-only graph.
///
/// Results come back in the order of `sources`. If any solve fails, the
/// error of the earliest failing source is returned.
pub fn solve_many<A, N, W, G>(algorithm: &A, graph: &G, sources: &[N]) -> Result<Vec<ShortestPathResult<N, W>>>
where
    A: ShortestPathAlgorithm<N, W, G> + Sync,
    N: NodeId + Send + Sync,
    W: Float + Debug + Send + Sync,
    G: Graph<N, W> + Sync,
{
    debug!("{}: solving {} sources in parallel", algorithm.name(), sources.len());

    let results: Vec<Result<ShortestPathResult<N, W>>> = sources
        .par_iter()
        .map(|source| algorithm.compute_shortest_paths(graph, source))
        .collect();

    results.into_iter().collect()
}
