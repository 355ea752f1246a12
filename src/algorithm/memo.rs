use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::traits::NodeId;
use crate::graph::Graph;
use crate::Result;

/// Caches single-source results for one borrowed graph.
///
/// The cache lives exactly as long as this value. Because the graph is
/// borrowed immutably, it cannot change while cached results exist.
#[derive(Debug)]
pub struct MemoizedSolver<'g, A, G, N, W>
where
    N: NodeId,
    W: Float + Debug,
    G: Graph<N, W>,
    A: ShortestPathAlgorithm<N, W, G>,
{
    algorithm: A,
    graph: &'g G,
    cache: HashMap<N, Arc<ShortestPathResult<N, W>>>,
}

impl<'g, A, G, N, W> MemoizedSolver<'g, A, G, N, W>
where
    N: NodeId,
    W: Float + Debug,
    G: Graph<N, W>,
    A: ShortestPathAlgorithm<N, W, G>,
{
    pub fn new(algorithm: A, graph: &'g G) -> Self {
        MemoizedSolver {
            algorithm,
            graph,
            cache: HashMap::new(),
        }
    }

    /// Returns the cached result for `source`, computing it on first use.
    ///
    /// Failures are not cached.
    pub fn solve(&mut self, source: &N) -> Result<Arc<ShortestPathResult<N, W>>> {
        if let Some(result) = self.cache.get(source) {
            return Ok(Arc::clone(result));
        }

        let result = Arc::new(self.algorithm.compute_shortest_paths(self.graph, source)?);
        self.cache.insert(source.clone(), Arc::clone(&result));
        Ok(result)
    }

    /// Distance between two nodes, `None` if `target` is not in the graph
    pub fn distance(&mut self, source: &N, target: &N) -> Result<Option<W>> {
        Ok(self.solve(source)?.distance(target))
    }

    pub fn is_cached(&self, source: &N) -> bool {
        self.cache.contains_key(source)
    }

    pub fn cached_sources(&self) -> impl Iterator<Item = &N> + '_ {
        self.cache.keys()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drops every cached result
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::dijkstra::Dijkstra;
    use crate::graph::generators::grid;
    use crate::Error;
    use std::cell::Cell;

    /// Dijkstra wrapper counting how often it actually runs
    #[derive(Debug, Default)]
    struct Counting {
        inner: Dijkstra,
        runs: Cell<usize>,
    }

    impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Counting
    where
        N: NodeId,
        W: Float + Debug,
        G: Graph<N, W>,
    {
        fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
            self.runs.set(self.runs.get() + 1);
            self.inner.compute_shortest_paths(graph, source)
        }

        fn name(&self) -> &'static str {
            "Counting"
        }
    }

    #[test]
    fn test_repeated_solves_hit_cache() {
        let graph = grid(4, 4);
        let mut solver = MemoizedSolver::new(Counting::default(), &graph);

        let first = solver.solve(&0).unwrap();
        let second = solver.solve(&0).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(solver.distance(&0, &15).unwrap(), Some(6.0));
        assert_eq!(solver.algorithm.runs.get(), 1);

        solver.solve(&5).unwrap();
        assert_eq!(solver.len(), 2);
        assert!(solver.is_cached(&5));
        assert_eq!(solver.cached_sources().count(), 2);
        assert_eq!(solver.algorithm.runs.get(), 2);
    }

    #[test]
    fn test_clear_forces_recompute() {
        let graph = grid(2, 2);
        let mut solver = MemoizedSolver::new(Counting::default(), &graph);
        solver.solve(&0).unwrap();
        solver.clear();
        assert!(solver.is_empty());
        solver.solve(&0).unwrap();
        assert_eq!(solver.algorithm.runs.get(), 2);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let graph = grid(2, 2);
        let mut solver = MemoizedSolver::new(Dijkstra::new(), &graph);
        assert_eq!(solver.solve(&99).unwrap_err(), Error::SourceNotFound);
        assert!(solver.is_empty());
        assert_eq!(solver.distance(&0, &99).unwrap(), None);
        assert_eq!(solver.graph().node_count(), 4);
    }
}
