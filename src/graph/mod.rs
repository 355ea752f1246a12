pub mod adjacency;
pub mod generators;
pub mod traits;

pub use adjacency::{AdjacencyGraph, AdjacencyMap};
pub use traits::{Graph, MutableGraph};
