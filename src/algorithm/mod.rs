pub mod batch;
pub mod dijkstra;
pub mod memo;
pub mod traits;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
