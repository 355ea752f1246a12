//! Labelset - label-setting single-source shortest paths
//!
//! This library computes, from one source node, the minimum cumulative edge
//! weight to every node of a weighted directed graph with non-negative edge
//! weights. Nodes are arbitrary hashable keys; unreachable nodes carry a
//! positive-infinity distance.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    batch::solve_many, dijkstra::Dijkstra, memo::MemoizedSolver, ShortestPathAlgorithm,
    ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::adjacency::{AdjacencyGraph, AdjacencyMap};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Source node not found in graph")]
    SourceNotFound,

    #[error("Target node not found in graph")]
    TargetNotFound,

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Edge weight is not a number")]
    InvalidWeight,

    #[error("Malformed adjacency map: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
