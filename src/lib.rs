//! SPF - Shortest Path First over string-keyed weighted graphs
//!
//! This library finds the minimum-cost path between two nodes of a weighted,
//! directed graph using Dijkstra's algorithm. The frontier is a keyed priority
//! queue with update-or-insert semantics, available either as a fully re-sorted
//! sequence or as an indexed binary heap.
//!
//! Edge weights must be non-negative integers; the search does not check this.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{shortest_path, Dijkstra},
    PathFinder, QueueKind, Relaxation, SearchConfig, ShortestPath, UnreachablePolicy,
};
pub use data_structures::{IndexedHeap, KeyedPriorityQueue, SortedQueue};
/// Re-export main types for convenient use
pub use graph::{Graph, Weight, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot find path in empty graph")]
    EmptyGraph,

    #[error("cannot find start {0} in graph")]
    UnknownStartNode(String),

    #[error("cannot find target {0} in graph")]
    UnknownTargetNode(String),

    #[error("no path from {start} to {target}")]
    NoPathFound { start: String, target: String },

    #[error("path cost overflows the weight type at node {node}")]
    CostOverflow { node: String },

    #[error("negative edge weight from {from} to {to}")]
    NegativeWeight { from: String, to: String },

    #[error("invalid JSON input: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
