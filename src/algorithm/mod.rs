pub mod config;
pub mod dijkstra;
pub mod traits;

pub use config::{QueueKind, Relaxation, SearchConfig, UnreachablePolicy};
pub use traits::{PathFinder, ShortestPath};
