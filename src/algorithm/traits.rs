use serde::{Deserialize, Serialize};

use crate::graph::{Graph, Weight};
use crate::Result;

/// Result of a single start -> target search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath<W>
where
    W: Weight,
{
    /// Nodes from start to target, both inclusive
    pub path: Vec<String>,

    /// Sum of the edge weights along `path`
    pub cost: W,
}

impl<W> ShortestPath<W>
where
    W: Weight,
{
    /// First node of the path
    pub fn start(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    /// Last node of the path
    pub fn target(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Trait for algorithms that find a single shortest path between two nodes
pub trait PathFinder<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Find the minimum-cost path from `start` to `target`
    fn find_path<'a>(
        &self,
        graph: &'a G,
        start: &'a str,
        target: &'a str,
    ) -> Result<ShortestPath<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
