use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::PrimInt;

/// Integer edge weight and path cost
///
/// Implemented for every primitive integer. Signed types are accepted, but the
/// search is only correct when no weight is negative.
pub trait Weight: PrimInt + Debug + Send + Sync {}

impl<T> Weight for T where T: PrimInt + Debug + Send + Sync {}

/// Trait representing a weighted directed graph keyed by string identifiers
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if `node` is a key of the graph
    fn contains_node(&self, node: &str) -> bool;

    /// Returns an iterator over the outgoing edges of `node`
    fn neighbors<'a>(&'a self, node: &str) -> Box<dyn Iterator<Item = (&'a str, W)> + 'a>;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &str, to: &str) -> Option<W>;

    /// Returns true if the graph has no nodes
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Sums the edge weights along `path`
    ///
    /// Returns `None` when the path is empty, starts outside the graph, uses an
    /// edge the graph does not have, or overflows `W`.
    fn path_cost<S: AsRef<str>>(&self, path: &[S]) -> Option<W> {
        let first = path.first()?;
        if !self.contains_node(first.as_ref()) {
            return None;
        }

        path.windows(2).try_fold(W::zero(), |total, pair| {
            let weight = self.edge_weight(pair[0].as_ref(), pair[1].as_ref())?;
            total.checked_add(&weight)
        })
    }
}

/// The plain adjacency form: node -> (neighbor -> weight)
impl<W> Graph<W> for HashMap<String, HashMap<String, W>>
where
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.values().map(|edges| edges.len()).sum()
    }

    fn contains_node(&self, node: &str) -> bool {
        self.contains_key(node)
    }

    fn neighbors<'a>(&'a self, node: &str) -> Box<dyn Iterator<Item = (&'a str, W)> + 'a> {
        if let Some(edges) = self.get(node) {
            Box::new(edges.iter().map(|(neighbor, weight)| (neighbor.as_str(), *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn edge_weight(&self, from: &str, to: &str) -> Option<W> {
        self.get(from).and_then(|edges| edges.get(to)).copied()
    }
}
