use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};

/// A directed graph stored as adjacency maps: node -> (neighbor -> weight)
///
/// Serializes as the nested JSON object `{"a": {"b": 20}, "b": {}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightedGraph<W>
where
    W: Weight,
{
    adjacency: HashMap<String, HashMap<String, W>>,
}

impl<W> WeightedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        WeightedGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        WeightedGraph {
            adjacency: HashMap::with_capacity(nodes),
        }
    }

    /// Adds a node without edges. Returns false if it already existed.
    pub fn add_node(&mut self, node: impl Into<String>) -> bool {
        let node = node.into();
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, HashMap::new());
        true
    }

    /// Adds or replaces the directed edge `from -> to`
    ///
    /// Both endpoints become nodes of the graph, so either can be used as a
    /// search target.
    pub fn add_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        weight: W,
    ) -> Result<()> {
        let (from, to) = (from.into(), to.into());
        if weight < W::zero() {
            return Err(Error::NegativeWeight { from, to });
        }

        self.insert_edge(from, to, weight);
        Ok(())
    }

    /// Stores `from -> to` without the sign check, for callers whose weights
    /// are unsigned
    pub(crate) fn insert_edge(&mut self, from: String, to: String, weight: W) {
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency.entry(from).or_default().insert(to, weight);
    }

    /// Adds the edges `a -> b` and `b -> a` with the same weight
    pub fn add_undirected_edge(
        &mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        weight: W,
    ) -> Result<()> {
        let (a, b) = (a.into(), b.into());
        self.add_edge(a.clone(), b.clone(), weight)?;
        self.add_edge(b, a, weight)
    }

    /// Parses a graph from its nested JSON object form
    pub fn from_json(json: &str) -> Result<Self>
    where
        W: for<'de> Deserialize<'de>,
    {
        let graph: Self = serde_json::from_str(json)?;
        graph.validate_non_negative()?;
        Ok(graph)
    }

    /// Renders the graph as a nested JSON object
    pub fn to_json(&self) -> Result<String>
    where
        W: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }

    /// Checks that no edge carries a negative weight
    pub fn validate_non_negative(&self) -> Result<()> {
        for (from, edges) in &self.adjacency {
            for (to, weight) in edges {
                if *weight < W::zero() {
                    return Err(Error::NegativeWeight {
                        from: from.clone(),
                        to: to.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns an iterator over all node identifiers
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    /// Returns an iterator over all edges as `(from, to, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, W)> + '_ {
        self.adjacency.iter().flat_map(|(from, edges)| {
            edges
                .iter()
                .map(move |(to, weight)| (from.as_str(), to.as_str(), *weight))
        })
    }

    /// Returns the underlying adjacency maps
    pub fn adjacency(&self) -> &HashMap<String, HashMap<String, W>> {
        &self.adjacency
    }
}

impl<W> Default for WeightedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> From<HashMap<String, HashMap<String, W>>> for WeightedGraph<W>
where
    W: Weight,
{
    fn from(adjacency: HashMap<String, HashMap<String, W>>) -> Self {
        WeightedGraph { adjacency }
    }
}

/// Collects `(from, to, weight)` triples; negative weights are skipped
impl<W, S> FromIterator<(S, S, W)> for WeightedGraph<W>
where
    W: Weight,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, S, W)>>(edges: I) -> Self {
        let mut graph = WeightedGraph::new();
        for (from, to, weight) in edges {
            if let Err(err) = graph.add_edge(from, to, weight) {
                log::warn!("skipping edge: {err}");
            }
        }
        graph
    }
}

impl<W> Graph<W> for WeightedGraph<W>
where
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.adjacency.node_count()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    fn contains_node(&self, node: &str) -> bool {
        self.adjacency.contains_node(node)
    }

    fn neighbors<'a>(&'a self, node: &str) -> Box<dyn Iterator<Item = (&'a str, W)> + 'a> {
        self.adjacency.neighbors(node)
    }

    fn edge_weight(&self, from: &str, to: &str) -> Option<W> {
        self.adjacency.edge_weight(from, to)
    }
}
