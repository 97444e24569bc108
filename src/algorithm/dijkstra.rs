use std::collections::{HashMap, HashSet};

use log::{debug, trace, warn};

use crate::algorithm::{
    PathFinder, QueueKind, Relaxation, SearchConfig, ShortestPath, UnreachablePolicy,
};
use crate::data_structures::{IndexedHeap, KeyedPriorityQueue, SortedQueue};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra search between a start and a target node
///
/// Each call owns a fresh frontier, explored set and predecessor map, so one
/// `Dijkstra` can serve any number of searches, including concurrent ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra {
    config: SearchConfig,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance with the default configuration
    pub fn new() -> Self {
        Dijkstra {
            config: SearchConfig::default(),
        }
    }

    /// Creates a new Dijkstra algorithm instance from a configuration
    pub fn with_config(config: SearchConfig) -> Self {
        Dijkstra { config }
    }

    /// Set when an equal-cost path replaces the recorded predecessor
    pub fn with_relaxation(mut self, relaxation: Relaxation) -> Self {
        self.config.relaxation = relaxation;
        self
    }

    /// Set what an unreachable target yields
    pub fn with_unreachable(mut self, policy: UnreachablePolicy) -> Self {
        self.config.unreachable = policy;
        self
    }

    /// Set the frontier implementation
    pub fn with_queue(mut self, queue: QueueKind) -> Self {
        self.config.queue = queue;
        self
    }

    /// Returns the active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn search<'a, W, G, Q>(
        &self,
        graph: &'a G,
        start: &'a str,
        target: &'a str,
        mut frontier: Q,
    ) -> Result<ShortestPath<W>>
    where
        W: Weight,
        G: Graph<W>,
        Q: KeyedPriorityQueue<&'a str, W>,
    {
        let mut explored: HashSet<&'a str> = HashSet::new();
        let mut previous: HashMap<&'a str, &'a str> = HashMap::new();
        // First node whose tentative cost did not fit in `W`
        let mut overflowed: Option<&'a str> = None;

        frontier.set(start, W::zero());

        while let Some((node, cost)) = frontier.next() {
            if node == target {
                let path = reconstruct_path(&previous, start, target).ok_or_else(|| {
                    Error::NoPathFound {
                        start: start.to_owned(),
                        target: target.to_owned(),
                    }
                })?;
                debug!(
                    "found path {start} -> {target}: cost {cost:?}, {} hops, {} nodes explored",
                    path.len() - 1,
                    explored.len()
                );
                return Ok(ShortestPath { path, cost });
            }

            explored.insert(node);

            for (neighbor, weight) in graph.neighbors(node) {
                if explored.contains(neighbor) {
                    continue;
                }

                let Some(tentative) = cost.checked_add(&weight) else {
                    trace!("skip {node} -> {neighbor}: cost overflows");
                    overflowed.get_or_insert(neighbor);
                    continue;
                };

                let relax = match frontier.get(&neighbor) {
                    None => true,
                    Some(current) => self.config.relaxation.accepts(tentative, current),
                };

                if relax {
                    trace!("relax {node} -> {neighbor}: {tentative:?}");
                    previous.insert(neighbor, node);
                    frontier.set(neighbor, tentative);
                }
            }
        }

        if let Some(node) = overflowed {
            debug!("no path {start} -> {target} within range, first overflow at {node}");
            return Err(Error::CostOverflow {
                node: node.to_owned(),
            });
        }

        match self.config.unreachable {
            UnreachablePolicy::Fail => {
                debug!("no path {start} -> {target} after exploring {} nodes", explored.len());
                Err(Error::NoPathFound {
                    start: start.to_owned(),
                    target: target.to_owned(),
                })
            }
            UnreachablePolicy::Degenerate => {
                warn!("target {target} unreachable from {start}, returning degenerate path");
                Ok(ShortestPath {
                    path: vec![start.to_owned()],
                    cost: W::zero(),
                })
            }
        }
    }
}

impl<W, G> PathFinder<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find_path<'a>(
        &self,
        graph: &'a G,
        start: &'a str,
        target: &'a str,
    ) -> Result<ShortestPath<W>> {
        if graph.is_empty() {
            return Err(Error::EmptyGraph);
        }
        if !graph.contains_node(start) {
            return Err(Error::UnknownStartNode(start.to_owned()));
        }
        if !graph.contains_node(target) {
            return Err(Error::UnknownTargetNode(target.to_owned()));
        }

        debug!(
            "searching {start} -> {target} over {} nodes with {:?}",
            graph.node_count(),
            self.config
        );

        match self.config.queue {
            QueueKind::Sorted => self.search(graph, start, target, SortedQueue::new()),
            QueueKind::IndexedHeap => self.search(graph, start, target, IndexedHeap::new()),
        }
    }
}

/// Finds the shortest path from `start` to `target` with the default `Dijkstra`
pub fn shortest_path<W, G>(graph: &G, start: &str, target: &str) -> Result<ShortestPath<W>>
where
    W: Weight,
    G: Graph<W>,
{
    PathFinder::<W, G>::find_path(&Dijkstra::new(), graph, start, target)
}

/// Walks the predecessor map back from `target` and returns the path start first
fn reconstruct_path<'a>(
    previous: &HashMap<&'a str, &'a str>,
    start: &str,
    target: &'a str,
) -> Option<Vec<String>> {
    let mut path = vec![target.to_owned()];
    let mut current = target;

    while current != start {
        current = *previous.get(current)?;
        path.push(current.to_owned());
        // A chain longer than the map never reaches start
        if path.len() > previous.len() + 1 {
            return None;
        }
    }

    path.reverse();
    Some(path)
}
