use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use super::KeyedPriorityQueue;

/// A keyed priority queue that keeps its pending keys sorted by priority
///
/// Every `set` re-sorts the whole sequence. The sort is stable, so keys with
/// equal priorities keep the relative order they already had in the queue;
/// freshly inserted keys go behind existing keys of the same priority.
#[derive(Debug, Clone)]
pub struct SortedQueue<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: Ord + Copy + Debug,
{
    /// Pending keys, ascending by priority
    keys: VecDeque<K>,

    /// Current priority of every pending key
    priorities: HashMap<K, P>,
}

impl<K, P> SortedQueue<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        SortedQueue {
            keys: VecDeque::new(),
            priorities: HashMap::new(),
        }
    }

    /// Creates a new empty queue with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        SortedQueue {
            keys: VecDeque::with_capacity(capacity),
            priorities: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the pending keys in the order they will be served
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.keys.iter()
    }

    /// Removes every pending key
    pub fn clear(&mut self) {
        self.keys.clear();
        self.priorities.clear();
    }

    fn sort(&mut self) {
        let priorities = &self.priorities;
        self.keys
            .make_contiguous()
            .sort_by(|a, b| priorities.get(a).cmp(&priorities.get(b)));
    }
}

impl<K, P> Default for SortedQueue<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> KeyedPriorityQueue<K, P> for SortedQueue<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: Ord + Copy + Debug,
{
    fn set(&mut self, key: K, priority: P) {
        if !self.priorities.contains_key(&key) {
            self.keys.push_back(key.clone());
        }
        self.priorities.insert(key, priority);
        self.sort();
    }

    fn get(&self, key: &K) -> Option<P> {
        self.priorities.get(key).copied()
    }

    fn next(&mut self) -> Option<(K, P)> {
        let key = self.keys.pop_front()?;
        let priority = self.priorities.remove(&key)?;
        Some((key, priority))
    }

    fn peek(&self) -> Option<(K, P)> {
        let key = self.keys.front()?;
        let priority = self.priorities.get(key)?;
        Some((key.clone(), *priority))
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}
