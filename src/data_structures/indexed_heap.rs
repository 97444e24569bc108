use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::KeyedPriorityQueue;

/// A binary min-heap with a key -> slot index, giving O(log n) `set` and `next`
///
/// Entries are ordered by priority, then by the order in which their key was
/// first inserted, so equal priorities are served first-in first-out.
#[derive(Debug, Clone)]
pub struct IndexedHeap<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: Ord + Copy + Debug,
{
    /// Heap-ordered entries
    entries: Vec<Entry<K, P>>,

    /// Slot of every pending key in `entries`
    slots: HashMap<K, usize>,

    /// Insertion counter used to break priority ties
    sequence: u64,
}

#[derive(Debug, Clone)]
struct Entry<K, P> {
    key: K,
    priority: P,
    sequence: u64,
}

impl<K, P> IndexedHeap<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        IndexedHeap {
            entries: Vec::new(),
            slots: HashMap::new(),
            sequence: 0,
        }
    }

    /// Creates a new empty heap with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedHeap {
            entries: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
            sequence: 0,
        }
    }

    /// Removes every pending key
    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.clear();
        self.sequence = 0;
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.entries[a], &self.entries[b]);
        (a.priority, a.sequence) < (b.priority, b.sequence)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.slots.insert(self.entries[a].key.clone(), a);
        self.slots.insert(self.entries[b].key.clone(), b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}

impl<K, P> Default for IndexedHeap<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> KeyedPriorityQueue<K, P> for IndexedHeap<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: Ord + Copy + Debug,
{
    fn set(&mut self, key: K, priority: P) {
        if let Some(&slot) = self.slots.get(&key) {
            let previous = self.entries[slot].priority;
            self.entries[slot].priority = priority;
            if priority < previous {
                self.sift_up(slot);
            } else {
                self.sift_down(slot);
            }
            return;
        }

        let slot = self.entries.len();
        self.slots.insert(key.clone(), slot);
        self.entries.push(Entry {
            key,
            priority,
            sequence: self.sequence,
        });
        self.sequence += 1;
        self.sift_up(slot);
    }

    fn get(&self, key: &K) -> Option<P> {
        self.slots.get(key).map(|&slot| self.entries[slot].priority)
    }

    fn next(&mut self) -> Option<(K, P)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let entry = self.entries.pop()?;
        self.slots.remove(&entry.key);

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some((entry.key, entry.priority))
    }

    fn peek(&self) -> Option<(K, P)> {
        self.entries
            .first()
            .map(|entry| (entry.key.clone(), entry.priority))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
