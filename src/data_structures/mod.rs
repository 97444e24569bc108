pub mod indexed_heap;
pub mod priority_queue;

pub use indexed_heap::IndexedHeap;
pub use priority_queue::SortedQueue;

/// A priority queue addressed by key, where every pending key carries exactly
/// one priority and the lowest priority is served first.
pub trait KeyedPriorityQueue<K, P> {
    /// Inserts `key` if it is absent and sets its priority in all cases
    fn set(&mut self, key: K, priority: P);

    /// Returns the current priority of `key`, if it is pending
    fn get(&self, key: &K) -> Option<P>;

    /// Removes and returns the entry with the lowest priority
    fn next(&mut self) -> Option<(K, P)>;

    /// Returns the entry `next` would remove, without removing it
    fn peek(&self) -> Option<(K, P)>;

    /// Returns the number of pending keys
    fn len(&self) -> usize;

    /// Returns true if no keys are pending
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
