use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spf::data_structures::{IndexedHeap, KeyedPriorityQueue, SortedQueue};

// Drains a queue into the order it serves its entries
fn drain<Q: KeyedPriorityQueue<String, u32>>(queue: &mut Q) -> Vec<(String, u32)> {
    let mut served = Vec::new();
    while let Some(entry) = queue.next() {
        served.push(entry);
    }
    served
}

fn check_serves_lowest_priority_first<Q>(mut queue: Q)
where
    Q: KeyedPriorityQueue<String, u32>,
{
    queue.set("c".to_string(), 30);
    queue.set("a".to_string(), 10);
    queue.set("b".to_string(), 20);

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek(), Some(("a".to_string(), 10)));

    let served = drain(&mut queue);
    assert_eq!(
        served,
        vec![("a".to_string(), 10), ("b".to_string(), 20), ("c".to_string(), 30)]
    );
    assert!(queue.is_empty());
}

fn check_set_updates_existing_key<Q>(mut queue: Q)
where
    Q: KeyedPriorityQueue<String, u32>,
{
    queue.set("a".to_string(), 10);
    queue.set("b".to_string(), 20);

    // Lower b below a
    queue.set("b".to_string(), 5);
    assert_eq!(queue.len(), 2, "updating a key must not add a second entry");
    assert_eq!(queue.get(&"b".to_string()), Some(5));
    assert_eq!(queue.peek(), Some(("b".to_string(), 5)));

    // Raise it again above a
    queue.set("b".to_string(), 50);
    assert_eq!(queue.next(), Some(("a".to_string(), 10)));
    assert_eq!(queue.next(), Some(("b".to_string(), 50)));
    assert_eq!(queue.next(), None);
}

fn check_get_on_absent_key<Q>(mut queue: Q)
where
    Q: KeyedPriorityQueue<String, u32>,
{
    assert_eq!(queue.get(&"missing".to_string()), None);

    queue.set("a".to_string(), 1);
    assert_eq!(queue.get(&"missing".to_string()), None);
    assert_eq!(queue.len(), 1, "get must not insert");

    queue.next();
    assert_eq!(queue.get(&"a".to_string()), None, "served keys are no longer pending");
}

fn check_random_operations<Q>(mut queue: Q, seed: u64)
where
    Q: KeyedPriorityQueue<String, u32>,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut distinct = std::collections::HashSet::new();

    for _ in 0..200 {
        let key = format!("k{}", rng.gen_range(0..50));
        distinct.insert(key.clone());
        queue.set(key, rng.gen_range(0..1_000));
    }

    assert_eq!(queue.len(), distinct.len());

    let served = drain(&mut queue);
    assert_eq!(served.len(), distinct.len(), "every distinct key is served exactly once");
    for pair in served.windows(2) {
        assert!(pair[0].1 <= pair[1].1, "served out of order: {:?} before {:?}", pair[0], pair[1]);
    }
    assert!(queue.is_empty());
}

#[test]
fn test_sorted_queue_serves_lowest_priority_first() {
    check_serves_lowest_priority_first(SortedQueue::new());
}

#[test]
fn test_indexed_heap_serves_lowest_priority_first() {
    check_serves_lowest_priority_first(IndexedHeap::new());
}

#[test]
fn test_sorted_queue_set_updates_existing_key() {
    check_set_updates_existing_key(SortedQueue::new());
}

#[test]
fn test_indexed_heap_set_updates_existing_key() {
    check_set_updates_existing_key(IndexedHeap::new());
}

#[test]
fn test_sorted_queue_get_on_absent_key() {
    check_get_on_absent_key(SortedQueue::new());
}

#[test]
fn test_indexed_heap_get_on_absent_key() {
    check_get_on_absent_key(IndexedHeap::new());
}

#[test]
fn test_sorted_queue_random_operations() {
    for seed in 0..10 {
        check_random_operations(SortedQueue::new(), seed);
    }
}

#[test]
fn test_indexed_heap_random_operations() {
    for seed in 0..10 {
        check_random_operations(IndexedHeap::new(), seed);
    }
}

// Empty queues hand out nothing instead of panicking
#[test]
fn test_next_on_empty_queue() {
    let mut sorted: SortedQueue<String, u32> = SortedQueue::new();
    let mut heap: IndexedHeap<String, u32> = IndexedHeap::new();

    assert!(sorted.is_empty());
    assert!(heap.is_empty());
    assert_eq!(sorted.next(), None);
    assert_eq!(heap.next(), None);
    assert_eq!(sorted.peek(), None);
    assert_eq!(heap.peek(), None);
}

// Ties keep their position in the sorted sequence
#[test]
fn test_sorted_queue_ties_keep_insertion_order() {
    let mut queue = SortedQueue::new();
    queue.set("x".to_string(), 7);
    queue.set("y".to_string(), 7);
    queue.set("z".to_string(), 7);

    let keys: Vec<_> = queue.keys().cloned().collect();
    assert_eq!(keys, vec!["x", "y", "z"]);

    // An update that keeps the same priority does not move the key
    queue.set("x".to_string(), 7);
    assert_eq!(queue.next(), Some(("x".to_string(), 7)));
    assert_eq!(queue.next(), Some(("y".to_string(), 7)));
    assert_eq!(queue.next(), Some(("z".to_string(), 7)));
}

#[test]
fn test_indexed_heap_ties_keep_insertion_order() {
    let mut queue = IndexedHeap::new();
    for key in ["x", "y", "z", "w"] {
        queue.set(key.to_string(), 7u32);
    }

    let served: Vec<_> = drain(&mut queue).into_iter().map(|(key, _)| key).collect();
    assert_eq!(served, vec!["x", "y", "z", "w"]);
}

#[test]
fn test_clear_empties_queue() {
    let mut sorted = SortedQueue::new();
    let mut heap = IndexedHeap::new();
    for (i, key) in ["a", "b", "c"].iter().enumerate() {
        sorted.set(key.to_string(), i as u32);
        heap.set(key.to_string(), i as u32);
    }

    sorted.clear();
    heap.clear();

    assert!(sorted.is_empty());
    assert!(heap.is_empty());
    assert_eq!(sorted.get(&"a".to_string()), None);
    assert_eq!(heap.get(&"a".to_string()), None);
}
