use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spf::graph::generators::{grid_graph, node_name, random_graph};
use spf::{Dijkstra, PathFinder, QueueKind};

fn benchmark_queue_kinds(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_graph");

    for &size in &[100usize, 1_000, 5_000] {
        let graph = random_graph(size, 4, 100, 42);
        let target = node_name(size - 1);

        let queues = [
            ("sorted", QueueKind::Sorted),
            ("indexed_heap", QueueKind::IndexedHeap),
        ];
        for (name, queue) in queues {
            let finder = Dijkstra::new().with_queue(queue);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| black_box(finder.find_path(&graph, "n0", &target).map(|r| r.cost).ok()));
            });
        }
    }

    group.finish();
}

fn benchmark_grid(c: &mut Criterion) {
    let graph = grid_graph(40, 40, 1);
    let target = node_name(40 * 40 - 1);
    let finder = Dijkstra::new().with_queue(QueueKind::IndexedHeap);

    c.bench_function("grid_40x40_corner_to_corner", |b| {
        b.iter(|| black_box(finder.find_path(&graph, "n0", &target).map(|r| r.cost).ok()));
    });
}

criterion_group!(benches, benchmark_queue_kinds, benchmark_grid);
criterion_main!(benches);
