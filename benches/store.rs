//! Benchmarks for store mutation throughput.
//!
//! These benchmarks measure the cost of the store operations that every
//! key press ultimately funnels into.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use todo_tui::store::TodoStore;

fn bench_add_todos(c: &mut Criterion) {
    c.bench_function("store_add_100", |b| {
        b.iter(|| {
            let mut store = TodoStore::new();
            for i in 0..100 {
                store.add_todo(black_box(&format!("todo {}", i)));
            }
            store
        })
    });
}

fn bench_toggle_todo(c: &mut Criterion) {
    let mut store = TodoStore::new();
    for i in 0..100 {
        store.add_todo(&format!("todo {}", i));
    }
    let id = store.todos()[50].id;

    c.bench_function("store_toggle_mid_list", |b| {
        b.iter(|| store.toggle_todo(black_box(id)))
    });
}

fn bench_update_todo(c: &mut Criterion) {
    let mut store = TodoStore::new();
    for i in 0..100 {
        store.add_todo(&format!("todo {}", i));
    }
    let id = store.todos()[99].id;

    c.bench_function("store_update_last", |b| {
        b.iter(|| store.update_todo(black_box(id), black_box("renamed")))
    });
}

fn bench_publish_with_subscribers(c: &mut Criterion) {
    let mut store = TodoStore::new();
    for _ in 0..8 {
        store.subscribe(|todos| {
            black_box(todos.len());
        });
    }
    let id = store.add_todo("todo").unwrap();

    c.bench_function("store_toggle_with_8_subscribers", |b| {
        b.iter(|| store.toggle_todo(black_box(id)))
    });
}

criterion_group!(
    benches,
    bench_add_todos,
    bench_toggle_todo,
    bench_update_todo,
    bench_publish_with_subscribers
);
criterion_main!(benches);
