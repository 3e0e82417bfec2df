use domain::{IdProvider, SequentialIdProvider};
use std::collections::HashSet;
use std::sync::Arc;

#[test]
fn concurrent_allocations_never_collide() {
    let ids = Arc::new(SequentialIdProvider::starting_at(1_000));
    let mut handles = Vec::new();
    for _ in 0..8 {
        let ids = ids.clone();
        handles.push(std::thread::spawn(move || {
            (0..100).map(|_| ids.next_id()).collect::<Vec<i64>>()
        }));
    }

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().expect("thread") {
            assert!(seen.insert(id), "duplicate id {id}");
        }
    }
    assert_eq!(seen.len(), 800);
}

#[test]
fn seeded_provider_starts_at_seed() {
    let ids = SequentialIdProvider::starting_at(42);
    assert_eq!(ids.next_id(), 42);
    assert_eq!(ids.next_id(), 43);
}
