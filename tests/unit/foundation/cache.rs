use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn initializer_runs_once_per_key() {
    let cache: KeyedOnce<&str, u32> = KeyedOnce::new();
    let calls = AtomicUsize::new(0);

    let a = cache.get_or_init("a", || {
        calls.fetch_add(1, Ordering::SeqCst);
        1
    });
    let a_again = cache.get_or_init("a", || {
        calls.fetch_add(1, Ordering::SeqCst);
        2
    });

    assert_eq!(a, 1);
    assert_eq!(a_again, 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn construction_needs_no_key_or_value_bounds() {
    struct NotClone;
    let _ = KeyedOnce::<Vec<u8>, NotClone>::new();
    let _ = KeyedOnce::<Vec<u8>, NotClone>::default();
}

#[test]
fn distinct_keys_get_distinct_values() {
    let cache: KeyedOnce<u32, String> = KeyedOnce::new();
    assert_eq!(cache.get_or_init(1, || "one".to_string()), "one");
    assert_eq!(cache.get_or_init(2, || "two".to_string()), "two");
    assert_eq!(cache.len(), 2);
}

#[test]
fn get_does_not_initialize() {
    let cache: KeyedOnce<u32, u32> = KeyedOnce::new();
    assert_eq!(cache.get(&7), None);
    cache.get_or_init(7, || 42);
    assert_eq!(cache.get(&7), Some(42));
}

#[test]
fn clear_resets_everything() {
    let cache: KeyedOnce<u32, u32> = KeyedOnce::new();
    cache.get_or_init(1, || 1);
    assert!(!cache.is_empty());
    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.get(&1), None);
}

#[test]
fn concurrent_same_key_initializes_exactly_once() {
    let cache: std::sync::Arc<KeyedOnce<u32, u32>> = std::sync::Arc::new(KeyedOnce::new());
    let calls = std::sync::Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = std::sync::Arc::clone(&cache);
            let calls = std::sync::Arc::clone(&calls);
            std::thread::spawn(move || {
                cache.get_or_init(99, || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    std::thread::yield_now();
                    7
                })
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 7);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
