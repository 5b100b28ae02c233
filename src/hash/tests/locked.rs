extern crate std;

use alloc::{sync::Arc, vec::Vec};
use std::thread;

use crate::hash::prelude::*;
use crate::hash::{HashedChainTable, Locked, OpenAddressingTable};

#[test]
fn test_locked_operations() {
    let table: Locked<OpenAddressingTable<u32, 8>> = Locked::default();

    table.insert(1);
    table.insert(2);
    assert!(table.search(&1));

    table.change(&1, 5);
    assert!(!table.search(&1));
    assert!(table.search(&5));

    table.remove(&2);
    assert!(!table.search(&2));
    assert_eq!(table.lock().len(), 1);

    let inner = table.into_inner();
    assert!(inner.search(&5));
}

#[test]
fn test_locked_concurrent_inserts() {
    let table: Arc<Locked<HashedChainTable<usize, 64>>> = Arc::new(Locked::default());
    let num_threads = 8;
    let items_per_thread = 500;

    let handles: Vec<_> = (0..num_threads)
        .map(|i| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                for j in 0..items_per_thread {
                    table.insert(i * items_per_thread + j);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(table.lock().len(), num_threads * items_per_thread);

    // Every thread swaps its own values for shifted ones.
    let handles: Vec<_> = (0..num_threads)
        .map(|i| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                for j in 0..items_per_thread {
                    let key = i * items_per_thread + j;
                    table.change(&key, key + 1_000_000);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for key in 0..num_threads * items_per_thread {
        assert!(!table.search(&key));
        assert!(table.search(&(key + 1_000_000)));
    }
}
