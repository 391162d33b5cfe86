#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp, clippy::use_debug)]

//! Shared use of a single calculator from many threads

mod common;

use std::sync::Arc;
use std::thread;

use common::create_client;

const THREADS: u32 = 8;

#[test]
fn test_shared_client_across_threads() {
    let client = create_client();

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let client = Arc::clone(&client);
            thread::spawn(move || {
                let x = f64::from(i);
                let sum = client.add(x, 1.0);
                let root = client.sqrt(x * x).unwrap();
                let err = client.divide(x, 0.0).unwrap_err();
                (sum, root, err.is_division_by_zero())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (sum, root, rejected) = handle.join().expect("worker thread panicked");
        let x = f64::from(u32::try_from(i).unwrap());
        assert_eq!(sum, x + 1.0);
        assert_eq!(root, x);
        assert!(rejected);
    }
}
