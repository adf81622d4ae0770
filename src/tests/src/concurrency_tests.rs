//! Tests for concurrent use of a shared ledger.

use ledger_core::{Address, Ledger, SharedLedger};

const WORKERS: u8 = 8;
const ROUNDS: usize = 250;

fn worker_addr(i: u8) -> Address {
    [i + 1; 32]
}

/// Tests that concurrent transfers in a ring never create or lose tokens,
/// and that readers only ever see consistent snapshots.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_transfers_conserve_supply() {
    let owner = [0xaau8; 32];
    let shared = SharedLedger::new(Ledger::new(owner));
    for i in 0..WORKERS {
        shared.mint(&owner, &worker_addr(i), 1_000).unwrap();
    }
    let supply = shared.total_supply();

    let mut handles = Vec::new();
    for i in 0..WORKERS {
        let shared = shared.clone();
        handles.push(tokio::spawn(async move {
            let me = worker_addr(i);
            let next = worker_addr((i + 1) % WORKERS);
            for round in 0..ROUNDS {
                // Rejections are fine; partial application is not
                let _ = shared.transfer(&me, &next, (round % 7) as u128 * 50);
                tokio::task::yield_now().await;
            }
        }));
    }

    let reader = {
        let shared = shared.clone();
        tokio::spawn(async move {
            for _ in 0..ROUNDS {
                let snapshot = shared.snapshot();
                assert!(snapshot.is_consistent());
                assert_eq!(snapshot.total_supply, supply);
                tokio::task::yield_now().await;
            }
        })
    };

    for handle in handles {
        handle.await.unwrap();
    }
    reader.await.unwrap();

    let snapshot = shared.snapshot();
    assert_eq!(snapshot.total_supply, supply);
    assert!(snapshot.is_consistent());
}

/// Tests that many concurrent mints and burns add up exactly.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_mint_and_burn() {
    let owner = [0xaau8; 32];
    let holder = worker_addr(0);
    let shared = SharedLedger::new(Ledger::new(owner));

    let mut handles = Vec::new();
    for _ in 0..WORKERS {
        let shared = shared.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..ROUNDS {
                shared.mint(&owner, &holder, 3).unwrap();
                shared.burn(&holder, 1).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let expected = WORKERS as u128 * ROUNDS as u128 * 2;
    assert_eq!(shared.balance_of(&holder), expected);
    assert_eq!(shared.total_supply(), expected);
}
