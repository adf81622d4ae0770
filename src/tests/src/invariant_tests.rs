//! Randomized checks of supply conservation and atomicity.

use ledger_core::{Address, Balance, Ledger, LedgerMsg};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const HOLDERS: usize = 6;
const STEPS: usize = 2_000;

fn holders() -> Vec<Address> {
    (0..HOLDERS as u8).map(|i| [i + 1; 32]).collect()
}

fn pick(rng: &mut StdRng, holders: &[Address]) -> Address {
    holders[rng.gen_range(0..holders.len())]
}

fn random_msg(rng: &mut StdRng, owner: Address, holders: &[Address]) -> LedgerMsg {
    // Mostly small amounts, occasionally huge ones to hit the overflow paths
    let amount: Balance = if rng.gen_bool(0.05) {
        rng.gen_range(u128::MAX / 2..=u128::MAX)
    } else {
        rng.gen_range(0..5_000)
    };

    match rng.gen_range(0..3) {
        0 => {
            let caller = if rng.gen_bool(0.8) { owner } else { pick(rng, holders) };
            LedgerMsg::Mint { caller, to: pick(rng, holders), amount }
        }
        1 => LedgerMsg::Transfer { from: pick(rng, holders), to: pick(rng, holders), amount },
        _ => LedgerMsg::Burn { from: pick(rng, holders), amount },
    }
}

/// Tests that every reachable state keeps supply equal to the sum of balances,
/// and that rejected operations change nothing.
#[test]
fn test_random_operations_conserve_supply() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let owner = [0xffu8; 32];
    let holders = holders();
    let mut ledger = Ledger::new(owner);
    let mut rejected = 0;

    for _ in 0..STEPS {
        let msg = random_msg(&mut rng, owner, &holders);
        let before: Vec<Balance> = holders.iter().map(|h| ledger.balance_of(h)).collect();
        let supply_before = ledger.total_supply();

        match ledger.apply(&msg) {
            Ok(event) => {
                let supply_after = ledger.total_supply();
                match msg {
                    LedgerMsg::Mint { .. } => assert_eq!(supply_after, supply_before + event.amount),
                    LedgerMsg::Transfer { .. } => assert_eq!(supply_after, supply_before),
                    LedgerMsg::Burn { .. } => assert_eq!(supply_after, supply_before - event.amount),
                }
            }
            Err(_) => {
                rejected += 1;
                let after: Vec<Balance> = holders.iter().map(|h| ledger.balance_of(h)).collect();
                assert_eq!(before, after);
                assert_eq!(ledger.total_supply(), supply_before);
            }
        }

        let sum = holders
            .iter()
            .try_fold(0u128, |acc, h| acc.checked_add(ledger.balance_of(h)));
        assert_eq!(sum, Some(ledger.total_supply()));
        assert!(ledger.supply_matches_balances());
    }

    // The generator is expected to exercise both paths
    assert!(rejected > 0);
    assert!(rejected < STEPS);
}

/// Tests that a successful operation only touches the holders it names.
#[test]
fn test_operations_touch_only_named_holders() {
    let mut rng = StdRng::seed_from_u64(42);
    let owner = [0xffu8; 32];
    let holders = holders();
    let mut ledger = Ledger::new(owner);
    for h in &holders {
        ledger.mint(&owner, h, 10_000).unwrap();
    }

    for _ in 0..STEPS {
        let msg = random_msg(&mut rng, owner, &holders);
        let named: Vec<Address> = match &msg {
            LedgerMsg::Mint { to, .. } => vec![*to],
            LedgerMsg::Transfer { from, to, .. } => vec![*from, *to],
            LedgerMsg::Burn { from, .. } => vec![*from],
        };
        let bystanders: Vec<(Address, Balance)> = holders
            .iter()
            .filter(|h| !named.contains(h))
            .map(|h| (*h, ledger.balance_of(h)))
            .collect();

        let _ = ledger.apply(&msg);

        for (h, bal) in bystanders {
            assert_eq!(ledger.balance_of(&h), bal);
        }
    }
}
