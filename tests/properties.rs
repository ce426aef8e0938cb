use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rbtag::Tree;

const UNIVERSE: u16 = 1000;

#[derive(Debug, Clone, Copy)]
enum Op {
    Insert(u16),
    Remove(u16),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        let key = u16::arbitrary(g) % UNIVERSE;
        if bool::arbitrary(g) {
            Op::Insert(key)
        } else {
            Op::Remove(key)
        }
    }
}

#[quickcheck]
fn ops_agree_with_btreeset(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut model = BTreeSet::new();
    for op in ops {
        let (got, want) = match op {
            Op::Insert(key) => (tree.insert(key), model.insert(key)),
            Op::Remove(key) => (tree.remove(&key), model.remove(&key)),
        };
        if got != want || tree.validate().is_err() {
            return false;
        }
    }
    tree.len() == model.len() && tree.in_order_keys() == model.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn round_trip(keys: Vec<i32>) -> bool {
    let tree: Tree<i32> = keys.iter().copied().collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    sorted.dedup();
    if tree.in_order_keys() != sorted {
        return false;
    }

    let mut tree = tree;
    for key in &keys {
        tree.remove(key);
    }
    tree.is_empty() && tree.in_order_keys().is_empty() && tree.validate() == Ok(0)
}

#[quickcheck]
fn height_is_bounded(keys: Vec<u32>) -> bool {
    let tree: Tree<u32> = keys.into_iter().collect();
    tree.height() as f64 <= 2.0 * ((tree.len() + 1) as f64).log2()
}

#[quickcheck]
fn failed_ops_change_nothing(keys: Vec<u8>, probe: u8) -> TestResult {
    let mut tree: Tree<u8> = keys.into_iter().collect();
    let before = tree.in_order_keys();
    if tree.contains(&probe) {
        if tree.insert(probe) {
            return TestResult::failed();
        }
    } else if tree.remove(&probe) {
        return TestResult::failed();
    }
    TestResult::from_bool(before == tree.in_order_keys() && tree.validate().is_ok())
}

#[quickcheck]
fn payloads_match_naive_model(n: u8, rounds: Vec<(u8, u8, u8)>) -> bool {
    let n = u32::from(n);
    let mut tree: Tree<u32> = (1..=n).collect();
    let mut model = vec![0u32; n as usize + 1];
    for (l, r, winner) in rounds {
        let (l, r) = (u32::from(l.min(r)), u32::from(l.max(r)));
        let winner = u32::from(winner).clamp(l, r);
        tree.set_payload(winner, l..=r);
        for key in (l..=r.min(n)).filter(|&key| key != winner && key >= 1) {
            if model[key as usize] == 0 {
                model[key as usize] = winner;
            }
        }
    }
    (1..=n).all(|key| tree.get_payload(&key).copied().unwrap_or(0) == model[key as usize])
}

#[test]
fn scenario() {
    let mut tree: Tree<u32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    assert_eq!(vec![1, 3, 4, 5, 7, 8, 9], tree.in_order_keys());
    assert!(tree.remove(&5));
    assert_eq!(vec![1, 3, 4, 7, 8, 9], tree.in_order_keys());
    assert!(tree.validate().is_ok());
}

#[test]
fn seeded_fuzz_keeps_black_height() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    let mut tree = Tree::with_capacity(UNIVERSE as usize);
    let mut model = BTreeSet::new();
    for step in 0..20_000 {
        let key = rng.random_range(0..UNIVERSE);
        // Lean towards inserts early on so the tree grows deep.
        let insert = rng.random_bool(if step < 5_000 { 0.7 } else { 0.5 });
        if insert {
            assert_eq!(model.insert(key), tree.insert(key), "insert {key} at step {step}");
        } else {
            assert_eq!(model.remove(&key), tree.remove(&key), "remove {key} at step {step}");
        }
        if let Err(violation) = tree.validate() {
            panic!("step {step}: {violation}");
        }
    }
    assert_eq!(model.into_iter().collect::<Vec<_>>(), tree.in_order_keys());
}
