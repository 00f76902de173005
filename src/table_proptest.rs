#![cfg(test)]

// Property tests for ChainTable kept inside the crate so they can reach
// entry identities and chain walks, which are not public.

use crate::config::Config;
use crate::hash::HashOracle;
use crate::table::{ChainTable, EntryId};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Delete(usize),
    Get(usize),
    Contains(String),
    Mutate(usize, i32),
    InsertMany(Vec<(usize, i32)>),
    DeleteMany(Vec<usize>),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=24).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            2 => idx.clone().prop_map(OpI::Delete),
            1 => idx.clone().prop_map(OpI::Get),
            1 => prop_oneof![contains_pool, "[a-z]{0,5}"].prop_map(OpI::Contains),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            1 => proptest::collection::vec((idx.clone(), any::<i32>()), 0..12)
                .prop_map(OpI::InsertMany),
            1 => proptest::collection::vec(idx.clone(), 0..6).prop_map(OpI::DeleteMany),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

/// Forces every key into one chain.
#[derive(Clone, Copy, Default)]
struct ConstOracle;
impl HashOracle for ConstOracle {
    fn hash(&self, _key: &str) -> u64 {
        0
    }
}

fn run_state_machine<H: HashOracle>(
    mut sut: ChainTable<i32, H>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();
    let mut ids: HashMap<String, EntryId> = HashMap::new();

    for op in ops {
        let cap_before = sut.capacity();
        match op {
            OpI::Insert(i, v) => {
                let k = &pool[i];
                let prev = sut.insert(k.as_str(), v);
                prop_assert_eq!(prev, model.insert(k.clone(), v));
                let id = sut.entry_id(k).expect("inserted key resolves");
                // Overwrites keep the entry; new keys get a fresh one.
                if let Some(old) = ids.insert(k.clone(), id) {
                    prop_assert_eq!(old, id);
                }
            }
            OpI::Delete(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.delete(k), model.remove(k));
                ids.remove(k);
                prop_assert!(sut.get(k).is_none());
                prop_assert_eq!(sut.capacity(), cap_before, "delete never shrinks");
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
            OpI::Mutate(i, d) => {
                let k = &pool[i];
                if let Some(v) = sut.get_mut(k) {
                    *v = v.saturating_add(d);
                    let mv = model.get_mut(k).expect("present in model");
                    *mv = mv.saturating_add(d);
                } else {
                    prop_assert!(!model.contains_key(k));
                }
            }
            OpI::InsertMany(pairs) => {
                let batch: Vec<(String, i32)> =
                    pairs.iter().map(|&(i, v)| (pool[i].clone(), v)).collect();
                sut.insert_many(batch.clone());
                for (k, v) in batch {
                    model.insert(k.clone(), v);
                    let id = sut.entry_id(&k).expect("batch key resolves");
                    if let Some(old) = ids.insert(k, id) {
                        prop_assert_eq!(old, id);
                    }
                }
            }
            OpI::DeleteMany(keys) => {
                let batch: Vec<&str> = keys.iter().map(|&i| pool[i].as_str()).collect();
                sut.delete_many(batch.iter().copied());
                for k in batch {
                    model.remove(k);
                    ids.remove(k);
                }
            }
            OpI::Iterate => {
                let seen: BTreeMap<String, i32> =
                    sut.iter().map(|(k, v)| (k.to_string(), *v)).collect();
                let expected: BTreeMap<String, i32> =
                    model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(sut.iter().count(), seen.len(), "each key visited once");
                prop_assert_eq!(seen, expected);
            }
        }

        // Post-conditions after each op
        // 1) Size parity with the model and with what the chains reach
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.reachable(), model.len());
        // 2) Growth is a doubling of the previous bucket count
        let cap = sut.capacity();
        prop_assert!(cap >= cap_before);
        if cap != cap_before {
            prop_assert!(cap >= cap_before * 2);
            prop_assert!(cap % cap_before == 0 && (cap / cap_before).is_power_of_two());
        }
        // 3) Entry identities survive any resizes
        for (k, id) in &ids {
            prop_assert_eq!(sut.entry_id(k), Some(*id));
        }
    }
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `insert` returns the replaced value exactly when the model had one.
// - `delete` returns the removed value and the key stops resolving.
// - `iter` yields each live entry exactly once with the model's value.
// - `len` equals the model's size and the number of chained entries.
// - Resizes at least double capacity and keep every entry's identity.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(), cap in 0usize..6) {
        run_state_machine(ChainTable::with_capacity(cap), &pool, ops)?;
    }
}

// Property: Same state-machine invariants as above, under worst-case
// collision behavior (constant oracle), where every lookup walks one chain.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario(), cap in 0usize..6) {
        let cfg = Config::new().with_initial_capacity(cap);
        run_state_machine(ChainTable::with_config_and_oracle(cfg, ConstOracle), &pool, ops)?;
    }
}
