#![cfg(test)]

// Property tests for ProbingTable kept inside the crate so they can inspect
// the slot array directly.

use crate::prime::is_prime;
use crate::table::ProbingTable;
use crate::TableBuilder;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, u16),
    Delete(usize),
    Find(usize),
    Contains(String),
    Iterate,
}

fn arb_scenario(max_ops: usize) -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z0-9]{0,6}", 1..=120).prop_flat_map(move |pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            4 => (idx.clone(), any::<u16>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            3 => idx.clone().prop_map(OpI::Delete),
            2 => idx.clone().prop_map(OpI::Find),
            1 => prop_oneof![contains_pool, "[a-z0-9]{0,6}"].prop_map(OpI::Contains),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..max_ops).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn check_structure(sut: &ProbingTable, model: &HashMap<String, String>) -> Result<(), TestCaseError> {
    prop_assert!(is_prime(sut.capacity() as u64).is_prime());
    prop_assert!(sut.capacity() >= sut.config().min_capacity);
    prop_assert!(sut.base_capacity() >= sut.config().min_capacity);
    prop_assert_eq!(sut.len(), model.len());
    prop_assert_eq!(sut.is_empty(), model.is_empty());
    prop_assert!(sut.len() + sut.tombstones() <= sut.capacity());
    prop_assert_eq!(sut.iter().len(), sut.len());
    Ok(())
}

fn run_state_machine(
    mut sut: ProbingTable,
    pool: Vec<String>,
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, String> = HashMap::new();
    let grow = sut.config().grow_load_percent;

    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = pool[i].clone();
                let v = v.to_string();
                let prev = sut.insert(k.clone(), v.clone()).expect("insert");
                prop_assert_eq!(prev, model.insert(k, v));
                prop_assert!(sut.load_percent() <= grow, "load {} after insert", sut.load_percent());
            }
            OpI::Delete(i) => {
                let k = &pool[i];
                let removed = sut.delete(k).expect("delete");
                prop_assert_eq!(removed, model.remove(k));
                prop_assert!(sut.find(k).is_none());
            }
            OpI::Find(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.find(k), model.get(k).map(String::as_str));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
            OpI::Iterate => {
                let s: BTreeMap<&str, &str> = sut.iter().collect();
                let m: BTreeMap<&str, &str> =
                    model.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
                prop_assert_eq!(s, m);
            }
        }

        check_structure(&sut, &model)?;
    }

    // Every live key is still reachable along its probe sequence.
    for (k, v) in &model {
        prop_assert_eq!(sut.find(k), Some(v.as_str()));
    }
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - Insert upserts: the previous value matches the model's previous value.
// - `delete` returns the model's removed value and only then changes `len`.
// - `find`/`contains_key` parity with the model.
// - Capacity stays prime and at or above the minimum after every op.
// - Load stays at or below the grow threshold after every insert.
// - `len + tombstones <= capacity`; `iter` yields exactly `len` entries.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(300)) {
        run_state_machine(ProbingTable::new(), pool, ops)?;
    }
}

// Property: Same state machine on a tiny table with aggressive thresholds,
// so grows, shrinks, and long probe chains happen on nearly every step.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_small_table((pool, ops) in arb_scenario(300)) {
        let sut = TableBuilder::new()
            .min_capacity(2)
            .grow_load_percent(90)
            .shrink_load_percent(40)
            .build()
            .expect("valid config");
        run_state_machine(sut, pool, ops)?;
    }
}
