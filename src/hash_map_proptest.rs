#![cfg(test)]

// Property tests for HashMap kept inside the crate so they can check
// bucket-level invariants without widening the public API.

use crate::error::Error;
use crate::hash_map::{HashMap, MAX_LOAD_FACTOR};
use hashbrown::HashMap as Model;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::cell::Cell;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{BuildHasher, Hasher};
use std::rc::Rc;

// Key newtype with Borrow<str> to exercise borrowed lookup.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct Key(String);
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
impl std::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Pool-indexed operations shrink toward earlier keys and shorter op lists.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i32),
    InsertWith(usize, i32),
    Erase(usize),
    At(usize),
    Contains(String),
    Upsert(usize, i32),
    Mutate(usize, i32),
    Resize(usize),
    Clear,
    Iterate,
}

fn key_from(pool: &[String], i: usize) -> Key {
    Key(pool[i].clone())
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            2 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::InsertWith(i, v)),
            3 => idx.clone().prop_map(Op::Erase),
            2 => idx.clone().prop_map(Op::At),
            1 => prop_oneof![contains_pool, "[a-z]{0,5}"].prop_map(Op::Contains),
            2 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| Op::Upsert(i, d)),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| Op::Mutate(i, d)),
            1 => (0usize..64).prop_map(Op::Resize),
            1 => Just(Op::Clear),
            1 => Just(Op::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Drives `sut` and a hashbrown model through the same operations.
// Invariants checked after every step:
// - duplicate inserts fail exactly when the model already holds the key;
// - `at`/`contains_key`/`erase` agree with the model;
// - `len`/`is_empty` parity, and `len` equals the sum of bucket lengths;
// - load factor stays below MAX_LOAD_FACTOR (resize only grows, clear
//   keeps capacity);
// - every entry sits in the bucket its hash selects.
fn run_scenario<S: BuildHasher>(
    mut sut: HashMap<Key, i32, S>,
    pool: &[String],
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut model: Model<Key, i32> = Model::new();
    let ctor_calls = Rc::new(Cell::new(0));

    for op in ops {
        match op {
            Op::Insert(i, v) => {
                let k = key_from(pool, i);
                let already = model.contains_key(&k);
                match sut.insert(k.clone(), v) {
                    Ok((sk, sv)) => {
                        prop_assert!(!already, "insert must fail on duplicate");
                        prop_assert_eq!(sk, &k);
                        prop_assert_eq!(*sv, v);
                        model.insert(k, v);
                    }
                    Err(Error::DuplicateKey) => {
                        prop_assert!(already, "duplicate error only when key exists");
                    }
                    Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
                }
            }
            Op::InsertWith(i, v) => {
                let k = key_from(pool, i);
                let already = model.contains_key(&k);
                let counter = ctor_calls.clone();
                let before = counter.get();
                let res = sut.insert_with(k.clone(), move || {
                    counter.set(counter.get() + 1);
                    v
                });
                match res {
                    Ok(_) => {
                        prop_assert!(!already);
                        prop_assert_eq!(ctor_calls.get(), before + 1);
                        model.insert(k, v);
                    }
                    Err(_) => {
                        prop_assert!(already);
                        prop_assert_eq!(ctor_calls.get(), before, "constructor must not run on duplicate");
                    }
                }
            }
            Op::Erase(i) => {
                let k = key_from(pool, i);
                prop_assert_eq!(sut.erase(&k), model.remove(&k));
                prop_assert_eq!(sut.at(&k), Err(Error::KeyNotFound));
            }
            Op::At(i) => {
                let k = key_from(pool, i);
                match model.get(&k) {
                    Some(mv) => prop_assert_eq!(sut.at(&k), Ok(mv)),
                    None => prop_assert_eq!(sut.at(&k), Err(Error::KeyNotFound)),
                }
            }
            Op::Contains(s) => {
                let has_model = model.keys().any(|k| k.0 == s);
                prop_assert_eq!(sut.contains_key(s.as_str()), has_model);
            }
            Op::Upsert(i, d) => {
                let k = key_from(pool, i);
                let sv = sut.get_or_insert_default(k.clone());
                *sv = sv.wrapping_add(d);
                let mv = model.entry(k).or_default();
                *mv = mv.wrapping_add(d);
                prop_assert_eq!(*sv, *mv);
            }
            Op::Mutate(i, d) => {
                let k = key_from(pool, i);
                if let Some(mv) = model.get_mut(&k) {
                    let sv = sut.at_mut(&k);
                    prop_assert!(sv.is_ok(), "present key must resolve");
                    if let Ok(sv) = sv {
                        *sv = sv.saturating_add(d);
                        *mv = mv.saturating_add(d);
                    }
                } else {
                    prop_assert!(sut.get_mut(&k).is_none());
                }
            }
            Op::Resize(n) => {
                let before = sut.capacity();
                sut.resize(n);
                prop_assert_eq!(sut.capacity(), before.max(n));
            }
            Op::Clear => {
                let cap = sut.capacity();
                sut.clear();
                model.clear();
                prop_assert_eq!(sut.capacity(), cap);
            }
            Op::Iterate => {
                let s_keys: BTreeSet<_> = sut.keys().cloned().collect();
                let m_keys: BTreeSet<_> = model.keys().cloned().collect();
                prop_assert_eq!(s_keys, m_keys);
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert!(sut.load_factor() < MAX_LOAD_FACTOR);
        let bucket_sum: usize = (0..sut.capacity()).map(|b| sut.bucket_len(b)).sum();
        prop_assert_eq!(bucket_sum, sut.len());
        for k in model.keys() {
            let b = (sut.hasher().hash_one(k) % sut.capacity() as u64) as usize;
            prop_assert!(sut.bucket_contains(b, k), "key {:?} missing from bucket {}", k, b);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        // Start tiny so most runs cross several rehashes.
        run_scenario(HashMap::with_capacity(2), &pool, ops)?;
    }
}

// Collision variant using a constant hasher to stress chain scans.
#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        run_scenario(HashMap::with_capacity_and_hasher(2, ConstBuildHasher), &pool, ops)?;
    }
}

// Property: a clone is a deep copy; mutating either side never leaks into
// the other.
proptest! {
    #[test]
    fn prop_clone_is_independent(keys in proptest::collection::btree_set(0u32..500, 0..60)) {
        let mut original: HashMap<u32, u32> = HashMap::with_capacity(4);
        for &k in &keys {
            original.insert(k, k).unwrap();
        }
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);

        for &k in &keys {
            *original.at_mut(&k).unwrap() += 1;
        }
        copy.insert(10_000, 0).unwrap();

        for &k in &keys {
            prop_assert_eq!(copy.at(&k), Ok(&k));
            prop_assert_eq!(original.at(&k), Ok(&(k + 1)));
        }
        prop_assert!(!original.contains_key(&10_000));
        prop_assert_eq!(copy.len(), original.len() + 1);
    }
}
