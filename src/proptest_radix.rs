use crate::RadixTrie;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn key_value_pairs(
    min_pairs: usize,
    max_pairs: usize,
) -> impl Strategy<Value = Vec<(String, i32)>> {
    proptest::collection::vec(
        (
            "[a-zA-Z0-9]{1,10}".prop_map(String::from),
            proptest::num::i32::ANY,
        ),
        min_pairs..max_pairs,
    )
}

// A narrow alphabet forces shared prefixes, so splits and compactions
// actually happen.
fn clustered_pairs(
    min_pairs: usize,
    max_pairs: usize,
) -> impl Strategy<Value = Vec<(String, i32)>> {
    proptest::collection::vec(
        ("[a-c]{1,6}".prop_map(String::from), proptest::num::i32::ANY),
        min_pairs..max_pairs,
    )
}

#[derive(Debug, Clone)]
enum Op {
    Add(String, i32),
    Delete(String),
}

fn op_sequences(max_ops: usize) -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(
        prop_oneof![
            ("[a-c]{1,6}", proptest::num::i32::ANY).prop_map(|(k, v)| Op::Add(k, v)),
            "[a-c]{1,6}".prop_map(Op::Delete),
        ],
        1..max_ops,
    )
}

fn sorted_entries(trie: &RadixTrie<i32>) -> Vec<(String, i32)> {
    let mut entries: Vec<_> = trie.entries().map(|(k, v)| (k, *v)).collect();
    entries.sort();
    entries
}

proptest! {
    #[test]
    fn round_trip(pairs in key_value_pairs(1, 50)) {
        let mut trie = RadixTrie::new();
        let mut model = BTreeMap::new();

        for (key, value) in &pairs {
            trie.add(key, *value).unwrap();
            model.insert(key.clone(), *value);
        }

        for (key, expected) in &model {
            prop_assert_eq!(trie.get(key), Some(expected));
            prop_assert!(trie.has(key));
        }
        prop_assert_eq!(trie.len(), model.len());
    }

    #[test]
    fn overwrite_only_touches_its_own_key(
        pairs in clustered_pairs(2, 30),
        value in proptest::num::i32::ANY,
    ) {
        let mut trie = RadixTrie::new();
        for (key, v) in &pairs {
            trie.add(key, *v).unwrap();
        }
        let before = sorted_entries(&trie);
        let target = pairs[0].0.clone();

        trie.add(&target, value).unwrap();

        prop_assert_eq!(trie.get(&target), Some(&value));
        let others_before: Vec<_> =
            before.iter().filter(|(k, _)| *k != target).collect();
        let after = sorted_entries(&trie);
        let others_after: Vec<_> =
            after.iter().filter(|(k, _)| *k != target).collect();
        prop_assert_eq!(others_before, others_after);
    }

    #[test]
    fn random_ops_match_btreemap_model(ops in op_sequences(64)) {
        let mut trie = RadixTrie::new();
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                Op::Add(key, value) => {
                    trie.add(&key, value).unwrap();
                    model.insert(key, value);
                }
                Op::Delete(key) => {
                    trie.delete(&key).unwrap();
                    model.remove(&key);
                }
            }
            // The compression and compaction invariants hold after every
            // single operation, not just at the end.
            trie.root.assert_invariants(true);
            prop_assert_eq!(trie.len(), model.len());
        }

        let expected: Vec<(String, i32)> = model.into_iter().collect();
        prop_assert_eq!(sorted_entries(&trie), expected);
    }

    #[test]
    fn delete_then_re_add_is_idempotent(pairs in clustered_pairs(1, 30)) {
        let mut trie = RadixTrie::new();
        for (key, value) in &pairs {
            trie.add(key, *value).unwrap();
        }

        let (target, value) = pairs[0].clone();
        trie.delete(&target).unwrap();
        prop_assert_eq!(trie.get(&target), None);
        trie.root.assert_invariants(true);

        trie.add(&target, value).unwrap();
        prop_assert_eq!(trie.get(&target), Some(&value));
        trie.root.assert_invariants(true);
    }

    #[test]
    fn fuzzy_get_equals_case_insensitive_prefix_filter(
        pairs in proptest::collection::vec(
            ("[a-cA-C]{1,6}".prop_map(String::from), proptest::num::i32::ANY),
            0..30,
        ),
        query in "[a-cA-C]{0,4}",
    ) {
        let mut trie = RadixTrie::new();
        for (key, value) in &pairs {
            trie.add(key, *value).unwrap();
        }

        let needle = query.to_lowercase();
        let expected: Vec<(String, i32)> = trie
            .entries()
            .filter(|(key, _)| key.to_lowercase().starts_with(&needle))
            .map(|(key, value)| (key, *value))
            .collect();
        let hits: Vec<(String, i32)> = trie
            .fuzzy_get(&query)
            .map(|(key, value)| (key, *value))
            .collect();

        // Same hits, same depth-first order, each exactly once.
        prop_assert_eq!(hits, expected);
    }

    #[test]
    fn traversal_is_restartable_and_finite(pairs in clustered_pairs(0, 30)) {
        let mut trie = RadixTrie::new();
        let mut model = BTreeMap::new();
        for (key, value) in &pairs {
            trie.add(key, *value).unwrap();
            model.insert(key.clone(), *value);
        }

        let first: Vec<_> = trie.entries().collect();
        let second: Vec<_> = trie.entries().collect();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), model.len());

        let keys: Vec<String> = trie.keys().collect();
        let values: Vec<i32> = trie.values().copied().collect();
        prop_assert_eq!(keys.len(), model.len());
        prop_assert_eq!(values.len(), model.len());
    }

    #[test]
    fn into_iter_agrees_with_entries(pairs in clustered_pairs(0, 30)) {
        let mut trie = RadixTrie::new();
        for (key, value) in &pairs {
            trie.add(key, *value).unwrap();
        }

        let borrowed: Vec<(String, i32)> =
            trie.entries().map(|(k, v)| (k, *v)).collect();
        let owned: Vec<(String, i32)> = trie.into_iter().collect();
        prop_assert_eq!(borrowed, owned);
    }

    #[test]
    fn clone_preserves_structure_and_content(ops in op_sequences(40)) {
        let mut trie = RadixTrie::new();
        for op in ops {
            match op {
                Op::Add(key, value) => {
                    trie.add(&key, value).unwrap();
                }
                Op::Delete(key) => {
                    trie.delete(&key).unwrap();
                }
            }
        }

        let copy = trie.clone();
        copy.root.assert_invariants(true);
        prop_assert_eq!(sorted_entries(&copy), sorted_entries(&trie));
        prop_assert_eq!(&copy, &trie);
    }

    #[test]
    fn json_round_trip_through_entries(pairs in key_value_pairs(0, 30)) {
        let mut trie = RadixTrie::new();
        for (key, value) in &pairs {
            trie.add(key, *value).unwrap();
        }

        let map: BTreeMap<String, i32> =
            trie.entries().map(|(k, v)| (k, *v)).collect();
        let json = serde_json::to_string(&map).unwrap();
        let back: BTreeMap<String, i32> = serde_json::from_str(&json).unwrap();

        let rebuilt = RadixTrie::from(back);
        prop_assert_eq!(&rebuilt, &trie);
    }
}
