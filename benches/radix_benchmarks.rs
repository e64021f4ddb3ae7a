use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use radixtrie::RadixTrie;
use std::collections::{BTreeMap, HashMap};

fn shared_prefix_keys(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("shared_prefix_key_{:05}", i))
        .collect()
}

fn sparse_keys(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{:x}{:05}", i.wrapping_mul(2654435761) % 997, i))
        .collect()
}

fn insert_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Insert Operations");

    let prefixed = shared_prefix_keys(1000);
    let sparse = sparse_keys(1000);

    for size in [100, 500, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("HashMap/prefixed", size),
            &prefixed[..*size],
            |b, keys| {
                b.iter(|| {
                    let mut map = HashMap::new();
                    for (i, key) in keys.iter().enumerate() {
                        map.insert(key.clone(), i);
                    }
                    black_box(map)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeMap/prefixed", size),
            &prefixed[..*size],
            |b, keys| {
                b.iter(|| {
                    let mut map = BTreeMap::new();
                    for (i, key) in keys.iter().enumerate() {
                        map.insert(key.clone(), i);
                    }
                    black_box(map)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("RadixTrie/prefixed", size),
            &prefixed[..*size],
            |b, keys| {
                b.iter(|| {
                    let mut trie = RadixTrie::new();
                    for (i, key) in keys.iter().enumerate() {
                        trie.add(key, i).unwrap();
                    }
                    black_box(trie)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("RadixTrie/sparse", size),
            &sparse[..*size],
            |b, keys| {
                b.iter(|| {
                    let mut trie = RadixTrie::new();
                    for (i, key) in keys.iter().enumerate() {
                        trie.add(key, i).unwrap();
                    }
                    black_box(trie)
                })
            },
        );
    }

    group.finish();
}

fn lookup_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Lookup Operations");

    let keys = shared_prefix_keys(1000);

    let mut hash_map = HashMap::new();
    let mut btree_map = BTreeMap::new();
    let mut trie = RadixTrie::new();
    for (i, key) in keys.iter().enumerate() {
        hash_map.insert(key.clone(), i);
        btree_map.insert(key.clone(), i);
        trie.add(key, i).unwrap();
    }

    group.bench_function("HashMap/hit", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(hash_map.get(key));
            }
        })
    });

    group.bench_function("BTreeMap/hit", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(btree_map.get(key));
            }
        })
    });

    group.bench_function("RadixTrie/hit", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(trie.get(key));
            }
        })
    });

    group.bench_function("RadixTrie/miss", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(trie.get(&format!("{key}x")));
            }
        })
    });

    group.finish();
}

fn remove_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Remove Operations");

    let keys = shared_prefix_keys(1000);

    group.bench_function("RadixTrie/remove_all", |b| {
        b.iter_batched(
            || {
                let mut trie = RadixTrie::new();
                for (i, key) in keys.iter().enumerate() {
                    trie.add(key, i).unwrap();
                }
                trie
            },
            |mut trie| {
                for key in &keys {
                    trie.delete(key).unwrap();
                }
                black_box(trie)
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn fuzzy_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fuzzy Search");

    let keys = shared_prefix_keys(1000);
    let mut trie = RadixTrie::new();
    for (i, key) in keys.iter().enumerate() {
        trie.add(key, i).unwrap();
    }

    group.bench_function("RadixTrie/fuzzy_narrow", |b| {
        b.iter(|| black_box(trie.fuzzy_get("shared_prefix_key_000").count()))
    });

    group.bench_function("RadixTrie/fuzzy_broad", |b| {
        b.iter(|| black_box(trie.fuzzy_get("SHARED").count()))
    });

    group.finish();
}

criterion_group!(
    benches,
    insert_benchmarks,
    lookup_benchmarks,
    remove_benchmarks,
    fuzzy_benchmarks
);
criterion_main!(benches);
