use chained_hashmap::{ChainSet, ChainTable};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

const N: usize = 10_000;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn keys(seed: u64) -> Vec<String> {
    lcg(seed).take(N).map(key).collect()
}

fn bench_insert(c: &mut Criterion) {
    let ks = keys(1);
    let mut g = c.benchmark_group("insert_10k");
    g.bench_function("chain_table", |b| {
        b.iter_batched(
            ChainTable::<u64>::new,
            |mut m| {
                for (i, k) in ks.iter().enumerate() {
                    m.insert(k.as_str(), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    g.bench_function("std_hashmap", |b| {
        b.iter_batched(
            HashMap::<String, u64>::new,
            |mut m| {
                for (i, k) in ks.iter().enumerate() {
                    m.insert(k.clone(), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    g.finish();
}

fn bench_insert_many(c: &mut Criterion) {
    let pairs: Vec<(String, u64)> = keys(3).into_iter().zip(0..).collect();
    c.bench_function("chain_table_insert_many_10k", |b| {
        b.iter_batched(
            || (ChainTable::<u64>::new(), pairs.clone()),
            |(mut m, pairs)| {
                m.insert_many(pairs);
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    let ks = keys(7);
    let mut g = c.benchmark_group("get_hit");
    let table: ChainTable<u64> = ks.iter().map(String::as_str).zip(0..).collect();
    let std_map: HashMap<String, u64> = ks.iter().cloned().zip(0..).collect();

    let mut it = ks.iter().cycle();
    g.bench_function("chain_table", |b| {
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(table.get(k));
        })
    });
    let mut it = ks.iter().cycle();
    g.bench_function("std_hashmap", |b| {
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(std_map.get(k));
        })
    });
    g.finish();
}

fn bench_get_miss(c: &mut Criterion) {
    let table: ChainTable<u64> = keys(11).into_iter().zip(0..).collect();
    let mut miss = lcg(0xdead_beef);
    c.bench_function("chain_table_get_miss", |b| {
        b.iter(|| {
            // generate keys unlikely in map
            let k = key(miss.next().unwrap());
            black_box(table.get(&k));
        })
    });
}

fn bench_delete(c: &mut Criterion) {
    let ks = keys(13);
    let mut g = c.benchmark_group("delete_10k");
    g.bench_function("chain_table", |b| {
        b.iter_batched(
            || ks.iter().map(String::as_str).zip(0u64..).collect::<ChainTable<u64>>(),
            |mut m| {
                for k in &ks {
                    m.delete(k);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    g.bench_function("chain_table_delete_many", |b| {
        b.iter_batched(
            || ks.iter().map(String::as_str).zip(0u64..).collect::<ChainTable<u64>>(),
            |mut m| {
                m.delete_many(&ks);
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    g.bench_function("std_hashmap", |b| {
        b.iter_batched(
            || ks.iter().cloned().zip(0u64..).collect::<HashMap<String, u64>>(),
            |mut m| {
                for k in &ks {
                    m.remove(k);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    g.finish();
}

fn bench_set(c: &mut Criterion) {
    let ks = keys(17);
    let mut g = c.benchmark_group("set_add_contains_10k");
    g.bench_function("chain_set", |b| {
        b.iter(|| {
            let mut s = ChainSet::new();
            for k in &ks {
                s.add(k.as_str());
            }
            black_box(ks.iter().filter(|k| s.contains(k)).count())
        })
    });
    g.bench_function("std_hashset", |b| {
        b.iter(|| {
            let mut s = HashSet::new();
            for k in &ks {
                s.insert(k.as_str());
            }
            black_box(ks.iter().filter(|k| s.contains(k.as_str())).count())
        })
    });
    g.finish();
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_insert_many, bench_get_hit, bench_get_miss, bench_delete, bench_set
}
criterion_main!(benches);
