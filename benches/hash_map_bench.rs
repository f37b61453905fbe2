use chained_collections::{Array, DoublyLinkedList, HashMap};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_map::insert");
    group.throughput(Throughput::Elements(10_000));
    // Starts at the default 256 buckets and rehashes several times.
    group.bench_function("fresh_10k", |b| {
        b.iter_batched(
            HashMap::<String, u64>::new,
            |mut m| {
                for (i, x) in lcg(1).take(10_000).enumerate() {
                    m.insert(key(x), i as u64).unwrap();
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("presized_10k", |b| {
        b.iter_batched(
            || HashMap::<String, u64>::with_capacity(32_768),
            |mut m| {
                for (i, x) in lcg(1).take(10_000).enumerate() {
                    m.insert(key(x), i as u64).unwrap();
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_at_hit(c: &mut Criterion) {
    c.bench_function("hash_map::at_hit", |b| {
        let mut m = HashMap::new();
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        for (i, k) in keys.iter().cloned().enumerate() {
            m.insert(k, i as u64).unwrap();
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.at(k.as_str()).unwrap());
        })
    });
}

fn bench_at_miss(c: &mut Criterion) {
    c.bench_function("hash_map::at_miss", |b| {
        let mut m = HashMap::new();
        for (i, x) in lcg(11).take(10_000).enumerate() {
            m.insert(key(x), i as u64).unwrap();
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // generate keys unlikely in map
            let k = key(miss.next().unwrap());
            black_box(m.at(k.as_str()).is_err());
        })
    });
}

fn bench_erase(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_map::erase");
    group.throughput(Throughput::Elements(5_000));
    group.bench_function("half_of_10k", |b| {
        b.iter_batched(
            || {
                let mut m = HashMap::new();
                let keys: Vec<_> = lcg(5).take(10_000).map(key).collect();
                for (i, k) in keys.iter().cloned().enumerate() {
                    m.insert(k, i as u64).unwrap();
                }
                (m, keys)
            },
            |(mut m, keys)| {
                for k in keys.iter().step_by(2) {
                    black_box(m.erase(k.as_str()));
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_building_blocks(c: &mut Criterion) {
    c.bench_function("array::push_back_100k", |b| {
        b.iter(|| {
            let mut a = Array::new();
            for i in 0..100_000u64 {
                a.push_back(i);
            }
            black_box(a)
        })
    });
    c.bench_function("doubly_linked_list::push_pop_10k", |b| {
        b.iter(|| {
            let mut l = DoublyLinkedList::new();
            for i in 0..10_000u64 {
                l.push_back(i);
            }
            while let Ok(v) = l.pop_front() {
                black_box(v);
            }
        })
    });
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
    targets = bench_insert, bench_at_hit, bench_at_miss, bench_erase, bench_building_blocks
}
criterion_main!(benches);
