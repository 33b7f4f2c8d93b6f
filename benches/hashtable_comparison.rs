use core::hash::BuildHasher;
use core::hash::Hash;
use core::hint::black_box;
use std::collections::HashMap as StdHashMap;

use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::HashMap as HashbrownHashMap;
use perturb_hash::HashMap as PerturbHashMap;
use perturb_hash::hasher::BuildHasherFn;
use rand::Rng;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Zipf;
use siphasher::sip::SipHasher;

#[derive(Clone, Copy, Default)]
struct SipBuilder;

impl BuildHasher for SipBuilder {
    type Hasher = SipHasher;

    fn build_hasher(&self) -> Self::Hasher {
        SipHasher::new()
    }
}

trait BenchKey: Clone + Hash + Eq {
    fn new(key: u64) -> Self;
}

impl BenchKey for u64 {
    fn new(key: u64) -> Self {
        black_box(key)
    }
}

impl BenchKey for String {
    fn new(key: u64) -> Self {
        black_box(format!("key_{key:016X}"))
    }
}

type Perturb<K> = PerturbHashMap<K, u64, BuildHasherFn<SipBuilder>>;
type Hashbrown<K> = HashbrownHashMap<K, u64, SipBuilder>;
type Std<K> = StdHashMap<K, u64, SipBuilder>;

fn new_perturb<K: BenchKey>() -> Perturb<K> {
    PerturbHashMap::with_hasher(BuildHasherFn(SipBuilder))
}

fn new_hashbrown<K: BenchKey>() -> Hashbrown<K> {
    HashbrownHashMap::with_hasher(SipBuilder)
}

fn new_std<K: BenchKey>() -> Std<K> {
    StdHashMap::with_hasher(SipBuilder)
}

const SIZES: &[usize] = &[
    (1 << 10),
    (1 << 12),
    (1 << 14),
    (1 << 16),
    (1 << 18),
];

fn random_keys<K: BenchKey>(count: usize) -> Vec<K> {
    let mut rng = OsRng;
    (0..count)
        .map(|_| K::new(rng.try_next_u64().unwrap()))
        .collect()
}

fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut items = items.to_vec();
    items.shuffle(&mut SmallRng::from_os_rng());
    items
}

fn bench_insert_random<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "insert_random_{}",
        core::any::type_name::<K>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_function(format!("perturb_hash/{size}"), |b| {
            b.iter_batched(
                || shuffled(&keys),
                |keys| {
                    let mut map = new_perturb::<K>();
                    for (i, key) in keys.into_iter().enumerate() {
                        black_box(map.set(key, i as u64));
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || shuffled(&keys),
                |keys| {
                    let mut map = new_hashbrown::<K>();
                    for (i, key) in keys.into_iter().enumerate() {
                        black_box(map.insert(key, i as u64));
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("std/{size}"), |b| {
            b.iter_batched(
                || shuffled(&keys),
                |keys| {
                    let mut map = new_std::<K>();
                    for (i, key) in keys.into_iter().enumerate() {
                        black_box(map.insert(key, i as u64));
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_find_hit_miss<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "find_hit_miss_{}",
        core::any::type_name::<K>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let present = random_keys::<K>(*size);
        let absent = random_keys::<K>(*size);
        let mut lookups = present.clone();
        lookups.extend(absent);
        let lookups = shuffled(&lookups);

        let mut perturb_map = new_perturb::<K>();
        let mut hashbrown_map = new_hashbrown::<K>();
        let mut std_map = new_std::<K>();
        for (i, key) in present.iter().enumerate() {
            perturb_map.set(key.clone(), i as u64);
            hashbrown_map.insert(key.clone(), i as u64);
            std_map.insert(key.clone(), i as u64);
        }

        group.throughput(Throughput::Elements(lookups.len() as u64));

        group.bench_function(format!("perturb_hash/{size}"), |b| {
            b.iter(|| {
                for key in &lookups {
                    black_box(perturb_map.get(key));
                }
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for key in &lookups {
                    black_box(hashbrown_map.get(key));
                }
            })
        });

        group.bench_function(format!("std/{size}"), |b| {
            b.iter(|| {
                for key in &lookups {
                    black_box(std_map.get(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_remove<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("remove_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(*size);
        let mut perturb_map = new_perturb::<K>();
        let mut hashbrown_map = new_hashbrown::<K>();
        let mut std_map = new_std::<K>();
        for (i, key) in keys.iter().enumerate() {
            perturb_map.set(key.clone(), i as u64);
            hashbrown_map.insert(key.clone(), i as u64);
            std_map.insert(key.clone(), i as u64);
        }

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_function(format!("perturb_hash/{size}"), |b| {
            b.iter_batched(
                || (perturb_map.clone(), shuffled(&keys)),
                |(mut map, keys)| {
                    for key in &keys {
                        black_box(map.unset(key));
                    }
                    black_box(map)
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || (hashbrown_map.clone(), shuffled(&keys)),
                |(mut map, keys)| {
                    for key in &keys {
                        black_box(map.remove(key));
                    }
                    black_box(map)
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("std/{size}"), |b| {
            b.iter_batched(
                || (std_map.clone(), shuffled(&keys)),
                |(mut map, keys)| {
                    for key in &keys {
                        black_box(map.remove(key));
                    }
                    black_box(map)
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

/// Each key is toggled twice, so the table fills with tombstones.
fn bench_churn<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("churn_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let toggles = random_keys::<K>(*size)
            .into_iter()
            .flat_map(|key| [key.clone(), key])
            .collect::<Vec<K>>();

        group.throughput(Throughput::Elements(toggles.len() as u64));

        group.bench_function(format!("perturb_hash/{size}"), |b| {
            b.iter_batched(
                || shuffled(&toggles),
                |toggles| {
                    let mut map = new_perturb::<K>();
                    for key in toggles {
                        if map.unset(&key).is_none() {
                            map.set(key, 0);
                        }
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || shuffled(&toggles),
                |toggles| {
                    let mut map = new_hashbrown::<K>();
                    for key in toggles {
                        if map.remove(&key).is_none() {
                            map.insert(key, 0);
                        }
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("std/{size}"), |b| {
            b.iter_batched(
                || shuffled(&toggles),
                |toggles| {
                    let mut map = new_std::<K>();
                    for key in toggles {
                        if map.remove(&key).is_none() {
                            map.insert(key, 0);
                        }
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

#[derive(Clone, Copy)]
enum Operation {
    Insert(u64),
    Remove(u64),
    Find(u64),
}

fn zipf_operations(size: usize, exponent: f64) -> Vec<Operation> {
    const KEY_SPACE_MULTIPLIER: f64 = 2.0;

    let mut rng = SmallRng::from_os_rng();
    let op_distr = Zipf::new(3.0, exponent).unwrap();
    let key_distr = Zipf::new(size as f64 * KEY_SPACE_MULTIPLIER, 1.0).unwrap();

    (0..size * 3)
        .map(|_| {
            let op_choice: f64 = rng.sample(op_distr);
            let key = rng.sample(key_distr) as u64;
            if op_choice <= 1.0 {
                Operation::Find(key)
            } else if op_choice <= 2.0 {
                Operation::Insert(key)
            } else {
                Operation::Remove(key)
            }
        })
        .collect()
}

fn bench_mixed_probabilistic_zipf<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    for exponent in [1.0, 1.3] {
        let mut group = c.benchmark_group(format!(
            "mixed_probabilistic_zipf_{:.01}_{}",
            exponent,
            core::any::type_name::<K>()
        ));
        group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

        for size in SIZES[..=MAX_SIZE].iter() {
            let operations = zipf_operations(*size, exponent);
            group.throughput(Throughput::Elements(operations.len() as u64));

            group.bench_function(format!("perturb_hash/{size}"), |b| {
                b.iter(|| {
                    let mut map = new_perturb::<K>();
                    for operation in &operations {
                        match *operation {
                            Operation::Insert(key) => {
                                black_box(map.set(K::new(key), key));
                            }
                            Operation::Remove(key) => {
                                black_box(map.unset(&K::new(key)));
                            }
                            Operation::Find(key) => {
                                black_box(map.get(&K::new(key)));
                            }
                        }
                    }
                    black_box(map)
                })
            });

            group.bench_function(format!("hashbrown/{size}"), |b| {
                b.iter(|| {
                    let mut map = new_hashbrown::<K>();
                    for operation in &operations {
                        match *operation {
                            Operation::Insert(key) => {
                                black_box(map.insert(K::new(key), key));
                            }
                            Operation::Remove(key) => {
                                black_box(map.remove(&K::new(key)));
                            }
                            Operation::Find(key) => {
                                black_box(map.get(&K::new(key)));
                            }
                        }
                    }
                    black_box(map)
                })
            });

            group.bench_function(format!("std/{size}"), |b| {
                b.iter(|| {
                    let mut map = new_std::<K>();
                    for operation in &operations {
                        match *operation {
                            Operation::Insert(key) => {
                                black_box(map.insert(K::new(key), key));
                            }
                            Operation::Remove(key) => {
                                black_box(map.remove(&K::new(key)));
                            }
                            Operation::Find(key) => {
                                black_box(map.get(&K::new(key)));
                            }
                        }
                    }
                    black_box(map)
                })
            });
        }

        group.finish();
    }
}

criterion_group!(
    benches,
    bench_insert_random::<u64, 4>,
    bench_insert_random::<String, 3>,
    bench_find_hit_miss::<u64, 4>,
    bench_find_hit_miss::<String, 3>,
    bench_remove::<u64, 4>,
    bench_remove::<String, 3>,
    bench_churn::<u64, 4>,
    bench_churn::<String, 3>,
    bench_mixed_probabilistic_zipf::<u64, 4>,
    bench_mixed_probabilistic_zipf::<String, 3>,
);

criterion_main!(benches);
