use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fixed_tables::hash::{HashedChainTable, OpenAddressingTable, OrderedChainTable, prelude::*};
use rand::Rng;
use rand::seq::SliceRandom;
use std::hint::black_box;

const CAPACITY: usize = 4096;
const SAMPLE_SIZE: usize = 3_000;

// Enum to define the workload mix
enum Workload {
    WriteHeavy, // 80% writes, 20% reads
    ReadHeavy,  // 20% writes, 80% reads
    Mixed,      // 50% writes, 50% reads
}

impl Workload {
    fn write_ratio(&self) -> u32 {
        match self {
            Workload::WriteHeavy => 80,
            Workload::ReadHeavy => 20,
            Workload::Mixed => 50,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Workload::WriteHeavy => "write_heavy",
            Workload::ReadHeavy => "read_heavy",
            Workload::Mixed => "mixed",
        }
    }
}

fn table_benchmark<H, F>(c: &mut Criterion, table_name: &str, workload: Workload, make: F)
where
    H: Table<u64>,
    F: Fn() -> H,
{
    let mut group = c.benchmark_group(table_name);
    let write_ratio = workload.write_ratio();

    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    group.bench_function(BenchmarkId::new(workload.name(), SAMPLE_SIZE), |b| {
        b.iter_with_setup(
            || {
                let mut table = make();
                for i in 0..SAMPLE_SIZE as u64 / 2 {
                    table.insert(i);
                }
                let mut keys: Vec<u64> = (0..SAMPLE_SIZE as u64).collect();
                keys.shuffle(&mut rand::rng());
                (table, keys)
            },
            |(mut table, keys)| {
                let mut rng = rand::rng();
                for (i, key) in keys.iter().enumerate() {
                    if rng.random_range(0..100) < write_ratio {
                        if i % 2 == 0 {
                            table.insert(*key);
                        } else {
                            table.remove(key);
                        }
                    } else {
                        black_box(table.search(key));
                    }
                }
            },
        );
    });

    group.finish();
}

fn open_addressing(c: &mut Criterion) {
    for workload in [Workload::Mixed, Workload::ReadHeavy, Workload::WriteHeavy] {
        table_benchmark(c, "OpenAddressingTable", workload, || {
            OpenAddressingTable::<u64, CAPACITY>::new()
        });
    }
}

fn ordered_chain(c: &mut Criterion) {
    for workload in [Workload::Mixed, Workload::ReadHeavy, Workload::WriteHeavy] {
        table_benchmark(c, "OrderedChainTable", workload, || {
            OrderedChainTable::<u64, CAPACITY>::new()
        });
    }
}

fn hashed_chain(c: &mut Criterion) {
    for workload in [Workload::Mixed, Workload::ReadHeavy, Workload::WriteHeavy] {
        table_benchmark(c, "HashedChainTable", workload, || {
            HashedChainTable::<u64, CAPACITY>::new()
        });
    }
}

criterion_group!(benches, open_addressing, ordered_chain, hashed_chain);
criterion_main!(benches);
