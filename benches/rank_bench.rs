use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seqrank::bio::sequence::Record;
use seqrank::core::rank::{collect_in_range, median_abundance, rank, AbundanceRange};
use seqrank::SequenceStore;

fn build_store(records: usize) -> SequenceStore {
    let mut rng = StdRng::seed_from_u64(42);
    SequenceStore::from_records(
        (0..records)
            .map(|i| {
                let abundance: u32 = rng.gen_range(1..=1_000);
                Record::new(format!("seq{};size={};", i, abundance), vec![b'A'; 64])
            })
            .collect(),
    )
}

fn bench_rank(c: &mut Criterion) {
    let store = build_store(10_000);

    c.bench_function("filter_and_rank_10k", |b| {
        b.iter(|| {
            let mut entries = collect_in_range(black_box(&store), AbundanceRange::default());
            rank(&store, &mut entries);
            black_box(median_abundance(&entries))
        })
    });

    c.bench_function("filter_half_range_10k", |b| {
        b.iter(|| {
            let range = AbundanceRange::new(250, 750).unwrap();
            black_box(collect_in_range(black_box(&store), range).len())
        })
    });
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
