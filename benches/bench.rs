use criterion::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use skipset::{Options, SkipSet};
use std::collections::BTreeSet;

const N: u64 = 10_000;

fn shuffled(seed: u64) -> Vec<u64> {
  let mut keys: Vec<u64> = (0..N).collect();
  keys.shuffle(&mut StdRng::seed_from_u64(seed));
  keys
}

fn empty(max_levels: usize) -> SkipSet<u64, StdRng> {
  SkipSet::with_options_and_rng(
    Options::new().with_max_levels(max_levels),
    StdRng::seed_from_u64(1),
  )
  .unwrap()
}

fn filled(max_levels: usize) -> SkipSet<u64, StdRng> {
  let mut set = empty(max_levels);
  set.extend(shuffled(0));
  set
}

fn bench_insert(c: &mut Criterion) {
  let keys = shuffled(0);
  let mut group = c.benchmark_group("insert");
  for max_levels in [4, 16] {
    group.bench_with_input(
      BenchmarkId::new("skipset", max_levels),
      &max_levels,
      |b, &max_levels| {
        b.iter_batched(
          || empty(max_levels),
          |mut set| {
            for &k in &keys {
              set.insert(k);
            }
            set
          },
          BatchSize::LargeInput,
        )
      },
    );
  }
  group.bench_function("btree_set", |b| {
    b.iter(|| keys.iter().copied().collect::<BTreeSet<_>>())
  });
  group.finish();
}

fn bench_contains(c: &mut Criterion) {
  let probes = shuffled(2);
  let mut group = c.benchmark_group("contains");
  for max_levels in [4, 16] {
    let set = filled(max_levels);
    group.bench_with_input(BenchmarkId::new("skipset", max_levels), &set, |b, set| {
      b.iter(|| probes.iter().filter(|k| set.contains(*k)).count())
    });
  }
  let model: BTreeSet<u64> = shuffled(0).into_iter().collect();
  group.bench_function("btree_set", |b| {
    b.iter(|| probes.iter().filter(|k| model.contains(*k)).count())
  });
  group.finish();
}

fn bench_remove(c: &mut Criterion) {
  let probes = shuffled(3);
  c.bench_function("remove/skipset/16", |b| {
    b.iter_batched(
      || filled(16),
      |mut set| {
        for k in &probes {
          set.remove(k);
        }
        set
      },
      BatchSize::LargeInput,
    )
  });
}

criterion_group!(benches, bench_insert, bench_contains, bench_remove);
criterion_main!(benches);
