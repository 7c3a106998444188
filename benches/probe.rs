use std::collections::BTreeSet;

use criterion::*;
use rand::prelude::*;
use skipprobe::{quickselect, quicksort, SkipSet, Treap};

const SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// Even keys only, so `key + 1` is always a guaranteed miss.
fn shuffled_keys(n: usize, rng: &mut impl Rng) -> Vec<u64> {
  let mut keys: Vec<u64> = (0..n as u64).map(|i| i * 2).collect();
  keys.shuffle(rng);
  keys
}

fn bench_build(c: &mut Criterion) {
  let mut rng = thread_rng();
  let mut group = c.benchmark_group("build");
  for &size in SIZES {
    let keys = shuffled_keys(size, &mut rng);

    group.bench_function(BenchmarkId::new("skipset", size), |b| {
      b.iter_batched(
        || keys.clone(),
        |keys| {
          let mut set = SkipSet::new();
          for k in keys {
            set.insert(k);
          }
          set
        },
        BatchSize::LargeInput,
      )
    });
    group.bench_function(BenchmarkId::new("treap", size), |b| {
      b.iter_batched(
        || keys.clone(),
        |keys| {
          let mut tree = Treap::new();
          for k in keys {
            tree.insert(k);
          }
          tree
        },
        BatchSize::LargeInput,
      )
    });
    group.bench_function(BenchmarkId::new("btreeset", size), |b| {
      b.iter_batched(
        || keys.clone(),
        |keys| {
          let mut set = BTreeSet::new();
          for k in keys {
            set.insert(k);
          }
          set
        },
        BatchSize::LargeInput,
      )
    });
  }
  group.finish();
}

fn bench_probe_hit(c: &mut Criterion) {
  let mut rng = thread_rng();
  let mut group = c.benchmark_group("probe_hit");
  for &size in SIZES {
    let keys = shuffled_keys(size, &mut rng);

    let mut skip = SkipSet::new();
    let mut treap = Treap::new();
    let mut btree = BTreeSet::new();
    for &k in &keys {
      skip.insert(k);
      treap.insert(k);
      btree.insert(k);
    }

    group.bench_function(BenchmarkId::new("skipset", size), |b| {
      b.iter_batched(
        || *keys.choose(&mut thread_rng()).unwrap(),
        |k| skip.probe(&k),
        BatchSize::SmallInput,
      )
    });
    group.bench_function(BenchmarkId::new("treap", size), |b| {
      b.iter_batched(
        || *keys.choose(&mut thread_rng()).unwrap(),
        |k| treap.probe(&k),
        BatchSize::SmallInput,
      )
    });
    group.bench_function(BenchmarkId::new("btreeset", size), |b| {
      b.iter_batched(
        || *keys.choose(&mut thread_rng()).unwrap(),
        |k| btree.contains(&k),
        BatchSize::SmallInput,
      )
    });
  }
  group.finish();
}

fn bench_probe_miss(c: &mut Criterion) {
  let mut rng = thread_rng();
  let mut group = c.benchmark_group("probe_miss");
  for &size in SIZES {
    let keys = shuffled_keys(size, &mut rng);

    let mut skip = SkipSet::new();
    let mut treap = Treap::new();
    for &k in &keys {
      skip.insert(k);
      treap.insert(k);
    }

    group.bench_function(BenchmarkId::new("skipset", size), |b| {
      b.iter_batched(
        || *keys.choose(&mut thread_rng()).unwrap() + 1,
        |k| skip.probe(&k),
        BatchSize::SmallInput,
      )
    });
    group.bench_function(BenchmarkId::new("treap", size), |b| {
      b.iter_batched(
        || *keys.choose(&mut thread_rng()).unwrap() + 1,
        |k| treap.probe(&k),
        BatchSize::SmallInput,
      )
    });
  }
  group.finish();
}

fn bench_selection(c: &mut Criterion) {
  let size = 100_000;
  let mut arr: Vec<u64> = (0..size as u64).collect();
  arr.shuffle(&mut thread_rng());

  let mut group = c.benchmark_group("selection");
  group.bench_function(BenchmarkId::new("quickselect", size), |b| {
    b.iter_batched_ref(
      || arr.clone(),
      |copy| {
        let k = copy.len() / 2;
        quickselect(copy, k, &mut thread_rng()).map(|v| *v)
      },
      BatchSize::LargeInput,
    )
  });
  group.bench_function(BenchmarkId::new("quicksort", size), |b| {
    b.iter_batched_ref(|| arr.clone(), |copy| quicksort(copy), BatchSize::LargeInput)
  });
  group.finish();
}

criterion_group!(
  benches,
  bench_build,
  bench_probe_hit,
  bench_probe_miss,
  bench_selection,
);
criterion_main!(benches);
