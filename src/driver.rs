//! The trial driver.
//!
//! Builds a probe structure at a range of sizes, loads it with random keys
//! and measures how many nodes an average search visits, along with the
//! wall-clock cost of the insert and probe phases. A second sweep times
//! [`quickselect`] against [`quicksort`] on shuffled arrays.

use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::{info, instrument};

use crate::{quickselect, quicksort, ProbeSet};

/// Configuration for a probe-trial sweep.
#[derive(Debug, Clone)]
pub struct TrialConfig {
  /// Structure sizes to build and measure, one trial per entry.
  pub sizes: Vec<usize>,
  /// Probes per trial, half against keys that exist and half against keys
  /// past the largest inserted key.
  pub searches: usize,
  /// Seed for key generation and shuffling. `None` seeds from entropy.
  pub seed: Option<u64>,
}

impl Default for TrialConfig {
  fn default() -> Self {
    Self {
      sizes: vec![5_000_000, 10_000_000, 20_000_000],
      searches: 1_000_000,
      seed: None,
    }
  }
}

/// What one probe trial measured.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
  /// Number of keys inserted.
  pub size: usize,
  /// Mean nodes visited per probe.
  pub avg_nodes_visited: f64,
  /// Wall-clock time of the insert phase.
  pub insert_time: Duration,
  /// Wall-clock time of the probe phase.
  pub search_time: Duration,
}

/// The level ceiling the probe binaries hand a structure of `n` keys:
/// `floor(sqrt(n))`, clamped to at least 1.
#[inline]
pub fn sqrt_ceiling(n: usize) -> usize {
  ((n as f64).sqrt() as usize).max(1)
}

/// Runs one probe trial per configured size against the structure `make`
/// builds for that size, returning one [`Measurement`] per size, in order.
///
/// Each trial inserts `size` distinct keys sampled uniformly from
/// `0..size * 10`, then probes `searches` keys in shuffled order: half
/// sampled from the inserted keys, half strictly greater than every
/// inserted key. The average divides by the number of probes actually
/// performed.
///
/// With `seed` set, key generation repeats exactly; the structure's own
/// randomness is `make`'s business.
pub fn run_probe_trials<S, F>(config: &TrialConfig, mut make: F) -> Vec<Measurement>
where
  S: ProbeSet<u64>,
  F: FnMut(usize) -> S,
{
  let mut rng = match config.seed {
    Some(seed) => SmallRng::seed_from_u64(seed),
    None => SmallRng::from_entropy(),
  };

  let mut out = Vec::with_capacity(config.sizes.len());
  for &size in &config.sizes {
    out.push(run_probe_trial(size, config.searches, &mut rng, make(size)));
  }
  out
}

#[instrument(level = "info", skip(rng, set))]
fn run_probe_trial<S: ProbeSet<u64>>(
  size: usize,
  searches: usize,
  rng: &mut SmallRng,
  mut set: S,
) -> Measurement {
  info!(size, "generating random keys");
  let keys: Vec<u64> = rand::seq::index::sample(rng, size * 10, size)
    .into_iter()
    .map(|k| k as u64)
    .collect();

  info!(size, "inserting keys");
  let start = Instant::now();
  for &key in &keys {
    set.insert(key);
  }
  let insert_time = start.elapsed();
  info!(?insert_time, "insertion finished");

  let half = searches / 2;
  let max_key = keys.iter().copied().max().unwrap_or(0);
  let mut search_keys: Vec<u64> = keys.choose_multiple(rng, half).copied().collect();
  search_keys.extend((1..=half as u64).map(|i| max_key + i));
  search_keys.shuffle(rng);

  info!(probes = search_keys.len(), "probing");
  let mut total_visited = 0usize;
  let start = Instant::now();
  for key in &search_keys {
    total_visited += set.probe(key).visited;
  }
  let search_time = start.elapsed();

  let avg_nodes_visited = total_visited as f64 / search_keys.len().max(1) as f64;
  info!(?search_time, avg_nodes_visited, "trial finished");

  Measurement {
    size,
    avg_nodes_visited,
    insert_time,
    search_time,
  }
}

/// Configuration for a selection-versus-sort sweep.
#[derive(Debug, Clone)]
pub struct SelectionConfig {
  /// Array sizes to measure.
  pub sizes: Vec<usize>,
  /// Selection repetitions per size; the reported time is their mean.
  pub trials: usize,
  /// Seed for shuffling and rank choice. `None` seeds from entropy.
  pub seed: Option<u64>,
}

impl Default for SelectionConfig {
  fn default() -> Self {
    Self {
      sizes: vec![10_000_000, 20_000_000, 40_000_000, 80_000_000, 160_000_000],
      trials: 100,
      seed: None,
    }
  }
}

/// What one selection trial measured.
#[derive(Debug, Clone, Copy)]
pub struct SelectionMeasurement {
  /// Array length.
  pub size: usize,
  /// Mean wall-clock time of one [`quickselect`] over `trials` random
  /// ranks.
  pub select_time: Duration,
  /// Wall-clock time of one [`quicksort`] of the same array.
  pub sort_time: Duration,
}

/// Times [`quickselect`] against [`quicksort`] on a shuffled array of each
/// configured size.
///
/// Every selection runs on a fresh copy of the shuffled array with a rank
/// drawn uniformly at random. The sort runs once per size, also on a fresh
/// copy.
pub fn run_selection_trials(config: &SelectionConfig) -> Vec<SelectionMeasurement> {
  let mut rng = match config.seed {
    Some(seed) => SmallRng::seed_from_u64(seed),
    None => SmallRng::from_entropy(),
  };

  let mut out = Vec::with_capacity(config.sizes.len());
  for &size in &config.sizes {
    out.push(run_selection_trial(size, config.trials, &mut rng));
  }
  out
}

#[instrument(level = "info", skip(rng))]
fn run_selection_trial(size: usize, trials: usize, rng: &mut SmallRng) -> SelectionMeasurement {
  if size == 0 || trials == 0 {
    return SelectionMeasurement {
      size,
      select_time: Duration::ZERO,
      sort_time: Duration::ZERO,
    };
  }

  let mut arr: Vec<u64> = (0..size as u64).collect();
  arr.shuffle(rng);

  let mut sink = 0u64;
  let mut select_total = Duration::ZERO;
  for _ in 0..trials {
    let k = rng.gen_range(0..size);
    let mut copy = arr.clone();

    let start = Instant::now();
    if let Ok(&v) = quickselect(&mut copy, k, rng) {
      sink ^= v;
    }
    select_total += start.elapsed();
  }
  // Keep the selected values alive so the timed calls cannot be elided.
  black_box(sink);
  let select_time = select_total / trials as u32;

  let mut copy = arr.clone();
  let start = Instant::now();
  quicksort(&mut copy);
  let sort_time = start.elapsed();
  black_box(copy);

  info!(?select_time, ?sort_time, "selection trial finished");
  SelectionMeasurement {
    size,
    select_time,
    sort_time,
  }
}
