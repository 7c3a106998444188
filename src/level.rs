//! Level-generation policy.
//!
//! A skiplist spreads its nodes over levels probabilistically: level 0 holds
//! every node and each level above holds a random subset of the level below.
//! The policy deciding how tall a freshly inserted node grows is factored out
//! behind [`LevelGenerator`] so that benchmarks can seed it and tests can
//! script it; [`Geometric`] is the default policy.

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{Error, Options};

/// Decides, for a newly inserted key, how many levels its node participates
/// in.
///
/// Implementations draw from `0..=max_level` inclusive; the structure sizes
/// its header towers from [`max_level`](LevelGenerator::max_level), so the
/// draw must never exceed it.
pub trait LevelGenerator {
  /// The ceiling on levels this generator will ever draw (inclusive).
  fn max_level(&self) -> usize;

  /// Draws the level for one new node, in `0..=self.max_level()`.
  fn random_level(&mut self) -> usize;
}

/// A level generator producing geometrically distributed levels.
///
/// Repeatedly draws a uniform value in `[0, 1)`; while the draw is below the
/// promotion probability `p` and the ceiling has not been reached, the level
/// grows by one. P(level = k) is `p^k * (1 - p)` for `k` below the ceiling,
/// with the truncated tail mass landing on the ceiling itself. One uniform
/// draw is consumed per loop test, so a seeded generator replays the exact
/// same level sequence.
#[derive(Debug, Clone)]
pub struct Geometric {
  max_level: usize,
  probability: f64,
  // Fast non-crypto generator; level draws are on the insert hot path.
  rng: SmallRng,
}

impl Default for Geometric {
  /// An entropy-seeded generator with the default policy
  /// (`max_level = 32`, `p = 0.5`).
  #[inline]
  fn default() -> Self {
    Self {
      max_level: crate::DEFAULT_MAX_LEVEL,
      probability: crate::DEFAULT_PROBABILITY,
      rng: SmallRng::from_entropy(),
    }
  }
}

impl Geometric {
  /// Creates an entropy-seeded generator.
  ///
  /// Fails with a configuration error when `max_level` is zero or
  /// `probability` lies outside `(0, 1)`.
  pub fn new(max_level: usize, probability: f64) -> Result<Self, Error> {
    Self::from_options(
      Options::new()
        .with_max_level(max_level)
        .with_probability(probability),
    )
  }

  /// Like [`Geometric::new`], but seeded, so that two generators built from
  /// the same seed draw identical level sequences.
  pub fn with_seed(max_level: usize, probability: f64, seed: u64) -> Result<Self, Error> {
    Self::new(max_level, probability).map(|g| Self {
      rng: SmallRng::seed_from_u64(seed),
      ..g
    })
  }

  /// Creates an entropy-seeded generator from an [`Options`] value,
  /// validating it.
  pub fn from_options(opts: Options) -> Result<Self, Error> {
    opts.validate()?;
    Ok(Self {
      max_level: opts.max_level(),
      probability: opts.probability(),
      rng: SmallRng::from_entropy(),
    })
  }

  /// Returns the promotion probability.
  #[inline]
  pub const fn probability(&self) -> f64 {
    self.probability
  }
}

impl LevelGenerator for Geometric {
  #[inline]
  fn max_level(&self) -> usize {
    self.max_level
  }

  fn random_level(&mut self) -> usize {
    let mut level = 0;
    while self.rng.gen::<f64>() < self.probability && level < self.max_level {
      level += 1;
    }
    level
  }
}

/// A level generator that replays a fixed script of levels.
///
/// Intended for tests and for reproducing exact tower shapes: with the
/// randomness scripted, splice positions and visit counts become exact
/// values a test can assert on.
#[derive(Debug, Clone)]
pub struct Scripted {
  max_level: usize,
  levels: std::vec::IntoIter<usize>,
}

impl Scripted {
  /// Creates a generator replaying `levels` in order.
  ///
  /// ## Panics
  ///
  /// - If any scripted level exceeds `max_level`.
  /// - Later, on the draw after the script is exhausted.
  pub fn new(max_level: usize, levels: Vec<usize>) -> Self {
    assert!(
      levels.iter().all(|&l| l <= max_level),
      "scripted level exceeds the ceiling {max_level}"
    );
    Self {
      max_level,
      levels: levels.into_iter(),
    }
  }
}

impl LevelGenerator for Scripted {
  #[inline]
  fn max_level(&self) -> usize {
    self.max_level
  }

  fn random_level(&mut self) -> usize {
    self.levels.next().expect("level script exhausted")
  }
}
