use crate::Error;

/// The default ceiling on node levels.
pub const DEFAULT_MAX_LEVEL: usize = 32;

/// The default level-promotion probability.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Configuration for a [`SkipSet`](crate::SkipSet).
///
/// An `Options` value is always constructible; the invalid combinations are
/// rejected when the set (or a [`Geometric`](crate::Geometric) generator) is
/// built from it, so misconfiguration surfaces at construction time rather
/// than on first use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
  max_level: usize,
  probability: f64,
}

impl Default for Options {
  #[inline]
  fn default() -> Options {
    Options::new()
  }
}

impl Options {
  /// Creates a new set of options with the default values
  /// (`max_level = 32`, `probability = 0.5`).
  #[inline]
  pub const fn new() -> Self {
    Self {
      max_level: DEFAULT_MAX_LEVEL,
      probability: DEFAULT_PROBABILITY,
    }
  }

  /// Sets the ceiling on the level any node may reach.
  ///
  /// Levels are 0-based: a ceiling of `l` means every node participates in
  /// between 1 and `l + 1` forward chains. Must be at least 1.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipprobe::Options;
  ///
  /// let opts = Options::new().with_max_level(12);
  /// assert_eq!(opts.max_level(), 12);
  /// ```
  #[inline]
  pub const fn with_max_level(mut self, max_level: usize) -> Self {
    self.max_level = max_level;
    self
  }

  /// Sets the level-promotion probability.
  ///
  /// The expected level of a freshly inserted node follows a geometric
  /// distribution with this success probability, truncated at the ceiling.
  /// Must lie strictly between 0 and 1.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipprobe::Options;
  ///
  /// let opts = Options::new().with_probability(0.25);
  /// assert_eq!(opts.probability(), 0.25);
  /// ```
  #[inline]
  pub const fn with_probability(mut self, probability: f64) -> Self {
    self.probability = probability;
    self
  }

  /// Returns the ceiling on node levels.
  #[inline]
  pub const fn max_level(&self) -> usize {
    self.max_level
  }

  /// Returns the level-promotion probability.
  #[inline]
  pub const fn probability(&self) -> f64 {
    self.probability
  }

  /// Checks the options for validity: the ceiling must be positive and the
  /// probability must lie within the open interval `(0, 1)`.
  pub fn validate(&self) -> Result<(), Error> {
    if self.max_level == 0 {
      return Err(Error::InvalidMaxLevel);
    }

    if self.probability <= 0.0 || self.probability >= 1.0 {
      return Err(Error::InvalidProbability(self.probability));
    }

    Ok(())
  }
}
