/// Error type for the skipprobe crate.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
  /// Indicates that a structure was configured with a level ceiling of zero.
  /// Level 0 must always exist to hold the full sorted chain, so the ceiling
  /// on node levels has to be at least 1.
  #[error("invalid max level 0, the level ceiling must be positive")]
  InvalidMaxLevel,

  /// Indicates that the level-promotion probability lies outside the open
  /// interval `(0, 1)`. A probability of 0 would pin every node to level 0,
  /// a probability of 1 would promote without bound.
  #[error("invalid probability {0}, the level-promotion probability must be within (0, 1)")]
  InvalidProbability(f64),

  /// Indicates that a selection rank lies at or past the slice length.
  /// Ranks are 0-based, so a slice of `len` elements answers ranks
  /// `0..len`.
  #[error("invalid rank {rank}, the rank must be below the slice length {len}")]
  InvalidRank {
    /// The 0-based rank that was requested.
    rank: usize,
    /// The length of the slice it was requested from.
    len: usize,
  },
}
