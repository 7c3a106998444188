/// The outcome of an instrumented membership lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
  /// Whether the probed key is present in the structure.
  pub found: bool,
  /// How many nodes the lookup actually touched.
  ///
  /// Always at least 1: every search charges the position it ends on, even
  /// when no node lives there (notably on an empty structure).
  pub visited: usize,
}

/// Instrumented ordered membership: the contract the probe driver measures
/// structures against.
///
/// Implemented by [`SkipSet`](crate::SkipSet) and [`Treap`](crate::Treap).
/// All methods are total; duplicate insertion is a silent no-op, not an
/// error, and lookups never fail.
pub trait ProbeSet<K> {
  /// Inserts a key, returning whether it was newly inserted. Inserting a
  /// key that is already present changes nothing and returns `false`.
  fn insert(&mut self, key: K) -> bool;

  /// Looks the key up, counting every node the traversal touches. Resets
  /// the visit counter, then leaves it holding this lookup's total.
  fn probe(&self, key: &K) -> Probe;

  /// Membership test. Same traversal and counter effects as
  /// [`probe`](ProbeSet::probe).
  fn contains(&self, key: &K) -> bool {
    self.probe(key).found
  }

  /// Reads the visit counter: the node count of the most recent lookup, or
  /// whatever [`reset_counter`](ProbeSet::reset_counter) last left there.
  fn nodes_visited(&self) -> usize;

  /// Zeroes the visit counter independently of any lookup.
  fn reset_counter(&self);

  /// Number of keys stored.
  fn len(&self) -> usize;

  /// Whether the structure holds no keys.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
