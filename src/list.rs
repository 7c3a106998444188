//! The instrumented skiplist core.

use std::cell::Cell;

use crate::{Error, Geometric, LevelGenerator, Options, Probe, ProbeSet};


/// An index into the node arena. `None` is the end of a forward chain, and,
/// when used as a traversal cursor, the header sentinel.
type Link = Option<usize>;

/// A single keyed element and its tower of forward links.
#[derive(Debug)]
struct Node<K> {
  key: K,
  /// `forward[i]` is the next node at level `i` whose key is greater than
  /// this node's key. Slots exist only for `0..=assigned_level`, and the
  /// assigned level never changes after creation.
  forward: Vec<Link>,
}

/// An ordered-key membership structure based on a probabilistic, leveled,
/// singly-linked skiplist, instrumented to report how many nodes each search
/// touches.
///
/// Nodes live in an arena owned by the set and refer to each other through
/// arena indices; no node owns another, and every node is dropped with the
/// set. Keys are unique, nodes are never removed or mutated, and the level
/// assigned to a node at insertion is final. Deletion, range queries and
/// persistence are not supported.
///
/// The per-search visit counter is read through `&self` and therefore lives
/// in a [`Cell`], which leaves the whole type `!Sync`: the compiler rejects
/// unsynchronized sharing, and callers that need an instance on several
/// threads must serialize every operation externally (e.g. behind a mutex).
///
/// ```compile_fail
/// fn shared<T: Sync>(_: &T) {}
///
/// let set = skipprobe::SkipSet::<u64>::new();
/// shared(&set);
/// ```
///
/// The level-growth policy is injectable through the `G` parameter; the
/// default [`Geometric`] draws node levels from the classic geometric
/// distribution with `max_level = 32` and `p = 0.5`.
#[derive(Debug)]
pub struct SkipSet<K, G = Geometric> {
  /// Forward links of the header sentinel, one slot per level
  /// `0..=max_level`.
  head: Vec<Link>,
  /// The node arena, in insertion order. Append-only.
  nodes: Vec<Node<K>>,
  /// Highest level index with at least one participating node. 0 when the
  /// set is empty.
  level: usize,
  generator: G,
  len: usize,
  /// Nodes touched by the most recent search.
  visited: Cell<usize>,
}

impl<K: Ord> SkipSet<K> {
  /// Creates an empty set with the default policy (`max_level = 32`,
  /// `p = 0.5`) and an entropy-seeded generator.
  #[inline]
  pub fn new() -> Self {
    Self::with_level_generator(Geometric::default())
  }

  /// Creates an empty set from `opts`, validating it.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipprobe::{Options, SkipSet};
  ///
  /// let set: SkipSet<u64> =
  ///   SkipSet::with_options(Options::new().with_max_level(12)).unwrap();
  /// assert_eq!(set.max_level(), 12);
  /// ```
  pub fn with_options(opts: Options) -> Result<Self, Error> {
    Geometric::from_options(opts).map(Self::with_level_generator)
  }
}

impl<K: Ord> Default for SkipSet<K> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<K, G: LevelGenerator> SkipSet<K, G> {
  /// Creates an empty set drawing node levels from `generator`.
  ///
  /// The header is sized from the generator's ceiling, so the generator is
  /// the single source of truth for `max_level`.
  pub fn with_level_generator(generator: G) -> Self {
    Self {
      head: vec![None; generator.max_level() + 1],
      nodes: Vec::new(),
      level: 0,
      generator,
      len: 0,
      visited: Cell::new(0),
    }
  }

  /// Returns the ceiling on node levels.
  #[inline]
  pub fn max_level(&self) -> usize {
    self.generator.max_level()
  }
}

impl<K, G> SkipSet<K, G> {
  /// Returns the number of keys in the set.
  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` if the set holds no keys.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the current highest active level index (0-based). An empty set
  /// reports 0; the value never exceeds [`max_level`](SkipSet::max_level).
  #[inline]
  pub fn level(&self) -> usize {
    self.level
  }

  /// Reads the visit counter: the nodes touched by the most recent search,
  /// or whatever [`reset_counter`](SkipSet::reset_counter) last left there.
  #[inline]
  pub fn nodes_visited(&self) -> usize {
    self.visited.get()
  }

  /// Zeroes the visit counter. Every search does this itself; the method
  /// exists so a caller can also zero it between batches.
  #[inline]
  pub fn reset_counter(&self) {
    self.visited.set(0);
  }

  /// Returns an iterator over the keys in ascending order (the level-0
  /// chain).
  #[inline]
  pub fn iter(&self) -> Iter<'_, K> {
    Iter {
      nodes: &self.nodes,
      next: self.head[0],
    }
  }

  /// Forward link at `level` of the position `at` (`None` = the header).
  #[inline]
  fn forward(&self, at: Link, level: usize) -> Link {
    match at {
      None => self.head[level],
      Some(i) => self.nodes[i].forward[level],
    }
  }

  /// Redirects the forward link at `level` of the position `at`.
  #[inline]
  fn set_forward(&mut self, at: Link, level: usize, to: Link) {
    match at {
      None => self.head[level] = to,
      Some(i) => self.nodes[i].forward[level] = to,
    }
  }
}

impl<K: Ord, G: LevelGenerator> SkipSet<K, G> {
  /// Inserts a key, returning whether it was newly inserted.
  ///
  /// Inserting a key that is already present is a silent no-op: the existing
  /// node is left untouched, no level is drawn, and `false` is returned.
  /// The visit counter is not involved in insertion.
  pub fn insert(&mut self, key: K) -> bool {
    let mut update: Vec<Link> = vec![None; self.level + 1];
    let mut cur: Link = None;

    // Rightmost position per level from which advancing would overshoot;
    // these are the nodes to rewire if a new node lands here.
    for lvl in (0..=self.level).rev() {
      while let Some(next) = self.forward(cur, lvl) {
        if self.nodes[next].key < key {
          cur = Some(next);
        } else {
          break;
        }
      }
      update[lvl] = cur;
    }

    // One step past the level-0 update position is the only place an equal
    // key can live.
    if let Some(next) = self.forward(cur, 0) {
      if self.nodes[next].key == key {
        return false;
      }
    }

    // Draw only after the duplicate check; duplicates must not consume
    // randomness.
    let level = self.generator.random_level();
    if level > self.level {
      // Levels activated by this node splice directly off the header.
      update.resize(level + 1, None);
      self.level = level;
    }

    let idx = self.nodes.len();
    let mut forward = Vec::with_capacity(level + 1);
    for lvl in 0..=level {
      forward.push(self.forward(update[lvl], lvl));
    }
    self.nodes.push(Node { key, forward });
    for lvl in 0..=level {
      self.set_forward(update[lvl], lvl, Some(idx));
    }

    self.len += 1;
    true
  }

  /// Membership test. Same traversal and counter effects as
  /// [`probe`](SkipSet::probe).
  #[inline]
  pub fn contains(&self, key: &K) -> bool {
    self.probe(key).found
  }

  /// Looks `key` up, counting every node the traversal actually touches.
  ///
  /// The counter is reset at the start of the search. Descending a level
  /// without moving to a new node does not count. The final level-0 probe
  /// counts unconditionally, even when no node is there, so an empty set
  /// reports `(found: false, visited: 1)`. Comparisons against other
  /// [`ProbeSet`] implementations rely on that accounting; changing it
  /// invalidates recorded baselines.
  pub fn probe(&self, key: &K) -> Probe {
    self.visited.set(0);

    let mut visited = 0;
    let mut cur: Link = None;

    for lvl in (0..=self.level).rev() {
      while let Some(next) = self.forward(cur, lvl) {
        if self.nodes[next].key < *key {
          visited += 1;
          cur = Some(next);
        } else {
          break;
        }
      }
    }

    let target = self.forward(cur, 0);
    visited += 1;

    let found = match target {
      Some(i) => self.nodes[i].key == *key,
      None => false,
    };

    self.visited.set(visited);
    Probe { found, visited }
  }
}

impl<K: Ord, G: LevelGenerator> ProbeSet<K> for SkipSet<K, G> {
  #[inline]
  fn insert(&mut self, key: K) -> bool {
    SkipSet::insert(self, key)
  }

  #[inline]
  fn probe(&self, key: &K) -> Probe {
    SkipSet::probe(self, key)
  }

  #[inline]
  fn nodes_visited(&self) -> usize {
    SkipSet::nodes_visited(self)
  }

  #[inline]
  fn reset_counter(&self) {
    SkipSet::reset_counter(self)
  }

  #[inline]
  fn len(&self) -> usize {
    SkipSet::len(self)
  }
}

/// An iterator over a set's keys in ascending order.
#[derive(Debug)]
pub struct Iter<'a, K> {
  nodes: &'a [Node<K>],
  next: Link,
}

impl<'a, K> Iterator for Iter<'a, K> {
  type Item = &'a K;

  fn next(&mut self) -> Option<&'a K> {
    let node = &self.nodes[self.next?];
    self.next = node.forward[0];
    Some(&node.key)
  }
}
