//! A randomized binary search tree, the pointer-per-node baseline the
//! skiplist is measured against.

use std::cell::Cell;
use std::cmp::Ordering;

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{Probe, ProbeSet};

#[cfg(test)]
mod tests;

type Link = Option<usize>;

#[derive(Debug)]
struct TreapNode<K> {
  key: K,
  /// Heap priority drawn at creation. Parents carry priorities at least as
  /// large as their children's.
  priority: u64,
  left: Link,
  right: Link,
}

/// An ordered-key membership structure based on a treap, instrumented to
/// report how many nodes each search touches.
///
/// Keys obey binary-search-tree order while randomly drawn priorities obey
/// max-heap order, which keeps the expected depth logarithmic without any
/// explicit rebalancing. Nodes live in an arena owned by the tree and refer
/// to each other through arena indices. Keys are unique and deletion is not
/// supported.
///
/// Every position a search enters counts as a visit, including the empty
/// slot a miss ends in, so an empty tree reports one visited node and a
/// search for the root key reports exactly one. The accounting is directly
/// comparable with [`SkipSet`](crate::SkipSet)'s.
///
/// Like [`SkipSet`](crate::SkipSet), the visit counter lives in a [`Cell`]
/// and the type is `!Sync`; serialize shared access externally.
///
/// ```compile_fail
/// fn shared<T: Sync>(_: &T) {}
///
/// let tree = skipprobe::Treap::<u64>::new();
/// shared(&tree);
/// ```
#[derive(Debug)]
pub struct Treap<K> {
  nodes: Vec<TreapNode<K>>,
  root: Link,
  rng: SmallRng,
  visited: Cell<usize>,
}

impl<K: Ord> Treap<K> {
  /// Creates an empty tree with an entropy-seeded priority source.
  #[inline]
  pub fn new() -> Self {
    Self::from_rng(SmallRng::from_entropy())
  }

  /// Creates an empty tree with a deterministic priority source. Priorities
  /// decide the tree shape, so a fixed seed makes the shape reproducible.
  #[inline]
  pub fn with_seed(seed: u64) -> Self {
    Self::from_rng(SmallRng::seed_from_u64(seed))
  }

  #[inline]
  fn from_rng(rng: SmallRng) -> Self {
    Self {
      nodes: Vec::new(),
      root: None,
      rng,
      visited: Cell::new(0),
    }
  }

  /// Inserts a key, returning whether it was newly inserted.
  ///
  /// Inserting a key that is already present leaves the tree untouched and
  /// draws no priority.
  pub fn insert(&mut self, key: K) -> bool {
    let (root, inserted) = self.insert_at(self.root, key);
    self.root = Some(root);
    inserted
  }

  /// Inserts below the subtree rooted at `at`, returning the index of the
  /// subtree's new root and whether a node was created.
  fn insert_at(&mut self, at: Link, key: K) -> (usize, bool) {
    let Some(i) = at else {
      let idx = self.nodes.len();
      let priority = self.rng.gen();
      self.nodes.push(TreapNode {
        key,
        priority,
        left: None,
        right: None,
      });
      return (idx, true);
    };

    match key.cmp(&self.nodes[i].key) {
      Ordering::Equal => (i, false),
      Ordering::Less => {
        let (l, inserted) = self.insert_at(self.nodes[i].left, key);
        self.nodes[i].left = Some(l);
        if inserted && self.nodes[l].priority > self.nodes[i].priority {
          (self.rotate_right(i, l), inserted)
        } else {
          (i, inserted)
        }
      }
      Ordering::Greater => {
        let (r, inserted) = self.insert_at(self.nodes[i].right, key);
        self.nodes[i].right = Some(r);
        if inserted && self.nodes[r].priority > self.nodes[i].priority {
          (self.rotate_left(i, r), inserted)
        } else {
          (i, inserted)
        }
      }
    }
  }

  /// Lifts `i`'s left child `l` above it.
  #[inline]
  fn rotate_right(&mut self, i: usize, l: usize) -> usize {
    self.nodes[i].left = self.nodes[l].right;
    self.nodes[l].right = Some(i);
    l
  }

  /// Lifts `i`'s right child `r` above it.
  #[inline]
  fn rotate_left(&mut self, i: usize, r: usize) -> usize {
    self.nodes[i].right = self.nodes[r].left;
    self.nodes[r].left = Some(i);
    r
  }

  /// Membership test. Same traversal and counter effects as
  /// [`probe`](Treap::probe).
  #[inline]
  pub fn contains(&self, key: &K) -> bool {
    self.probe(key).found
  }

  /// Looks `key` up, counting every position the descent enters.
  ///
  /// The counter is reset at the start of the search. A miss charges the
  /// empty slot it ends in, so the count is always at least one.
  pub fn probe(&self, key: &K) -> Probe {
    self.visited.set(0);

    let mut visited = 0;
    let mut cur = self.root;
    let found = loop {
      visited += 1;
      match cur {
        None => break false,
        Some(i) => match key.cmp(&self.nodes[i].key) {
          Ordering::Equal => break true,
          Ordering::Less => cur = self.nodes[i].left,
          Ordering::Greater => cur = self.nodes[i].right,
        },
      }
    };

    self.visited.set(visited);
    Probe { found, visited }
  }
}

impl<K: Ord> Default for Treap<K> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<K> Treap<K> {
  /// Returns the number of keys in the tree.
  #[inline]
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// Returns `true` if the tree holds no keys.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Reads the visit counter: the positions entered by the most recent
  /// search, or whatever [`reset_counter`](Treap::reset_counter) last left
  /// there.
  #[inline]
  pub fn nodes_visited(&self) -> usize {
    self.visited.get()
  }

  /// Zeroes the visit counter.
  #[inline]
  pub fn reset_counter(&self) {
    self.visited.set(0);
  }

  /// Returns an iterator over the keys in ascending order.
  pub fn iter(&self) -> InOrderIter<'_, K> {
    let mut it = InOrderIter {
      nodes: &self.nodes,
      stack: Vec::new(),
    };
    it.push_left(self.root);
    it
  }
}

impl<K: Ord> ProbeSet<K> for Treap<K> {
  #[inline]
  fn insert(&mut self, key: K) -> bool {
    Treap::insert(self, key)
  }

  #[inline]
  fn probe(&self, key: &K) -> Probe {
    Treap::probe(self, key)
  }

  #[inline]
  fn nodes_visited(&self) -> usize {
    Treap::nodes_visited(self)
  }

  #[inline]
  fn reset_counter(&self) {
    Treap::reset_counter(self)
  }

  #[inline]
  fn len(&self) -> usize {
    Treap::len(self)
  }
}

/// An in-order iterator over a tree's keys.
#[derive(Debug)]
pub struct InOrderIter<'a, K> {
  nodes: &'a [TreapNode<K>],
  /// Ancestors whose key and right subtree are still pending.
  stack: Vec<usize>,
}

impl<K> InOrderIter<'_, K> {
  fn push_left(&mut self, mut at: Link) {
    while let Some(i) = at {
      self.stack.push(i);
      at = self.nodes[i].left;
    }
  }
}

impl<'a, K> Iterator for InOrderIter<'a, K> {
  type Item = &'a K;

  fn next(&mut self) -> Option<&'a K> {
    let i = self.stack.pop()?;
    self.push_left(self.nodes[i].right);
    Some(&self.nodes[i].key)
  }
}
