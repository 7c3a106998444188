use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

use super::*;
use crate::Probe;

fn assert_sorted(t: &Treap<u64>) {
  let keys: Vec<u64> = t.iter().copied().collect();
  assert!(
    keys.windows(2).all(|w| w[0] < w[1]),
    "in-order walk out of order: {keys:?}"
  );
}

/// Checks both orders at once: keys within `(lo, hi)` and child priorities
/// no larger than the parent's.
fn assert_treap(nodes: &[TreapNode<u64>], at: Link, lo: Option<u64>, hi: Option<u64>) {
  let Some(i) = at else { return };
  let n = &nodes[i];
  if let Some(lo) = lo {
    assert!(n.key > lo);
  }
  if let Some(hi) = hi {
    assert!(n.key < hi);
  }
  for child in [n.left, n.right].into_iter().flatten() {
    assert!(nodes[child].priority <= n.priority);
  }
  assert_treap(nodes, n.left, lo, Some(n.key));
  assert_treap(nodes, n.right, Some(n.key), hi);
}

#[test]
fn membership() {
  let mut t = Treap::new();
  assert!(t.is_empty());
  for k in [10u64, 20, 5] {
    assert!(t.insert(k));
  }
  assert_eq!(t.len(), 3);
  assert!(t.contains(&20));
  assert!(!t.contains(&15));
  assert_eq!(t.iter().copied().collect::<Vec<_>>(), vec![5, 10, 20]);
}

#[test]
fn empty_probe_counts_the_null_slot() {
  let t: Treap<u64> = Treap::new();
  assert_eq!(t.probe(&42), Probe { found: false, visited: 1 });
  assert_eq!(t.nodes_visited(), 1);
  assert_eq!(t.iter().next(), None);
}

#[test]
fn root_probe_costs_one() {
  let mut t = Treap::with_seed(3);
  for k in [4u64, 2, 6, 1, 3, 5, 7] {
    t.insert(k);
  }
  let root_key = t.nodes[t.root.unwrap()].key;
  assert_eq!(t.probe(&root_key), Probe { found: true, visited: 1 });
}

#[test]
fn insert_reports_newness() {
  let mut t = Treap::with_seed(1);
  assert!(t.insert(7u64));
  assert!(!t.insert(7));
  assert_eq!(t.len(), 1);
  assert_eq!(t.iter().copied().collect::<Vec<_>>(), vec![7]);
}

#[test]
fn orders_hold_through_shuffled_inserts() {
  let mut rng = SmallRng::seed_from_u64(17);
  let mut keys: Vec<u64> = (0..500).collect();
  keys.shuffle(&mut rng);

  let mut t = Treap::with_seed(23);
  for &k in &keys {
    assert!(t.insert(k));
  }
  assert_eq!(t.len(), 500);
  assert_sorted(&t);
  assert_treap(&t.nodes, t.root, None, None);
  assert_eq!(
    t.iter().copied().collect::<Vec<_>>(),
    (0..500).collect::<Vec<_>>()
  );
}

#[test]
fn membership_of_random_keys() {
  let mut rng = SmallRng::seed_from_u64(0xfeed);
  let mut t = Treap::with_seed(0xbeef);

  let keys: Vec<u64> = rand::seq::index::sample(&mut rng, 10_000, 1_000)
    .into_iter()
    .map(|k| k as u64)
    .collect();
  for &k in &keys {
    assert!(t.insert(k));
  }
  for &k in &keys {
    let p = t.probe(&k);
    assert!(p.found);
    assert!(p.visited >= 1);
  }
  for k in 10_000..11_000u64 {
    let p = t.probe(&k);
    assert!(!p.found);
    assert!(p.visited >= 1);
  }
}

#[test]
fn counter_lifecycle() {
  let mut t = Treap::with_seed(5);
  for k in [1u64, 2, 3] {
    t.insert(k);
  }

  let p = t.probe(&3);
  assert_eq!(t.nodes_visited(), p.visited);

  t.reset_counter();
  assert_eq!(t.nodes_visited(), 0);

  // Insertion never touches the counter.
  let p = t.probe(&2);
  t.insert(42);
  assert_eq!(t.nodes_visited(), p.visited);
}

#[test]
fn probes_through_the_trait() {
  use crate::ProbeSet;

  fn run<S: ProbeSet<u64>>(s: &mut S) {
    assert!(s.insert(1));
    assert!(s.contains(&1));
    assert!(!s.contains(&2));
    assert_eq!(s.len(), 1);
    assert!(s.probe(&1).visited >= 1);
  }

  run(&mut Treap::with_seed(9));
}
