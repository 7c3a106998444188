//! Order statistics on plain slices.
//!
//! [`quickselect`] answers "which element ranks `k`-th" in expected linear
//! time; [`quicksort`] answers it the expensive way by sorting everything.
//! The trial driver runs both over the same inputs to put the difference on
//! record next to the skiplist measurements.

use std::cmp::Ordering;

use rand::Rng;

use crate::Error;

/// Ranges at or below this length are finished by insertion sort.
const INSERTION_CUTOFF: usize = 16;

/// Returns the element that would sit at index `k` if `arr` were sorted.
///
/// Partially reorders `arr` in place: afterwards the rank-`k` element is at
/// index `k`, everything before it is no larger and everything after it is
/// no smaller. Pivots are drawn from `rng`, so a seeded generator makes the
/// reordering reproducible. Expected linear time for any input.
///
/// Returns [`Error::InvalidRank`] when `k` is not a valid 0-based rank,
/// which includes every call on an empty slice.
///
/// ## Example
///
/// ```rust
/// use rand::thread_rng;
/// use skipprobe::quickselect;
///
/// let mut values = vec![9u64, 1, 8, 2, 7, 3];
/// let median = *quickselect(&mut values, 2, &mut thread_rng()).unwrap();
/// assert_eq!(median, 3);
/// ```
pub fn quickselect<'a, T: Ord, R: Rng>(
  arr: &'a mut [T],
  k: usize,
  rng: &mut R,
) -> Result<&'a T, Error> {
  if k >= arr.len() {
    return Err(Error::InvalidRank { rank: k, len: arr.len() });
  }

  let mut left = 0;
  let mut right = arr.len() - 1;
  loop {
    if left == right {
      return Ok(&arr[left]);
    }

    let pivot = rng.gen_range(left..=right);
    let pivot = partition(arr, left, right, pivot);
    match k.cmp(&pivot) {
      Ordering::Equal => return Ok(&arr[k]),
      Ordering::Less => right = pivot - 1,
      Ordering::Greater => left = pivot + 1,
    }
  }
}

/// Lomuto partition of `arr[left..=right]` around the value at `pivot_idx`.
/// Returns the pivot's final index; smaller elements end up to its left.
fn partition<T: Ord>(arr: &mut [T], left: usize, right: usize, pivot_idx: usize) -> usize {
  arr.swap(pivot_idx, right);

  let mut store = left;
  for i in left..right {
    if arr[i] < arr[right] {
      arr.swap(store, i);
      store += 1;
    }
  }

  arr.swap(store, right);
  store
}

/// Sorts `arr` in place.
///
/// An iterative quicksort driven by an explicit range stack: short ranges
/// are finished by insertion sort, already-sorted ranges are detected by a
/// linear scan and skipped, and everything else is split by a fenced
/// partition around a median-of-three pivot. The smaller half of each split
/// is processed first. Not stable.
pub fn quicksort<T: Ord>(arr: &mut [T]) {
  if arr.len() <= 1 {
    return;
  }

  let mut stack = vec![(0, arr.len() - 1)];
  while let Some((left, right)) = stack.pop() {
    if right - left <= INSERTION_CUTOFF {
      insertion_sort(arr, left, right);
      continue;
    }

    if arr[left..=right].windows(2).all(|w| w[0] <= w[1]) {
      continue;
    }

    let pivot = fenced_partition(arr, left, right);
    if pivot - left < right - pivot {
      stack.push((pivot + 1, right));
      stack.push((left, pivot - 1));
    } else {
      stack.push((left, pivot - 1));
      stack.push((pivot + 1, right));
    }
  }
}

/// Insertion sort of the inclusive range `arr[left..=right]`.
fn insertion_sort<T: Ord>(arr: &mut [T], left: usize, right: usize) {
  for i in left + 1..=right {
    let mut j = i;
    while j > left && arr[j - 1] > arr[j] {
      arr.swap(j - 1, j);
      j -= 1;
    }
  }
}

/// Sorts `arr[left]`, `arr[mid]` and `arr[right]` into place, then parks the
/// median at `right - 1` and returns that index.
///
/// Leaves `arr[left] <= pivot <= arr[right]`, the fences
/// [`fenced_partition`] scans against.
fn median_of_three<T: Ord>(arr: &mut [T], left: usize, right: usize) -> usize {
  let mid = left + (right - left) / 2;

  if arr[left] > arr[mid] {
    arr.swap(left, mid);
  }
  if arr[left] > arr[right] {
    arr.swap(left, right);
  }
  if arr[mid] > arr[right] {
    arr.swap(mid, right);
  }

  arr.swap(mid, right - 1);
  right - 1
}

/// Hoare-style partition of `arr[left..=right]` around a median-of-three
/// pivot. Returns the pivot's final index.
///
/// The scans run without bounds checks of their own; they stop on the
/// sentinels [`median_of_three`] leaves at `left` and `right`. Callers must
/// guarantee `right - left > 2`, which the cutoff in [`quicksort`] does.
fn fenced_partition<T: Ord>(arr: &mut [T], left: usize, right: usize) -> usize {
  let p = median_of_three(arr, left, right);

  let mut i = left;
  let mut j = p;
  loop {
    i += 1;
    while arr[i] < arr[p] {
      i += 1;
    }
    j -= 1;
    while arr[j] > arr[p] {
      j -= 1;
    }

    if i >= j {
      break;
    }
    arr.swap(i, j);
  }

  arr.swap(i, p);
  i
}
