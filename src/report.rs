//! Result persistence and terminal rendering for trial runs.
//!
//! Trial binaries write their measurements as small CSV files and render
//! them as plain-text charts and tables, so a run leaves both a
//! machine-readable record and something a terminal can show.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

use crate::driver::{Measurement, SelectionMeasurement};

/// Default output file of the skiplist probe binary.
pub const SKIPLIST_RESULTS_FILE: &str = "skiplist_results.csv";

/// Default output file of the treap probe binary.
pub const TREAP_RESULTS_FILE: &str = "treap_results.csv";

/// Default output file of the selection benchmark binary.
pub const SELECTION_RESULTS_FILE: &str = "quickselect_vs_quicksort.csv";

/// The recorded specimen run rendered when no results file exists yet.
pub const FALLBACK_PROBE_RESULTS: [(usize, f64); 3] =
  [(5_000_000, 22.34), (10_000_000, 23.67), (20_000_000, 24.89)];

/// Writes probe measurements as `tree_size,avg_nodes_visited` rows, the
/// schema [`read_probe_csv`] reads back. Averages carry two decimals.
pub fn write_probe_csv(path: impl AsRef<Path>, results: &[Measurement]) -> io::Result<()> {
  let mut out = String::from("tree_size,avg_nodes_visited\n");
  for m in results {
    out.push_str(&format!("{},{:.2}\n", m.size, m.avg_nodes_visited));
  }
  fs::write(path, out)
}

/// Reads rows written by [`write_probe_csv`].
///
/// The header line is skipped; every following non-empty line must be a
/// `size,average` pair, anything else is an
/// [`InvalidData`](io::ErrorKind::InvalidData) error.
pub fn read_probe_csv(path: impl AsRef<Path>) -> io::Result<Vec<(usize, f64)>> {
  let text = fs::read_to_string(path)?;

  let mut rows = Vec::new();
  for line in text.lines().skip(1) {
    let line = line.trim();
    if line.is_empty() {
      continue;
    }
    let (size, avg) = line.split_once(',').ok_or_else(|| bad_row(line))?;
    let size = size.trim().parse::<usize>().map_err(|_| bad_row(line))?;
    let avg = avg.trim().parse::<f64>().map_err(|_| bad_row(line))?;
    rows.push((size, avg));
  }
  Ok(rows)
}

fn bad_row(line: &str) -> io::Error {
  io::Error::new(
    io::ErrorKind::InvalidData,
    format!("malformed results row: {line:?}"),
  )
}

/// Like [`read_probe_csv`], but substitutes [`FALLBACK_PROBE_RESULTS`] when
/// the file does not exist. Any other error still surfaces.
pub fn read_probe_csv_or_fallback(path: impl AsRef<Path>) -> io::Result<Vec<(usize, f64)>> {
  let path = path.as_ref();
  match read_probe_csv(path) {
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      warn!(path = %path.display(), "no results file, rendering the recorded specimen run");
      Ok(FALLBACK_PROBE_RESULTS.to_vec())
    }
    other => other,
  }
}

/// Renders `(size, average)` rows as a horizontal bar chart.
pub fn render_probe_chart(rows: &[(usize, f64)]) -> String {
  const WIDTH: usize = 48;

  let mut out = String::from("average nodes visited per probe\n");
  let max = rows.iter().map(|&(_, avg)| avg).fold(0.0f64, f64::max);
  if max <= 0.0 {
    out.push_str("(no data)\n");
    return out;
  }

  let label = rows
    .iter()
    .map(|&(size, _)| size.to_string().len())
    .max()
    .unwrap_or(0);
  for &(size, avg) in rows {
    let bar = ((avg / max) * WIDTH as f64).round() as usize;
    out.push_str(&format!("{size:>label$} | {:#<bar$} {avg:.2}\n", ""));
  }
  out
}

/// Renders probe rows one line per size, the way the trial binaries
/// summarize a finished run.
pub fn render_probe_summary(rows: &[(usize, f64)]) -> String {
  let mut out = String::new();
  for &(size, avg) in rows {
    out.push_str(&format!("size {size}: average nodes visited = {avg:.2}\n"));
  }
  out
}

/// Writes selection measurements as `Size,QuickSelect,QuickSort` rows with
/// seconds as the unit.
pub fn write_selection_csv(
  path: impl AsRef<Path>,
  results: &[SelectionMeasurement],
) -> io::Result<()> {
  let mut out = String::from("Size,QuickSelect,QuickSort\n");
  for m in results {
    out.push_str(&format!(
      "{},{:.6},{:.6}\n",
      m.size,
      m.select_time.as_secs_f64(),
      m.sort_time.as_secs_f64(),
    ));
  }
  fs::write(path, out)
}

/// Renders selection measurements as an aligned table.
pub fn render_selection_table(results: &[SelectionMeasurement]) -> String {
  let mut out = format!(
    "{:>12}  {:>16}  {:>16}\n",
    "size", "quickselect (s)", "quicksort (s)"
  );
  for m in results {
    out.push_str(&format!(
      "{:>12}  {:>16.6}  {:>16.6}\n",
      m.size,
      m.select_time.as_secs_f64(),
      m.sort_time.as_secs_f64(),
    ));
  }
  out
}
