//! Renders a probe results file as a terminal chart.
//!
//! Usage: `probe_chart [FILE]`. Defaults to the skiplist results file. A
//! missing file renders a recorded specimen run instead, so the chart
//! always has something to show.

use std::error::Error;
use std::path::Path;

use skipprobe::report::{self, SKIPLIST_RESULTS_FILE};

fn main() -> Result<(), Box<dyn Error>> {
  let path = std::env::args()
    .nth(1)
    .unwrap_or_else(|| SKIPLIST_RESULTS_FILE.to_string());

  if !Path::new(&path).exists() {
    println!("{path} not found, rendering the recorded specimen run");
  }

  let rows = report::read_probe_csv_or_fallback(&path)?;
  print!("{}", report::render_probe_summary(&rows));
  print!("{}", report::render_probe_chart(&rows));
  Ok(())
}
