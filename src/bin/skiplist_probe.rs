//! Probe-trial runner for the skiplist.
//!
//! Usage: `skiplist_probe [SIZE...]`. Builds a `SkipSet` per size with a
//! `floor(sqrt(size))` level ceiling, measures the average nodes visited
//! per search and writes the results next to the working directory.

use std::error::Error;

use skipprobe::driver::{run_probe_trials, sqrt_ceiling, TrialConfig};
use skipprobe::report::{self, SKIPLIST_RESULTS_FILE};
use skipprobe::{Options, SkipSet};

fn sizes_from_args() -> Result<Option<Vec<usize>>, Box<dyn Error>> {
  let args: Vec<String> = std::env::args().skip(1).collect();
  if args.is_empty() {
    return Ok(None);
  }

  let mut sizes = Vec::with_capacity(args.len());
  for arg in &args {
    let size = arg
      .parse::<usize>()
      .map_err(|e| format!("bad size {arg:?}: {e}"))?;
    sizes.push(size);
  }
  Ok(Some(sizes))
}

fn main() -> Result<(), Box<dyn Error>> {
  let config = match sizes_from_args()? {
    Some(sizes) => TrialConfig { sizes, ..TrialConfig::default() },
    None => TrialConfig::default(),
  };

  let results = run_probe_trials(&config, |size| {
    SkipSet::with_options(Options::new().with_max_level(sqrt_ceiling(size)))
      .expect("a positive ceiling always validates")
  });

  for m in &results {
    println!(
      "size {}: average nodes visited = {:.2}",
      m.size, m.avg_nodes_visited
    );
    println!(
      "  insert {:.2}s, probe {:.2}s",
      m.insert_time.as_secs_f64(),
      m.search_time.as_secs_f64()
    );
  }

  let rows: Vec<(usize, f64)> = results.iter().map(|m| (m.size, m.avg_nodes_visited)).collect();
  print!("{}", report::render_probe_chart(&rows));

  report::write_probe_csv(SKIPLIST_RESULTS_FILE, &results)?;
  println!("results written to {SKIPLIST_RESULTS_FILE}");
  Ok(())
}
