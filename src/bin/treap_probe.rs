//! Probe-trial runner for the treap.
//!
//! Usage: `treap_probe [SIZE...]`. Builds a `Treap` per size, measures
//! the average nodes visited per search and writes the results next to the
//! working directory. The numbers line up with `skiplist_probe`'s.

use std::error::Error;

use skipprobe::driver::{run_probe_trials, TrialConfig};
use skipprobe::report::{self, TREAP_RESULTS_FILE};
use skipprobe::Treap;

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

  let results = run_probe_trials(&config, |_| Treap::new());

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

  report::write_probe_csv(TREAP_RESULTS_FILE, &results)?;
  println!("results written to {TREAP_RESULTS_FILE}");
  Ok(())
}
