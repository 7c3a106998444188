//! Selection-versus-sort benchmark.
//!
//! Usage: `select_bench [SIZE...]`. Times quickselect (mean of 100 random
//! ranks) against one quicksort on a shuffled array of each size, prints an
//! aligned table and writes the results next to the working directory.

use std::error::Error;

use skipprobe::driver::{run_selection_trials, SelectionConfig};
use skipprobe::report::{self, SELECTION_RESULTS_FILE};

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
    Some(sizes) => SelectionConfig { sizes, ..SelectionConfig::default() },
    None => SelectionConfig::default(),
  };

  let results = run_selection_trials(&config);
  print!("{}", report::render_selection_table(&results));

  report::write_selection_csv(SELECTION_RESULTS_FILE, &results)?;
  println!("results written to {SELECTION_RESULTS_FILE}");
  Ok(())
}
