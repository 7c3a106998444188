#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod level;
mod list;
mod options;
mod probe;
mod select;
mod treap;

pub mod driver;
pub mod report;

pub use error::Error;
pub use level::{Geometric, LevelGenerator, Scripted};
pub use list::{Iter, SkipSet};
pub use options::{Options, DEFAULT_MAX_LEVEL, DEFAULT_PROBABILITY};
pub use probe::{Probe, ProbeSet};
pub use select::{quickselect, quicksort};
pub use treap::{InOrderIter, Treap};
