//! The key-schedule detector: entropy pre-filter, algebraic distance
//! evaluators, tweak enumerator, and scan driver.

mod constants;
mod distance;
mod entropy;
mod error;
mod report;
#[cfg(test)]
mod schedule;
mod scanner;
mod revert;
mod tweak;
mod util;

pub use error::{Error, Result};
pub use report::print_match;
pub use scanner::{scan_with, Match, MIN_IMAGE_LEN};
