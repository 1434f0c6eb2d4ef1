//! Scans a raw memory image for resident AES-128/AES-256 key schedules,
//! tolerating a bounded number of bit errors to survive partial memory
//! decay (cold-boot attacks, forensic captures).
//!
//! ## Example
//! ```
//! use keyfind::{scan_with, MIN_IMAGE_LEN};
//!
//! # fn main() {
//! let image = vec![0u8; MIN_IMAGE_LEN];
//! let mut matches = Vec::new();
//! scan_with(&image, 10, false, |m| matches.push(m)).unwrap();
//! # }
//! ```

mod keyfind;

pub use keyfind::{print_match, scan_with, Error, Match, Result, MIN_IMAGE_LEN};
