//! Input of network lists.
//!
//! Malformed lines are dropped here so only valid networks reach the merger.

mod reader;

pub use reader::{parse_network_lines, read_network_file};
