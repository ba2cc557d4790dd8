//! Subnet merging logic.
//!
//! - [`merge`] - Buddy test and the fixed-point merge loop
//! - [`overlap`] - Checks for unsorted or overlapping input

mod merge;
mod overlap;

// Re-export public functions
pub use merge::{are_buddies, is_minimal, merge_networks, MergeStats, Merger};
pub use overlap::{
    find_overlapping_networks, is_sorted_by_addr, log_input_problems, OverlapConflict,
};
