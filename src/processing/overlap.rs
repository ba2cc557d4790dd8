//! Input order and overlap detection.
//!
//! Merging only gives a correct result for sorted, non-overlapping input.
//! These checks find neighbours that break that so they can be reported.

use crate::models::Network;
use itertools::Itertools;

/// Two neighbouring networks in the input that share addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapConflict {
    /// Position of `first` in the list.
    pub index: usize,
    pub first: Network,
    pub second: Network,
}

/// True when addresses never decrease along the list.
pub fn is_sorted_by_addr(networks: &[Network]) -> bool {
    networks
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.addr <= b.addr)
}

/// Find neighbouring networks whose address ranges overlap.
///
/// Only adjacent entries are compared, matching how the merger walks the list.
pub fn find_overlapping_networks(networks: &[Network]) -> Vec<OverlapConflict> {
    networks
        .iter()
        .tuple_windows()
        .enumerate()
        .filter(|(_, (a, b))| a.lo() <= b.hi() && b.lo() <= a.hi())
        .map(|(index, (a, b))| OverlapConflict {
            index,
            first: *a,
            second: *b,
        })
        .collect()
}

/// Log input order problems and overlapping networks as warnings.
pub fn log_input_problems(networks: &[Network]) {
    if !is_sorted_by_addr(networks) {
        log::warn!("Input networks are not sorted by address, merge result may not be minimal");
    }

    let conflicts = find_overlapping_networks(networks);
    if conflicts.is_empty() {
        log::info!("No overlapping networks found.");
        return;
    }

    log::warn!("Found {} overlapping network pair(s):", conflicts.len());
    for conflict in &conflicts {
        log::warn!(
            "  line {}: {} overlaps {}",
            conflict.index + 1,
            conflict.first,
            conflict.second
        );
    }
}
