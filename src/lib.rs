//! Merge sorted IPv4 networks into the smallest equivalent list.
//!
//! Adjacent networks of equal size that are the two halves of one parent
//! network are repeatedly replaced by that parent until nothing changes.

pub mod config;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use models::Network;
use processing::{log_input_problems, MergeStats, Merger};
use std::error::Error;
use std::path::Path;

/// Result of merging one network list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Number of networks read from the input.
    pub input_count: usize,
    /// The merged networks in input order.
    pub networks: Vec<Network>,
    pub stats: MergeStats,
}

/// Merge an already parsed network list.
pub fn merge_report(networks: Vec<Network>) -> MergeReport {
    log_input_problems(&networks);

    let input_count = networks.len();
    let mut merger = Merger::new(networks);
    let stats = merger.merge_all();
    let networks = merger.into_networks();

    log::info!(
        "# Merged {} networks into {} ({} merges in {} passes)",
        input_count,
        networks.len(),
        stats.merges,
        stats.passes
    );

    MergeReport {
        input_count,
        networks,
        stats,
    }
}

/// Read the networks from `path` and merge them.
pub fn merge_network_file<P: AsRef<Path>>(path: P) -> Result<MergeReport, Box<dyn Error>> {
    let networks = input::read_network_file(path)?;
    Ok(merge_report(networks))
}
