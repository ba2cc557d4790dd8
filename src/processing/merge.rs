//! Buddy merging of adjacent networks.
//!
//! Two networks are buddies when they are the two halves of the same parent
//! network. Merging replaces such a pair with the parent.

use crate::models::Network;
use colored::Colorize;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Check whether `b` is the upper sibling of `a` under their common parent.
///
/// Both networks must have the same mask; this is not checked.
pub fn are_buddies(a: &Network, b: &Network) -> bool {
    // The bit that a's mask has but the parent mask lacks:
    //   /24      = 11111111 11111111 11111111 00000000
    //   /23      = 11111111 11111111 11111110 00000000
    //   extra    = 00000000 00000000 00000001 00000000
    let extra_bit = a.mask & !a.mask.widen();

    let mut expected = a.addr.octets();
    for (o, e) in expected.iter_mut().zip(extra_bit.octets()) {
        *o |= e;
    }

    b.addr == Ipv4Addr::from(expected)
}

/// Counters collected while merging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    /// Number of passes run, including the last one that merged nothing.
    pub passes: usize,
    /// Total number of pairs merged.
    pub merges: usize,
}

/// Owns an ordered list of networks and collapses adjacent buddies in place.
#[derive(Debug, Default)]
pub struct Merger {
    networks: Vec<Network>,
}

impl Merger {
    pub fn new(networks: Vec<Network>) -> Merger {
        Merger { networks }
    }

    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    pub fn into_networks(self) -> Vec<Network> {
        self.networks
    }

    /// Run a single left to right scan over adjacent pairs.
    ///
    /// A merged entry is compared with its new neighbour only in the next
    /// pass. Pairs with different masks are never merged.
    /// Returns the number of merges made.
    pub fn merge_pass(&mut self) -> usize {
        let mut merges = 0;
        let mut i = 0;
        while i + 1 < self.networks.len() {
            let (a, b) = (&self.networks[i], &self.networks[i + 1]);
            if a.mask == b.mask && are_buddies(a, b) {
                let upper = self.networks.remove(i + 1);
                let lower = &mut self.networks[i];
                lower.mask = lower.mask.widen();
                log::trace!(
                    "merged {lower_in}/{len} + {upper} -> {merged}",
                    lower_in = lower.addr,
                    len = upper.prefix_len(),
                    upper = upper,
                    merged = lower.to_string().on_blue()
                );
                merges += 1;
            }
            i += 1;
        }
        merges
    }

    /// Repeat [`Merger::merge_pass`] until a pass merges nothing.
    pub fn merge_all(&mut self) -> MergeStats {
        let mut stats = MergeStats::default();
        loop {
            let merges = self.merge_pass();
            stats.passes += 1;
            stats.merges += merges;
            log::debug!(
                "pass {} merged {} pairs, {} networks left",
                stats.passes,
                merges,
                self.networks.len()
            );
            if merges == 0 {
                break;
            }
        }
        stats
    }
}

/// Merge all adjacent buddy networks until no more merges are possible.
pub fn merge_networks(networks: Vec<Network>) -> Vec<Network> {
    let mut merger = Merger::new(networks);
    merger.merge_all();
    merger.into_networks()
}

/// True when no two adjacent entries could still be merged.
pub fn is_minimal(networks: &[Network]) -> bool {
    !networks
        .iter()
        .tuple_windows()
        .any(|(a, b)| a.mask == b.mask && are_buddies(a, b))
}
