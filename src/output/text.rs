//! Plain text output.

use crate::models::Network;

/// Render networks in CIDR notation, one per line.
pub fn format_text(networks: &[Network]) -> String {
    networks.iter().map(|n| format!("{n}\n")).collect()
}
