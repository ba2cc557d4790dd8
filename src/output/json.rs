//! JSON output.

use crate::models::Network;
use std::error::Error;

/// Render networks as a pretty printed JSON array of CIDR strings.
pub fn format_json(networks: &[Network]) -> Result<String, Box<dyn Error>> {
    let json =
        serde_json::to_string_pretty(networks).map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(json)
}
