//! Reading network lists from files.

use crate::models::Network;
use colored::Colorize;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse one network per line.
///
/// Lines are trimmed. Anything that is not an IPv4 `a.b.c.d/n` network is
/// skipped, including blank lines and IPv6 networks.
///
/// # Returns
/// * `Ok(Vec<Network>)` - The networks in input order
/// * `Err` - If reading from `reader` fails
pub fn parse_network_lines<R: BufRead>(reader: R) -> Result<Vec<Network>, Box<dyn Error>> {
    let mut networks = Vec::new();
    let mut skipped = 0;

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Error reading line {}: {e}", i + 1))?;
        let line = line.trim();
        match Network::new(line) {
            Ok(network) => networks.push(network),
            Err(e) => {
                skipped += 1;
                log::debug!("skip line {} {line:?}: {e}", i + 1, line = line.on_blue());
            }
        }
    }

    log::info!("# Got network count = {}, skipped {} lines", networks.len(), skipped);
    Ok(networks)
}

/// Read the networks from a file.
///
/// # Arguments
/// * `path` - Path of a file with one network per line
///
/// # Returns
/// * `Ok(Vec<Network>)` - The parsed networks in file order
/// * `Err` - If the file can not be opened or read
pub fn read_network_file<P: AsRef<Path>>(path: P) -> Result<Vec<Network>, Box<dyn Error>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| format!("Error opening network file {}: {e}", path.display()))?;
    log::info!("Reading networks from file: {}", path.display());

    parse_network_lines(BufReader::new(file))
}
