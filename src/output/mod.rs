//! Output formatting for merged networks.
//!
//! - [`text`] - One CIDR per line
//! - [`json`] - JSON array of CIDR strings

mod json;
mod text;

pub use json::format_json;
pub use text::format_text;

use crate::models::Network;
use std::error::Error;
use std::io::Write;

/// Supported output formats.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Write `networks` to `writer` in the requested format.
pub fn write_networks<W: Write>(
    mut writer: W,
    networks: &[Network],
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let out = match format {
        OutputFormat::Text => format_text(networks),
        OutputFormat::Json => format_json(networks)? + "\n",
    };
    writer
        .write_all(out.as_bytes())
        .map_err(|e| format!("Error writing output: {e}"))?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_networks() {
        let networks = vec![
            Network::new("10.0.0.0/23").unwrap(),
            Network::new("10.0.4.0/24").unwrap(),
        ];

        let mut buf = Vec::new();
        write_networks(&mut buf, &networks, OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "10.0.0.0/23\n10.0.4.0/24\n");

        let mut buf = Vec::new();
        write_networks(&mut buf, &networks, OutputFormat::Json).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.ends_with("]\n"));
        assert!(out.contains("\"10.0.4.0/24\""));
    }
}
