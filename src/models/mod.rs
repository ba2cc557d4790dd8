//! Domain models for subnet merging.
//!
//! - [`NetworkMask`] - 4-octet subnet mask with widening arithmetic
//! - [`Network`] - IPv4 network address with CIDR notation support

mod mask;
mod network;

// Re-export public types
pub use mask::{get_cidr_mask, NetworkMask, MAX_LENGTH};
pub use network::{cut_addr, Network};
