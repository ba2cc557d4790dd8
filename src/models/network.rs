//! IPv4 network in CIDR notation.
//!
//! Provides [`Network`], an IPv4 network address together with its
//! [`NetworkMask`].

use super::mask::{NetworkMask, MAX_LENGTH};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Get the network address for a given IP and mask by clearing the host bits.
pub fn cut_addr(addr: Ipv4Addr, mask: NetworkMask) -> Ipv4Addr {
    let mut octets = addr.octets();
    for (o, m) in octets.iter_mut().zip(mask.octets()) {
        *o &= m;
    }
    Ipv4Addr::from(octets)
}

/// IPv4 network with CIDR notation support.
///
/// The address never has host bits set.
#[derive(Eq, Debug, Copy, Clone, Hash)]
pub struct Network {
    /// The network address.
    pub addr: Ipv4Addr,
    /// The subnet mask.
    pub mask: NetworkMask,
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

impl Network {
    /// Create a new [`Network`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// Host bits are cleared, so "10.0.0.1/24" gives 10.0.0.0/24.
    pub fn new(addr_cidr: &str) -> Result<Network, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err("Invalid address/mask".into());
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| format!("Invalid address {}", parts[0]))?;
        let len: u8 = parts[1]
            .parse()
            .map_err(|_| format!("Invalid mask length {}", parts[1]))?;
        if len > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        Network::from_parts(addr, len)
    }

    /// Build a [`Network`] from an address and prefix length.
    pub fn from_parts(addr: Ipv4Addr, len: u8) -> Result<Network, Box<dyn Error>> {
        let mask = NetworkMask::from_prefix_len(len)?;
        Ok(Network {
            addr: cut_addr(addr, mask),
            mask,
        })
    }

    pub fn prefix_len(&self) -> u8 {
        self.mask.prefix_len()
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        self.addr
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        let mask = u32::from(Ipv4Addr::from(self.mask));
        Ipv4Addr::from(u32::from(self.addr) | !mask)
    }

    /// Check whether `ip` falls inside this network.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.lo() <= ip && ip <= self.hi()
    }
}

impl FromStr for Network {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Network, Self::Err> {
        Network::new(s)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len())
    }
}

impl PartialEq for Network {
    fn eq(&self, other: &Network) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl Ord for Network {
    fn cmp(&self, other: &Network) -> std::cmp::Ordering {
        (self.addr, self.prefix_len()).cmp(&(other.addr, other.prefix_len()))
    }
}

impl PartialOrd for Network {
    fn partial_cmp(&self, other: &Network) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
