//! IPv4 subnet mask arithmetic.
//!
//! Provides [`NetworkMask`], a 4-octet subnet mask, and the widening step used
//! when two sibling networks collapse into their parent.

use std::error::Error;
use std::fmt;
use std::net::Ipv4Addr;
use std::ops::{BitAnd, Not};

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_merge::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Subnet mask stored as four octets, most significant first.
///
/// Always a left-aligned run of 1-bits followed by 0-bits.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct NetworkMask([u8; 4]);

impl NetworkMask {
    /// Build the mask for a prefix length (0-32).
    pub fn from_prefix_len(len: u8) -> Result<NetworkMask, Box<dyn Error>> {
        let mask = get_cidr_mask(len)?;
        Ok(NetworkMask(mask.to_be_bytes()))
    }

    /// Number of leading 1-bits.
    pub fn prefix_len(&self) -> u8 {
        u32::from_be_bytes(self.0).count_ones() as u8
    }

    pub fn octets(&self) -> [u8; 4] {
        self.0
    }

    /// Return the mask one bit shorter, e.g. /24 -> /23.
    ///
    /// The boundary bit is found by scanning octets left to right past the
    /// 255 ones. A zero octet means the boundary sits in the previous octet,
    /// anything else is a partial octet holding the boundary itself.
    /// `/0` cannot get any wider and is returned unchanged. `/32` has no
    /// octet below 255, so its last octet holds the boundary.
    pub fn widen(self) -> NetworkMask {
        let mut octets = self.0;
        if octets[0] == 0 {
            return self;
        }

        let boundary = match octets.iter().position(|&o| o != 255) {
            Some(i) if octets[i] == 0 => i - 1,
            Some(i) => i,
            None => octets.len() - 1,
        };
        octets[boundary] <<= 1;

        NetworkMask(octets)
    }
}

impl BitAnd for NetworkMask {
    type Output = NetworkMask;

    fn bitand(self, rhs: NetworkMask) -> NetworkMask {
        let mut octets = self.0;
        for (o, r) in octets.iter_mut().zip(rhs.0) {
            *o &= r;
        }
        NetworkMask(octets)
    }
}

/// Flips every bit. The result is no longer a valid subnet mask but is
/// useful for isolating single bits with `&`.
impl Not for NetworkMask {
    type Output = NetworkMask;

    fn not(self) -> NetworkMask {
        NetworkMask(self.0.map(|o| !o))
    }
}

impl From<NetworkMask> for Ipv4Addr {
    fn from(mask: NetworkMask) -> Ipv4Addr {
        Ipv4Addr::from(mask.0)
    }
}

impl fmt::Display for NetworkMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Ipv4Addr::from(self.0))
    }
}
