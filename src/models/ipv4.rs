//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] struct for an address paired with a prefix length,
//! along with the `u32` arithmetic behind every subnet calculation. All of it
//! works on the whole 32-bit value, so carries cross octet boundaries.

use super::SubnetFacts;
use crate::error::InvalidInputError;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use network_planner::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, InvalidInputError> {
    if len > MAX_LENGTH {
        Err(InvalidInputError::PrefixLength(len.to_string()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        // shifting a u64 keeps /0 (shift by 32) well defined
        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Dotted-decimal subnet mask for a prefix length.
pub fn prefix_to_mask(len: u8) -> Result<Ipv4Addr, InvalidInputError> {
    get_cidr_mask(len).map(Ipv4Addr::from)
}

/// Convert a dotted-decimal subnet mask back to its prefix length.
///
/// The mask must be contiguous: leading ones followed only by zeros.
pub fn mask_to_prefix(mask: Ipv4Addr) -> Result<u8, InvalidInputError> {
    let bits = u32::from(mask);
    let prefix = bits.leading_ones() as u8;
    if bits.checked_shl(prefix as u32).unwrap_or(0) != 0 {
        return Err(InvalidInputError::SubnetMask(mask.to_string()));
    }
    Ok(prefix)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, InvalidInputError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, InvalidInputError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    let broadcast_bits = network_bits | (!mask);
    Ok(Ipv4Addr::from(broadcast_bits))
}

/// Calculate the number of usable host addresses in a subnet.
///
/// Network and broadcast are reserved, so /31 and /32 have none.
pub fn num_hosts(len: u8) -> Result<u64, InvalidInputError> {
    if len > MAX_LENGTH {
        return Err(InvalidInputError::PrefixLength(len.to_string()));
    }
    let num_hosts = (1u64 << (MAX_LENGTH - len)).saturating_sub(2);
    Ok(num_hosts)
}

/// Parse a strict dotted-decimal IPv4 address.
///
/// Exactly four parts of ASCII digits, each within 0..=255. Leading zeros are
/// read as decimal.
pub fn parse_addr(input: &str) -> Result<Ipv4Addr, InvalidInputError> {
    let invalid = || InvalidInputError::Address(input.to_string());

    let parts: Vec<&str> = input.split('.').collect();
    if parts.len() != 4 {
        return Err(invalid());
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *octet = part.parse().map_err(|_| invalid())?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`], rejecting prefixes over 32.
    pub fn new(addr: Ipv4Addr, mask: u8) -> Result<Ipv4, InvalidInputError> {
        if mask > MAX_LENGTH {
            return Err(InvalidInputError::PrefixLength(mask.to_string()));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Prefix length clamped to 32, for values built without [`Ipv4::new`].
    fn prefix_len(&self) -> u8 {
        self.mask.min(MAX_LENGTH)
    }

    /// Subnet mask as a u32.
    pub fn mask_bits(&self) -> u32 {
        get_cidr_mask(self.prefix_len()).unwrap_or(u32::MAX)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.prefix_len()).unwrap_or(self.addr)
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.prefix_len()).unwrap_or(self.addr)
    }

    /// Usable host count, floored at zero.
    pub fn host_count(&self) -> u64 {
        num_hosts(self.prefix_len()).unwrap_or(0)
    }

    /// Derive the addressing facts of this subnet.
    pub fn facts(&self) -> SubnetFacts {
        let network = u32::from(self.lo());
        let broadcast = u32::from(self.hi());
        let host_count = self.host_count();

        let (first_host, last_host) = if host_count > 0 {
            (network + 1, broadcast - 1)
        } else {
            (network, broadcast)
        };

        SubnetFacts {
            network: Ipv4Addr::from(network),
            broadcast: Ipv4Addr::from(broadcast),
            first_host: Ipv4Addr::from(first_host),
            last_host: Ipv4Addr::from(last_host),
            host_count,
            subnet_mask: prefix_to_mask(self.prefix_len()).unwrap_or(Ipv4Addr::BROADCAST),
        }
    }
}

impl FromStr for Ipv4 {
    type Err = InvalidInputError;

    /// Parse strict `a.b.c.d/n` notation.
    fn from_str(addr_cidr: &str) -> Result<Ipv4, InvalidInputError> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| InvalidInputError::PrefixLength(addr_cidr.to_string()))?;
        let mask: u8 = mask
            .parse()
            .map_err(|_| InvalidInputError::PrefixLength(mask.to_string()))?;
        Ipv4::new(parse_addr(addr)?, mask)
    }
}

impl fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
