//! Derived addressing facts of an IPv4 subnet.

use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Result of a subnet calculation.
///
/// Addresses serialize as dotted-decimal strings, field names as camelCase.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct SubnetFacts {
    /// Network address, host bits zeroed.
    pub network: Ipv4Addr,
    /// Broadcast address, host bits set.
    pub broadcast: Ipv4Addr,
    /// First usable host, or the network address when there is none.
    pub first_host: Ipv4Addr,
    /// Last usable host, or the broadcast address when there is none.
    pub last_host: Ipv4Addr,
    /// Usable hosts, network and broadcast excluded.
    pub host_count: u64,
    /// Dotted-decimal subnet mask.
    pub subnet_mask: Ipv4Addr,
}
