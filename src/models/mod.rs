//! Domain models for the network planner.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 address with CIDR notation support, plus mask arithmetic
//! - [`SubnetFacts`] - derived addressing facts of a subnet
//! - [`Project`], [`Device`], [`Connection`], [`Vlan`], [`SubnetRecord`] - topology records

mod device;
mod facts;
mod ipv4;
mod project;
mod subnet;
mod vlan;

// Re-export public types
pub use device::{
    Connection, ConnectionInput, Device, DeviceInput, DeviceKind, DeviceKindInfo, DEFAULT_COLOR,
    DEFAULT_SPEED,
};
pub use facts::SubnetFacts;
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, mask_to_prefix, num_hosts, parse_addr,
    prefix_to_mask, Ipv4, MAX_LENGTH,
};
pub use project::{Project, ProjectInput};
pub use subnet::{SubnetInput, SubnetRecord};
pub use vlan::{Vlan, VlanInput};
