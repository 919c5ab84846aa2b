//! Subnet calculation and record validation.
//!
//! - [`calculator`] - network/broadcast/host-range derivation
//! - [`validate`] - field rules for topology records

mod calculator;
pub mod validate;

// Re-export public functions
pub use calculator::{calculate, parse_network_spec, parse_prefix, PrefixInput};
