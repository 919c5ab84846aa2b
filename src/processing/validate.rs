//! Field validation for topology records.
//!
//! Ranges and patterns follow what the planner front end allows to be entered.

use crate::error::ValidationError;
use crate::models::{parse_addr, ConnectionInput, DeviceInput, ProjectInput, SubnetInput, VlanInput};
use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

pub const VLAN_ID_RANGE: RangeInclusive<i64> = 1..=4094;
pub const SPEED_RANGE: RangeInclusive<i64> = 10..=100_000;
pub const PORT_RANGE: RangeInclusive<i64> = 1..=48;

static MAC_REGEX: OnceLock<Regex> = OnceLock::new();
static COLOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_mac_regex() -> &'static Regex {
    MAC_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$").expect("Invalid Regex")
    })
}

fn get_color_regex() -> &'static Regex {
    COLOR_REGEX.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid Regex"))
}

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    Ok(())
}

fn in_range(
    field: &'static str,
    value: i64,
    range: &RangeInclusive<i64>,
) -> Result<(), ValidationError> {
    if !range.contains(&value) {
        return Err(ValidationError::new(
            field,
            format!("must be between {} and {}", range.start(), range.end()),
        ));
    }
    Ok(())
}

fn optional_in_range(
    field: &'static str,
    value: Option<i64>,
    range: &RangeInclusive<i64>,
) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |v| in_range(field, v, range))
}

// empty strings are allowed and mean "not set"
fn optional_ip(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(ip) if !ip.is_empty() => parse_addr(ip)
            .map(|_| ())
            .map_err(|_| ValidationError::new(field, "must be a valid IPv4 address")),
        _ => Ok(()),
    }
}

fn color(value: &str) -> Result<(), ValidationError> {
    if !get_color_regex().is_match(value) {
        return Err(ValidationError::new(
            "color",
            "must be a hex color like #3498db",
        ));
    }
    Ok(())
}

pub fn validate_project(input: &ProjectInput) -> Result<(), ValidationError> {
    required("name", &input.name)
}

pub fn validate_device(input: &DeviceInput) -> Result<(), ValidationError> {
    required("name", &input.name)?;
    optional_ip("ip_address", input.ip_address.as_deref())?;
    if let Some(mac) = input.mac_address.as_deref() {
        if !mac.is_empty() && !get_mac_regex().is_match(mac) {
            return Err(ValidationError::new(
                "mac_address",
                "must look like 00:11:22:33:44:55",
            ));
        }
    }
    optional_in_range("vlan_id", input.vlan_id, &VLAN_ID_RANGE)?;
    in_range("speed", input.speed, &SPEED_RANGE)
}

pub fn validate_connection(input: &ConnectionInput) -> Result<(), ValidationError> {
    required("from_device_id", &input.from_device_id)?;
    required("to_device_id", &input.to_device_id)?;
    optional_in_range("from_port", input.from_port, &PORT_RANGE)?;
    optional_in_range("to_port", input.to_port, &PORT_RANGE)?;
    in_range("speed", input.speed, &SPEED_RANGE)?;
    optional_in_range("vlan_id", input.vlan_id, &VLAN_ID_RANGE)?;
    color(&input.color)
}

pub fn validate_vlan(input: &VlanInput) -> Result<(), ValidationError> {
    required("name", &input.name)?;
    in_range("vlan_id", input.vlan_id, &VLAN_ID_RANGE)?;
    required("subnet", &input.subnet)?;
    color(&input.color)
}

pub fn validate_subnet(input: &SubnetInput) -> Result<(), ValidationError> {
    required("name", &input.name)?;
    required("network", &input.network)?;
    required("subnet_mask", &input.subnet_mask)?;
    optional_ip("gateway", input.gateway.as_deref())?;
    optional_in_range("vlan_id", input.vlan_id, &VLAN_ID_RANGE)?;
    color(&input.color)
}
