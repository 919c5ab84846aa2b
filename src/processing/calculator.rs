//! Subnet calculator.
//!
//! Turns a network specification (`a.b.c.d` or `a.b.c.d/n`) and an optional
//! separate prefix into [`SubnetFacts`]. Pure and stateless.

use crate::error::InvalidInputError;
use crate::models::{mask_to_prefix, parse_addr, Ipv4, SubnetFacts, MAX_LENGTH};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix supplied next to the network, as a number or as text.
///
/// Text may be a prefix length ("24") or a dotted-decimal mask
/// ("255.255.255.0").
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum PrefixInput {
    Bits(i64),
    Text(String),
}

impl PrefixInput {
    /// Resolve to a prefix length in 0..=32.
    pub fn resolve(&self) -> Result<u8, InvalidInputError> {
        match self {
            PrefixInput::Bits(bits) => u8::try_from(*bits)
                .ok()
                .filter(|len| *len <= MAX_LENGTH)
                .ok_or_else(|| InvalidInputError::PrefixLength(bits.to_string())),
            PrefixInput::Text(text) => parse_prefix(text),
        }
    }
}

/// Prefix taken from an arbitrary JSON value.
///
/// Whole-number floats such as `24.0` count as lengths. Anything that is not a
/// number or a string is an invalid prefix length.
impl TryFrom<Value> for PrefixInput {
    type Error = InvalidInputError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(PrefixInput::Text(text)),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && (0.0..=MAX_LENGTH as f64).contains(f))
                        .map(|f| f as i64)
                })
                .map(PrefixInput::Bits)
                .ok_or_else(|| InvalidInputError::PrefixLength(n.to_string())),
            other => Err(InvalidInputError::PrefixLength(other.to_string())),
        }
    }
}

impl From<u8> for PrefixInput {
    fn from(len: u8) -> Self {
        PrefixInput::Bits(len as i64)
    }
}

impl From<&str> for PrefixInput {
    fn from(text: &str) -> Self {
        PrefixInput::Text(text.to_string())
    }
}

impl From<String> for PrefixInput {
    fn from(text: String) -> Self {
        PrefixInput::Text(text)
    }
}

/// Parse a textual prefix: decimal length or contiguous dotted mask.
pub fn parse_prefix(text: &str) -> Result<u8, InvalidInputError> {
    let text = text.trim();
    if text.contains('.') {
        let mask =
            parse_addr(text).map_err(|_| InvalidInputError::SubnetMask(text.to_string()))?;
        return mask_to_prefix(mask);
    }
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidInputError::PrefixLength(text.to_string()));
    }
    text.parse::<u8>()
        .ok()
        .filter(|len| *len <= MAX_LENGTH)
        .ok_or_else(|| InvalidInputError::PrefixLength(text.to_string()))
}

/// Split a network specification into address and effective prefix.
///
/// An embedded non-empty `/prefix` wins over `prefix`. The prefix is checked
/// before the address.
pub fn parse_network_spec(
    network: &str,
    prefix: Option<&PrefixInput>,
) -> Result<Ipv4, InvalidInputError> {
    let network = network.trim();
    let (addr, embedded) = match network.split_once('/') {
        Some((_, rest)) if rest.contains('/') => {
            return Err(InvalidInputError::Address(network.to_string()))
        }
        Some((addr, rest)) => (addr.trim(), Some(rest.trim()).filter(|p| !p.is_empty())),
        None => (network, None),
    };

    let len = match (embedded, prefix) {
        (Some(text), _) => parse_prefix(text)?,
        (None, Some(prefix)) => prefix.resolve()?,
        (None, None) => return Err(InvalidInputError::PrefixLength("missing".to_string())),
    };

    Ipv4::new(parse_addr(addr)?, len)
}

/// Calculate network, broadcast, host range, host count and mask.
///
/// # Examples
/// ```
/// use network_planner::processing::{calculate, PrefixInput};
/// let facts = calculate("192.168.1.10", Some(PrefixInput::Bits(24))).unwrap();
/// assert_eq!(facts.network.to_string(), "192.168.1.0");
/// assert_eq!(facts.host_count, 254);
/// ```
pub fn calculate(
    network: &str,
    prefix: Option<PrefixInput>,
) -> Result<SubnetFacts, InvalidInputError> {
    let cidr = parse_network_spec(network, prefix.as_ref())?;
    let facts = cidr.facts();
    log::debug!(
        "calculate({network}) => {cidr} network={} broadcast={} hosts={}",
        facts.network,
        facts.broadcast,
        facts.host_count
    );
    Ok(facts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn calc(network: &str, len: i64) -> Result<SubnetFacts, InvalidInputError> {
        calculate(network, Some(PrefixInput::Bits(len)))
    }

    #[test]
    fn test_prefix_from_json() {
        use serde_json::json;

        assert_eq!(PrefixInput::try_from(json!(24)).unwrap(), PrefixInput::Bits(24));
        assert_eq!(PrefixInput::try_from(json!(24.0)).unwrap(), PrefixInput::Bits(24));
        assert_eq!(
            PrefixInput::try_from(json!("255.255.0.0")).unwrap(),
            PrefixInput::Text("255.255.0.0".to_string())
        );

        for bad in [json!(24.5), json!(-1.0), json!(1e30), json!(true), json!([24])] {
            assert!(
                matches!(
                    PrefixInput::try_from(bad.clone()),
                    Err(InvalidInputError::PrefixLength(_))
                ),
                "{bad} should be rejected"
            );
        }
        // out of range integers are still caught when resolved
        assert!(PrefixInput::try_from(json!(40)).unwrap().resolve().is_err());
    }

    fn as_strings(f: &SubnetFacts) -> [String; 5] {
        [
            f.network.to_string(),
            f.broadcast.to_string(),
            f.first_host.to_string(),
            f.last_host.to_string(),
            f.subnet_mask.to_string(),
        ]
    }

    #[test]
    fn test_class_c() {
        let f = calc("192.168.1.10", 24).unwrap();
        assert_eq!(
            as_strings(&f),
            [
                "192.168.1.0",
                "192.168.1.255",
                "192.168.1.1",
                "192.168.1.254",
                "255.255.255.0"
            ]
        );
        assert_eq!(f.host_count, 254);
    }

    #[test]
    fn test_class_a() {
        let f = calc("10.0.0.1", 8).unwrap();
        assert_eq!(
            as_strings(&f),
            [
                "10.0.0.0",
                "10.255.255.255",
                "10.0.0.1",
                "10.255.255.254",
                "255.0.0.0"
            ]
        );
        assert_eq!(f.host_count, 16777214);
    }

    #[test]
    fn test_single_host() {
        let f = calc("192.168.1.5", 32).unwrap();
        assert_eq!(
            as_strings(&f),
            [
                "192.168.1.5",
                "192.168.1.5",
                "192.168.1.5",
                "192.168.1.5",
                "255.255.255.255"
            ]
        );
        assert_eq!(f.host_count, 0);
    }

    #[test]
    fn test_whole_address_space() {
        let f = calc("172.16.0.0", 0).unwrap();
        assert_eq!(f.network, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(f.broadcast, Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(f.first_host, Ipv4Addr::new(0, 0, 0, 1));
        assert_eq!(f.last_host, Ipv4Addr::new(255, 255, 255, 254));
        assert_eq!(f.host_count, 4294967294);
        assert_eq!(f.subnet_mask, Ipv4Addr::new(0, 0, 0, 0));
    }

    #[test]
    fn test_point_to_point_has_no_hosts() {
        let f = calc("10.0.0.1", 31).unwrap();
        assert_eq!(f.network, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(f.broadcast, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(f.first_host, f.network);
        assert_eq!(f.last_host, f.broadcast);
        assert_eq!(f.host_count, 0);
    }

    #[test]
    fn test_last_octet_boundary() {
        let f = calc("192.168.1.254", 24).unwrap();
        assert_eq!(f.network, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(f.first_host, Ipv4Addr::new(192, 168, 1, 1));

        let f = calc("192.168.1.255", 23).unwrap();
        assert_eq!(f.network, Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(f.first_host, Ipv4Addr::new(192, 168, 0, 1));
        assert_eq!(f.last_host, Ipv4Addr::new(192, 168, 1, 254));
    }

    #[test]
    fn test_invalid_prefix() {
        assert!(matches!(
            calc("10.0.0.0", 33),
            Err(InvalidInputError::PrefixLength(_))
        ));
        assert!(matches!(
            calc("10.0.0.0", -1),
            Err(InvalidInputError::PrefixLength(_))
        ));
        assert!(matches!(
            calculate("10.0.0.0", None),
            Err(InvalidInputError::PrefixLength(_))
        ));
        assert!(matches!(
            calculate("10.0.0.0", Some("abc".into())),
            Err(InvalidInputError::PrefixLength(_))
        ));
        assert!(matches!(
            calculate("10.0.0.0/300", None),
            Err(InvalidInputError::PrefixLength(_))
        ));
    }

    #[test]
    fn test_invalid_address() {
        assert!(matches!(
            calc("999.1.1.1", 24),
            Err(InvalidInputError::Address(_))
        ));
        assert!(matches!(
            calc("10.0.0", 24),
            Err(InvalidInputError::Address(_))
        ));
        assert!(matches!(
            calculate("10.0.0.0/24/8", None),
            Err(InvalidInputError::Address(_))
        ));
    }

    #[test]
    fn test_prefix_checked_before_address() {
        assert!(matches!(
            calc("999.1.1.1", 40),
            Err(InvalidInputError::PrefixLength(_))
        ));
    }

    #[test]
    fn test_embedded_prefix_wins() {
        let f = calc("10.1.2.3/16", 24).unwrap();
        assert_eq!(f.subnet_mask, Ipv4Addr::new(255, 255, 0, 0));
        assert_eq!(f.network, Ipv4Addr::new(10, 1, 0, 0));

        // an empty embedded prefix falls back to the separate one
        let f = calc("10.1.2.3/", 24).unwrap();
        assert_eq!(f.network, Ipv4Addr::new(10, 1, 2, 0));
    }

    #[test]
    fn test_text_and_mask_prefixes() {
        let by_len = calculate("172.16.5.4", Some("20".into())).unwrap();
        let by_mask = calculate("172.16.5.4", Some("255.255.240.0".into())).unwrap();
        let embedded = calculate(" 172.16.5.4/255.255.240.0 ", None).unwrap();
        assert_eq!(by_len, by_mask);
        assert_eq!(by_len, embedded);
        assert_eq!(by_len.network, Ipv4Addr::new(172, 16, 0, 0));

        assert!(matches!(
            calculate("172.16.5.4", Some("255.0.255.0".into())),
            Err(InvalidInputError::SubnetMask(_))
        ));
        assert!(matches!(
            calculate("172.16.5.4", Some("255.255.256.0".into())),
            Err(InvalidInputError::SubnetMask(_))
        ));
    }

    #[test]
    fn test_properties_over_all_prefixes() {
        let addrs = [
            Ipv4Addr::new(0, 0, 0, 0),
            Ipv4Addr::new(10, 0, 255, 255),
            Ipv4Addr::new(192, 168, 1, 254),
            Ipv4Addr::new(255, 255, 255, 255),
            Ipv4Addr::new(172, 31, 128, 1),
        ];
        for addr in addrs {
            for len in 0..=MAX_LENGTH {
                let f = calc(&addr.to_string(), len as i64).unwrap();
                let mask = u32::from(f.subnet_mask);
                let (a, n, b) = (u32::from(addr), u32::from(f.network), u32::from(f.broadcast));
                let (first, last) = (u32::from(f.first_host), u32::from(f.last_host));

                assert_eq!(n, a & mask, "{addr}/{len}");
                assert_eq!(b, n | !mask, "{addr}/{len}");
                assert!(n <= first && first <= last && last <= b, "{addr}/{len}");
                if len <= 30 {
                    assert_eq!(f.host_count, (1u64 << (32 - len)) - 2, "{addr}/{len}");
                    assert_eq!(first, n + 1);
                    assert_eq!(last, b - 1);
                } else {
                    assert_eq!(f.host_count, 0, "{addr}/{len}");
                }
                assert_eq!(mask_to_prefix(f.subnet_mask).unwrap(), len);
                // same input, same output
                assert_eq!(f, calc(&addr.to_string(), len as i64).unwrap());
            }
        }
    }
}
