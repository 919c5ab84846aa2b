//! Stored subnet data model.

use super::device::default_color;
use super::SubnetFacts;
use crate::error::InvalidInputError;
use crate::processing::calculate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A subnet recorded in a project.
///
/// `network` and `subnet_mask` are kept as entered; the mask may be a prefix
/// length ("24") or dotted-decimal ("255.255.255.0").
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubnetRecord {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub network: String,
    pub subnet_mask: String,
    pub gateway: Option<String>,
    pub dns_servers: Option<String>,
    pub vlan_id: Option<i64>,
    pub color: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of a subnet create request.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SubnetInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub subnet_mask: String,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub dns_servers: Option<String>,
    #[serde(default)]
    pub vlan_id: Option<i64>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl SubnetRecord {
    pub fn new(id: String, project_id: String, input: SubnetInput) -> SubnetRecord {
        SubnetRecord {
            id,
            project_id,
            name: input.name,
            network: input.network,
            subnet_mask: input.subnet_mask,
            gateway: input.gateway,
            dns_servers: input.dns_servers,
            vlan_id: input.vlan_id,
            color: input.color,
            description: input.description,
            created_at: Utc::now(),
        }
    }

    /// Run the calculator over the stored network and mask.
    pub fn facts(&self) -> Result<SubnetFacts, InvalidInputError> {
        calculate(&self.network, Some(self.subnet_mask.as_str().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn record(network: &str, mask: &str) -> SubnetRecord {
        let input: SubnetInput = serde_json::from_value(serde_json::json!({
            "name": "office",
            "network": network,
            "subnet_mask": mask,
        }))
        .unwrap();
        SubnetRecord::new("s1".into(), "p1".into(), input)
    }

    #[test]
    fn test_facts_from_dotted_mask() {
        let facts = record("192.168.10.0", "255.255.255.0").facts().unwrap();
        assert_eq!(facts.broadcast, Ipv4Addr::new(192, 168, 10, 255));
        assert_eq!(facts.host_count, 254);
    }

    #[test]
    fn test_facts_from_prefix_mask() {
        let facts = record("10.20.0.0", "16").facts().unwrap();
        assert_eq!(facts.subnet_mask, Ipv4Addr::new(255, 255, 0, 0));
        assert_eq!(facts.last_host, Ipv4Addr::new(10, 20, 255, 254));
    }

    #[test]
    fn test_facts_from_bad_record() {
        assert!(record("10.20.0.0", "255.0.255.0").facts().is_err());
        assert!(record("office-lan", "24").facts().is_err());
    }
}
