//! VLAN data model.

use super::device::default_color;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A VLAN definition. `id` is a per-store row number, `vlan_id` the 802.1Q tag.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vlan {
    pub id: i64,
    pub project_id: String,
    pub name: String,
    pub vlan_id: i64,
    pub subnet: String,
    pub color: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of a VLAN create request.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VlanInput {
    #[serde(default)]
    pub name: String,
    pub vlan_id: i64,
    #[serde(default)]
    pub subnet: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Vlan {
    pub fn new(id: i64, project_id: String, input: VlanInput) -> Vlan {
        Vlan {
            id,
            project_id,
            name: input.name,
            vlan_id: input.vlan_id,
            subnet: input.subnet,
            color: input.color,
            description: input.description,
            created_at: Utc::now(),
        }
    }
}
