//! Device and connection data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default link speed in Mbit/s.
pub const DEFAULT_SPEED: i64 = 1000;
/// Default color for connections, VLANs and subnets.
pub const DEFAULT_COLOR: &str = "#3498db";

pub(crate) fn default_speed() -> i64 {
    DEFAULT_SPEED
}

pub(crate) fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Kind of a device in the topology.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Pc,
    Handy,
    Server,
    Router,
    Modem,
    Firewall,
    Cluster,
    Vm,
    Nas,
    SwitchManaged,
    SwitchUnmanaged,
}

/// Display metadata attached to a [`DeviceKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceKindInfo {
    pub name: &'static str,
    pub color: &'static str,
}

static DEVICE_KINDS: [(DeviceKind, DeviceKindInfo); 11] = [
    (DeviceKind::Pc, DeviceKindInfo { name: "PC", color: "#3498db" }),
    (DeviceKind::Handy, DeviceKindInfo { name: "Handy", color: "#e74c3c" }),
    (DeviceKind::Server, DeviceKindInfo { name: "Server", color: "#2ecc71" }),
    (DeviceKind::Router, DeviceKindInfo { name: "Router", color: "#f39c12" }),
    (DeviceKind::Modem, DeviceKindInfo { name: "Modem", color: "#9b59b6" }),
    (DeviceKind::Firewall, DeviceKindInfo { name: "Firewall", color: "#e67e22" }),
    (DeviceKind::Cluster, DeviceKindInfo { name: "Cluster", color: "#1abc9c" }),
    (DeviceKind::Vm, DeviceKindInfo { name: "VM", color: "#34495e" }),
    (DeviceKind::Nas, DeviceKindInfo { name: "NAS", color: "#95a5a6" }),
    (
        DeviceKind::SwitchManaged,
        DeviceKindInfo { name: "Switch (Managed)", color: "#16a085" },
    ),
    (
        DeviceKind::SwitchUnmanaged,
        DeviceKindInfo { name: "Switch (Unmanaged)", color: "#7f8c8d" },
    ),
];

impl DeviceKind {
    /// Every kind, in palette order.
    pub fn all() -> impl Iterator<Item = DeviceKind> {
        DEVICE_KINDS.iter().map(|(kind, _)| *kind)
    }

    pub fn info(self) -> DeviceKindInfo {
        DEVICE_KINDS
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, info)| *info)
            .unwrap_or(DeviceKindInfo {
                name: "Unknown",
                color: "#666666",
            })
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().name)
    }
}

/// A device placed on the diagram.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Device {
    pub id: String,
    pub project_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    pub x: i64,
    pub y: i64,
    pub ip_address: Option<String>,
    pub mac_address: Option<String>,
    pub vlan_id: Option<i64>,
    pub speed: i64,
    pub managed: bool,
    pub properties: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of a device create or update request.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DeviceInput {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    #[serde(default)]
    pub x: i64,
    #[serde(default)]
    pub y: i64,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub mac_address: Option<String>,
    #[serde(default)]
    pub vlan_id: Option<i64>,
    #[serde(default = "default_speed")]
    pub speed: i64,
    #[serde(default)]
    pub managed: bool,
    #[serde(default)]
    pub properties: Option<String>,
}

impl Device {
    pub fn new(id: String, project_id: String, input: DeviceInput) -> Device {
        Device {
            id,
            project_id,
            name: input.name,
            kind: input.kind,
            x: input.x,
            y: input.y,
            ip_address: input.ip_address,
            mac_address: input.mac_address,
            vlan_id: input.vlan_id,
            speed: input.speed,
            managed: input.managed,
            properties: input.properties,
            created_at: Utc::now(),
        }
    }

    /// Overwrite every editable field, keeping identity and timestamps.
    pub fn apply(&mut self, input: DeviceInput) {
        self.name = input.name;
        self.kind = input.kind;
        self.x = input.x;
        self.y = input.y;
        self.ip_address = input.ip_address;
        self.mac_address = input.mac_address;
        self.vlan_id = input.vlan_id;
        self.speed = input.speed;
        self.managed = input.managed;
        self.properties = input.properties;
    }
}

/// A link between two devices.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Connection {
    pub id: String,
    pub project_id: String,
    pub from_device_id: String,
    pub to_device_id: String,
    pub from_port: Option<i64>,
    pub to_port: Option<i64>,
    pub speed: i64,
    pub vlan_id: Option<i64>,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// Body of a connection create request.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ConnectionInput {
    #[serde(default)]
    pub from_device_id: String,
    #[serde(default)]
    pub to_device_id: String,
    #[serde(default)]
    pub from_port: Option<i64>,
    #[serde(default)]
    pub to_port: Option<i64>,
    #[serde(default = "default_speed")]
    pub speed: i64,
    #[serde(default)]
    pub vlan_id: Option<i64>,
    #[serde(default = "default_color")]
    pub color: String,
}

impl Connection {
    pub fn new(id: String, project_id: String, input: ConnectionInput) -> Connection {
        Connection {
            id,
            project_id,
            from_device_id: input.from_device_id,
            to_device_id: input.to_device_id,
            from_port: input.from_port,
            to_port: input.to_port,
            speed: input.speed,
            vlan_id: input.vlan_id,
            color: input.color,
            created_at: Utc::now(),
        }
    }

    pub fn touches(&self, device_id: &str) -> bool {
        self.from_device_id == device_id || self.to_device_id == device_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_kind_wire_names() {
        let kinds: Vec<String> = DeviceKind::all()
            .map(|k| serde_json::to_string(&k).unwrap())
            .collect();
        assert_eq!(kinds.len(), 11);
        assert_eq!(kinds[0], "\"pc\"");
        assert_eq!(kinds[9], "\"switch_managed\"");
        assert_eq!(kinds[10], "\"switch_unmanaged\"");

        assert!(serde_json::from_str::<DeviceKind>("\"toaster\"").is_err());
    }

    #[test]
    fn test_device_kind_info() {
        assert_eq!(DeviceKind::Router.info().color, "#f39c12");
        assert_eq!(DeviceKind::SwitchManaged.to_string(), "Switch (Managed)");
        assert_eq!(DeviceKind::SwitchUnmanaged.info().name, "Switch (Unmanaged)");
    }

    #[test]
    fn test_device_input_defaults() {
        let input: DeviceInput =
            serde_json::from_str(r#"{"name": "pc-01", "type": "pc"}"#).unwrap();
        assert_eq!(input.x, 0);
        assert_eq!(input.speed, DEFAULT_SPEED);
        assert!(!input.managed);
        assert!(input.vlan_id.is_none());

        let device = Device::new("d1".into(), "p1".into(), input);
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(json["type"], "pc");
        assert_eq!(json["project_id"], "p1");
    }

    #[test]
    fn test_connection_defaults() {
        let input: ConnectionInput =
            serde_json::from_str(r#"{"from_device_id": "a", "to_device_id": "b"}"#).unwrap();
        assert_eq!(input.color, DEFAULT_COLOR);
        let conn = Connection::new("c1".into(), "p1".into(), input);
        assert!(conn.touches("a"));
        assert!(conn.touches("b"));
        assert!(!conn.touches("c"));
    }
}
