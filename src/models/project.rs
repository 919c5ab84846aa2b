//! Project data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project owns its devices, connections, VLANs and subnets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of a project create request.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ProjectInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
