//! Project store.
//!
//! Holds every project and its child records in memory and rewrites a JSON
//! file after each change when opened with a path:
//! - [`cache`] - reading and writing the store file

mod cache;

use crate::error::{InvalidInputError, StoreError};
use crate::models::{
    Connection, ConnectionInput, Device, DeviceInput, Project, ProjectInput, SubnetFacts,
    SubnetInput, SubnetRecord, Vlan, VlanInput,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub use cache::{read_store_file, write_store_file};

/// Everything the store persists.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Data {
    pub projects: Vec<Project>,
    pub devices: Vec<Device>,
    pub connections: Vec<Connection>,
    pub vlans: Vec<Vlan>,
    pub subnets: Vec<SubnetRecord>,
    /// Highest VLAN row id handed out so far.
    pub last_vlan_row: i64,
}

#[derive(Debug, Default)]
pub struct ProjectStore {
    path: Option<PathBuf>,
    data: Data,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl ProjectStore {
    /// Store without a backing file.
    pub fn in_memory() -> ProjectStore {
        ProjectStore::default()
    }

    /// Load the store from `path`; a missing file starts an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<ProjectStore, StoreError> {
        let path = path.as_ref().to_path_buf();
        let data = read_store_file(&path)?;
        log::info!(
            "Opened store {} with {} projects",
            path.display(),
            data.projects.len()
        );
        Ok(ProjectStore {
            path: Some(path),
            data,
        })
    }

    /// Apply `change` to a copy of the data and keep it only once the store
    /// file has been written.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut Data) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut next = self.data.clone();
        let out = change(&mut next)?;
        if let Some(path) = &self.path {
            write_store_file(path, &next)?;
        }
        self.data = next;
        Ok(out)
    }

    fn require_project(&self, project_id: &str) -> Result<(), StoreError> {
        if self.data.projects.iter().any(|p| p.id == project_id) {
            Ok(())
        } else {
            Err(StoreError::not_found("project", project_id))
        }
    }

    /// Projects, most recently updated first.
    pub fn list_projects(&self) -> Vec<Project> {
        let mut projects = self.data.projects.clone();
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        projects
    }

    pub fn get_project(&self, id: &str) -> Option<Project> {
        self.data.projects.iter().find(|p| p.id == id).cloned()
    }

    pub fn create_project(&mut self, input: ProjectInput) -> Result<Project, StoreError> {
        let now = Utc::now();
        let project = Project {
            id: new_id(),
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        };
        log::info!("create project {} '{}'", project.id, project.name);
        self.commit(|data| {
            data.projects.push(project.clone());
            Ok(project)
        })
    }

    pub fn list_devices(&self, project_id: &str) -> Vec<Device> {
        self.data
            .devices
            .iter()
            .filter(|d| d.project_id == project_id)
            .cloned()
            .collect()
    }

    pub fn create_device(
        &mut self,
        project_id: &str,
        input: DeviceInput,
    ) -> Result<Device, StoreError> {
        self.require_project(project_id)?;
        let device = Device::new(new_id(), project_id.to_string(), input);
        log::info!("create device {} '{}' ({})", device.id, device.name, device.kind);
        self.commit(|data| {
            data.devices.push(device.clone());
            Ok(device)
        })
    }

    pub fn update_device(&mut self, id: &str, input: DeviceInput) -> Result<Device, StoreError> {
        self.commit(|data| {
            let device = data
                .devices
                .iter_mut()
                .find(|d| d.id == id)
                .ok_or_else(|| StoreError::not_found("device", id))?;
            device.apply(input);
            Ok(device.clone())
        })
    }

    /// Delete a device and every connection attached to it.
    pub fn delete_device(&mut self, id: &str) -> Result<(), StoreError> {
        self.commit(|data| {
            let before = data.devices.len();
            data.devices.retain(|d| d.id != id);
            if data.devices.len() == before {
                return Err(StoreError::not_found("device", id));
            }
            let connections = data.connections.len();
            data.connections.retain(|c| !c.touches(id));
            log::info!(
                "delete device {id}, dropped {} connections",
                connections - data.connections.len()
            );
            Ok(())
        })
    }

    pub fn list_connections(&self, project_id: &str) -> Vec<Connection> {
        self.data
            .connections
            .iter()
            .filter(|c| c.project_id == project_id)
            .cloned()
            .collect()
    }

    pub fn create_connection(
        &mut self,
        project_id: &str,
        input: ConnectionInput,
    ) -> Result<Connection, StoreError> {
        self.require_project(project_id)?;
        let connection = Connection::new(new_id(), project_id.to_string(), input);
        self.commit(|data| {
            data.connections.push(connection.clone());
            Ok(connection)
        })
    }

    /// VLANs of a project ordered by tag.
    pub fn list_vlans(&self, project_id: &str) -> Vec<Vlan> {
        let mut vlans: Vec<Vlan> = self
            .data
            .vlans
            .iter()
            .filter(|v| v.project_id == project_id)
            .cloned()
            .collect();
        vlans.sort_by_key(|v| v.vlan_id);
        vlans
    }

    pub fn create_vlan(&mut self, project_id: &str, input: VlanInput) -> Result<Vlan, StoreError> {
        self.require_project(project_id)?;
        self.commit(|data| {
            data.last_vlan_row += 1;
            let vlan = Vlan::new(data.last_vlan_row, project_id.to_string(), input);
            data.vlans.push(vlan.clone());
            Ok(vlan)
        })
    }

    pub fn list_subnets(&self, project_id: &str) -> Vec<SubnetRecord> {
        self.data
            .subnets
            .iter()
            .filter(|s| s.project_id == project_id)
            .cloned()
            .collect()
    }

    pub fn create_subnet(
        &mut self,
        project_id: &str,
        input: SubnetInput,
    ) -> Result<SubnetRecord, StoreError> {
        self.require_project(project_id)?;
        let subnet = SubnetRecord::new(new_id(), project_id.to_string(), input);
        self.commit(|data| {
            data.subnets.push(subnet.clone());
            Ok(subnet)
        })
    }

    /// Calculator output for a stored subnet.
    ///
    /// The outer error is a missing subnet, the inner one a record whose
    /// network or mask doesn't parse.
    pub fn subnet_facts(
        &self,
        id: &str,
    ) -> Result<Result<SubnetFacts, InvalidInputError>, StoreError> {
        self.data
            .subnets
            .iter()
            .find(|s| s.id == id)
            .map(SubnetRecord::facts)
            .ok_or_else(|| StoreError::not_found("subnet", id))
    }
}
