//! JSON file persistence for the project store.

use super::Data;
use crate::error::StoreError;
use std::path::Path;

/// Read store data from `path`, or start empty if the file doesn't exist.
pub fn read_store_file(path: &Path) -> Result<Data, StoreError> {
    let display = path.display().to_string();

    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("Store file not found: {display}, starting empty");
            return Ok(Data::default());
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: display,
                source,
            })
        }
    };

    log::info!("Reading from store file: {display}");
    let mut deserializer = serde_json::Deserializer::from_str(&json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("Error parsing store file {display}");
        StoreError::Json {
            path: display.clone(),
            json_path: e.path().to_string(),
            message: e.inner().to_string(),
        }
    })
}

/// Rewrite the store file with the current data.
pub fn write_store_file(path: &Path, data: &Data) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(data)?;
    log::debug!("Writing store file: {} ({} bytes)", path.display(), json.len());
    std::fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("{name}_{}.json", std::process::id()))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let data = read_store_file(&temp_file("netplan_missing")).expect("missing file is empty");
        assert!(data.projects.is_empty());
        assert_eq!(data.last_vlan_row, 0);
    }

    #[test]
    fn test_bad_json_reports_path() {
        let path = temp_file("netplan_bad_json");
        std::fs::write(&path, r#"{"projects": [{"id": 5}]}"#).unwrap();

        let err = read_store_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        match err {
            StoreError::Json { json_path, .. } => assert_eq!(json_path, "projects[0].id"),
            other => panic!("unexpected error {other}"),
        }
    }
}
