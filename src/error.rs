//! Error types.
//!
//! [`InvalidInputError`] is the only failure of the subnet calculator.
//! [`ValidationError`] and [`StoreError`] belong to the record layer.

use thiserror::Error;

/// Malformed calculator input. Never transient, never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("invalid IP address: {0}")]
    Address(String),
    #[error("invalid prefix length: {0}")]
    PrefixLength(String),
    #[error("invalid subnet mask: {0}")]
    SubnetMask(String),
}

/// A record field outside its allowed shape or range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("\"{field}\" {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("store file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("store file {path}: path={json_path} error={message}")]
    Json {
        path: String,
        json_path: String,
        message: String,
    },
    #[error("error serializing store: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind,
            id: id.into(),
        }
    }
}
