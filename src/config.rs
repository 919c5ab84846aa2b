//! Runtime settings.
//!
//! Values come from the environment (a `.env` file is loaded first by the
//! binary) and fall back to the constants below.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Port the API listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 80;
/// Store file used when `NETPLAN_STORE` is unset.
pub const DEFAULT_STORE_FILE: &str = "network_planner.json";
/// log4rs configuration read at startup.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";
/// Upper bound for request bodies accepted by the API.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub store_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            store_file: PathBuf::from(DEFAULT_STORE_FILE),
        }
    }
}

impl Config {
    /// Read `PORT` and `NETPLAN_STORE` from the process environment.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Config {
        let defaults = Config::default();
        let port = match lookup("PORT") {
            Some(port) => port.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT={port}, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => defaults.port,
        };
        let store_file = lookup("NETPLAN_STORE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.store_file);
        Config { port, store_file }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::from_lookup(lookup(&[]));
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:80");
    }

    #[test]
    fn test_env_overrides() {
        let cfg = Config::from_lookup(lookup(&[("PORT", "3001"), ("NETPLAN_STORE", "/tmp/p.json")]));
        assert_eq!(cfg.port, 3001);
        assert_eq!(cfg.store_file, PathBuf::from("/tmp/p.json"));
    }

    #[test]
    fn test_bad_port_falls_back() {
        let cfg = Config::from_lookup(lookup(&[("PORT", "eighty")]));
        assert_eq!(cfg.port, DEFAULT_PORT);
    }
}
