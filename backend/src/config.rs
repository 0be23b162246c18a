use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DATABASE_URL: &str = "sqlite:reservations.db";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_STATIC_DIR: &str = "../frontend/dist";

/// Server settings, read once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    /// Origin the frontend is served from during development
    pub allowed_origin: String,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Defaults overridden by `RESERVATIONS_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("RESERVATIONS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid RESERVATIONS_BIND_ADDR: {}", bind_addr))?;

        Ok(Self {
            bind_addr,
            database_url: lookup("RESERVATIONS_DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            allowed_origin: lookup("RESERVATIONS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
            static_dir: lookup("RESERVATIONS_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.database_url, "sqlite:reservations.db");
        assert_eq!(config.allowed_origin, "http://localhost:8080");
        assert_eq!(config.static_dir, PathBuf::from("../frontend/dist"));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("RESERVATIONS_BIND_ADDR", "0.0.0.0:8000"),
            ("RESERVATIONS_DATABASE_URL", "sqlite::memory:"),
        ]
        .into_iter()
        .collect();

        let config = ServerConfig::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.allowed_origin, "http://localhost:8080");
    }

    #[test]
    fn test_invalid_bind_addr() {
        let result = ServerConfig::from_lookup(|key| {
            (key == "RESERVATIONS_BIND_ADDR").then(|| "not-an-address".to_string())
        });
        assert!(result.is_err());
    }
}
