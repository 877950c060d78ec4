//! Server Configuration
//!
//! Read from the environment (after `.env` has been loaded).

use anyhow::{Context, bail};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// CORS allow-list
    pub frontend_origins: Vec<String>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset and empty values take defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let Some(database_url) = get("DATABASE_URL") else {
            bail!("DATABASE_URL must be set in environment");
        };

        let host = match get("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("HOST is not an IP address: {raw}"))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;
        let max_connections = parse_or(
            get("DATABASE_MAX_CONNECTIONS"),
            "DATABASE_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }
        let acquire_timeout_secs = parse_or(
            get("DATABASE_ACQUIRE_TIMEOUT_SECS"),
            "DATABASE_ACQUIRE_TIMEOUT_SECS",
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        )?;

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect();

        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            frontend_origins,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("DATABASE_URL", "postgres://localhost/blog")]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.frontend_origins.len(), 2);
    }

    #[test]
    fn test_database_url_required() {
        assert!(config(&[]).is_err());
        assert!(config(&[("DATABASE_URL", "  ")]).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("DATABASE_URL", "postgres://db/blog"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_MAX_CONNECTIONS", "20"),
            ("FRONTEND_ORIGINS", "https://a.example, ,https://b.example"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.max_connections, 20);
        assert_eq!(
            config.frontend_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let base = ("DATABASE_URL", "postgres://db/blog");
        assert!(config(&[base, ("PORT", "http")]).is_err());
        assert!(config(&[base, ("PORT", "70000")]).is_err());
        assert!(config(&[base, ("HOST", "localhost:1")]).is_err());
        assert!(config(&[base, ("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
    }
}
