// Service configuration read from the environment.
//
// Variables
// - HOST: interface to bind, default 0.0.0.0.
// - PORT: TCP port, default 3000.
// - LOG_LEVEL: default tracing filter when RUST_LOG is unset, default info.

use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ServerConfig::default();

        let host = match lookup("HOST") {
            Some(value) => parse_var("HOST", value)?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => parse_var("PORT", value)?,
            None => defaults.port,
        };

        let log_level = lookup("LOG_LEVEL")
            .map(|level| level.to_lowercase())
            .unwrap_or(defaults.log_level);

        Ok(ServerConfig {
            host,
            port,
            log_level,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T>(name: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let parsed = value.parse::<T>();
    parsed.map_err(|e| ConfigError::Invalid {
        name,
        value,
        reason: e.to_string(),
    })
}
