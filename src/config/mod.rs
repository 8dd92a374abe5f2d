//! Configuration loading from the process environment

use crate::core::error::StartupError;
use crate::core::gateway::DEFAULT_STORE_TIMEOUT;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE: &str = "orderdb";
pub const DEFAULT_COLLECTION: &str = "orders";

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// MongoDB connection string (env: `MONGODB_URI`, required)
    pub mongodb_uri: String,

    /// Listen port (env: `PORT`)
    pub port: u16,

    /// Database holding the order collection (env: `ORDER_DB_NAME`)
    pub database: String,

    /// Order collection name (env: `ORDER_COLLECTION`)
    pub collection: String,

    /// Bound on each store operation (env: `ORDER_INSERT_TIMEOUT_SECS`)
    pub store_timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let mongodb_uri = var("MONGODB_URI").ok_or(StartupError::MissingVar("MONGODB_URI"))?;

        let port = match var("PORT") {
            Some(raw) => parse_var("PORT", &raw)?,
            None => DEFAULT_PORT,
        };

        let store_timeout = match var("ORDER_INSERT_TIMEOUT_SECS") {
            Some(raw) => match parse_var::<u64>("ORDER_INSERT_TIMEOUT_SECS", &raw)? {
                0 => {
                    return Err(StartupError::InvalidVar {
                        name: "ORDER_INSERT_TIMEOUT_SECS",
                        value: raw,
                        message: "must be at least 1 second".to_string(),
                    });
                }
                secs => Duration::from_secs(secs),
            },
            None => DEFAULT_STORE_TIMEOUT,
        };

        Ok(Self {
            mongodb_uri,
            port,
            database: var("ORDER_DB_NAME").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            collection: var("ORDER_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            store_timeout,
        })
    }

    /// Address the HTTP listener binds to (all interfaces)
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_var<T>(name: &'static str, raw: &str) -> Result<T, StartupError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| StartupError::InvalidVar {
        name,
        value: raw.to_string(),
        message: e.to_string(),
    })
}
