//! Server configuration from environment.

use std::net::SocketAddr;
use std::time::Duration;

use crate::catalog::CatalogConfig;
use crate::planner::{PlannerConfig, TravelMode};

/// An environment variable that is set but unusable.
#[derive(Debug, thiserror::Error)]
#[error("invalid {var}={value}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Everything `main` needs to start the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub catalog: CatalogConfig,
    pub travel_mode: TravelMode,
    pub planner: PlannerConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// | Variable                | Default           |
    /// |-------------------------|-------------------|
    /// | `ROUTE_SERVER_ADDR`     | `127.0.0.1:3000`  |
    /// | `NODE_CATALOG_PATH`     | `data/nodes.json` |
    /// | `NODE_CATALOG_TTL_SECS` | `60`              |
    /// | `TRAVEL_MODE`           | `walking`         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = parse_var(&lookup, "ROUTE_SERVER_ADDR")?.unwrap_or_else(default_addr);

        let mut catalog = CatalogConfig::default();
        if let Some(path) = lookup("NODE_CATALOG_PATH") {
            catalog.path = path.into();
        }
        if let Some(secs) = parse_var::<u64>(&lookup, "NODE_CATALOG_TTL_SECS")? {
            catalog.ttl = Duration::from_secs(secs);
        }

        let travel_mode: TravelMode = parse_var(&lookup, "TRAVEL_MODE")?.unwrap_or_default();
        let planner = PlannerConfig::with_travel(travel_mode.model());

        Ok(Self {
            addr,
            catalog,
            travel_mode,
            planner,
        })
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };

    value.trim().parse().map(Some).map_err(|e: T::Err| ConfigError {
        var,
        reason: e.to_string(),
        value,
    })
}
