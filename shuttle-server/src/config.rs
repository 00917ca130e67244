//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

use crate::planner::PlannerConfig;

/// Listen address when `SHUTTLE_ADDR` is unset.
pub const DEFAULT_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
    3000,
);

pub const ADDR_VAR: &str = "SHUTTLE_ADDR";
pub const NETWORK_VAR: &str = "SHUTTLE_NETWORK";
pub const MAX_ITERATIONS_VAR: &str = "SHUTTLE_MAX_ITERATIONS";

/// Everything the binary needs to start serving.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to bind.
    pub addr: SocketAddr,

    /// Network document to load; the built-in campus network if `None`.
    pub network_path: Option<PathBuf>,

    pub planner: PlannerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR,
            network_path: None,
            planner: PlannerConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`.
    ///
    /// Values that fail to parse are logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ADDR_VAR) {
            match raw.trim().parse() {
                Ok(addr) => config.addr = addr,
                Err(e) => warn!(
                    var = ADDR_VAR,
                    value = %raw,
                    error = %e,
                    "ignoring invalid address"
                ),
            }
        }

        if let Some(raw) = lookup(NETWORK_VAR).filter(|v| !v.trim().is_empty()) {
            config.network_path = Some(PathBuf::from(raw.trim()));
        }

        if let Some(raw) = lookup(MAX_ITERATIONS_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.planner = PlannerConfig::new(n),
                Ok(_) => warn!(var = MAX_ITERATIONS_VAR, "ignoring zero iteration cap"),
                Err(e) => warn!(
                    var = MAX_ITERATIONS_VAR,
                    value = %raw,
                    error = %e,
                    "ignoring invalid iteration cap"
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::planner::DEFAULT_MAX_ITERATIONS;

    fn from_pairs(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = from_pairs(&[]);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.network_path, None);
        assert_eq!(config.planner.max_iterations, DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn reads_all_values() {
        let config = from_pairs(&[
            (ADDR_VAR, "0.0.0.0:8080"),
            (NETWORK_VAR, "/srv/network.json"),
            (MAX_ITERATIONS_VAR, " 250 "),
        ]);
        assert_eq!(config.addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.network_path, Some(PathBuf::from("/srv/network.json")));
        assert_eq!(config.planner.max_iterations, 250);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = from_pairs(&[
            (ADDR_VAR, "not an address"),
            (NETWORK_VAR, "   "),
            (MAX_ITERATIONS_VAR, "lots"),
        ]);
        assert_eq!(config, ServerConfig::default());

        let config = from_pairs(&[(MAX_ITERATIONS_VAR, "0")]);
        assert_eq!(config.planner.max_iterations, DEFAULT_MAX_ITERATIONS);
    }
}
