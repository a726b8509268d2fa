//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from an optional TOML
//! file. Every field has a default, so the empty document describes the
//! built-in `apechain` / `curtis` setup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Environment variable holding the deployer's private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "VITE_APECHAIN_PRIVATE_KEY";

/// Environment variable holding the JSON-RPC endpoint.
pub const RPC_URL_ENV_VAR: &str = "VITE_APECHAIN_RPC_URL";

/// Network selected when none is given.
pub const DEFAULT_NETWORK: &str = "apechain";

/// Root configuration for the deployer.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DeployerConfig {
    /// Network alias → where to find its URL and key.
    pub networks: BTreeMap<String, NetworkConfig>,

    /// What to deploy and how long to wait for it.
    pub deployment: DeploymentConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for DeployerConfig {
    fn default() -> Self {
        let networks = ["apechain", "curtis"]
            .into_iter()
            .map(|name| (name.to_string(), NetworkConfig::default()))
            .collect();

        Self {
            networks,
            deployment: DeploymentConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Per-network connection settings.
///
/// Secrets never live in the file itself, only the names of the variables
/// that carry them.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct NetworkConfig {
    /// Variable carrying the RPC URL.
    pub rpc_url_env: String,

    /// Variable carrying the hex private key.
    pub private_key_env: String,

    /// Expected chain id; verified before submitting when set.
    pub chain_id: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url_env: RPC_URL_ENV_VAR.to_string(),
            private_key_env: PRIVATE_KEY_ENV_VAR.to_string(),
            chain_id: None,
        }
    }
}

/// Deployment settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeploymentConfig {
    /// Contract name, resolved against the artifacts directory.
    pub contract: String,

    /// Root of the compiled artifacts.
    pub artifacts_dir: PathBuf,

    /// Deadline for the deployment to be confirmed, in seconds.
    pub confirmation_timeout_secs: u64,

    /// Receipt polling interval in milliseconds.
    pub poll_interval_ms: u64,

    /// Blocks on top of the inclusion block before reporting success.
    pub confirmations: u32,

    /// Per-request RPC timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            contract: "LandForm".to_string(),
            artifacts_dir: PathBuf::from("artifacts"),
            confirmation_timeout_secs: 300,
            poll_interval_ms: 2000,
            confirmations: 1,
            rpc_timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "landform_deployer=info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_networks_share_variables() {
        let config = DeployerConfig::default();
        assert_eq!(config.networks.len(), 2);
        assert_eq!(config.networks["apechain"], config.networks["curtis"]);
        assert_eq!(config.networks["curtis"].private_key_env, PRIVATE_KEY_ENV_VAR);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config: DeployerConfig = toml::from_str("").unwrap();
        assert_eq!(config, DeployerConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config: DeployerConfig = toml::from_str(
            r#"
            [networks.curtis]
            chain_id = 33111

            [deployment]
            confirmation_timeout_secs = 60
            "#,
        )
        .unwrap();

        // An explicit table replaces the built-in map.
        assert_eq!(config.networks.len(), 1);
        assert_eq!(config.networks["curtis"].chain_id, Some(33111));
        assert_eq!(config.networks["curtis"].rpc_url_env, RPC_URL_ENV_VAR);
        assert_eq!(config.deployment.confirmation_timeout_secs, 60);
        assert_eq!(config.deployment.contract, "LandForm");
    }
}
