//! Resolution of network aliases into connection descriptors.
//!
//! The table in [`DeployerConfig`] only names environment variables. A
//! [`NetworkDescriptor`] is built by reading those variables through an
//! injectable lookup, parsing the URL and the private key on the way.

use std::collections::BTreeMap;
use url::Url;

use crate::blockchain::Wallet;
use crate::config::loader::ConfigError;
use crate::config::schema::{DeployerConfig, NetworkConfig};

/// A fully resolved network: where to connect and who signs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkDescriptor {
    pub name: String,
    pub rpc_url: Url,
    pub wallet: Wallet,
    pub chain_id: Option<u64>,
}

/// Alias → network settings, resolved on demand.
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    networks: BTreeMap<String, NetworkConfig>,
}

impl NetworkRegistry {
    pub fn new(config: &DeployerConfig) -> Self {
        Self {
            networks: config.networks.clone(),
        }
    }

    /// Resolve `name` using `lookup` to read environment variables.
    ///
    /// Production passes `|k| std::env::var(k).ok()`.
    pub fn resolve<F>(&self, name: &str, lookup: F) -> Result<NetworkDescriptor, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = self.networks.get(name).ok_or_else(|| ConfigError::UnknownNetwork {
            name: name.to_string(),
            known: self.networks.keys().cloned().collect(),
        })?;

        let read = |var: &str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnv {
                    network: name.to_string(),
                    var: var.to_string(),
                })
        };

        let raw_url = read(&network.rpc_url_env)?;
        let rpc_url = parse_rpc_url(&network.rpc_url_env, &raw_url)?;

        let raw_key = read(&network.private_key_env)?;
        let wallet = Wallet::from_private_key(&raw_key).map_err(|_| ConfigError::InvalidEnv {
            var: network.private_key_env.clone(),
            reason: "not a valid hex-encoded secp256k1 private key".to_string(),
        })?;

        Ok(NetworkDescriptor {
            name: name.to_string(),
            rpc_url,
            wallet,
            chain_id: network.chain_id,
        })
    }
}

fn parse_rpc_url(var: &str, raw: &str) -> Result<Url, ConfigError> {
    let url: Url = raw.trim().parse().map_err(|e: url::ParseError| ConfigError::InvalidEnv {
        var: var.to_string(),
        reason: format!("not a valid URL ({})", e),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEnv {
            var: var.to_string(),
            reason: format!("unsupported scheme '{}', expected http or https", other),
        }),
    }
}
