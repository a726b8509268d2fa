//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::config::schema::{DeployerConfig, DEFAULT_NETWORK};

#[derive(Debug, Clone, Parser)]
#[command(name = "landform-deployer")]
#[command(version, about = "Deploy the LandForm contract to an ApeChain network", long_about = None)]
pub struct Cli {
    /// Network alias from the configuration.
    #[arg(short, long, env = "DEPLOY_NETWORK", default_value = DEFAULT_NETWORK)]
    pub network: String,

    /// Contract to deploy (overrides `deployment.contract`).
    #[arg(long, env = "DEPLOY_CONTRACT")]
    pub contract: Option<String>,

    /// Compiled artifacts directory (overrides `deployment.artifacts_dir`).
    #[arg(long, env = "DEPLOY_ARTIFACTS")]
    pub artifacts: Option<PathBuf>,

    /// Optional TOML configuration file.
    #[arg(short, long, env = "DEPLOY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seconds to wait for the deployment to be confirmed.
    #[arg(long, env = "DEPLOY_CONFIRMATION_TIMEOUT_SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub confirmation_timeout_secs: Option<u64>,

    /// Resolve network and artifact, then stop before submitting.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut DeployerConfig) {
        let deployment = &mut config.deployment;
        if let Some(contract) = &self.contract {
            deployment.contract = contract.clone();
        }
        if let Some(artifacts) = &self.artifacts {
            deployment.artifacts_dir = artifacts.clone();
        }
        if let Some(secs) = self.confirmation_timeout_secs {
            deployment.confirmation_timeout_secs = secs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["landform-deployer"]).unwrap();
        assert_eq!(cli.network, "apechain");
        assert!(!cli.dry_run);
        assert!(cli.contract.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "landform-deployer",
            "--network",
            "curtis",
            "--contract",
            "Parcel",
            "--confirmation-timeout-secs",
            "45",
        ])
        .unwrap();

        let mut config = DeployerConfig::default();
        cli.apply(&mut config);
        assert_eq!(cli.network, "curtis");
        assert_eq!(config.deployment.contract, "Parcel");
        assert_eq!(config.deployment.confirmation_timeout_secs, 45);
        assert_eq!(config.deployment.artifacts_dir, PathBuf::from("artifacts"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Cli::try_parse_from(["landform-deployer", "--confirmation-timeout-secs", "0"]);
        assert!(result.is_err());
    }
}
