//! Deployment subsystem.
//!
//! # Data Flow
//! ```text
//! ContractArtifact
//!     → factory.rs (creation tx with fixed gas: 1 gwei, 3,000,000)
//!     → runner.rs (submit → poll receipt → report)
//!     → stdout: "✅ <Contract> deployed to: <address>"
//! ```
//!
//! # Design Decisions
//! - All-or-nothing: every failure collapses into [`DeployError`] and exit code 1
//! - No retry; re-running deploys a second, independent instance
//! - The confirmation wait is bounded by a timeout

pub mod factory;
pub mod runner;

pub use factory::{ContractFactory, DeploymentRequest};
pub use runner::{ConfirmationSettings, Deployer, Deployment};

use thiserror::Error;

use crate::blockchain::{ArtifactError, BlockchainError};
use crate::config::ConfigError;

/// Exit status reported for any failed deployment.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Top-level error: "deployment failed".
#[derive(Debug, Error)]
pub enum DeployError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Blockchain(#[from] BlockchainError),

    #[error("failed to write result: {0}")]
    Output(#[from] std::io::Error),
}

impl DeployError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }
}
