//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment Variables (private key, RPC URL)
//!     → wallet.rs (key parsing)
//!     → client.rs (RPC connection with timeouts, signing provider)
//! Artifacts directory
//!     → artifact.rs (creation bytecode + ABI)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod artifact;
pub mod client;
pub mod types;
pub mod wallet;

pub use artifact::{ArtifactError, ContractArtifact};
pub use client::{DeploymentClient, RpcClient};
pub use types::{BlockchainError, ChainId, DeploymentReceipt, GasSettings};
pub use wallet::Wallet;
