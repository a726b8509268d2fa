//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → DeployerConfig (validated, immutable)
//!     → network.rs (alias + environment → NetworkDescriptor)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults; no file means the built-in networks
//! - Secrets are read from the environment, never from the file

pub mod loader;
pub mod network;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use network::{NetworkDescriptor, NetworkRegistry};
pub use schema::{DeployerConfig, DeploymentConfig, NetworkConfig};
