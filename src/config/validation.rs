//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, poll interval below the deadline)
//! - Check that every network names its variables
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DeployerConfig → Result<(), Vec<ValidationError>>

use crate::config::schema::DeployerConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &DeployerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.networks.is_empty() {
        errors.push(ValidationError::new("networks", "at least one network is required"));
    }

    for (name, network) in &config.networks {
        if name.trim().is_empty() {
            errors.push(ValidationError::new("networks", "network alias must not be empty"));
        }
        if network.rpc_url_env.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("networks.{}.rpc_url_env", name),
                "must name an environment variable",
            ));
        }
        if network.private_key_env.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("networks.{}.private_key_env", name),
                "must name an environment variable",
            ));
        }
        if network.chain_id == Some(0) {
            errors.push(ValidationError::new(
                format!("networks.{}.chain_id", name),
                "must be non-zero",
            ));
        }
    }

    let deployment = &config.deployment;
    if deployment.contract.trim().is_empty() {
        errors.push(ValidationError::new("deployment.contract", "must not be empty"));
    }
    if deployment.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "deployment.confirmation_timeout_secs",
            "must be greater than zero",
        ));
    }
    if deployment.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new("deployment.rpc_timeout_secs", "must be greater than zero"));
    }
    if deployment.poll_interval_ms == 0 {
        errors.push(ValidationError::new("deployment.poll_interval_ms", "must be greater than zero"));
    } else if deployment.poll_interval_ms > deployment.confirmation_timeout_secs.saturating_mul(1000) {
        errors.push(ValidationError::new(
            "deployment.poll_interval_ms",
            "must not exceed the confirmation timeout",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
