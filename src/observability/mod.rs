//! Observability subsystem.
//!
//! Structured log events only; the deployer is a one-shot process and
//! exposes no metrics endpoint.

pub mod logging;

pub use logging::init_logging;
