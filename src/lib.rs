//! LandForm contract deployer.
//!
//! # Architecture Overview
//!
//! ```text
//!   .env / environment          optional deployer.toml
//!          │                            │
//!          ▼                            ▼
//!   ┌──────────────┐            ┌──────────────┐
//!   │   config     │◀───────────│   loader +   │
//!   │   network    │            │  validation  │
//!   └──────┬───────┘            └──────────────┘
//!          │ NetworkDescriptor (url, signer)
//!          ▼
//!   ┌──────────────┐   artifacts/   ┌──────────────┐
//!   │  blockchain  │◀───────────────│   deploy     │
//!   │ RpcClient    │   factory      │  runner      │──▶ stdout: "✅ … deployed to: 0x…"
//!   └──────────────┘                └──────────────┘
//! ```
//!
//! A run is linear: resolve config, build the contract factory, submit one
//! creation transaction (1 gwei, 3,000,000 gas), wait for confirmation,
//! report. Any failure ends the process with exit code 1.

// Core subsystems
pub mod blockchain;
pub mod config;
pub mod deploy;

// Entry points
pub mod app;
pub mod cli;

// Cross-cutting concerns
pub mod observability;
