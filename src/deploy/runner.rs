//! Deployment runner: submit, wait for confirmation, report.
//!
//! # Responsibilities
//! - Verify the connected chain when the network pins a chain id
//! - Submit exactly one creation transaction per call (no retry, no caching)
//! - Poll for the receipt until confirmed or the deadline passes
//! - Write the success line

use alloy::primitives::{Address, TxHash};
use std::io::Write;
use std::time::Duration;
use tokio::time::{interval, timeout, MissedTickBehavior};

use crate::blockchain::types::{BlockchainError, BlockchainResult, Confirmation, ConfirmationStatus};
use crate::blockchain::DeploymentClient;
use crate::config::DeploymentConfig;
use crate::deploy::factory::ContractFactory;
use crate::deploy::DeployError;

/// How long and how often to wait for a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationSettings {
    pub timeout: Duration,
    pub poll_interval: Duration,
    /// Blocks counted from and including the inclusion block.
    pub confirmations: u32,
}

impl From<&DeploymentConfig> for ConfirmationSettings {
    fn from(config: &DeploymentConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.confirmation_timeout_secs),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            confirmations: config.confirmations,
        }
    }
}

impl Default for ConfirmationSettings {
    fn default() -> Self {
        Self::from(&DeploymentConfig::default())
    }
}

/// A confirmed deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub contract: String,
    pub address: Address,
    pub tx_hash: TxHash,
    pub block_number: u64,
}

impl Deployment {
    /// Write the single success line.
    pub fn report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "✅ {} deployed to: {}", self.contract, self.address)?;
        out.flush()
    }
}

/// Runs deployments against a [`DeploymentClient`].
pub struct Deployer<'a, C: DeploymentClient + ?Sized> {
    client: &'a C,
    settings: ConfirmationSettings,
}

impl<'a, C: DeploymentClient + ?Sized> Deployer<'a, C> {
    pub fn new(client: &'a C, settings: ConfirmationSettings) -> Self {
        Self { client, settings }
    }

    /// Deploy one fresh instance of the factory's contract.
    ///
    /// Every call submits a new transaction; nothing is remembered between
    /// calls.
    pub async fn deploy(
        &self,
        factory: &ContractFactory,
        expected_chain_id: Option<u64>,
    ) -> Result<Deployment, DeployError> {
        if let Some(expected) = expected_chain_id {
            let actual = self.client.chain_id().await?;
            if actual.0 != expected {
                return Err(BlockchainError::ChainMismatch {
                    expected,
                    actual: actual.0,
                }
                .into());
            }
        }

        let request = factory.request();
        tracing::info!(
            contract = %request.contract,
            gas_price_wei = request.gas.gas_price,
            gas_limit = request.gas.gas_limit,
            "Submitting deployment"
        );

        let tx_hash = self.client.submit_deployment(factory.transaction()).await?;
        tracing::info!(tx_hash = %tx_hash, "Deployment submitted, waiting for confirmation");

        let Confirmation { block_number, address } = self.wait_for_confirmation(tx_hash).await?;
        tracing::info!(
            contract = %request.contract,
            address = %address,
            block_number,
            "Deployment confirmed"
        );

        Ok(Deployment {
            contract: request.contract,
            address,
            tx_hash,
            block_number,
        })
    }

    /// Deploy and write the success line to `out`.
    pub async fn deploy_and_report<W: Write>(
        &self,
        factory: &ContractFactory,
        expected_chain_id: Option<u64>,
        out: &mut W,
    ) -> Result<Deployment, DeployError> {
        let deployment = self.deploy(factory, expected_chain_id).await?;
        deployment.report(out)?;
        Ok(deployment)
    }

    /// Wait for a deployment to be confirmed.
    ///
    /// Fails on revert, on a receipt without a contract address and when
    /// the configured timeout elapses.
    pub async fn wait_for_confirmation(&self, tx_hash: TxHash) -> BlockchainResult<Confirmation> {
        let required = self.settings.confirmations.max(1);

        let result = timeout(self.settings.timeout, async {
            let mut ticker = interval(self.settings.poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut status = ConfirmationStatus::Pending;

            loop {
                ticker.tick().await;

                let receipt = match self.client.deployment_receipt(tx_hash).await? {
                    Some(r) => r,
                    None => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                        continue;
                    }
                };

                if !receipt.success {
                    return Err(BlockchainError::Reverted(tx_hash));
                }
                let address = receipt
                    .contract_address
                    .ok_or(BlockchainError::MissingContractAddress(tx_hash))?;

                let current_block = self.client.block_number().await?;
                let tx_block = receipt.block_number.unwrap_or(current_block);
                let confirmations = confirmation_depth(current_block, tx_block);

                if confirmations >= required {
                    return Ok(Confirmation {
                        block_number: tx_block,
                        address,
                    });
                }

                let next = ConfirmationStatus::Confirming {
                    current: confirmations,
                    required,
                };
                if next != status {
                    tracing::debug!(tx_hash = %tx_hash, confirmations, required, "Waiting for confirmations");
                    status = next;
                }
            }
        })
        .await;

        match result {
            Ok(confirmation) => confirmation,
            Err(_) => Err(BlockchainError::ConfirmationTimeout {
                tx_hash,
                timeout_secs: self.settings.timeout.as_secs(),
            }),
        }
    }
}

/// Blocks from and including `tx_block` up to `current_block`, saturating.
fn confirmation_depth(current_block: u64, tx_block: u64) -> u32 {
    u32::try_from(current_block.saturating_sub(tx_block).saturating_add(1)).unwrap_or(u32::MAX)
}
