//! Chain-specific types and error definitions.

use alloy::primitives::{Address, TxHash};
use thiserror::Error;

/// Gas price attached to every deployment: 1 gwei, in wei.
pub const DEPLOY_GAS_PRICE_WEI: u128 = 1_000_000_000;

/// Gas limit attached to every deployment.
pub const DEPLOY_GAS_LIMIT: u64 = 3_000_000;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Transaction was not confirmed within the configured deadline.
    #[error("Deployment {tx_hash} not confirmed after {timeout_secs} seconds")]
    ConfirmationTimeout { tx_hash: TxHash, timeout_secs: u64 },

    /// Transaction was reverted on-chain.
    #[error("Transaction reverted: {0}")]
    Reverted(TxHash),

    /// Receipt did not carry a created contract address.
    #[error("Receipt for {0} has no contract address")]
    MissingContractAddress(TxHash),

    /// Invalid private key format or derivation error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// Gas parameters attached to a deployment transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasSettings {
    /// Legacy gas price in wei.
    pub gas_price: u128,
    /// Maximum gas the creation may consume.
    pub gas_limit: u64,
}

impl GasSettings {
    /// The fixed settings used for every deployment, whatever the network.
    pub const fn fixed() -> Self {
        Self {
            gas_price: DEPLOY_GAS_PRICE_WEI,
            gas_limit: DEPLOY_GAS_LIMIT,
        }
    }
}

impl Default for GasSettings {
    fn default() -> Self {
        Self::fixed()
    }
}

/// Receipt fields the deployer cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentReceipt {
    pub block_number: Option<u64>,
    pub contract_address: Option<Address>,
    /// `false` when the constructor reverted.
    pub success: bool,
}

/// Progress of a deployment that is not yet confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationStatus {
    /// Transaction is pending in mempool.
    Pending,
    /// Transaction has been mined but not enough confirmations.
    Confirming { current: u32, required: u32 },
}

/// A deployment confirmed with the required block depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    pub block_number: u64,
    pub address: Address,
}
