//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint with the deployer's signer attached
//! - Submit contract-creation transactions
//! - Query receipts, block numbers and the chain id
//! - Bound every RPC call by a timeout

use alloy::primitives::TxHash;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use std::fmt::Display;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId, DeploymentReceipt};
use crate::blockchain::wallet::Wallet;

/// Chain operations the deployment runner depends on.
///
/// The RPC implementation is [`RpcClient`]; tests substitute an in-memory
/// chain.
#[async_trait]
pub trait DeploymentClient: Send + Sync {
    /// Chain id reported by the endpoint.
    async fn chain_id(&self) -> BlockchainResult<ChainId>;

    /// Sign and broadcast a contract-creation transaction.
    async fn submit_deployment(&self, tx: TransactionRequest) -> BlockchainResult<TxHash>;

    /// Receipt of a submitted deployment, `None` while pending.
    async fn deployment_receipt(&self, tx_hash: TxHash) -> BlockchainResult<Option<DeploymentReceipt>>;

    /// Latest block number.
    async fn block_number(&self) -> BlockchainResult<u64>;
}

/// JSON-RPC client signing with the network's credential.
#[derive(Clone)]
pub struct RpcClient {
    provider: Arc<dyn Provider + Send + Sync>,
    rpc_url: Url,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl RpcClient {
    /// Build a client for `rpc_url` that signs with `wallet`.
    ///
    /// No request is made here; connectivity problems surface on first use.
    pub fn connect(rpc_url: Url, wallet: &Wallet, timeout_duration: Duration) -> Self {
        let provider = ProviderBuilder::new()
            .wallet(wallet.ethereum_wallet())
            .connect_http(rpc_url.clone());

        tracing::debug!(
            rpc_host = rpc_url.host_str().unwrap_or_default(),
            signer = %wallet.address(),
            "RPC client created"
        );

        Self {
            provider: Arc::new(provider) as Arc<dyn Provider + Send + Sync>,
            rpc_url,
            timeout_duration,
        }
    }

    async fn call<T, E, F>(&self, op: &'static str, fut: F) -> BlockchainResult<T>
    where
        E: Display,
        F: IntoFuture<Output = Result<T, E>>,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => Err(BlockchainError::Rpc(format!("{} failed: {}", op, e))),
            Err(_) => Err(BlockchainError::Rpc(format!(
                "{} timed out after {}s",
                op,
                self.timeout_duration.as_secs()
            ))),
        }
    }
}

#[async_trait]
impl DeploymentClient for RpcClient {
    async fn chain_id(&self) -> BlockchainResult<ChainId> {
        self.call("eth_chainId", self.provider.get_chain_id())
            .await
            .map(ChainId)
    }

    async fn submit_deployment(&self, tx: TransactionRequest) -> BlockchainResult<TxHash> {
        let pending = self
            .call("eth_sendRawTransaction", self.provider.send_transaction(tx))
            .await?;
        Ok(*pending.tx_hash())
    }

    async fn deployment_receipt(&self, tx_hash: TxHash) -> BlockchainResult<Option<DeploymentReceipt>> {
        let receipt = self
            .call(
                "eth_getTransactionReceipt",
                self.provider.get_transaction_receipt(tx_hash),
            )
            .await?;

        Ok(receipt.map(|r| DeploymentReceipt {
            block_number: r.block_number,
            contract_address: r.contract_address,
            success: r.status(),
        }))
    }

    async fn block_number(&self) -> BlockchainResult<u64> {
        self.call("eth_blockNumber", self.provider.get_block_number())
            .await
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("rpc_host", &self.rpc_url.host_str())
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
