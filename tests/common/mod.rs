//! Shared utilities for deployment tests: an in-memory chain and artifact
//! fixtures.

#![allow(dead_code)]

use alloy::primitives::{keccak256, Address, TxHash};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use landform_deployer::blockchain::types::{BlockchainResult, ChainId, DeploymentReceipt};
use landform_deployer::blockchain::DeploymentClient;

/// Anvil's first account.
pub const TEST_PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_RPC_URL: &str = "https://curtis.rpc.caldera.xyz/http";
pub const APECHAIN_CHAIN_ID: u64 = 33139;

pub const LANDFORM_ARTIFACT: &str = r#"{
    "_format": "hh-sol-artifact-1",
    "contractName": "LandForm",
    "sourceName": "contracts/LandForm.sol",
    "abi": [
        {"inputs": [], "stateMutability": "nonpayable", "type": "constructor"},
        {"inputs": [], "name": "owner", "outputs": [{"internalType": "address", "name": "", "type": "address"}],
         "stateMutability": "view", "type": "function"}
    ],
    "bytecode": "0x6080604052348015600f57600080fd5b50603f80601d6000396000f3fe6080604052600080fdfe",
    "deployedBytecode": "0x6080604052600080fdfe",
    "linkReferences": {},
    "deployedLinkReferences": {}
}"#;

/// Write the LandForm artifact where Hardhat would put it.
pub fn write_artifacts(root: &Path) {
    let dir = root.join("contracts").join("LandForm.sol");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("LandForm.json"), LANDFORM_ARTIFACT).unwrap();
}

/// How the in-memory chain treats submitted deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    /// Mined in the next block with a contract address.
    Confirm,
    /// Mined with status 0.
    Revert,
    /// Mined successfully but the receipt carries no contract address.
    NoAddress,
    /// Never mined.
    NeverConfirm,
}

#[derive(Debug, Default)]
struct State {
    nonce: u64,
    block: u64,
    submitted: Vec<TransactionRequest>,
    receipts: HashMap<TxHash, DeploymentReceipt>,
}

/// In-memory chain. Clones share state.
#[derive(Debug, Clone)]
pub struct MockChain {
    deployer: Address,
    chain_id: u64,
    behaviour: Behaviour,
    state: Arc<Mutex<State>>,
}

impl MockChain {
    pub fn new(deployer: Address, behaviour: Behaviour) -> Self {
        Self {
            deployer,
            chain_id: APECHAIN_CHAIN_ID,
            behaviour,
            state: Arc::new(Mutex::new(State {
                block: 100,
                ..State::default()
            })),
        }
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Transactions received so far, in order.
    pub fn submitted(&self) -> Vec<TransactionRequest> {
        self.state.lock().unwrap().submitted.clone()
    }
}

#[async_trait]
impl DeploymentClient for MockChain {
    async fn chain_id(&self) -> BlockchainResult<ChainId> {
        Ok(ChainId(self.chain_id))
    }

    async fn submit_deployment(&self, tx: TransactionRequest) -> BlockchainResult<TxHash> {
        let mut state = self.state.lock().unwrap();
        let nonce = state.nonce;
        state.nonce += 1;
        state.submitted.push(tx);

        let tx_hash = keccak256(nonce.to_be_bytes());
        let block = state.block + 1;
        let receipt = match self.behaviour {
            Behaviour::Confirm => Some(DeploymentReceipt {
                block_number: Some(block),
                contract_address: Some(self.deployer.create(nonce)),
                success: true,
            }),
            Behaviour::Revert => Some(DeploymentReceipt {
                block_number: Some(block),
                contract_address: None,
                success: false,
            }),
            Behaviour::NoAddress => Some(DeploymentReceipt {
                block_number: Some(block),
                contract_address: None,
                success: true,
            }),
            Behaviour::NeverConfirm => None,
        };
        if let Some(receipt) = receipt {
            state.receipts.insert(tx_hash, receipt);
        }
        Ok(tx_hash)
    }

    async fn deployment_receipt(&self, tx_hash: TxHash) -> BlockchainResult<Option<DeploymentReceipt>> {
        Ok(self.state.lock().unwrap().receipts.get(&tx_hash).cloned())
    }

    async fn block_number(&self) -> BlockchainResult<u64> {
        // Every query observes one more block.
        let mut state = self.state.lock().unwrap();
        state.block += 1;
        Ok(state.block)
    }
}
