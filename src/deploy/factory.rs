//! Contract factory: turns a compiled artifact into a creation transaction.

use alloy::network::TransactionBuilder;
use alloy::primitives::Bytes;
use alloy::rpc::types::TransactionRequest;
use std::path::Path;

use crate::blockchain::{ArtifactError, ContractArtifact, GasSettings};

/// What gets submitted: the contract and the gas it is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    pub contract: String,
    pub gas: GasSettings,
}

/// Handle able to build deployment transactions for one contract.
#[derive(Debug, Clone)]
pub struct ContractFactory {
    name: String,
    bytecode: Bytes,
    gas: GasSettings,
}

impl ContractFactory {
    /// Build a factory from a parsed artifact.
    ///
    /// Only argument-less constructors are supported.
    pub fn new(artifact: ContractArtifact) -> Result<Self, ArtifactError> {
        let arity = artifact.constructor_arity();
        if arity > 0 {
            return Err(ArtifactError::ConstructorArguments {
                name: artifact.name,
                count: arity,
            });
        }

        Ok(Self {
            name: artifact.name,
            bytecode: artifact.bytecode,
            gas: GasSettings::fixed(),
        })
    }

    /// Resolve `name` under the artifacts root.
    pub fn from_artifacts(root: &Path, name: &str) -> Result<Self, ArtifactError> {
        let artifact = ContractArtifact::resolve(root, name)?;
        tracing::debug!(
            contract = %artifact.name,
            path = %artifact.path.display(),
            bytecode_len = artifact.bytecode.len(),
            "Artifact resolved"
        );
        Self::new(artifact)
    }

    pub fn request(&self) -> DeploymentRequest {
        DeploymentRequest {
            contract: self.name.clone(),
            gas: self.gas,
        }
    }

    /// Contract-creation transaction carrying the fixed gas settings.
    ///
    /// Nonce, chain id and sender are filled in by the signing provider.
    pub fn transaction(&self) -> TransactionRequest {
        TransactionRequest::default()
            .with_deploy_code(self.bytecode.clone())
            .with_gas_price(self.gas.gas_price)
            .with_gas_limit(self.gas.gas_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::json_abi::JsonAbi;
    use alloy::primitives::TxKind;
    use std::path::PathBuf;

    fn artifact(abi: &str) -> ContractArtifact {
        ContractArtifact {
            name: "LandForm".to_string(),
            abi: serde_json::from_str::<JsonAbi>(abi).unwrap(),
            bytecode: Bytes::from_static(&[0x60, 0x80, 0x60, 0x40]),
            path: PathBuf::from("artifacts/contracts/LandForm.sol/LandForm.json"),
        }
    }

    #[test]
    fn test_transaction_is_creation_with_fixed_gas() {
        let factory = ContractFactory::new(artifact("[]")).unwrap();
        let tx = factory.transaction();

        assert_eq!(tx.to, Some(TxKind::Create));
        assert_eq!(tx.gas_price, Some(1_000_000_000));
        assert_eq!(tx.gas, Some(3_000_000));
        assert_eq!(tx.input.input().map(|b| b.len()), Some(4));
    }

    #[test]
    fn test_request() {
        let factory = ContractFactory::new(artifact("[]")).unwrap();
        assert_eq!(
            factory.request(),
            DeploymentRequest {
                contract: "LandForm".to_string(),
                gas: GasSettings {
                    gas_price: 1_000_000_000,
                    gas_limit: 3_000_000
                },
            }
        );
    }

    #[test]
    fn test_constructor_with_arguments_rejected() {
        let abi = r#"[{"type":"constructor","stateMutability":"nonpayable",
            "inputs":[{"name":"owner","type":"address","internalType":"address"}]}]"#;
        let err = ContractFactory::new(artifact(abi)).unwrap_err();
        assert!(matches!(err, ArtifactError::ConstructorArguments { count: 1, .. }));
    }
}
