//! Compiled contract artifacts.
//!
//! Reads Hardhat-style JSON artifacts (`contractName`, `abi`, `bytecode`).
//! Lookup order for contract `Name` under the artifacts root:
//! 1. `contracts/Name.sol/Name.json`
//! 2. any `Name.json` below the root (debug `*.dbg.json` files are skipped)

use alloy::json_abi::JsonAbi;
use alloy::primitives::Bytes;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors resolving a contract artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("no artifact for contract `{name}` under {root}")]
    NotFound { name: String, root: PathBuf },

    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact {0} has no creation bytecode (abstract contract or interface?)")]
    EmptyBytecode(PathBuf),

    #[error("constructor of `{name}` expects {count} argument(s); only argument-less constructors can be deployed")]
    ConstructorArguments { name: String, count: usize },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: Option<String>,
    #[serde(default)]
    abi: JsonAbi,
    bytecode: Bytes,
}

/// A compiled contract ready to be instantiated.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
    pub path: PathBuf,
}

impl ContractArtifact {
    /// Locate and parse the artifact for `name` under `root`.
    pub fn resolve(root: &Path, name: &str) -> Result<Self, ArtifactError> {
        let path = locate(root, name).ok_or_else(|| ArtifactError::NotFound {
            name: name.to_string(),
            root: root.to_path_buf(),
        })?;
        Self::from_file(&path, name)
    }

    /// Parse an artifact file directly.
    pub fn from_file(path: &Path, name: &str) -> Result<Self, ArtifactError> {
        let content = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawArtifact = serde_json::from_str(&content).map_err(|source| ArtifactError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if raw.bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(path.to_path_buf()));
        }

        Ok(Self {
            name: raw.contract_name.unwrap_or_else(|| name.to_string()),
            abi: raw.abi,
            bytecode: raw.bytecode,
            path: path.to_path_buf(),
        })
    }

    /// Number of constructor parameters declared in the ABI.
    pub fn constructor_arity(&self) -> usize {
        self.abi
            .constructor
            .as_ref()
            .map_or(0, |c| c.inputs.len())
    }
}

fn locate(root: &Path, name: &str) -> Option<PathBuf> {
    let file_name = format!("{}.json", name);
    let conventional = root
        .join("contracts")
        .join(format!("{}.sol", name))
        .join(&file_name);
    if conventional.is_file() {
        return Some(conventional);
    }
    search(root, &file_name)
}

fn search(dir: &Path, file_name: &str) -> Option<PathBuf> {
    let mut entries: Vec<_> = fs::read_dir(dir).ok()?.filter_map(Result::ok).collect();
    entries.sort_by_key(|e| e.file_name());

    let mut subdirs = Vec::new();
    for entry in entries {
        // Symlinked directories are not followed.
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            subdirs.push(entry.path());
        } else if entry.file_name().to_str() == Some(file_name) {
            return Some(entry.path());
        }
    }
    subdirs.iter().find_map(|d| search(d, file_name))
}
