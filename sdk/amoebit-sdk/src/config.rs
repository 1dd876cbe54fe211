//! Solana CLI configuration.
//!
//! Reads the same `config.yml` the `solana` command line tool writes, so the
//! RPC endpoint and payer keypair follow the user's CLI setup.

use crate::core::constants::DEFAULT_RPC_URL;
use crate::error::{AmoebitSdkError, Result};
use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::{read_keypair_file, Keypair};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub json_rpc_url: Option<String>,
    #[serde(default)]
    pub keypair_path: Option<String>,
    #[serde(default)]
    pub commitment: Option<String>,
}

impl CliConfig {
    /// `~/.config/solana/cli/config.yml`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AmoebitSdkError::Config("Cannot determine home directory".into()))?;
        Ok(home.join(".config").join("solana").join("cli").join("config.yml"))
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        serde_yaml::from_str(contents)
            .map_err(|e| AmoebitSdkError::Config(format!("Failed to parse config: {}", e)))
    }

    pub async fn load_from(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            AmoebitSdkError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&contents)
    }

    /// Load the CLI config, falling back to defaults when it cannot be read.
    pub async fn load_or_default() -> Self {
        let loaded = match Self::default_path() {
            Ok(path) => Self::load_from(&path).await,
            Err(e) => Err(e),
        };
        match loaded {
            Ok(config) => {
                debug!(?config, "Loaded Solana CLI config");
                config
            },
            Err(e) => {
                warn!("Failed to read Solana CLI config file, falling back to defaults: {}", e);
                Self::default()
            },
        }
    }

    pub fn rpc_url(&self) -> String {
        match &self.json_rpc_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => {
                warn!("No RPC URL configured, using {}", DEFAULT_RPC_URL);
                DEFAULT_RPC_URL.to_string()
            },
        }
    }

    /// Keypair path with a leading `~` expanded.
    pub fn keypair_path(&self) -> Result<PathBuf> {
        let raw = self
            .keypair_path
            .as_deref()
            .ok_or_else(|| AmoebitSdkError::Config("Missing keypair path".into()))?;
        expand_home(raw)
    }

    pub fn commitment(&self) -> CommitmentConfig {
        match self.commitment.as_deref() {
            Some("processed") => CommitmentConfig::processed(),
            Some("finalized") => CommitmentConfig::finalized(),
            _ => CommitmentConfig::confirmed(),
        }
    }
}

fn expand_home(path: &str) -> Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home = dirs::home_dir().ok_or_else(|| {
                AmoebitSdkError::Config("Cannot determine home directory".into())
            })?;
            Ok(home.join(rest))
        },
        None => Ok(PathBuf::from(path)),
    }
}

pub fn load_keypair(path: &Path) -> Result<Keypair> {
    read_keypair_file(path)
        .map_err(|e| AmoebitSdkError::Keypair(format!("{}: {}", path.display(), e)))
}
