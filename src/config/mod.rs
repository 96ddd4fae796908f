use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::chain::ClientConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chain: ChainConfig,
    #[serde(default)]
    pub harness: HarnessConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub grpc_endpoint: String,
    pub rest_endpoint: String,
    pub evm_rpc_endpoint: String,
    /// Cosmos chain id, used in sign docs
    pub chain_id: String,
    /// EIP-155 chain id reported by `eth_chainId`
    pub evm_chain_id: u64,
    pub denom: String,
    pub gas_price: String,
    pub gas_adjustment: f64,
    pub connection_timeout: u64,
    pub request_timeout: u64,
    pub max_retries: u32,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            grpc_endpoint: "http://localhost:9090".to_string(),
            rest_endpoint: "http://localhost:1317".to_string(),
            evm_rpc_endpoint: "http://localhost:8545".to_string(),
            chain_id: "sei-chain".to_string(),
            evm_chain_id: 713_715,
            denom: "usei".to_string(),
            gas_price: "0.1usei".to_string(),
            gas_adjustment: 1.5,
            connection_timeout: 10,
            request_timeout: 30,
            max_retries: 3,
        }
    }
}

/// Settings for the live-node scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Path or name of the node CLI binary
    pub seid_binary: String,
    pub keyring_backend: String,
    /// Local key that funds the test wallets
    pub funding_key: String,
    /// Address `eth_coinbase` is expected to return, when known
    pub fee_account: Option<String>,
    /// Fee paid by CLI transactions, in usei
    pub cli_fees: u64,
    /// usei sent to each Sei address during setup
    pub fund_amount: u64,
    /// Wei sent to the EVM wallet during setup (decimal string)
    pub fund_amount_wei: String,
    /// Wei moved by each EVM transfer (decimal string)
    pub transfer_amount_wei: String,
    /// usei moved by the Cosmos transfer
    pub cosmos_transfer_amount: u64,
    /// Approximate block time, used for fixed waits
    pub block_wait_secs: u64,
    pub min_gas_price: u64,
    /// `eth_accounts` length on the target node, when known
    pub expected_accounts: Option<usize>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            seid_binary: "seid".to_string(),
            keyring_backend: "test".to_string(),
            funding_key: "admin".to_string(),
            fee_account: None,
            cli_fees: 20_000,
            fund_amount: 100_000_000,
            fund_amount_wei: "10000000000000000000".to_string(),
            transfer_amount_wei: "100000000000000000".to_string(),
            cosmos_transfer_amount: 1_000_000,
            block_wait_secs: 1,
            min_gas_price: 990_000_000,
            expected_accounts: None,
        }
    }
}

impl HarnessConfig {
    pub fn fund_amount_wei(&self) -> Result<u128> {
        parse_wei("fund_amount_wei", &self.fund_amount_wei)
    }

    pub fn transfer_amount_wei(&self) -> Result<u128> {
        parse_wei("transfer_amount_wei", &self.transfer_amount_wei)
    }
}

fn parse_wei(field: &str, value: &str) -> Result<u128> {
    value
        .parse()
        .map_err(|e| anyhow!("harness.{field} must be an integer amount of wei, got {value:?}: {e}"))
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Reads `path` when it exists, otherwise the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            log::debug!("No config at {}, using defaults", path.as_ref().display());
            Ok(Self::default())
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// `~/.sei_client/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
        Ok(home.join(".sei_client").join("config.toml"))
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            grpc_endpoint: self.chain.grpc_endpoint.clone(),
            connection_timeout: self.chain.connection_timeout,
            request_timeout: self.chain.request_timeout,
            max_retries: self.chain.max_retries,
            chain_id: self.chain.chain_id.clone(),
            denom: self.chain.denom.clone(),
            gas_price: self.chain.gas_price.clone(),
            gas_adjustment: self.chain.gas_adjustment,
        }
    }
}
