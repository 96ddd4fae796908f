//! Thin wrapper over the `seid` binary used to fund test wallets.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tokio::process::Command;

use crate::config::{ChainConfig, HarnessConfig};

/// Broadcast result printed by `seid tx ... -o json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliTxResult {
    pub code: u32,
    pub txhash: String,
    pub raw_log: String,
}

#[derive(Debug, Clone)]
pub struct SeidCli {
    binary: String,
    keyring_backend: String,
    from: String,
    chain_id: String,
    fees: String,
    evm_rpc: String,
}

impl SeidCli {
    pub fn new(chain: &ChainConfig, harness: &HarnessConfig) -> Self {
        Self {
            binary: harness.seid_binary.clone(),
            keyring_backend: harness.keyring_backend.clone(),
            from: harness.funding_key.clone(),
            chain_id: chain.chain_id.clone(),
            fees: format!("{}{}", harness.cli_fees, chain.denom),
            evm_rpc: chain.evm_rpc_endpoint.clone(),
        }
    }

    pub fn bank_send_args(&self, to_address: &str, amount: &str) -> Vec<String> {
        vec![
            "tx".into(),
            "bank".into(),
            "send".into(),
            self.from.clone(),
            to_address.into(),
            amount.into(),
            "--chain-id".into(),
            self.chain_id.clone(),
            "--keyring-backend".into(),
            self.keyring_backend.clone(),
            "--fees".into(),
            self.fees.clone(),
            "-o".into(),
            "json".into(),
            "-y".into(),
        ]
    }

    pub fn evm_send_args(&self, to_evm_address: &str, amount_wei: u128) -> Vec<String> {
        vec![
            "tx".into(),
            "evm".into(),
            "send".into(),
            to_evm_address.into(),
            amount_wei.to_string(),
            "--from".into(),
            self.from.clone(),
            "--keyring-backend".into(),
            self.keyring_backend.clone(),
            "--evm-rpc".into(),
            self.evm_rpc.clone(),
        ]
    }

    /// `seid tx bank send` from the funding key; `amount` carries its denom.
    pub async fn bank_send(&self, to_address: &str, amount: &str) -> Result<CliTxResult> {
        let stdout = self.run(&self.bank_send_args(to_address, amount)).await?;
        let result = parse_tx_result(&stdout)?;
        if result.code != 0 {
            return Err(anyhow!("bank send to {} failed with code {}: {}", to_address, result.code, result.raw_log));
        }
        log::info!("Funded {} with {} ({})", to_address, amount, result.txhash);
        Ok(result)
    }

    /// `seid tx evm send` from the funding key. Returns the EVM tx hash.
    pub async fn evm_send(&self, to_evm_address: &str, amount_wei: u128) -> Result<String> {
        let stdout = self.run(&self.evm_send_args(to_evm_address, amount_wei)).await?;
        let hash = parse_evm_tx_hash(&stdout)?;
        log::info!("Funded {} with {} wei ({})", to_evm_address, amount_wei, hash);
        Ok(hash)
    }

    async fn run(&self, args: &[String]) -> Result<String> {
        log::debug!("{} {}", self.binary, args.join(" "));
        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .await
            .with_context(|| format!("Failed to run {}", self.binary))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("{} exited with {}: {}{}", self.binary, output.status, stderr.trim(), stdout.trim()));
        }
        Ok(stdout)
    }
}

/// Finds the JSON object in CLI output, which may be preceded by gas notices.
fn parse_tx_result(stdout: &str) -> Result<CliTxResult> {
    let start = stdout.find('{').ok_or_else(|| anyhow!("no JSON in seid output: {}", stdout.trim()))?;
    serde_json::from_str(stdout[start..].trim()).with_context(|| format!("unexpected seid output: {}", stdout.trim()))
}

/// Extracts the hash from "Transaction hash: 0x...".
fn parse_evm_tx_hash(stdout: &str) -> Result<String> {
    stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("Transaction hash:"))
        .map(|hash| hash.trim().to_string())
        .ok_or_else(|| anyhow!("no transaction hash in seid output: {}", stdout.trim()))
}
