//! End-to-end JSON-RPC scenarios against a running local node.
//!
//! Two fresh wallets are created per run: one derived under the EVM coin
//! type and one under the Cosmos coin type. Both are funded through the node
//! CLI, then every scenario runs in order and records pass or fail.

use std::fmt;
use std::time::Duration;

use anyhow::{anyhow, ensure, Context, Result};

use super::cli::SeidCli;
use crate::chain::evm_rpc::{BlockId, EvmRpcClient, Transaction, TransactionReceipt};
use crate::chain::evm_tx::LegacyTransaction;
use crate::chain::proto::Coin;
use crate::chain::wallet::{CoinType, SeiWallet};
use crate::chain::SeiClient;
use crate::config::Config;

const FEE_HISTORY_BLOCKS: u64 = 10;
const RECEIPT_POLLS: u32 = 20;

#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub group: &'static str,
    pub name: &'static str,
    pub error: Option<String>,
}

impl ScenarioResult {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    pub results: Vec<ScenarioResult>,
}

impl SuiteReport {
    pub fn record(&mut self, group: &'static str, name: &'static str, outcome: Result<()>) {
        let error = outcome.err().map(|e| format!("{e:#}"));
        match &error {
            None => log::info!("✅ [{}] {}", group, name),
            Some(e) => log::error!("❌ [{}] {}: {}", group, name, e),
        }
        self.results.push(ScenarioResult { group, name, error });
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.results {
            match &result.error {
                None => writeln!(f, "✅ [{}] {}", result.group, result.name)?,
                Some(e) => writeln!(f, "❌ [{}] {}: {}", result.group, result.name, e)?,
            }
        }
        write!(f, "{} passed, {} failed", self.passed(), self.failed())
    }
}

/// `block - count`, failing instead of wrapping below genesis.
fn blocks_before(block: u64, count: u64) -> Result<u64> {
    block
        .checked_sub(count)
        .ok_or_else(|| anyhow!("block {} has fewer than {} blocks before it", block, count))
}

/// An EVM transfer that made it into a block.
#[derive(Debug, Clone)]
struct Transfer {
    tx_hash: String,
    to: String,
    block_number: u64,
    block_hash: String,
}

/// Values carried from one scenario to the next.
#[derive(Debug, Default)]
struct SuiteState {
    block_transfer: Option<Transfer>,
    receipt_transfer: Option<Transfer>,
    latest_block: u64,
    latest_balance: u128,
    previous_balance: u128,
    previous_nonce: u64,
    tx_count_at_block: u64,
}

pub struct EvmRpcSuite {
    config: Config,
    evm: EvmRpcClient,
    cli: SeidCli,
    evm_wallet: SeiWallet,
    cosmos: SeiClient,
    state: SuiteState,
}

impl EvmRpcSuite {
    /// Generates both wallets and connects the clients. Nothing is funded yet.
    pub async fn new(config: Config) -> Result<Self> {
        let (evm_wallet, _) = SeiWallet::generate(CoinType::Evm)?;
        let (sei_wallet, _) = SeiWallet::generate(CoinType::Cosmos)?;
        log::info!("EVM wallet: {} / {}", evm_wallet.evm_address, evm_wallet.address);
        log::info!("Sei wallet: {} / {}", sei_wallet.address, sei_wallet.evm_address);

        let evm = EvmRpcClient::with_timeout(
            &config.chain.evm_rpc_endpoint,
            Duration::from_secs(config.chain.request_timeout),
        )?;
        let cli = SeidCli::new(&config.chain, &config.harness);
        let mut cosmos = SeiClient::new(config.client_config(), sei_wallet);
        cosmos.connect().await?;

        Ok(Self {
            config,
            evm,
            cli,
            evm_wallet,
            cosmos,
            state: SuiteState::default(),
        })
    }

    fn sei_wallet(&self) -> &SeiWallet {
        self.cosmos.wallet()
    }

    async fn wait_blocks(&self, blocks: u64) {
        tokio::time::sleep(Duration::from_secs(blocks * self.config.harness.block_wait_secs)).await;
    }

    /// Funds the EVM wallet in wei and both Sei addresses in usei.
    pub async fn fund_wallets(&self) -> Result<()> {
        let harness = &self.config.harness;
        let usei = format!("{}{}", harness.fund_amount, self.config.chain.denom);

        self.cli
            .evm_send(&self.evm_wallet.evm_address, harness.fund_amount_wei()?)
            .await?;
        self.cli.bank_send(&self.sei_wallet().address, &usei).await?;
        self.cli.bank_send(&self.evm_wallet.address, &usei).await?;
        self.wait_blocks(2).await;
        Ok(())
    }

    /// Funds the wallets, then runs every scenario in order.
    pub async fn run(mut self) -> Result<SuiteReport> {
        self.fund_wallets().await.context("funding test wallets")?;

        let mut report = SuiteReport::default();

        let r = self.evm_users_can_associate().await;
        report.record("association", "EVM users can associate accounts", r);
        let r = self.sei_wallet_implicitly_associates().await;
        report.record("association", "Sei wallet can implicitly associate accounts", r);
        let r = self.query_evm_tx_round_trip().await;
        report.record("association", "Users can query evm tx", r);

        let r = self.block_receipts_by_number().await;
        report.record("block", "Block receipts by number", r);
        let r = self.block_receipts_by_hash().await;
        report.record("block", "Block receipts by hash", r);
        let r = self.block_tx_count_by_number().await;
        report.record("block", "Block transaction count by number", r);
        let r = self.block_tx_count_by_hash().await;
        report.record("block", "Block transaction count by hash", r);
        let r = self.block_by_hash().await;
        report.record("block", "Block details by hash", r);
        let r = self.block_by_number().await;
        report.record("block", "Block details by number", r);

        let r = self.latest_block_number().await;
        report.record("chain", "Latest block number", r);
        let r = self.fee_account().await;
        report.record("chain", "Fee account", r);
        let r = self.chain_id().await;
        report.record("chain", "Chain id", r);
        let r = self.accounts().await;
        report.record("chain", "Accounts", r);
        let r = self.gas_price().await;
        report.record("chain", "Gas price", r);
        let r = self.fee_history().await;
        report.record("chain", "Fee history", r);
        let r = self.max_priority_fee().await;
        report.record("chain", "Max priority fee per gas", r);

        let r = self.capture_state_baseline().await;
        report.record("state", "Latest block and nonce", r);
        let r = self.balance_by_number().await;
        report.record("state", "Balance with block number", r);
        let r = self.previous_balance_by_number().await;
        report.record("state", "Balance from a previous block number", r);
        let r = self.balance_by_hash().await;
        report.record("state", "Balance with block hash", r);
        let r = self.previous_balance_by_hash().await;
        report.record("state", "Balance from a previous block hash", r);
        let r = self.balance_after_transfer().await;
        report.record("state", "Balance after transfer", r);
        let r = self.next_nonce().await;
        report.record("state", "Next nonce", r);

        let r = self.transaction_receipt().await;
        report.record("tx", "Transaction receipt", r);
        let r = self.transaction_by_hash().await;
        report.record("tx", "Transaction by hash", r);
        let r = self.transaction_by_block_number_and_index().await;
        report.record("tx", "Transaction by block number and index", r);
        let r = self.transaction_by_block_hash_and_index().await;
        report.record("tx", "Transaction by block hash and index", r);
        let r = self.missing_transaction_index().await;
        report.record("tx", "Unknown index returns null", r);
        let r = self.transaction_count_by_number().await;
        report.record("tx", "Transaction count by block number", r);
        let r = self.transaction_count_by_hash().await;
        report.record("tx", "Transaction count by block hash", r);

        Ok(report)
    }

    /// Signs and submits a value transfer from the EVM wallet, then waits for
    /// its receipt.
    async fn send_evm_transfer(&self, to: &str) -> Result<Transfer> {
        let nonce = self.evm.get_nonce(&self.evm_wallet.evm_address).await?;
        let gas_price = self.evm.gas_price().await?;
        let tx = LegacyTransaction::transfer(
            to,
            self.config.harness.transfer_amount_wei()?,
            nonce,
            gas_price,
            self.config.chain.evm_chain_id,
        )?;

        let tx_hash = self.evm.send_raw_transaction(&tx.sign(&self.evm_wallet)?).await?;
        log::debug!("Sent {} from {} to {}", tx_hash, self.evm_wallet.evm_address, to);

        let receipt = self.wait_for_receipt(&tx_hash).await?;
        Ok(Transfer {
            tx_hash,
            to: to.to_string(),
            block_number: receipt.block_number()?,
            block_hash: receipt.block_hash,
        })
    }

    async fn wait_for_receipt(&self, tx_hash: &str) -> Result<TransactionReceipt> {
        for _ in 0..RECEIPT_POLLS {
            if let Some(receipt) = self.evm.get_transaction_receipt(tx_hash).await? {
                return Ok(receipt);
            }
            tokio::time::sleep(Duration::from_millis(500)).await;
        }
        Err(anyhow!("no receipt for {} after {} polls", tx_hash, RECEIPT_POLLS))
    }

    fn check_parties(&self, from: &str, to: Option<&str>, expected_to: &str) -> Result<()> {
        ensure!(
            from == self.evm_wallet.evm_address.to_lowercase(),
            "from {} != {}",
            from,
            self.evm_wallet.evm_address.to_lowercase()
        );
        ensure!(
            to == Some(expected_to.to_lowercase().as_str()),
            "to {:?} != {}",
            to,
            expected_to.to_lowercase()
        );
        Ok(())
    }

    fn check_receipt(&self, receipt: &TransactionReceipt, transfer: &Transfer) -> Result<()> {
        ensure!(!receipt.block_hash.is_empty(), "receipt has no blockHash");
        ensure!(!receipt.block_number.is_empty(), "receipt has no blockNumber");
        ensure!(!receipt.gas_used.is_empty(), "receipt has no gasUsed");
        self.check_parties(&receipt.from, receipt.to.as_deref(), &transfer.to)
    }

    fn check_transaction(&self, tx: Option<Transaction>, to: &str) -> Result<()> {
        let tx = tx.ok_or_else(|| anyhow!("transaction not found"))?;
        ensure!(tx.block_hash.is_some(), "transaction has no blockHash");
        ensure!(tx.block_number.is_some(), "transaction has no blockNumber");
        self.check_parties(&tx.from, tx.to.as_deref(), to)
    }

    fn block_transfer(&self) -> Result<&Transfer> {
        self.state
            .block_transfer
            .as_ref()
            .ok_or_else(|| anyhow!("requires the block receipts scenario"))
    }

    fn receipt_transfer(&self) -> Result<&Transfer> {
        self.state
            .receipt_transfer
            .as_ref()
            .ok_or_else(|| anyhow!("requires the transaction receipt scenario"))
    }

    async fn evm_users_can_associate(&self) -> Result<()> {
        self.evm.associate(&self.evm_wallet, None).await?;
        self.wait_blocks(1).await;

        let queried = self.evm.sei_get_sei_address(&self.evm_wallet.evm_address).await?;
        ensure!(queried == self.evm_wallet.address, "sei_getSeiAddress returned {}", queried);

        let linked = self
            .cosmos
            .sei_address_by_evm_address(&self.evm_wallet.evm_address)
            .await?;
        ensure!(
            linked.as_deref() == Some(self.evm_wallet.address.as_str()),
            "SeiAddressByEVMAddress returned {:?}",
            linked
        );
        Ok(())
    }

    async fn sei_wallet_implicitly_associates(&self) -> Result<()> {
        let amount = Coin::new(self.config.harness.cosmos_transfer_amount, self.config.chain.denom.clone());
        self.cosmos.send_tokens(&self.evm_wallet.address, vec![amount]).await?;
        self.wait_blocks(1).await;

        let sei_address = &self.sei_wallet().address;
        let expected = &self.sei_wallet().evm_address;

        let linked = self.cosmos.evm_address_by_sei_address(sei_address).await?;
        let linked = linked.ok_or_else(|| anyhow!("{} is not associated", sei_address))?;
        ensure!(linked.eq_ignore_ascii_case(expected), "EVMAddressBySeiAddress returned {}", linked);

        let queried = self.evm.sei_get_evm_address(sei_address).await?;
        ensure!(queried.eq_ignore_ascii_case(expected), "sei_getEVMAddress returned {}", queried);
        Ok(())
    }

    async fn query_evm_tx_round_trip(&self) -> Result<()> {
        let transfer = self.send_evm_transfer(&self.sei_wallet().evm_address).await?;
        self.wait_blocks(1).await;

        let cosmos_tx = self
            .evm
            .sei_get_cosmos_tx(&transfer.tx_hash)
            .await?
            .ok_or_else(|| anyhow!("sei_getCosmosTx returned null"))?;
        let evm_tx = self.evm.sei_get_evm_tx(&cosmos_tx).await?;
        ensure!(evm_tx.is_some(), "sei_getEvmTx returned null for {}", cosmos_tx);
        Ok(())
    }

    async fn block_receipts_by_number(&mut self) -> Result<()> {
        let to = self.sei_wallet().evm_address.clone();
        let transfer = self.send_evm_transfer(&to).await?;
        self.state.block_transfer = Some(transfer.clone());

        let receipts = self.evm.get_block_receipts(BlockId::Number(transfer.block_number)).await?;
        let receipt = receipts.first().ok_or_else(|| anyhow!("no receipts in block"))?;
        ensure!(receipt.transaction_hash == transfer.tx_hash, "receipt for {}", receipt.transaction_hash);
        self.check_receipt(receipt, &transfer)
    }

    async fn block_receipts_by_hash(&self) -> Result<()> {
        let transfer = self.block_transfer()?;
        let receipts = self
            .evm
            .get_block_receipts(BlockId::Hash(transfer.block_hash.clone()))
            .await?;
        let receipt = receipts.first().ok_or_else(|| anyhow!("no receipts in block"))?;
        ensure!(receipt.transaction_hash == transfer.tx_hash, "receipt for {}", receipt.transaction_hash);
        self.check_receipt(receipt, transfer)
    }

    async fn block_tx_count_by_number(&self) -> Result<()> {
        let transfer = self.block_transfer()?;
        let count = self
            .evm
            .get_block_transaction_count_by_number(BlockId::Number(transfer.block_number))
            .await?;
        ensure!(count == 1, "expected 1 transaction, got {}", count);
        Ok(())
    }

    async fn block_tx_count_by_hash(&self) -> Result<()> {
        let transfer = self.block_transfer()?;
        let count = self.evm.get_block_transaction_count_by_hash(&transfer.block_hash).await?;
        ensure!(count == 1, "expected 1 transaction, got {}", count);
        Ok(())
    }

    async fn block_by_hash(&self) -> Result<()> {
        let transfer = self.block_transfer()?;
        let block = self
            .evm
            .get_block_by_hash(&transfer.block_hash, true)
            .await?
            .ok_or_else(|| anyhow!("block {} not found", transfer.block_hash))?;
        ensure!(block.transactions.len() == 1, "{} transactions", block.transactions.len());
        ensure!(block.hash.as_deref() == Some(transfer.block_hash.as_str()), "hash {:?}", block.hash);
        ensure!(block.number()? == transfer.block_number, "number {:?}", block.number);
        Ok(())
    }

    async fn block_by_number(&self) -> Result<()> {
        let transfer = self.block_transfer()?;
        let block = self
            .evm
            .get_block_by_number(BlockId::Number(transfer.block_number), false)
            .await?
            .ok_or_else(|| anyhow!("block {} not found", transfer.block_number))?;
        ensure!(block.transactions.len() == 1, "{} transactions", block.transactions.len());
        ensure!(block.hash.as_deref() == Some(transfer.block_hash.as_str()), "hash {:?}", block.hash);
        ensure!(block.number()? == transfer.block_number, "number {:?}", block.number);
        Ok(())
    }

    async fn latest_block_number(&self) -> Result<()> {
        let number = self.evm.block_number().await?;
        ensure!(number > 0, "block number is 0");
        Ok(())
    }

    async fn fee_account(&self) -> Result<()> {
        let coinbase = self.evm.coinbase().await?;
        match &self.config.harness.fee_account {
            Some(expected) => ensure!(coinbase.eq_ignore_ascii_case(expected), "coinbase {}", coinbase),
            None => ensure!(coinbase.starts_with("0x") && coinbase.len() == 42, "coinbase {}", coinbase),
        }
        Ok(())
    }

    async fn chain_id(&self) -> Result<()> {
        let chain_id = self.evm.chain_id().await?;
        ensure!(chain_id == self.config.chain.evm_chain_id, "chain id {}", chain_id);
        Ok(())
    }

    async fn accounts(&self) -> Result<()> {
        let accounts = self.evm.accounts().await?;
        if let Some(expected) = self.config.harness.expected_accounts {
            ensure!(accounts.len() == expected, "{} accounts, expected {}", accounts.len(), expected);
        }
        Ok(())
    }

    async fn gas_price(&self) -> Result<()> {
        let price = self.evm.gas_price().await?;
        let min = self.config.harness.min_gas_price as u128;
        ensure!(price > min, "gas price {} not above {}", price, min);
        Ok(())
    }

    async fn fee_history(&self) -> Result<()> {
        let last = self.evm.block_number().await?;
        let history = self
            .evm
            .fee_history(FEE_HISTORY_BLOCKS, BlockId::Number(last), &[10.0])
            .await?;
        let expected_oldest = blocks_before(last + 1, FEE_HISTORY_BLOCKS)?;
        ensure!(history.oldest_block()? == expected_oldest, "oldest block {:?}", history.oldest_block);
        ensure!(
            history.base_fee_per_gas.len() as u64 == FEE_HISTORY_BLOCKS,
            "{} base fees",
            history.base_fee_per_gas.len()
        );
        ensure!(
            history.gas_used_ratio.len() as u64 == FEE_HISTORY_BLOCKS,
            "{} gas used ratios",
            history.gas_used_ratio.len()
        );
        Ok(())
    }

    async fn max_priority_fee(&self) -> Result<()> {
        self.evm.max_priority_fee_per_gas().await?;
        Ok(())
    }

    async fn capture_state_baseline(&mut self) -> Result<()> {
        self.state.latest_block = self.evm.block_number().await?;
        self.state.previous_nonce = self.evm.get_nonce(&self.evm_wallet.evm_address).await?;
        ensure!(self.state.latest_block > 3, "chain too short: {}", self.state.latest_block);
        Ok(())
    }

    async fn balance_by_number(&mut self) -> Result<()> {
        let address = &self.evm_wallet.evm_address;
        let latest = self.evm.get_balance(address, BlockId::Latest).await?;
        let at_block = self
            .evm
            .get_balance(address, BlockId::Number(self.state.latest_block))
            .await?;
        ensure!(latest == at_block, "latest {} != {} at block {}", latest, at_block, self.state.latest_block);
        self.state.latest_balance = at_block;
        Ok(())
    }

    async fn previous_balance_by_number(&mut self) -> Result<()> {
        let block = BlockId::Number(blocks_before(self.state.latest_block, 3)?);
        self.state.previous_balance = self.evm.get_balance(&self.evm_wallet.evm_address, block).await?;
        Ok(())
    }

    async fn block_hash(&self, number: u64) -> Result<String> {
        self.evm
            .get_block_by_number(BlockId::Number(number), false)
            .await?
            .and_then(|block| block.hash)
            .ok_or_else(|| anyhow!("block {} not found", number))
    }

    async fn balance_by_hash(&self) -> Result<()> {
        let hash = self.block_hash(self.state.latest_block).await?;
        let balance = self.evm.get_balance(&self.evm_wallet.evm_address, BlockId::Hash(hash)).await?;
        ensure!(balance == self.state.latest_balance, "{} != {}", balance, self.state.latest_balance);
        Ok(())
    }

    async fn previous_balance_by_hash(&self) -> Result<()> {
        let hash = self.block_hash(blocks_before(self.state.latest_block, 3)?).await?;
        let balance = self.evm.get_balance(&self.evm_wallet.evm_address, BlockId::Hash(hash)).await?;
        ensure!(balance == self.state.previous_balance, "{} != {}", balance, self.state.previous_balance);
        Ok(())
    }

    async fn balance_after_transfer(&self) -> Result<()> {
        let transfer = self.send_evm_transfer(&self.sei_wallet().evm_address).await?;
        self.wait_blocks(2).await;

        let address = &self.evm_wallet.evm_address;
        let after = self.evm.get_balance(address, BlockId::Latest).await?;
        let spent = self.state.latest_balance.saturating_sub(after);
        let sent = self.config.harness.transfer_amount_wei()?;
        ensure!(spent >= sent, "balance dropped by {} wei, sent {}", spent, sent);

        let before_transfer = self
            .evm
            .get_balance(address, BlockId::Number(blocks_before(transfer.block_number, 1)?))
            .await?;
        ensure!(
            before_transfer == self.state.latest_balance,
            "balance before transfer block {} != {}",
            before_transfer,
            self.state.latest_balance
        );
        Ok(())
    }

    async fn next_nonce(&self) -> Result<()> {
        let nonce = self.evm.get_nonce(&self.evm_wallet.evm_address).await?;
        ensure!(nonce == self.state.previous_nonce + 1, "nonce {} after {}", nonce, self.state.previous_nonce);
        Ok(())
    }

    async fn transaction_receipt(&mut self) -> Result<()> {
        let to = self.sei_wallet().evm_address.clone();
        let transfer = self.send_evm_transfer(&to).await?;
        self.wait_blocks(1).await;

        let receipt = self
            .evm
            .get_transaction_receipt(&transfer.tx_hash)
            .await?
            .ok_or_else(|| anyhow!("no receipt for {}", transfer.tx_hash))?;
        self.check_receipt(&receipt, &transfer)?;
        self.state.receipt_transfer = Some(transfer);
        Ok(())
    }

    async fn transaction_by_hash(&self) -> Result<()> {
        let transfer = self.send_evm_transfer(&self.sei_wallet().evm_address).await?;
        self.wait_blocks(1).await;
        let tx = self.evm.get_transaction_by_hash(&transfer.tx_hash).await?;
        self.check_transaction(tx, &transfer.to)
    }

    async fn transaction_by_block_number_and_index(&self) -> Result<()> {
        let transfer = self.receipt_transfer()?;
        let tx = self
            .evm
            .get_transaction_by_block_number_and_index(BlockId::Number(transfer.block_number), 0)
            .await?;
        self.check_transaction(tx, &transfer.to)
    }

    async fn transaction_by_block_hash_and_index(&self) -> Result<()> {
        let transfer = self.receipt_transfer()?;
        let tx = self
            .evm
            .get_transaction_by_block_hash_and_index(&transfer.block_hash, 0)
            .await?;
        self.check_transaction(tx, &transfer.to)
    }

    async fn missing_transaction_index(&self) -> Result<()> {
        let transfer = self.receipt_transfer()?;
        let tx = self
            .evm
            .get_transaction_by_block_hash_and_index(&transfer.block_hash, 5)
            .await?;
        ensure!(tx.is_none(), "found {:?}", tx.map(|t| t.hash));
        Ok(())
    }

    async fn transaction_count_by_number(&mut self) -> Result<()> {
        let block = self.receipt_transfer()?.block_number;
        let count = self
            .evm
            .get_transaction_count(&self.evm_wallet.evm_address, BlockId::Number(block))
            .await?;
        ensure!(count > 1, "transaction count {}", count);
        self.state.tx_count_at_block = count;
        Ok(())
    }

    async fn transaction_count_by_hash(&self) -> Result<()> {
        let hash = self.receipt_transfer()?.block_hash.clone();
        let count = self
            .evm
            .get_transaction_count(&self.evm_wallet.evm_address, BlockId::Hash(hash))
            .await?;
        ensure!(count > 1, "transaction count {}", count);
        ensure!(count == self.state.tx_count_at_block, "{} != {}", count, self.state.tx_count_at_block);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_and_display() {
        let mut report = SuiteReport::default();
        report.record("chain", "Chain id", Ok(()));
        report.record("chain", "Gas price", Err(anyhow!("gas price 1 not above 990000000")));

        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_passed());

        let text = report.to_string();
        assert!(text.contains("✅ [chain] Chain id"));
        assert!(text.contains("❌ [chain] Gas price: gas price 1 not above 990000000"));
        assert!(text.ends_with("1 passed, 1 failed"));
    }

    fn offline_suite() -> EvmRpcSuite {
        let config = Config::default();
        let (evm_wallet, _) = SeiWallet::generate(CoinType::Evm).unwrap();
        let (sei_wallet, _) = SeiWallet::generate(CoinType::Cosmos).unwrap();
        EvmRpcSuite {
            evm: EvmRpcClient::new(&config.chain.evm_rpc_endpoint).unwrap(),
            cli: SeidCli::new(&config.chain, &config.harness),
            cosmos: SeiClient::new(config.client_config(), sei_wallet),
            evm_wallet,
            state: SuiteState::default(),
            config,
        }
    }

    #[test]
    fn test_blocks_before() {
        assert_eq!(blocks_before(10, 3).unwrap(), 7);
        assert_eq!(blocks_before(3, 3).unwrap(), 0);
        assert!(blocks_before(2, 3).is_err());
        assert!(blocks_before(0, 1).is_err());
    }

    #[tokio::test]
    async fn test_missing_baseline_is_recorded_not_fatal() {
        let mut suite = offline_suite();
        let mut report = SuiteReport::default();

        let r = suite.previous_balance_by_number().await;
        report.record("state", "Balance from a previous block number", r);
        let r = suite.previous_balance_by_hash().await;
        report.record("state", "Balance from a previous block hash", r);

        assert_eq!(report.failed(), 2);
        assert!(report.results[0]
            .error
            .as_deref()
            .unwrap()
            .contains("fewer than 3 blocks"));
    }

    #[test]
    fn test_error_chain_is_kept() {
        let mut report = SuiteReport::default();
        let err = Err::<(), _>(anyhow!("connection refused")).context("eth_blockNumber");
        report.record("chain", "Latest block number", err);
        assert_eq!(
            report.results[0].error.as_deref(),
            Some("eth_blockNumber: connection refused")
        );
    }
}
