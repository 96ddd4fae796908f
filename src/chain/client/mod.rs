use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use tonic::Code;

use crate::chain::account_types::{Account, AccountInfo};
use crate::chain::codec::to_any;
use crate::chain::error::ChainError;
use crate::chain::grpc::{AuthQueryClient, BankQueryClient, EvmQueryClient, GrpcTransport, Rpc, TxServiceClient};
use crate::chain::proto::cosmos::auth::QueryAccountRequest;
use crate::chain::proto::cosmos::bank::{MsgSend, QueryBalanceRequest};
use crate::chain::proto::cosmos::tx::{BroadcastMode, BroadcastTxRequest, GetTxRequest, SimulateRequest, TxResponse};
use crate::chain::proto::sei::evm::{QueryEvmAddressBySeiAddressRequest, QuerySeiAddressByEvmAddressRequest};
use crate::chain::proto::{Any, Coin};
use crate::chain::tx_builder::{SeiTxBuilder, DEFAULT_GAS_LIMIT};
use crate::chain::wallet::SeiWallet;

/// ABCI code the auth ante handler returns for a stale sequence.
const CODE_WRONG_SEQUENCE: u32 = 32;
const MAX_SEQUENCE_RETRIES: u32 = 3;

/// Configuration for the Sei gRPC client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// gRPC endpoint URL (e.g. "http://localhost:9090")
    pub grpc_endpoint: String,
    /// Connection timeout in seconds
    pub connection_timeout: u64,
    /// Request timeout in seconds
    pub request_timeout: u64,
    pub max_retries: u32,
    pub chain_id: String,
    /// Fee denom
    pub denom: String,
    /// Price per gas unit, e.g. "0.1usei"
    pub gas_price: String,
    /// Multiplier applied to simulated gas
    pub gas_adjustment: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            grpc_endpoint: "http://localhost:9090".to_string(),
            connection_timeout: 10,
            request_timeout: 30,
            max_retries: 3,
            chain_id: "sei-chain".to_string(),
            denom: "usei".to_string(),
            gas_price: "0.1usei".to_string(),
            gas_adjustment: 1.5,
        }
    }
}

/// Gas estimate from `Simulate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulateResult {
    pub gas_used: u64,
    pub gas_wanted: u64,
}

/// Outcome of a broadcast as reported by CheckTx.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastResult {
    pub tx_hash: String,
    pub code: u32,
    pub raw_log: String,
}

impl BroadcastResult {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// gRPC client for a Sei node, signing with one wallet.
#[derive(Clone)]
pub struct SeiClient<R = GrpcTransport> {
    config: ClientConfig,
    transport: Option<R>,
    wallet: Arc<SeiWallet>,
}

impl SeiClient<GrpcTransport> {
    pub fn new(config: ClientConfig, wallet: SeiWallet) -> Self {
        Self {
            config,
            transport: None,
            wallet: Arc::new(wallet),
        }
    }

    /// Client for a local node with default settings.
    pub fn new_local(wallet: SeiWallet) -> Self {
        Self::new(ClientConfig::default(), wallet)
    }

    pub async fn connect(&mut self) -> Result<()> {
        log::info!("Connecting to Sei at {}", self.config.grpc_endpoint);

        let transport = GrpcTransport::connect(
            &self.config.grpc_endpoint,
            Duration::from_secs(self.config.connection_timeout),
            Duration::from_secs(self.config.request_timeout),
        )
        .await?;
        self.transport = Some(transport);

        log::info!("Connected to Sei node");
        Ok(())
    }
}

impl<R: Rpc + Clone> SeiClient<R> {
    /// Client over an already established transport.
    pub fn with_transport(config: ClientConfig, wallet: SeiWallet, transport: R) -> Self {
        Self {
            config,
            transport: Some(transport),
            wallet: Arc::new(wallet),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_some()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn wallet(&self) -> &SeiWallet {
        &self.wallet
    }

    pub fn address(&self) -> &str {
        &self.wallet.address
    }

    /// Transport handle for building stubs directly.
    pub fn transport(&self) -> Result<R> {
        self.transport.clone().ok_or_else(|| ChainError::NotConnected.into())
    }

    /// Account number and sequence. Accounts the chain has not seen yet
    /// report zeros.
    pub async fn query_account(&self, address: &str) -> Result<AccountInfo> {
        let response = self
            .with_retry(|| async {
                let client = AuthQueryClient::new(self.transport()?);
                client
                    .account(QueryAccountRequest {
                        address: address.to_string(),
                    })
                    .await
            })
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) if grpc_code(&e) == Some(Code::NotFound) => {
                log::info!("Account not found, returning default info for new account: {}", address);
                return Ok(AccountInfo {
                    address: address.to_string(),
                    ..Default::default()
                });
            }
            Err(e) => return Err(e),
        };

        let account_any = response.account.ok_or_else(|| anyhow!("Account not found"))?;
        log::debug!("Decoding account with type_url: {}", account_any.type_url);

        let account = Account::from_any(&account_any)?;
        match account.get_account_info() {
            Some(info) => Ok(info),
            None => {
                log::warn!(
                    "Account type {} doesn't provide extractable account info",
                    account.account_type()
                );
                Ok(AccountInfo {
                    address: address.to_string(),
                    ..Default::default()
                })
            }
        }
    }

    pub async fn query_bank_balance(&self, address: &str, denom: &str) -> Result<u128> {
        let response = self
            .with_retry(|| async {
                let client = BankQueryClient::new(self.transport()?);
                client
                    .balance(QueryBalanceRequest {
                        address: address.to_string(),
                        denom: denom.to_string(),
                    })
                    .await
            })
            .await?;

        match response.balance {
            Some(balance) => balance.amount_u128(),
            None => Ok(0),
        }
    }

    /// Sei address linked to an EVM address, if the two are associated.
    pub async fn sei_address_by_evm_address(&self, evm_address: &str) -> Result<Option<String>> {
        let client = EvmQueryClient::new(self.transport()?);
        let response = client
            .sei_address_by_evm_address(QuerySeiAddressByEvmAddressRequest {
                evm_address: evm_address.to_string(),
            })
            .await?;
        Ok(response.associated.then_some(response.sei_address))
    }

    /// EVM address linked to a Sei address, if the two are associated.
    pub async fn evm_address_by_sei_address(&self, sei_address: &str) -> Result<Option<String>> {
        let client = EvmQueryClient::new(self.transport()?);
        let response = client
            .evm_address_by_sei_address(QueryEvmAddressBySeiAddressRequest {
                sei_address: sei_address.to_string(),
            })
            .await?;
        Ok(response.associated.then_some(response.evm_address))
    }

    pub async fn simulate_tx(&self, tx_bytes: Vec<u8>) -> Result<SimulateResult> {
        let response = self
            .with_retry(|| async {
                let client = TxServiceClient::new(self.transport()?);
                client
                    .simulate(SimulateRequest {
                        tx: None,
                        tx_bytes: tx_bytes.clone(),
                    })
                    .await
            })
            .await?;

        let gas_info = response
            .gas_info
            .ok_or_else(|| anyhow!("No gas info in simulation response"))?;
        Ok(SimulateResult {
            gas_used: gas_info.gas_used,
            gas_wanted: gas_info.gas_wanted,
        })
    }

    /// Broadcasts in SYNC mode and returns the CheckTx result.
    pub async fn broadcast_tx(&self, tx_bytes: Vec<u8>) -> Result<BroadcastResult> {
        log::debug!("broadcast_tx called with {} bytes", tx_bytes.len());
        let response = self
            .with_retry(|| async {
                let client = TxServiceClient::new(self.transport()?);
                client
                    .broadcast_tx(BroadcastTxRequest {
                        tx_bytes: tx_bytes.clone(),
                        mode: BroadcastMode::Sync as i32,
                    })
                    .await
            })
            .await?;

        let tx_response = response
            .tx_response
            .ok_or_else(|| anyhow!("No tx response in broadcast response"))?;
        Ok(BroadcastResult {
            tx_hash: tx_response.txhash,
            code: tx_response.code,
            raw_log: tx_response.raw_log,
        })
    }

    /// Delivered transaction by hash.
    pub async fn get_tx(&self, hash: &str) -> Result<TxResponse> {
        let client = TxServiceClient::new(self.transport()?);
        let response = client.get_tx(GetTxRequest { hash: hash.to_string() }).await?;
        response
            .tx_response
            .ok_or_else(|| anyhow!("No tx response for {}", hash))
    }

    /// Bank transfer from the client wallet. Returns the tx hash.
    pub async fn send_tokens(&self, to_address: &str, amount: Vec<Coin>) -> Result<String> {
        let msg = MsgSend {
            from_address: self.wallet.address.clone(),
            to_address: to_address.to_string(),
            amount,
        };
        self.sign_and_broadcast(vec![to_any(&msg)]).await
    }

    /// Signs `messages` at the account's current sequence, re-signing when the
    /// node reports a sequence mismatch.
    pub async fn sign_and_broadcast(&self, messages: Vec<Any>) -> Result<String> {
        let account = self.query_account(&self.wallet.address).await?;
        let mut sequence = account.sequence;
        let gas_limit = self.estimate_gas(&account, messages.clone()).await;

        for attempt in 0..=MAX_SEQUENCE_RETRIES {
            let tx_bytes = SeiTxBuilder::new(
                self.config.chain_id.clone(),
                account.account_number,
                sequence,
                &self.wallet,
            )
            .with_gas_limit(gas_limit)
            .with_gas_price(self.config.gas_price.clone())
            .build_tx(messages.clone())?;

            let result = self.broadcast_tx(tx_bytes).await?;
            if result.is_success() {
                log::info!("Transaction broadcast: {}", result.tx_hash);
                return Ok(result.tx_hash);
            }

            if result.code == CODE_WRONG_SEQUENCE && attempt < MAX_SEQUENCE_RETRIES {
                let expected = match parse_sequence_error(&result.raw_log) {
                    Some(expected) => expected,
                    None => self.query_account(&self.wallet.address).await?.sequence,
                };
                log::warn!("Sequence mismatch (used {}, expected {}), retrying", sequence, expected);
                sequence = expected;
                continue;
            }

            return Err(anyhow!("Transaction failed with code {}: {}", result.code, result.raw_log));
        }

        Err(anyhow!("Sequence mismatch persisted after {} retries", MAX_SEQUENCE_RETRIES))
    }

    async fn estimate_gas(&self, account: &AccountInfo, messages: Vec<Any>) -> u64 {
        let unsigned = SeiTxBuilder::new(
            self.config.chain_id.clone(),
            account.account_number,
            account.sequence,
            &self.wallet,
        )
        .with_gas_price(self.config.gas_price.clone())
        .build_unsigned_tx(messages);

        let simulated = match unsigned {
            Ok(tx) => self.simulate_tx(tx).await,
            Err(e) => Err(e),
        };
        match simulated {
            Ok(sim) => (sim.gas_used as f64 * self.config.gas_adjustment).ceil() as u64,
            Err(e) => {
                log::warn!("Simulation failed, using default gas limit {}: {}", DEFAULT_GAS_LIMIT, e);
                DEFAULT_GAS_LIMIT
            }
        }
    }

    /// Retries transient transport failures with linear backoff.
    async fn with_retry<T, F, Fut>(&self, f: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let mut retries = 0;
        loop {
            match f().await {
                Ok(result) => return Ok(result),
                Err(e) if retries < self.config.max_retries && is_transient(&e) => {
                    retries += 1;
                    log::debug!("Retrying after error (attempt {}): {}", retries, e);
                    tokio::time::sleep(Duration::from_millis(100 * retries as u64)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn grpc_code(err: &anyhow::Error) -> Option<Code> {
    err.downcast_ref::<ChainError>().and_then(ChainError::grpc_code)
}

fn is_transient(err: &anyhow::Error) -> bool {
    matches!(
        grpc_code(err),
        Some(Code::Unavailable | Code::DeadlineExceeded | Code::ResourceExhausted | Code::Aborted | Code::Unknown)
    )
}

/// Extracts `X` from "... expected X, got Y".
fn parse_sequence_error(error_msg: &str) -> Option<u64> {
    let start = error_msg.find("expected ")?;
    let remaining = &error_msg[start + 9..];
    let comma = remaining.find(',')?;
    remaining[..comma].trim().parse::<u64>().ok()
}
