//! Ethereum JSON-RPC client with the `sei_*` extensions.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::chain::error::ChainError;
use crate::chain::wallet::{personal_message, personal_message_hash, SeiWallet, TransactionSigner};

/// Response envelope returned by a JSON-RPC node.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct RpcErrorBody {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Block selector accepted by state and block methods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockId {
    Number(u64),
    Hash(String),
    Latest,
    Earliest,
    Pending,
    Safe,
    Finalized,
}

impl BlockId {
    pub fn to_param(&self) -> Value {
        match self {
            BlockId::Number(n) => Value::String(to_quantity(*n)),
            BlockId::Hash(hash) => Value::String(hash.clone()),
            BlockId::Latest => json!("latest"),
            BlockId::Earliest => json!("earliest"),
            BlockId::Pending => json!("pending"),
            BlockId::Safe => json!("safe"),
            BlockId::Finalized => json!("finalized"),
        }
    }
}

impl From<u64> for BlockId {
    fn from(number: u64) -> Self {
        BlockId::Number(number)
    }
}

/// `0x`-prefixed minimal hex, as `ethers.toQuantity` renders it.
pub fn to_quantity(value: u64) -> String {
    format!("{value:#x}")
}

/// Hex quantity (`"0x1a"`), decimal string or JSON number.
pub fn parse_quantity(value: &Value) -> Result<u128> {
    match value {
        Value::String(s) => parse_quantity_str(s),
        Value::Number(n) => n
            .as_u64()
            .map(u128::from)
            .ok_or_else(|| anyhow!("quantity {n} is not a non-negative integer")),
        other => Err(anyhow!("expected a quantity, got {other}")),
    }
}

pub fn parse_quantity_str(s: &str) -> Result<u128> {
    match s.strip_prefix("0x") {
        Some("") => Ok(0),
        Some(hex) => u128::from_str_radix(hex, 16).with_context(|| format!("invalid hex quantity {s}")),
        None => s.parse::<u128>().with_context(|| format!("invalid quantity {s}")),
    }
}

fn parse_u64(value: &Value) -> Result<u64> {
    u64::try_from(parse_quantity(value)?).map_err(|_| anyhow!("quantity {value} overflows u64"))
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeHistory {
    pub oldest_block: Value,
    pub base_fee_per_gas: Vec<String>,
    pub gas_used_ratio: Vec<f64>,
    pub reward: Vec<Vec<String>>,
}

impl FeeHistory {
    pub fn oldest_block(&self) -> Result<u64> {
        parse_u64(&self.oldest_block)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Block {
    pub number: Option<String>,
    pub hash: Option<String>,
    pub parent_hash: String,
    pub timestamp: String,
    pub miner: String,
    pub gas_limit: String,
    pub gas_used: String,
    pub base_fee_per_gas: Option<String>,
    /// Hashes, or full objects when requested with `full_transactions`.
    pub transactions: Vec<Value>,
}

impl Block {
    pub fn number(&self) -> Result<u64> {
        let number = self.number.as_deref().ok_or_else(|| anyhow!("pending block has no number"))?;
        u64::try_from(parse_quantity_str(number)?).map_err(|_| anyhow!("block number {number} overflows u64"))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    pub hash: String,
    pub nonce: String,
    pub block_hash: Option<String>,
    pub block_number: Option<String>,
    pub transaction_index: Option<String>,
    pub from: String,
    pub to: Option<String>,
    pub value: String,
    pub gas: String,
    pub gas_price: Option<String>,
    pub input: String,
    #[serde(rename = "type")]
    pub tx_type: Option<String>,
    pub chain_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    pub transaction_index: String,
    pub block_hash: String,
    pub block_number: String,
    pub from: String,
    pub to: Option<String>,
    pub cumulative_gas_used: String,
    pub gas_used: String,
    pub effective_gas_price: Option<String>,
    pub contract_address: Option<String>,
    pub logs: Vec<Value>,
    pub logs_bloom: String,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub tx_type: Option<String>,
}

impl TransactionReceipt {
    pub fn block_number(&self) -> Result<u64> {
        parse_u64(&Value::String(self.block_number.clone()))
    }

    /// `status == 0x1`.
    pub fn succeeded(&self) -> bool {
        self.status.as_deref() == Some("0x1")
    }
}

/// Signed association payload for `sei_associate`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssociateRequest {
    pub r: String,
    pub s: String,
    pub v: String,
    #[serde(default)]
    pub custom_message: String,
}

impl AssociateRequest {
    /// Signs the association digest with `wallet`.
    ///
    /// Without a message the digest is 32 zero bytes. With one, the
    /// personal-message string is sent as `custom_message` and its Keccak256
    /// hash is signed.
    pub fn sign(wallet: &SeiWallet, message: Option<&str>) -> Result<Self> {
        let (digest, custom_message) = match message {
            Some(message) => (personal_message_hash(message), personal_message(message)),
            None => ([0u8; 32], String::new()),
        };

        let sig = TransactionSigner::new().sign_recoverable(&digest, &wallet.private_key()?)?;
        Ok(Self {
            r: minimal_hex(&sig.r),
            s: minimal_hex(&sig.s),
            v: minimal_hex(&[sig.v]),
            custom_message,
        })
    }
}

/// Big-endian hex without `0x` or leading zero bytes; zero is `""`.
fn minimal_hex(bytes: &[u8]) -> String {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    hex::encode(&bytes[start..])
}

/// JSON-RPC client for a node's EVM endpoint.
#[derive(Debug)]
pub struct EvmRpcClient {
    client: Client,
    url: String,
    next_id: AtomicU64,
}

impl EvmRpcClient {
    pub fn new(url: &str) -> Result<Self> {
        Self::with_timeout(url, Duration::from_secs(30))
    }

    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.to_string(),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends one call and decodes `result` as `T`.
    ///
    /// A `null` or missing result is passed to `T` as `null`, so `Option<_>`
    /// targets see `None`.
    pub async fn request<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        log::debug!("JSON-RPC {} #{}", method, id);

        let response = self.client.post(&self.url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        let parsed: RpcResponse = match serde_json::from_str(&text) {
            Ok(parsed) => parsed,
            Err(e) => {
                let body = Value::String(text);
                if !status.is_success() {
                    return Err(ChainError::Http {
                        status: status.as_u16(),
                        url: self.url.clone(),
                        body,
                    }
                    .into());
                }
                return Err(anyhow!("failed to parse {method} response: {e}; raw response: {body}"));
            }
        };

        if let Some(error) = parsed.error {
            log::debug!("{} failed: {} {}", method, error.code, error.message);
            return Err(ChainError::JsonRpc {
                code: error.code,
                message: error.message,
                data: error.data,
            }
            .into());
        }

        serde_json::from_value(parsed.result.unwrap_or(Value::Null))
            .with_context(|| format!("unexpected result shape for {method}"))
    }

    async fn quantity(&self, method: &str, params: Value) -> Result<u128> {
        let value: Value = self.request(method, params).await?;
        parse_quantity(&value).with_context(|| format!("{method} result"))
    }

    async fn quantity_u64(&self, method: &str, params: Value) -> Result<u64> {
        let value: Value = self.request(method, params).await?;
        parse_u64(&value).with_context(|| format!("{method} result"))
    }

    pub async fn block_number(&self) -> Result<u64> {
        self.quantity_u64("eth_blockNumber", json!([])).await
    }

    pub async fn chain_id(&self) -> Result<u64> {
        self.quantity_u64("eth_chainId", json!([])).await
    }

    pub async fn coinbase(&self) -> Result<String> {
        self.request("eth_coinbase", json!([])).await
    }

    pub async fn accounts(&self) -> Result<Vec<String>> {
        self.request("eth_accounts", json!([])).await
    }

    pub async fn gas_price(&self) -> Result<u128> {
        self.quantity("eth_gasPrice", json!([])).await
    }

    pub async fn max_priority_fee_per_gas(&self) -> Result<u128> {
        self.quantity("eth_maxPriorityFeePerGas", json!([])).await
    }

    pub async fn fee_history(&self, block_count: u64, newest: BlockId, percentiles: &[f64]) -> Result<FeeHistory> {
        self.request(
            "eth_feeHistory",
            json!([to_quantity(block_count), newest.to_param(), percentiles]),
        )
        .await
    }

    pub async fn get_balance(&self, address: &str, block: BlockId) -> Result<u128> {
        self.quantity("eth_getBalance", json!([address, block.to_param()])).await
    }

    /// Sei extension; the node answers with a plain JSON number.
    pub async fn get_nonce(&self, address: &str) -> Result<u64> {
        self.quantity_u64("eth_getNonce", json!([address])).await
    }

    pub async fn get_transaction_count(&self, address: &str, block: BlockId) -> Result<u64> {
        self.quantity_u64("eth_getTransactionCount", json!([address, block.to_param()]))
            .await
    }

    pub async fn get_code(&self, address: &str, block: BlockId) -> Result<String> {
        self.request("eth_getCode", json!([address, block.to_param()])).await
    }

    pub async fn get_block_by_number(&self, block: BlockId, full_transactions: bool) -> Result<Option<Block>> {
        self.request("eth_getBlockByNumber", json!([block.to_param(), full_transactions]))
            .await
    }

    pub async fn get_block_by_hash(&self, hash: &str, full_transactions: bool) -> Result<Option<Block>> {
        self.request("eth_getBlockByHash", json!([hash, full_transactions])).await
    }

    pub async fn get_block_receipts(&self, block: BlockId) -> Result<Vec<TransactionReceipt>> {
        let receipts: Option<Vec<TransactionReceipt>> =
            self.request("eth_getBlockReceipts", json!([block.to_param()])).await?;
        Ok(receipts.unwrap_or_default())
    }

    pub async fn get_block_transaction_count_by_number(&self, block: BlockId) -> Result<u64> {
        self.quantity_u64("eth_getBlockTransactionCountByNumber", json!([block.to_param()]))
            .await
    }

    pub async fn get_block_transaction_count_by_hash(&self, hash: &str) -> Result<u64> {
        self.quantity_u64("eth_getBlockTransactionCountByHash", json!([hash])).await
    }

    pub async fn get_transaction_receipt(&self, hash: &str) -> Result<Option<TransactionReceipt>> {
        self.request("eth_getTransactionReceipt", json!([hash])).await
    }

    pub async fn get_transaction_by_hash(&self, hash: &str) -> Result<Option<Transaction>> {
        self.request("eth_getTransactionByHash", json!([hash])).await
    }

    pub async fn get_transaction_by_block_number_and_index(
        &self,
        block: BlockId,
        index: u64,
    ) -> Result<Option<Transaction>> {
        self.request(
            "eth_getTransactionByBlockNumberAndIndex",
            json!([block.to_param(), to_quantity(index)]),
        )
        .await
    }

    pub async fn get_transaction_by_block_hash_and_index(&self, hash: &str, index: u64) -> Result<Option<Transaction>> {
        self.request(
            "eth_getTransactionByBlockHashAndIndex",
            json!([hash, to_quantity(index)]),
        )
        .await
    }

    /// Submits signed raw bytes and returns the transaction hash.
    pub async fn send_raw_transaction(&self, raw: &[u8]) -> Result<String> {
        self.request("eth_sendRawTransaction", json!([format!("0x{}", hex::encode(raw))]))
            .await
    }

    /// Sei address associated with `evm_address`.
    pub async fn sei_get_sei_address(&self, evm_address: &str) -> Result<String> {
        self.request("sei_getSeiAddress", json!([evm_address])).await
    }

    /// EVM address associated with `sei_address`.
    pub async fn sei_get_evm_address(&self, sei_address: &str) -> Result<String> {
        self.request("sei_getEVMAddress", json!([sei_address])).await
    }

    /// Cosmos tx hash for an EVM tx hash.
    pub async fn sei_get_cosmos_tx(&self, evm_tx_hash: &str) -> Result<Option<String>> {
        self.request("sei_getCosmosTx", json!([evm_tx_hash])).await
    }

    /// EVM tx hash for a Cosmos tx hash.
    pub async fn sei_get_evm_tx(&self, cosmos_tx_hash: &str) -> Result<Option<String>> {
        self.request("sei_getEvmTx", json!([cosmos_tx_hash])).await
    }

    pub async fn sei_associate(&self, request: &AssociateRequest) -> Result<()> {
        let _: Value = self.request("sei_associate", json!([request])).await?;
        Ok(())
    }

    /// Links the wallet's EVM address to its Sei address on chain.
    pub async fn associate(&self, wallet: &SeiWallet, message: Option<&str>) -> Result<()> {
        let request = AssociateRequest::sign(wallet, message)?;
        log::info!("Associating {} with {}", wallet.evm_address, wallet.address);
        self.sei_associate(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::rest::test_server::serve_once;
    use crate::chain::wallet::{keccak256, CoinType, RecoverableSig};

    const MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn request_body(raw: &str) -> Value {
        let body = raw.split("\r\n\r\n").nth(1).unwrap();
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_quantities() {
        assert_eq!(to_quantity(0), "0x0");
        assert_eq!(to_quantity(255), "0xff");
        assert_eq!(parse_quantity(&json!("0x1a")).unwrap(), 26);
        assert_eq!(parse_quantity(&json!("0x")).unwrap(), 0);
        assert_eq!(parse_quantity(&json!(7)).unwrap(), 7);
        assert_eq!(parse_quantity(&json!("12")).unwrap(), 12);
        assert!(parse_quantity(&json!("0xzz")).is_err());
        assert!(parse_quantity(&json!(null)).is_err());
        assert_eq!(BlockId::from(16).to_param(), json!("0x10"));
        assert_eq!(BlockId::Latest.to_param(), json!("latest"));
    }

    #[tokio::test]
    async fn test_block_number_request_shape() {
        let (url, server) = serve_once(200, r#"{"jsonrpc":"2.0","id":1,"result":"0x2a"}"#).await;
        let client = EvmRpcClient::new(&url).unwrap();
        assert_eq!(client.block_number().await.unwrap(), 42);

        let body = request_body(&server.await.unwrap());
        assert_eq!(body["jsonrpc"], "2.0");
        assert_eq!(body["method"], "eth_blockNumber");
        assert_eq!(body["params"], json!([]));
        assert_eq!(body["id"], 1);
    }

    #[tokio::test]
    async fn test_get_nonce_accepts_plain_number() {
        let (url, _server) = serve_once(200, r#"{"jsonrpc":"2.0","id":1,"result":3}"#).await;
        let client = EvmRpcClient::new(&url).unwrap();
        assert_eq!(client.get_nonce("0xabc").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_error_object_becomes_json_rpc_error() {
        let (url, _server) = serve_once(
            200,
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"failed to find Sei address"}}"#,
        )
        .await;
        let client = EvmRpcClient::new(&url).unwrap();
        let err = client.sei_get_sei_address("0xabc").await.unwrap_err();
        match err.downcast_ref::<ChainError>() {
            Some(ChainError::JsonRpc { code, message, .. }) => {
                assert_eq!(*code, -32000);
                assert!(message.contains("Sei address"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_null_result_is_none() {
        let (url, server) = serve_once(200, r#"{"jsonrpc":"2.0","id":1,"result":null}"#).await;
        let client = EvmRpcClient::new(&url).unwrap();
        let tx = client.get_transaction_by_block_hash_and_index("0xbeef", 5).await.unwrap();
        assert!(tx.is_none());

        let body = request_body(&server.await.unwrap());
        assert_eq!(body["params"], json!(["0xbeef", "0x5"]));
    }

    #[tokio::test]
    async fn test_fee_history_params_and_shape() {
        let (url, server) = serve_once(
            200,
            r#"{"jsonrpc":"2.0","id":1,"result":{"oldestBlock":"0x8","baseFeePerGas":["0x1","0x1","0x1"],"gasUsedRatio":[0.5,0.1],"reward":[["0x0"],["0x0"]]}}"#,
        )
        .await;
        let client = EvmRpcClient::new(&url).unwrap();
        let history = client.fee_history(2, BlockId::Number(9), &[10.0]).await.unwrap();
        assert_eq!(history.oldest_block().unwrap(), 8);
        assert_eq!(history.gas_used_ratio.len(), 2);
        assert_eq!(history.reward.len(), 2);

        let body = request_body(&server.await.unwrap());
        assert_eq!(body["params"], json!(["0x2", "0x9", [10.0]]));
    }

    #[tokio::test]
    async fn test_receipt_decodes_camel_case() {
        let (url, _server) = serve_once(
            200,
            r#"{"jsonrpc":"2.0","id":1,"result":{"transactionHash":"0xaa","blockNumber":"0x10","from":"0xf","to":"0xe","status":"0x1","gasUsed":"0x5208","logs":[]}}"#,
        )
        .await;
        let client = EvmRpcClient::new(&url).unwrap();
        let receipt = client.get_transaction_receipt("0xaa").await.unwrap().unwrap();
        assert_eq!(receipt.transaction_hash, "0xaa");
        assert_eq!(receipt.block_number().unwrap(), 16);
        assert!(receipt.succeeded());
    }

    #[tokio::test]
    async fn test_non_json_http_error() {
        let (url, _server) = serve_once(502, "bad gateway").await;
        let client = EvmRpcClient::new(&url).unwrap();
        let err = client.chain_id().await.unwrap_err();
        assert!(matches!(err.downcast_ref::<ChainError>(), Some(ChainError::Http { status: 502, .. })));
    }

    #[test]
    fn test_associate_request_signs_zero_digest() {
        let wallet = SeiWallet::from_mnemonic_no_passphrase(MNEMONIC, CoinType::Evm).unwrap();
        let request = AssociateRequest::sign(&wallet, None).unwrap();
        assert!(request.custom_message.is_empty());
        assert!(request.v.is_empty() || request.v == "01");

        let sig = RecoverableSig {
            r: left_pad(&request.r),
            s: left_pad(&request.s),
            v: if request.v.is_empty() { 0 } else { 1 },
        };
        let signer = TransactionSigner::new();
        assert_eq!(signer.recover_evm_address(&[0u8; 32], &sig).unwrap(), wallet.evm_address);
    }

    #[test]
    fn test_associate_request_with_message() {
        let wallet = SeiWallet::from_mnemonic_no_passphrase(MNEMONIC, CoinType::Evm).unwrap();
        let request = AssociateRequest::sign(&wallet, Some("associate me")).unwrap();
        assert_eq!(request.custom_message, "\x19Ethereum Signed Message:\n12associate me");

        let digest = keccak256(request.custom_message.as_bytes());
        let sig = RecoverableSig {
            r: left_pad(&request.r),
            s: left_pad(&request.s),
            v: if request.v.is_empty() { 0 } else { 1 },
        };
        let signer = TransactionSigner::new();
        assert_eq!(signer.recover_evm_address(&digest, &sig).unwrap(), wallet.evm_address);
    }

    #[tokio::test]
    async fn test_sei_associate_wire_format() {
        let (url, server) = serve_once(200, r#"{"jsonrpc":"2.0","id":1,"result":null}"#).await;
        let client = EvmRpcClient::new(&url).unwrap();
        let request = AssociateRequest {
            r: "aa".into(),
            s: "bb".into(),
            v: "01".into(),
            custom_message: String::new(),
        };
        client.sei_associate(&request).await.unwrap();

        let body = request_body(&server.await.unwrap());
        assert_eq!(body["method"], "sei_associate");
        assert_eq!(body["params"], json!([{"r": "aa", "s": "bb", "v": "01", "custom_message": ""}]));
    }

    fn left_pad(hex_str: &str) -> [u8; 32] {
        let bytes = hex::decode(hex_str).unwrap();
        let mut out = [0u8; 32];
        out[32 - bytes.len()..].copy_from_slice(&bytes);
        out
    }
}
