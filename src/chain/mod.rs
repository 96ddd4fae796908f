pub mod account_types;
pub mod client;
pub mod codec;
pub mod error;
pub mod evm_rpc;
pub mod evm_tx;
pub mod grpc;
pub mod proto;
pub mod rest;
pub mod tx_builder;
pub mod wallet;

pub use account_types::{Account, AccountInfo};
pub use client::{BroadcastResult, ClientConfig, SeiClient, SimulateResult};
pub use codec::{from_any, to_any, WireCodec};
pub use error::ChainError;
pub use evm_rpc::{AssociateRequest, BlockId, EvmRpcClient};
pub use evm_tx::LegacyTransaction;
pub use grpc::{GrpcTransport, Rpc};
pub use rest::HttpClient;
pub use tx_builder::SeiTxBuilder;
pub use wallet::{CoinType, SeiWallet, TransactionSigner};
