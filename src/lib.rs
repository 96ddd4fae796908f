// Library exports for sei_client

pub mod chain;
pub mod config;
pub mod harness;

// Re-export main types for convenience
pub use chain::{ChainError, CoinType, EvmRpcClient, SeiClient, SeiWallet};
pub use config::Config;
pub use harness::{EvmRpcSuite, SeidCli};
