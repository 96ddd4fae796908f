//! Live-node harness: CLI funding plus the JSON-RPC scenario suite.

mod cli;
mod scenario;

pub use cli::{CliTxResult, SeidCli};
pub use scenario::{EvmRpcSuite, ScenarioResult, SuiteReport};
