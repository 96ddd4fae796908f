/// Runs the EVM JSON-RPC scenarios against a local node
/// Run with: cargo run --bin test_evm_rpc [config.toml]

use anyhow::Result;
use sei_client::{Config, EvmRpcClient, EvmRpcSuite};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    println!("=== Sei EVM JSON-RPC Test ===\n");

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Config::default_path()?)?,
    };
    println!("EVM RPC: {}", config.chain.evm_rpc_endpoint);
    println!("gRPC: {}", config.chain.grpc_endpoint);
    println!("seid: {}\n", config.harness.seid_binary);

    let evm = EvmRpcClient::new(&config.chain.evm_rpc_endpoint)?;
    match evm.block_number().await {
        Ok(height) => println!("✅ Node reachable at block {}\n", height),
        Err(e) => {
            println!("❌ Node unreachable: {}", e);
            std::process::exit(1);
        }
    }

    let report = EvmRpcSuite::new(config).await?.run().await?;

    println!("\n=== Results ===");
    println!("{report}");

    if !report.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}
