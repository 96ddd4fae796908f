/// Smoke test of the REST and gRPC query clients against a configured node
/// Run with: cargo run --bin test_queries [config.toml]

use std::time::Duration;

use anyhow::Result;
use sei_client::chain::grpc::{BankQueryClient, GrpcTransport, OracleQueryClient};
use sei_client::chain::proto::cosmos::bank::QueryAllBalancesRequest;
use sei_client::chain::proto::sei::oracle::{QueryActivesRequest, QueryExchangeRatesRequest};
use sei_client::chain::rest::{BankRestClient, EvmRestClient, HttpClient, OracleRestClient, SlashingRestClient, TokenfactoryRestClient};
use sei_client::{CoinType, Config, SeiWallet};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    println!("=== Sei Query Test ===\n");

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Config::default_path()?)?,
    };
    let timeout = Duration::from_secs(config.chain.request_timeout);

    let wallet = SeiWallet::from_mnemonic_no_passphrase(
        "test test test test test test test test test test test junk",
        CoinType::Evm,
    )?;
    println!("Test wallet: {} / {}", wallet.address, wallet.evm_address);
    println!("REST endpoint: {}", config.chain.rest_endpoint);
    println!("gRPC endpoint: {}\n", config.chain.grpc_endpoint);

    let http = HttpClient::with_timeout(&config.chain.rest_endpoint, timeout)?;

    println!("=== REST: Oracle ===");
    let oracle = OracleRestClient::new(http.clone());
    match oracle.exchange_rates().await {
        Ok(rates) => {
            println!("✅ Exchange rates: {} denoms", rates.denom_oracle_exchange_rate_pairs.len());
            for pair in &rates.denom_oracle_exchange_rate_pairs {
                if let Some(rate) = &pair.oracle_exchange_rate {
                    println!("  {}: {}", pair.denom, rate.exchange_rate);
                }
            }
        }
        Err(e) => println!("❌ Exchange rates failed: {}", e),
    }
    match oracle.params().await {
        Ok(params) => println!("✅ Oracle params: {:?}", params.params.map(|p| p.vote_period)),
        Err(e) => println!("❌ Oracle params failed: {}", e),
    }
    println!();

    println!("=== REST: Bank ===");
    match BankRestClient::new(http.clone()).all_balances(&wallet.address, None).await {
        Ok(balances) => println!("✅ Balances: {:?}", balances.balances),
        Err(e) => println!("❌ Balances failed: {}", e),
    }
    println!();

    println!("=== REST: Tokenfactory ===");
    match TokenfactoryRestClient::new(http.clone()).denoms_from_creator(&wallet.address).await {
        Ok(denoms) => println!("✅ Denoms from creator: {:?}", denoms.denoms),
        Err(e) => println!("❌ Denoms from creator failed: {}", e),
    }
    println!();

    println!("=== REST: EVM ===");
    match EvmRestClient::new(http.clone()).sei_address(&wallet.evm_address).await {
        Ok(response) => println!("✅ Sei address: {} (associated: {})", response.sei_address, response.associated),
        Err(e) => println!("❌ Sei address failed: {}", e),
    }
    println!();

    println!("=== REST: Slashing ===");
    match SlashingRestClient::new(http).signing_infos(None).await {
        Ok(infos) => println!("✅ Signing infos: {}", infos.info.len()),
        Err(e) => println!("❌ Signing infos failed: {}", e),
    }
    println!();

    println!("=== gRPC ===");
    let transport = match GrpcTransport::connect(
        &config.chain.grpc_endpoint,
        Duration::from_secs(config.chain.connection_timeout),
        timeout,
    )
    .await
    {
        Ok(transport) => {
            println!("✅ Connected");
            transport
        }
        Err(e) => {
            println!("❌ Connection failed: {}", e);
            return Ok(());
        }
    };

    let oracle = OracleQueryClient::new(transport.clone());
    match oracle.actives(QueryActivesRequest {}).await {
        Ok(actives) => println!("✅ Active denoms: {:?}", actives.actives),
        Err(e) => println!("❌ Actives failed: {}", e),
    }
    match oracle.exchange_rates(QueryExchangeRatesRequest {}).await {
        Ok(rates) => println!("✅ Exchange rates: {} denoms", rates.denom_oracle_exchange_rate_pairs.len()),
        Err(e) => println!("❌ Exchange rates failed: {}", e),
    }

    let bank = BankQueryClient::new(transport);
    match bank
        .all_balances(QueryAllBalancesRequest {
            address: wallet.address.clone(),
            pagination: None,
        })
        .await
    {
        Ok(balances) => println!("✅ Balances: {:?}", balances.balances),
        Err(e) => println!("❌ Balances failed: {}", e),
    }

    println!("\n=== Test Complete ===");
    Ok(())
}
