use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use base64::Engine;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sei_client::chain::codec::any_registry;
use sei_client::chain::grpc::{AuthQueryClient, BankQueryClient, EvmQueryClient, GrpcTransport};
use sei_client::chain::proto::cosmos::auth::QueryAccountRequest;
use sei_client::chain::proto::cosmos::bank::QueryAllBalancesRequest;
use sei_client::chain::proto::sei::evm::{QueryEvmAddressBySeiAddressRequest, QuerySeiAddressByEvmAddressRequest};
use sei_client::chain::rest::{HttpClient, OracleRestClient, SlashingRestClient};
use sei_client::chain::{Account, WireCodec};
use sei_client::{CoinType, Config, EvmRpcSuite, SeiWallet};

#[derive(Parser)]
#[command(name = "sei-client")]
#[command(about = "Sei chain query and EVM JSON-RPC tooling", version)]
struct Cli {
    /// Configuration file (defaults to ~/.sei_client/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a default configuration file
    Init {
        /// Output path for config file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the Sei and EVM addresses a mnemonic derives under both coin types
    Addresses {
        #[arg(long, env = "SEI_MNEMONIC", hide_env_values = true)]
        mnemonic: String,
    },

    /// All bank balances of an address
    Balance { address: String },

    /// Account number, sequence and type of an address
    Account { address: String },

    /// Oracle exchange rates of every active denom
    ExchangeRates,

    /// Oracle exchange rate of one denom
    ExchangeRate { denom: String },

    /// Look up the counterpart of an EVM (0x...) or Sei (sei1...) address
    Association { address: String },

    /// Validator signing info for a consensus address
    SigningInfo { cons_address: String },

    /// Decode a protobuf value by type URL; the value is base64 or 0x-hex
    Decode { type_url: String, value: String },

    /// Fund two fresh wallets and run the EVM JSON-RPC scenarios
    Scenarios,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sei_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    run(cli.command, cli.config.as_deref()).await
}

/// `--config` when given, otherwise the per-user default.
fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::default_path(),
    }
}

async fn run(command: Commands, config: Option<&Path>) -> Result<()> {
    let load = || Config::load_or_default(config_path(config)?);

    match command {
        Commands::Init { output } => {
            let output = match output {
                Some(output) => output,
                None => config_path(config)?,
            };
            Config::default().save(&output)?;
            info!("Configuration file created at: {}", output.display());
        }
        Commands::Addresses { mnemonic } => {
            for coin_type in [CoinType::Cosmos, CoinType::Evm] {
                let wallet = SeiWallet::from_mnemonic_no_passphrase(&mnemonic, coin_type)?;
                println!("{} ({})", coin_type.hd_path(), coin_type.number());
                println!("  sei: {}", wallet.address);
                println!("  evm: {}", wallet.evm_address);
            }
        }
        Commands::Balance { address } => {
            let bank = BankQueryClient::new(connect(&load()?).await?);
            let response = bank
                .all_balances(QueryAllBalancesRequest {
                    address,
                    pagination: None,
                })
                .await?;
            print_json(&response)?;
        }
        Commands::Account { address } => {
            let auth = AuthQueryClient::new(connect(&load()?).await?);
            let response = auth.account(QueryAccountRequest { address }).await?;
            let any = response.account.ok_or_else(|| anyhow!("account not found"))?;
            let account = Account::from_any(&any)?;
            println!("type: {}", account.account_type());
            match account.get_account_info() {
                Some(info) => {
                    println!("address: {}", info.address);
                    println!("account_number: {}", info.account_number);
                    println!("sequence: {}", info.sequence);
                }
                None => println!("unsupported account type {}", any.type_url),
            }
        }
        Commands::ExchangeRates => {
            let oracle = OracleRestClient::new(rest(&load()?)?);
            print_json(&oracle.exchange_rates().await?)?;
        }
        Commands::ExchangeRate { denom } => {
            let oracle = OracleRestClient::new(rest(&load()?)?);
            print_json(&oracle.exchange_rate(&denom).await?)?;
        }
        Commands::Association { address } => {
            let evm = EvmQueryClient::new(connect(&load()?).await?);
            if address.starts_with("0x") {
                let response = evm
                    .sei_address_by_evm_address(QuerySeiAddressByEvmAddressRequest { evm_address: address })
                    .await?;
                print_json(&response)?;
            } else {
                let response = evm
                    .evm_address_by_sei_address(QueryEvmAddressBySeiAddressRequest { sei_address: address })
                    .await?;
                print_json(&response)?;
            }
        }
        Commands::SigningInfo { cons_address } => {
            let slashing = SlashingRestClient::new(rest(&load()?)?);
            print_json(&slashing.signing_info(&cons_address).await?)?;
        }
        Commands::Decode { type_url, value } => {
            let bytes = decode_value(&value)?;
            let json = any_registry::to_json(&type_url, &bytes)
                .ok_or_else(|| anyhow!("unknown type URL {}", type_url))??;
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        Commands::Scenarios => {
            let report = EvmRpcSuite::new(load()?).await?.run().await?;
            println!("{report}");
            if !report.all_passed() {
                bail!("{} scenario(s) failed", report.failed());
            }
        }
    }
    Ok(())
}

async fn connect(config: &Config) -> Result<GrpcTransport> {
    GrpcTransport::connect(
        &config.chain.grpc_endpoint,
        Duration::from_secs(config.chain.connection_timeout),
        Duration::from_secs(config.chain.request_timeout),
    )
    .await
    .with_context(|| format!("connecting to {}", config.chain.grpc_endpoint))
}

fn rest(config: &Config) -> Result<HttpClient> {
    HttpClient::with_timeout(&config.chain.rest_endpoint, Duration::from_secs(config.chain.request_timeout))
}

fn print_json<M: WireCodec>(msg: &M) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&msg.to_json()?)?);
    Ok(())
}

fn decode_value(value: &str) -> Result<Vec<u8>> {
    match value.strip_prefix("0x") {
        Some(hex_value) => Ok(hex::decode(hex_value)?),
        None => Ok(base64::engine::general_purpose::STANDARD.decode(value)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_with_output_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sei.toml");
        run(Commands::Init { output: Some(output.clone()) }, None).await.unwrap();
        assert_eq!(Config::load(&output).unwrap().chain.chain_id, "sei-chain");
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let path = Path::new("/tmp/custom.toml");
        assert_eq!(config_path(Some(path)).unwrap(), path);
    }

    #[test]
    fn test_decode_value_accepts_hex_and_base64() {
        assert_eq!(decode_value("0x0a04").unwrap(), vec![0x0a, 0x04]);
        assert_eq!(decode_value("CgQ=").unwrap(), vec![0x0a, 0x04]);
        assert!(decode_value("0xzz").is_err());
    }
}
