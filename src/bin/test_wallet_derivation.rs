use sei_client::chain::evm_tx::{tx_hash, LegacyTransaction};
use sei_client::chain::wallet::personal_message_hash;
use sei_client::chain::AssociateRequest;
use sei_client::{CoinType, SeiWallet};

fn main() {
    let mnemonic = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    println!("=== Testing Wallet Address Derivation ===\n");

    for coin_type in [CoinType::Cosmos, CoinType::Evm] {
        match SeiWallet::from_mnemonic_no_passphrase(mnemonic, coin_type) {
            Ok(wallet) => {
                println!("{} derivation:", coin_type.hd_path());
                println!("Sei address: {}", wallet.address);
                println!("EVM address: {}", wallet.evm_address);
                println!("Public key (hex): {}", hex::encode(wallet.public_key_compressed()));
                if coin_type == CoinType::Evm {
                    println!("\nExpected EVM address: 0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
                }
            }
            Err(e) => {
                eprintln!("Error deriving {}: {}", coin_type.hd_path(), e);
            }
        }
        println!("\n---\n");
    }

    println!("=== Testing Signing ===\n");

    let wallet = match SeiWallet::from_mnemonic_no_passphrase(mnemonic, CoinType::Evm) {
        Ok(wallet) => wallet,
        Err(e) => {
            eprintln!("Error deriving wallet: {}", e);
            return;
        }
    };

    match AssociateRequest::sign(&wallet, None) {
        Ok(request) => {
            println!("✅ Association signature over the empty digest:");
            println!("  r: {}", request.r);
            println!("  s: {}", request.s);
            println!("  v: {:?}", request.v);
        }
        Err(e) => println!("❌ Association signing failed: {}", e),
    }

    println!("Personal message hash of \"hello\": 0x{}", hex::encode(personal_message_hash("hello")));

    let tx = LegacyTransaction::transfer(&wallet.evm_address, 100_000_000_000_000_000, 0, 1_000_000_000, 713_715);
    match tx.and_then(|tx| tx.sign(&wallet)) {
        Ok(raw) => {
            println!("✅ Signed transfer ({} bytes)", raw.len());
            println!("  hash: {}", tx_hash(&raw));
        }
        Err(e) => println!("❌ Transfer signing failed: {}", e),
    }
}
