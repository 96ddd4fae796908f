mod keys;
mod signer;

pub use keys::{
    bech32_address, evm_address, keccak256, parse_evm_address, to_checksum_address, CoinType, SeiWallet, SEI_PREFIX,
};
pub use signer::{personal_message, personal_message_hash, RecoverableSig, TransactionSigner};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_generation() {
        let mnemonic = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
        let wallet = SeiWallet::from_mnemonic_no_passphrase(mnemonic, CoinType::Cosmos).unwrap();

        assert!(wallet.address.starts_with("sei1"));
        assert_eq!(wallet.address.len(), 42);
        assert!(wallet.evm_address.starts_with("0x"));
        assert_eq!(wallet.evm_address.len(), 42);
    }

    #[test]
    fn test_deterministic_generation() {
        let mnemonic = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

        let wallet1 = SeiWallet::from_mnemonic(mnemonic, "", CoinType::Evm).unwrap();
        let wallet2 = SeiWallet::from_mnemonic(mnemonic, "", CoinType::Evm).unwrap();
        assert_eq!(wallet1.address, wallet2.address);
        assert_eq!(wallet1.evm_address, wallet2.evm_address);
    }
}
