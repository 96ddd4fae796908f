use anyhow::{anyhow, Result};
use bech32::Hrp;
use bip32::{ChildNumber, XPrv};
use bip39::Mnemonic;
use rand::RngCore;
use ripemd::Ripemd160;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};
use tiny_keccak::{Hasher, Keccak};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

pub const SEI_PREFIX: &str = "sei";

/// BIP44 coin type a wallet's key is derived under.
///
/// Cosmos wallets use 118, EVM wallets use 60; the same mnemonic therefore
/// yields two unrelated key pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoinType {
    Cosmos,
    Evm,
}

impl CoinType {
    pub fn number(self) -> u32 {
        match self {
            CoinType::Cosmos => 118,
            CoinType::Evm => 60,
        }
    }

    pub fn hd_path(self) -> String {
        format!("m/44'/{}'/0'/0/0", self.number())
    }
}

/// secp256k1 key pair with its Sei bech32 and EVM addresses.
///
/// Key material is wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SeiWallet {
    #[zeroize(skip)]
    pub address: String,
    #[zeroize(skip)]
    pub evm_address: String,

    private_key_bytes: [u8; 32],
    public_key_bytes: [u8; 33],
}

impl std::fmt::Debug for SeiWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeiWallet")
            .field("address", &self.address)
            .field("evm_address", &self.evm_address)
            .finish_non_exhaustive()
    }
}

impl SeiWallet {
    /// Derives the key at `m/44'/{coin}'/0'/0/0` from a BIP39 mnemonic.
    pub fn from_mnemonic(mnemonic_str: &str, passphrase: &str, coin_type: CoinType) -> Result<Self> {
        let mnemonic = Mnemonic::parse(mnemonic_str)?;
        let mut seed = mnemonic.to_seed(passphrase);
        let derived = derive_private_key_bip32(&seed, coin_type);
        seed.zeroize();

        let mut private_key = derived?;
        let wallet = Self::from_private_key(&private_key);
        private_key.zeroize();
        wallet
    }

    pub fn from_mnemonic_no_passphrase(mnemonic_str: &str, coin_type: CoinType) -> Result<Self> {
        Self::from_mnemonic(mnemonic_str, "", coin_type)
    }

    /// Fresh 12-word mnemonic and the wallet derived from it.
    pub fn generate(coin_type: CoinType) -> Result<(Self, String)> {
        let mut entropy = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut entropy);
        let mnemonic = Mnemonic::from_entropy(&entropy)?;
        entropy.zeroize();

        let phrase = mnemonic.to_string();
        let wallet = Self::from_mnemonic_no_passphrase(&phrase, coin_type)?;
        Ok((wallet, phrase))
    }

    pub fn from_private_key(private_key: &[u8; 32]) -> Result<Self> {
        let secp = Secp256k1::new();
        let secret_key = SecretKey::from_slice(private_key)?;
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);

        Ok(Self {
            address: bech32_address(&public_key, SEI_PREFIX)?,
            evm_address: evm_address(&public_key),
            private_key_bytes: *private_key,
            public_key_bytes: public_key.serialize(),
        })
    }

    /// Accepts hex with or without `0x`.
    pub fn from_private_key_hex(hex_key: &str) -> Result<Self> {
        let bytes = Zeroizing::new(hex::decode(hex_key.trim_start_matches("0x"))?);
        let key: Zeroizing<[u8; 32]> = Zeroizing::new(
            bytes
                .as_slice()
                .try_into()
                .map_err(|_| anyhow!("private key must be 32 bytes, got {}", bytes.len()))?,
        );
        Self::from_private_key(&key)
    }

    /// Caller is responsible for secure handling.
    pub fn private_key(&self) -> Result<SecretKey> {
        SecretKey::from_slice(&self.private_key_bytes).map_err(|e| anyhow!("Invalid private key: {}", e))
    }

    pub fn public_key(&self) -> Result<PublicKey> {
        PublicKey::from_slice(&self.public_key_bytes).map_err(|e| anyhow!("Invalid public key: {}", e))
    }

    /// 33-byte compressed public key.
    pub fn public_key_compressed(&self) -> [u8; 33] {
        self.public_key_bytes
    }

    /// 65-byte uncompressed public key (0x04 prefix).
    pub fn public_key_uncompressed(&self) -> Result<[u8; 65]> {
        Ok(self.public_key()?.serialize_uncompressed())
    }

    /// Bech32 address of this key under another human-readable prefix.
    pub fn address_with_prefix(&self, prefix: &str) -> Result<String> {
        bech32_address(&self.public_key()?, prefix)
    }
}

fn derive_private_key_bip32(seed: &[u8], coin_type: CoinType) -> Result<[u8; 32]> {
    let xprv = XPrv::new(seed).map_err(|e| anyhow!("Failed to create XPrv from seed: {}", e))?;

    let derived = xprv
        .derive_child(ChildNumber::new(44, true)?)
        .and_then(|k| k.derive_child(ChildNumber::new(coin_type.number(), true)?))
        .and_then(|k| k.derive_child(ChildNumber::new(0, true)?))
        .and_then(|k| k.derive_child(ChildNumber::new(0, false)?))
        .and_then(|k| k.derive_child(ChildNumber::new(0, false)?))
        .map_err(|e| anyhow!("Failed to derive {}: {}", coin_type.hd_path(), e))?;

    Ok(derived.to_bytes())
}

/// bech32(prefix, RIPEMD160(SHA256(compressed pubkey))).
pub fn bech32_address(public_key: &PublicKey, prefix: &str) -> Result<String> {
    let sha = Sha256::digest(public_key.serialize());
    let hash = Ripemd160::digest(sha);
    let hrp = Hrp::parse(prefix)?;
    Ok(bech32::encode::<bech32::Bech32>(hrp, &hash)?)
}

/// EIP-55 address: last 20 bytes of Keccak256 over the uncompressed key without its prefix.
pub fn evm_address(public_key: &PublicKey) -> String {
    let uncompressed = public_key.serialize_uncompressed();
    let hash = keccak256(&uncompressed[1..]);
    to_checksum_address(&hash[12..])
}

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut hash = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut hash);
    hash
}

/// Mixed-case EIP-55 rendering of a 20-byte address.
pub fn to_checksum_address(address: &[u8]) -> String {
    let lower = hex::encode(address);
    let hash = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = (hash[i / 2] >> (if i % 2 == 0 { 4 } else { 0 })) & 0x0f;
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Parses a `0x`-prefixed 20-byte address in any casing.
pub fn parse_evm_address(address: &str) -> Result<[u8; 20]> {
    let bytes = hex::decode(address.trim_start_matches("0x"))?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| anyhow!("EVM address must be 20 bytes, got {}", bytes.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_evm_derivation_vector() {
        let wallet = SeiWallet::from_mnemonic_no_passphrase(MNEMONIC, CoinType::Evm).unwrap();
        assert_eq!(wallet.evm_address, "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
        assert!(wallet.address.starts_with("sei1"));
    }

    #[test]
    fn test_cosmos_derivation_vector() {
        let wallet = SeiWallet::from_mnemonic_no_passphrase(MNEMONIC, CoinType::Cosmos).unwrap();
        assert_eq!(
            wallet.address_with_prefix("cosmos").unwrap(),
            "cosmos19rl4cm2hmr8afy4kldpxz3fka4jguq0auqdal4"
        );
        // Same key hash, different prefix.
        assert!(wallet.address.starts_with("sei1"));
        assert_eq!(wallet.address.len(), 42);
    }

    #[test]
    fn test_coin_types_give_different_keys() {
        let cosmos = SeiWallet::from_mnemonic_no_passphrase(MNEMONIC, CoinType::Cosmos).unwrap();
        let evm = SeiWallet::from_mnemonic_no_passphrase(MNEMONIC, CoinType::Evm).unwrap();
        assert_ne!(cosmos.address, evm.address);
        assert_ne!(cosmos.evm_address, evm.evm_address);
        assert_eq!(CoinType::Cosmos.hd_path(), "m/44'/118'/0'/0/0");
    }

    #[test]
    fn test_passphrase_changes_key() {
        let a = SeiWallet::from_mnemonic(MNEMONIC, "", CoinType::Evm).unwrap();
        let b = SeiWallet::from_mnemonic(MNEMONIC, "test123", CoinType::Evm).unwrap();
        let c = SeiWallet::from_mnemonic(MNEMONIC, "test123", CoinType::Evm).unwrap();
        assert_ne!(a.address, b.address);
        assert_eq!(b.address, c.address);
    }

    #[test]
    fn test_eip55_vector() {
        let bytes = hex::decode("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        assert_eq!(to_checksum_address(&bytes), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
        assert_eq!(
            parse_evm_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap().to_vec(),
            bytes
        );
    }

    #[test]
    fn test_generate_round_trips_through_mnemonic() {
        let (wallet, phrase) = SeiWallet::generate(CoinType::Cosmos).unwrap();
        assert_eq!(phrase.split_whitespace().count(), 12);
        let again = SeiWallet::from_mnemonic_no_passphrase(&phrase, CoinType::Cosmos).unwrap();
        assert_eq!(wallet.address, again.address);
    }

    #[test]
    fn test_private_key_hex_and_debug_redaction() {
        let wallet = SeiWallet::from_private_key_hex(&format!("0x{}", "46".repeat(32))).unwrap();
        assert_eq!(wallet.public_key_compressed().len(), 33);
        assert_eq!(wallet.public_key_uncompressed().unwrap()[0], 0x04);
        let debug = format!("{wallet:?}");
        assert!(debug.contains(&wallet.address));
        assert!(!debug.contains(&"46".repeat(32)));
        assert!(SeiWallet::from_private_key_hex("abcd").is_err());
        assert!(SeiWallet::from_private_key_hex(&"11".repeat(33)).is_err());
    }
}
