//! Cosmos SDK transaction assembly and SIGN_MODE_DIRECT signing.

use anyhow::{anyhow, Result};

use crate::chain::codec::{to_any, WireCodec};
use crate::chain::proto::cosmos::bank::MsgSend;
use crate::chain::proto::cosmos::crypto::PubKey;
use crate::chain::proto::cosmos::tx::{AuthInfo, Fee, ModeInfo, SignDoc, SignMode, SignerInfo, TxBody, TxRaw};
use crate::chain::proto::{Any, Coin};
use crate::chain::wallet::{SeiWallet, TransactionSigner};

pub const DEFAULT_GAS_LIMIT: u64 = 200_000;
pub const DEFAULT_GAS_PRICE: &str = "0.1usei";

/// Builds and signs transactions for one account at one sequence.
pub struct SeiTxBuilder<'a> {
    chain_id: String,
    account_number: u64,
    sequence: u64,
    gas_limit: u64,
    gas_price: String,
    memo: String,
    wallet: &'a SeiWallet,
    signer: TransactionSigner,
}

impl<'a> SeiTxBuilder<'a> {
    pub fn new(chain_id: String, account_number: u64, sequence: u64, wallet: &'a SeiWallet) -> Self {
        Self {
            chain_id,
            account_number,
            sequence,
            gas_limit: DEFAULT_GAS_LIMIT,
            gas_price: DEFAULT_GAS_PRICE.to_string(),
            memo: String::new(),
            wallet,
            signer: TransactionSigner::new(),
        }
    }

    pub fn set_gas_limit(&mut self, gas_limit: u64) {
        self.gas_limit = gas_limit;
    }

    /// Price per gas unit with its denom, e.g. `0.1usei`.
    pub fn set_gas_price(&mut self, gas_price: String) {
        self.gas_price = gas_price;
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    pub fn with_gas_price(mut self, gas_price: impl Into<String>) -> Self {
        self.gas_price = gas_price.into();
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// Signed `TxRaw` bytes for a bank transfer from the wallet.
    pub fn build_send_tx(&self, to_address: &str, amount: Vec<Coin>) -> Result<Vec<u8>> {
        let msg = MsgSend {
            from_address: self.wallet.address.clone(),
            to_address: to_address.to_string(),
            amount,
        };
        self.build_tx(vec![to_any(&msg)])
    }

    /// Signed `TxRaw` bytes carrying `messages`.
    pub fn build_tx(&self, messages: Vec<Any>) -> Result<Vec<u8>> {
        Ok(self.build_tx_raw(messages)?.to_bytes())
    }

    pub fn build_tx_raw(&self, messages: Vec<Any>) -> Result<TxRaw> {
        let (sign_doc, body_bytes, auth_info_bytes) = self.sign_doc(messages)?;

        let private_key = self.wallet.private_key()?;
        let signature = self.signer.sign_direct(&sign_doc.to_bytes(), &private_key)?;

        Ok(TxRaw {
            body_bytes,
            auth_info_bytes,
            signatures: vec![signature],
        })
    }

    /// Unsigned transaction with an empty signature, for `Simulate`.
    pub fn build_unsigned_tx(&self, messages: Vec<Any>) -> Result<Vec<u8>> {
        let (_, body_bytes, auth_info_bytes) = self.sign_doc(messages)?;
        Ok(TxRaw {
            body_bytes,
            auth_info_bytes,
            signatures: vec![Vec::new()],
        }
        .to_bytes())
    }

    fn sign_doc(&self, messages: Vec<Any>) -> Result<(SignDoc, Vec<u8>, Vec<u8>)> {
        if messages.is_empty() {
            return Err(anyhow!("transaction must carry at least one message"));
        }

        let tx_body = TxBody {
            messages,
            memo: self.memo.clone(),
            ..Default::default()
        };

        let fee = Fee {
            amount: self.fee_amount()?,
            gas_limit: self.gas_limit,
            ..Default::default()
        };

        let pub_key = PubKey {
            key: self.wallet.public_key_compressed().to_vec(),
        };
        let signer_info = SignerInfo {
            public_key: Some(to_any(&pub_key)),
            mode_info: Some(ModeInfo::single(SignMode::Direct)),
            sequence: self.sequence,
        };

        let auth_info = AuthInfo {
            signer_infos: vec![signer_info],
            fee: Some(fee),
        };

        let body_bytes = tx_body.to_bytes();
        let auth_info_bytes = auth_info.to_bytes();
        let sign_doc = SignDoc {
            body_bytes: body_bytes.clone(),
            auth_info_bytes: auth_info_bytes.clone(),
            chain_id: self.chain_id.clone(),
            account_number: self.account_number,
        };
        Ok((sign_doc, body_bytes, auth_info_bytes))
    }

    /// `ceil(gas_limit * gas_price)` in the price's denom.
    fn fee_amount(&self) -> Result<Vec<Coin>> {
        let (numerator, scale, denom) = parse_gas_price(&self.gas_price)?;
        let divisor = 10u128.pow(scale);
        let total = (self.gas_limit as u128)
            .checked_mul(numerator)
            .ok_or_else(|| anyhow!("fee overflows for gas limit {} at {}", self.gas_limit, self.gas_price))?
            .div_ceil(divisor);
        Ok(vec![Coin::new(total, denom)])
    }
}

/// Splits `0.1usei` into (1, 1, "usei"): the price is `numerator / 10^scale`.
fn parse_gas_price(price: &str) -> Result<(u128, u32, String)> {
    let split_pos = price
        .find(|c: char| c.is_ascii_alphabetic())
        .ok_or_else(|| anyhow!("Invalid gas price format: {price}"))?;
    let (amount, denom) = price.split_at(split_pos);
    if amount.is_empty() {
        return Err(anyhow!("Invalid gas price format: {price}"));
    }

    let (whole, frac) = amount.split_once('.').unwrap_or((amount, ""));
    let scale = u32::try_from(frac.len())?;
    if scale > 18 {
        return Err(anyhow!("gas price {price} has too many decimals"));
    }
    let digits = format!("{whole}{frac}");
    let numerator: u128 = digits
        .parse()
        .map_err(|e| anyhow!("Invalid gas price amount {amount}: {e}"))?;
    Ok((numerator, scale, denom.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::codec::from_any;
    use crate::chain::wallet::CoinType;
    use secp256k1::ecdsa::Signature;
    use secp256k1::{Message, Secp256k1};
    use sha2::{Digest, Sha256};

    const MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_send_tx_structure() {
        let wallet = SeiWallet::from_mnemonic_no_passphrase(MNEMONIC, CoinType::Cosmos).unwrap();
        let builder = SeiTxBuilder::new("sei-chain".to_string(), 7, 3, &wallet).with_memo("hello");

        let tx = builder.build_send_tx("sei1recipient", vec![Coin::new(1000, "usei")]).unwrap();
        let raw = TxRaw::from_bytes(&tx).unwrap();
        assert_eq!(raw.signatures.len(), 1);
        assert_eq!(raw.signatures[0].len(), 64);

        let body = TxBody::from_bytes(&raw.body_bytes).unwrap();
        assert_eq!(body.memo, "hello");
        let msg: MsgSend = from_any(&body.messages[0]).unwrap();
        assert_eq!(msg.from_address, wallet.address);
        assert_eq!(msg.amount, vec![Coin::new(1000, "usei")]);

        let auth = AuthInfo::from_bytes(&raw.auth_info_bytes).unwrap();
        let signer = &auth.signer_infos[0];
        assert_eq!(signer.sequence, 3);
        let pk: PubKey = from_any(signer.public_key.as_ref().unwrap()).unwrap();
        assert_eq!(pk.key, wallet.public_key_compressed().to_vec());
        assert_eq!(signer.mode_info, Some(ModeInfo::single(SignMode::Direct)));

        let fee = auth.fee.unwrap();
        assert_eq!(fee.gas_limit, DEFAULT_GAS_LIMIT);
        assert_eq!(fee.amount, vec![Coin::new(20_000, "usei")]);
    }

    #[test]
    fn test_signature_covers_sign_doc() {
        let wallet = SeiWallet::from_mnemonic_no_passphrase(MNEMONIC, CoinType::Cosmos).unwrap();
        let builder = SeiTxBuilder::new("sei-chain".to_string(), 7, 3, &wallet);
        let raw = builder
            .build_tx_raw(vec![to_any(&MsgSend::default())])
            .unwrap();

        let sign_doc = SignDoc {
            body_bytes: raw.body_bytes.clone(),
            auth_info_bytes: raw.auth_info_bytes.clone(),
            chain_id: "sei-chain".to_string(),
            account_number: 7,
        };
        let hash = Sha256::digest(sign_doc.to_bytes());
        let message = Message::from_digest_slice(&hash).unwrap();
        let sig = Signature::from_compact(&raw.signatures[0]).unwrap();
        assert!(Secp256k1::verification_only()
            .verify_ecdsa(&message, &sig, &wallet.public_key().unwrap())
            .is_ok());
    }

    #[test]
    fn test_unsigned_tx_and_empty_messages() {
        let wallet = SeiWallet::from_mnemonic_no_passphrase(MNEMONIC, CoinType::Cosmos).unwrap();
        let builder = SeiTxBuilder::new("sei-chain".to_string(), 0, 0, &wallet);
        let raw = TxRaw::from_bytes(&builder.build_unsigned_tx(vec![to_any(&MsgSend::default())]).unwrap()).unwrap();
        assert_eq!(raw.signatures, vec![Vec::<u8>::new()]);
        assert!(builder.build_tx(vec![]).is_err());
    }

    #[test]
    fn test_gas_price_parsing() {
        assert_eq!(parse_gas_price("0.1usei").unwrap(), (1, 1, "usei".to_string()));
        assert_eq!(parse_gas_price("25usei").unwrap(), (25, 0, "usei".to_string()));
        assert_eq!(parse_gas_price("0.025factory/sei1x/t").unwrap(), (25, 3, "factory/sei1x/t".to_string()));
        assert!(parse_gas_price("usei").is_err());
        assert!(parse_gas_price("100").is_err());

        let wallet = SeiWallet::from_mnemonic_no_passphrase(MNEMONIC, CoinType::Cosmos).unwrap();
        let mut builder = SeiTxBuilder::new("test".to_string(), 0, 0, &wallet);
        builder.set_gas_price("0.02usei".to_string());
        builder.set_gas_limit(100_001);
        // 2000.02 rounds up.
        assert_eq!(builder.fee_amount().unwrap(), vec![Coin::new(2001, "usei")]);
    }

    #[test]
    fn test_fee_overflow_is_an_error() {
        let wallet = SeiWallet::from_mnemonic_no_passphrase(MNEMONIC, CoinType::Cosmos).unwrap();
        let builder = SeiTxBuilder::new("test".to_string(), 0, 0, &wallet)
            .with_gas_limit(u64::MAX)
            .with_gas_price(format!("{}usei", u128::MAX));
        assert!(builder.fee_amount().is_err());
        assert!(builder.build_send_tx("sei1recipient", vec![Coin::new(1, "usei")]).is_err());
    }
}
