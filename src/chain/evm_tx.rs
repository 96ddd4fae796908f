//! Legacy (type 0) EVM transactions with EIP-155 replay protection.

use alloy_rlp::{Encodable, Header};
use anyhow::Result;

use crate::chain::wallet::{keccak256, parse_evm_address, RecoverableSig, SeiWallet, TransactionSigner};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegacyTransaction {
    pub nonce: u64,
    pub gas_price: u128,
    pub gas_limit: u64,
    /// `None` deploys a contract.
    pub to: Option<[u8; 20]>,
    pub value: u128,
    pub data: Vec<u8>,
    pub chain_id: u64,
}

impl LegacyTransaction {
    /// Plain value transfer with the 21000 intrinsic gas limit.
    pub fn transfer(to: &str, value: u128, nonce: u64, gas_price: u128, chain_id: u64) -> Result<Self> {
        Ok(Self {
            nonce,
            gas_price,
            gas_limit: 21_000,
            to: Some(parse_evm_address(to)?),
            value,
            data: Vec::new(),
            chain_id,
        })
    }

    /// `rlp([nonce, gasPrice, gas, to, value, data, chainId, 0, 0])`.
    pub fn signing_payload(&self) -> Vec<u8> {
        let mut payload = self.base_fields();
        self.chain_id.encode(&mut payload);
        0u8.encode(&mut payload);
        0u8.encode(&mut payload);
        rlp_list(payload)
    }

    pub fn signing_hash(&self) -> [u8; 32] {
        keccak256(&self.signing_payload())
    }

    /// `v` as it appears on the wire: `recovery_id + chain_id * 2 + 35`.
    pub fn eip155_v(&self, recovery_id: u8) -> u64 {
        recovery_id as u64 + self.chain_id * 2 + 35
    }

    /// `rlp([nonce, gasPrice, gas, to, value, data, v, r, s])`.
    pub fn encode_signed(&self, sig: &RecoverableSig) -> Vec<u8> {
        let mut payload = self.base_fields();
        self.eip155_v(sig.v).encode(&mut payload);
        trim_leading_zeros(&sig.r).encode(&mut payload);
        trim_leading_zeros(&sig.s).encode(&mut payload);
        rlp_list(payload)
    }

    /// Signs with `wallet` and returns the raw bytes for `eth_sendRawTransaction`.
    pub fn sign(&self, wallet: &SeiWallet) -> Result<Vec<u8>> {
        let sig = TransactionSigner::new().sign_recoverable(&self.signing_hash(), &wallet.private_key()?)?;
        Ok(self.encode_signed(&sig))
    }

    fn base_fields(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.nonce.encode(&mut out);
        self.gas_price.encode(&mut out);
        self.gas_limit.encode(&mut out);
        match &self.to {
            Some(to) => to.as_slice().encode(&mut out),
            None => [0u8; 0].as_slice().encode(&mut out),
        }
        self.value.encode(&mut out);
        self.data.as_slice().encode(&mut out);
        out
    }
}

/// `0x`-prefixed hex of a signed transaction.
pub fn raw_hex(raw: &[u8]) -> String {
    format!("0x{}", hex::encode(raw))
}

/// Transaction hash of signed raw bytes.
pub fn tx_hash(raw: &[u8]) -> String {
    format!("0x{}", hex::encode(keccak256(raw)))
}

fn rlp_list(payload: Vec<u8>) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + 9);
    Header {
        list: true,
        payload_length: payload.len(),
    }
    .encode(&mut out);
    out.extend_from_slice(&payload);
    out
}

fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eip155_example() -> LegacyTransaction {
        LegacyTransaction {
            nonce: 9,
            gas_price: 20_000_000_000,
            gas_limit: 21_000,
            to: Some([0x35; 20]),
            value: 1_000_000_000_000_000_000,
            data: Vec::new(),
            chain_id: 1,
        }
    }

    #[test]
    fn test_eip155_signing_payload() {
        let tx = eip155_example();
        assert_eq!(
            hex::encode(tx.signing_payload()),
            "ec098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a764000080018080"
        );
        assert_eq!(
            hex::encode(tx.signing_hash()),
            "daf5a779ae972f972197303d7b574746c7ef83eadac0f2791ad23db92e4c8e53"
        );
    }

    #[test]
    fn test_signed_transaction_recovers_sender() {
        let wallet = SeiWallet::from_private_key(&[0x46; 32]).unwrap();
        let tx = eip155_example();
        let raw = tx.sign(&wallet).unwrap();

        // Long list header, then the unchanged leading fields.
        assert_eq!(raw[0], 0xf8);
        assert_eq!(raw[1] as usize, raw.len() - 2);
        assert_eq!(&raw[2..4], &[0x09, 0x85]);

        let sig = TransactionSigner::new()
            .sign_recoverable(&tx.signing_hash(), &wallet.private_key().unwrap())
            .unwrap();
        let v = tx.eip155_v(sig.v);
        assert!(v == 37 || v == 38);
        assert_eq!(
            TransactionSigner::new().recover_evm_address(&tx.signing_hash(), &sig).unwrap(),
            wallet.evm_address
        );
        assert_eq!(raw, tx.encode_signed(&sig));
    }

    #[test]
    fn test_contract_creation_and_zero_fields() {
        let tx = LegacyTransaction {
            gas_limit: 100_000,
            data: vec![0x60, 0x00],
            chain_id: 713_715,
            ..Default::default()
        };
        let payload = tx.signing_payload();
        // nonce 0, gas price 0 encode as the empty string; `to` is empty too.
        assert_eq!(&payload[1..3], &[0x80, 0x80]);
        assert_eq!(&payload[3..7], &[0x83, 0x01, 0x86, 0xa0]);
        assert_eq!(payload[7], 0x80);
    }

    #[test]
    fn test_transfer_helper_and_hex() {
        let tx = LegacyTransaction::transfer("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed", 5, 1, 2, 713_715).unwrap();
        assert_eq!(tx.gas_limit, 21_000);
        assert_eq!(tx.to.unwrap()[0], 0x5a);
        assert!(LegacyTransaction::transfer("0x1234", 5, 1, 2, 1).is_err());

        assert_eq!(raw_hex(&[0xab, 0x01]), "0xab01");
        assert_eq!(tx_hash(&[]).len(), 66);
        assert_eq!(trim_leading_zeros(&[0, 0, 1, 0]), &[1, 0]);
    }
}
