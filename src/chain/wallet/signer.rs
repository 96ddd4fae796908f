use anyhow::Result;
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};

use super::keys::{evm_address, keccak256};

/// Recoverable ECDSA signature split into its EVM parts.
///
/// `v` is the raw recovery id (0 or 1), not the 27/28 or EIP-155 form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoverableSig {
    pub r: [u8; 32],
    pub s: [u8; 32],
    pub v: u8,
}

impl RecoverableSig {
    /// 65-byte `r || s || v`.
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }
}

/// Signs Cosmos sign docs and EVM digests with secp256k1.
pub struct TransactionSigner {
    secp: Secp256k1<secp256k1::All>,
}

impl TransactionSigner {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }

    /// SIGN_MODE_DIRECT: SHA256 over the encoded `SignDoc`, 64-byte compact `r || s`.
    pub fn sign_direct(&self, sign_doc_bytes: &[u8], private_key: &SecretKey) -> Result<Vec<u8>> {
        let hash = Sha256::digest(sign_doc_bytes);
        let message = Message::from_digest_slice(&hash)?;
        let signature = self.secp.sign_ecdsa(&message, private_key);
        Ok(signature.serialize_compact().to_vec())
    }

    /// Signs a pre-computed 32-byte digest, keeping the recovery id.
    pub fn sign_recoverable(&self, digest: &[u8; 32], private_key: &SecretKey) -> Result<RecoverableSig> {
        let message = Message::from_digest_slice(digest)?;
        let recoverable = self.secp.sign_ecdsa_recoverable(&message, private_key);
        let (recovery_id, compact) = recoverable.serialize_compact();

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&compact[..32]);
        s.copy_from_slice(&compact[32..]);
        Ok(RecoverableSig {
            r,
            s,
            v: recovery_id.to_i32() as u8,
        })
    }

    /// Public key that produced `sig` over `digest`.
    pub fn recover(&self, digest: &[u8; 32], sig: &RecoverableSig) -> Result<PublicKey> {
        let message = Message::from_digest_slice(digest)?;
        let mut compact = [0u8; 64];
        compact[..32].copy_from_slice(&sig.r);
        compact[32..].copy_from_slice(&sig.s);
        let recoverable = RecoverableSignature::from_compact(&compact, RecoveryId::from_i32(sig.v as i32)?)?;
        Ok(self.secp.recover_ecdsa(&message, &recoverable)?)
    }

    /// EIP-55 address of the signer of `digest`.
    pub fn recover_evm_address(&self, digest: &[u8; 32], sig: &RecoverableSig) -> Result<String> {
        Ok(evm_address(&self.recover(digest, sig)?))
    }
}

impl Default for TransactionSigner {
    fn default() -> Self {
        Self::new()
    }
}

/// `"\x19Ethereum Signed Message:\n{len}{message}"`, the text `personal_sign` hashes.
pub fn personal_message(message: &str) -> String {
    format!("\x19Ethereum Signed Message:\n{}{}", message.len(), message)
}

/// Keccak256 of [`personal_message`].
pub fn personal_message_hash(message: &str) -> [u8; 32] {
    keccak256(personal_message(message).as_bytes())
}
