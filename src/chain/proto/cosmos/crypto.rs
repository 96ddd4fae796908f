//! `cosmos.crypto.secp256k1`

use serde::{Deserialize, Serialize};

use crate::chain::proto::json::base64_bytes;

/// Compressed (33-byte) secp256k1 public key.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PubKey {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "base64_bytes")]
    pub key: Vec<u8>,
}

impl_name!("cosmos.crypto.secp256k1" => PubKey);
