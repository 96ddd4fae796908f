//! `cosmos.tx.v1beta1` transaction envelope and service messages.
//!
//! `TxResponse` and `SimulateResponse` carry a subset of the upstream fields;
//! ABCI events are skipped on decode.

use serde::{Deserialize, Serialize};

use crate::chain::proto::json::{base64_bytes, base64_vec, num_str};
use crate::chain::proto::{Any, Coin};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SignMode {
    Unspecified = 0,
    Direct = 1,
    Textual = 2,
    LegacyAminoJson = 127,
    Eip191 = 191,
}

proto_enum!(SignMode, sign_mode_json {
    Unspecified => "SIGN_MODE_UNSPECIFIED",
    Direct => "SIGN_MODE_DIRECT",
    Textual => "SIGN_MODE_TEXTUAL",
    LegacyAminoJson => "SIGN_MODE_LEGACY_AMINO_JSON",
    Eip191 => "SIGN_MODE_EIP_191",
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BroadcastMode {
    Unspecified = 0,
    Block = 1,
    Sync = 2,
    Async = 3,
}

proto_enum!(BroadcastMode, broadcast_mode_json {
    Unspecified => "BROADCAST_MODE_UNSPECIFIED",
    Block => "BROADCAST_MODE_BLOCK",
    Sync => "BROADCAST_MODE_SYNC",
    Async => "BROADCAST_MODE_ASYNC",
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct TxBody {
    #[prost(message, repeated, tag = "1")]
    pub messages: Vec<Any>,
    #[prost(string, tag = "2")]
    pub memo: String,
    #[prost(uint64, tag = "3")]
    #[serde(with = "num_str")]
    pub timeout_height: u64,
    #[prost(message, repeated, tag = "1023")]
    pub extension_options: Vec<Any>,
    #[prost(message, repeated, tag = "2047")]
    pub non_critical_extension_options: Vec<Any>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthInfo {
    #[prost(message, repeated, tag = "1")]
    pub signer_infos: Vec<SignerInfo>,
    #[prost(message, optional, tag = "2")]
    pub fee: Option<Fee>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct SignerInfo {
    #[prost(message, optional, tag = "1")]
    pub public_key: Option<Any>,
    #[prost(message, optional, tag = "2")]
    pub mode_info: Option<ModeInfo>,
    #[prost(uint64, tag = "3")]
    #[serde(with = "num_str")]
    pub sequence: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeInfo {
    #[prost(oneof = "mode_info::Sum", tags = "1, 2")]
    #[serde(flatten)]
    pub sum: Option<mode_info::Sum>,
}

pub mod mode_info {
    use serde::{Deserialize, Serialize};

    use super::sign_mode_json;

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Sum {
        #[prost(message, tag = "1")]
        Single(Single),
        #[prost(message, tag = "2")]
        Multi(Multi),
    }

    #[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Single {
        #[prost(enumeration = "super::SignMode", tag = "1")]
        #[serde(with = "sign_mode_json")]
        pub mode: i32,
    }

    #[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Multi {
        #[prost(message, optional, tag = "1")]
        pub bitarray: Option<super::CompactBitArray>,
        #[prost(message, repeated, tag = "2")]
        pub mode_infos: Vec<super::ModeInfo>,
    }
}

impl ModeInfo {
    pub fn single(mode: SignMode) -> Self {
        Self {
            sum: Some(mode_info::Sum::Single(mode_info::Single { mode: mode as i32 })),
        }
    }
}

/// `cosmos.crypto.multisig.v1beta1.CompactBitArray`
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CompactBitArray {
    #[prost(uint32, tag = "1")]
    pub extra_bits_stored: u32,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "base64_bytes")]
    pub elems: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Fee {
    #[prost(message, repeated, tag = "1")]
    pub amount: Vec<Coin>,
    #[prost(uint64, tag = "2")]
    #[serde(with = "num_str")]
    pub gas_limit: u64,
    #[prost(string, tag = "3")]
    pub payer: String,
    #[prost(string, tag = "4")]
    pub granter: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct SignDoc {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "base64_bytes")]
    pub body_bytes: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "base64_bytes")]
    pub auth_info_bytes: Vec<u8>,
    #[prost(string, tag = "3")]
    pub chain_id: String,
    #[prost(uint64, tag = "4")]
    #[serde(with = "num_str")]
    pub account_number: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct TxRaw {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "base64_bytes")]
    pub body_bytes: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "base64_bytes")]
    pub auth_info_bytes: Vec<u8>,
    #[prost(bytes = "vec", repeated, tag = "3")]
    #[serde(with = "base64_vec")]
    pub signatures: Vec<Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Tx {
    #[prost(message, optional, tag = "1")]
    pub body: Option<TxBody>,
    #[prost(message, optional, tag = "2")]
    pub auth_info: Option<AuthInfo>,
    #[prost(bytes = "vec", repeated, tag = "3")]
    #[serde(with = "base64_vec")]
    pub signatures: Vec<Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribute {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct StringEvent {
    #[prost(string, tag = "1")]
    pub r#type: String,
    #[prost(message, repeated, tag = "2")]
    pub attributes: Vec<Attribute>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct AbciMessageLog {
    #[prost(uint32, tag = "1")]
    pub msg_index: u32,
    #[prost(string, tag = "2")]
    pub log: String,
    #[prost(message, repeated, tag = "3")]
    pub events: Vec<StringEvent>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct TxResponse {
    #[prost(int64, tag = "1")]
    #[serde(with = "num_str")]
    pub height: i64,
    #[prost(string, tag = "2")]
    pub txhash: String,
    #[prost(string, tag = "3")]
    pub codespace: String,
    #[prost(uint32, tag = "4")]
    pub code: u32,
    #[prost(string, tag = "5")]
    pub data: String,
    #[prost(string, tag = "6")]
    pub raw_log: String,
    #[prost(message, repeated, tag = "7")]
    pub logs: Vec<AbciMessageLog>,
    #[prost(string, tag = "8")]
    pub info: String,
    #[prost(int64, tag = "9")]
    #[serde(with = "num_str")]
    pub gas_wanted: i64,
    #[prost(int64, tag = "10")]
    #[serde(with = "num_str")]
    pub gas_used: i64,
    #[prost(message, optional, tag = "11")]
    pub tx: Option<Any>,
    #[prost(string, tag = "12")]
    pub timestamp: String,
}

impl TxResponse {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct GasInfo {
    #[prost(uint64, tag = "1")]
    #[serde(with = "num_str")]
    pub gas_wanted: u64,
    #[prost(uint64, tag = "2")]
    #[serde(with = "num_str")]
    pub gas_used: u64,
}

/// `cosmos.base.abci.v1beta1.Result` without events.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct AbciResult {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    #[prost(string, tag = "2")]
    pub log: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulateRequest {
    #[prost(message, optional, tag = "1")]
    pub tx: Option<Tx>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "base64_bytes")]
    pub tx_bytes: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulateResponse {
    #[prost(message, optional, tag = "1")]
    pub gas_info: Option<GasInfo>,
    #[prost(message, optional, tag = "2")]
    pub result: Option<AbciResult>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadcastTxRequest {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "base64_bytes")]
    pub tx_bytes: Vec<u8>,
    #[prost(enumeration = "BroadcastMode", tag = "2")]
    #[serde(with = "broadcast_mode_json")]
    pub mode: i32,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadcastTxResponse {
    #[prost(message, optional, tag = "1")]
    pub tx_response: Option<TxResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTxRequest {
    #[prost(string, tag = "1")]
    pub hash: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTxResponse {
    #[prost(message, optional, tag = "1")]
    pub tx: Option<Tx>,
    #[prost(message, optional, tag = "2")]
    pub tx_response: Option<TxResponse>,
}

impl_name!("cosmos.tx.v1beta1" => TxBody, AuthInfo, SignDoc, TxRaw, Tx);
