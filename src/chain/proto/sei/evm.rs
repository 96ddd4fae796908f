//! `sei.evm.v1`: address association, static calls, pointer contracts and receipts.

use serde::{Deserialize, Serialize};

use crate::chain::proto::json::{base64_bytes, num_str};
use crate::chain::proto::Coin;

/// Kind of asset a pointer contract bridges between the EVM and CosmWasm/bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PointerType {
    Erc20 = 0,
    Erc721 = 1,
    Native = 2,
    Cw20 = 3,
    Cw721 = 4,
    Erc1155 = 5,
    Cw1155 = 6,
}

proto_enum!(PointerType, pointer_type_json {
    Erc20 => "ERC20",
    Erc721 => "ERC721",
    Native => "NATIVE",
    Cw20 => "CW20",
    Cw721 => "CW721",
    Erc1155 => "ERC1155",
    Cw1155 => "CW1155",
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySeiAddressByEvmAddressRequest {
    #[prost(string, tag = "1")]
    pub evm_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySeiAddressByEvmAddressResponse {
    #[prost(string, tag = "1")]
    pub sei_address: String,
    #[prost(bool, tag = "2")]
    pub associated: bool,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryEvmAddressBySeiAddressRequest {
    #[prost(string, tag = "1")]
    pub sei_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryEvmAddressBySeiAddressResponse {
    #[prost(string, tag = "1")]
    pub evm_address: String,
    #[prost(bool, tag = "2")]
    pub associated: bool,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryStaticCallRequest {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    #[prost(string, tag = "2")]
    pub to: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryStaticCallResponse {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryPointerRequest {
    #[prost(enumeration = "PointerType", tag = "1")]
    #[serde(with = "pointer_type_json")]
    pub pointer_type: i32,
    #[prost(string, tag = "2")]
    pub pointee: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryPointerResponse {
    #[prost(string, tag = "1")]
    pub pointer: String,
    #[prost(uint32, tag = "2")]
    pub version: u32,
    #[prost(bool, tag = "3")]
    pub exists: bool,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryPointerVersionRequest {
    #[prost(enumeration = "PointerType", tag = "1")]
    #[serde(with = "pointer_type_json")]
    pub pointer_type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryPointerVersionResponse {
    #[prost(uint32, tag = "1")]
    pub version: u32,
    #[prost(uint64, tag = "2")]
    #[serde(with = "num_str")]
    pub cw_code_id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Log {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(string, repeated, tag = "2")]
    pub topics: Vec<String>,
    #[prost(bytes = "vec", tag = "3")]
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    #[prost(uint32, tag = "4")]
    pub index: u32,
}

/// Receipt the EVM module stores for each executed EVM transaction.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Receipt {
    #[prost(uint32, tag = "1")]
    pub tx_type: u32,
    #[prost(uint64, tag = "2")]
    #[serde(with = "num_str")]
    pub cumulative_gas_used: u64,
    #[prost(string, tag = "3")]
    pub contract_address: String,
    #[prost(string, tag = "4")]
    pub tx_hash_hex: String,
    #[prost(uint64, tag = "5")]
    #[serde(with = "num_str")]
    pub gas_used: u64,
    #[prost(uint64, tag = "6")]
    #[serde(with = "num_str")]
    pub effective_gas_price: u64,
    #[prost(uint64, tag = "7")]
    #[serde(with = "num_str")]
    pub block_number: u64,
    #[prost(uint32, tag = "8")]
    pub transaction_index: u32,
    #[prost(uint32, tag = "9")]
    pub status: u32,
    #[prost(string, tag = "10")]
    pub from: String,
    #[prost(string, tag = "11")]
    pub to: String,
    #[prost(string, tag = "12")]
    pub vm_error: String,
    #[prost(message, repeated, tag = "13")]
    pub logs: Vec<Log>,
    #[prost(bytes = "vec", tag = "14")]
    #[serde(with = "base64_bytes")]
    pub logs_bloom: Vec<u8>,
}

/// Bank-style transfer from a Sei address to an EVM-associated address.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgSend {
    #[prost(string, tag = "1")]
    pub from_address: String,
    #[prost(string, tag = "2")]
    pub to_address: String,
    #[prost(message, repeated, tag = "3")]
    pub amount: Vec<Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgAssociate {
    #[prost(string, tag = "1")]
    pub sender: String,
    #[prost(string, tag = "2")]
    pub custom_message: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgRegisterPointer {
    #[prost(string, tag = "1")]
    pub sender: String,
    #[prost(enumeration = "PointerType", tag = "2")]
    #[serde(with = "pointer_type_json")]
    pub pointer_type: i32,
    #[prost(string, tag = "3")]
    pub erc_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgRegisterPointerResponse {
    #[prost(string, tag = "1")]
    pub pointer_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgAssociateContractAddress {
    #[prost(string, tag = "1")]
    pub sender: String,
    #[prost(string, tag = "2")]
    pub address: String,
}

impl_name!("sei.evm.v1" =>
    Receipt,
    MsgSend,
    MsgAssociate,
    MsgRegisterPointer,
    MsgAssociateContractAddress,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::codec::WireCodec;
    use serde_json::json;

    #[test]
    fn test_association_response_from_gateway() {
        let resp = QuerySeiAddressByEvmAddressResponse::from_json(json!({
            "sei_address": "sei1xyz",
            "associated": true
        }))
        .unwrap();
        assert!(resp.associated);
        assert_eq!(resp.sei_address, "sei1xyz");
    }

    #[test]
    fn test_pointer_request_enum_by_name_and_number() {
        let by_name = QueryPointerRequest::from_json(json!({"pointer_type": "CW20", "pointee": "sei1c"})).unwrap();
        let by_number = QueryPointerRequest::from_json(json!({"pointerType": 3, "pointee": "sei1c"})).unwrap();
        assert_eq!(by_name, by_number);
        assert_eq!(by_name.pointer_type(), PointerType::Cw20);
        assert_eq!(by_name.to_json().unwrap()["pointer_type"], "CW20");
    }

    #[test]
    fn test_unknown_enum_name_is_rejected() {
        assert!(QueryPointerVersionRequest::from_json(json!({"pointer_type": "ERC9999"})).is_err());
    }

    #[test]
    fn test_receipt_roundtrip_with_logs() {
        let receipt = Receipt {
            tx_type: 2,
            gas_used: 21_000,
            block_number: 77,
            status: 1,
            from: "0xabc".into(),
            to: "0xdef".into(),
            logs: vec![Log {
                address: "0x01".into(),
                topics: vec!["0xddf2".into()],
                data: vec![0, 1, 2],
                index: 0,
            }],
            logs_bloom: vec![0u8; 256],
            ..Default::default()
        };
        let decoded = Receipt::from_bytes(&receipt.to_bytes()).unwrap();
        assert_eq!(decoded, receipt);

        let json = receipt.to_json().unwrap();
        assert_eq!(json["gas_used"], "21000");
        assert_eq!(json["logs"][0]["data"], "AAEC");
        assert_eq!(Receipt::from_json(json).unwrap(), receipt);
    }

    #[test]
    fn test_static_call_bytes_base64() {
        let req = QueryStaticCallRequest { data: vec![0x70, 0xa0, 0x82, 0x31], to: "0x00".into() };
        assert_eq!(req.to_json().unwrap()["data"], "cKCCMQ==");
    }
}
