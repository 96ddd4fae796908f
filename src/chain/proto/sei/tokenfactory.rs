//! `sei.tokenfactory.v1`: permissionless `factory/{creator}/{subdenom}` tokens.

use serde::{Deserialize, Serialize};

use crate::chain::proto::cosmos::bank::Metadata;
use crate::chain::proto::Coin;

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    #[prost(uint32, tag = "2")]
    pub denom_allowlist_max_size: u32,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct DenomAuthorityMetadata {
    /// Empty when the denom has no admin.
    #[prost(string, tag = "1")]
    pub admin: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParamsRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParamsResponse {
    #[prost(message, optional, tag = "1")]
    pub params: Option<Params>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDenomAuthorityMetadataRequest {
    #[prost(string, tag = "1")]
    pub denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDenomAuthorityMetadataResponse {
    #[prost(message, optional, tag = "1")]
    pub authority_metadata: Option<DenomAuthorityMetadata>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDenomsFromCreatorRequest {
    #[prost(string, tag = "1")]
    pub creator: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDenomsFromCreatorResponse {
    #[prost(string, repeated, tag = "1")]
    pub denoms: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDenomMetadataRequest {
    #[prost(string, tag = "1")]
    pub denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDenomMetadataResponse {
    #[prost(message, optional, tag = "1")]
    pub metadata: Option<Metadata>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgCreateDenom {
    #[prost(string, tag = "1")]
    pub sender: String,
    #[prost(string, tag = "2")]
    pub subdenom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgCreateDenomResponse {
    #[prost(string, tag = "1")]
    pub new_token_denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgMint {
    #[prost(string, tag = "1")]
    pub sender: String,
    #[prost(message, optional, tag = "2")]
    pub amount: Option<Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgMintResponse {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgBurn {
    #[prost(string, tag = "1")]
    pub sender: String,
    #[prost(message, optional, tag = "2")]
    pub amount: Option<Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgBurnResponse {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgChangeAdmin {
    #[prost(string, tag = "1")]
    pub sender: String,
    #[prost(string, tag = "2")]
    pub denom: String,
    #[prost(string, tag = "3")]
    pub new_admin: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgChangeAdminResponse {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgSetDenomMetadata {
    #[prost(string, tag = "1")]
    pub sender: String,
    #[prost(message, optional, tag = "2")]
    pub metadata: Option<Metadata>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgSetDenomMetadataResponse {}

/// Full denom created by `MsgCreateDenom`.
pub fn factory_denom(creator: &str, subdenom: &str) -> String {
    format!("factory/{creator}/{subdenom}")
}

impl_name!("sei.tokenfactory.v1" =>
    Params,
    DenomAuthorityMetadata,
    MsgCreateDenom,
    MsgMint,
    MsgBurn,
    MsgChangeAdmin,
    MsgSetDenomMetadata,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::codec::WireCodec;
    use serde_json::json;

    #[test]
    fn test_msg_mint_known_bytes() {
        let msg = MsgMint { sender: "s".into(), amount: Some(Coin::new(5, "d")) };
        // 0a 01 's' | 12 06 (0a 01 'd' 12 01 '5')
        assert_eq!(
            msg.to_bytes(),
            vec![0x0a, 0x01, b's', 0x12, 0x06, 0x0a, 0x01, b'd', 0x12, 0x01, b'5']
        );
    }

    #[test]
    fn test_change_admin_accepts_camel_case() {
        let msg = MsgChangeAdmin::from_json(json!({
            "sender": "sei1a",
            "denom": "factory/sei1a/x",
            "newAdmin": "sei1b"
        }))
        .unwrap();
        assert_eq!(msg.new_admin, "sei1b");
        assert_eq!(msg.to_json().unwrap()["new_admin"], "sei1b");
    }

    #[test]
    fn test_create_denom_response_and_factory_denom() {
        let resp = MsgCreateDenomResponse { new_token_denom: factory_denom("sei1creator", "pepe") };
        let decoded = MsgCreateDenomResponse::from_bytes(&resp.to_bytes()).unwrap();
        assert_eq!(decoded.new_token_denom, "factory/sei1creator/pepe");
    }

    #[test]
    fn test_authority_metadata_missing_admin() {
        let resp = QueryDenomAuthorityMetadataResponse::from_json(json!({"authority_metadata": {}})).unwrap();
        assert_eq!(resp.authority_metadata.unwrap().admin, "");
    }
}
