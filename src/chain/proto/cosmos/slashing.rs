//! `cosmos.slashing.v1beta1`

use serde::{Deserialize, Serialize};

use crate::chain::proto::json::{base64_bytes, duration_opt, num_str, timestamp_opt};
use crate::chain::proto::{PageRequest, PageResponse};

/// Liveness record the slashing module keeps per validator consensus address.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorSigningInfo {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(int64, tag = "2")]
    #[serde(with = "num_str")]
    pub start_height: i64,
    #[prost(int64, tag = "3")]
    #[serde(with = "num_str")]
    pub index_offset: i64,
    #[prost(message, optional, tag = "4")]
    #[serde(with = "timestamp_opt")]
    pub jailed_until: Option<::prost_types::Timestamp>,
    #[prost(bool, tag = "5")]
    pub tombstoned: bool,
    #[prost(int64, tag = "6")]
    #[serde(with = "num_str")]
    pub missed_blocks_counter: i64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    #[prost(int64, tag = "1")]
    #[serde(with = "num_str")]
    pub signed_blocks_window: i64,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "base64_bytes")]
    pub min_signed_per_window: Vec<u8>,
    #[prost(message, optional, tag = "3")]
    #[serde(with = "duration_opt")]
    pub downtime_jail_duration: Option<::prost_types::Duration>,
    #[prost(bytes = "vec", tag = "4")]
    #[serde(with = "base64_bytes")]
    pub slash_fraction_double_sign: Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    #[serde(with = "base64_bytes")]
    pub slash_fraction_downtime: Vec<u8>,
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
pub struct QuerySigningInfoRequest {
    #[prost(string, tag = "1")]
    pub cons_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySigningInfoResponse {
    #[prost(message, optional, tag = "1")]
    pub val_signing_info: Option<ValidatorSigningInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySigningInfosRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySigningInfosResponse {
    #[prost(message, repeated, tag = "1")]
    pub info: Vec<ValidatorSigningInfo>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

impl_name!("cosmos.slashing.v1beta1" => ValidatorSigningInfo, Params);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::codec::WireCodec;
    use serde_json::json;

    #[test]
    fn test_signing_info_json_mapping() {
        let info = ValidatorSigningInfo {
            address: "seivalcons1abc".into(),
            start_height: 12,
            index_offset: 340,
            jailed_until: Some(prost_types::Timestamp { seconds: 0, nanos: 0 }),
            tombstoned: false,
            missed_blocks_counter: 3,
        };
        let v = info.to_json().unwrap();
        assert_eq!(v["start_height"], "12");
        assert_eq!(v["jailed_until"], "1970-01-01T00:00:00Z");
        assert_eq!(v["missed_blocks_counter"], "3");

        let back = ValidatorSigningInfo::from_json(v).unwrap();
        assert_eq!(back, info);
    }

    #[test]
    fn test_signing_info_missing_fields_default() {
        let info = ValidatorSigningInfo::from_json(json!({"address": "seivalcons1abc"})).unwrap();
        assert_eq!(info.start_height, 0);
        assert!(info.jailed_until.is_none());
        assert!(!info.tombstoned);
    }

    #[test]
    fn test_params_duration_field() {
        let params = Params::from_json(json!({
            "signed_blocks_window": "108000",
            "downtime_jail_duration": "600s"
        }))
        .unwrap();
        assert_eq!(params.signed_blocks_window, 108_000);
        assert_eq!(params.downtime_jail_duration.unwrap().seconds, 600);
    }

    #[test]
    fn test_signing_info_decode_skips_unknown_fields() {
        let mut bytes = ValidatorSigningInfo { address: "x".into(), ..Default::default() }.to_bytes();
        // field 15, varint 1
        bytes.extend_from_slice(&[0x78, 0x01]);
        let decoded = ValidatorSigningInfo::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.address, "x");
    }
}
