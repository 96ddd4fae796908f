//! `cosmos.base.v1beta1` coins and `cosmos.base.query.v1beta1` pagination.

use serde::{Deserialize, Serialize};

use crate::chain::proto::json::{base64_bytes, num_str};

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Coin {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub amount: String,
}

impl Coin {
    pub fn new(amount: impl ToString, denom: impl Into<String>) -> Self {
        Self { denom: denom.into(), amount: amount.to_string() }
    }

    /// Amount as an integer. Coin amounts are arbitrary precision on chain;
    /// `u128` covers every balance this crate deals with.
    pub fn amount_u128(&self) -> anyhow::Result<u128> {
        if self.amount.is_empty() {
            return Ok(0);
        }
        self.amount
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid coin amount {:?}: {}", self.amount, e))
    }
}

/// Decimal coin; `amount` is an 18-digit fixed-point decimal string.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct DecCoin {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub amount: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "base64_bytes")]
    pub key: Vec<u8>,
    #[prost(uint64, tag = "2")]
    #[serde(with = "num_str")]
    pub offset: u64,
    #[prost(uint64, tag = "3")]
    #[serde(with = "num_str")]
    pub limit: u64,
    #[prost(bool, tag = "4")]
    pub count_total: bool,
    #[prost(bool, tag = "5")]
    pub reverse: bool,
}

impl PageRequest {
    /// Query-string pairs in the `pagination.*` form the REST gateway reads.
    /// Default-valued fields are left out.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        use base64::Engine as _;
        let mut pairs = Vec::new();
        if !self.key.is_empty() {
            pairs.push((
                "pagination.key",
                base64::engine::general_purpose::STANDARD.encode(&self.key),
            ));
        }
        if self.offset != 0 {
            pairs.push(("pagination.offset", self.offset.to_string()));
        }
        if self.limit != 0 {
            pairs.push(("pagination.limit", self.limit.to_string()));
        }
        if self.count_total {
            pairs.push(("pagination.count_total", "true".to_string()));
        }
        if self.reverse {
            pairs.push(("pagination.reverse", "true".to_string()));
        }
        pairs
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PageResponse {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "base64_bytes")]
    pub next_key: Vec<u8>,
    #[prost(uint64, tag = "2")]
    #[serde(with = "num_str")]
    pub total: u64,
}

impl_name!("cosmos.base.v1beta1" => Coin, DecCoin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::codec::WireCodec;
    use serde_json::json;

    #[test]
    fn test_coin_known_bytes() {
        let coin = Coin::new(10, "usei");
        // field 1 "usei", field 2 "10"
        assert_eq!(
            coin.to_bytes(),
            vec![0x0a, 0x04, b'u', b's', b'e', b'i', 0x12, 0x02, b'1', b'0']
        );
        assert_eq!(Coin::from_bytes(&coin.to_bytes()).unwrap(), coin);
    }

    #[test]
    fn test_empty_coin_encodes_to_nothing() {
        assert!(Coin::default().to_bytes().is_empty());
        assert_eq!(Coin::from_bytes(&[]).unwrap(), Coin::default());
    }

    #[test]
    fn test_page_request_json_and_query_pairs() {
        let page = PageRequest { key: vec![1, 2], limit: 50, count_total: true, ..Default::default() };
        let v = page.to_json().unwrap();
        assert_eq!(v["key"], "AQI=");
        assert_eq!(v["limit"], "50");
        assert_eq!(v["offset"], "0");

        let pairs = page.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("pagination.key", "AQI=".to_string()),
                ("pagination.limit", "50".to_string()),
                ("pagination.count_total", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_response_accepts_numeric_total() {
        let page = PageResponse::from_json(json!({"next_key": null, "total": 7})).unwrap();
        assert_eq!(page.total, 7);
        assert!(page.next_key.is_empty());
    }

    #[test]
    fn test_coin_amount_parsing() {
        assert_eq!(Coin::new(1_000_000u64, "usei").amount_u128().unwrap(), 1_000_000);
        assert_eq!(Coin::default().amount_u128().unwrap(), 0);
        assert!(Coin { denom: "usei".into(), amount: "1.5".into() }.amount_u128().is_err());
    }
}
