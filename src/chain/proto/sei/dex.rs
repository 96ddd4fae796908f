//! `seiprotocol.seichain.dex`: on-chain order books.
//!
//! The dex module's JSON uses the declared camelCase names (`contractAddr`,
//! `priceDenom`, and `LongBook` / `ShortBook` on book responses), so these
//! types serialize camelCase. Input is accepted in either casing.

use serde::{Deserialize, Serialize};

use crate::chain::proto::json::num_str;
use crate::chain::proto::{PageRequest, PageResponse};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PositionDirection {
    Long = 0,
    Short = 1,
}

proto_enum!(PositionDirection, position_direction_json {
    Long => "LONG",
    Short => "SHORT",
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OrderStatus {
    Placed = 0,
    FailedToPlace = 1,
    Cancelled = 2,
    Fulfilled = 3,
}

proto_enum!(OrderStatus, order_status_json {
    Placed => "PLACED",
    FailedToPlace => "FAILED_TO_PLACE",
    Cancelled => "CANCELLED",
    Fulfilled => "FULFILLED",
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OrderType {
    Limit = 0,
    Market = 1,
    Fokmarket = 3,
    Fokmarketbyvalue = 4,
    Stoploss = 5,
    Stoplimit = 6,
}

proto_enum!(OrderType, order_type_json {
    Limit => "LIMIT",
    Market => "MARKET",
    Fokmarket => "FOKMARKET",
    Fokmarketbyvalue => "FOKMARKETBYVALUE",
    Stoploss => "STOPLOSS",
    Stoplimit => "STOPLIMIT",
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CancellationInitiator {
    User = 0,
    Liquidated = 1,
}

proto_enum!(CancellationInitiator, cancellation_initiator_json {
    User => "USER",
    Liquidated => "LIQUIDATED",
});

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct Order {
    #[prost(uint64, tag = "1")]
    #[serde(with = "num_str")]
    pub id: u64,
    #[prost(enumeration = "OrderStatus", tag = "2")]
    #[serde(with = "order_status_json")]
    pub status: i32,
    #[prost(string, tag = "3")]
    pub account: String,
    #[prost(string, tag = "4")]
    pub contract_addr: String,
    #[prost(string, tag = "5")]
    pub price: String,
    #[prost(string, tag = "6")]
    pub quantity: String,
    #[prost(string, tag = "7")]
    pub price_denom: String,
    #[prost(string, tag = "8")]
    pub asset_denom: String,
    #[prost(enumeration = "OrderType", tag = "9")]
    #[serde(with = "order_type_json")]
    pub order_type: i32,
    #[prost(enumeration = "PositionDirection", tag = "10")]
    #[serde(with = "position_direction_json")]
    pub position_direction: i32,
    #[prost(string, tag = "11")]
    pub data: String,
    #[prost(string, tag = "12")]
    pub status_description: String,
    #[prost(string, tag = "13")]
    pub nominal: String,
    #[prost(string, tag = "14")]
    pub trigger_price: String,
    #[prost(bool, tag = "15")]
    pub trigger_status: bool,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct Cancellation {
    #[prost(uint64, tag = "1")]
    #[serde(with = "num_str")]
    pub id: u64,
    #[prost(enumeration = "CancellationInitiator", tag = "2")]
    #[serde(with = "cancellation_initiator_json")]
    pub initiator: i32,
    #[prost(string, tag = "3")]
    pub creator: String,
    #[prost(string, tag = "4")]
    pub contract_addr: String,
    #[prost(string, tag = "5")]
    pub price_denom: String,
    #[prost(string, tag = "6")]
    pub asset_denom: String,
    #[prost(enumeration = "PositionDirection", tag = "7")]
    #[serde(with = "position_direction_json")]
    pub position_direction: i32,
    #[prost(string, tag = "8")]
    pub price: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct Allocation {
    #[prost(uint64, tag = "1")]
    #[serde(with = "num_str")]
    pub order_id: u64,
    #[prost(string, tag = "2")]
    pub quantity: String,
    #[prost(string, tag = "3")]
    pub account: String,
}

/// Aggregate resting quantity at one price level, with per-order allocations.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct OrderEntry {
    #[prost(string, tag = "1")]
    pub price: String,
    #[prost(string, tag = "2")]
    pub quantity: String,
    #[prost(message, repeated, tag = "3")]
    pub allocations: Vec<Allocation>,
    #[prost(string, tag = "4")]
    pub price_denom: String,
    #[prost(string, tag = "5")]
    pub asset_denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct LongBook {
    #[prost(string, tag = "1")]
    pub price: String,
    #[prost(message, optional, tag = "2")]
    pub entry: Option<OrderEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct ShortBook {
    #[prost(string, tag = "1")]
    pub price: String,
    #[prost(message, optional, tag = "2")]
    pub entry: Option<OrderEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct Pair {
    #[prost(string, tag = "1")]
    pub price_denom: String,
    #[prost(string, tag = "2")]
    pub asset_denom: String,
    #[prost(string, tag = "3")]
    pub price_ticksize: String,
    #[prost(string, tag = "4")]
    pub quantity_ticksize: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct Price {
    #[prost(uint64, tag = "1")]
    #[serde(with = "num_str")]
    pub snapshot_timestamp_in_seconds: u64,
    #[prost(string, tag = "2")]
    pub price: String,
    #[prost(message, optional, tag = "3")]
    pub pair: Option<Pair>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct Twap {
    #[prost(message, optional, tag = "1")]
    pub pair: Option<Pair>,
    #[prost(string, tag = "2")]
    pub twap: String,
    #[prost(uint64, tag = "3")]
    #[serde(with = "num_str")]
    pub lookback_seconds: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct QueryGetLongBookRequest {
    #[prost(string, tag = "1")]
    pub price: String,
    #[prost(string, tag = "2")]
    pub contract_addr: String,
    #[prost(string, tag = "3")]
    pub price_denom: String,
    #[prost(string, tag = "4")]
    pub asset_denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetLongBookResponse {
    #[prost(message, optional, tag = "1")]
    #[serde(rename(serialize = "LongBook"))]
    pub long_book: Option<LongBook>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct QueryAllLongBookRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: Option<PageRequest>,
    #[prost(string, tag = "2")]
    pub contract_addr: String,
    #[prost(string, tag = "3")]
    pub price_denom: String,
    #[prost(string, tag = "4")]
    pub asset_denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryAllLongBookResponse {
    #[prost(message, repeated, tag = "1")]
    #[serde(rename(serialize = "LongBook"))]
    pub long_book: Vec<LongBook>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct QueryGetShortBookRequest {
    #[prost(string, tag = "1")]
    pub price: String,
    #[prost(string, tag = "2")]
    pub contract_addr: String,
    #[prost(string, tag = "3")]
    pub price_denom: String,
    #[prost(string, tag = "4")]
    pub asset_denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetShortBookResponse {
    #[prost(message, optional, tag = "1")]
    #[serde(rename(serialize = "ShortBook"))]
    pub short_book: Option<ShortBook>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct QueryAllShortBookRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: Option<PageRequest>,
    #[prost(string, tag = "2")]
    pub contract_addr: String,
    #[prost(string, tag = "3")]
    pub price_denom: String,
    #[prost(string, tag = "4")]
    pub asset_denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryAllShortBookResponse {
    #[prost(message, repeated, tag = "1")]
    #[serde(rename(serialize = "ShortBook"))]
    pub short_book: Vec<ShortBook>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct QueryGetPricesRequest {
    #[prost(string, tag = "1")]
    pub price_denom: String,
    #[prost(string, tag = "2")]
    pub asset_denom: String,
    #[prost(string, tag = "3")]
    pub contract_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetPricesResponse {
    #[prost(message, repeated, tag = "1")]
    pub prices: Vec<Price>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct QueryGetPriceRequest {
    #[prost(string, tag = "1")]
    pub price_denom: String,
    #[prost(string, tag = "2")]
    pub asset_denom: String,
    #[prost(string, tag = "3")]
    pub contract_addr: String,
    #[prost(uint64, tag = "4")]
    #[serde(with = "num_str")]
    pub timestamp: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetPriceResponse {
    #[prost(message, optional, tag = "1")]
    pub price: Option<Price>,
    #[prost(bool, tag = "2")]
    pub found: bool,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct QueryGetLatestPriceRequest {
    #[prost(string, tag = "1")]
    pub price_denom: String,
    #[prost(string, tag = "2")]
    pub asset_denom: String,
    #[prost(string, tag = "3")]
    pub contract_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetLatestPriceResponse {
    #[prost(message, optional, tag = "1")]
    pub price: Option<Price>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct QueryGetTwapsRequest {
    #[prost(string, tag = "1")]
    pub contract_addr: String,
    #[prost(uint64, tag = "2")]
    #[serde(with = "num_str")]
    pub lookback_seconds: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetTwapsResponse {
    #[prost(message, repeated, tag = "1")]
    pub twaps: Vec<Twap>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct QueryRegisteredPairsRequest {
    #[prost(string, tag = "1")]
    pub contract_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryRegisteredPairsResponse {
    #[prost(message, repeated, tag = "1")]
    pub pairs: Vec<Pair>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct QueryGetOrdersRequest {
    #[prost(string, tag = "1")]
    pub contract_addr: String,
    #[prost(string, tag = "2")]
    pub account: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetOrdersResponse {
    #[prost(message, repeated, tag = "1")]
    pub orders: Vec<Order>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct QueryGetOrderByIdRequest {
    #[prost(string, tag = "1")]
    pub contract_addr: String,
    #[prost(string, tag = "2")]
    pub price_denom: String,
    #[prost(string, tag = "3")]
    pub asset_denom: String,
    #[prost(uint64, tag = "4")]
    #[serde(with = "num_str")]
    pub id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetOrderByIdResponse {
    #[prost(message, optional, tag = "1")]
    pub order: Option<Order>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct QueryGetMarketSummaryRequest {
    #[prost(string, tag = "1")]
    pub contract_addr: String,
    #[prost(string, tag = "2")]
    pub price_denom: String,
    #[prost(string, tag = "3")]
    pub asset_denom: String,
    #[prost(uint64, tag = "4")]
    #[serde(with = "num_str")]
    pub lookback_in_seconds: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct QueryGetMarketSummaryResponse {
    #[prost(string, tag = "1")]
    pub total_volume: String,
    #[prost(string, tag = "2")]
    pub total_volume_notional: String,
    #[prost(string, tag = "3")]
    pub high_price: String,
    #[prost(string, tag = "4")]
    pub low_price: String,
    #[prost(string, tag = "5")]
    pub last_price: String,
}

impl_name!("seiprotocol.seichain.dex" => Order, Cancellation, LongBook, ShortBook, Pair, Price);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::codec::WireCodec;
    use serde_json::json;

    fn sample_order() -> Order {
        Order {
            id: 42,
            status: OrderStatus::Fulfilled as i32,
            account: "sei1trader".into(),
            contract_addr: "sei1dex".into(),
            price: "10.5".into(),
            quantity: "3".into(),
            price_denom: "USDC".into(),
            asset_denom: "ATOM".into(),
            order_type: OrderType::Stoplimit as i32,
            position_direction: PositionDirection::Short as i32,
            trigger_price: "9.0".into(),
            trigger_status: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_order_json_uses_camel_case_and_enum_names() {
        let v = sample_order().to_json().unwrap();
        assert_eq!(v["contractAddr"], "sei1dex");
        assert_eq!(v["priceDenom"], "USDC");
        assert_eq!(v["status"], "FULFILLED");
        assert_eq!(v["orderType"], "STOPLIMIT");
        assert_eq!(v["positionDirection"], "SHORT");
        assert_eq!(v["id"], "42");
        assert_eq!(Order::from_json(v).unwrap(), sample_order());
    }

    #[test]
    fn test_order_roundtrip_binary() {
        let order = sample_order();
        let decoded = Order::from_bytes(&order.to_bytes()).unwrap();
        assert_eq!(decoded, order);
        assert_eq!(decoded.order_type(), OrderType::Stoplimit);
    }

    #[test]
    fn test_long_book_response_field_name() {
        let resp = QueryGetLongBookResponse {
            long_book: Some(LongBook {
                price: "10".into(),
                entry: Some(OrderEntry {
                    price: "10".into(),
                    quantity: "5".into(),
                    allocations: vec![Allocation { order_id: 1, quantity: "5".into(), account: "sei1a".into() }],
                    price_denom: "USDC".into(),
                    asset_denom: "ATOM".into(),
                }),
            }),
        };
        let v = resp.to_json().unwrap();
        assert_eq!(v["LongBook"]["entry"]["allocations"][0]["orderId"], "1");

        let back = QueryGetLongBookResponse::from_json(v).unwrap();
        assert_eq!(back, resp);
    }

    #[test]
    fn test_all_short_book_from_rest_body() {
        let body = json!({
            "ShortBook": [
                {"price": "11", "entry": {"price": "11", "quantity": "2", "allocations": [], "priceDenom": "USDC", "assetDenom": "ATOM"}}
            ],
            "pagination": {"next_key": null, "total": "1"}
        });
        let resp = QueryAllShortBookResponse::from_json(body).unwrap();
        assert_eq!(resp.short_book.len(), 1);
        assert_eq!(resp.short_book[0].entry.as_ref().unwrap().asset_denom, "ATOM");
    }

    #[test]
    fn test_market_summary_request_encoding_order() {
        let req = QueryGetMarketSummaryRequest {
            contract_addr: "c".into(),
            price_denom: "p".into(),
            asset_denom: "a".into(),
            lookback_in_seconds: 60,
        };
        assert_eq!(
            req.to_bytes(),
            vec![0x0a, 0x01, b'c', 0x12, 0x01, b'p', 0x1a, 0x01, b'a', 0x20, 60]
        );
    }
}
