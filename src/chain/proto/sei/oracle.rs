//! `sei.oracle.v1`: validator price feeds, snapshots and TWAPs.

use serde::{Deserialize, Serialize};

use crate::chain::proto::json::num_str;

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Blocks per voting period.
    #[prost(uint64, tag = "1")]
    #[serde(with = "num_str")]
    pub vote_period: u64,
    #[prost(string, tag = "2")]
    pub vote_threshold: String,
    #[prost(string, tag = "3")]
    pub reward_band: String,
    #[prost(message, repeated, tag = "4")]
    pub whitelist: Vec<Denom>,
    #[prost(string, tag = "5")]
    pub slash_fraction: String,
    #[prost(uint64, tag = "6")]
    #[serde(with = "num_str")]
    pub slash_window: u64,
    #[prost(string, tag = "7")]
    pub min_valid_per_window: String,
    #[prost(uint64, tag = "9")]
    #[serde(with = "num_str")]
    pub lookback_duration: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Denom {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateExchangeRateVote {
    #[prost(message, repeated, tag = "1")]
    pub exchange_rate_tuples: Vec<ExchangeRateTuple>,
    #[prost(string, tag = "2")]
    pub voter: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeRateTuple {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub exchange_rate: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleExchangeRate {
    #[prost(string, tag = "1")]
    pub exchange_rate: String,
    /// Block height of the last update, as a decimal string.
    #[prost(string, tag = "2")]
    pub last_update: String,
    #[prost(int64, tag = "3")]
    #[serde(with = "num_str")]
    pub last_update_timestamp: i64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceSnapshotItem {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(message, optional, tag = "2")]
    pub oracle_exchange_rate: Option<OracleExchangeRate>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceSnapshot {
    #[prost(int64, tag = "1")]
    #[serde(with = "num_str")]
    pub snapshot_timestamp: i64,
    #[prost(message, repeated, tag = "2")]
    pub price_snapshot_items: Vec<PriceSnapshotItem>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleTwap {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub twap: String,
    #[prost(int64, tag = "3")]
    #[serde(with = "num_str")]
    pub lookback_seconds: i64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct VotePenaltyCounter {
    #[prost(uint64, tag = "1")]
    #[serde(with = "num_str")]
    pub miss_count: u64,
    #[prost(uint64, tag = "2")]
    #[serde(with = "num_str")]
    pub abstain_count: u64,
    #[prost(uint64, tag = "3")]
    #[serde(with = "num_str")]
    pub success_count: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct DenomOracleExchangeRatePair {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(message, optional, tag = "2")]
    pub oracle_exchange_rate: Option<OracleExchangeRate>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryExchangeRateRequest {
    #[prost(string, tag = "1")]
    pub denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryExchangeRateResponse {
    #[prost(message, optional, tag = "1")]
    pub oracle_exchange_rate: Option<OracleExchangeRate>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryExchangeRatesRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryExchangeRatesResponse {
    #[prost(message, repeated, tag = "1")]
    pub denom_oracle_exchange_rate_pairs: Vec<DenomOracleExchangeRatePair>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryActivesRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryActivesResponse {
    #[prost(string, repeated, tag = "1")]
    pub actives: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryVoteTargetsRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryVoteTargetsResponse {
    #[prost(string, repeated, tag = "1")]
    pub vote_targets: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryPriceSnapshotHistoryRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryPriceSnapshotHistoryResponse {
    #[prost(message, repeated, tag = "1")]
    pub price_snapshots: Vec<PriceSnapshot>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryTwapsRequest {
    #[prost(uint64, tag = "1")]
    #[serde(with = "num_str")]
    pub lookback_seconds: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryTwapsResponse {
    #[prost(message, repeated, tag = "1")]
    pub oracle_twaps: Vec<OracleTwap>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryFeederDelegationRequest {
    #[prost(string, tag = "1")]
    pub validator_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryFeederDelegationResponse {
    #[prost(string, tag = "1")]
    pub feeder_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryVotePenaltyCounterRequest {
    #[prost(string, tag = "1")]
    pub validator_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryVotePenaltyCounterResponse {
    #[prost(message, optional, tag = "1")]
    pub vote_penalty_counter: Option<VotePenaltyCounter>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySlashWindowRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySlashWindowResponse {
    /// Blocks elapsed in the current slash window.
    #[prost(uint64, tag = "1")]
    #[serde(with = "num_str")]
    pub window_progress: u64,
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

/// Field 1 (the old prevote salt) is reserved.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgAggregateExchangeRateVote {
    /// Comma-separated `<rate><denom>` list, e.g. `"8.8uatom,1.2usei"`.
    #[prost(string, tag = "2")]
    pub exchange_rates: String,
    #[prost(string, tag = "3")]
    pub feeder: String,
    #[prost(string, tag = "4")]
    pub validator: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgAggregateExchangeRateVoteResponse {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgDelegateFeedConsent {
    #[prost(string, tag = "1")]
    pub operator: String,
    #[prost(string, tag = "2")]
    pub delegate: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgDelegateFeedConsentResponse {}

impl_name!("sei.oracle.v1" =>
    Params,
    AggregateExchangeRateVote,
    OracleExchangeRate,
    PriceSnapshot,
    MsgAggregateExchangeRateVote,
    MsgDelegateFeedConsent,
);
