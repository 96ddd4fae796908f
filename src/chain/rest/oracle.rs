use anyhow::Result;

use super::HttpClient;
use crate::chain::proto::sei::oracle::*;

/// REST wrapper for the oracle module.
#[derive(Clone, Debug)]
pub struct OracleRestClient {
    http: HttpClient,
}

impl OracleRestClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn params(&self) -> Result<QueryParamsResponse> {
        self.http.get("/sei-protocol/oracle/v1/params", &[], Vec::new()).await
    }

    pub async fn actives(&self) -> Result<QueryActivesResponse> {
        self.http.get("/sei/oracle/v1/denoms/actives", &[], Vec::new()).await
    }

    pub async fn exchange_rates(&self) -> Result<QueryExchangeRatesResponse> {
        self.http.get("/sei/oracle/v1/denoms/exchange_rates", &[], Vec::new()).await
    }

    pub async fn exchange_rate(&self, denom: &str) -> Result<QueryExchangeRateResponse> {
        self.http.get("/sei/oracle/v1/denoms/{denom}/exchange_rate", &[denom], Vec::new()).await
    }

    pub async fn price_snapshot_history(&self) -> Result<QueryPriceSnapshotHistoryResponse> {
        self.http.get("/sei/oracle/v1/denoms/price_snapshot_history", &[], Vec::new()).await
    }

    pub async fn twaps(&self, lookback_seconds: u64) -> Result<QueryTwapsResponse> {
        let lookback = lookback_seconds.to_string();
        self.http.get("/sei/oracle/v1/denoms/twaps/{lookback_seconds}", &[lookback.as_str()], Vec::new()).await
    }

    pub async fn vote_targets(&self) -> Result<QueryVoteTargetsResponse> {
        self.http.get("/sei/oracle/v1/denoms/vote_targets", &[], Vec::new()).await
    }

    pub async fn slash_window(&self) -> Result<QuerySlashWindowResponse> {
        self.http.get("/sei/oracle/v1/slash_window", &[], Vec::new()).await
    }

    pub async fn feeder_delegation(&self, validator_addr: &str) -> Result<QueryFeederDelegationResponse> {
        self.http
            .get("/sei/oracle/v1/validators/{validator_addr}/feeder", &[validator_addr], Vec::new())
            .await
    }

    pub async fn vote_penalty_counter(&self, validator_addr: &str) -> Result<QueryVotePenaltyCounterResponse> {
        self.http
            .get("/sei/oracle/v1/validators/{validator_addr}/vote_penalty_counter", &[validator_addr], Vec::new())
            .await
    }
}
