use anyhow::Result;

use super::{unary, Rpc};
use crate::chain::proto::sei::oracle::*;

/// Client for `sei.oracle.v1.Query`.
#[derive(Clone, Debug)]
pub struct OracleQueryClient<R> {
    rpc: R,
}

impl<R: Rpc> OracleQueryClient<R> {
    pub const SERVICE: &'static str = "sei.oracle.v1.Query";

    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    pub async fn exchange_rate(&self, req: QueryExchangeRateRequest) -> Result<QueryExchangeRateResponse> {
        unary(&self.rpc, Self::SERVICE, "ExchangeRate", req).await
    }

    pub async fn exchange_rates(&self, req: QueryExchangeRatesRequest) -> Result<QueryExchangeRatesResponse> {
        unary(&self.rpc, Self::SERVICE, "ExchangeRates", req).await
    }

    pub async fn actives(&self, req: QueryActivesRequest) -> Result<QueryActivesResponse> {
        unary(&self.rpc, Self::SERVICE, "Actives", req).await
    }

    pub async fn vote_targets(&self, req: QueryVoteTargetsRequest) -> Result<QueryVoteTargetsResponse> {
        unary(&self.rpc, Self::SERVICE, "VoteTargets", req).await
    }

    pub async fn price_snapshot_history(
        &self,
        req: QueryPriceSnapshotHistoryRequest,
    ) -> Result<QueryPriceSnapshotHistoryResponse> {
        unary(&self.rpc, Self::SERVICE, "PriceSnapshotHistory", req).await
    }

    pub async fn twaps(&self, req: QueryTwapsRequest) -> Result<QueryTwapsResponse> {
        unary(&self.rpc, Self::SERVICE, "Twaps", req).await
    }

    pub async fn feeder_delegation(&self, req: QueryFeederDelegationRequest) -> Result<QueryFeederDelegationResponse> {
        unary(&self.rpc, Self::SERVICE, "FeederDelegation", req).await
    }

    pub async fn vote_penalty_counter(
        &self,
        req: QueryVotePenaltyCounterRequest,
    ) -> Result<QueryVotePenaltyCounterResponse> {
        unary(&self.rpc, Self::SERVICE, "VotePenaltyCounter", req).await
    }

    pub async fn slash_window(&self, req: QuerySlashWindowRequest) -> Result<QuerySlashWindowResponse> {
        unary(&self.rpc, Self::SERVICE, "SlashWindow", req).await
    }

    pub async fn params(&self, req: QueryParamsRequest) -> Result<QueryParamsResponse> {
        unary(&self.rpc, Self::SERVICE, "Params", req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::codec::WireCodec;
    use crate::chain::grpc::mock::MockRpc;

    #[tokio::test]
    async fn test_exchange_rate_call() {
        let reply = QueryExchangeRateResponse {
            oracle_exchange_rate: Some(OracleExchangeRate {
                exchange_rate: "1.25".into(),
                ..Default::default()
            }),
        };
        let rpc = MockRpc::default().reply(&reply);
        let client = OracleQueryClient::new(rpc.clone());

        let resp = client
            .exchange_rate(QueryExchangeRateRequest { denom: "uatom".into() })
            .await
            .unwrap();
        assert_eq!(resp, reply);

        let (service, method, data) = rpc.last_call();
        assert_eq!(service, "sei.oracle.v1.Query");
        assert_eq!(method, "ExchangeRate");
        assert_eq!(QueryExchangeRateRequest::from_bytes(&data).unwrap().denom, "uatom");
    }

    #[tokio::test]
    async fn test_empty_request_sends_no_bytes() {
        let rpc = MockRpc::default().reply(&QueryActivesResponse { actives: vec!["uatom".into(), "ueth".into()] });
        let client = OracleQueryClient::new(rpc.clone());

        let resp = client.actives(QueryActivesRequest {}).await.unwrap();
        assert_eq!(resp.actives, vec!["uatom", "ueth"]);
        assert!(rpc.last_call().2.is_empty());
    }

    #[tokio::test]
    async fn test_twaps_lookback_encoded() {
        let rpc = MockRpc::default().reply(&QueryTwapsResponse::default());
        let client = OracleQueryClient::new(rpc.clone());
        client.twaps(QueryTwapsRequest { lookback_seconds: 3600 }).await.unwrap();
        let (_, method, data) = rpc.last_call();
        assert_eq!(method, "Twaps");
        assert_eq!(QueryTwapsRequest::from_bytes(&data).unwrap().lookback_seconds, 3600);
    }
}
