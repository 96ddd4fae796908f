use anyhow::Result;

use super::{unary, Rpc};
use crate::chain::proto::sei::dex::*;

/// Client for `seiprotocol.seichain.dex.Query`.
#[derive(Clone, Debug)]
pub struct DexQueryClient<R> {
    rpc: R,
}

impl<R: Rpc> DexQueryClient<R> {
    pub const SERVICE: &'static str = "seiprotocol.seichain.dex.Query";

    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    pub async fn long_book(&self, req: QueryGetLongBookRequest) -> Result<QueryGetLongBookResponse> {
        unary(&self.rpc, Self::SERVICE, "LongBook", req).await
    }

    pub async fn long_book_all(&self, req: QueryAllLongBookRequest) -> Result<QueryAllLongBookResponse> {
        unary(&self.rpc, Self::SERVICE, "LongBookAll", req).await
    }

    pub async fn short_book(&self, req: QueryGetShortBookRequest) -> Result<QueryGetShortBookResponse> {
        unary(&self.rpc, Self::SERVICE, "ShortBook", req).await
    }

    pub async fn short_book_all(&self, req: QueryAllShortBookRequest) -> Result<QueryAllShortBookResponse> {
        unary(&self.rpc, Self::SERVICE, "ShortBookAll", req).await
    }

    pub async fn get_price(&self, req: QueryGetPriceRequest) -> Result<QueryGetPriceResponse> {
        unary(&self.rpc, Self::SERVICE, "GetPrice", req).await
    }

    pub async fn get_latest_price(&self, req: QueryGetLatestPriceRequest) -> Result<QueryGetLatestPriceResponse> {
        unary(&self.rpc, Self::SERVICE, "GetLatestPrice", req).await
    }

    pub async fn get_prices(&self, req: QueryGetPricesRequest) -> Result<QueryGetPricesResponse> {
        unary(&self.rpc, Self::SERVICE, "GetPrices", req).await
    }

    pub async fn get_twaps(&self, req: QueryGetTwapsRequest) -> Result<QueryGetTwapsResponse> {
        unary(&self.rpc, Self::SERVICE, "GetTwaps", req).await
    }

    pub async fn get_registered_pairs(
        &self,
        req: QueryRegisteredPairsRequest,
    ) -> Result<QueryRegisteredPairsResponse> {
        unary(&self.rpc, Self::SERVICE, "GetRegisteredPairs", req).await
    }

    pub async fn get_orders(&self, req: QueryGetOrdersRequest) -> Result<QueryGetOrdersResponse> {
        unary(&self.rpc, Self::SERVICE, "GetOrders", req).await
    }

    pub async fn get_order(&self, req: QueryGetOrderByIdRequest) -> Result<QueryGetOrderByIdResponse> {
        unary(&self.rpc, Self::SERVICE, "GetOrder", req).await
    }

    pub async fn get_market_summary(
        &self,
        req: QueryGetMarketSummaryRequest,
    ) -> Result<QueryGetMarketSummaryResponse> {
        unary(&self.rpc, Self::SERVICE, "GetMarketSummary", req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::grpc::mock::MockRpc;

    #[tokio::test]
    async fn test_get_order_by_id() {
        let order = Order { id: 9, contract_addr: "sei1dex".into(), ..Default::default() };
        let rpc = MockRpc::default().reply(&QueryGetOrderByIdResponse { order: Some(order.clone()) });
        let client = DexQueryClient::new(rpc.clone());

        let resp = client
            .get_order(QueryGetOrderByIdRequest {
                contract_addr: "sei1dex".into(),
                price_denom: "USDC".into(),
                asset_denom: "ATOM".into(),
                id: 9,
            })
            .await
            .unwrap();
        assert_eq!(resp.order, Some(order));
        let (service, method, _) = rpc.last_call();
        assert_eq!(service, "seiprotocol.seichain.dex.Query");
        assert_eq!(method, "GetOrder");
    }

    #[tokio::test]
    async fn test_book_methods() {
        let rpc = MockRpc::default()
            .reply(&QueryAllLongBookResponse::default())
            .reply(&QueryGetShortBookResponse::default());
        let client = DexQueryClient::new(rpc.clone());

        client.long_book_all(QueryAllLongBookRequest::default()).await.unwrap();
        assert_eq!(rpc.last_call().1, "LongBookAll");
        client.short_book(QueryGetShortBookRequest::default()).await.unwrap();
        assert_eq!(rpc.last_call().1, "ShortBook");
    }
}
