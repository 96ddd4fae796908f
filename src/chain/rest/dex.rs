use anyhow::Result;

use super::{page_query, HttpClient};
use crate::chain::proto::sei::dex::*;
use crate::chain::proto::PageRequest;

/// REST wrapper for the dex module.
#[derive(Clone, Debug)]
pub struct DexRestClient {
    http: HttpClient,
}

/// Identifies one order book: contract plus price/asset denom pair.
#[derive(Clone, Copy, Debug)]
pub struct Market<'a> {
    pub contract_addr: &'a str,
    pub price_denom: &'a str,
    pub asset_denom: &'a str,
}

impl DexRestClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn long_book_all(&self, market: Market<'_>, page: Option<&PageRequest>) -> Result<QueryAllLongBookResponse> {
        self.http
            .get(
                "/sei-protocol/seichain/dex/long_book/{contractAddr}/{priceDenom}/{assetDenom}",
                &[market.contract_addr, market.price_denom, market.asset_denom],
                page_query(page),
            )
            .await
    }

    pub async fn long_book(&self, market: Market<'_>, price: &str) -> Result<QueryGetLongBookResponse> {
        self.http
            .get(
                "/sei-protocol/seichain/dex/long_book/{contractAddr}/{priceDenom}/{assetDenom}/{price}",
                &[market.contract_addr, market.price_denom, market.asset_denom, price],
                Vec::new(),
            )
            .await
    }

    pub async fn short_book_all(
        &self,
        market: Market<'_>,
        page: Option<&PageRequest>,
    ) -> Result<QueryAllShortBookResponse> {
        self.http
            .get(
                "/sei-protocol/seichain/dex/short_book/{contractAddr}/{priceDenom}/{assetDenom}",
                &[market.contract_addr, market.price_denom, market.asset_denom],
                page_query(page),
            )
            .await
    }

    pub async fn short_book(&self, market: Market<'_>, price: &str) -> Result<QueryGetShortBookResponse> {
        self.http
            .get(
                "/sei-protocol/seichain/dex/short_book/{contractAddr}/{priceDenom}/{assetDenom}/{price}",
                &[market.contract_addr, market.price_denom, market.asset_denom, price],
                Vec::new(),
            )
            .await
    }

    pub async fn get_prices(&self, market: Market<'_>) -> Result<QueryGetPricesResponse> {
        self.http
            .get(
                "/sei-protocol/seichain/dex/get_prices/{contractAddr}/{priceDenom}/{assetDenom}",
                &[market.contract_addr, market.price_denom, market.asset_denom],
                Vec::new(),
            )
            .await
    }

    pub async fn get_latest_price(&self, market: Market<'_>) -> Result<QueryGetLatestPriceResponse> {
        self.http
            .get(
                "/sei-protocol/seichain/dex/get_latest_price/{contractAddr}/{priceDenom}/{assetDenom}",
                &[market.contract_addr, market.price_denom, market.asset_denom],
                Vec::new(),
            )
            .await
    }

    pub async fn get_price(&self, market: Market<'_>, timestamp: u64) -> Result<QueryGetPriceResponse> {
        let timestamp = timestamp.to_string();
        self.http
            .get(
                "/sei-protocol/seichain/dex/get_price/{contractAddr}/{priceDenom}/{assetDenom}/{timestamp}",
                &[market.contract_addr, market.price_denom, market.asset_denom, timestamp.as_str()],
                Vec::new(),
            )
            .await
    }

    pub async fn get_twaps(&self, contract_addr: &str, lookback_seconds: u64) -> Result<QueryGetTwapsResponse> {
        let lookback = lookback_seconds.to_string();
        self.http
            .get(
                "/sei-protocol/seichain/dex/get_twaps/{contractAddr}/{lookbackSeconds}",
                &[contract_addr, lookback.as_str()],
                Vec::new(),
            )
            .await
    }

    pub async fn registered_pairs(&self, contract_addr: &str) -> Result<QueryRegisteredPairsResponse> {
        self.http
            .get(
                "/sei-protocol/seichain/dex/registered_pairs",
                &[],
                vec![("contractAddr", Some(contract_addr.to_string()))],
            )
            .await
    }

    pub async fn get_orders(&self, contract_addr: &str, account: &str) -> Result<QueryGetOrdersResponse> {
        self.http
            .get(
                "/sei-protocol/seichain/dex/get_orders/{contractAddr}/{account}",
                &[contract_addr, account],
                Vec::new(),
            )
            .await
    }

    pub async fn get_order_by_id(&self, market: Market<'_>, id: u64) -> Result<QueryGetOrderByIdResponse> {
        let id = id.to_string();
        self.http
            .get(
                "/sei-protocol/seichain/dex/get_order_by_id/{contractAddr}/{priceDenom}/{assetDenom}/{id}",
                &[market.contract_addr, market.price_denom, market.asset_denom, id.as_str()],
                Vec::new(),
            )
            .await
    }

    pub async fn get_market_summary(
        &self,
        market: Market<'_>,
        lookback_in_seconds: u64,
    ) -> Result<QueryGetMarketSummaryResponse> {
        let lookback = lookback_in_seconds.to_string();
        self.http
            .get(
                "/sei-protocol/seichain/dex/get_market_summary/{contractAddr}/{priceDenom}/{assetDenom}/{lookbackInSeconds}",
                &[market.contract_addr, market.price_denom, market.asset_denom, lookback.as_str()],
                Vec::new(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::rest::test_server::serve_once;

    const MARKET: Market<'static> = Market { contract_addr: "sei1dex", price_denom: "USDC", asset_denom: "ATOM" };

    #[tokio::test]
    async fn test_long_book_all_camel_case_body() {
        let body = r#"{"LongBook": [{"price": "10", "entry": {"price": "10", "quantity": "4", "priceDenom": "USDC", "assetDenom": "ATOM"}}], "pagination": null}"#;
        let (base, server) = serve_once(200, body).await;
        let client = DexRestClient::new(HttpClient::new(&base).unwrap());

        let resp = client.long_book_all(MARKET, None).await.unwrap();
        assert_eq!(resp.long_book[0].entry.as_ref().unwrap().quantity, "4");
        assert!(resp.pagination.is_none());
        assert!(server
            .await
            .unwrap()
            .starts_with("GET /sei-protocol/seichain/dex/long_book/sei1dex/USDC/ATOM "));
    }

    #[tokio::test]
    async fn test_order_by_id() {
        let body = r#"{"order": {"id": "3", "status": "PLACED", "orderType": "LIMIT", "positionDirection": "LONG", "price": "9"}}"#;
        let (base, server) = serve_once(200, body).await;
        let client = DexRestClient::new(HttpClient::new(&base).unwrap());

        let order = client.get_order_by_id(MARKET, 3).await.unwrap().order.unwrap();
        assert_eq!(order.id, 3);
        assert_eq!(order.position_direction(), PositionDirection::Long);
        assert!(server
            .await
            .unwrap()
            .starts_with("GET /sei-protocol/seichain/dex/get_order_by_id/sei1dex/USDC/ATOM/3 "));
    }

    #[tokio::test]
    async fn test_registered_pairs_query() {
        let (base, server) = serve_once(200, r#"{"pairs": [{"priceDenom": "USDC", "assetDenom": "ATOM"}]}"#).await;
        let client = DexRestClient::new(HttpClient::new(&base).unwrap());
        let resp = client.registered_pairs("sei1dex").await.unwrap();
        assert_eq!(resp.pairs[0].asset_denom, "ATOM");
        assert!(server
            .await
            .unwrap()
            .starts_with("GET /sei-protocol/seichain/dex/registered_pairs?contractAddr=sei1dex "));
    }
}
