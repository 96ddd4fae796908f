use anyhow::Result;

use super::{page_query, HttpClient};
use crate::chain::proto::cosmos::bank::*;
use crate::chain::proto::PageRequest;

/// REST wrapper for `cosmos.bank.v1beta1`.
#[derive(Clone, Debug)]
pub struct BankRestClient {
    http: HttpClient,
}

impl BankRestClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn all_balances(&self, address: &str, page: Option<&PageRequest>) -> Result<QueryAllBalancesResponse> {
        self.http
            .get("/cosmos/bank/v1beta1/balances/{address}", &[address], page_query(page))
            .await
    }

    pub async fn balance(&self, address: &str, denom: &str) -> Result<QueryBalanceResponse> {
        self.http
            .get(
                "/cosmos/bank/v1beta1/balances/{address}/by_denom",
                &[address],
                vec![("denom", Some(denom.to_string()))],
            )
            .await
    }

    pub async fn denoms_metadata(&self, page: Option<&PageRequest>) -> Result<QueryDenomsMetadataResponse> {
        self.http.get("/cosmos/bank/v1beta1/denoms_metadata", &[], page_query(page)).await
    }

    pub async fn denom_metadata(&self, denom: &str) -> Result<QueryDenomMetadataResponse> {
        self.http.get("/cosmos/bank/v1beta1/denoms_metadata/{denom}", &[denom], Vec::new()).await
    }

    pub async fn params(&self) -> Result<QueryParamsResponse> {
        self.http.get("/cosmos/bank/v1beta1/params", &[], Vec::new()).await
    }

    pub async fn spendable_balances(
        &self,
        address: &str,
        page: Option<&PageRequest>,
    ) -> Result<QuerySpendableBalancesResponse> {
        self.http
            .get("/cosmos/bank/v1beta1/spendable_balances/{address}", &[address], page_query(page))
            .await
    }

    pub async fn total_supply(&self, page: Option<&PageRequest>) -> Result<QueryTotalSupplyResponse> {
        self.http.get("/cosmos/bank/v1beta1/supply", &[], page_query(page)).await
    }

    pub async fn supply_of(&self, denom: &str) -> Result<QuerySupplyOfResponse> {
        self.http.get("/cosmos/bank/v1beta1/supply/{denom}", &[denom], Vec::new()).await
    }
}
