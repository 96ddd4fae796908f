use anyhow::Result;

use super::{unary, Rpc};
use crate::chain::proto::cosmos::bank::*;

/// Client for `cosmos.bank.v1beta1.Query`.
#[derive(Clone, Debug)]
pub struct BankQueryClient<R> {
    rpc: R,
}

impl<R: Rpc> BankQueryClient<R> {
    pub const SERVICE: &'static str = "cosmos.bank.v1beta1.Query";

    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    pub async fn balance(&self, req: QueryBalanceRequest) -> Result<QueryBalanceResponse> {
        unary(&self.rpc, Self::SERVICE, "Balance", req).await
    }

    pub async fn all_balances(&self, req: QueryAllBalancesRequest) -> Result<QueryAllBalancesResponse> {
        unary(&self.rpc, Self::SERVICE, "AllBalances", req).await
    }

    pub async fn spendable_balances(
        &self,
        req: QuerySpendableBalancesRequest,
    ) -> Result<QuerySpendableBalancesResponse> {
        unary(&self.rpc, Self::SERVICE, "SpendableBalances", req).await
    }

    pub async fn total_supply(&self, req: QueryTotalSupplyRequest) -> Result<QueryTotalSupplyResponse> {
        unary(&self.rpc, Self::SERVICE, "TotalSupply", req).await
    }

    pub async fn supply_of(&self, req: QuerySupplyOfRequest) -> Result<QuerySupplyOfResponse> {
        unary(&self.rpc, Self::SERVICE, "SupplyOf", req).await
    }

    pub async fn params(&self, req: QueryParamsRequest) -> Result<QueryParamsResponse> {
        unary(&self.rpc, Self::SERVICE, "Params", req).await
    }

    pub async fn denom_metadata(&self, req: QueryDenomMetadataRequest) -> Result<QueryDenomMetadataResponse> {
        unary(&self.rpc, Self::SERVICE, "DenomMetadata", req).await
    }

    pub async fn denoms_metadata(&self, req: QueryDenomsMetadataRequest) -> Result<QueryDenomsMetadataResponse> {
        unary(&self.rpc, Self::SERVICE, "DenomsMetadata", req).await
    }
}
