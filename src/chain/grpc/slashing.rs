use anyhow::Result;

use super::{unary, Rpc};
use crate::chain::proto::cosmos::slashing::*;

/// Client for `cosmos.slashing.v1beta1.Query`.
#[derive(Clone, Debug)]
pub struct SlashingQueryClient<R> {
    rpc: R,
}

impl<R: Rpc> SlashingQueryClient<R> {
    pub const SERVICE: &'static str = "cosmos.slashing.v1beta1.Query";

    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    pub async fn params(&self, req: QueryParamsRequest) -> Result<QueryParamsResponse> {
        unary(&self.rpc, Self::SERVICE, "Params", req).await
    }

    pub async fn signing_info(&self, req: QuerySigningInfoRequest) -> Result<QuerySigningInfoResponse> {
        unary(&self.rpc, Self::SERVICE, "SigningInfo", req).await
    }

    pub async fn signing_infos(&self, req: QuerySigningInfosRequest) -> Result<QuerySigningInfosResponse> {
        unary(&self.rpc, Self::SERVICE, "SigningInfos", req).await
    }
}
