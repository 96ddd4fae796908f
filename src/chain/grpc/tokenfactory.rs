use anyhow::Result;

use super::{unary, Rpc};
use crate::chain::proto::sei::tokenfactory::*;

/// Client for `sei.tokenfactory.v1.Query`.
#[derive(Clone, Debug)]
pub struct TokenfactoryQueryClient<R> {
    rpc: R,
}

impl<R: Rpc> TokenfactoryQueryClient<R> {
    pub const SERVICE: &'static str = "sei.tokenfactory.v1.Query";

    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    pub async fn params(&self, req: QueryParamsRequest) -> Result<QueryParamsResponse> {
        unary(&self.rpc, Self::SERVICE, "Params", req).await
    }

    pub async fn denom_authority_metadata(
        &self,
        req: QueryDenomAuthorityMetadataRequest,
    ) -> Result<QueryDenomAuthorityMetadataResponse> {
        unary(&self.rpc, Self::SERVICE, "DenomAuthorityMetadata", req).await
    }

    pub async fn denoms_from_creator(
        &self,
        req: QueryDenomsFromCreatorRequest,
    ) -> Result<QueryDenomsFromCreatorResponse> {
        unary(&self.rpc, Self::SERVICE, "DenomsFromCreator", req).await
    }

    pub async fn denom_metadata(&self, req: QueryDenomMetadataRequest) -> Result<QueryDenomMetadataResponse> {
        unary(&self.rpc, Self::SERVICE, "DenomMetadata", req).await
    }
}
