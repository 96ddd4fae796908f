use anyhow::Result;

use super::HttpClient;
use crate::chain::proto::sei::tokenfactory::*;

/// REST wrapper for `sei.tokenfactory.v1`.
#[derive(Clone, Debug)]
pub struct TokenfactoryRestClient {
    http: HttpClient,
}

impl TokenfactoryRestClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn params(&self) -> Result<QueryParamsResponse> {
        self.http.get("/sei-protocol/seichain/tokenfactory/params", &[], Vec::new()).await
    }

    pub async fn denom_authority_metadata(&self, denom: &str) -> Result<QueryDenomAuthorityMetadataResponse> {
        self.http
            .get("/sei-protocol/seichain/tokenfactory/denoms/{denom}/authority_metadata", &[denom], Vec::new())
            .await
    }

    pub async fn denoms_from_creator(&self, creator: &str) -> Result<QueryDenomsFromCreatorResponse> {
        self.http
            .get("/sei-protocol/seichain/tokenfactory/denoms_from_creator/{creator}", &[creator], Vec::new())
            .await
    }

    pub async fn denom_metadata(&self, denom: &str) -> Result<QueryDenomMetadataResponse> {
        self.http
            .get(
                "/sei-protocol/seichain/tokenfactory/denoms/metadata",
                &[],
                vec![("denom", Some(denom.to_string()))],
            )
            .await
    }
}
