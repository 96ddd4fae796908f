use anyhow::Result;

use super::{page_query, HttpClient};
use crate::chain::proto::cosmos::slashing::*;
use crate::chain::proto::PageRequest;

/// REST wrapper for `cosmos.slashing.v1beta1`.
#[derive(Clone, Debug)]
pub struct SlashingRestClient {
    http: HttpClient,
}

impl SlashingRestClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn params(&self) -> Result<QueryParamsResponse> {
        self.http.get("/cosmos/slashing/v1beta1/params", &[], Vec::new()).await
    }

    pub async fn signing_infos(&self, page: Option<&PageRequest>) -> Result<QuerySigningInfosResponse> {
        self.http.get("/cosmos/slashing/v1beta1/signing_infos", &[], page_query(page)).await
    }

    pub async fn signing_info(&self, cons_address: &str) -> Result<QuerySigningInfoResponse> {
        self.http
            .get("/cosmos/slashing/v1beta1/signing_infos/{cons_address}", &[cons_address], Vec::new())
            .await
    }
}
