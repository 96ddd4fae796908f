use anyhow::Result;

use super::{unary, Rpc};
use crate::chain::proto::cosmos::auth::{QueryAccountRequest, QueryAccountResponse};

/// Client for `cosmos.auth.v1beta1.Query`.
#[derive(Clone, Debug)]
pub struct AuthQueryClient<R> {
    rpc: R,
}

impl<R: Rpc> AuthQueryClient<R> {
    pub const SERVICE: &'static str = "cosmos.auth.v1beta1.Query";

    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    pub async fn account(&self, req: QueryAccountRequest) -> Result<QueryAccountResponse> {
        unary(&self.rpc, Self::SERVICE, "Account", req).await
    }
}
