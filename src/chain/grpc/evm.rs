use anyhow::Result;

use super::{unary, Rpc};
use crate::chain::proto::sei::evm::*;

/// Client for `sei.evm.v1.Query`.
#[derive(Clone, Debug)]
pub struct EvmQueryClient<R> {
    rpc: R,
}

impl<R: Rpc> EvmQueryClient<R> {
    pub const SERVICE: &'static str = "sei.evm.v1.Query";

    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    pub async fn sei_address_by_evm_address(
        &self,
        req: QuerySeiAddressByEvmAddressRequest,
    ) -> Result<QuerySeiAddressByEvmAddressResponse> {
        unary(&self.rpc, Self::SERVICE, "SeiAddressByEVMAddress", req).await
    }

    pub async fn evm_address_by_sei_address(
        &self,
        req: QueryEvmAddressBySeiAddressRequest,
    ) -> Result<QueryEvmAddressBySeiAddressResponse> {
        unary(&self.rpc, Self::SERVICE, "EVMAddressBySeiAddress", req).await
    }

    pub async fn static_call(&self, req: QueryStaticCallRequest) -> Result<QueryStaticCallResponse> {
        unary(&self.rpc, Self::SERVICE, "StaticCall", req).await
    }

    pub async fn pointer(&self, req: QueryPointerRequest) -> Result<QueryPointerResponse> {
        unary(&self.rpc, Self::SERVICE, "Pointer", req).await
    }

    pub async fn pointer_version(&self, req: QueryPointerVersionRequest) -> Result<QueryPointerVersionResponse> {
        unary(&self.rpc, Self::SERVICE, "PointerVersion", req).await
    }
}
