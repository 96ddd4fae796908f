use anyhow::Result;

use super::{unary, Rpc};
use crate::chain::proto::cosmos::tx::{
    BroadcastTxRequest, BroadcastTxResponse, GetTxRequest, GetTxResponse, SimulateRequest, SimulateResponse,
};

/// Client for `cosmos.tx.v1beta1.Service`.
#[derive(Clone, Debug)]
pub struct TxServiceClient<R> {
    rpc: R,
}

impl<R: Rpc> TxServiceClient<R> {
    pub const SERVICE: &'static str = "cosmos.tx.v1beta1.Service";

    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    pub async fn simulate(&self, req: SimulateRequest) -> Result<SimulateResponse> {
        unary(&self.rpc, Self::SERVICE, "Simulate", req).await
    }

    pub async fn broadcast_tx(&self, req: BroadcastTxRequest) -> Result<BroadcastTxResponse> {
        unary(&self.rpc, Self::SERVICE, "BroadcastTx", req).await
    }

    pub async fn get_tx(&self, req: GetTxRequest) -> Result<GetTxResponse> {
        unary(&self.rpc, Self::SERVICE, "GetTx", req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::codec::WireCodec;
    use crate::chain::grpc::mock::MockRpc;
    use crate::chain::proto::cosmos::tx::{BroadcastMode, GasInfo, TxResponse};

    #[tokio::test]
    async fn test_simulate_then_broadcast() {
        let rpc = MockRpc::default()
            .reply(&SimulateResponse {
                gas_info: Some(GasInfo { gas_wanted: 0, gas_used: 81_234 }),
                result: None,
            })
            .reply(&BroadcastTxResponse {
                tx_response: Some(TxResponse { txhash: "ABCD".into(), code: 0, ..Default::default() }),
            });
        let client = TxServiceClient::new(rpc.clone());

        let sim = client
            .simulate(SimulateRequest { tx: None, tx_bytes: vec![1, 2, 3] })
            .await
            .unwrap();
        assert_eq!(sim.gas_info.unwrap().gas_used, 81_234);

        let resp = client
            .broadcast_tx(BroadcastTxRequest { tx_bytes: vec![1, 2, 3], mode: BroadcastMode::Sync as i32 })
            .await
            .unwrap();
        assert!(resp.tx_response.unwrap().is_success());

        let (service, method, data) = rpc.last_call();
        assert_eq!(service, "cosmos.tx.v1beta1.Service");
        assert_eq!(method, "BroadcastTx");
        assert_eq!(BroadcastTxRequest::from_bytes(&data).unwrap().mode(), BroadcastMode::Sync);
    }
}
