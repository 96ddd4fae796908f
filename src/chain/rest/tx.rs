use anyhow::Result;

use super::HttpClient;
use crate::chain::proto::cosmos::tx::{
    BroadcastMode, BroadcastTxRequest, BroadcastTxResponse, GetTxResponse, SimulateRequest, SimulateResponse,
};

/// REST wrapper for `cosmos.tx.v1beta1.Service`.
#[derive(Clone, Debug)]
pub struct TxRestClient {
    http: HttpClient,
}

impl TxRestClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_tx(&self, hash: &str) -> Result<GetTxResponse> {
        self.http.get("/cosmos/tx/v1beta1/txs/{hash}", &[hash], Vec::new()).await
    }

    pub async fn broadcast_tx(&self, tx_bytes: Vec<u8>, mode: BroadcastMode) -> Result<BroadcastTxResponse> {
        let req = BroadcastTxRequest { tx_bytes, mode: mode as i32 };
        self.http.post("/cosmos/tx/v1beta1/txs", &[], &req).await
    }

    pub async fn simulate(&self, tx_bytes: Vec<u8>) -> Result<SimulateResponse> {
        let req = SimulateRequest { tx: None, tx_bytes };
        self.http.post("/cosmos/tx/v1beta1/simulate", &[], &req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::rest::test_server::serve_once;

    #[tokio::test]
    async fn test_broadcast_posts_json_body() {
        let body = r#"{"tx_response": {"height": "0", "txhash": "F00D", "code": 0, "raw_log": "[]"}}"#;
        let (base, server) = serve_once(200, body).await;
        let client = TxRestClient::new(HttpClient::new(&base).unwrap());

        let resp = client.broadcast_tx(vec![1, 2, 3], BroadcastMode::Sync).await.unwrap();
        assert_eq!(resp.tx_response.unwrap().txhash, "F00D");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /cosmos/tx/v1beta1/txs "));
        assert!(request.contains(r#""tx_bytes":"AQID""#));
        assert!(request.contains(r#""mode":"BROADCAST_MODE_SYNC""#));
    }

    #[tokio::test]
    async fn test_get_tx_not_found() {
        let (base, _server) = serve_once(404, r#"{"code": 5, "message": "tx not found: ABC"}"#).await;
        let client = TxRestClient::new(HttpClient::new(&base).unwrap());
        let err = client.get_tx("ABC").await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }
}
