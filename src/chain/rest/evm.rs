use anyhow::Result;

use super::HttpClient;
use crate::chain::proto::json::ProtoEnum;
use crate::chain::proto::sei::evm::*;

/// REST wrapper for `sei.evm.v1`.
#[derive(Clone, Debug)]
pub struct EvmRestClient {
    http: HttpClient,
}

impl EvmRestClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn sei_address(&self, evm_address: &str) -> Result<QuerySeiAddressByEvmAddressResponse> {
        self.http
            .get(
                "/sei-protocol/seichain/evm/sei_address",
                &[],
                vec![("evm_address", Some(evm_address.to_string()))],
            )
            .await
    }

    pub async fn evm_address(&self, sei_address: &str) -> Result<QueryEvmAddressBySeiAddressResponse> {
        self.http
            .get(
                "/sei-protocol/seichain/evm/evm_address",
                &[],
                vec![("sei_address", Some(sei_address.to_string()))],
            )
            .await
    }

    pub async fn pointer(&self, pointer_type: PointerType, pointee: &str) -> Result<QueryPointerResponse> {
        self.http
            .get(
                "/sei-protocol/seichain/evm/pointer",
                &[],
                vec![
                    ("pointer_type", Some(pointer_type.as_str_name().to_string())),
                    ("pointee", Some(pointee.to_string())),
                ],
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::rest::test_server::serve_once;

    #[tokio::test]
    async fn test_sei_address_lookup() {
        let (base, server) = serve_once(200, r#"{"sei_address": "sei1assoc", "associated": true}"#).await;
        let client = EvmRestClient::new(HttpClient::new(&base).unwrap());

        let resp = client.sei_address("0xAbC").await.unwrap();
        assert!(resp.associated);
        assert_eq!(resp.sei_address, "sei1assoc");
        assert!(server
            .await
            .unwrap()
            .starts_with("GET /sei-protocol/seichain/evm/sei_address?evm_address=0xAbC "));
    }

    #[tokio::test]
    async fn test_pointer_uses_enum_name() {
        let (base, server) = serve_once(200, r#"{"pointer": "0xptr", "version": 2, "exists": true}"#).await;
        let client = EvmRestClient::new(HttpClient::new(&base).unwrap());
        let resp = client.pointer(PointerType::Erc20, "0xtoken").await.unwrap();
        assert!(resp.exists);
        assert_eq!(resp.version, 2);
        assert!(server
            .await
            .unwrap()
            .starts_with("GET /sei-protocol/seichain/evm/pointer?pointer_type=ERC20&pointee=0xtoken "));
    }
}
