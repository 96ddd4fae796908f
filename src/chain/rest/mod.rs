//! REST gateway wrappers, one client per module.
//!
//! Every method fills an OpenAPI-style path template (`/denoms/{denom}/...`)
//! with percent-encoded parameters, adds the query pairs that are present and
//! decodes the JSON reply into the matching protobuf response type.

use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::{Client, Response, Url};
use serde_json::Value;

use crate::chain::codec::WireCodec;
use crate::chain::error::ChainError;
use crate::chain::proto::PageRequest;

mod bank;
mod dex;
mod evm;
mod oracle;
mod slashing;
mod tokenfactory;
mod tx;

pub use bank::BankRestClient;
pub use dex::DexRestClient;
pub use evm::EvmRestClient;
pub use oracle::OracleRestClient;
pub use slashing::SlashingRestClient;
pub use tokenfactory::TokenfactoryRestClient;
pub use tx::TxRestClient;

/// Query-string pairs; `None` values are skipped.
pub type Query<'a> = Vec<(&'a str, Option<String>)>;

/// Shared HTTP client bound to a node's REST base URL.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| anyhow!("invalid REST base URL {base_url}: {e}"))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("REST base URL {base_url} cannot carry a path"));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the URL for `template`, substituting `{...}` segments with
    /// `params` in order.
    pub fn url(&self, template: &str, params: &[&str], query: &Query<'_>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow!("REST base URL cannot carry a path"))?;
            segments.pop_if_empty();

            let mut params = params.iter();
            for piece in template.split('/').filter(|p| !p.is_empty()) {
                if piece.starts_with('{') && piece.ends_with('}') {
                    let value = params
                        .next()
                        .ok_or_else(|| anyhow!("missing value for {piece} in {template}"))?;
                    segments.push(value);
                } else {
                    segments.push(piece);
                }
            }
            if params.next().is_some() {
                return Err(anyhow!("too many path parameters for {template}"));
            }
        }

        let present: Vec<(&str, &String)> = query
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (*key, v)))
            .collect();
        if !present.is_empty() {
            url.query_pairs_mut().extend_pairs(present);
        }
        Ok(url)
    }

    pub async fn get<T: WireCodec>(&self, template: &str, params: &[&str], query: Query<'_>) -> Result<T> {
        let url = self.url(template, params, &query)?;
        log::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        Self::decode(url, response).await
    }

    /// POSTs `body` in its JSON form.
    pub async fn post<B: WireCodec, T: WireCodec>(&self, template: &str, params: &[&str], body: &B) -> Result<T> {
        let url = self.url(template, params, &Vec::new())?;
        log::debug!("POST {}", url);
        let response = self.client.post(url.clone()).json(&body.to_json()?).send().await?;
        Self::decode(url, response).await
    }

    async fn decode<T: WireCodec>(url: Url, response: Response) -> Result<T> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            log::debug!("{} returned {}: {}", url, status, body);
            return Err(ChainError::Http {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            }
            .into());
        }
        T::from_json_str(&text)
    }
}

/// `pagination.*` pairs for an optional page request.
pub(crate) fn page_query(page: Option<&PageRequest>) -> Query<'static> {
    page.map(|p| {
        p.query_pairs()
            .into_iter()
            .map(|(k, v)| (k, Some(v)))
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod test_server {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answers exactly one HTTP request with `status` and `body`, then closes.
    /// The handle resolves to the raw request (head and body).
    pub async fn serve_once(status: u16, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let body = body.to_string();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if let Some(head_end) = find(&buf, b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
                    let length = head
                        .lines()
                        .find_map(|l| l.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if buf.len() >= head_end + 4 + length {
                        break;
                    }
                }
            }

            let reason = if status < 400 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&buf).into_owned()
        });

        (format!("http://{addr}"), handle)
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::test_server::serve_once;
    use super::*;
    use crate::chain::proto::Coin;

    #[test]
    fn test_url_template_and_encoding() {
        let http = HttpClient::new("http://localhost:1317").unwrap();
        let url = http
            .url(
                "/sei-protocol/seichain/tokenfactory/denoms/{denom}/authority_metadata",
                &["factory/sei1abc/pepe"],
                &Vec::new(),
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:1317/sei-protocol/seichain/tokenfactory/denoms/factory%2Fsei1abc%2Fpepe/authority_metadata"
        );
    }

    #[test]
    fn test_url_keeps_base_path_and_skips_absent_query() {
        let http = HttpClient::new("http://node.example/rest/").unwrap();
        let query: Query = vec![("denom", Some("usei".into())), ("pagination.limit", None)];
        let url = http.url("/cosmos/bank/v1beta1/balances/{address}/by_denom", &["sei1x"], &query).unwrap();
        assert_eq!(url.as_str(), "http://node.example/rest/cosmos/bank/v1beta1/balances/sei1x/by_denom?denom=usei");
    }

    #[test]
    fn test_url_param_count_mismatch() {
        let http = HttpClient::new("http://localhost:1317").unwrap();
        assert!(http.url("/a/{b}/{c}", &["1"], &Vec::new()).is_err());
        assert!(http.url("/a/{b}", &["1", "2"], &Vec::new()).is_err());
    }

    #[test]
    fn test_page_query() {
        let page = PageRequest { limit: 5, reverse: true, ..Default::default() };
        let pairs = page_query(Some(&page));
        assert_eq!(
            pairs,
            vec![("pagination.limit", Some("5".to_string())), ("pagination.reverse", Some("true".to_string()))]
        );
        assert!(page_query(None).is_empty());
    }

    #[tokio::test]
    async fn test_get_decodes_body() {
        let (base, server) = serve_once(200, r#"{"denom":"usei","amount":"12"}"#).await;
        let http = HttpClient::new(&base).unwrap();
        let coin: Coin = http.get("/x/{id}", &["1"], Vec::new()).await.unwrap();
        assert_eq!(coin, Coin::new(12, "usei"));

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /x/1 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_non_success_keeps_error_body() {
        let (base, _server) = serve_once(404, r#"{"code":5,"message":"denom not found","details":[]}"#).await;
        let http = HttpClient::new(&base).unwrap();
        let err = http.get::<Coin>("/missing", &[], Vec::new()).await.unwrap_err();
        match err.downcast_ref::<ChainError>() {
            Some(ChainError::Http { status, body, .. }) => {
                assert_eq!(*status, 404);
                assert_eq!(body["message"], "denom not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body_kept_as_text() {
        let (base, _server) = serve_once(500, "upstream exploded").await;
        let http = HttpClient::new(&base).unwrap();
        let err = http.get::<Coin>("/x", &[], Vec::new()).await.unwrap_err();
        match err.downcast_ref::<ChainError>() {
            Some(ChainError::Http { status: 500, body, .. }) => assert_eq!(body, "upstream exploded"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
