use serde_json::Value;
use thiserror::Error;

/// Typed failures surfaced by the chain clients.
///
/// Public functions return `anyhow::Result`; callers that need to branch on
/// the failure kind use `err.downcast_ref::<ChainError>()`.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("failed to decode {type_name}: {source}")]
    Decode {
        type_name: &'static str,
        #[source]
        source: prost::DecodeError,
    },

    #[error("invalid JSON for {type_name}: {source}")]
    Json {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP {status} from {url}: {body}")]
    Http { status: u16, url: String, body: Value },

    #[error("JSON-RPC error {code}: {message}")]
    JsonRpc {
        code: i64,
        message: String,
        data: Option<Value>,
    },

    #[error("gRPC call /{service}/{method} failed: {status}")]
    Grpc {
        service: String,
        method: String,
        status: tonic::Status,
    },

    #[error("unexpected Any type: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("client not connected, call connect() first")]
    NotConnected,
}

impl ChainError {
    /// gRPC status code for `Grpc` errors.
    pub fn grpc_code(&self) -> Option<tonic::Code> {
        match self {
            ChainError::Grpc { status, .. } => Some(status.code()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display_includes_body() {
        let err = ChainError::Http {
            status: 404,
            url: "http://localhost:1317/x".to_string(),
            body: serde_json::json!({"code": 5, "message": "not found"}),
        };
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("not found"));
    }

    #[test]
    fn test_grpc_code_passthrough() {
        let err = ChainError::Grpc {
            service: "cosmos.auth.v1beta1.Query".to_string(),
            method: "Account".to_string(),
            status: tonic::Status::not_found("account sei1xyz not found"),
        };
        assert_eq!(err.grpc_code(), Some(tonic::Code::NotFound));
        assert_eq!(ChainError::NotConnected.grpc_code(), None);
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = ChainError::NotConnected.into();
        assert!(matches!(err.downcast_ref::<ChainError>(), Some(ChainError::NotConnected)));
    }
}
