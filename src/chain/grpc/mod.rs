//! gRPC query stubs.
//!
//! Each stub encodes its request, hands the bytes to an [`Rpc`] transport as
//! `/{service}/{method}` and decodes the reply. [`GrpcTransport`] is the
//! tonic-backed transport; tests supply an in-memory one.

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use prost::bytes::{Buf, BufMut};
use tonic::codec::{Codec, DecodeBuf, Decoder, EncodeBuf, Encoder};
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tonic::{Code, Status};

use crate::chain::codec::WireCodec;
use crate::chain::error::ChainError;

mod auth;
mod bank;
mod dex;
mod evm;
mod oracle;
mod slashing;
mod tokenfactory;
mod tx;

pub use auth::AuthQueryClient;
pub use bank::BankQueryClient;
pub use dex::DexQueryClient;
pub use evm::EvmQueryClient;
pub use oracle::OracleQueryClient;
pub use slashing::SlashingQueryClient;
pub use tokenfactory::TokenfactoryQueryClient;
pub use tx::TxServiceClient;

/// Byte-level unary call: `service` is the fully qualified service name
/// (`sei.oracle.v1.Query`), `method` the RPC name (`ExchangeRate`).
pub trait Rpc {
    fn request(
        &self,
        service: &str,
        method: &str,
        data: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// [`Rpc`] over a tonic channel.
#[derive(Clone, Debug)]
pub struct GrpcTransport {
    channel: Channel,
}

impl GrpcTransport {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }

    /// Opens a channel to `endpoint` (`http://host:9090`).
    pub async fn connect(endpoint: &str, connect_timeout: Duration, request_timeout: Duration) -> Result<Self> {
        let channel = Endpoint::from_shared(endpoint.to_string())?
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .connect()
            .await?;
        Ok(Self::new(channel))
    }
}

impl Rpc for GrpcTransport {
    async fn request(&self, service: &str, method: &str, data: Vec<u8>) -> Result<Vec<u8>> {
        let grpc_error = |status: Status| ChainError::Grpc {
            service: service.to_string(),
            method: method.to_string(),
            status,
        };

        let mut grpc = tonic::client::Grpc::new(self.channel.clone());
        grpc.ready()
            .await
            .map_err(|e| grpc_error(Status::new(Code::Unknown, format!("Service was not ready: {e}"))))?;

        let path = PathAndQuery::try_from(format!("/{service}/{method}"))
            .map_err(|e| grpc_error(Status::new(Code::InvalidArgument, e.to_string())))?;

        let response = grpc
            .unary(tonic::Request::new(data), path, RawCodec)
            .await
            .map_err(grpc_error)?;
        Ok(response.into_inner())
    }
}

/// Encodes `req`, calls `service/method` and decodes the reply as `Resp`.
pub(crate) async fn unary<R, Req, Resp>(
    rpc: &R,
    service: &str,
    method: &str,
    req: Req,
) -> Result<Resp>
where
    R: Rpc,
    Req: WireCodec,
    Resp: WireCodec,
{
    log::debug!("gRPC /{}/{}", service, method);
    let bytes = rpc.request(service, method, req.to_bytes()).await?;
    Resp::from_bytes(&bytes)
}

/// Pass-through codec: messages are already protobuf-encoded.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawCodec;

impl Codec for RawCodec {
    type Encode = Vec<u8>;
    type Decode = Vec<u8>;
    type Encoder = RawCodec;
    type Decoder = RawCodec;

    fn encoder(&mut self) -> Self::Encoder {
        RawCodec
    }

    fn decoder(&mut self) -> Self::Decoder {
        RawCodec
    }
}

impl Encoder for RawCodec {
    type Item = Vec<u8>;
    type Error = Status;

    fn encode(&mut self, item: Self::Item, dst: &mut EncodeBuf<'_>) -> Result<(), Self::Error> {
        dst.put_slice(&item);
        Ok(())
    }
}

impl Decoder for RawCodec {
    type Item = Vec<u8>;
    type Error = Status;

    fn decode(&mut self, src: &mut DecodeBuf<'_>) -> Result<Option<Self::Item>, Self::Error> {
        let mut out = vec![0u8; src.remaining()];
        src.copy_to_slice(&mut out);
        Ok(Some(out))
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Records every call and answers from a queue of canned replies.
    #[derive(Clone, Default)]
    pub struct MockRpc {
        pub calls: Arc<Mutex<Vec<(String, String, Vec<u8>)>>>,
        replies: Arc<Mutex<VecDeque<Result<Vec<u8>, Status>>>>,
    }

    impl MockRpc {
        pub fn reply<M: WireCodec>(self, msg: &M) -> Self {
            self.replies.lock().unwrap().push_back(Ok(msg.to_bytes()));
            self
        }

        pub fn reply_raw(self, bytes: Vec<u8>) -> Self {
            self.replies.lock().unwrap().push_back(Ok(bytes));
            self
        }

        pub fn fail(self, status: Status) -> Self {
            self.replies.lock().unwrap().push_back(Err(status));
            self
        }

        pub fn last_call(&self) -> (String, String, Vec<u8>) {
            self.calls.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl Rpc for MockRpc {
        async fn request(&self, service: &str, method: &str, data: Vec<u8>) -> Result<Vec<u8>> {
            self.calls
                .lock()
                .unwrap()
                .push((service.to_string(), method.to_string(), data));
            let reply = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Status::unavailable("no canned reply")));
            reply.map_err(|status| {
                ChainError::Grpc {
                    service: service.to_string(),
                    method: method.to_string(),
                    status,
                }
                .into()
            })
        }
    }
}
