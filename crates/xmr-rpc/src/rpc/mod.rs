//! Monero RPC invoker layer.
//!
//! Defines the [`JsonRpcInvoker`] and [`PlainHttpInvoker`] traits the clients
//! are written against, an HTTP implementation ([`HttpTransport`]) and a
//! recording test mock (`mock::MockRpc`).

mod http_adapter;
#[cfg(test)]
pub mod mock;

pub use http_adapter::HttpTransport;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// One JSON-RPC round trip against `<endpoint>/json_rpc`.
///
/// Implementations return the unwrapped `result` member. A server `error`
/// object must surface as [`ClientError::Rpc`] and never as a result.
#[async_trait]
pub trait JsonRpcInvoker: Send + Sync {
    /// Base URL this invoker talks to.
    fn endpoint(&self) -> &str;

    async fn call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, ClientError>;
}

/// Plain `POST <endpoint><path>` for daemon paths outside the JSON-RPC
/// envelope (`/is_key_image_spent`, `/stop`).
///
/// Returns the raw body text. HTTP status is not interpreted.
#[async_trait]
pub trait PlainHttpInvoker: Send + Sync {
    async fn post(&self, path: &str, body: Option<serde_json::Value>)
        -> Result<String, ClientError>;
}

/// Everything a daemon client needs from its transport.
pub trait DaemonTransport: JsonRpcInvoker + PlainHttpInvoker {}

impl<T: JsonRpcInvoker + PlainHttpInvoker> DaemonTransport for T {}

/// Decode a `result` payload into the schema expected for `method`.
pub(crate) fn decode_result<T: DeserializeOwned>(
    method: &str,
    raw: serde_json::Value,
) -> Result<T, ClientError> {
    serde_json::from_value(raw).map_err(|source| ClientError::Decode {
        method: method.to_owned(),
        source,
    })
}

/// Call `method` and decode its result in one step.
pub(crate) async fn call_typed<T: DeserializeOwned>(
    rpc: &(impl JsonRpcInvoker + ?Sized),
    method: &str,
    params: serde_json::Value,
) -> Result<T, ClientError> {
    let raw = rpc.call(method, params).await?;
    decode_result(method, raw)
}
