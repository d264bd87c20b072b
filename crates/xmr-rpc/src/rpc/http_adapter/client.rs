use async_trait::async_trait;
use reqwest::header;
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::error::{ClientError, TransportError};

use super::super::{JsonRpcInvoker, PlainHttpInvoker};
use super::connection::parse_endpoint;
use super::protocol::{into_result, JsonRpcRequest, JsonRpcResponse, REQUEST_ID};

/// JSON-RPC and plain-JSON client for one Monero endpoint over HTTP(S).
///
/// Holds nothing but the endpoint and a `reqwest` client, so one instance
/// can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Build a transport from `config`.
    ///
    /// Fails with [`ClientError::InvalidEndpoint`] when the endpoint is not
    /// an `http`/`https` URL.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let endpoint = parse_endpoint(&config.endpoint)?;

        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .tcp_nodelay(true)
            .build()
            .map_err(TransportError::Http)?;

        Ok(Self { client, endpoint })
    }

    async fn post_raw(
        &self,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<String, ClientError> {
        let url = format!("{}{path}", self.endpoint);
        let mut builder = self.client.post(&url);
        if let Some(body) = body {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .json(body);
        }

        let response = builder.send().await.map_err(TransportError::Http)?;
        let status = response.status();

        let text = response.text().await.map_err(TransportError::Http)?;
        debug!(http.path = path, %status, body_len = text.len(), "http response");
        trace!(http.path = path, body = %text, "http response body");
        Ok(text)
    }
}

#[async_trait]
impl JsonRpcInvoker for HttpTransport {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, ClientError> {
        debug!(rpc.method = method, "rpc call");
        let req = JsonRpcRequest {
            jsonrpc: "2.0",
            id: REQUEST_ID,
            method,
            params: &params,
        };
        let req = serde_json::to_value(&req).map_err(|e| {
            ClientError::InvalidArgument(format!("encode `{method}` request: {e}"))
        })?;

        let body = self.post_raw("/json_rpc", Some(&req)).await?;

        let decoded: JsonRpcResponse = serde_json::from_str(&body).map_err(|e| {
            TransportError::MalformedResponse(format!(
                "decode `{method}` JSON-RPC response: {e}; body={body}"
            ))
        })?;
        into_result(decoded)
    }
}

#[async_trait]
impl PlainHttpInvoker for HttpTransport {
    async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<String, ClientError> {
        debug!(http.path = path, has_body = body.is_some(), "http call");
        self.post_raw(path, body.as_ref()).await
    }
}
