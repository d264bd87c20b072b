use crate::error::{ClientError, TransportError};

/// Every request carries the same id; the transport keeps no per-call state.
pub(super) const REQUEST_ID: &str = "0";

#[derive(serde::Serialize)]
pub(super) struct JsonRpcRequest<'a> {
    pub(super) jsonrpc: &'static str,
    pub(super) id: &'static str,
    pub(super) method: &'a str,
    pub(super) params: &'a serde_json::Value,
}

#[derive(serde::Deserialize)]
pub(super) struct JsonRpcResponse {
    /// `Some(Null)` for an explicit `"result": null`, `None` when absent.
    #[serde(default, deserialize_with = "present")]
    pub(super) result: Option<serde_json::Value>,
    pub(super) error: Option<serde_json::Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    <serde_json::Value as serde::Deserialize>::deserialize(deserializer).map(Some)
}

/// Split a decoded envelope into its result, or the failure it reports.
///
/// An `error` member always wins over `result`. An envelope carrying
/// neither is malformed.
pub(super) fn into_result(response: JsonRpcResponse) -> Result<serde_json::Value, ClientError> {
    if let Some(err) = response.error {
        return Err(parse_jsonrpc_error(err));
    }
    response.result.ok_or_else(|| {
        TransportError::MalformedResponse("JSON-RPC response has neither result nor error".into())
            .into()
    })
}

/// Parse a JSON-RPC error value into `ClientError::Rpc`.
///
/// Monero sends `{"code": <int>, "message": <string>}`. `code` is optional
/// since some wallet builds omit it, and a numeric string is accepted; any
/// other code shape is dropped while the message is kept. Anything without a
/// string `message` is reported as a malformed response with the raw JSON.
pub(super) fn parse_jsonrpc_error(err: serde_json::Value) -> ClientError {
    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        #[serde(default)]
        code: Option<serde_json::Value>,
        message: String,
    }

    match serde_json::from_value::<JsonRpcError>(err.clone()) {
        Ok(parsed) => ClientError::Rpc {
            code: parsed.code.as_ref().and_then(error_code),
            message: parsed.message,
        },
        Err(_) => TransportError::MalformedResponse(format!("non-standard JSON-RPC error: {err}"))
            .into(),
    }
}

fn error_code(code: &serde_json::Value) -> Option<i64> {
    match code {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
