use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ClientError, TransportError};

use super::{JsonRpcInvoker, PlainHttpInvoker};

/// Canned reply for one method or path.
#[derive(Clone)]
enum Reply {
    Result(serde_json::Value),
    RpcError(String),
    Body(String),
}

/// A recorded outbound call.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Rpc {
        method: String,
        params: serde_json::Value,
    },
    Post {
        path: String,
        body: Option<serde_json::Value>,
    },
}

/// A mock Monero RPC backend for testing. Returns canned replies keyed by
/// method name or path, populated via the builder pattern, and records
/// every call it receives.
pub struct MockRpc {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<Recorded>>,
}

impl MockRpc {
    pub fn builder() -> MockRpcBuilder {
        MockRpcBuilder {
            replies: HashMap::new(),
        }
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }

    /// Params of the single recorded RPC call; panics otherwise.
    pub fn only_params(&self) -> serde_json::Value {
        match self.calls().as_slice() {
            [Recorded::Rpc { params, .. }] => params.clone(),
            other => panic!("expected exactly one rpc call, got {other:?}"),
        }
    }

    fn record(&self, call: Recorded) {
        self.calls.lock().expect("mock call log poisoned").push(call);
    }

    fn reply(&self, key: &str) -> Result<Reply, ClientError> {
        self.replies.get(key).cloned().ok_or_else(|| {
            TransportError::MalformedResponse(format!("mock has no reply for `{key}`")).into()
        })
    }
}

pub struct MockRpcBuilder {
    replies: HashMap<String, Reply>,
}

impl MockRpcBuilder {
    pub fn with_result(mut self, method: &str, result: serde_json::Value) -> Self {
        self.replies
            .insert(method.to_owned(), Reply::Result(result));
        self
    }

    pub fn with_rpc_error(mut self, method: &str, message: &str) -> Self {
        self.replies
            .insert(method.to_owned(), Reply::RpcError(message.to_owned()));
        self
    }

    pub fn with_body(mut self, path: &str, body: &str) -> Self {
        self.replies
            .insert(path.to_owned(), Reply::Body(body.to_owned()));
        self
    }

    pub fn build(self) -> MockRpc {
        MockRpc {
            replies: self.replies,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl JsonRpcInvoker for MockRpc {
    fn endpoint(&self) -> &str {
        "http://mock"
    }

    async fn call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, ClientError> {
        self.record(Recorded::Rpc {
            method: method.to_owned(),
            params,
        });
        match self.reply(method)? {
            Reply::Result(value) => Ok(value),
            Reply::RpcError(message) => Err(ClientError::Rpc {
                code: Some(-1),
                message,
            }),
            Reply::Body(_) => panic!("`{method}` is registered as a plain path"),
        }
    }
}

#[async_trait]
impl PlainHttpInvoker for MockRpc {
    async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<String, ClientError> {
        self.record(Recorded::Post {
            path: path.to_owned(),
            body,
        });
        match self.reply(path)? {
            Reply::Body(text) => Ok(text),
            _ => panic!("`{path}` is registered as an rpc method"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_calls_in_order() {
        let rpc = MockRpc::builder()
            .with_result("getblockcount", serde_json::json!({ "count": 1 }))
            .with_body("/stop", "")
            .build();

        rpc.call("getblockcount", serde_json::json!([]))
            .await
            .expect("canned result");
        rpc.post("/stop", None).await.expect("canned body");

        assert_eq!(
            rpc.calls(),
            vec![
                Recorded::Rpc {
                    method: "getblockcount".into(),
                    params: serde_json::json!([]),
                },
                Recorded::Post {
                    path: "/stop".into(),
                    body: None,
                },
            ]
        );
    }

    #[tokio::test]
    async fn unknown_method_fails_and_is_recorded() {
        let rpc = MockRpc::builder().build();
        assert!(rpc.call("get_info", serde_json::json!([])).await.is_err());
        assert_eq!(rpc.calls().len(), 1);
    }
}
