/// Failure of the underlying HTTP exchange.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a JSON-RPC `error` object. Displays as the
    /// server's message, unchanged.
    #[error("{message}")]
    Rpc { code: Option<i64>, message: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unexpected `{method}` result: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(TransportError::Http(err))
    }
}
