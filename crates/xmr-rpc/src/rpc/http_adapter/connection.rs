use reqwest::Url;

use crate::error::ClientError;

/// Validate an endpoint and return it without a trailing slash, ready for
/// path suffixes like `/json_rpc`.
pub(super) fn parse_endpoint(endpoint: &str) -> Result<String, ClientError> {
    let parsed = Url::parse(endpoint).map_err(|e| {
        ClientError::InvalidEndpoint(format!(
            "`{endpoint}` is not a valid HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(endpoint.trim_end_matches('/').to_owned()),
        other => Err(ClientError::InvalidEndpoint(format!(
            "unsupported scheme `{other}` in `{endpoint}`; expected http or https"
        ))),
    }
}
