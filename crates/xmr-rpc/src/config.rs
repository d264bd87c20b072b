//! Client configuration: endpoint plus transport timeouts.

use std::time::Duration;

use serde::Deserialize;

/// Default `monerod` RPC endpoint.
pub const DEFAULT_DAEMON_ENDPOINT: &str = "http://localhost:18081";

/// Default `monero-wallet-rpc` endpoint.
pub const DEFAULT_WALLET_ENDPOINT: &str = "http://localhost:18082";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for one client. The endpoint is fixed once a client is built.
///
/// Deserializable so applications can embed it in their own config files:
///
/// ```toml
/// endpoint = "http://127.0.0.1:28081"
/// timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    pub endpoint: String,
    #[serde(rename = "connect_timeout_secs", with = "secs", default = "default_connect_timeout")]
    pub connect_timeout: Duration,
    #[serde(rename = "timeout_secs", with = "secs", default = "default_timeout")]
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn daemon() -> Self {
        Self::new(DEFAULT_DAEMON_ENDPOINT)
    }

    pub fn wallet() -> Self {
        Self::new(DEFAULT_WALLET_ENDPOINT)
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn default_connect_timeout() -> Duration {
    DEFAULT_CONNECT_TIMEOUT
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

mod secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
