//! Client for the `monerod` RPC surface.

mod types;

pub use types::{Block, BlockHeader, BlockId, BlockTemplate, KeyImageSpentStatus};

use std::sync::Arc;

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, TransportError};
use crate::rpc::{call_typed, decode_result, DaemonTransport, HttpTransport};

use types::{
    BlockCountResult, BlockHeaderResult, KeyImagesSpentResult, NetworkFlags, RawBlock,
    RawBlockTemplate,
};

/// Typed access to a Monero daemon.
///
/// Each method is one round trip (or none, when local validation fails).
/// The client is stateless beyond its transport and can be shared freely.
#[derive(Clone)]
pub struct DaemonClient {
    rpc: Arc<dyn DaemonTransport>,
}

impl DaemonClient {
    /// Connect to the daemon described by `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(config)?)))
    }

    /// Connect to `http://localhost:18081`.
    pub fn local() -> Result<Self, ClientError> {
        Self::new(&ClientConfig::daemon())
    }

    pub fn with_transport(rpc: Arc<dyn DaemonTransport>) -> Self {
        Self { rpc }
    }

    pub fn endpoint(&self) -> &str {
        self.rpc.endpoint()
    }

    /// Number of blocks in the longest chain known to the node.
    pub async fn get_last_block_height(&self) -> Result<u64, ClientError> {
        let result: BlockCountResult =
            call_typed(self.rpc.as_ref(), "getblockcount", serde_json::json!([])).await?;
        Ok(result.count)
    }

    /// Header of the most recent block.
    pub async fn get_last_block_header(&self) -> Result<BlockHeader, ClientError> {
        let result: BlockHeaderResult =
            call_typed(self.rpc.as_ref(), "getlastblockheader", serde_json::json!([])).await?;
        Ok(result.block_header)
    }

    /// Header of a block by height or hash.
    pub async fn get_block_header(&self, id: impl Into<BlockId>) -> Result<BlockHeader, ClientError> {
        let id = id.into();
        let method = match id {
            BlockId::Height(_) => "getblockheaderbyheight",
            BlockId::Hash(_) => "getblockheaderbyhash",
        };
        let result: BlockHeaderResult = call_typed(self.rpc.as_ref(), method, id.params()).await?;
        Ok(result.block_header)
    }

    /// Full block by height or hash.
    pub async fn get_block(&self, id: impl Into<BlockId>) -> Result<Block, ClientError> {
        let id = id.into();
        let raw: RawBlock = call_typed(self.rpc.as_ref(), "getblock", id.params()).await?;
        Ok(raw.into())
    }

    /// Fresh block template paying the coinbase to `address`, with
    /// `reserved_size` bytes reserved for the miner's extra nonce.
    pub async fn get_block_template(
        &self,
        address: &str,
        reserved_size: u64,
    ) -> Result<BlockTemplate, ClientError> {
        let params = serde_json::json!({
            "wallet_address": address,
            "reserve_size": reserved_size,
        });
        let raw: RawBlockTemplate = call_typed(self.rpc.as_ref(), "getblocktemplate", params).await?;
        Ok(raw.into())
    }

    /// Submit a mined block blob. The returned value carries no guaranteed
    /// shape; success means the daemon reported no error.
    pub async fn submit_block(&self, blob: &str) -> Result<serde_json::Value, ClientError> {
        self.rpc.call("submitblock", serde_json::json!([blob])).await
    }

    /// Spent state of each key image, in the order given.
    pub async fn get_key_images_spent(
        &self,
        key_images: &[String],
    ) -> Result<Vec<KeyImageSpentStatus>, ClientError> {
        const PATH: &str = "/is_key_image_spent";
        if key_images.is_empty() {
            return Ok(Vec::new());
        }

        let body = serde_json::json!({ "key_images": key_images });
        let text = self.rpc.post(PATH, Some(body)).await?;
        let raw: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
            TransportError::MalformedResponse(format!("decode {PATH} response: {e}; body={text}"))
        })?;
        let result: KeyImagesSpentResult = decode_result(PATH, raw)?;

        if result.spent_status.len() != key_images.len() {
            return Err(ClientError::Decode {
                method: PATH.to_owned(),
                source: <serde_json::Error as serde::de::Error>::invalid_length(
                    result.spent_status.len(),
                    &format!("{} statuses", key_images.len()).as_str(),
                ),
            });
        }
        Ok(result.spent_status)
    }

    /// Ask the daemon to shut down. Resolves once the request is
    /// acknowledged at the transport level.
    pub async fn stop(&self) -> Result<(), ClientError> {
        let text = self.rpc.post("/stop", None).await?;
        debug!(body_len = text.len(), "stop acknowledged");
        Ok(())
    }

    /// Raw `get_info` result, unmodified.
    pub async fn get_info(&self) -> Result<serde_json::Value, ClientError> {
        self.rpc.call("get_info", serde_json::json!([])).await
    }

    /// Whether the daemon runs on testnet, from `get_info`.
    pub async fn is_testnet(&self) -> Result<bool, ClientError> {
        let info = self.get_info().await?;
        let flags: NetworkFlags = decode_result("get_info", info)?;
        Ok(flags.testnet)
    }
}
