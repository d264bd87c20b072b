//! Request and response shapes for the daemon RPC surface.
//!
//! Public structs are the stable contract handed to callers. `Raw*` structs
//! mirror the daemon's field names and are converted at the boundary, so
//! upstream renames stay contained here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

// ==============================================================================
// Block Identifier
// ==============================================================================

/// A block addressed either by height or by hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockId {
    Height(u64),
    Hash(String),
}

impl BlockId {
    /// The JSON-RPC params object selecting this block: `{height}` or `{hash}`.
    pub(crate) fn params(&self) -> serde_json::Value {
        match self {
            Self::Height(height) => serde_json::json!({ "height": height }),
            Self::Hash(hash) => serde_json::json!({ "hash": hash }),
        }
    }
}

impl From<u64> for BlockId {
    fn from(height: u64) -> Self {
        Self::Height(height)
    }
}

impl From<&str> for BlockId {
    fn from(hash: &str) -> Self {
        Self::Hash(hash.to_owned())
    }
}

impl From<String> for BlockId {
    fn from(hash: String) -> Self {
        Self::Hash(hash)
    }
}

/// Accepts a non-negative integer as a height and a string as a hash.
/// Anything else (negative or fractional numbers, objects, arrays, booleans,
/// null) is rejected.
impl TryFrom<&serde_json::Value> for BlockId {
    type Error = ClientError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Number(n) => n.as_u64().map(Self::Height).ok_or_else(|| {
                ClientError::InvalidArgument(format!(
                    "block height must be a non-negative integer, got {n}"
                ))
            }),
            serde_json::Value::String(s) => Ok(Self::Hash(s.clone())),
            other => Err(ClientError::InvalidArgument(format!(
                "block id must be a height or a hash, got {other}"
            ))),
        }
    }
}

/// All-digit input that fits a `u64` parses as a height; anything else
/// non-empty is a hash. A block hash is 64 hex chars and may be all digits.
impl FromStr for BlockId {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ClientError::InvalidArgument("block id is empty".into()));
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(height) = s.parse() {
                return Ok(Self::Height(height));
            }
        }
        Ok(Self::Hash(s.to_owned()))
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Height(height) => write!(f, "{height}"),
            Self::Hash(hash) => f.write_str(hash),
        }
    }
}

// ==============================================================================
// Blocks
// ==============================================================================

/// Block header as reported by `getlastblockheader` and friends.
///
/// Fields the daemon adds beyond the ones named here are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub major_version: u64,
    pub minor_version: u64,
    pub timestamp: u64,
    pub prev_hash: String,
    pub nonce: u64,
    pub orphan_status: bool,
    pub height: u64,
    pub depth: u64,
    pub hash: String,
    pub difficulty: u64,
    pub reward: u64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A full block: hex blob, the daemon's JSON rendering of it, and its header.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub blob: String,
    pub body: String,
    pub header: BlockHeader,
}

#[derive(Deserialize)]
pub(super) struct RawBlock {
    blob: String,
    json: String,
    block_header: BlockHeader,
}

impl From<RawBlock> for Block {
    fn from(raw: RawBlock) -> Self {
        Self {
            blob: raw.blob,
            body: raw.json,
            header: raw.block_header,
        }
    }
}

#[derive(Deserialize)]
pub(super) struct BlockHeaderResult {
    pub(super) block_header: BlockHeader,
}

#[derive(Deserialize)]
pub(super) struct BlockCountResult {
    pub(super) count: u64,
}

// ==============================================================================
// Mining
// ==============================================================================

/// Template a miner fills in before `submit_block`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTemplate {
    pub blob: String,
    pub difficulty: u64,
    pub height: u64,
    pub previous: String,
    /// Byte offset of the reserved area inside `blob`.
    pub offset: u64,
}

#[derive(Deserialize)]
pub(super) struct RawBlockTemplate {
    blocktemplate_blob: String,
    difficulty: u64,
    height: u64,
    prev_hash: String,
    reserved_offset: u64,
}

impl From<RawBlockTemplate> for BlockTemplate {
    fn from(raw: RawBlockTemplate) -> Self {
        Self {
            blob: raw.blocktemplate_blob,
            difficulty: raw.difficulty,
            height: raw.height,
            previous: raw.prev_hash,
            offset: raw.reserved_offset,
        }
    }
}

// ==============================================================================
// Key Images
// ==============================================================================

/// Spent state of one key image, as coded by `/is_key_image_spent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum KeyImageSpentStatus {
    Unspent,
    SpentInBlockchain,
    SpentInPool,
}

impl TryFrom<u8> for KeyImageSpentStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Unspent),
            1 => Ok(Self::SpentInBlockchain),
            2 => Ok(Self::SpentInPool),
            other => Err(format!("unknown key image spent status {other}")),
        }
    }
}

impl From<KeyImageSpentStatus> for u8 {
    fn from(status: KeyImageSpentStatus) -> Self {
        match status {
            KeyImageSpentStatus::Unspent => 0,
            KeyImageSpentStatus::SpentInBlockchain => 1,
            KeyImageSpentStatus::SpentInPool => 2,
        }
    }
}

impl KeyImageSpentStatus {
    pub fn is_spent(self) -> bool {
        !matches!(self, Self::Unspent)
    }
}

#[derive(Deserialize)]
pub(super) struct KeyImagesSpentResult {
    pub(super) spent_status: Vec<KeyImageSpentStatus>,
}

// ==============================================================================
// Node Info
// ==============================================================================

#[derive(Deserialize)]
pub(super) struct NetworkFlags {
    pub(super) testnet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_id_from_json_number_is_height() {
        let id = BlockId::try_from(&serde_json::json!(1491204)).expect("height must parse");
        assert_eq!(id, BlockId::Height(1491204));
    }

    #[test]
    fn block_id_from_json_string_is_hash() {
        let hash = "01928cbece02865ec587a7bce8401bd63bb79c8696b012580928282bd91f8b1b";
        let id = BlockId::try_from(&serde_json::json!(hash)).expect("hash must parse");
        assert_eq!(id, BlockId::Hash(hash.to_owned()));
    }

    #[test]
    fn block_id_rejects_other_json_types() {
        for value in [
            serde_json::json!({ "wow": 5 }),
            serde_json::json!(-1),
            serde_json::json!(1.5),
            serde_json::json!(true),
            serde_json::json!(null),
            serde_json::json!([1]),
        ] {
            let err = BlockId::try_from(&value).expect_err("must reject");
            assert!(matches!(err, ClientError::InvalidArgument(_)), "{value}");
        }
    }

    #[test]
    fn block_id_from_str() {
        assert_eq!("42".parse::<BlockId>().expect("height"), BlockId::Height(42));
        assert_eq!(
            "ab12".parse::<BlockId>().expect("hash"),
            BlockId::Hash("ab12".into())
        );
        assert!("  ".parse::<BlockId>().is_err());
    }

    #[test]
    fn all_digit_hash_is_not_a_height() {
        let hash = "1234567890".repeat(6) + "1234";
        assert_eq!(
            hash.parse::<BlockId>().expect("hash"),
            BlockId::Hash(hash.clone())
        );
        assert_eq!(
            u64::MAX.to_string().parse::<BlockId>().expect("height"),
            BlockId::Height(u64::MAX)
        );
    }

    #[test]
    fn block_id_params_use_tag_specific_key() {
        assert_eq!(BlockId::Height(7).params(), serde_json::json!({ "height": 7 }));
        assert_eq!(
            BlockId::from("ff").params(),
            serde_json::json!({ "hash": "ff" })
        );
    }

    #[test]
    fn spent_status_codes() {
        let decoded: Vec<KeyImageSpentStatus> =
            serde_json::from_value(serde_json::json!([0, 1, 2])).expect("codes must decode");
        assert_eq!(
            decoded,
            vec![
                KeyImageSpentStatus::Unspent,
                KeyImageSpentStatus::SpentInBlockchain,
                KeyImageSpentStatus::SpentInPool,
            ]
        );
        assert!(!decoded[0].is_spent());
        assert!(decoded[2].is_spent());
        assert!(serde_json::from_value::<KeyImageSpentStatus>(serde_json::json!(3)).is_err());
    }

    #[test]
    fn raw_template_renames_fields() {
        let raw: RawBlockTemplate = serde_json::from_value(serde_json::json!({
            "blocktemplate_blob": "0707",
            "difficulty": 1000,
            "height": 12,
            "prev_hash": "aa",
            "reserved_offset": 130,
            "status": "OK",
        }))
        .expect("template must decode");
        let template = BlockTemplate::from(raw);
        assert_eq!(template.blob, "0707");
        assert_eq!(template.previous, "aa");
        assert_eq!(template.offset, 130);
    }
}
