//! Request and response shapes for the wallet RPC surface.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Ring size default sent with transfers when the caller sets none.
pub const DEFAULT_MIXIN: u32 = 7;

/// Fee priority default sent with transfers when the caller sets none.
pub const DEFAULT_PRIORITY: u32 = 0;

const DESTINATIONS_REQUIRED: &str = "destinations are required";

/// Keys owned by typed `TransferRequest` fields.
const RESERVED_KEYS: [&str; 3] = ["destinations", "mixin", "priority"];

// ==============================================================================
// Balance / Addresses
// ==============================================================================

/// Wallet balance in atomic units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    pub total: u64,
    pub spendable: u64,
}

#[derive(Deserialize)]
pub(super) struct RawBalance {
    balance: u64,
    unlocked_balance: u64,
}

impl From<RawBalance> for Balance {
    fn from(raw: RawBalance) -> Self {
        Self {
            total: raw.balance,
            spendable: raw.unlocked_balance,
        }
    }
}

#[derive(Deserialize)]
pub(super) struct AddressResult {
    pub(super) address: String,
}

/// A freshly generated payment id and the integrated address embedding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegratedAddress {
    pub payment_id: String,
    pub address: String,
}

#[derive(Deserialize)]
pub(super) struct IntegratedAddressResult {
    pub(super) integrated_address: String,
}

// ==============================================================================
// Transfers
// ==============================================================================

/// One recipient of a transfer. `amount` is in atomic units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub address: String,
    pub amount: u64,
}

impl Destination {
    pub fn new(address: impl Into<String>, amount: u64) -> Self {
        Self {
            address: address.into(),
            amount,
        }
    }
}

/// Parameters for `transfer` / `transfer_split`.
///
/// `mixin` and `priority` fall back to [`DEFAULT_MIXIN`] and
/// [`DEFAULT_PRIORITY`]. Other fields in `extra` (`payment_id`,
/// `unlock_time`, `get_tx_key`, `do_not_relay`, ...) are forwarded to the
/// wallet as-is. `extra` may not carry `destinations`, `mixin` or
/// `priority`; such a request is rejected before any call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransferRequest {
    pub destinations: Vec<Destination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixin: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TransferRequest {
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self {
            destinations,
            ..Self::default()
        }
    }

    pub fn with_mixin(mut self, mixin: u32) -> Self {
        self.mixin = Some(mixin);
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Rejects empty destinations, and `extra` entries that would shadow a
    /// typed field on the wire.
    pub(super) fn validate(&self) -> Result<(), ClientError> {
        if self.destinations.is_empty() {
            return Err(ClientError::InvalidArgument(DESTINATIONS_REQUIRED.into()));
        }
        if let Some(key) = RESERVED_KEYS.iter().find(|key| self.extra.contains_key(**key)) {
            return Err(ClientError::InvalidArgument(format!(
                "`{key}` must be set through its typed field, not as an extra field"
            )));
        }
        Ok(())
    }

    /// Wire params: defaults, then passthrough fields, then typed fields.
    pub(super) fn to_params(&self) -> Result<serde_json::Value, ClientError> {
        let mut params = serde_json::Map::new();
        params.insert("mixin".into(), DEFAULT_MIXIN.into());
        params.insert("priority".into(), DEFAULT_PRIORITY.into());
        params.extend(self.extra.clone());

        let destinations = serde_json::to_value(&self.destinations).map_err(|e| {
            ClientError::InvalidArgument(format!("encode transfer destinations: {e}"))
        })?;
        params.insert("destinations".into(), destinations);
        if let Some(mixin) = self.mixin {
            params.insert("mixin".into(), mixin.into());
        }
        if let Some(priority) = self.priority {
            params.insert("priority".into(), priority.into());
        }
        Ok(serde_json::Value::Object(params))
    }
}

/// Build a request from a loosely typed options object, as received from
/// scripts or config. A missing, non-array or empty `destinations` member is
/// rejected before anything else is looked at.
impl TryFrom<serde_json::Value> for TransferRequest {
    type Error = ClientError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let has_destinations = value
            .get("destinations")
            .and_then(serde_json::Value::as_array)
            .is_some_and(|destinations| !destinations.is_empty());
        if !has_destinations {
            return Err(ClientError::InvalidArgument(DESTINATIONS_REQUIRED.into()));
        }
        serde_json::from_value(value)
            .map_err(|e| ClientError::InvalidArgument(format!("invalid transfer request: {e}")))
    }
}

/// Result of a single-transaction `transfer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferResult {
    pub tx_hash: String,
    #[serde(default)]
    pub tx_key: Option<String>,
    #[serde(default)]
    pub amount: Option<u64>,
    #[serde(default)]
    pub fee: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Result of `transfer_split`: one entry per created transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitTransferResult {
    pub tx_hash_list: Vec<String>,
    #[serde(default)]
    pub tx_key_list: Vec<String>,
    #[serde(default)]
    pub amount_list: Vec<u64>,
    #[serde(default)]
    pub fee_list: Vec<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ==============================================================================
// Payments
// ==============================================================================

/// An incoming payment matched by payment id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: String,
    pub tx_hash: String,
    pub amount: u64,
    pub block_height: u64,
    pub unlock_time: u64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The wallet omits `payments` entirely when nothing matched.
#[derive(Deserialize)]
pub(super) struct PaymentsResult {
    #[serde(default)]
    pub(super) payments: Vec<Payment>,
}
