//! Client for the `monero-wallet-rpc` surface.

mod types;

pub use types::{
    Balance, Destination, IntegratedAddress, Payment, SplitTransferResult, TransferRequest,
    TransferResult, DEFAULT_MIXIN, DEFAULT_PRIORITY,
};

use std::sync::Arc;

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::payment_id::{random_payment_id, PaymentIdStyle};
use crate::rpc::{call_typed, HttpTransport, JsonRpcInvoker};

use types::{AddressResult, IntegratedAddressResult, PaymentsResult, RawBalance};

/// Typed access to a Monero wallet RPC server.
#[derive(Clone)]
pub struct WalletClient {
    rpc: Arc<dyn JsonRpcInvoker>,
}

impl WalletClient {
    /// Connect to the wallet described by `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(config)?)))
    }

    /// Connect to `http://localhost:18082`.
    pub fn local() -> Result<Self, ClientError> {
        Self::new(&ClientConfig::wallet())
    }

    pub fn with_transport(rpc: Arc<dyn JsonRpcInvoker>) -> Self {
        Self { rpc }
    }

    pub fn endpoint(&self) -> &str {
        self.rpc.endpoint()
    }

    /// The wallet's primary address.
    pub async fn get_address(&self) -> Result<String, ClientError> {
        let result: AddressResult =
            call_typed(self.rpc.as_ref(), "getaddress", serde_json::json!([])).await?;
        Ok(result.address)
    }

    /// Total and unlocked balance.
    pub async fn get_balance(&self) -> Result<Balance, ClientError> {
        let raw: RawBalance =
            call_typed(self.rpc.as_ref(), "getbalance", serde_json::json!([])).await?;
        Ok(raw.into())
    }

    /// Send funds in a single transaction.
    ///
    /// Fails with [`ClientError::InvalidArgument`] and no network call when
    /// `request.destinations` is empty.
    pub async fn transfer(&self, request: &TransferRequest) -> Result<TransferResult, ClientError> {
        request.validate()?;
        call_typed(self.rpc.as_ref(), "transfer", request.to_params()?).await
    }

    /// Send funds, letting the wallet split them over several transactions
    /// when one cannot hold them all. Same validation and defaults as
    /// [`transfer`](Self::transfer).
    pub async fn split_transfer(
        &self,
        request: &TransferRequest,
    ) -> Result<SplitTransferResult, ClientError> {
        request.validate()?;
        call_typed(self.rpc.as_ref(), "transfer_split", request.to_params()?).await
    }

    /// Incoming payments carrying `payment_id`.
    pub async fn get_payments(&self, payment_id: &str) -> Result<Vec<Payment>, ClientError> {
        let result: PaymentsResult = call_typed(
            self.rpc.as_ref(),
            "get_payments",
            serde_json::json!({ "payment_id": payment_id }),
        )
        .await?;
        Ok(result.payments)
    }

    /// Incoming payments for any of `payment_ids`, from `min_block_height` on.
    pub async fn get_bulk_payments(
        &self,
        payment_ids: &[String],
        min_block_height: u64,
    ) -> Result<Vec<Payment>, ClientError> {
        let result: PaymentsResult = call_typed(
            self.rpc.as_ref(),
            "get_bulk_payments",
            serde_json::json!({
                "payment_ids": payment_ids,
                "min_block_height": min_block_height,
            }),
        )
        .await?;
        Ok(result.payments)
    }

    /// Random payment id: `true` gives the 16-hex-char id used in
    /// integrated addresses, `false` the 64-hex-char legacy id.
    ///
    /// Older releases of this interface used the opposite mapping; see
    /// [`PaymentIdStyle`] for an explicit alternative to the flag.
    pub fn get_random_payment_id(&self, integrated: bool) -> String {
        random_payment_id(PaymentIdStyle::from_integrated(integrated))
    }

    /// Generate an integrated-style payment id and ask the wallet for an
    /// address embedding it.
    pub async fn get_random_integrated_address(&self) -> Result<IntegratedAddress, ClientError> {
        let payment_id = self.get_random_payment_id(true);
        debug!(payment_id = %payment_id, "requesting integrated address");
        let result: IntegratedAddressResult = call_typed(
            self.rpc.as_ref(),
            "make_integrated_address",
            serde_json::json!({ "payment_id": payment_id }),
        )
        .await?;
        Ok(IntegratedAddress {
            payment_id,
            address: result.integrated_address,
        })
    }
}
