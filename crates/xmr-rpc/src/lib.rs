pub mod config;
pub mod daemon;
pub mod error;
pub mod payment_id;
pub mod rpc;
pub mod wallet;

pub use config::ClientConfig;
pub use daemon::{BlockId, DaemonClient};
pub use error::{ClientError, TransportError};
pub use payment_id::PaymentIdStyle;
pub use wallet::{Destination, TransferRequest, WalletClient};
