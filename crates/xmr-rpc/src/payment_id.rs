//! Random payment ids.
//!
//! Two lengths exist: the short id embedded in integrated addresses and the
//! older standalone id.

use rand::rngs::OsRng;
use rand::RngCore;

/// Which payment-id format to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentIdStyle {
    /// 8 random bytes, 16 hex chars. Used inside integrated addresses.
    Integrated,
    /// 32 random bytes, 64 hex chars. The standalone legacy format.
    Legacy,
}

impl PaymentIdStyle {
    /// `true` selects [`Integrated`](Self::Integrated), `false`
    /// [`Legacy`](Self::Legacy).
    pub fn from_integrated(integrated: bool) -> Self {
        if integrated {
            Self::Integrated
        } else {
            Self::Legacy
        }
    }

    pub fn byte_len(self) -> usize {
        match self {
            Self::Integrated => 8,
            Self::Legacy => 32,
        }
    }

    pub fn hex_len(self) -> usize {
        self.byte_len() * 2
    }
}

/// Fresh lowercase-hex payment id drawn from the OS CSPRNG.
pub fn random_payment_id(style: PaymentIdStyle) -> String {
    let mut bytes = vec![0u8; style.byte_len()];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
