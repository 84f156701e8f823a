use chrono::{DateTime, Utc};

use super::cart::LineItemId;

/// Summary of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub item_count: u64,
    pub total: u64,
    pub placed_at: DateTime<Utc>,
}

/// Emitted to observers after each cart operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    Added {
        id: LineItemId,
        name: String,
        quantity: u32,
    },
    QuantityChanged {
        id: LineItemId,
        quantity: u32,
    },
    Removed {
        id: LineItemId,
        name: String,
    },
    Cleared,
    /// Checkout accepted; the receipt follows.
    CheckoutStarted,
    CheckedOut(Receipt),
    /// Checkout was requested on an empty cart.
    CheckoutRejected,
}
