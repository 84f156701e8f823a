//! Read model for whatever renders the cart overlay.

use serde::Serialize;

use crate::domain::cart::{Cart, LineItemId};
use crate::domain::events::CartEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineView {
    pub id: LineItemId,
    pub name: String,
    pub image_ref: String,
    pub unit_price: u64,
    pub quantity: u32,
    pub line_total: u64,
    /// e.g. "₹1999 × 2"
    pub price_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub lines: Vec<LineView>,
    pub total: u64,
    pub total_label: String,
    pub item_count: u64,
    pub is_empty: bool,
}

impl CartView {
    pub fn from_cart(cart: &Cart, symbol: &str) -> Self {
        let lines = cart
            .items()
            .iter()
            .map(|item| LineView {
                id: item.id.clone(),
                name: item.name.clone(),
                image_ref: item.image_ref.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                line_total: item.line_total(),
                price_label: format!("{} × {}", format_price(symbol, item.unit_price), item.quantity),
            })
            .collect();

        Self {
            lines,
            total: cart.total(),
            total_label: format_price(symbol, cart.total()),
            item_count: cart.item_count(),
            is_empty: cart.is_empty(),
        }
    }
}

pub fn format_price(symbol: &str, amount: u64) -> String {
    format!("{symbol}{amount}")
}

/// Toast text for an event, or `None` when the event is silent.
pub fn notification(event: &CartEvent, symbol: &str) -> Option<String> {
    match event {
        CartEvent::Added { name, .. } => Some(format!("{name} added to cart!")),
        CartEvent::Removed { .. } => Some("Product removed from cart".to_string()),
        CartEvent::CheckoutRejected => Some("Your cart is empty!".to_string()),
        CartEvent::CheckoutStarted => Some("Proceeding to checkout...".to_string()),
        CartEvent::CheckedOut(receipt) => Some(format!(
            "Thank you for your order!\nTotal Items: {}\nTotal Amount: {}",
            receipt.item_count,
            format_price(symbol, receipt.total)
        )),
        CartEvent::QuantityChanged { .. } | CartEvent::Cleared => None,
    }
}
