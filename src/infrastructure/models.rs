use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::cart::{Cart, LineItem, LineItemId, ProductId};
use crate::domain::errors::CartError;

/// Line item as it sits in the storage slot.
///
/// Field names match the blob written by the storefront script, so carts
/// saved before this crate existed still hydrate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLineItem {
    pub id: StoredId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    pub name: String,
    pub price: u64,
    pub image: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

/// Older blobs carry millisecond timestamps as numeric ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredId {
    Text(String),
    Number(u64),
}

impl From<StoredId> for LineItemId {
    fn from(id: StoredId) -> Self {
        match id {
            StoredId::Text(s) => LineItemId::new(s),
            StoredId::Number(n) => LineItemId::new(n.to_string()),
        }
    }
}

impl From<&LineItem> for StoredLineItem {
    fn from(item: &LineItem) -> Self {
        Self {
            id: StoredId::Text(item.id.as_str().to_string()),
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            price: item.unit_price,
            image: item.image_ref.clone(),
            quantity: item.quantity,
            added_at: Some(item.added_at),
        }
    }
}

impl From<StoredLineItem> for LineItem {
    fn from(row: StoredLineItem) -> Self {
        Self {
            id: row.id.into(),
            product_id: row.product_id,
            name: row.name,
            unit_price: row.price,
            image_ref: row.image,
            quantity: row.quantity,
            added_at: row.added_at.unwrap_or_else(Utc::now),
        }
    }
}

pub fn encode_cart(cart: &Cart) -> Result<String, CartError> {
    let rows: Vec<StoredLineItem> = cart.items().iter().map(StoredLineItem::from).collect();
    serde_json::to_string(&rows).map_err(CartError::Encode)
}

pub fn decode_cart(blob: &str) -> Result<Cart, CartError> {
    let rows: Vec<StoredLineItem> =
        serde_json::from_str(blob).map_err(CartError::MalformedState)?;
    Ok(Cart::from_items(rows.into_iter().map(LineItem::from)))
}
