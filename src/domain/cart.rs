//! Cart and line item types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_id!(LineItemId);
define_id!(ProductId);

impl LineItemId {
    /// Fresh random id for a new line item.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// The product a caller wants to put in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRef {
    /// Stable catalogue key. When absent the display name is the merge key.
    pub product_id: Option<ProductId>,
    pub name: String,
    pub unit_price: u64,
    pub image_ref: String,
}

impl ProductRef {
    pub fn new(name: impl Into<String>, unit_price: u64, image_ref: impl Into<String>) -> Self {
        Self {
            product_id: None,
            name: name.into(),
            unit_price,
            image_ref: image_ref.into(),
        }
    }

    pub fn with_product_id(mut self, product_id: impl Into<ProductId>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }
}

/// One product entry in the cart. `quantity` is at least 1 while present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub id: LineItemId,
    pub product_id: Option<ProductId>,
    pub name: String,
    pub unit_price: u64,
    pub image_ref: String,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    fn from_product(product: ProductRef) -> Self {
        Self {
            id: LineItemId::generate(),
            product_id: product.product_id,
            name: product.name,
            unit_price: product.unit_price,
            image_ref: product.image_ref,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }

    /// Product ids win when both sides carry one; otherwise names decide.
    fn is_same_product(&self, product_id: Option<&ProductId>, name: &str) -> bool {
        match (self.product_id.as_ref(), product_id) {
            (Some(ours), Some(theirs)) => ours == theirs,
            _ => self.name == name,
        }
    }
}

/// Result of applying a quantity delta to a line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityChange {
    Updated { quantity: u32 },
    Removed(LineItem),
    NotFound,
}

/// Ordered sequence of line items, unique by product key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from previously stored items.
    ///
    /// Items with a zero quantity are dropped and repeated products are
    /// folded into their first occurrence.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match cart
                .items
                .iter_mut()
                .find(|i| i.is_same_product(item.product_id.as_ref(), &item.name))
            {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Add one unit of `product`, merging into an existing line when the
    /// product is already present. Returns the affected line.
    pub fn add(&mut self, product: ProductRef) -> &LineItem {
        let position = self
            .items
            .iter()
            .position(|i| i.is_same_product(product.product_id.as_ref(), &product.name));

        let index = match position {
            Some(index) => {
                let existing = &mut self.items[index];
                existing.quantity = existing.quantity.saturating_add(1);
                index
            }
            None => {
                self.items.push(LineItem::from_product(product));
                self.items.len() - 1
            }
        };
        &self.items[index]
    }

    /// Apply `delta` to the line's quantity. A result of zero or less removes
    /// the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &LineItemId, delta: i64) -> QuantityChange {
        let Some(index) = self.items.iter().position(|i| &i.id == id) else {
            return QuantityChange::NotFound;
        };

        let next = i64::from(self.items[index].quantity).saturating_add(delta);
        if next <= 0 {
            return QuantityChange::Removed(self.items.remove(index));
        }

        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        self.items[index].quantity = quantity;
        QuantityChange::Updated { quantity }
    }

    pub fn remove(&mut self, id: &LineItemId) -> Option<LineItem> {
        let index = self.items.iter().position(|i| &i.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `unit_price * quantity` over all lines.
    pub fn total(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, i| acc.saturating_add(i.line_total()))
    }

    /// Sum of quantities, as opposed to the number of lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
