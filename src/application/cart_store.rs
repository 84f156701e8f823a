use crate::domain::cart::{Cart, LineItem, LineItemId, ProductRef, QuantityChange};
use crate::domain::errors::CartError;
use crate::domain::events::{CartEvent, Receipt};
use crate::domain::ports::{CartObserver, CartSlot};
use crate::infrastructure::models::{decode_cart, encode_cart};

/// What `hydrate` found in the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrateOutcome {
    /// Nothing was stored.
    Fresh,
    Restored { line_items: usize },
    /// Stored state was malformed and the cart starts empty.
    Discarded,
    /// The slot could not be read and the cart starts empty.
    Unavailable,
}

/// Session-owned cart that writes itself to `slot` after every mutation.
///
/// Mutations never fail: if the slot rejects a write the cart stays correct
/// in memory and the next mutation writes the full state again.
pub struct CartStore<S> {
    slot: S,
    cart: Cart,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<S: CartSlot> CartStore<S> {
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            cart: Cart::new(),
            observers: Vec::new(),
        }
    }

    /// Create a store and load whatever the slot holds.
    pub fn open(slot: S) -> (Self, HydrateOutcome) {
        let mut store = Self::new(slot);
        let outcome = store.hydrate();
        (store, outcome)
    }

    /// Replace the in-memory cart with the persisted one.
    pub fn hydrate(&mut self) -> HydrateOutcome {
        let blob = match self.slot.read() {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                self.cart = Cart::new();
                return HydrateOutcome::Fresh;
            }
            Err(e) => {
                log::warn!("Cart storage unreadable, starting empty: {}", e);
                self.cart = Cart::new();
                return HydrateOutcome::Unavailable;
            }
        };

        match decode_cart(&blob) {
            Ok(cart) => {
                log::debug!("Hydrated cart with {} line items", cart.len());
                let line_items = cart.len();
                self.cart = cart;
                HydrateOutcome::Restored { line_items }
            }
            Err(e) => {
                log::warn!("Discarding persisted cart: {}", e);
                self.cart = Cart::new();
                HydrateOutcome::Discarded
            }
        }
    }

    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Add one unit of a product keyed by its name. Returns the resulting
    /// quantity for that product.
    pub fn add(&mut self, name: &str, unit_price: u64, image_ref: &str) -> u32 {
        self.add_product(ProductRef::new(name, unit_price, image_ref))
    }

    /// Add one unit of `product`, keyed by its product id when it has one.
    pub fn add_product(&mut self, product: ProductRef) -> u32 {
        let line = self.cart.add(product);
        let event = CartEvent::Added {
            id: line.id.clone(),
            name: line.name.clone(),
            quantity: line.quantity,
        };
        let quantity = line.quantity;
        self.sync();
        self.emit(&event);
        quantity
    }

    /// Apply `delta` to a line's quantity, removing the line when the result
    /// drops to zero or below. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &LineItemId, delta: i64) {
        match self.cart.update_quantity(id, delta) {
            QuantityChange::Updated { quantity } => {
                self.sync();
                self.emit(&CartEvent::QuantityChanged {
                    id: id.clone(),
                    quantity,
                });
            }
            QuantityChange::Removed(item) => {
                self.sync();
                self.emit_removed(item);
            }
            QuantityChange::NotFound => {
                log::debug!("Ignoring quantity change for unknown line {}", id);
            }
        }
    }

    /// Remove a line if present. Persists either way.
    pub fn remove(&mut self, id: &LineItemId) {
        let removed = self.cart.remove(id);
        self.sync();
        if let Some(item) = removed {
            self.emit_removed(item);
        }
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        self.sync();
        self.emit(&CartEvent::Cleared);
    }

    /// Settle the cart: returns the receipt and empties the cart, or `None`
    /// when there is nothing to check out.
    pub fn checkout(&mut self) -> Option<Receipt> {
        if self.cart.is_empty() {
            self.emit(&CartEvent::CheckoutRejected);
            return None;
        }

        self.emit(&CartEvent::CheckoutStarted);
        let receipt = Receipt {
            item_count: self.cart.item_count(),
            total: self.cart.total(),
            placed_at: chrono::Utc::now(),
        };
        log::info!(
            "Checkout: {} items, total {}",
            receipt.item_count,
            receipt.total
        );
        self.cart.clear();
        self.sync();
        self.emit(&CartEvent::CheckedOut(receipt.clone()));
        Some(receipt)
    }

    pub fn total(&self) -> u64 {
        self.cart.total()
    }

    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn serialize(&self) -> Result<String, CartError> {
        encode_cart(&self.cart)
    }

    /// Write the current cart to the slot, reporting failures.
    pub fn persist(&self) -> Result<(), CartError> {
        let blob = self.serialize()?;
        self.slot.write(&blob)
    }

    fn sync(&self) {
        if let Err(e) = self.persist() {
            log::warn!("Cart kept in memory only, persist failed: {}", e);
        }
    }

    fn emit_removed(&self, item: LineItem) {
        self.emit(&CartEvent::Removed {
            id: item.id,
            name: item.name,
        });
    }

    fn emit(&self, event: &CartEvent) {
        for observer in &self.observers {
            observer.notify(event);
        }
    }
}
