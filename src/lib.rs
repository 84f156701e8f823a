pub mod application;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod view;

pub use application::{CartStore, HydrateOutcome};
pub use config::CartConfig;
pub use domain::cart::{Cart, LineItem, LineItemId, ProductId, ProductRef};
pub use domain::errors::CartError;
pub use domain::events::{CartEvent, Receipt};
pub use domain::ports::{CartObserver, CartSlot};
pub use infrastructure::{FileSlot, MemorySlot};

/// Open the file-backed store described by `config` and hydrate it.
///
/// Hydration never fails; the outcome says whether anything was restored.
pub fn open_file_store(config: &CartConfig) -> (CartStore<FileSlot>, HydrateOutcome) {
    let slot = FileSlot::new(&config.storage_dir, &config.storage_key);
    log::debug!("Using cart slot at {}", slot.path().display());
    CartStore::open(slot)
}
