pub mod cart_store;

pub use cart_store::{CartStore, HydrateOutcome};
