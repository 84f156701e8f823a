use super::errors::CartError;
use super::events::CartEvent;

/// A single named durable slot holding the serialized cart.
///
/// Written after every mutation, read once when the store hydrates. The store
/// lives on one event loop, so slots need not be thread-safe.
pub trait CartSlot {
    fn read(&self) -> Result<Option<String>, CartError>;
    fn write(&self, blob: &str) -> Result<(), CartError>;
}

/// Receives a notification after every cart operation.
pub trait CartObserver {
    fn notify(&self, event: &CartEvent);
}

impl<F> CartObserver for F
where
    F: Fn(&CartEvent),
{
    fn notify(&self, event: &CartEvent) {
        self(event)
    }
}

impl<S: CartSlot> CartSlot for std::sync::Arc<S> {
    fn read(&self) -> Result<Option<String>, CartError> {
        (**self).read()
    }

    fn write(&self, blob: &str) -> Result<(), CartError> {
        (**self).write(blob)
    }
}
