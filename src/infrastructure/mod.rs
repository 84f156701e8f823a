pub mod file_slot;
pub mod memory_slot;
pub mod models;

pub use file_slot::FileSlot;
pub use memory_slot::MemorySlot;
