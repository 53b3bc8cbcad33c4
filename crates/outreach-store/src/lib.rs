pub mod backend;
pub mod error;
pub mod migrate;
pub mod paths;
pub mod records;
pub mod sqlite;

pub use backend::{MemoryBackend, SlotBackend};
pub use outreach_core::DEFAULT_SLOT;
pub use records::RecordStore;
pub use sqlite::SqliteBackend;
