pub mod ids;
pub mod method;
pub mod record;
pub mod status;

pub use ids::RecordId;
pub use method::ContactMethod;
pub use record::{ContactRecord, ContactRecordPatch, NewContactRecord, DEFAULT_SLOT};
pub use status::ClientStatus;
