pub mod clients;
pub mod stamps;
pub mod stats;
pub mod validation;

pub use clients::{client_history, same_client, unique_client_names};
pub use stamps::{next_updated_at, stamp};
pub use stats::{status_counts, summarize, today_count, unique_client_count};
pub use validation::ContactDraft;

#[cfg(test)]
pub(crate) mod test_support;
