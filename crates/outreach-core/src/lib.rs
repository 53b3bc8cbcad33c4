pub mod domain;
pub mod dto;
pub mod error;
pub mod filter;
pub mod rules;
pub mod time;

pub use domain::*;
pub use dto::*;
pub use error::{CoreError, RequiredField};
pub use filter::{apply_filter, RecordFilter, StatusFilter};
pub use rules::*;
