mod ast;
mod matcher;

pub use ast::{RecordFilter, StatusFilter};
pub use matcher::{apply_filter, matches};
