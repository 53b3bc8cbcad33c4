use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Enterprise,
    ClientName,
    Unit,
}

impl RequiredField {
    pub fn as_str(self) -> &'static str {
        match self {
            RequiredField::Enterprise => "enterprise",
            RequiredField::ClientName => "client name",
            RequiredField::Unit => "unit",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("required fields are empty: {}", join_fields(.0))]
    MissingFields(Vec<RequiredField>),
    #[error("invalid status: {0}")]
    InvalidStatus(String),
    #[error("invalid status filter: {0}")]
    InvalidStatusFilter(String),
    #[error("invalid contact method: {0}")]
    InvalidContactMethod(String),
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
