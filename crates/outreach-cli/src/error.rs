use anyhow::Error;
use outreach_config::ConfigError;
use outreach_core::time::TimeParseError;
use outreach_core::CoreError;
use outreach_store::error::{StoreError, StoreErrorKind};
use std::process::ExitCode;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn not_found(message: impl Into<String>) -> Error {
    CliError::NotFound(message.into()).into()
}

/// Process exit status of a failed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Failure = 1,
    NotFound = 2,
    InvalidInput = 3,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome as u8)
    }
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    classify(err).into()
}

/// The first cause in the chain with a known type decides; anything else is a plain failure.
pub fn classify(err: &Error) -> Outcome {
    err.chain()
        .find_map(|cause| {
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return Some(match cli_err {
                    CliError::InvalidInput(_) => Outcome::InvalidInput,
                    CliError::NotFound(_) => Outcome::NotFound,
                });
            }
            if let Some(store_err) = cause.downcast_ref::<StoreError>() {
                return Some(store_outcome(store_err));
            }
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return Some(config_outcome(config_err));
            }
            if cause.is::<CoreError>() || cause.is::<TimeParseError>() {
                return Some(Outcome::InvalidInput);
            }
            None
        })
        .unwrap_or(Outcome::Failure)
}

fn store_outcome(err: &StoreError) -> Outcome {
    match err.kind() {
        StoreErrorKind::InvalidDataPath
        | StoreErrorKind::InvalidSnapshot
        | StoreErrorKind::DuplicateId => Outcome::InvalidInput,
        StoreErrorKind::MissingHomeDir
        | StoreErrorKind::Migration
        | StoreErrorKind::Serialize
        | StoreErrorKind::Sql
        | StoreErrorKind::Io => Outcome::Failure,
    }
}

fn config_outcome(err: &ConfigError) -> Outcome {
    match err {
        ConfigError::MissingHomeDir => Outcome::Failure,
        _ => Outcome::InvalidInput,
    }
}
