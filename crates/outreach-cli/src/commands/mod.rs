use anyhow::Result;
use outreach_config::AppConfig;
use outreach_store::{RecordStore, SqliteBackend};
use serde::Serialize;
use std::io::{self, Write};

pub mod clients;
pub mod completions;
pub mod records;
pub mod stats;
pub mod transfer;

pub struct Context<'a> {
    pub store: &'a RecordStore<SqliteBackend>,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
