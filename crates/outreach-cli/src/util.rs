use crate::error::invalid_input;
use anyhow::Result;
use chrono::{DateTime, Utc};
use outreach_core::time::{format_date, format_timestamp_datetime};
use outreach_core::{ContactRecord, RecordId};
use std::str::FromStr;

pub fn now_utc() -> DateTime<Utc> {
    outreach_core::time::now_utc()
}

pub fn parse_record_id(raw: &str) -> Result<RecordId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_input("record id cannot be empty"));
    }
    RecordId::from_str(trimmed)
        .map_err(|_| invalid_input(format!("invalid record id: {}", trimmed)))
}

pub fn method_cell(record: &ContactRecord) -> String {
    match record.contact_info.as_deref().filter(|info| !info.is_empty()) {
        Some(info) => format!("{} ({})", record.contact_method.label(), info),
        None => record.contact_method.label().to_string(),
    }
}

pub fn record_line(record: &ContactRecord) -> String {
    let observations = if record.observations.trim().is_empty() {
        "-"
    } else {
        record.observations.as_str()
    };
    format!(
        "{}  {}  {}  {}  {}  [{}]  {}  {}",
        format_date(record.contact_date),
        record.enterprise,
        record.client_name,
        record.unit,
        method_cell(record),
        record.status.label(),
        observations,
        record.id
    )
}

pub fn print_record_detail(record: &ContactRecord) {
    println!("id: {}", record.id);
    println!("enterprise: {}", record.enterprise);
    println!("client: {}", record.client_name);
    println!("unit: {}", record.unit);
    println!("method: {}", method_cell(record));
    println!("date: {}", format_date(record.contact_date));
    println!("status: {}", record.status.label());
    if !record.observations.is_empty() {
        println!("observations: {}", record.observations);
    }
    println!("created_at: {}", format_timestamp_datetime(record.created_at));
    println!("updated_at: {}", format_timestamp_datetime(record.updated_at));
}
