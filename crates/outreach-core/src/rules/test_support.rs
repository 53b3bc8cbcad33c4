use crate::domain::{ClientStatus, ContactMethod, ContactRecord, NewContactRecord, RecordId};
use chrono::{NaiveDate, TimeZone, Utc};

pub fn record(client_name: &str, status: ClientStatus) -> ContactRecord {
    build(client_name, "2024-03-01", status)
}

pub fn record_on(client_name: &str, date: &str) -> ContactRecord {
    build(client_name, date, ClientStatus::InProgress)
}

pub fn build(client_name: &str, date: &str, status: ClientStatus) -> ContactRecord {
    NewContactRecord {
        enterprise: "Bresser".to_string(),
        client_name: client_name.to_string(),
        unit: "2308".to_string(),
        contact_method: ContactMethod::Phone,
        contact_info: None,
        contact_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        observations: String::new(),
        status,
    }
    .into_record(
        RecordId::new(),
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    )
}
