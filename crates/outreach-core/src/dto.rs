use crate::domain::{ClientStatus, ContactRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummaryDto {
    pub today: usize,
    pub unique_clients: usize,
    pub total: usize,
    pub in_progress: usize,
    pub status_counts: BTreeMap<ClientStatus, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientHistoryDto {
    pub client_name: String,
    pub total: usize,
    pub records: Vec<ContactRecord>,
}

impl ClientHistoryDto {
    pub fn new(client_name: impl Into<String>, records: Vec<ContactRecord>) -> Self {
        Self {
            client_name: client_name.into(),
            total: records.len(),
            records,
        }
    }
}
