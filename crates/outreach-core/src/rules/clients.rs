use crate::domain::ContactRecord;
use std::collections::HashSet;

/// Client identity is the name itself, compared case-insensitively and without trimming.
pub fn same_client(left: &str, right: &str) -> bool {
    left == right || left.to_lowercase() == right.to_lowercase()
}

pub fn client_history<'a>(records: &'a [ContactRecord], name: &str) -> Vec<&'a ContactRecord> {
    records
        .iter()
        .filter(|record| record.is_client(name))
        .collect()
}

/// Distinct names exactly as entered, in first-seen order.
pub fn unique_client_names(records: &[ContactRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for record in records {
        if seen.insert(record.client_name.as_str()) {
            names.push(record.client_name.clone());
        }
    }
    names
}
