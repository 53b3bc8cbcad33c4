use crate::domain::{ClientStatus, ContactRecord};
use crate::dto::DashboardSummaryDto;
use crate::rules::clients::unique_client_names;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Statuses without records are absent rather than zero.
pub fn status_counts(records: &[ContactRecord]) -> BTreeMap<ClientStatus, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.status).or_insert(0) += 1;
    }
    counts
}

pub fn today_count(records: &[ContactRecord], today: NaiveDate) -> usize {
    records
        .iter()
        .filter(|record| record.contact_date == today)
        .count()
}

pub fn unique_client_count(records: &[ContactRecord]) -> usize {
    unique_client_names(records).len()
}

pub fn summarize(records: &[ContactRecord], today: NaiveDate) -> DashboardSummaryDto {
    let status_counts = status_counts(records);
    DashboardSummaryDto {
        today: today_count(records, today),
        unique_clients: unique_client_count(records),
        total: records.len(),
        in_progress: status_counts
            .get(&ClientStatus::InProgress)
            .copied()
            .unwrap_or(0),
        status_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::{status_counts, summarize, today_count, unique_client_count};
    use crate::rules::test_support::{record, record_on};
    use crate::ClientStatus;
    use chrono::NaiveDate;

    #[test]
    fn status_counts_omit_empty_statuses() {
        let records = vec![
            record("Ana Silva", ClientStatus::Finished),
            record("Bruno Costa", ClientStatus::Negotiating),
            record("Carla Dias", ClientStatus::Negotiating),
        ];
        let counts = status_counts(&records);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&ClientStatus::Negotiating], 2);
        assert_eq!(counts[&ClientStatus::Finished], 1);
        assert!(!counts.contains_key(&ClientStatus::Terminated));
    }

    #[test]
    fn today_count_compares_calendar_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let records = vec![
            record_on("Ana Silva", "2024-03-15"),
            record_on("Bruno Costa", "2024-03-14"),
        ];
        assert_eq!(today_count(&records, today), 1);
    }

    #[test]
    fn unique_clients_are_counted_by_exact_name() {
        let records = vec![
            record("Ana Silva", ClientStatus::Finished),
            record("Ana Silva", ClientStatus::InProgress),
            record("Bruno Costa", ClientStatus::Negotiating),
        ];
        assert_eq!(unique_client_count(&records), 2);
    }

    #[test]
    fn summary_reports_dashboard_figures() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let records = vec![
            record_on("Ana Silva", "2024-03-15"),
            record_on("Ana Silva", "2024-03-10"),
            record("Bruno Costa", ClientStatus::Finished),
        ];
        let summary = summarize(&records, today);
        assert_eq!(summary.today, 1);
        assert_eq!(summary.unique_clients, 2);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.in_progress, 2);
    }

    #[test]
    fn summary_of_empty_snapshot_is_zero() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let summary = summarize(&[], today);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.in_progress, 0);
        assert!(summary.status_counts.is_empty());
    }
}
