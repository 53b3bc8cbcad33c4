use crate::domain::ContactRecord;
use crate::filter::ast::RecordFilter;

pub fn matches(record: &ContactRecord, filter: &RecordFilter) -> bool {
    if !filter.status.accepts(record.status) {
        return false;
    }
    let needle = filter.query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [&record.client_name, &record.enterprise, &record.unit]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn apply_filter<'a>(
    records: &'a [ContactRecord],
    filter: &RecordFilter,
) -> Vec<&'a ContactRecord> {
    records
        .iter()
        .filter(|record| matches(record, filter))
        .collect()
}
