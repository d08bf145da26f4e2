use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::models::{Transaction, TransactionDateGroup};

/// Label for one calendar date relative to `today`: `TODAY`, `YESTERDAY`,
/// or an uppercased formatted date like `JAN 5, 2025`.
fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "TODAY".to_string()
    } else if date == today - Duration::days(1) {
        "YESTERDAY".to_string()
    } else {
        date.format("%b %-d, %Y").to_string().to_uppercase()
    }
}

/// Partition transactions into per-calendar-date groups. Two transactions on
/// the same date always share a group regardless of time of day. Groups are
/// ordered descending by date (so `TODAY` first, then `YESTERDAY`, then
/// dated groups newest-first); within a group, transactions are newest-first
/// by timestamp. Purely derived: grouping the same list twice under the same
/// `today` yields identical output.
pub fn group_by_date(txns: &[Transaction], today: NaiveDate) -> Vec<TransactionDateGroup> {
    let mut by_date: BTreeMap<NaiveDate, Vec<Transaction>> = BTreeMap::new();
    for txn in txns {
        by_date.entry(txn.timestamp.date()).or_default().push(txn.clone());
    }

    by_date
        .into_iter()
        .rev()
        .map(|(date, mut group)| {
            group.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            TransactionDateGroup {
                label: date_label(date, today),
                date,
                transactions: group,
            }
        })
        .collect()
}
