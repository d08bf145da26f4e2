use chrono::Local;
use colored::Colorize;

use crate::cli::load_dataset;
use crate::error::{BankgenError, Result};
use crate::fmt::signed_money;
use crate::grouping::group_by_date;

pub fn run(account: &str, limit: Option<usize>) -> Result<()> {
    let data = load_dataset()?;
    let txns = data
        .transactions_for(account)
        .ok_or_else(|| BankgenError::UnknownAccount(account.to_string()))?;

    if txns.is_empty() {
        println!("No transactions for {account}.");
        return Ok(());
    }

    // Histories are cached newest-first, so a limit keeps the most recent.
    let visible = match limit {
        Some(n) => &txns[..n.min(txns.len())],
        None => &txns[..],
    };

    // The grouped view is derived, so recompute against the real clock
    // rather than trusting labels cached at generation time.
    let today = Local::now().date_naive();
    for group in group_by_date(visible, today) {
        println!("{}", group.label.bold());
        for txn in &group.transactions {
            let amount = if txn.incoming {
                signed_money(txn.amount, true).green().to_string()
            } else {
                signed_money(txn.amount, false)
            };
            let detail = txn
                .message
                .as_deref()
                .or(txn.location.as_deref())
                .unwrap_or(&txn.category);
            println!(
                "  {:<28} {:>12}  {:<20} {}",
                txn.merchant,
                amount,
                detail,
                txn.timestamp.format("%H:%M"),
            );
        }
        println!();
    }
    Ok(())
}
