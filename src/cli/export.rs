use std::io::Write;

use crate::cli::load_dataset;
use crate::error::{BankgenError, Result};
use crate::models::Dataset;

pub fn run(output: Option<String>, format: &str) -> Result<()> {
    let data = load_dataset()?;

    let bytes = match format {
        "json" => {
            let mut json = serde_json::to_string_pretty(&data)?;
            json.push('\n');
            json.into_bytes()
        }
        "csv" => transactions_csv(&data)?,
        other => return Err(BankgenError::UnknownFormat(other.to_string())),
    };

    match output {
        Some(path) => {
            std::fs::write(&path, bytes)?;
            println!("Exported to {path}.");
        }
        None => std::io::stdout().write_all(&bytes)?,
    }
    Ok(())
}

/// Flatten every history into one CSV, one row per transaction.
fn transactions_csv(data: &Dataset) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "user_id", "account_id", "transaction_id", "timestamp", "merchant", "category",
        "amount", "direction", "status",
    ])?;

    for (user_id, by_entity) in &data.transactions {
        for (entity_id, txns) in by_entity {
            for txn in txns {
                let timestamp = txn.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
                let amount = format!("{:.2}", txn.amount);
                writer.write_record([
                    user_id.as_str(),
                    entity_id.as_str(),
                    txn.id.as_str(),
                    timestamp.as_str(),
                    txn.merchant.as_str(),
                    txn.category.as_str(),
                    amount.as_str(),
                    if txn.incoming { "incoming" } else { "outgoing" },
                    txn.status.as_str(),
                ])?;
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::assembler;

    #[test]
    fn test_csv_has_one_row_per_transaction() {
        let now = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let data = assembler::generate(2, 1, now, &mut rng);

        let bytes = transactions_csv(&data).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let rows = text.lines().count();
        assert_eq!(rows, data.transaction_count() + 1, "header plus one row per txn");
        assert!(text.lines().next().unwrap().starts_with("user_id,account_id"));
    }
}
