use comfy_table::{Cell, Table};

use crate::cli::load_dataset;
use crate::error::{BankgenError, Result};
use crate::fmt::{money, percent};

pub fn run(user: Option<String>) -> Result<()> {
    let data = load_dataset()?;

    if let Some(id) = &user {
        if !data.users.iter().any(|u| &u.id == id) {
            return Err(BankgenError::UnknownUser(id.clone()));
        }
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "User", "Type", "Balance", "Available", "APY", "Matures"]);
    for account in &data.accounts {
        if user.as_ref().is_some_and(|id| id != &account.user_id) {
            continue;
        }
        table.add_row(vec![
            Cell::new(&account.id),
            Cell::new(&account.user_id),
            Cell::new(account.account_type.label()),
            Cell::new(money(account.balance)),
            Cell::new(money(account.available_balance)),
            Cell::new(percent(account.interest_rate)),
            Cell::new(
                account
                    .maturity_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            ),
        ]);
    }
    println!("Accounts\n{table}");
    Ok(())
}
