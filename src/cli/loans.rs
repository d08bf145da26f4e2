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
    table.set_header(vec!["ID", "User", "Type", "Balance", "Original", "Rate", "Monthly", "Paid", "Next Due"]);
    for loan in &data.loans {
        if user.as_ref().is_some_and(|id| id != &loan.user_id) {
            continue;
        }
        table.add_row(vec![
            Cell::new(&loan.id),
            Cell::new(&loan.user_id),
            Cell::new(loan.loan_type.label()),
            Cell::new(money(loan.current_balance)),
            Cell::new(money(loan.original_amount)),
            Cell::new(percent(loan.interest_rate)),
            Cell::new(money(loan.monthly_payment)),
            Cell::new(format!("{}/{}", loan.payments_made, loan.payments_total)),
            Cell::new(loan.next_payment_due.format("%Y-%m-%d")),
        ]);
    }
    println!("Loans\n{table}");
    Ok(())
}
