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
    table.set_header(vec!["ID", "User", "Number", "Balance", "Limit", "Due", "Min Payment", "Rewards"]);
    for card in &data.credit_cards {
        if user.as_ref().is_some_and(|id| id != &card.user_id) {
            continue;
        }
        let rewards = match card.rewards_type.as_str() {
            "points" => format!("{:.0} pts ({})", card.rewards_balance, percent(card.rewards_rate)),
            _ => format!("{} ({})", money(card.rewards_balance), percent(card.rewards_rate)),
        };
        table.add_row(vec![
            Cell::new(&card.id),
            Cell::new(&card.user_id),
            Cell::new(&card.card_number),
            Cell::new(money(card.current_balance)),
            Cell::new(money(card.credit_limit)),
            Cell::new(card.due_date.format("%Y-%m-%d")),
            Cell::new(money(card.minimum_payment)),
            Cell::new(rewards),
        ]);
    }
    println!("Credit Cards\n{table}");
    Ok(())
}
