use comfy_table::{Cell, Table};

use crate::cli::load_dataset;
use crate::error::Result;
use crate::fmt::money;

pub fn run() -> Result<()> {
    let data = load_dataset()?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Occupation", "Income", "Member Since"]);
    for user in &data.users {
        table.add_row(vec![
            Cell::new(&user.id),
            Cell::new(&user.name),
            Cell::new(&user.occupation),
            Cell::new(money(user.annual_income)),
            Cell::new(user.member_since.format("%Y-%m-%d")),
        ]);
    }
    println!("Users\n{table}");
    Ok(())
}
