use chrono::Local;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::assembler;
use crate::error::Result;
use crate::settings::{blob_path, load_settings};
use crate::store::{BlobStore, JsonFileStore};

pub fn run(seed: Option<u64>, months: Option<u32>, card_months: Option<u32>, force: bool) -> Result<()> {
    let settings = load_settings();
    let store = JsonFileStore::new(blob_path());

    if store.exists() && !force {
        println!("A cached dataset already exists at {}.", store.path().display());
        println!("Re-run with --force to replace it, or `bankgen clear` first.");
        return Ok(());
    }

    let months = months.unwrap_or(settings.default_months);
    let card_months = card_months.unwrap_or(settings.default_card_months);
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);
    let now = Local::now().naive_local();

    let data = assembler::generate(months, card_months, now, &mut rng);
    store.save(&data)?;

    println!("{}", "Dataset generated.".green().bold());
    println!("  Seed:         {seed}");
    println!("  Horizon:      {months} months (accounts), {card_months} months (cards)");
    println!("  Users:        {}", data.users.len());
    println!("  Accounts:     {}", data.accounts.len());
    println!("  Cards:        {}", data.credit_cards.len());
    println!("  Loans:        {}", data.loans.len());
    println!("  Transactions: {}", data.transaction_count());
    println!("  Cached at:    {}", store.path().display());
    println!();
    println!("Try these next:");
    println!("  bankgen users");
    println!("  bankgen accounts");
    println!("  bankgen transactions --account acc1");
    println!("  bankgen export --format csv");
    Ok(())
}
