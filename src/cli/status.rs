use crate::error::Result;
use crate::fmt::format_bytes;
use crate::settings::{blob_path, load_settings};
use crate::store::{BlobStore, JsonFileStore};

pub fn run() -> Result<()> {
    let settings = load_settings();
    let store = JsonFileStore::new(blob_path());

    println!("Data dir:   {}", settings.data_dir);
    println!("Cache:      {}", store.path().display());
    println!("Horizons:   {} months (accounts), {} months (cards)", settings.default_months, settings.default_card_months);

    if let Some(data) = store.load()? {
        let size = std::fs::metadata(store.path())?.len();
        println!("Blob size:  {}", format_bytes(size));
        println!();
        println!("Users:         {}", data.users.len());
        println!("Accounts:      {}", data.accounts.len());
        println!("Cards:         {}", data.credit_cards.len());
        println!("Loans:         {}", data.loans.len());
        println!("Transactions:  {}", data.transaction_count());
    } else {
        println!();
        println!("No cached dataset. Run `bankgen generate` to build one.");
    }

    Ok(())
}
