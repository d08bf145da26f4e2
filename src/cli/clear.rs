use crate::error::Result;
use crate::settings::blob_path;
use crate::store::{BlobStore, JsonFileStore};

pub fn run() -> Result<()> {
    let store = JsonFileStore::new(blob_path());
    if store.exists() {
        store.clear()?;
        println!("Cached dataset removed.");
    } else {
        println!("Nothing to clear.");
    }
    Ok(())
}
