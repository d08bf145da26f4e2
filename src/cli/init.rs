use std::path::PathBuf;

use crate::error::Result;
use crate::settings::{load_settings, save_settings};

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(dir) = data_dir {
        settings.data_dir = dir;
    }

    let dir = PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&dir)?;
    save_settings(&settings)?;

    println!("bankgen is set up.");
    println!("  Data dir: {}", dir.display());
    println!();
    println!("Next: `bankgen generate` to build a dataset.");
    Ok(())
}
