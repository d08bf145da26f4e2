pub mod accounts;
pub mod cards;
pub mod clear;
pub mod export;
pub mod generate;
pub mod init;
pub mod loans;
pub mod status;
pub mod transactions;
pub mod users;

use clap::{Parser, Subcommand};

use crate::error::{BankgenError, Result};
use crate::models::Dataset;
use crate::settings::blob_path;
use crate::store::{BlobStore, JsonFileStore};

/// Open the configured store and load the cached dataset, or fail with a
/// pointer at `generate` if nothing has been generated yet.
pub(crate) fn load_dataset() -> Result<Dataset> {
    let store = JsonFileStore::new(blob_path());
    store.load()?.ok_or(BankgenError::NoData)
}

#[derive(Parser)]
#[command(name = "bankgen", about = "Synthetic consumer-banking dataset generator for demos and prototypes.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up bankgen: choose a data directory for the cached dataset.
    Init {
        /// Path for generated data (default: ~/.local/share/bankgen)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Generate a fresh dataset and cache it.
    Generate {
        /// RNG seed; omit for a random seed (printed so the run can be replayed)
        #[arg(long)]
        seed: Option<u64>,
        /// Deposit-account history horizon in months
        #[arg(long)]
        months: Option<u32>,
        /// Card history horizon in months
        #[arg(long = "card-months")]
        card_months: Option<u32>,
        /// Overwrite an existing cached dataset
        #[arg(long)]
        force: bool,
    },
    /// List generated users.
    Users,
    /// List deposit accounts.
    Accounts {
        /// Restrict to one user id
        #[arg(long)]
        user: Option<String>,
    },
    /// List credit cards.
    Cards {
        /// Restrict to one user id
        #[arg(long)]
        user: Option<String>,
    },
    /// List loans.
    Loans {
        /// Restrict to one user id
        #[arg(long)]
        user: Option<String>,
    },
    /// Show one account's or card's history, grouped by date.
    Transactions {
        /// Account or card id
        #[arg(long)]
        account: String,
        /// Show at most this many transactions
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Export the cached dataset.
    Export {
        /// Output path (default: stdout)
        #[arg(long)]
        output: Option<String>,
        /// json (full graph) or csv (flat transaction list)
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// Show settings, cache location, and entity counts.
    Status,
    /// Drop the cached dataset.
    Clear,
}
