use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankgenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Unknown account or card: {0}")]
    UnknownAccount(String),

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("No cached dataset. Run `bankgen generate` first.")]
    NoData,

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, BankgenError>;
