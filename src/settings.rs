use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{BankgenError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub data_dir: String,
    /// Deposit-account history horizon used when `--months` is not given.
    #[serde(default = "default_months")]
    pub default_months: u32,
    /// Card history horizon used when `--card-months` is not given.
    #[serde(default = "default_card_months")]
    pub default_card_months: u32,
}

fn default_months() -> u32 {
    6
}

fn default_card_months() -> u32 {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().to_string_lossy().to_string(),
            default_months: default_months(),
            default_card_months: default_card_months(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("bankgen")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".local")
        .join("share")
        .join("bankgen")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| BankgenError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

/// Path of the cached dataset blob inside the configured data directory.
/// Overridable via BANKGEN_DATA_DIR, mainly for tests.
pub fn blob_path() -> PathBuf {
    let dir = std::env::var("BANKGEN_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(&load_settings().data_dir));
    dir.join("bankgen.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            data_dir: "/tmp/test".to_string(),
            default_months: 9,
            default_card_months: 2,
        };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        std::fs::write(&path, &json).unwrap();
        let loaded: Settings =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.data_dir, "/tmp/test");
        assert_eq!(loaded.default_months, 9);
        assert_eq!(loaded.default_card_months, 2);
    }

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.default_months, 6);
        assert_eq!(s.default_card_months, 3);
        assert!(!s.data_dir.is_empty());
    }

    #[test]
    fn test_partial_settings_merge_with_defaults() {
        let json = r#"{"data_dir": "/tmp/test"}"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.default_months, 6);
        assert_eq!(s.default_card_months, 3);
    }
}
