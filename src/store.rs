use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Dataset;

/// Where a generated dataset blob lives between runs. The generator never
/// touches this; the CLI owns the store and decides when to read or write.
pub trait BlobStore {
    fn load(&self) -> Result<Option<Dataset>>;
    fn save(&self, data: &Dataset) -> Result<()>;
    fn clear(&self) -> Result<()>;
    fn exists(&self) -> bool;
}

/// JSON blob on disk, one file per dataset. The file carries the exact
/// output contract shape, so it doubles as an export format.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlobStore for JsonFileStore {
    fn load(&self) -> Result<Option<Dataset>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, data: &Dataset) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(data)?;
        std::fs::write(&self.path, format!("{json}\n"))?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::assembler;

    fn small_dataset() -> Dataset {
        let now = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assembler::generate(1, 1, now, &mut rng)
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("bankgen.json"));
        let data = small_dataset();

        assert!(!store.exists());
        store.save(&data).unwrap();
        assert!(store.exists());

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.users.len(), data.users.len());
        assert_eq!(loaded.transaction_count(), data.transaction_count());
    }

    #[test]
    fn test_load_missing_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_clear_removes_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("bankgen.json"));
        store.save(&small_dataset()).unwrap();
        store.clear().unwrap();
        assert!(!store.exists());
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("deep").join("nested").join("data.json"));
        store.save(&small_dataset()).unwrap();
        assert!(store.exists());
    }
}
