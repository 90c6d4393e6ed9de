use std::{fs, path::PathBuf};

use crate::{
    config::{tmp_path, write_file},
    errors::LedgerError,
    ledger::Ledger,
};

use super::{Result, StorageBackend};

/// Stores the ledger in a single flat text file.
#[derive(Debug, Clone)]
pub struct TextFileStorage {
    path: PathBuf,
}

impl TextFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageBackend for TextFileStorage {
    /// Stages the document in a sibling temp file and renames it over the target.
    fn save(&self, ledger: &Ledger) -> Result<()> {
        let text = ledger.serialize_to_text();
        let tmp = tmp_path(&self.path);
        if let Err(err) = write_file(&tmp, &text) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        if let Err(err) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }
        tracing::debug!(path = %self.path.display(), purchases = ledger.len(), "Ledger saved");
        Ok(())
    }

    fn load_into(&self, ledger: &mut Ledger) -> Result<usize> {
        if !self.path.exists() {
            return Err(LedgerError::NotFound(self.path.clone()));
        }
        let text = fs::read_to_string(&self.path)?;
        ledger.deserialize_from_text(&text)?;
        tracing::debug!(path = %self.path.display(), purchases = ledger.len(), "Ledger loaded");
        Ok(ledger.len())
    }
}
