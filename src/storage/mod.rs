pub mod text_file;

use crate::{errors::LedgerError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over the place a ledger is persisted to.
pub trait StorageBackend {
    fn save(&self, ledger: &Ledger) -> Result<()>;

    /// Replaces the ledger's purchases with the stored ones, returning how many
    /// were loaded.
    fn load_into(&self, ledger: &mut Ledger) -> Result<usize>;
}

pub use text_file::TextFileStorage;
