//! Ledger domain models and the persisted text codec.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod purchase;
pub mod text_format;

pub use category::Category;
pub use ledger::{Ledger, Listing};
pub use purchase::Purchase;
