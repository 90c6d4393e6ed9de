//! Interactive presentation layer: menus, line input, styled output and the
//! session loop that drives the ledger.

mod handlers;
pub mod input;
pub mod menus;
pub mod output;
pub mod session;
mod shell;

pub use input::{EditorSource, LineSource, ReaderSource};
pub use output::Printer;
pub use session::Session;
pub use shell::run_cli;
