use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while decoding the persisted purchase file.
///
/// Line numbers are 1-based and refer to the physical line in the file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: `{value}` is not a valid balance")]
    InvalidBalance { line: usize, value: String },
    #[error("line {line}: unknown category `{symbol}`")]
    UnknownCategory { line: usize, symbol: String },
    #[error("line {line}: `{value}` is not a valid price")]
    InvalidPrice { line: usize, value: String },
}

/// Error type that captures common ledger and persistence failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Config(err.to_string())
    }
}

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}
