use std::io::{self, IsTerminal};

use crate::{config::ConfigManager, errors::CliError, storage::TextFileStorage};

use super::{
    input::{EditorSource, LineSource, ReaderSource},
    output::Printer,
    session::Session,
};

/// Runs a session against the process's stdin and stdout.
///
/// A terminal gets line editing and history; piped input is read line by line
/// without echoing prompts.
pub fn run_cli() -> Result<(), CliError> {
    let config = ConfigManager::new().load()?;
    tracing::debug!(data_file = %config.data_file.display(), "Configuration loaded");

    let stdin = io::stdin();
    let input: Box<dyn LineSource> = if stdin.is_terminal() {
        Box::new(EditorSource::new()?)
    } else {
        Box::new(ReaderSource::new(stdin.lock()))
    };

    let stdout = io::stdout();
    let colorize = config.color && stdout.is_terminal();
    let printer = Printer::new(stdout, colorize, config.currency_symbol);

    let storage = TextFileStorage::new(config.data_file);
    let mut session = Session::new(Box::new(storage), input, printer);
    session.run()
}
