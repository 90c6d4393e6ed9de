//! Interactive session state and the top-level command loop.

use std::io::Write;

use crate::{
    errors::CliError,
    ledger::{text_format::parse_amount, Ledger},
    storage::StorageBackend,
};

use super::{
    handlers,
    input::LineSource,
    menus::{main_menu, MainCommand},
    output::Printer,
};

const PROMPT: &str = "> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Outcome of reading one numeric reply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Reply<T> {
    Value(T),
    Invalid,
    Closed,
}

pub(crate) type CommandResult = Result<LoopControl, CliError>;

/// One user session. Owns the ledger for the lifetime of the command loop.
pub struct Session<W: Write> {
    pub(crate) ledger: Ledger,
    pub(crate) storage: Box<dyn StorageBackend>,
    pub(crate) input: Box<dyn LineSource>,
    pub(crate) printer: Printer<W>,
}

impl<W: Write> Session<W> {
    pub fn new(
        storage: Box<dyn StorageBackend>,
        input: Box<dyn LineSource>,
        printer: Printer<W>,
    ) -> Self {
        Self {
            ledger: Ledger::new(),
            storage,
            input,
            printer,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_printer(self) -> Printer<W> {
        self.printer
    }

    /// Runs the main menu until Exit is chosen or input ends.
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            main_menu::MENU.render(&mut self.printer)?;
            let choice = match self.read_choice()? {
                Reply::Value(choice) => choice,
                Reply::Invalid => continue,
                Reply::Closed => break,
            };

            let control = match MainCommand::from_choice(choice) {
                Some(command) => handlers::dispatch(self, command)?,
                None => {
                    self.printer.warning("Invalid command")?;
                    LoopControl::Continue
                }
            };
            if control == LoopControl::Exit {
                break;
            }
        }

        self.printer.blank_line()?;
        self.printer.info("Bye!")?;
        self.printer.flush()?;
        Ok(())
    }

    pub(crate) fn read_line(&mut self) -> Result<Option<String>, CliError> {
        self.printer.flush()?;
        self.input.read_line(PROMPT)
    }

    /// Reads a menu choice. A non-numeric reply is reported and yields `Invalid`.
    pub(crate) fn read_choice(&mut self) -> Result<Reply<i64>, CliError> {
        let Some(line) = self.read_line()? else {
            return Ok(Reply::Closed);
        };
        match parse_choice(&line) {
            Ok(choice) => Ok(Reply::Value(choice)),
            Err(err @ CliError::InvalidNumber(_)) => {
                self.printer.warning(&err)?;
                Ok(Reply::Invalid)
            }
            Err(err) => Err(err),
        }
    }

    /// Reads an amount, re-prompting until it parses. `None` once input ends.
    pub(crate) fn read_amount(&mut self) -> Result<Option<f64>, CliError> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_amount(&line) {
                Some(amount) => return Ok(Some(amount)),
                None => {
                    let err = CliError::InvalidNumber(line.trim().to_string());
                    self.printer.warning(&err)?;
                }
            }
        }
    }
}

fn parse_choice(line: &str) -> Result<i64, CliError> {
    let trimmed = line.trim();
    trimmed
        .parse()
        .map_err(|_| CliError::InvalidNumber(trimmed.to_string()))
}
