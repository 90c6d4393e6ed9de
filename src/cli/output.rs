use colored::Colorize;
use std::fmt;
use std::io::{self, Write};

/// Message categories used by the CLI output helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

fn apply_style(kind: MessageKind, text: String) -> String {
    match kind {
        MessageKind::Success => text.bright_green().to_string(),
        MessageKind::Warning => text.bright_yellow().to_string(),
        MessageKind::Error => text.bright_red().to_string(),
        MessageKind::Section => text.bold().to_string(),
        MessageKind::Info => text,
    }
}

/// Writes session messages to any sink, optionally colourised.
pub struct Printer<W: Write> {
    out: W,
    colorize: bool,
    currency_symbol: String,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, colorize: bool, currency_symbol: impl Into<String>) -> Self {
        Self {
            out,
            colorize,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn print(&mut self, kind: MessageKind, message: impl fmt::Display) -> io::Result<()> {
        let text = message.to_string();
        let formatted = if self.colorize {
            apply_style(kind, text)
        } else {
            text
        };
        writeln!(self.out, "{formatted}")
    }

    pub fn info(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Info, message)
    }

    pub fn success(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Success, message)
    }

    pub fn warning(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Warning, message)
    }

    pub fn error(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Error, message)
    }

    pub fn section(&mut self, title: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Section, title)
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Currency amount with two decimals, e.g. `$12.50`.
    pub fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
