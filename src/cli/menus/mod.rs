//! Numbered menus and the typed commands their choices map to.

pub mod list_menu;
pub mod main_menu;
pub mod purchase_menu;

pub use list_menu::ListChoice;
pub use main_menu::MainCommand;
pub use purchase_menu::PurchaseChoice;

use std::io::{self, Write};

use crate::cli::output::Printer;

/// A single numbered menu entry.
#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub key: i64,
    pub label: &'static str,
}

impl MenuItem {
    pub const fn new(key: i64, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Declarative menu: a heading followed by numbered entries.
#[derive(Debug, Clone, Copy)]
pub struct Menu {
    pub title: &'static str,
    pub items: &'static [MenuItem],
}

impl Menu {
    pub fn render<W: Write>(&self, printer: &mut Printer<W>) -> io::Result<()> {
        printer.blank_line()?;
        printer.section(self.title)?;
        for item in self.items {
            printer.info(format!("{}) {}", item.key, item.label))?;
        }
        Ok(())
    }
}
