//! Handlers for each main menu command.

use std::io::Write;

use crate::{
    errors::LedgerError,
    ledger::{Category, Listing},
};

use super::{
    menus::{list_menu, purchase_menu, ListChoice, MainCommand, PurchaseChoice},
    output::Printer,
    session::{CommandResult, LoopControl, Reply, Session},
};

const EMPTY_LIST: &str = "The purchase list is empty!";

pub(crate) fn dispatch<W: Write>(session: &mut Session<W>, command: MainCommand) -> CommandResult {
    match command {
        MainCommand::AddIncome => add_income(session),
        MainCommand::AddPurchase => add_purchases(session),
        MainCommand::ListPurchases => list_purchases(session),
        MainCommand::ShowBalance => show_balance(session),
        MainCommand::Save => save(session),
        MainCommand::Load => load(session),
        MainCommand::Exit => Ok(LoopControl::Exit),
    }
}

fn add_income<W: Write>(session: &mut Session<W>) -> CommandResult {
    session.printer.blank_line()?;
    session.printer.info("Enter income:")?;
    let Some(amount) = session.read_amount()? else {
        return Ok(LoopControl::Exit);
    };
    session.ledger.add_income(amount);
    session.printer.success("Income was added!")?;
    Ok(LoopControl::Continue)
}

fn add_purchases<W: Write>(session: &mut Session<W>) -> CommandResult {
    loop {
        purchase_menu::MENU.render(&mut session.printer)?;
        let choice = match session.read_choice()? {
            Reply::Value(choice) => choice,
            Reply::Invalid => continue,
            Reply::Closed => return Ok(LoopControl::Exit),
        };
        let category = match PurchaseChoice::from_choice(choice) {
            Some(PurchaseChoice::Category(category)) => category,
            Some(PurchaseChoice::Back) => return Ok(LoopControl::Continue),
            None => {
                session.printer.warning("Invalid command")?;
                continue;
            }
        };

        session.printer.blank_line()?;
        session.printer.info("Enter purchase name:")?;
        let Some(name) = session.read_line()? else {
            return Ok(LoopControl::Exit);
        };
        session.printer.info("Enter its price:")?;
        let Some(price) = session.read_amount()? else {
            return Ok(LoopControl::Exit);
        };

        session.ledger.add_purchase(category, name, price);
        session.printer.success("Purchase was added!")?;
    }
}

fn list_purchases<W: Write>(session: &mut Session<W>) -> CommandResult {
    if session.ledger.is_empty() {
        session.printer.blank_line()?;
        session.printer.info(EMPTY_LIST)?;
        return Ok(LoopControl::Continue);
    }

    loop {
        list_menu::MENU.render(&mut session.printer)?;
        let choice = match session.read_choice()? {
            Reply::Value(choice) => choice,
            Reply::Invalid => continue,
            Reply::Closed => return Ok(LoopControl::Exit),
        };
        match ListChoice::from_choice(choice) {
            Some(ListChoice::Category(category)) => print_category(session, category)?,
            Some(ListChoice::All) => print_all(session)?,
            Some(ListChoice::Back) => return Ok(LoopControl::Continue),
            None => session.printer.warning("Invalid command")?,
        }
    }
}

fn print_all<W: Write>(session: &mut Session<W>) -> std::io::Result<()> {
    session.printer.blank_line()?;
    session.printer.section("All:")?;
    let listing = session.ledger.list_all();
    print_listing(&mut session.printer, &listing)
}

fn print_category<W: Write>(
    session: &mut Session<W>,
    category: Category,
) -> std::io::Result<()> {
    session.printer.blank_line()?;
    session.printer.section(format!("{category}:"))?;
    let listing = session.ledger.list_by_category(category);
    if listing.is_empty() {
        return session.printer.info(EMPTY_LIST);
    }
    print_listing(&mut session.printer, &listing)
}

fn print_listing<W: Write>(
    printer: &mut Printer<W>,
    listing: &Listing<'_>,
) -> std::io::Result<()> {
    for purchase in &listing.purchases {
        let line = format!("{} {}", purchase.name(), printer.money(purchase.price()));
        printer.info(line)?;
    }
    let total = format!("Total sum: {}", printer.money(listing.total));
    printer.info(total)
}

fn show_balance<W: Write>(session: &mut Session<W>) -> CommandResult {
    session.printer.blank_line()?;
    let line = format!("Balance: {}", session.printer.money(session.ledger.balance()));
    session.printer.info(line)?;
    Ok(LoopControl::Continue)
}

fn save<W: Write>(session: &mut Session<W>) -> CommandResult {
    match session.storage.save(&session.ledger) {
        Ok(()) => {
            session.printer.blank_line()?;
            session.printer.success("Purchases were saved!")?;
        }
        Err(err) => {
            tracing::warn!(error = %err, "Saving purchases failed");
            session.printer.error("An error occurred while saving.")?;
        }
    }
    Ok(LoopControl::Continue)
}

fn load<W: Write>(session: &mut Session<W>) -> CommandResult {
    match session.storage.load_into(&mut session.ledger) {
        Ok(count) => {
            tracing::info!(purchases = count, "Purchases loaded");
            session.printer.blank_line()?;
            session.printer.success("Purchases were loaded!")?;
        }
        Err(LedgerError::NotFound(path)) => {
            tracing::debug!(path = %path.display(), "No saved purchases");
            session.printer.error("File not found!")?;
        }
        Err(err) => {
            tracing::warn!(error = %err, "Loading purchases failed");
            session.printer.error("An error occurred while loading.")?;
        }
    }
    Ok(LoopControl::Continue)
}
