use super::{Menu, MenuItem};

pub const MENU: Menu = Menu {
    title: "Choose your action:",
    items: &[
        MenuItem::new(1, "Add income"),
        MenuItem::new(2, "Add purchase"),
        MenuItem::new(3, "Show list of purchases"),
        MenuItem::new(4, "Balance"),
        MenuItem::new(5, "Save"),
        MenuItem::new(6, "Load"),
        MenuItem::new(0, "Exit"),
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    AddIncome,
    AddPurchase,
    ListPurchases,
    ShowBalance,
    Save,
    Load,
    Exit,
}

impl MainCommand {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::AddIncome),
            2 => Some(Self::AddPurchase),
            3 => Some(Self::ListPurchases),
            4 => Some(Self::ShowBalance),
            5 => Some(Self::Save),
            6 => Some(Self::Load),
            0 => Some(Self::Exit),
            _ => None,
        }
    }
}
