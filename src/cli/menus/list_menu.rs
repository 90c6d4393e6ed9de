use crate::ledger::Category;

use super::{purchase_menu::category_for, Menu, MenuItem};

pub const MENU: Menu = Menu {
    title: "Choose the type of purchases",
    items: &[
        MenuItem::new(1, "Food"),
        MenuItem::new(2, "Clothes"),
        MenuItem::new(3, "Entertainment"),
        MenuItem::new(4, "Other"),
        MenuItem::new(5, "All"),
        MenuItem::new(6, "Back"),
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChoice {
    Category(Category),
    All,
    Back,
}

impl ListChoice {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            5 => Some(Self::All),
            6 => Some(Self::Back),
            _ => category_for(choice).map(Self::Category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_all_back_and_categories() {
        assert_eq!(ListChoice::from_choice(5), Some(ListChoice::All));
        assert_eq!(ListChoice::from_choice(6), Some(ListChoice::Back));
        assert_eq!(
            ListChoice::from_choice(3),
            Some(ListChoice::Category(Category::Entertainment))
        );
        assert_eq!(ListChoice::from_choice(7), None);
    }
}
