use crate::ledger::Category;

use super::{Menu, MenuItem};

pub const MENU: Menu = Menu {
    title: "Choose the type of purchase",
    items: &[
        MenuItem::new(1, "Food"),
        MenuItem::new(2, "Clothes"),
        MenuItem::new(3, "Entertainment"),
        MenuItem::new(4, "Other"),
        MenuItem::new(5, "Back"),
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseChoice {
    Category(Category),
    Back,
}

impl PurchaseChoice {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            5 => Some(Self::Back),
            _ => category_for(choice).map(Self::Category),
        }
    }
}

/// Categories occupy entries 1-4 in both purchase-related menus.
pub(crate) fn category_for(choice: i64) -> Option<Category> {
    let index = usize::try_from(choice.checked_sub(1)?).ok()?;
    Category::ALL.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_categories_and_back() {
        assert_eq!(
            PurchaseChoice::from_choice(1),
            Some(PurchaseChoice::Category(Category::Food))
        );
        assert_eq!(
            PurchaseChoice::from_choice(4),
            Some(PurchaseChoice::Category(Category::Other))
        );
        assert_eq!(PurchaseChoice::from_choice(5), Some(PurchaseChoice::Back));
        assert_eq!(PurchaseChoice::from_choice(0), None);
        assert_eq!(PurchaseChoice::from_choice(6), None);
    }
}
