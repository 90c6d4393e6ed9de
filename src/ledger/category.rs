use std::fmt;

/// Fixed classification applied to every purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Food,
    Clothes,
    Entertainment,
    Other,
}

impl Category {
    pub const COUNT: usize = 4;

    /// Every category in menu order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Food,
        Category::Clothes,
        Category::Entertainment,
        Category::Other,
    ];

    /// Symbolic identifier used in the persisted file.
    pub fn symbol(self) -> &'static str {
        match self {
            Category::Food => "FOOD",
            Category::Clothes => "CLOTHES",
            Category::Entertainment => "ENTERTAINMENT",
            Category::Other => "OTHER",
        }
    }

    /// Human readable label shown in menus and listings.
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Clothes => "Clothes",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }

    /// Exact, case-sensitive lookup by symbolic identifier.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.symbol() == symbol)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
