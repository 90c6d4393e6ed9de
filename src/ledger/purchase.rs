use super::category::Category;

/// A single recorded purchase. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    category: Category,
    name: String,
    price: f64,
}

impl Purchase {
    pub fn new(category: Category, name: impl Into<String>, price: f64) -> Self {
        Self {
            category,
            name: name.into(),
            price,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}
