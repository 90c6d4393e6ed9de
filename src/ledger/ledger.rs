use crate::errors::ParseError;

use super::{category::Category, purchase::Purchase, text_format};

/// Aggregate owning every purchase plus the running income/expense totals.
///
/// Purchases are stored once, in insertion order. Each category bucket holds
/// indices into that store, so a purchase always lives in exactly one bucket.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    balance: f64,
    total_expenses: f64,
    purchases: Vec<Purchase>,
    buckets: [Vec<usize>; Category::COUNT],
}

/// Purchases selected for display together with the sum of their prices.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<'a> {
    pub purchases: Vec<&'a Purchase>,
    pub total: f64,
}

impl Listing<'_> {
    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds income to the balance. Negative amounts are accepted as-is.
    pub fn add_income(&mut self, amount: f64) {
        self.balance += amount;
        tracing::debug!(amount, balance = self.balance, "Income added");
    }

    /// Records a purchase and charges it against the balance.
    ///
    /// A purchase equal in category, name and price to one already stored is
    /// ignored entirely; returns `false` in that case.
    pub fn add_purchase(
        &mut self,
        category: Category,
        name: impl Into<String>,
        price: f64,
    ) -> bool {
        let purchase = Purchase::new(category, name, price);
        if self.purchases.contains(&purchase) {
            tracing::debug!(
                category = category.symbol(),
                name = purchase.name(),
                price,
                "Duplicate purchase ignored"
            );
            return false;
        }
        self.insert(purchase);
        self.balance -= price;
        tracing::debug!(
            category = category.symbol(),
            price,
            balance = self.balance,
            "Purchase added"
        );
        true
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn total_expenses(&self) -> f64 {
        self.total_expenses
    }

    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.purchases.len()
    }

    /// All purchases in insertion order.
    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    pub fn list_all(&self) -> Listing<'_> {
        Listing {
            purchases: self.purchases.iter().collect(),
            total: self.total_expenses,
        }
    }

    /// Purchases of one category in insertion order. The total is summed on demand.
    pub fn list_by_category(&self, category: Category) -> Listing<'_> {
        let purchases: Vec<&Purchase> = self.buckets[category.index()]
            .iter()
            .map(|&index| &self.purchases[index])
            .collect();
        let total = purchases.iter().map(|purchase| purchase.price()).sum();
        Listing { purchases, total }
    }

    pub fn serialize_to_text(&self) -> String {
        text_format::encode(self)
    }

    /// Replaces every purchase with the contents of `text`.
    ///
    /// The balance is overwritten by the first line when present. Purchases are
    /// staged first, so a parse failure leaves the ledger untouched. Duplicate
    /// records in the text are all kept and the balance is not charged for them.
    pub fn deserialize_from_text(&mut self, text: &str) -> Result<(), ParseError> {
        let decoded = text_format::decode(text)?;
        if let Some(balance) = decoded.balance {
            self.balance = balance;
        }
        self.clear_purchases();
        for purchase in decoded.purchases {
            self.insert(purchase);
        }
        tracing::debug!(
            purchases = self.purchases.len(),
            balance = self.balance,
            "Ledger restored from text"
        );
        Ok(())
    }

    fn insert(&mut self, purchase: Purchase) {
        self.total_expenses += purchase.price();
        self.buckets[purchase.category().index()].push(self.purchases.len());
        self.purchases.push(purchase);
    }

    fn clear_purchases(&mut self) {
        self.purchases.clear();
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.total_expenses = 0.0;
    }
}
