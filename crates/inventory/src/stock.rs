use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ValueObject};

/// Unit price in the smallest currency unit (e.g., cents).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Units on hand for one item name, together with its unit price.
///
/// Records are created the first time a name is stocked and are kept even
/// once their quantity reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    name: String,
    price: Price,
    quantity: u64,
}

impl StockRecord {
    pub(crate) fn new(name: String, price: Price, quantity: u64) -> Self {
        Self {
            name,
            price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub(crate) fn restock(&mut self, quantity: u64) {
        self.quantity += quantity;
    }

    pub(crate) fn withdraw(&mut self, quantity: u64) {
        self.quantity -= quantity;
    }
}

impl Entity for StockRecord {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_displays_major_and_minor_units() {
        assert_eq!(Price::from_cents(1000).to_string(), "10.00");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
        assert_eq!(Price::from_cents(7_099).to_string(), "70.99");
    }

    #[test]
    fn prices_compare_by_value() {
        assert_eq!(Price::from_cents(5_000), Price::from_cents(5_000));
        assert!(Price::from_cents(2_500) < Price::from_cents(10_000));
    }

    #[test]
    fn stock_record_is_identified_by_name() {
        let mut record = StockRecord::new("Puma Test".to_string(), Price::from_cents(10_000), 8);
        record.withdraw(8);

        assert_eq!(record.id(), "Puma Test");
        assert_eq!(record.quantity(), 0);
    }
}
