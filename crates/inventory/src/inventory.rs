use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;

use crate::config::{DEFAULT_LIMIT, InventoryConfig};
use crate::error::{InvalidQuantity, InventoryError};
use crate::stock::{Price, StockRecord};

/// Stock on hand for a single store, bounded by a total-unit limit.
///
/// Invariants held after every call, successful or not:
/// - `total_items() <= limit()`
/// - `total_items()` equals the sum of all record quantities
///
/// A rejected call leaves the inventory untouched: every check runs before
/// the first mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory {
    limit: u64,
    total_items: u64,
    stocks: HashMap<String, StockRecord>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }
}

impl Inventory {
    /// Empty inventory holding at most 100 units.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty inventory holding at most `limit` units. The limit is trusted to be positive.
    pub fn with_limit(limit: u64) -> Self {
        Self {
            limit,
            total_items: 0,
            stocks: HashMap::new(),
        }
    }

    pub fn from_config(config: &InventoryConfig) -> Self {
        Self::with_limit(config.limit)
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Units that can still be added before the limit is reached.
    pub fn remaining_capacity(&self) -> u64 {
        self.limit - self.total_items
    }

    pub fn stock(&self, name: &str) -> Option<&StockRecord> {
        self.stocks.get(name)
    }

    pub fn quantity_of(&self, name: &str) -> Option<u64> {
        self.stock(name).map(StockRecord::quantity)
    }

    pub fn price_of(&self, name: &str) -> Option<Price> {
        self.stock(name).map(StockRecord::price)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stocks.contains_key(name)
    }

    /// All stock records, in no particular order.
    pub fn stocks(&self) -> impl Iterator<Item = &StockRecord> {
        self.stocks.values()
    }

    /// Number of distinct item names ever stocked (including sold-out ones).
    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Add `quantity` units of `name`.
    ///
    /// A new name creates its record at `price`. For a name already stocked
    /// only the quantity grows; the recorded price is kept and `price` is ignored.
    pub fn add_new_stock(
        &mut self,
        name: impl Into<String>,
        price: Price,
        quantity: i64,
    ) -> Result<(), InventoryError> {
        let quantity = positive(quantity).ok_or(InvalidQuantity::Addition { quantity })?;

        let remaining = self.remaining_capacity();
        if quantity > remaining {
            return Err(InventoryError::NoSpace {
                requested: quantity,
                remaining,
            });
        }

        match self.stocks.entry(name.into()) {
            Entry::Occupied(mut entry) => entry.get_mut().restock(quantity),
            Entry::Vacant(entry) => {
                let record = StockRecord::new(entry.key().clone(), price, quantity);
                entry.insert(record);
            }
        }
        self.total_items += quantity;
        Ok(())
    }

    /// Remove (sell) `quantity` units of an already stocked `name`.
    ///
    /// Checks run in order: positive quantity, known name, enough units on hand.
    pub fn remove_stock(&mut self, name: &str, quantity: i64) -> Result<(), InventoryError> {
        let quantity = positive(quantity).ok_or(InvalidQuantity::Removal { quantity })?;

        let record = self
            .stocks
            .get_mut(name)
            .ok_or_else(|| InventoryError::ItemNotFound {
                name: name.to_string(),
            })?;

        if quantity > record.quantity() {
            return Err(InvalidQuantity::Insufficient {
                requested: quantity,
                in_stock: record.quantity(),
            }
            .into());
        }

        record.withdraw(quantity);
        self.total_items -= quantity;
        Ok(())
    }
}

fn positive(quantity: i64) -> Option<u64> {
    u64::try_from(quantity).ok().filter(|q| *q > 0)
}
