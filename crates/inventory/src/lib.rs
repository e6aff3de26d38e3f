//! In-memory stock tracking for a single retail store.
//!
//! This crate contains the inventory rules as deterministic domain logic
//! (no IO, no logging, no storage). Callers own presentation and persistence.

pub mod config;
pub mod error;
pub mod inventory;
pub mod stock;

pub use config::{DEFAULT_LIMIT, InventoryConfig, LIMIT_ENV_VAR};
pub use error::{ErrorKind, InvalidQuantity, InventoryError};
pub use inventory::Inventory;
pub use stock::{Price, StockRecord};
