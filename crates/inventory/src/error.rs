//! Error kinds raised by inventory operations.
//!
//! Every error is a caller-input violation; messages carry the values of the
//! rejected call.

use thiserror::Error;

/// Coarse error discriminant for callers that only branch on the kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidQuantity,
    NoSpace,
    ItemNotFound,
}

/// A quantity argument that cannot be applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidQuantity {
    /// Additions must bring at least one unit, whatever non-positive value was given.
    #[error("Cannot add a quantity of 0. All new stocks must have at least 1 item")]
    Addition { quantity: i64 },

    #[error("Cannot remove a quantity of 0. Must remove at least 1 item")]
    Removal { quantity: i64 },

    #[error("Cannot remove these {requested} items. Only {in_stock} items are in stock")]
    Insufficient { requested: u64, in_stock: u64 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error(transparent)]
    InvalidQuantity(#[from] InvalidQuantity),

    #[error("Cannot add these {requested} items. Only {remaining} more items can be stored")]
    NoSpace { requested: u64, remaining: u64 },

    #[error("Could not find {name} in our stocks. Cannot remove non-existing stock")]
    ItemNotFound { name: String },
}

impl InventoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::InvalidQuantity(_) => ErrorKind::InvalidQuantity,
            InventoryError::NoSpace { .. } => ErrorKind::NoSpace,
            InventoryError::ItemNotFound { .. } => ErrorKind::ItemNotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_message_is_fixed_for_any_non_positive_value() {
        let zero = InventoryError::from(InvalidQuantity::Addition { quantity: 0 });
        let negative = InventoryError::from(InvalidQuantity::Addition { quantity: -4 });

        assert_eq!(zero.to_string(), negative.to_string());
        assert_eq!(negative.kind(), ErrorKind::InvalidQuantity);
    }

    #[test]
    fn messages_interpolate_call_values() {
        let no_space = InventoryError::NoSpace {
            requested: 25,
            remaining: 10,
        };
        assert_eq!(
            no_space.to_string(),
            "Cannot add these 25 items. Only 10 more items can be stored"
        );
        assert_eq!(no_space.kind(), ErrorKind::NoSpace);

        let missing = InventoryError::ItemNotFound {
            name: "Not Here".to_string(),
        };
        assert_eq!(
            missing.to_string(),
            "Could not find Not Here in our stocks. Cannot remove non-existing stock"
        );
        assert_eq!(missing.kind(), ErrorKind::ItemNotFound);
    }
}
