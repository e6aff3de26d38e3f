//! Replays a day at the store counter against an in-memory inventory.

use anyhow::Context;

use stockroom_inventory::{Inventory, InventoryConfig, InventoryError, Price};

/// One counter action.
#[derive(Debug, Clone, Copy)]
enum Step {
    Receive {
        name: &'static str,
        price: Price,
        quantity: i64,
    },
    Sell {
        name: &'static str,
        quantity: i64,
    },
}

const DAY: &[Step] = &[
    Step::Receive {
        name: "Nike Sneakers",
        price: Price::from_cents(5_000),
        quantity: 10,
    },
    Step::Receive {
        name: "Adidas Sweatpants",
        price: Price::from_cents(7_000),
        quantity: 5,
    },
    Step::Sell {
        name: "Nike Sneakers",
        quantity: 2,
    },
    Step::Sell {
        name: "Adidas Sweatpants",
        quantity: 1,
    },
    // Rejected: nothing by that name was ever received.
    Step::Sell {
        name: "Puma Test",
        quantity: 1,
    },
];

fn apply(inventory: &mut Inventory, step: Step) -> Result<(), InventoryError> {
    match step {
        Step::Receive {
            name,
            price,
            quantity,
        } => inventory.add_new_stock(name, price, quantity),
        Step::Sell { name, quantity } => inventory.remove_stock(name, quantity),
    }
}

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = InventoryConfig::from_env().context("invalid inventory configuration")?;
    let mut inventory = Inventory::from_config(&config);
    tracing::info!(limit = inventory.limit(), "inventory opened");

    for step in DAY.iter().copied() {
        match apply(&mut inventory, step) {
            Ok(()) => tracing::info!(
                step = ?step,
                total_items = inventory.total_items(),
                "stock updated"
            ),
            Err(error) => tracing::warn!(
                step = ?step,
                kind = ?error.kind(),
                error = %error,
                total_items = inventory.total_items(),
                "stock update rejected"
            ),
        }
    }

    for record in inventory.stocks() {
        tracing::info!(
            item = record.name(),
            price = %record.price(),
            quantity = record.quantity(),
            "closing stock"
        );
    }

    Ok(())
}
