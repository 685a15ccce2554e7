use crate::model::{MenuItemId, UserId};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// A line price or order total that does not fit in a [`Decimal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("amount out of range")]
pub struct PriceOverflow;

/// One menu item in a cart.
///
/// `price` is always `quantity * unit_price`: it is computed by [`CartLine::new`] and has
/// no setter. `unit_price` is the menu price when the line was added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    menuitem_id: MenuItemId,
    quantity: u32,
    unit_price: Decimal,
    price: Decimal,
}

impl CartLine {
    pub fn new(
        menuitem_id: MenuItemId,
        quantity: u32,
        unit_price: Decimal,
    ) -> Result<Self, PriceOverflow> {
        let price = Decimal::from(quantity)
            .checked_mul(unit_price)
            .ok_or(PriceOverflow)?;
        Ok(Self {
            menuitem_id,
            quantity,
            unit_price,
            price,
        })
    }

    pub fn menuitem_id(&self) -> MenuItemId {
        self.menuitem_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// A user's shopping cart.
///
/// Every user implicitly owns an empty cart; it is stored the first time it changes.
/// `revision` increases with every change to the lines, which lets checkout clear
/// exactly the cart it read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cart {
    pub owner: UserId,
    lines: BTreeMap<MenuItemId, CartLine>,
    revision: u64,
}

impl Cart {
    pub fn empty(owner: UserId) -> Self {
        Self {
            owner,
            lines: BTreeMap::new(),
            revision: 0,
        }
    }

    /// Inserts or overwrites the line for the line's menu item.
    pub fn upsert(&mut self, line: CartLine) {
        self.lines.insert(line.menuitem_id, line);
        self.revision += 1;
    }

    /// Removes every line and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let removed = self.lines.len();
        if removed > 0 {
            self.lines.clear();
            self.revision += 1;
        }
        removed
    }

    /// Lines ordered by menu item id.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.values().cloned().collect(),
            revision: self.revision,
        }
    }
}

/// The lines of a cart as read at one revision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub revision: u64,
}
