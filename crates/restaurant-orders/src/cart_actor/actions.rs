//! Custom actions for the Cart actor.
//!
//! Reads go through the plain `get` request, which answers with the implicit empty cart
//! for users who never added anything.

use crate::model::{CartLine, MenuItemId};

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Snapshots the menu item's current price and upserts the line.
    AddLine {
        menuitem_id: MenuItemId,
        quantity: u32,
    },
    /// Removes every line.
    Clear,
    /// Removes every line if the cart is still at the given revision.
    ClearAt(u64),
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone)]
pub enum CartActionResult {
    /// The stored line.
    AddLine(CartLine),
    /// Number of removed lines.
    Clear(usize),
    /// Number of removed lines.
    ClearAt(usize),
}
