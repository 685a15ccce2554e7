//! Menu categories and menu items.
//!
//! Prices are [`Decimal`] and must be strictly positive. Carts and orders copy the
//! price at the time a line is added, so editing a menu item never changes them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Type-safe identifier for Categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(pub u32);

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "category_{}", self.0)
    }
}

/// Type-safe identifier for MenuItems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "menuitem_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub slug: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryCreate {
    pub slug: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub title: String,
    pub price: Decimal,
    pub featured: bool,
    pub category_id: CategoryId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemCreate {
    pub title: String,
    pub price: Decimal,
    #[serde(default)]
    pub featured: bool,
    pub category_id: CategoryId,
}

/// Partial update of a menu item; absent fields are left as they are.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItemUpdate {
    pub title: Option<String>,
    pub price: Option<Decimal>,
    pub featured: Option<bool>,
    pub category_id: Option<CategoryId>,
}
