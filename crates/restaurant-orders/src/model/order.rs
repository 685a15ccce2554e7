//! Orders, their items, and the patch type used to edit them.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait; see
//! `order_actor` for checkout (`on_create`) and field-level editing (`on_update`).

use crate::model::{CartLine, MenuItemId, PriceOverflow, RoleSet, UserId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Delivered,
}

/// A frozen copy of a cart line, taken at checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    menuitem_id: MenuItemId,
    quantity: u32,
    unit_price: Decimal,
    price: Decimal,
}

impl OrderItem {
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

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            menuitem_id: line.menuitem_id(),
            quantity: line.quantity(),
            unit_price: line.unit_price(),
            price: line.price(),
        }
    }
}

/// A customer order. Only checkout creates orders.
///
/// `total` always equals the sum of the item prices; items are set once, together with
/// the total, and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub delivery_crew: Option<UserId>,
    pub status: OrderStatus,
    date: NaiveDate,
    total: Decimal,
    items: Vec<OrderItem>,
}

impl Order {
    /// A pending order with no items yet.
    pub fn pending(id: OrderId, user_id: UserId, date: NaiveDate) -> Self {
        Self {
            id,
            user_id,
            delivery_crew: None,
            status: OrderStatus::Pending,
            date,
            total: Decimal::ZERO,
            items: Vec::new(),
        }
    }

    /// Copies `lines` into the order's items and sets the total.
    ///
    /// On overflow the order keeps its previous items and total.
    pub fn fill_from<'a>(
        &mut self,
        lines: impl IntoIterator<Item = &'a CartLine>,
    ) -> Result<(), PriceOverflow> {
        let mut total = Decimal::ZERO;
        let mut items = Vec::new();
        for line in lines {
            total = total.checked_add(line.price()).ok_or(PriceOverflow)?;
            items.push(OrderItem::from(line));
        }
        self.items = items;
        self.total = total;
        Ok(())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Writes the present slots of `patch`. Permission checks happen before this.
    ///
    /// `total` and `date` are never written: the total follows the items and the date
    /// is the creation date.
    pub(crate) fn apply(&mut self, patch: OrderPatch) {
        let OrderPatch {
            user,
            delivery_crew,
            status,
            total: _,
            date: _,
        } = patch;
        if let Some(user) = user {
            self.user_id = user;
        }
        if let Some(crew) = delivery_crew {
            self.delivery_crew = Some(crew);
        }
        if let Some(status) = status {
            self.status = status;
        }
    }
}

/// Payload for creating an order: checkout of the owner's cart.
#[derive(Debug, Clone)]
pub struct Checkout {
    pub user_id: UserId,
}

/// Names of the order fields a patch can touch, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderField {
    User,
    DeliveryCrew,
    Status,
    Total,
    Date,
}

impl Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderField::User => "user",
            OrderField::DeliveryCrew => "delivery_crew",
            OrderField::Status => "status",
            OrderField::Total => "total",
            OrderField::Date => "date",
        })
    }
}

/// A set of field changes for one order. Present slots are the requested changes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderPatch {
    pub user: Option<UserId>,
    pub delivery_crew: Option<UserId>,
    pub status: Option<OrderStatus>,
    pub total: Option<Decimal>,
    pub date: Option<NaiveDate>,
}

impl OrderPatch {
    /// The fields this patch changes, in declaration order.
    pub fn fields(&self) -> Vec<OrderField> {
        let present = [
            (self.user.is_some(), OrderField::User),
            (self.delivery_crew.is_some(), OrderField::DeliveryCrew),
            (self.status.is_some(), OrderField::Status),
            (self.total.is_some(), OrderField::Total),
            (self.date.is_some(), OrderField::Date),
        ];
        present
            .into_iter()
            .filter_map(|(is_set, field)| is_set.then_some(field))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}

/// Update payload sent to the order actor: the patch plus the editor's roles.
#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub editor: RoleSet,
    pub patch: OrderPatch,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn total_is_sum_of_item_prices() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut order = Order::pending(OrderId(1), UserId(2), date);
        let lines = [
            CartLine::new(MenuItemId(1), 2, dec!(9.00)).unwrap(),
            CartLine::new(MenuItemId(5), 1, dec!(3.25)).unwrap(),
        ];
        order.fill_from(&lines).unwrap();

        assert_eq!(order.total(), dec!(21.25));
        let sum: Decimal = order.items().iter().map(OrderItem::price).sum();
        assert_eq!(order.total(), sum);
        assert_eq!(order.items()[0].unit_price(), dec!(9.00));
    }

    #[test]
    fn total_out_of_range_leaves_order_empty() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut order = Order::pending(OrderId(1), UserId(2), date);
        let lines = [
            CartLine::new(MenuItemId(1), 1, Decimal::MAX).unwrap(),
            CartLine::new(MenuItemId(2), 1, Decimal::MAX).unwrap(),
        ];

        assert_eq!(order.fill_from(&lines), Err(PriceOverflow));
        assert_eq!(order.total(), Decimal::ZERO);
        assert!(order.items().is_empty());
    }

    #[test]
    fn patch_lists_fields_in_declaration_order() {
        let patch = OrderPatch {
            status: Some(OrderStatus::Delivered),
            delivery_crew: Some(UserId(4)),
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..OrderPatch::default()
        };
        assert_eq!(
            patch.fields(),
            vec![OrderField::DeliveryCrew, OrderField::Status, OrderField::Date]
        );
        assert!(OrderPatch::default().is_empty());
    }
}
