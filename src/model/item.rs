use crate::model::Money;
use crate::order_actor::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Catalog identifier of an item. Unique within a menu, not across the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// What sort of dish an item is. Purely descriptive: every kind behaves the same.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Pizza,
    Burger,
    Side,
    Drink,
    Dessert,
    #[default]
    Other,
}

/// A single line of an order.
///
/// Fields are private so the price can only change through [`OrderItem::set_price`],
/// which keeps it non-negative. Deserializing runs the same check. `Clone` yields a fully
/// independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OrderItemRecord")]
pub struct OrderItem {
    id: ItemId,
    name: String,
    price: Money,
    kind: ItemKind,
}

impl OrderItem {
    /// Creates a new item of kind [`ItemKind::Other`].
    ///
    /// # Errors
    /// [`OrderError::InvalidArgument`] if `price` is negative.
    pub fn new(name: impl Into<String>, price: Money, id: ItemId) -> Result<Self, OrderError> {
        let name = name.into();
        check_price(&name, price)?;
        Ok(Self {
            id,
            name,
            price,
            kind: ItemKind::Other,
        })
    }

    /// Shorthand for `OrderItem::new(..)?.with_kind(ItemKind::Pizza)`.
    pub fn pizza(name: impl Into<String>, price: Money, id: ItemId) -> Result<Self, OrderError> {
        Ok(Self::new(name, price, id)?.with_kind(ItemKind::Pizza))
    }

    /// Shorthand for `OrderItem::new(..)?.with_kind(ItemKind::Burger)`.
    pub fn burger(name: impl Into<String>, price: Money, id: ItemId) -> Result<Self, OrderError> {
        Ok(Self::new(name, price, id)?.with_kind(ItemKind::Burger))
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// # Errors
    /// [`OrderError::InvalidArgument`] if `price` is negative; the item is left unchanged.
    pub fn set_price(&mut self, price: Money) -> Result<(), OrderError> {
        check_price(&self.name, price)?;
        self.price = price;
        Ok(())
    }
}

#[derive(Deserialize)]
struct OrderItemRecord {
    id: ItemId,
    name: String,
    price: Money,
    #[serde(default)]
    kind: ItemKind,
}

impl TryFrom<OrderItemRecord> for OrderItem {
    type Error = OrderError;

    fn try_from(record: OrderItemRecord) -> Result<Self, Self::Error> {
        Ok(OrderItem::new(record.name, record.price, record.id)?.with_kind(record.kind))
    }
}

fn check_price(name: &str, price: Money) -> Result<(), OrderError> {
    if price.is_negative() {
        return Err(OrderError::InvalidArgument(format!(
            "price of '{name}' must not be negative, got {price}"
        )));
    }
    Ok(())
}
