//! Orders, their identifiers and their status lifecycle.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be stored in the order registry. See
//! [`order_actor`](crate::order_actor) for the registry actions and notification hooks.

use crate::model::{ItemId, Money, OrderItem, RestaurantId, RiderId, UserId};
use crate::order_actor::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Type-safe identifier for Orders. Chosen by the caller, never reused by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Lifecycle of an order.
///
/// ```text
/// Placed -> Confirmed -> Preparing -> OutForDelivery -> Delivered
///    \__________\____________\______________\---------> Cancelled
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Placed,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Delivered and Cancelled end the lifecycle.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether `next` moves forward along the lifecycle drawn above.
    ///
    /// Skipping steps counts as forward. This is advisory:
    /// [`Order::update_status`] accepts any transition.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        if self.is_terminal() || self == next {
            return false;
        }
        next == OrderStatus::Cancelled || next.rank() > self.rank()
    }

    fn rank(self) -> u8 {
        match self {
            OrderStatus::Placed => 0,
            OrderStatus::Confirmed => 1,
            OrderStatus::Preparing => 2,
            OrderStatus::OutForDelivery => 3,
            OrderStatus::Delivered => 4,
            OrderStatus::Cancelled => 5,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(text)
    }
}

/// Parses the textual statuses riders and restaurants send in.
///
/// Case, spaces, `_` and `-` are ignored, so `"OutForDelivery"`, `"out_for_delivery"`
/// and `"Out for delivery"` are the same status.
impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "placed" => Ok(OrderStatus::Placed),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "preparing" => Ok(OrderStatus::Preparing),
            "outfordelivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            _ => Err(OrderError::InvalidArgument(format!("unknown order status '{s}'"))),
        }
    }
}

/// An order and the items it exclusively owns.
///
/// `total` is derived state: every mutation that touches `items` updates it, so it is
/// always the exact sum of the item prices. A mutation whose sum would not fit in
/// [`Money`] is rejected. Participants are referenced by id only.
///
/// Deserializing goes through [`Order::new`], so prices are validated and the total is
/// recomputed from the items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OrderRecord")]
pub struct Order {
    pub(crate) id: OrderId,
    customer: UserId,
    restaurant: RestaurantId,
    rider: Option<RiderId>,
    items: Vec<OrderItem>,
    total: Money,
    status: OrderStatus,
}

impl Order {
    /// Creates a new order in status [`OrderStatus::Placed`] with no rider.
    ///
    /// `total` is what the caller believes the order costs. It is not trusted: the stored
    /// total is recomputed from `items`, and a disagreement is logged.
    ///
    /// # Errors
    /// [`OrderError::InvalidArgument`] if the item prices do not fit in one [`Money`] total.
    pub fn new(
        id: OrderId,
        customer: UserId,
        restaurant: RestaurantId,
        items: Vec<OrderItem>,
        total: Money,
    ) -> Result<Self, OrderError> {
        let actual = Money::checked_sum(items.iter().map(OrderItem::price))
            .ok_or_else(|| total_overflow(id))?;
        if actual != total {
            warn!(order_id = %id, claimed = %total, %actual, "Order total mismatch, using item sum");
        }
        Ok(Self {
            id,
            customer,
            restaurant,
            rider: None,
            items,
            total: actual,
            status: OrderStatus::Placed,
        })
    }

    /// A fresh copy of this order under `new_id`: same customer, restaurant and items,
    /// back to [`OrderStatus::Placed`] and without a rider.
    #[must_use]
    pub fn reorder(&self, new_id: OrderId) -> Self {
        Self {
            id: new_id,
            rider: None,
            status: OrderStatus::Placed,
            ..self.clone()
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer(&self) -> UserId {
        self.customer
    }

    pub fn restaurant(&self) -> RestaurantId {
        self.restaurant
    }

    pub fn rider(&self) -> Option<RiderId> {
        self.rider
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Appends `item` and adds its price to the total.
    ///
    /// # Errors
    /// [`OrderError::InvalidArgument`] if the new total would overflow; the order is unchanged.
    pub fn add_item(&mut self, item: OrderItem) -> Result<(), OrderError> {
        self.total = self
            .total
            .checked_add(item.price())
            .ok_or_else(|| total_overflow(self.id))?;
        self.items.push(item);
        Ok(())
    }

    /// Removes the first item with `item_id` and returns it.
    ///
    /// # Errors
    /// [`OrderError::ItemNotFound`] if no item has that id; the order is unchanged.
    pub fn remove_item(&mut self, item_id: ItemId) -> Result<OrderItem, OrderError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id() == item_id)
            .ok_or_else(|| OrderError::ItemNotFound {
                order: self.id.to_string(),
                item: item_id.to_string(),
            })?;
        self.total = self
            .total
            .checked_sub(self.items[position].price())
            .ok_or_else(|| total_overflow(self.id))?;
        Ok(self.items.remove(position))
    }

    /// Sets the rider, replacing any earlier assignment. Returns the previous rider.
    pub fn assign_rider(&mut self, rider: RiderId) -> Option<RiderId> {
        self.rider.replace(rider)
    }

    /// Sets the status unconditionally and returns the previous one.
    ///
    /// Moving out of a terminal status is allowed but logged.
    pub fn update_status(&mut self, status: OrderStatus) -> OrderStatus {
        let previous = std::mem::replace(&mut self.status, status);
        if previous.is_terminal() && previous != status {
            warn!(order_id = %self.id, from = %previous, to = %status, "Leaving a terminal status");
        }
        previous
    }
}

fn total_overflow(id: OrderId) -> OrderError {
    OrderError::InvalidArgument(format!("total of {id} does not fit in a money amount"))
}

/// Wire shape of an [`Order`]; only reachable through [`Order::new`].
#[derive(Deserialize)]
struct OrderRecord {
    id: OrderId,
    customer: UserId,
    restaurant: RestaurantId,
    rider: Option<RiderId>,
    items: Vec<OrderItem>,
    total: Money,
    status: OrderStatus,
}

impl TryFrom<OrderRecord> for Order {
    type Error = OrderError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let mut order = Order::new(
            record.id,
            record.customer,
            record.restaurant,
            record.items,
            record.total,
        )?;
        order.rider = record.rider;
        order.status = record.status;
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, cents: i64, id: u32) -> OrderItem {
        OrderItem::new(name, Money::from_cents(cents), ItemId(id)).unwrap()
    }

    fn order_with(items: Vec<OrderItem>, claimed: Money) -> Order {
        Order::new(OrderId(1), UserId(10), RestaurantId(20), items, claimed).unwrap()
    }

    fn item_sum(order: &Order) -> Money {
        Money::checked_sum(order.items().iter().map(OrderItem::price)).unwrap()
    }

    #[test]
    fn test_new_order_starts_placed_without_rider() {
        let order = order_with(vec![item("A", 500, 1)], Money::from_cents(500));
        assert_eq!(order.status(), OrderStatus::Placed);
        assert_eq!(order.rider(), None);
        assert_eq!(order.customer(), UserId(10));
        assert_eq!(order.restaurant(), RestaurantId(20));
    }

    #[test]
    fn test_remove_item_updates_total() {
        let mut order = order_with(
            vec![item("A", 500, 1), item("B", 750, 2)],
            Money::from_cents(1250),
        );
        assert_eq!(order.total(), Money::from_cents(1250));

        let removed = order.remove_item(ItemId(1)).unwrap();
        assert_eq!(removed.name(), "A");
        assert_eq!(order.total(), Money::from_cents(750));
        assert_eq!(order.items().len(), 1);
    }

    #[test]
    fn test_claimed_total_is_not_trusted() {
        let order = order_with(vec![item("A", 500, 1), item("B", 750, 2)], Money::from_cents(9999));
        assert_eq!(order.total(), Money::from_cents(1250));
    }

    #[test]
    fn test_total_tracks_any_sequence_of_mutations() {
        let mut order = order_with(Vec::new(), Money::ZERO);
        let prices = [199, 1, 350, 10, 10, 10, 2500];
        for (i, cents) in prices.iter().enumerate() {
            order.add_item(item("x", *cents, i as u32)).unwrap();
            assert_eq!(order.total(), item_sum(&order));
        }
        for id in [3_u32, 0, 6] {
            order.remove_item(ItemId(id)).unwrap();
            assert_eq!(order.total(), item_sum(&order));
        }
        assert_eq!(order.total(), Money::from_cents(1 + 350 + 10 + 10));
    }

    #[test]
    fn test_total_overflow_is_rejected_and_changes_nothing() {
        let mut order = order_with(vec![item("A", 500, 1)], Money::from_cents(500));
        let before = order.clone();
        let err = order.add_item(item("Gold leaf", i64::MAX, 2)).unwrap_err();
        assert!(matches!(err, OrderError::InvalidArgument(_)));
        assert_eq!(order, before);

        let too_much = vec![item("A", i64::MAX, 1), item("B", 1, 2)];
        assert!(matches!(
            Order::new(OrderId(2), UserId(10), RestaurantId(20), too_much, Money::ZERO),
            Err(OrderError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_max_price_alone_fits() {
        let mut order = order_with(Vec::new(), Money::ZERO);
        order.add_item(item("Gold leaf", i64::MAX, 1)).unwrap();
        assert_eq!(order.total(), Money::from_cents(i64::MAX));
        order.remove_item(ItemId(1)).unwrap();
        assert_eq!(order.total(), Money::ZERO);
    }

    #[test]
    fn test_deserialize_validates_and_recomputes() {
        let original = order_with(vec![item("A", 500, 1), item("B", 750, 2)], Money::from_cents(1250));
        let mut json = serde_json::to_value(&original).unwrap();
        json["total"] = serde_json::json!(1);
        json["status"] = serde_json::json!("Preparing");
        json["rider"] = serde_json::json!(4);

        let decoded: Order = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(decoded.total(), Money::from_cents(1250));
        assert_eq!(decoded.status(), OrderStatus::Preparing);
        assert_eq!(decoded.rider(), Some(RiderId(4)));

        json["items"][0]["price"] = serde_json::json!(-5);
        assert!(serde_json::from_value::<Order>(json).is_err());
    }

    #[test]
    fn test_remove_missing_item_is_not_found_and_changes_nothing() {
        let mut order = order_with(vec![item("A", 500, 1)], Money::from_cents(500));
        let before = order.clone();
        let err = order.remove_item(ItemId(42)).unwrap_err();
        assert!(matches!(err, OrderError::ItemNotFound { .. }));
        assert_eq!(order, before);
    }

    #[test]
    fn test_remove_item_takes_first_match_only() {
        let mut order = order_with(
            vec![item("Cola", 200, 5), item("Cola", 200, 5)],
            Money::from_cents(400),
        );
        order.remove_item(ItemId(5)).unwrap();
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.total(), Money::from_cents(200));
    }

    #[test]
    fn test_rider_reassignment_last_write_wins() {
        let mut order = order_with(Vec::new(), Money::ZERO);
        assert_eq!(order.assign_rider(RiderId(1)), None);
        assert_eq!(order.assign_rider(RiderId(2)), Some(RiderId(1)));
        assert_eq!(order.rider(), Some(RiderId(2)));
    }

    #[test]
    fn test_status_updates_are_unguarded() {
        let mut order = order_with(Vec::new(), Money::ZERO);
        assert_eq!(order.update_status(OrderStatus::Delivered), OrderStatus::Placed);
        assert_eq!(order.status(), OrderStatus::Delivered);
        // Even out of a terminal state.
        order.update_status(OrderStatus::Preparing);
        assert_eq!(order.status(), OrderStatus::Preparing);
    }

    #[test]
    fn test_clone_deep_copies_items_and_shares_ids() {
        let mut original = order_with(vec![item("A", 500, 1)], Money::from_cents(500));
        original.assign_rider(RiderId(3));
        let mut copy = original.clone();

        copy.add_item(item("B", 100, 2)).unwrap();
        assert_eq!(original.items().len(), 1);
        assert_eq!(original.total(), Money::from_cents(500));
        assert_eq!(copy.customer(), original.customer());
        assert_eq!(copy.rider(), Some(RiderId(3)));
    }

    #[test]
    fn test_reorder_resets_lifecycle() {
        let mut original = order_with(vec![item("A", 500, 1)], Money::from_cents(500));
        original.assign_rider(RiderId(3));
        original.update_status(OrderStatus::Delivered);

        let again = original.reorder(OrderId(2));
        assert_eq!(again.id(), OrderId(2));
        assert_eq!(again.status(), OrderStatus::Placed);
        assert_eq!(again.rider(), None);
        assert_eq!(again.items(), original.items());
        assert_eq!(again.total(), original.total());
    }

    #[test]
    fn test_status_parsing_is_lenient() {
        assert_eq!("OutForDelivery".parse::<OrderStatus>().unwrap(), OrderStatus::OutForDelivery);
        assert_eq!("out_for_delivery".parse::<OrderStatus>().unwrap(), OrderStatus::OutForDelivery);
        assert_eq!("Out for delivery".parse::<OrderStatus>().unwrap(), OrderStatus::OutForDelivery);
        assert_eq!("CANCELED".parse::<OrderStatus>().unwrap(), OrderStatus::Cancelled);
        assert!(matches!(
            "lost".parse::<OrderStatus>(),
            Err(OrderError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_forward_transitions() {
        use OrderStatus::*;
        assert!(Placed.can_transition_to(Confirmed));
        assert!(Placed.can_transition_to(Delivered));
        assert!(Preparing.can_transition_to(Cancelled));
        assert!(!Preparing.can_transition_to(Confirmed));
        assert!(!Delivered.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Placed));
        assert!(!Placed.can_transition_to(Placed));
    }
}
