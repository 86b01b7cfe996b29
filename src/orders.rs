//! Order history

use std::fmt;

use jiff::civil::Date;
use rusty_money::{Money, iso::Currency};

use crate::products::ProductId;

/// Fulfilment status of a past order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Delivered to the customer.
    Delivered,

    /// Shipped, not yet delivered.
    InTransit,

    /// Placed, not yet shipped.
    Processing,

    /// Cancelled before delivery.
    Cancelled,

    /// Any other status label.
    Other(String),
}

impl OrderStatus {
    /// Display label.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Delivered => "Delivered",
            Self::InTransit => "In Transit",
            Self::Processing => "Processing",
            Self::Cancelled => "Cancelled",
            Self::Other(label) => label,
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        match value.trim() {
            "Delivered" => Self::Delivered,
            "In Transit" => Self::InTransit,
            "Processing" => Self::Processing,
            "Cancelled" => Self::Cancelled,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product line on a past order, captured at purchase time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine<'a> {
    /// Product that was bought
    pub product_id: ProductId,

    /// Title at purchase time
    pub title: String,

    /// Unit price paid
    pub price: Money<'a, Currency>,

    /// Units bought
    pub quantity: u32,
}

impl<'a> OrderLine<'a> {
    /// `price * quantity`.
    pub fn line_total(&self) -> Money<'a, Currency> {
        Money::from_minor(
            self.price
                .to_minor_units()
                .saturating_mul(i64::from(self.quantity)),
            self.price.currency(),
        )
    }
}

/// A past order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order<'a> {
    /// Order reference, e.g. `ORD-12345678`
    pub id: String,

    /// Date the order was placed
    pub placed_on: Date,

    /// Fulfilment status
    pub status: OrderStatus,

    /// Amount charged
    pub total: Money<'a, Currency>,

    /// Products on the order
    pub lines: Vec<OrderLine<'a>>,
}

impl Order<'_> {
    /// Reviews can only be written for delivered orders.
    pub fn can_review(&self) -> bool {
        self.status == OrderStatus::Delivered
    }

    /// Returns can only be started for delivered orders.
    pub fn can_return(&self) -> bool {
        self.status == OrderStatus::Delivered
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Placement date as e.g. "January 15, 2024".
    pub fn placed_on_display(&self) -> String {
        self.placed_on.strftime("%B %-d, %Y").to_string()
    }
}

/// Past orders, in the order they are listed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderHistory<'a> {
    orders: Vec<Order<'a>>,
}

impl<'a> OrderHistory<'a> {
    /// Create a history from orders.
    pub fn new(orders: impl Into<Vec<Order<'a>>>) -> Self {
        Self {
            orders: orders.into(),
        }
    }

    /// Orders in listing order.
    pub fn orders(&self) -> &[Order<'a>] {
        &self.orders
    }

    /// Look up an order by reference.
    pub fn order(&self, id: &str) -> Option<&Order<'a>> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Number of orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether there are no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
