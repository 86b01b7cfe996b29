//! Order Fixtures

use jiff::civil::Date;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, products::parse_price},
    orders::{Order, OrderLine, OrderStatus},
};

/// Wrapper for orders in YAML
#[derive(Debug, Deserialize)]
pub struct OrdersFixture {
    /// Orders in listing order
    pub orders: Vec<OrderFixture>,
}

/// Order Fixture
#[derive(Debug, Deserialize)]
pub struct OrderFixture {
    /// Order reference
    pub id: String,

    /// Placement date (e.g., 2024-01-15)
    pub date: Date,

    /// Status label (e.g., "In Transit")
    pub status: String,

    /// Amount charged (e.g., "299.99 USD")
    pub total: String,

    /// Products on the order
    pub items: Vec<OrderLineFixture>,
}

/// Order Line Fixture
#[derive(Debug, Deserialize)]
pub struct OrderLineFixture {
    /// Product id
    pub id: u32,

    /// Title at purchase time
    pub title: String,

    /// Unit price paid (e.g., "59.50 USD")
    pub price: String,

    /// Units bought
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl OrderFixture {
    /// Convert into an order, checking every amount is in `currency`.
    ///
    /// # Errors
    ///
    /// Returns an error if a price cannot be parsed or is in another currency.
    pub fn try_into_order<'a>(self, currency: &'static Currency) -> Result<Order<'a>, FixtureError> {
        let total = parse_money(&self.total, currency)?;

        let lines = self
            .items
            .into_iter()
            .map(|line| {
                Ok(OrderLine {
                    product_id: line.id.into(),
                    title: line.title,
                    price: parse_money(&line.price, currency)?,
                    quantity: line.quantity.max(1),
                })
            })
            .collect::<Result<Vec<_>, FixtureError>>()?;

        Ok(Order {
            id: self.id,
            placed_on: self.date,
            status: OrderStatus::from(self.status.as_str()),
            total,
            lines,
        })
    }
}

fn parse_money<'a>(s: &str, currency: &'static Currency) -> Result<Money<'a, Currency>, FixtureError> {
    let (minor_units, parsed_currency) = parse_price(s)?;

    if parsed_currency != currency {
        return Err(FixtureError::CurrencyMismatch(
            currency.iso_alpha_code.to_string(),
            parsed_currency.iso_alpha_code.to_string(),
        ));
    }

    Ok(Money::from_minor(minor_units, currency))
}
