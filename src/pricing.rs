//! Pricing
//!
//! Order summary for a set of cart line items: subtotal, sales tax, shipping
//! and grand total.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};

use crate::cart::CartLineItem;

/// Sales tax rate applied to the subtotal (8%).
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Subtotals strictly above this (in minor units) ship for free.
pub const FREE_SHIPPING_THRESHOLD: i64 = 3_500;

/// Flat shipping fee in minor units.
pub const SHIPPING_FEE: i64 = 599;

/// Computed totals for the current cart contents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSummary<'a> {
    subtotal: Money<'a, Currency>,
    tax: Money<'a, Currency>,
    shipping: Money<'a, Currency>,
    total: Money<'a, Currency>,
    item_count: u64,
}

impl<'a> OrderSummary<'a> {
    /// Sum of `price * quantity` over all line items.
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Sales tax on the subtotal.
    pub fn tax(&self) -> Money<'a, Currency> {
        self.tax
    }

    /// Shipping charge; zero when the subtotal qualifies for free shipping.
    pub fn shipping(&self) -> Money<'a, Currency> {
        self.shipping
    }

    /// Subtotal plus tax plus shipping.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Total quantity across all line items.
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Whether shipping is free.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.to_minor_units() == 0
    }

    /// How much more to spend to reach the free shipping threshold.
    ///
    /// `None` once shipping is already free.
    pub fn free_shipping_shortfall(&self) -> Option<Money<'a, Currency>> {
        (!self.has_free_shipping()).then(|| {
            Money::from_minor(
                FREE_SHIPPING_THRESHOLD.saturating_sub(self.subtotal.to_minor_units()),
                self.subtotal.currency(),
            )
        })
    }
}

/// Summarise line items priced in `currency`.
pub fn summarize<'a>(items: &[CartLineItem<'_>], currency: &'a Currency) -> OrderSummary<'a> {
    let subtotal = items
        .iter()
        .map(CartLineItem::line_total_minor)
        .fold(0_i64, i64::saturating_add);

    let item_count = items
        .iter()
        .map(|item| u64::from(item.quantity()))
        .sum();

    let tax = tax_on(subtotal);
    let shipping = shipping_for(subtotal);
    let total = subtotal.saturating_add(tax).saturating_add(shipping);

    OrderSummary {
        subtotal: Money::from_minor(subtotal, currency),
        tax: Money::from_minor(tax, currency),
        shipping: Money::from_minor(shipping, currency),
        total: Money::from_minor(total, currency),
        item_count,
    }
}

/// Tax in minor units, rounded half away from zero.
pub fn tax_on(subtotal_minor: i64) -> i64 {
    let applied = Percentage::from(TAX_RATE) * Decimal::from(subtotal_minor);

    applied
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(i64::MAX)
}

/// Shipping charge in minor units for a subtotal.
pub fn shipping_for(subtotal_minor: i64) -> i64 {
    if subtotal_minor > FREE_SHIPPING_THRESHOLD {
        0
    } else {
        SHIPPING_FEE
    }
}
