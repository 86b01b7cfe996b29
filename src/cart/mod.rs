//! Cart
//!
//! Process-local shopping cart. Every mutation normalises its input instead
//! of failing, so the cart is always in a renderable state.

use rusty_money::{Money, iso::Currency};
use tracing::{debug, warn};

use crate::{
    catalog::Catalog,
    pricing::{OrderSummary, summarize},
    products::{Product, ProductId},
};

pub mod snapshot;

pub use snapshot::{CartSnapshot, SnapshotError};

/// One entry in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem<'a> {
    product: Product<'a>,
    quantity: u32,
}

impl<'a> CartLineItem<'a> {
    /// Product as captured when it was added.
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Quantity, always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price * quantity`.
    pub fn line_total(&self) -> Money<'a, Currency> {
        Money::from_minor(self.line_total_minor(), self.product.price.currency())
    }

    /// `price * quantity` in minor units.
    pub fn line_total_minor(&self) -> i64 {
        self.product
            .price
            .to_minor_units()
            .saturating_mul(i64::from(self.quantity))
    }
}

/// Shopping cart
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    items: Vec<CartLineItem<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Create an empty cart in the catalog's currency.
    pub fn for_catalog(catalog: &Catalog<'_>) -> Self {
        Self::new(catalog.currency())
    }

    /// Rebuild a cart from a snapshot, taking current product data from `catalog`.
    ///
    /// Entries for products the catalog no longer has are skipped.
    pub fn restore(snapshot: &CartSnapshot, catalog: &Catalog<'a>) -> Self {
        let mut cart = Self::for_catalog(catalog);

        for (id, quantity) in snapshot.iter() {
            match catalog.product(id) {
                Some(product) => cart.add_item(product, quantity),
                None => warn!(product = %id, "skipping unknown product in cart snapshot"),
            }
        }

        cart
    }

    /// Capture product ids and quantities for later restoration.
    pub fn snapshot(&self) -> CartSnapshot {
        self.items
            .iter()
            .map(|item| (item.product.id, item.quantity))
            .collect()
    }

    /// Add `quantity` units of `product`.
    ///
    /// An existing line for the same product id has its quantity increased;
    /// otherwise a new line is appended. A quantity of zero is treated as one.
    /// Products priced in another currency are ignored.
    pub fn add_item(&mut self, product: &Product<'a>, quantity: u32) {
        if product.price.currency() != self.currency {
            warn!(
                product = %product.id,
                currency = product.price.currency().iso_alpha_code,
                cart_currency = self.currency.iso_alpha_code,
                "ignoring product priced in another currency"
            );

            return;
        }

        let quantity = quantity.max(1);

        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(quantity);

            debug!(product = %product.id, quantity = line.quantity, "increased cart quantity");
        } else {
            self.items.push(CartLineItem {
                product: product.clone(),
                quantity,
            });

            debug!(product = %product.id, quantity, "added cart line");
        }
    }

    /// Set the quantity of an existing line.
    ///
    /// Values below one are raised to one; the line is never removed. Unknown
    /// ids are ignored.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) {
        let quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);

        if let Some(line) = self.line_mut(id) {
            line.quantity = quantity;

            debug!(product = %id, quantity, "set cart quantity");
        }
    }

    /// Raise the quantity of a line by one.
    pub fn increment(&mut self, id: ProductId) {
        if let Some(line) = self.line_mut(id) {
            line.quantity = line.quantity.saturating_add(1);
        }
    }

    /// Lower the quantity of a line by one, stopping at one.
    pub fn decrement(&mut self, id: ProductId) {
        if let Some(line) = self.line_mut(id) {
            line.quantity = line.quantity.saturating_sub(1).max(1);
        }
    }

    /// Remove the line for `id`, if present.
    pub fn remove_item(&mut self, id: ProductId) {
        let before = self.items.len();

        self.items.retain(|item| item.product.id != id);

        if self.items.len() != before {
            debug!(product = %id, "removed cart line");
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();

        debug!("cleared cart");
    }

    /// Line items in the order they were first added.
    pub fn items(&self) -> &[CartLineItem<'a>] {
        &self.items
    }

    /// Line for `id`, if present.
    pub fn line(&self, id: ProductId) -> Option<&CartLineItem<'a>> {
        self.items.iter().find(|item| item.product.id == id)
    }

    /// Total quantity across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Order summary for the current contents.
    pub fn summary(&self) -> OrderSummary<'static> {
        summarize(&self.items, self.currency)
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLineItem<'a>> {
        self.items.iter_mut().find(|item| item.product.id == id)
    }
}
