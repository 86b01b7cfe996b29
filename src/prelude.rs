//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLineItem, CartSnapshot, SnapshotError},
    catalog::{Catalog, CatalogError},
    display::DisplayError,
    fixtures::{Fixture, FixtureError},
    orders::{Order, OrderHistory, OrderLine, OrderStatus},
    pricing::{FREE_SHIPPING_THRESHOLD, OrderSummary, SHIPPING_FEE, TAX_RATE, summarize},
    products::{Product, ProductId},
    query::{PriceBracket, QueryParameters, SortKey, query},
    reviews::ReviewCounts,
};
