//! Storefront
//!
//! Catalog querying and cart aggregation for a small online storefront:
//! filter and sort products, keep a cart of line items and price it with tax
//! and shipping rules, and render the results in the terminal.

pub mod cart;
pub mod catalog;
pub mod cli;
pub mod display;
pub mod fixtures;
pub mod logging;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod query;
pub mod reviews;
