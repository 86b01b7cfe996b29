//! Fixtures
//!
//! YAML fixture sets standing in for the storefront's product and order
//! data. A set named `demo` lives in `products/demo.yml` and
//! `orders/demo.yml` under the fixture base path.

use std::{fs, path::PathBuf};

use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::{Catalog, CatalogError},
    fixtures::{orders::OrdersFixture, products::ProductsFixture},
    orders::{Order, OrderHistory},
    products::Product,
};

pub mod orders;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid rating
    #[error("Invalid rating: {0}")]
    InvalidRating(String),

    /// Discount outside 0-100
    #[error("Invalid discount for product {0}: {1}%")]
    InvalidDiscount(u32, u8),

    /// Original price lower than the selling price
    #[error("Original price of product {0} is below its price")]
    OriginalPriceBelowPrice(u32),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between fixture entries
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products loaded yet; currency unknown")]
    NoCurrency,

    /// Catalog construction error
    #[error("Failed to create catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Products in catalog order
    products: Vec<Product<'a>>,

    /// Orders in listing order
    orders: Vec<Order<'a>>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: Vec::new(),
            orders: Vec::new(),
            currency: None,
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a product is
    /// invalid, or if there are currency mismatches.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        for product_fixture in fixture.products {
            // Parse to get currency first (before creating Product)
            let (_minor_units, currency) = products::parse_price(&product_fixture.price)?;

            self.ensure_currency(currency)?;

            let product: Product<'a> = product_fixture.try_into()?;
            self.products.push(product);
        }

        debug!(path = %file_path.display(), products = self.products.len(), "loaded products");

        Ok(self)
    }

    /// Load orders from a YAML fixture file
    ///
    /// Products must be loaded first so the currency is known.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if no products
    /// have been loaded, or if an order uses another currency.
    pub fn load_orders(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let currency = self.currency.ok_or(FixtureError::NoCurrency)?;

        let file_path = self.base_path.join("orders").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: OrdersFixture = serde_norway::from_str(&contents)?;

        for order_fixture in fixture.orders {
            self.orders.push(order_fixture.try_into_order(currency)?);
        }

        debug!(path = %file_path.display(), orders = self.orders.len(), "loaded orders");

        Ok(self)
    }

    /// Load a complete fixture set (products and orders with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_products(name)?.load_orders(name)?;

        Ok(fixture)
    }

    /// Load a complete fixture set from a custom base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set_in(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::with_base_path(base_path);

        fixture.load_products(name)?.load_orders(name)?;

        Ok(fixture)
    }

    /// Build the catalog from the loaded products
    ///
    /// # Errors
    ///
    /// Returns an error if no products are loaded or the catalog rejects them.
    pub fn catalog(&self) -> Result<Catalog<'a>, FixtureError> {
        let currency = self.currency.ok_or(FixtureError::NoCurrency)?;

        Ok(Catalog::new(self.products.clone(), currency)?)
    }

    /// Order history from the loaded orders
    pub fn orders(&self) -> OrderHistory<'a> {
        OrderHistory::new(self.orders.clone())
    }

    /// Currency of the fixture set, once products are loaded
    pub fn currency(&self) -> Option<&'static Currency> {
        self.currency
    }

    fn ensure_currency(&mut self, currency: &'static Currency) -> Result<(), FixtureError> {
        match self.currency {
            Some(existing) if existing != currency => Err(FixtureError::CurrencyMismatch(
                existing.iso_alpha_code.to_string(),
                currency.iso_alpha_code.to_string(),
            )),
            Some(_) => Ok(()),
            None => {
                self.currency = Some(currency);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rusty_money::{Money, iso::USD};
    use tempfile::TempDir;
    use testresult::TestResult;

    use crate::products::ProductId;

    use super::*;

    const PRODUCTS_YAML: &str = r#"
products:
  - id: 1
    title: "Wireless Headphones"
    price: "299.99 USD"
    category: electronics
    rating: "4.8"
  - id: 2
    title: "Classic Jeans"
    price: "59.50 USD"
    category: clothing
    rating: "4.5"
    prime: true
"#;

    const ORDERS_YAML: &str = r#"
orders:
  - id: ORD-1
    date: 2024-01-15
    status: Delivered
    total: "299.99 USD"
    items:
      - id: 1
        title: "Wireless Headphones"
        price: "299.99 USD"
"#;

    fn write_set(dir: &TempDir, name: &str, products: &str, orders: &str) -> TestResult {
        fs::create_dir_all(dir.path().join("products"))?;
        fs::create_dir_all(dir.path().join("orders"))?;
        fs::write(dir.path().join("products").join(format!("{name}.yml")), products)?;
        fs::write(dir.path().join("orders").join(format!("{name}.yml")), orders)?;

        Ok(())
    }

    #[test]
    fn loads_a_complete_set() -> TestResult {
        let dir = TempDir::new()?;
        write_set(&dir, "small", PRODUCTS_YAML, ORDERS_YAML)?;

        let fixture = Fixture::from_set_in(dir.path(), "small")?;
        let catalog = fixture.catalog()?;

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.currency(), USD);
        assert_eq!(
            catalog.product(ProductId(2)).map(|product| product.price),
            Some(Money::from_minor(5_950, USD))
        );
        assert_eq!(fixture.orders().len(), 1);

        Ok(())
    }

    #[test]
    fn mixed_currencies_are_rejected() -> TestResult {
        let dir = TempDir::new()?;
        let products = PRODUCTS_YAML.replace("59.50 USD", "59.50 GBP");
        write_set(&dir, "mixed", &products, ORDERS_YAML)?;

        let result = Fixture::from_set_in(dir.path(), "mixed");

        assert!(matches!(result, Err(FixtureError::CurrencyMismatch(_, _))));

        Ok(())
    }

    #[test]
    fn duplicate_ids_are_rejected_when_building_the_catalog() -> TestResult {
        let dir = TempDir::new()?;
        let products = PRODUCTS_YAML.replace("id: 2", "id: 1");
        write_set(&dir, "dupes", &products, ORDERS_YAML)?;

        let fixture = Fixture::from_set_in(dir.path(), "dupes")?;

        assert!(matches!(
            fixture.catalog(),
            Err(FixtureError::Catalog(CatalogError::DuplicateProduct(ProductId(1))))
        ));

        Ok(())
    }

    #[test]
    fn orders_need_products_first() {
        let mut fixture = Fixture::with_base_path("./does-not-exist");

        assert!(matches!(
            fixture.load_orders("anything"),
            Err(FixtureError::NoCurrency)
        ));
    }

    #[test]
    fn missing_files_surface_io_errors() {
        let mut fixture = Fixture::with_base_path("./does-not-exist");

        assert!(matches!(
            fixture.load_products("anything"),
            Err(FixtureError::Io(_))
        ));
    }
}
