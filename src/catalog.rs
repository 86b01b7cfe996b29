//! Catalog

use rustc_hash::{FxHashMap, FxHashSet};
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    products::{Product, ProductId},
    query::{QueryParameters, query},
};

/// Errors raised while assembling a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share the same identifier.
    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),

    /// A product is priced in a different currency (product id, product currency, catalog currency).
    #[error("product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),
}

/// The static, session-fixed collection of products.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    products: Vec<Product<'a>>,
    index: FxHashMap<ProductId, usize>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create a catalog from products in display ("featured") order.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateProduct`]: an identifier appears twice.
    /// - [`CatalogError::CurrencyMismatch`]: a price is not in `currency`.
    pub fn new(
        products: impl Into<Vec<Product<'a>>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let products = products.into();
        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            let prices = std::iter::once(&product.price).chain(product.original_price.iter());

            for price in prices {
                let price_currency = price.currency();

                if price_currency != currency {
                    return Err(CatalogError::CurrencyMismatch(
                        product.id,
                        price_currency.iso_alpha_code,
                        currency.iso_alpha_code,
                    ));
                }
            }

            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
        }

        Ok(Self {
            products,
            index,
            currency,
        })
    }

    /// Look up a product for its detail view.
    ///
    /// `None` is the not-found state; callers render a fallback for it.
    pub fn product(&self, id: ProductId) -> Option<&Product<'a>> {
        self.index
            .get(&id)
            .and_then(|&position| self.products.get(position))
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product<'a>] {
        &self.products
    }

    /// Distinct lower-cased categories, in the order they first appear.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();

        self.products
            .iter()
            .map(|product| product.category.to_lowercase())
            .filter(|category| seen.insert(category.clone()))
            .collect()
    }

    /// Run a catalog query against every product.
    pub fn query(&self, params: &QueryParameters) -> Vec<&Product<'a>> {
        query(&self.products, params)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Currency every price in the catalog uses.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{
        Money,
        iso::{GBP, USD},
    };
    use testresult::TestResult;

    use super::*;

    fn products<'a>() -> Vec<Product<'a>> {
        vec![
            Product::new(1, "Headphones", "Electronics", Money::from_minor(29_999, USD)),
            Product::new(2, "Jeans", "Clothing", Money::from_minor(5_950, USD)),
            Product::new(3, "Speaker", "electronics", Money::from_minor(9_900, USD)),
        ]
    }

    #[test]
    fn product_lookup_finds_known_ids() -> TestResult {
        let catalog = Catalog::new(products(), USD)?;

        let product = catalog.product(ProductId(2)).ok_or("expected product 2")?;

        assert_eq!(product.title, "Jeans");

        Ok(())
    }

    #[test]
    fn product_lookup_reports_not_found() -> TestResult {
        let catalog = Catalog::new(products(), USD)?;

        assert!(catalog.product(ProductId(99)).is_none());

        Ok(())
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut products = products();
        products.push(Product::new(2, "Other Jeans", "Clothing", Money::from_minor(100, USD)));

        let result = Catalog::new(products, USD);

        assert_eq!(result.err(), Some(CatalogError::DuplicateProduct(ProductId(2))));
    }

    #[test]
    fn currency_mismatch_is_rejected() {
        let mut products = products();
        products.push(Product::new(4, "Tea", "Grocery", Money::from_minor(250, GBP)));

        let result = Catalog::new(products, USD);

        assert_eq!(
            result.err(),
            Some(CatalogError::CurrencyMismatch(
                ProductId(4),
                GBP.iso_alpha_code,
                USD.iso_alpha_code,
            ))
        );
    }

    #[test]
    fn categories_are_distinct_and_lower_cased() -> TestResult {
        let catalog = Catalog::new(products(), USD)?;

        assert_eq!(catalog.categories(), vec!["electronics", "clothing"]);

        Ok(())
    }

    #[test]
    fn len_and_is_empty() -> TestResult {
        let catalog = Catalog::new(products(), USD)?;
        let empty = Catalog::new(Vec::new(), USD)?;

        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert!(empty.is_empty());
        assert_eq!(empty.currency(), USD);

        Ok(())
    }
}
