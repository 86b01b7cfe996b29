//! Products

use std::{fmt, num::ParseIntError, str::FromStr};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Unique product identifier within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product identifier
    pub id: ProductId,

    /// Product title
    pub title: String,

    /// Long-form description
    pub description: String,

    /// Current selling price
    pub price: Money<'a, Currency>,

    /// Pre-discount price, never below `price`
    pub original_price: Option<Money<'a, Currency>>,

    /// Advertised discount in whole percent (0-100)
    pub discount: Option<u8>,

    /// Image URL
    pub image: String,

    /// Category name, matched case-insensitively
    pub category: String,

    /// Average rating in `0..=5`
    pub rating: Decimal,

    /// Number of reviews, if known
    pub review_count: Option<u32>,

    /// Eligible for expedited shipping
    pub prime: bool,
}

impl<'a> Product<'a> {
    /// Creates a product with the required fields; everything else starts empty.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        category: impl Into<String>,
        price: Money<'a, Currency>,
    ) -> Self {
        Self {
            id: ProductId(id),
            title: title.into(),
            description: String::new(),
            price,
            original_price: None,
            discount: None,
            image: String::new(),
            category: category.into(),
            rating: Decimal::ZERO,
            review_count: None,
            prime: false,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the pre-discount price and advertised discount.
    #[must_use]
    pub fn with_original_price(
        mut self,
        original_price: Money<'a, Currency>,
        discount: Option<u8>,
    ) -> Self {
        self.original_price = Some(original_price);
        self.discount = discount;
        self
    }

    /// Sets the rating, clamped to `0..=5`.
    #[must_use]
    pub fn with_rating(mut self, rating: Decimal) -> Self {
        self.rating = rating.clamp(Decimal::ZERO, MAX_RATING);
        self
    }

    /// Sets the review count.
    #[must_use]
    pub fn with_review_count(mut self, review_count: u32) -> Self {
        self.review_count = Some(review_count);
        self
    }

    /// Marks the product as eligible for expedited shipping.
    #[must_use]
    pub fn with_prime(mut self, prime: bool) -> Self {
        self.prime = prime;
        self
    }

    /// Sets the image URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Amount saved against the original price, when there is one.
    pub fn savings(&self) -> Option<Money<'a, Currency>> {
        let original = self.original_price?;
        let difference = original.to_minor_units() - self.price.to_minor_units();

        (difference > 0).then(|| Money::from_minor(difference, self.price.currency()))
    }

    /// Number of filled stars shown for the rating.
    pub fn full_stars(&self) -> u8 {
        self.rating
            .clamp(Decimal::ZERO, MAX_RATING)
            .floor()
            .to_u8()
            .unwrap_or_default()
    }

    /// Whether the title or description contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Whether the product belongs to `category`.
    ///
    /// `category` must already be lower-cased.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;

    use super::*;

    fn headphones<'a>() -> Product<'a> {
        Product::new(1, "Wireless Headphones", "Electronics", Money::from_minor(29_999, USD))
            .with_description("Noise cancelling over-ear headphones")
    }

    #[test]
    fn savings_is_original_minus_price() {
        let product = headphones().with_original_price(Money::from_minor(34_999, USD), Some(14));

        assert_eq!(product.savings(), Some(Money::from_minor(5_000, USD)));
    }

    #[test]
    fn savings_is_none_without_a_higher_original_price() {
        let without = headphones();
        let equal = headphones().with_original_price(Money::from_minor(29_999, USD), None);

        assert_eq!(without.savings(), None);
        assert_eq!(equal.savings(), None);
    }

    #[test]
    fn full_stars_floors_the_rating() {
        let product = headphones().with_rating(Decimal::new(47, 1));

        assert_eq!(product.full_stars(), 4);
    }

    #[test]
    fn with_rating_clamps_to_five() {
        let product = headphones().with_rating(Decimal::new(72, 1));

        assert_eq!(product.rating, MAX_RATING);
        assert_eq!(product.full_stars(), 5);
    }

    #[test]
    fn matches_search_checks_title_and_description() {
        let product = headphones();

        assert!(product.matches_search("wireless"));
        assert!(product.matches_search("over-ear"));
        assert!(!product.matches_search("keyboard"));
    }

    #[test]
    fn in_category_ignores_case() {
        let product = headphones();

        assert!(product.in_category("electronics"));
        assert!(!product.in_category("books"));
    }

    #[test]
    fn product_id_parses_and_displays() -> Result<(), ParseIntError> {
        let id: ProductId = " 42 ".parse()?;

        assert_eq!(id, ProductId(42));
        assert_eq!(id.to_string(), "42");

        Ok(())
    }
}
