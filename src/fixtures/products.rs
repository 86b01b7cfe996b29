//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    products::{MAX_RATING, Product},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Products in catalog order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id
    pub id: u32,

    /// Product title
    pub title: String,

    /// Product description
    #[serde(default)]
    pub description: String,

    /// Product price (e.g., "29.99 USD")
    pub price: String,

    /// Pre-discount price (e.g., "39.99 USD")
    #[serde(default)]
    pub original_price: Option<String>,

    /// Discount in whole percent
    #[serde(default)]
    pub discount: Option<u8>,

    /// Image URL
    #[serde(default)]
    pub image: String,

    /// Category name
    pub category: String,

    /// Rating (e.g., "4.5")
    pub rating: String,

    /// Number of reviews
    #[serde(default)]
    pub review_count: Option<u32>,

    /// Expedited shipping eligibility
    #[serde(default)]
    pub prime: bool,
}

impl TryFrom<ProductFixture> for Product<'_> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;
        let price = Money::from_minor(minor_units, currency);

        let original_price = fixture
            .original_price
            .as_deref()
            .map(parse_price)
            .transpose()?
            .map(|(original_minor, original_currency)| {
                if original_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        currency.iso_alpha_code.to_string(),
                        original_currency.iso_alpha_code.to_string(),
                    ));
                }

                if original_minor < minor_units {
                    return Err(FixtureError::OriginalPriceBelowPrice(fixture.id));
                }

                Ok(Money::from_minor(original_minor, currency))
            })
            .transpose()?;

        if let Some(discount) = fixture.discount
            && discount > 100
        {
            return Err(FixtureError::InvalidDiscount(fixture.id, discount));
        }

        let rating = parse_rating(&fixture.rating)?;

        Ok(Product {
            id: fixture.id.into(),
            title: fixture.title,
            description: fixture.description,
            price,
            original_price,
            discount: fixture.discount,
            image: fixture.image,
            category: fixture.category,
            rating,
            review_count: fixture.review_count,
            prime: fixture.prime,
        })
    }
}

/// Parse price string (e.g., "29.99 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a non-negative decimal, or if the
/// currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}

/// Parse a rating string (e.g., "4.5") in the range `0..=5`
///
/// # Errors
///
/// Returns [`FixtureError::InvalidRating`] if the value is not a decimal or is out of range.
pub fn parse_rating(s: &str) -> Result<Decimal, FixtureError> {
    let rating = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidRating(s.to_string()))?;

    if rating < Decimal::ZERO || rating > MAX_RATING {
        return Err(FixtureError::InvalidRating(s.to_string()));
    }

    Ok(rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> ProductFixture {
        ProductFixture {
            id: 1,
            title: "Wireless Headphones".to_string(),
            description: String::new(),
            price: "299.99 USD".to_string(),
            original_price: Some("349.99 USD".to_string()),
            discount: Some(14),
            image: String::new(),
            category: "electronics".to_string(),
            rating: "4.8".to_string(),
            review_count: Some(2_847),
            prime: true,
        }
    }

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2.99USD");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_negative_amounts() {
        let result = parse_price("-2.99 USD");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_accepts_known_currencies() -> Result<(), FixtureError> {
        let (usd_minor, usd) = parse_price("349.99 USD")?;
        let (gbp_minor, gbp) = parse_price("2.50 GBP")?;

        assert_eq!(usd_minor, 34_999);
        assert_eq!(usd, USD);
        assert_eq!(gbp_minor, 250);
        assert_eq!(gbp, GBP);

        Ok(())
    }

    #[test]
    fn parse_rating_accepts_range_bounds() -> Result<(), FixtureError> {
        assert_eq!(parse_rating("0")?, Decimal::ZERO);
        assert_eq!(parse_rating(" 5.0 ")?, Decimal::new(50, 1));

        Ok(())
    }

    #[test]
    fn parse_rating_rejects_out_of_range_and_garbage() {
        assert!(matches!(parse_rating("5.1"), Err(FixtureError::InvalidRating(_))));
        assert!(matches!(parse_rating("-1"), Err(FixtureError::InvalidRating(_))));
        assert!(matches!(parse_rating("great"), Err(FixtureError::InvalidRating(_))));
    }

    #[test]
    fn fixture_converts_into_product() -> Result<(), FixtureError> {
        let product = Product::try_from(fixture())?;

        assert_eq!(product.id.0, 1);
        assert_eq!(product.price, Money::from_minor(29_999, USD));
        assert_eq!(product.original_price, Some(Money::from_minor(34_999, USD)));
        assert_eq!(product.discount, Some(14));
        assert_eq!(product.rating, Decimal::new(48, 1));
        assert!(product.prime);

        Ok(())
    }

    #[test]
    fn original_price_below_price_is_rejected() {
        let mut fixture = fixture();
        fixture.original_price = Some("199.99 USD".to_string());

        let result = Product::try_from(fixture);

        assert!(matches!(result, Err(FixtureError::OriginalPriceBelowPrice(1))));
    }

    #[test]
    fn original_price_in_another_currency_is_rejected() {
        let mut fixture = fixture();
        fixture.original_price = Some("349.99 GBP".to_string());

        let result = Product::try_from(fixture);

        assert!(matches!(result, Err(FixtureError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn discount_over_100_is_rejected() {
        let mut fixture = fixture();
        fixture.discount = Some(101);

        let result = Product::try_from(fixture);

        assert!(matches!(result, Err(FixtureError::InvalidDiscount(1, 101))));
    }
}
