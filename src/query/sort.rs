//! Sort keys

use std::{cmp::Reverse, fmt};

use tracing::debug;

use crate::products::Product;

/// Ordering applied to query results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Featured,

    /// Cheapest first.
    PriceLow,

    /// Most expensive first.
    PriceHigh,

    /// Best rated first.
    Rating,

    /// Highest id first.
    Newest,
}

impl SortKey {
    /// Every sort key, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Featured,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Rating,
        Self::Newest,
    ];

    /// Wire name, as used by the listing page's sort selector.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Newest => "newest",
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Customer Reviews",
            Self::Newest => "Newest Arrivals",
        }
    }

    /// Stable in-place sort; equal keys keep their relative order.
    pub fn sort(self, products: &mut [&Product<'_>]) {
        match self {
            Self::Featured => {}
            Self::PriceLow => products.sort_by_key(|product| product.price.to_minor_units()),
            Self::PriceHigh => {
                products.sort_by_key(|product| Reverse(product.price.to_minor_units()));
            }
            Self::Rating => products.sort_by_key(|product| Reverse(product.rating)),
            Self::Newest => products.sort_by_key(|product| Reverse(product.id)),
        }
    }
}

impl From<&str> for SortKey {
    /// Unknown names fall back to [`SortKey::Featured`].
    fn from(value: &str) -> Self {
        let trimmed = value.trim();

        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| {
                debug!(sort = trimmed, "unknown sort key, using featured");
                Self::Featured
            })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
