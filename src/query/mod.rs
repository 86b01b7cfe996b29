//! Catalog Query Engine
//!
//! Narrows a product collection by free-text search, category and price
//! bracket, then orders the survivors by a sort key. The whole pipeline is a
//! pure function of its inputs and is re-run whenever a parameter changes.

use tracing::debug;

use crate::products::Product;

pub mod brackets;
pub mod sort;

pub use brackets::PriceBracket;
pub use sort::SortKey;

/// Query parameters owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    /// Free-text search over titles and descriptions.
    pub search_text: Option<String>,

    /// Exact, case-insensitive category filter.
    pub category: Option<String>,

    /// Price range filter.
    pub price_bracket: PriceBracket,

    /// Result ordering.
    pub sort_key: SortKey,
}

impl QueryParameters {
    /// Set the search text.
    #[must_use]
    pub fn with_search_text(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = Some(search_text.into());
        self
    }

    /// Set the category filter.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the price bracket.
    #[must_use]
    pub fn with_price_bracket(mut self, price_bracket: PriceBracket) -> Self {
        self.price_bracket = price_bracket;
        self
    }

    /// Set the sort key.
    #[must_use]
    pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// Search text, if non-empty.
    pub fn active_search_text(&self) -> Option<&str> {
        self.search_text.as_deref().filter(|text| !text.is_empty())
    }

    /// Category filter, if non-empty.
    pub fn active_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|category| !category.is_empty())
    }

    /// Heading for the results listing.
    pub fn heading(&self) -> String {
        if let Some(text) = self.active_search_text() {
            return format!("Results for \"{text}\"");
        }

        if let Some(category) = self.active_category() {
            let mut chars = category.chars();
            let capitalised: String = chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect())
                .unwrap_or_default();

            return format!("{capitalised} Products");
        }

        "Featured Products".to_string()
    }
}

/// Filter and sort `products` according to `params`.
///
/// Returns references to the input products; nothing is copied or modified.
/// Accepts any iterator of product references, so a previous result can be
/// queried again.
pub fn query<'c, 'a, I>(products: I, params: &QueryParameters) -> Vec<&'c Product<'a>>
where
    I: IntoIterator<Item = &'c Product<'a>>,
    'a: 'c,
{
    let search = params.active_search_text().map(str::to_lowercase);
    let category = params.active_category().map(str::to_lowercase);
    let bracket = params.price_bracket;

    let mut results: Vec<&'c Product<'a>> = products
        .into_iter()
        .filter(|product| {
            search
                .as_deref()
                .is_none_or(|needle| product.matches_search(needle))
        })
        .filter(|product| {
            category
                .as_deref()
                .is_none_or(|category| product.in_category(category))
        })
        .filter(|product| bracket.contains(&product.price))
        .collect();

    params.sort_key.sort(&mut results);

    debug!(
        search = search.as_deref(),
        category = category.as_deref(),
        bracket = %bracket,
        sort = %params.sort_key,
        results = results.len(),
        "catalog query"
    );

    results
}
