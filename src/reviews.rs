//! Review counts
//!
//! Products without a review count are shown with a generated one. The
//! generator is seeded so a given seed always produces the same counts, and
//! it is kept apart from the query and pricing code, which stay deterministic.

use std::ops::Range;

use rand::{Rng, SeedableRng, rngs::StdRng};
use rustc_hash::FxHashMap;

use crate::products::{Product, ProductId};

/// Range generated counts are drawn from.
pub const FALLBACK_REVIEW_COUNTS: Range<u32> = 100..1_100;

/// Seeded source of display review counts.
#[derive(Debug)]
pub struct ReviewCounts {
    rng: StdRng,
    generated: FxHashMap<ProductId, u32>,
}

impl ReviewCounts {
    /// Create a generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            generated: FxHashMap::default(),
        }
    }

    /// Review count to display for `product`.
    ///
    /// Uses the product's own count unless it is missing or zero. A generated
    /// count is remembered, so a product keeps the same count for the life of
    /// the generator.
    pub fn count_for(&mut self, product: &Product<'_>) -> u32 {
        if let Some(count) = product.review_count.filter(|&count| count > 0) {
            return count;
        }

        *self
            .generated
            .entry(product.id)
            .or_insert_with(|| self.rng.gen_range(FALLBACK_REVIEW_COUNTS))
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};

    use super::*;

    fn product<'a>(id: u32) -> Product<'a> {
        Product::new(id, "Lamp", "home", Money::from_minor(1_999, USD))
    }

    #[test]
    fn known_counts_are_used_as_is() {
        let mut reviews = ReviewCounts::seeded(7);

        assert_eq!(reviews.count_for(&product(1).with_review_count(2_847)), 2_847);
    }

    #[test]
    fn missing_and_zero_counts_are_generated_in_range() {
        let mut reviews = ReviewCounts::seeded(7);

        let missing = reviews.count_for(&product(1));
        let zero = reviews.count_for(&product(2).with_review_count(0));

        assert!(FALLBACK_REVIEW_COUNTS.contains(&missing), "got {missing}");
        assert!(FALLBACK_REVIEW_COUNTS.contains(&zero), "got {zero}");
    }

    #[test]
    fn generated_counts_are_stable_per_product() {
        let mut reviews = ReviewCounts::seeded(11);

        let first = reviews.count_for(&product(5));
        let _other = reviews.count_for(&product(6));
        let again = reviews.count_for(&product(5));

        assert_eq!(first, again);
    }

    #[test]
    fn same_seed_gives_same_counts() {
        let mut left = ReviewCounts::seeded(42);
        let mut right = ReviewCounts::seeded(42);

        let left_counts: Vec<u32> = (1..=5).map(|id| left.count_for(&product(id))).collect();
        let right_counts: Vec<u32> = (1..=5).map(|id| right.count_for(&product(id))).collect();

        assert_eq!(left_counts, right_counts);
    }
}
