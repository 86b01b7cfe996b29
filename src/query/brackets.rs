//! Price brackets

use std::fmt;

use rusty_money::{Money, iso::Currency};
use tracing::debug;

/// A named, fixed price range used for filtering.
///
/// Ranges are inclusive at both ends, so a price sitting exactly on a
/// boundary (25, 50, 100 or 200) belongs to both neighbouring brackets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PriceBracket {
    /// No price filtering.
    #[default]
    All,

    /// 0 to 25
    Under25,

    /// 25 to 50
    From25To50,

    /// 50 to 100
    From50To100,

    /// 100 to 200
    From100To200,

    /// 200 and above
    Over200,
}

impl PriceBracket {
    /// Every bracket, in menu order.
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Under25,
        Self::From25To50,
        Self::From50To100,
        Self::From100To200,
        Self::Over200,
    ];

    /// Wire name, as used by the listing page's price selector.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Under25 => "under-25",
            Self::From25To50 => "25-50",
            Self::From50To100 => "50-100",
            Self::From100To200 => "100-200",
            Self::Over200 => "over-200",
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Prices",
            Self::Under25 => "Under $25",
            Self::From25To50 => "$25 to $50",
            Self::From50To100 => "$50 to $100",
            Self::From100To200 => "$100 to $200",
            Self::Over200 => "$200 & Above",
        }
    }

    /// Inclusive bounds in minor units; `None` for the upper bound means unbounded.
    ///
    /// Returns `None` for [`PriceBracket::All`].
    pub fn bounds(self) -> Option<(i64, Option<i64>)> {
        match self {
            Self::All => None,
            Self::Under25 => Some((0, Some(2_500))),
            Self::From25To50 => Some((2_500, Some(5_000))),
            Self::From50To100 => Some((5_000, Some(10_000))),
            Self::From100To200 => Some((10_000, Some(20_000))),
            Self::Over200 => Some((20_000, None)),
        }
    }

    /// Whether `price` falls inside the bracket.
    pub fn contains(self, price: &Money<'_, Currency>) -> bool {
        let Some((min, max)) = self.bounds() else {
            return true;
        };

        let minor = price.to_minor_units();

        minor >= min && max.is_none_or(|max| minor <= max)
    }
}

impl From<&str> for PriceBracket {
    /// Unknown names fall back to [`PriceBracket::All`].
    fn from(value: &str) -> Self {
        let trimmed = value.trim();

        Self::ALL
            .into_iter()
            .find(|bracket| bracket.as_str().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| {
                debug!(bracket = trimmed, "unknown price bracket, using all");
                Self::All
            })
    }
}

impl fmt::Display for PriceBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
