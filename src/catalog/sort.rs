//! Sort keys and ordering rules for catalog queries.

use crate::domain::Vehicle;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Named ordering rule applied to a filtered vehicle list.
///
/// The wire names (`price-low`, `year-new`, ...) match the catalog UI's sort
/// dropdown values. Parsing an unknown name falls back to [`Featured`],
/// which is also the default.
///
/// [`Featured`]: SortKey::Featured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Ascending by price.
    PriceLow,
    /// Descending by price.
    PriceHigh,
    /// Descending by year (newest first).
    YearNew,
    /// Ascending by year (oldest first).
    YearOld,
    /// Ascending by mileage.
    MileageLow,
    /// Descending by mileage.
    MileageHigh,
    /// Descending by view count.
    Views,
    /// Featured vehicles first; views descending within each group.
    #[default]
    Featured,
}

impl SortKey {
    /// The UI wire name for this key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::YearNew => "year-new",
            Self::YearOld => "year-old",
            Self::MileageLow => "mileage-low",
            Self::MileageHigh => "mileage-high",
            Self::Views => "views",
            Self::Featured => "featured",
        }
    }

    /// Compares two vehicles under this key.
    ///
    /// Returns [`Ordering::Equal`] for ties; the caller's stable sort then
    /// preserves insertion order, so repeated queries over unchanged input
    /// never reorder equal elements.
    #[must_use]
    pub fn compare(self, a: &Vehicle, b: &Vehicle) -> Ordering {
        match self {
            Self::PriceLow => a.price.cmp(&b.price),
            Self::PriceHigh => b.price.cmp(&a.price),
            Self::YearNew => b.year.cmp(&a.year),
            Self::YearOld => a.year.cmp(&b.year),
            Self::MileageLow => a.mileage.cmp(&b.mileage),
            Self::MileageHigh => b.mileage.cmp(&a.mileage),
            Self::Views => b.views.cmp(&a.views),
            Self::Featured => b
                .is_featured
                .cmp(&a.is_featured)
                .then_with(|| b.views.cmp(&a.views)),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = std::convert::Infallible;

    /// Parses a UI wire name. An unknown sort key behaves as the default,
    /// so this never errors and falls back to [`SortKey::Featured`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "year-new" => Self::YearNew,
            "year-old" => Self::YearOld,
            "mileage-low" => Self::MileageLow,
            "mileage-high" => Self::MileageHigh,
            "views" => Self::Views,
            _ => Self::Featured,
        })
    }
}
