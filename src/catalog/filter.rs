//! Filter specification for catalog queries.

use crate::domain::{BodyType, FuelType, Transmission, Vehicle};
use serde::{Deserialize, Serialize};

/// A price bucket as offered by the quick-search UI.
///
/// Applied to a [`FilterSpec`] as a half-open interval: a vehicle matches
/// when `min <= price < max`, so adjacent buckets never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

/// Set of optional constraints narrowing the displayed vehicle list.
///
/// Every field is optional; `None` means "no constraint on that dimension".
/// A vehicle passes only if it satisfies every present constraint (logical
/// AND). The empty spec matches everything.
///
/// # Matching rules
///
/// - `brand`, `model`, `color`, `body_type`, `fuel_type`, `transmission`:
///   exact match.
/// - `min_price` inclusive, `max_price` exclusive (the half-open price
///   bucket rule).
/// - `min_year` and `max_year` inclusive.
/// - `max_mileage` inclusive upper bound.
///
/// # Examples
///
/// ```
/// use forecourt::catalog::FilterSpec;
/// use forecourt::domain::BodyType;
///
/// let spec = FilterSpec::default()
///     .with_brand("BMW")
///     .with_body_type(BodyType::Suv)
///     .with_price_range(2_000_000, 3_000_000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<BodyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<FuelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<Transmission>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_mileage: Option<u64>,
}

impl FilterSpec {
    /// Whether the given vehicle satisfies every present constraint.
    #[must_use]
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        if let Some(brand) = &self.brand {
            if &vehicle.brand != brand {
                return false;
            }
        }
        if let Some(model) = &self.model {
            if &vehicle.model != model {
                return false;
            }
        }
        if let Some(min_price) = self.min_price {
            if vehicle.price < min_price {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if vehicle.price >= max_price {
                return false;
            }
        }
        if let Some(min_year) = self.min_year {
            if vehicle.year < min_year {
                return false;
            }
        }
        if let Some(max_year) = self.max_year {
            if vehicle.year > max_year {
                return false;
            }
        }
        if let Some(body_type) = self.body_type {
            if vehicle.body_type != body_type {
                return false;
            }
        }
        if let Some(fuel_type) = self.fuel_type {
            if vehicle.fuel_type != fuel_type {
                return false;
            }
        }
        if let Some(transmission) = self.transmission {
            if vehicle.transmission != transmission {
                return false;
            }
        }
        if let Some(color) = &self.color {
            if &vehicle.color != color {
                return false;
            }
        }
        if let Some(max_mileage) = self.max_mileage {
            if vehicle.mileage > max_mileage {
                return false;
            }
        }
        true
    }

    /// Whether no constraint is present at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Constrains to an exact brand.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Constrains to an exact model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Constrains the price to the half-open interval `[min, max)`.
    #[must_use]
    pub fn with_price_range(mut self, min: u64, max: u64) -> Self {
        self.min_price = Some(min);
        self.max_price = Some(max);
        self
    }

    /// Constrains the price to a quick-search bucket.
    #[must_use]
    pub fn with_price_bucket(self, range: PriceRange) -> Self {
        self.with_price_range(range.min, range.max)
    }

    /// Constrains to model years of `year` or newer.
    #[must_use]
    pub fn with_min_year(mut self, year: i32) -> Self {
        self.min_year = Some(year);
        self
    }

    /// Constrains to an exact body type.
    #[must_use]
    pub fn with_body_type(mut self, body_type: BodyType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Constrains to an exact fuel type.
    #[must_use]
    pub fn with_fuel_type(mut self, fuel_type: FuelType) -> Self {
        self.fuel_type = Some(fuel_type);
        self
    }
}
