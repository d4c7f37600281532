//! Vehicle domain model and related enums.
//!
//! This module defines the core [`Vehicle`] type representing one inventory
//! item in the dealership catalog, along with its nested [`Specifications`]
//! record and the closed enums for body style, fuel, and transmission.
//!
//! Two companion types support the store's mutation operations:
//!
//! - [`VehicleDraft`]: every caller-suppliable field for creation. The store
//!   assigns `id`, `created_at`, and `views` itself, so the draft cannot
//!   carry them.
//! - [`VehicleUpdate`]: an all-optional partial edit. `None` fields are left
//!   untouched; `id` and `created_at` are not representable, which makes
//!   their immutability a type-level guarantee rather than a runtime check.

use serde::{Deserialize, Serialize};

/// Body style of a vehicle.
///
/// Closed set matching the catalog's filter dimensions. Serialized with the
/// display spellings used by the catalog UI (`"SUV"` in caps, the rest
/// capitalized words).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyType {
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Hatchback,
    Coupe,
    Convertible,
    Wagon,
}

/// Fuel type of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
}

/// Transmission type of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transmission {
    Manual,
    Automatic,
}

/// Technical specification sheet nested inside a vehicle record.
///
/// Apart from `horsepower`, the fields are free-form display strings
/// (e.g. `"0-100 km/h in 4.2s"`). The core never parses them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specifications {
    /// Engine description, e.g. `"3.0L twin-turbo inline-6"`.
    pub engine: String,
    /// Engine power in horsepower.
    pub horsepower: u32,
    /// Torque figure as a display string.
    pub torque: String,
    /// Acceleration figure as a display string.
    pub acceleration: String,
    /// Top speed as a display string.
    pub top_speed: String,
    /// Fuel economy as a display string.
    pub fuel_economy: String,
}

/// Represents one inventory item in the dealership catalog.
///
/// A vehicle is created by an administrative action, which assigns the
/// `id`, `created_at`, and `views` fields. `id` and `created_at` are
/// immutable afterwards; `views` only moves through
/// [`Inventory::increment_views`](crate::store::Inventory::increment_views).
///
/// # Invariants
///
/// - `id` is unique within the owning store and never reused, even after the
///   record is deleted.
/// - `views` is monotonically non-decreasing.
/// - `price` and `mileage` are non-negative by construction (unsigned).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Process-unique identifier assigned at creation.
    pub id: String,
    /// Manufacturer name, exact-matched by catalog filters.
    pub brand: String,
    /// Model name, exact-matched by catalog filters.
    pub model: String,
    /// Model year.
    pub year: i32,
    /// Asking price in whole currency units, currency-agnostic.
    pub price: u64,
    /// Odometer reading.
    pub mileage: u64,
    /// Body style.
    pub body_type: BodyType,
    /// Exterior color, exact-matched by catalog filters.
    pub color: String,
    /// Fuel type.
    pub fuel_type: FuelType,
    /// Transmission type.
    pub transmission: Transmission,
    /// Ordered image locators (URLs or similar). Opaque to the core; resolved
    /// by a display layer. May be empty.
    #[serde(default)]
    pub images: Vec<String>,
    /// Free-form description text.
    pub description: String,
    /// Ordered feature labels, e.g. `"Heated seats"`.
    #[serde(default)]
    pub features: Vec<String>,
    /// Nested specification sheet.
    pub specifications: Specifications,
    /// Whether the vehicle is promoted in the featured sort group.
    pub is_featured: bool,
    /// Whether the vehicle is still for sale. `false` means sold.
    pub is_available: bool,
    /// Unix timestamp (seconds) set once at creation.
    pub created_at: i64,
    /// Detail-page view counter, starts at zero.
    pub views: u64,
}

/// Caller-suppliable fields for creating a vehicle.
///
/// Everything a vehicle record holds except the store-assigned `id`,
/// `created_at`, and `views`. Passed to
/// [`Inventory::add_vehicle`](crate::store::Inventory::add_vehicle).
///
/// The store performs no validation on these fields; form-level validation
/// is the presentation boundary's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDraft {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: u64,
    pub mileage: u64,
    pub body_type: BodyType,
    pub color: String,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    #[serde(default)]
    pub images: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub specifications: Specifications,
    pub is_featured: bool,
    pub is_available: bool,
}

/// Partial edit of a vehicle record.
///
/// Each `Some` field overwrites the corresponding vehicle field; `None`
/// leaves it untouched. `id` and `created_at` are intentionally absent so an
/// update can never alter them. `views` is editable here because any field
/// except the immutable pair is fair game for an administrative edit; the
/// view counter's monotonicity only binds the increment path.
///
/// # Examples
///
/// ```
/// use forecourt::domain::VehicleUpdate;
///
/// let update = VehicleUpdate {
///     price: Some(2_450_000),
///     is_featured: Some(true),
///     ..VehicleUpdate::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleUpdate {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub price: Option<u64>,
    pub mileage: Option<u64>,
    pub body_type: Option<BodyType>,
    pub color: Option<String>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub images: Option<Vec<String>>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub specifications: Option<Specifications>,
    pub is_featured: Option<bool>,
    pub is_available: Option<bool>,
    pub views: Option<u64>,
}

impl Vehicle {
    /// Materializes a draft into a full record with store-assigned fields.
    ///
    /// Used by the store during creation; not intended for direct use by
    /// callers, who should go through
    /// [`Inventory::add_vehicle`](crate::store::Inventory::add_vehicle).
    #[must_use]
    pub(crate) fn from_draft(draft: VehicleDraft, id: String, created_at: i64) -> Self {
        Self {
            id,
            brand: draft.brand,
            model: draft.model,
            year: draft.year,
            price: draft.price,
            mileage: draft.mileage,
            body_type: draft.body_type,
            color: draft.color,
            fuel_type: draft.fuel_type,
            transmission: draft.transmission,
            images: draft.images,
            description: draft.description,
            features: draft.features,
            specifications: draft.specifications,
            is_featured: draft.is_featured,
            is_available: draft.is_available,
            created_at,
            views: 0,
        }
    }

    /// Merges a partial update into this record in place.
    ///
    /// Only `Some` fields are applied. `id` and `created_at` cannot appear in
    /// a [`VehicleUpdate`] and are therefore never touched.
    pub(crate) fn apply(&mut self, update: VehicleUpdate) {
        if let Some(brand) = update.brand {
            self.brand = brand;
        }
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(year) = update.year {
            self.year = year;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(mileage) = update.mileage {
            self.mileage = mileage;
        }
        if let Some(body_type) = update.body_type {
            self.body_type = body_type;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(fuel_type) = update.fuel_type {
            self.fuel_type = fuel_type;
        }
        if let Some(transmission) = update.transmission {
            self.transmission = transmission;
        }
        if let Some(images) = update.images {
            self.images = images;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(features) = update.features {
            self.features = features;
        }
        if let Some(specifications) = update.specifications {
            self.specifications = specifications;
        }
        if let Some(is_featured) = update.is_featured {
            self.is_featured = is_featured;
        }
        if let Some(is_available) = update.is_available {
            self.is_available = is_available;
        }
        if let Some(views) = update.views {
            self.views = views;
        }
    }
}
