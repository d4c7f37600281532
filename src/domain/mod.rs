//! Domain layer for the forecourt core.
//!
//! This module contains the core domain types for the dealership catalog,
//! independent of persistence or presentation concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`vehicle`]: Vehicle record, enums, draft and partial-update types
//! - [`inquiry`]: Customer inquiry record and draft
//!
//! # Examples
//!
//! ```
//! use forecourt::domain::{BodyType, FuelType, Specifications, Transmission, VehicleDraft};
//!
//! let draft = VehicleDraft {
//!     brand: "BMW".to_string(),
//!     model: "M4".to_string(),
//!     year: 2023,
//!     price: 8_500_000,
//!     mileage: 12_000,
//!     body_type: BodyType::Coupe,
//!     color: "Black".to_string(),
//!     fuel_type: FuelType::Gasoline,
//!     transmission: Transmission::Automatic,
//!     images: vec![],
//!     description: "One owner, full service history".to_string(),
//!     features: vec!["Carbon roof".to_string()],
//!     specifications: Specifications::default(),
//!     is_featured: true,
//!     is_available: true,
//! };
//! ```

pub mod error;
pub mod inquiry;
pub mod vehicle;

pub use error::{ForecourtError, Result};
pub use inquiry::{Inquiry, InquiryDraft, InquiryKind, InquiryStatus};
pub use vehicle::{
    BodyType, FuelType, Specifications, Transmission, Vehicle, VehicleDraft, VehicleUpdate,
};
