//! In-memory entity store for vehicles and inquiries.
//!
//! [`Inventory`] is the single source of truth for both record collections
//! during the process lifetime. There is no backing persistence: losing the
//! data on restart is accepted behavior, since the system defines no
//! database.
//!
//! # Semantics
//!
//! - Creation assigns the identifier and `created_at`, and prepends the new
//!   record, so newer items come first in raw insertion order.
//! - Mutations addressed by identifier (update, delete, view increment,
//!   status change) are silent no-ops when the identifier is unknown.
//!   Callers are expected to hold identifiers from a current snapshot, and a
//!   stale one is an expected, non-fatal outcome.
//! - The store performs no field validation. Form-level checks belong to the
//!   presentation boundary.

use crate::domain::{Inquiry, InquiryDraft, InquiryStatus, Vehicle, VehicleDraft, VehicleUpdate};

/// In-memory store holding the vehicle and inquiry collections.
///
/// Owns all mutation paths for both collections. Reads hand out slices in
/// raw insertion order (newest first); ordering for display is the catalog
/// query engine's job.
///
/// # Examples
///
/// ```
/// use forecourt::store::Inventory;
/// # use forecourt::domain::{BodyType, FuelType, Specifications, Transmission, VehicleDraft};
/// # fn draft() -> VehicleDraft {
/// #     VehicleDraft {
/// #         brand: "Audi".into(), model: "A6".into(), year: 2021, price: 4_200_000,
/// #         mileage: 30_000, body_type: BodyType::Sedan, color: "Gray".into(),
/// #         fuel_type: FuelType::Diesel, transmission: Transmission::Automatic,
/// #         images: vec![], description: String::new(), features: vec![],
/// #         specifications: Specifications::default(), is_featured: false, is_available: true,
/// #     }
/// # }
///
/// let mut inventory = Inventory::new();
/// let id = inventory.add_vehicle(draft()).id.clone();
/// inventory.increment_views(&id);
/// assert_eq!(inventory.vehicle(&id).unwrap().views, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    /// Vehicle records, newest first.
    vehicles: Vec<Vehicle>,

    /// Inquiry records, newest first. Never deleted in this system.
    inquiries: Vec<Inquiry>,

    /// Next identifier to hand out, shared by both collections.
    ///
    /// Seeded from the current millisecond timestamp on first use and
    /// strictly incremented afterwards, so identifiers keep a time-flavored
    /// shape but can never collide or be reused, even after deletes.
    next_id: u64,
}

impl Inventory {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with existing records.
    ///
    /// Used to seed demo data. The identifier counter is advanced past the
    /// largest numeric identifier found so later inserts cannot collide.
    #[must_use]
    pub fn with_records(vehicles: Vec<Vehicle>, inquiries: Vec<Inquiry>) -> Self {
        let max_seen = vehicles
            .iter()
            .map(|v| v.id.as_str())
            .chain(inquiries.iter().map(|i| i.id.as_str()))
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            vehicles,
            inquiries,
            next_id: max_seen.saturating_add(1),
        }
    }

    /// All vehicle records, newest first.
    #[must_use]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// All inquiry records, newest first.
    #[must_use]
    pub fn inquiries(&self) -> &[Inquiry] {
        &self.inquiries
    }

    /// Looks up a vehicle by identifier.
    #[must_use]
    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Looks up an inquiry by identifier.
    #[must_use]
    pub fn inquiry(&self, id: &str) -> Option<&Inquiry> {
        self.inquiries.iter().find(|i| i.id == id)
    }

    /// Adds a vehicle from a draft and returns the stored record.
    ///
    /// Assigns a fresh identifier, stamps `created_at` with the current time,
    /// starts `views` at zero, and prepends the record. No validation is
    /// performed on the draft.
    pub fn add_vehicle(&mut self, draft: VehicleDraft) -> &Vehicle {
        let _span = tracing::debug_span!("add_vehicle",
            brand = %draft.brand,
            model = %draft.model
        )
        .entered();

        let id = self.allocate_id();
        let created_at = chrono::Utc::now().timestamp();
        let vehicle = Vehicle::from_draft(draft, id, created_at);

        tracing::debug!(vehicle_id = %vehicle.id, "vehicle added");

        self.vehicles.insert(0, vehicle);
        &self.vehicles[0]
    }

    /// Merges a partial update into the matching vehicle.
    ///
    /// Silent no-op if the identifier is unknown. `id` and `created_at` are
    /// untouchable by construction of [`VehicleUpdate`].
    pub fn update_vehicle(&mut self, id: &str, update: VehicleUpdate) {
        let _span = tracing::debug_span!("update_vehicle", vehicle_id = %id).entered();

        match self.vehicles.iter_mut().find(|v| v.id == id) {
            Some(vehicle) => {
                vehicle.apply(update);
                tracing::debug!("vehicle updated");
            }
            None => tracing::debug!("vehicle not found, update skipped"),
        }
    }

    /// Removes the matching vehicle. Silent no-op if absent.
    ///
    /// Favorites or inquiries referencing the removed identifier are left
    /// alone; they hold weak references and simply fail lookup afterwards.
    pub fn delete_vehicle(&mut self, id: &str) {
        let _span = tracing::debug_span!("delete_vehicle", vehicle_id = %id).entered();

        let before = self.vehicles.len();
        self.vehicles.retain(|v| v.id != id);

        if self.vehicles.len() == before {
            tracing::debug!("vehicle not found, delete skipped");
        } else {
            tracing::debug!("vehicle deleted");
        }
    }

    /// Increments the matching vehicle's view counter by one.
    ///
    /// Silent no-op if the identifier is unknown. This is the only mutation
    /// path the customer side drives on vehicle records.
    pub fn increment_views(&mut self, id: &str) {
        if let Some(vehicle) = self.vehicles.iter_mut().find(|v| v.id == id) {
            vehicle.views += 1;
            tracing::trace!(vehicle_id = %id, views = vehicle.views, "view recorded");
        }
    }

    /// Adds an inquiry from a draft and returns the stored record.
    ///
    /// Assigns a fresh identifier, stamps `created_at`, forces status to
    /// [`InquiryStatus::Pending`] regardless of caller intent, and prepends.
    pub fn add_inquiry(&mut self, draft: InquiryDraft) -> &Inquiry {
        let _span = tracing::debug_span!("add_inquiry",
            kind = ?draft.kind,
            vehicle_id = ?draft.vehicle_id
        )
        .entered();

        let id = self.allocate_id();
        let created_at = chrono::Utc::now().timestamp();
        let inquiry = Inquiry::from_draft(draft, id, created_at);

        tracing::debug!(inquiry_id = %inquiry.id, "inquiry added");

        self.inquiries.insert(0, inquiry);
        &self.inquiries[0]
    }

    /// Overwrites the matching inquiry's status. Silent no-op if absent.
    ///
    /// Transitions are unrestricted; any status may follow any other.
    pub fn set_inquiry_status(&mut self, id: &str, status: InquiryStatus) {
        let _span = tracing::debug_span!("set_inquiry_status",
            inquiry_id = %id,
            status = ?status
        )
        .entered();

        match self.inquiries.iter_mut().find(|i| i.id == id) {
            Some(inquiry) => {
                inquiry.status = status;
                tracing::debug!("inquiry status updated");
            }
            None => tracing::debug!("inquiry not found, status change skipped"),
        }
    }

    /// Hands out the next process-unique identifier.
    fn allocate_id(&mut self) -> String {
        if self.next_id == 0 {
            // Seed lazily so long-lived empty stores don't pin an old stamp.
            self.next_id = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(1);
        }
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BodyType, FuelType, InquiryKind, Specifications, Transmission};

    fn draft(brand: &str, price: u64) -> VehicleDraft {
        VehicleDraft {
            brand: brand.to_string(),
            model: "Test".to_string(),
            year: 2022,
            price,
            mileage: 10_000,
            body_type: BodyType::Sedan,
            color: "Blue".to_string(),
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Automatic,
            images: vec![],
            description: String::new(),
            features: vec![],
            specifications: Specifications::default(),
            is_featured: false,
            is_available: true,
        }
    }

    fn inquiry_draft(vehicle_id: Option<&str>) -> InquiryDraft {
        InquiryDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            message: "Is it still available?".to_string(),
            vehicle_id: vehicle_id.map(str::to_string),
            kind: InquiryKind::General,
        }
    }

    #[test]
    fn add_vehicle_assigns_fresh_fields_and_prepends() {
        let mut inventory = Inventory::new();

        let first = inventory.add_vehicle(draft("BMW", 100)).id.clone();
        let second = inventory.add_vehicle(draft("Audi", 200)).id.clone();

        assert_ne!(first, second);
        let stored = inventory.vehicle(&second).unwrap();
        assert_eq!(stored.views, 0);
        // Newest first.
        assert_eq!(inventory.vehicles()[0].id, second);
        assert_eq!(inventory.vehicles()[1].id, first);
    }

    #[test]
    fn identifiers_are_never_reused_after_delete() {
        let mut inventory = Inventory::new();

        let mut seen = std::collections::HashSet::new();
        for _ in 0..5 {
            let id = inventory.add_vehicle(draft("BMW", 100)).id.clone();
            assert!(seen.insert(id.clone()));
            inventory.delete_vehicle(&id);
        }
        assert!(inventory.vehicles().is_empty());
    }

    #[test]
    fn update_merges_fields_and_preserves_identity() {
        let mut inventory = Inventory::new();
        let id = inventory.add_vehicle(draft("BMW", 100)).id.clone();
        let created_at = inventory.vehicle(&id).unwrap().created_at;

        inventory.update_vehicle(
            &id,
            VehicleUpdate {
                price: Some(250),
                color: Some("Red".to_string()),
                ..VehicleUpdate::default()
            },
        );

        let vehicle = inventory.vehicle(&id).unwrap();
        assert_eq!(vehicle.price, 250);
        assert_eq!(vehicle.color, "Red");
        assert_eq!(vehicle.brand, "BMW");
        assert_eq!(vehicle.created_at, created_at);
        assert_eq!(vehicle.id, id);
    }

    #[test]
    fn mutations_on_unknown_ids_are_silent_noops() {
        let mut inventory = Inventory::new();
        inventory.add_vehicle(draft("BMW", 100));
        let snapshot = inventory.vehicles().to_vec();

        inventory.update_vehicle("no-such-id", VehicleUpdate::default());
        inventory.delete_vehicle("no-such-id");
        inventory.increment_views("no-such-id");
        inventory.set_inquiry_status("no-such-id", InquiryStatus::Completed);

        assert_eq!(inventory.vehicles(), snapshot.as_slice());
    }

    #[test]
    fn increment_views_touches_only_the_target() {
        let mut inventory = Inventory::new();
        let a = inventory.add_vehicle(draft("BMW", 100)).id.clone();
        let b = inventory.add_vehicle(draft("Audi", 200)).id.clone();
        let b_before = inventory.vehicle(&b).unwrap().clone();

        inventory.increment_views(&a);

        assert_eq!(inventory.vehicle(&a).unwrap().views, 1);
        assert_eq!(inventory.vehicle(&b).unwrap(), &b_before);
    }

    #[test]
    fn add_inquiry_forces_pending_status() {
        let mut inventory = Inventory::new();
        let id = inventory.add_inquiry(inquiry_draft(None)).id.clone();

        assert_eq!(
            inventory.inquiry(&id).unwrap().status,
            InquiryStatus::Pending
        );
    }

    #[test]
    fn inquiry_status_transitions_are_unrestricted() {
        let mut inventory = Inventory::new();
        let id = inventory.add_inquiry(inquiry_draft(None)).id.clone();

        inventory.set_inquiry_status(&id, InquiryStatus::Completed);
        assert_eq!(
            inventory.inquiry(&id).unwrap().status,
            InquiryStatus::Completed
        );

        // Backwards transitions are allowed.
        inventory.set_inquiry_status(&id, InquiryStatus::Pending);
        assert_eq!(
            inventory.inquiry(&id).unwrap().status,
            InquiryStatus::Pending
        );
    }

    #[test]
    fn inquiry_vehicle_reference_dangles_without_error() {
        let mut inventory = Inventory::new();
        let vehicle_id = inventory.add_vehicle(draft("BMW", 100)).id.clone();
        let inquiry_id = inventory
            .add_inquiry(inquiry_draft(Some(&vehicle_id)))
            .id
            .clone();

        inventory.delete_vehicle(&vehicle_id);

        let inquiry = inventory.inquiry(&inquiry_id).unwrap();
        let referenced = inquiry.vehicle_id.as_deref().unwrap();
        assert!(inventory.vehicle(referenced).is_none());
    }

    #[test]
    fn with_records_advances_the_id_counter() {
        let mut inventory = Inventory::new();
        let seeded = inventory.add_vehicle(draft("BMW", 100)).clone();
        let existing_id = seeded.id.clone();

        let mut reseeded = Inventory::with_records(vec![seeded], vec![]);
        let fresh = reseeded.add_vehicle(draft("Audi", 200)).id.clone();
        assert_ne!(fresh, existing_id);
    }
}
