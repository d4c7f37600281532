//! Derived dashboard statistics.
//!
//! Pure read-side aggregation over the entity store for the admin
//! dashboard's analytics panel: inventory totals, inquiry totals, most
//! viewed vehicles, brand distribution, and price-bucket distribution.
//! Nothing here mutates state; a [`Report`] is a snapshot computed on
//! demand.

use crate::catalog::PriceRange;
use crate::domain::{InquiryKind, InquiryStatus, Vehicle};
use crate::store::Inventory;
use std::collections::HashMap;

/// How many entries the most-viewed and top-brand lists carry.
const TOP_LIST_LEN: usize = 5;

/// Inventory-side totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryStats {
    /// Number of vehicle records.
    pub total: usize,
    /// Sum of all view counters.
    pub total_views: u64,
    /// Average views per vehicle, rounded to nearest; zero for an empty lot.
    pub average_views: u64,
    /// Vehicles flagged as featured.
    pub featured: usize,
    /// Vehicles still for sale.
    pub available: usize,
    /// Vehicles marked unavailable (sold).
    pub sold: usize,
}

/// Inquiry-side totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryStats {
    /// Number of inquiry records.
    pub total: usize,
    /// Inquiries still pending.
    pub pending: usize,
    /// Inquiries marked completed.
    pub completed: usize,
    /// Test-drive requests, regardless of status.
    pub test_drive_requests: usize,
}

/// One price bucket with its vehicle count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBucketCount {
    /// Half-open bucket bounds, `[min, max)`.
    pub range: PriceRange,
    /// Vehicles priced inside the bucket.
    pub count: usize,
}

/// Snapshot of dashboard statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub inventory: InventoryStats,
    pub inquiries: InquiryStats,
    /// Up to five vehicles by descending view count.
    pub most_viewed: Vec<Vehicle>,
    /// Up to five `(brand, count)` pairs by descending count.
    pub top_brands: Vec<(String, usize)>,
    /// Vehicle counts per requested price bucket, in request order.
    pub price_distribution: Vec<PriceBucketCount>,
}

impl Report {
    /// Computes a full report over the current store contents.
    ///
    /// `price_buckets` defines the half-open price ranges to count into; a
    /// vehicle can land in several buckets if they overlap, matching how a
    /// dashboard would present independent range cards.
    #[must_use]
    pub fn compute(inventory: &Inventory, price_buckets: &[PriceRange]) -> Self {
        let _span = tracing::debug_span!("analytics_report",
            vehicles = inventory.vehicles().len(),
            inquiries = inventory.inquiries().len()
        )
        .entered();

        let vehicles = inventory.vehicles();
        let inquiries = inventory.inquiries();

        let total = vehicles.len();
        let total_views: u64 = vehicles.iter().map(|v| v.views).sum();
        let average_views = if total == 0 {
            0
        } else {
            // Round-to-nearest integer division.
            (total_views + total as u64 / 2) / total as u64
        };

        let inventory_stats = InventoryStats {
            total,
            total_views,
            average_views,
            featured: vehicles.iter().filter(|v| v.is_featured).count(),
            available: vehicles.iter().filter(|v| v.is_available).count(),
            sold: vehicles.iter().filter(|v| !v.is_available).count(),
        };

        let inquiry_stats = InquiryStats {
            total: inquiries.len(),
            pending: inquiries
                .iter()
                .filter(|i| i.status == InquiryStatus::Pending)
                .count(),
            completed: inquiries
                .iter()
                .filter(|i| i.status == InquiryStatus::Completed)
                .count(),
            test_drive_requests: inquiries
                .iter()
                .filter(|i| i.kind == InquiryKind::TestDrive)
                .count(),
        };

        let mut most_viewed: Vec<Vehicle> = vehicles.to_vec();
        most_viewed.sort_by(|a, b| b.views.cmp(&a.views));
        most_viewed.truncate(TOP_LIST_LEN);

        let mut brand_counts: HashMap<&str, usize> = HashMap::new();
        for vehicle in vehicles {
            *brand_counts.entry(vehicle.brand.as_str()).or_default() += 1;
        }
        let mut top_brands: Vec<(String, usize)> = brand_counts
            .into_iter()
            .map(|(brand, count)| (brand.to_string(), count))
            .collect();
        // Count descending, name ascending for a deterministic tie order.
        top_brands.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_brands.truncate(TOP_LIST_LEN);

        let price_distribution = price_buckets
            .iter()
            .map(|range| PriceBucketCount {
                range: *range,
                count: vehicles
                    .iter()
                    .filter(|v| v.price >= range.min && v.price < range.max)
                    .count(),
            })
            .collect();

        Self {
            inventory: inventory_stats,
            inquiries: inquiry_stats,
            most_viewed,
            top_brands,
            price_distribution,
        }
    }
}

/// The featured shortlist for the home screen: featured vehicles only,
/// views descending.
#[must_use]
pub fn featured_shortlist(inventory: &Inventory) -> Vec<&Vehicle> {
    let mut featured: Vec<&Vehicle> = inventory
        .vehicles()
        .iter()
        .filter(|v| v.is_featured)
        .collect();
    featured.sort_by(|a, b| b.views.cmp(&a.views));
    featured
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        BodyType, FuelType, InquiryDraft, Specifications, Transmission, VehicleDraft,
        VehicleUpdate,
    };

    fn draft(brand: &str, price: u64, featured: bool, available: bool) -> VehicleDraft {
        VehicleDraft {
            brand: brand.to_string(),
            model: "M".to_string(),
            year: 2022,
            price,
            mileage: 0,
            body_type: BodyType::Sedan,
            color: "Black".to_string(),
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Manual,
            images: vec![],
            description: String::new(),
            features: vec![],
            specifications: Specifications::default(),
            is_featured: featured,
            is_available: available,
        }
    }

    fn fixture() -> Inventory {
        let mut inventory = Inventory::new();

        let a = inventory.add_vehicle(draft("BMW", 25_000, true, true)).id.clone();
        let b = inventory.add_vehicle(draft("BMW", 45_000, false, true)).id.clone();
        let c = inventory.add_vehicle(draft("Audi", 80_000, false, false)).id.clone();

        for _ in 0..4 {
            inventory.increment_views(&a);
        }
        inventory.increment_views(&b);
        inventory.increment_views(&c);
        inventory.increment_views(&c);

        inventory.add_inquiry(InquiryDraft {
            name: "N".to_string(),
            email: "n@example.com".to_string(),
            phone: String::new(),
            message: String::new(),
            vehicle_id: Some(a),
            kind: InquiryKind::TestDrive,
        });
        let done = inventory
            .add_inquiry(InquiryDraft {
                name: "M".to_string(),
                email: "m@example.com".to_string(),
                phone: String::new(),
                message: String::new(),
                vehicle_id: None,
                kind: InquiryKind::General,
            })
            .id
            .clone();
        inventory.set_inquiry_status(&done, InquiryStatus::Completed);

        inventory
    }

    #[test]
    fn totals_match_hand_computed_values() {
        let report = Report::compute(&fixture(), &[]);

        assert_eq!(report.inventory.total, 3);
        assert_eq!(report.inventory.total_views, 7);
        // 7 / 3 rounds to 2.
        assert_eq!(report.inventory.average_views, 2);
        assert_eq!(report.inventory.featured, 1);
        assert_eq!(report.inventory.available, 2);
        assert_eq!(report.inventory.sold, 1);

        assert_eq!(report.inquiries.total, 2);
        assert_eq!(report.inquiries.pending, 1);
        assert_eq!(report.inquiries.completed, 1);
        assert_eq!(report.inquiries.test_drive_requests, 1);
    }

    #[test]
    fn most_viewed_is_views_descending() {
        let report = Report::compute(&fixture(), &[]);

        let views: Vec<u64> = report.most_viewed.iter().map(|v| v.views).collect();
        assert_eq!(views, [4, 2, 1]);
    }

    #[test]
    fn top_brands_count_descending() {
        let report = Report::compute(&fixture(), &[]);
        assert_eq!(
            report.top_brands,
            [("BMW".to_string(), 2), ("Audi".to_string(), 1)]
        );
    }

    #[test]
    fn price_buckets_are_half_open() {
        let buckets = [
            PriceRange { min: 0, max: 30_000 },
            PriceRange { min: 30_000, max: 50_000 },
            PriceRange { min: 50_000, max: u64::MAX },
        ];
        let report = Report::compute(&fixture(), &buckets);

        let counts: Vec<usize> = report.price_distribution.iter().map(|b| b.count).collect();
        assert_eq!(counts, [1, 1, 1]);
    }

    #[test]
    fn empty_store_yields_zeroed_report() {
        let report = Report::compute(&Inventory::new(), &[]);
        assert_eq!(report.inventory.total, 0);
        assert_eq!(report.inventory.average_views, 0);
        assert!(report.most_viewed.is_empty());
        assert!(report.top_brands.is_empty());
    }

    #[test]
    fn featured_shortlist_filters_and_orders() {
        let mut inventory = fixture();
        let extra = inventory.add_vehicle(draft("Tesla", 60_000, true, true)).id.clone();
        inventory.update_vehicle(
            &extra,
            VehicleUpdate {
                views: Some(10),
                ..VehicleUpdate::default()
            },
        );

        let shortlist = featured_shortlist(&inventory);
        assert_eq!(shortlist.len(), 2);
        assert_eq!(shortlist[0].brand, "Tesla");
        assert!(shortlist.iter().all(|v| v.is_featured));
    }
}
