//! The pure catalog query function.
//!
//! [`query`] is the system's derived-view computation: given the vehicle
//! collection, a filter specification, and a sort key, it produces the
//! ordered display list. It is a pure function with no hidden state, so the
//! display list is re-derivable on every input change instead of being a
//! separately maintained mutable structure that could drift out of sync.

use super::filter::FilterSpec;
use super::sort::SortKey;
use crate::domain::Vehicle;

/// Produces the ordered display list for the catalog screen.
///
/// Filters `vehicles` down to those matching every present constraint in
/// `filters`, then orders the survivors under `sort`. The sort is stable:
/// elements comparing equal keep their relative input order across repeated
/// calls with unchanged input.
///
/// Empty input yields empty output; there are no error conditions.
///
/// # Examples
///
/// ```
/// use forecourt::catalog::{query, FilterSpec, SortKey};
///
/// let listed = query(&[], &FilterSpec::default(), SortKey::Featured);
/// assert!(listed.is_empty());
/// ```
#[must_use]
pub fn query(vehicles: &[Vehicle], filters: &FilterSpec, sort: SortKey) -> Vec<Vehicle> {
    let _span = tracing::debug_span!("catalog_query",
        total = vehicles.len(),
        sort = sort.as_str()
    )
    .entered();

    let mut listed: Vec<Vehicle> = vehicles
        .iter()
        .filter(|vehicle| filters.matches(vehicle))
        .cloned()
        .collect();

    listed.sort_by(|a, b| sort.compare(a, b));

    tracing::debug!(listed = listed.len(), "catalog query computed");
    listed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BodyType, FuelType, Specifications, Transmission};

    fn vehicle(id: &str, price: u64, year: i32, mileage: u64, views: u64, featured: bool) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            brand: "BMW".to_string(),
            model: "320i".to_string(),
            year,
            price,
            mileage,
            body_type: BodyType::Sedan,
            color: "Black".to_string(),
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Automatic,
            images: vec![],
            description: String::new(),
            features: vec![],
            specifications: Specifications::default(),
            is_featured: featured,
            is_available: true,
            created_at: 0,
            views,
        }
    }

    fn ids(listed: &[Vehicle]) -> Vec<&str> {
        listed.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_passes_everything_exactly_once() {
        let vehicles = vec![
            vehicle("a", 100, 2020, 10, 0, false),
            vehicle("b", 200, 2021, 20, 0, false),
        ];

        let listed = query(&vehicles, &FilterSpec::default(), SortKey::PriceLow);
        assert_eq!(ids(&listed), ["a", "b"]);
    }

    #[test]
    fn constraints_combine_with_logical_and() {
        let mut cheap_suv = vehicle("suv", 100, 2020, 10, 0, false);
        cheap_suv.body_type = BodyType::Suv;
        let vehicles = vec![
            cheap_suv,
            vehicle("sedan", 100, 2020, 10, 0, false),
            vehicle("pricey", 900, 2020, 10, 0, false),
        ];

        let spec = FilterSpec::default()
            .with_body_type(BodyType::Suv)
            .with_price_range(0, 500);
        let listed = query(&vehicles, &spec, SortKey::Featured);
        assert_eq!(ids(&listed), ["suv"]);
    }

    #[test]
    fn exact_match_dimensions_filter_independently() {
        let mut electric = vehicle("ev", 100, 2023, 0, 0, false);
        electric.fuel_type = FuelType::Electric;
        electric.model = "Leaf".to_string();
        let vehicles = vec![electric, vehicle("gas", 100, 2018, 0, 0, false)];

        let by_fuel = FilterSpec::default().with_fuel_type(FuelType::Electric);
        assert_eq!(ids(&query(&vehicles, &by_fuel, SortKey::Featured)), ["ev"]);

        let by_model = FilterSpec::default().with_model("Leaf");
        assert_eq!(ids(&query(&vehicles, &by_model, SortKey::Featured)), ["ev"]);

        let by_min_year = FilterSpec::default().with_min_year(2020);
        assert_eq!(ids(&query(&vehicles, &by_min_year, SortKey::Featured)), ["ev"]);

        let by_color = FilterSpec {
            color: Some("Purple".to_string()),
            ..FilterSpec::default()
        };
        assert!(query(&vehicles, &by_color, SortKey::Featured).is_empty());

        let by_transmission = FilterSpec {
            transmission: Some(Transmission::Manual),
            ..FilterSpec::default()
        };
        assert!(query(&vehicles, &by_transmission, SortKey::Featured).is_empty());
    }

    #[test]
    fn price_bounds_are_min_inclusive_max_exclusive() {
        let vehicles = vec![
            vehicle("below", 1_900_000, 2020, 0, 0, false),
            vehicle("at-min", 2_000_000, 2020, 0, 0, false),
            vehicle("inside", 2_999_999, 2020, 0, 0, false),
            vehicle("at-max", 3_000_000, 2020, 0, 0, false),
        ];

        let spec = FilterSpec::default().with_price_range(2_000_000, 3_000_000);
        let listed = query(&vehicles, &spec, SortKey::PriceLow);
        assert_eq!(ids(&listed), ["at-min", "inside"]);
    }

    #[test]
    fn year_and_mileage_bounds_are_inclusive() {
        let vehicles = vec![
            vehicle("old", 100, 2018, 50_000, 0, false),
            vehicle("edge", 100, 2019, 40_000, 0, false),
            vehicle("new", 100, 2023, 5_000, 0, false),
        ];

        let spec = FilterSpec {
            min_year: Some(2019),
            max_year: Some(2023),
            max_mileage: Some(40_000),
            ..FilterSpec::default()
        };
        let listed = query(&vehicles, &spec, SortKey::YearOld);
        assert_eq!(ids(&listed), ["edge", "new"]);
    }

    #[test]
    fn every_result_satisfies_every_present_constraint() {
        let vehicles: Vec<Vehicle> = (0..20)
            .map(|i| {
                vehicle(
                    &format!("v{i}"),
                    (i as u64) * 100,
                    2010 + i,
                    (i as u64) * 1_000,
                    i as u64,
                    i % 3 == 0,
                )
            })
            .collect();
        let spec = FilterSpec {
            min_price: Some(300),
            max_price: Some(1_500),
            min_year: Some(2012),
            max_mileage: Some(13_000),
            ..FilterSpec::default()
        };

        let listed = query(&vehicles, &spec, SortKey::Featured);
        assert!(!listed.is_empty());
        for v in &listed {
            assert!(v.price >= 300 && v.price < 1_500);
            assert!(v.year >= 2012);
            assert!(v.mileage <= 13_000);
        }
        // No duplication, no omission.
        let expected = vehicles.iter().filter(|v| spec.matches(v)).count();
        assert_eq!(listed.len(), expected);
    }

    #[test]
    fn price_and_mileage_sorts_order_both_directions() {
        let vehicles = vec![
            vehicle("mid", 200, 2020, 20, 0, false),
            vehicle("low", 100, 2020, 30, 0, false),
            vehicle("high", 300, 2020, 10, 0, false),
        ];

        let spec = FilterSpec::default();
        assert_eq!(ids(&query(&vehicles, &spec, SortKey::PriceLow)), ["low", "mid", "high"]);
        assert_eq!(ids(&query(&vehicles, &spec, SortKey::PriceHigh)), ["high", "mid", "low"]);
        assert_eq!(ids(&query(&vehicles, &spec, SortKey::MileageLow)), ["high", "mid", "low"]);
        assert_eq!(ids(&query(&vehicles, &spec, SortKey::MileageHigh)), ["low", "mid", "high"]);
    }

    #[test]
    fn year_sorts_order_both_directions() {
        let vehicles = vec![
            vehicle("b", 0, 2021, 0, 0, false),
            vehicle("a", 0, 2019, 0, 0, false),
            vehicle("c", 0, 2023, 0, 0, false),
        ];

        let spec = FilterSpec::default();
        assert_eq!(ids(&query(&vehicles, &spec, SortKey::YearNew)), ["c", "b", "a"]);
        assert_eq!(ids(&query(&vehicles, &spec, SortKey::YearOld)), ["a", "b", "c"]);
    }

    #[test]
    fn featured_groups_before_non_featured_then_views_descending() {
        // views [10, 5, 20], featured [false, true, false]
        // must yield [the featured one, then non-featured by views desc].
        let vehicles = vec![
            vehicle("v1", 0, 2020, 0, 10, false),
            vehicle("v2", 0, 2020, 0, 5, true),
            vehicle("v3", 0, 2020, 0, 20, false),
        ];

        let listed = query(&vehicles, &FilterSpec::default(), SortKey::Featured);
        assert_eq!(ids(&listed), ["v2", "v3", "v1"]);

        // The pairwise featured-sort invariant.
        for pair in listed.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                (a.is_featured && !b.is_featured)
                    || (a.is_featured == b.is_featured && a.views >= b.views)
            );
        }
    }

    #[test]
    fn sorting_is_idempotent_and_stable_for_ties() {
        let vehicles = vec![
            vehicle("first", 100, 2020, 0, 7, false),
            vehicle("second", 100, 2020, 0, 7, false),
            vehicle("third", 100, 2020, 0, 7, false),
        ];

        let once = query(&vehicles, &FilterSpec::default(), SortKey::PriceLow);
        let twice = query(&once, &FilterSpec::default(), SortKey::PriceLow);
        assert_eq!(once, twice);
        // Equal keys keep insertion order.
        assert_eq!(ids(&once), ["first", "second", "third"]);
    }

    #[test]
    fn unknown_sort_key_string_behaves_as_featured() {
        let vehicles = vec![
            vehicle("plain", 0, 2020, 0, 99, false),
            vehicle("star", 0, 2020, 0, 1, true),
        ];

        let key: SortKey = "definitely-not-a-key".parse().unwrap();
        assert_eq!(key, SortKey::Featured);

        let listed = query(&vehicles, &FilterSpec::default(), key);
        assert_eq!(ids(&listed), ["star", "plain"]);
    }
}
