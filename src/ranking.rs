//! Catalog Ranking
//!
//! Orders plant lists for display. All sorts are stable so equal entries
//! keep their arrival order, and none of them touch the input.
//!
//! Default (no zone) order is a lexicographic cascade, each key preferring
//! a confirmed `true` over `false`/unknown:
//!   1. native
//!   2. pollinator-friendly
//!   3. beginner-friendly
//!   4. common name (case-insensitive)

use crate::types::Plant;
use crate::zone::zone_score;
use std::cmp::{Ordering, Reverse};

/// Stable sort by zone score, highest first
pub fn sort_by_zone_score<'a, I>(plants: I, zone: i32) -> Vec<&'a Plant>
where
    I: IntoIterator<Item = &'a Plant>,
{
    let mut sorted: Vec<&Plant> = plants.into_iter().collect();
    sorted.sort_by_key(|plant| Reverse(zone_score(plant, zone)));
    sorted
}

/// Comparator for the no-zone cascade
pub fn compare_default(a: &Plant, b: &Plant) -> Ordering {
    b.is_native()
        .cmp(&a.is_native())
        .then_with(|| b.is_pollinator_friendly().cmp(&a.is_pollinator_friendly()))
        .then_with(|| b.is_beginner_friendly().cmp(&a.is_beginner_friendly()))
        .then_with(|| compare_names(&a.common_name, &b.common_name))
}

/// Case-insensitive name order, falling back to byte order for names that
/// differ only in case
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn default_order<'a, I>(plants: I) -> Vec<&'a Plant>
where
    I: IntoIterator<Item = &'a Plant>,
{
    let mut sorted: Vec<&Plant> = plants.into_iter().collect();
    sorted.sort_by(|a, b| compare_default(a, b));
    sorted
}

/// Browse ordering: zone score first (when a zone is known), then the
/// default cascade among equal scores
pub fn rank_plants<'a, I>(plants: I, zone: Option<i32>) -> Vec<&'a Plant>
where
    I: IntoIterator<Item = &'a Plant>,
{
    let ordered = default_order(plants);
    match zone {
        Some(zone) => sort_by_zone_score(ordered, zone),
        None => ordered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(id: &str, name: &str, zones: Option<(i32, i32)>) -> Plant {
        Plant {
            zone_min: zones.map(|z| z.0),
            zone_max: zones.map(|z| z.1),
            ..Plant::new(id, name, name)
        }
    }

    fn ids(plants: &[&Plant]) -> Vec<String> {
        plants.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_sort_by_zone_score_descending() {
        let plants = vec![
            plant("poor", "Poor", Some((10, 12))),
            plant("unknown", "Unknown", None),
            plant("ideal", "Ideal", Some((4, 8))),
            plant("close", "Close", Some((7, 9))),
        ];

        let sorted = sort_by_zone_score(&plants, 6);
        assert_eq!(ids(&sorted), vec!["ideal", "unknown", "close", "poor"]);
        // Input untouched
        assert_eq!(plants[0].id, "poor");
    }

    #[test]
    fn test_sort_by_zone_score_is_stable() {
        let plants = vec![
            plant("b", "Same", Some((3, 9))),
            plant("a", "Same", Some((3, 9))),
            plant("c", "Same", Some((3, 9))),
        ];
        let sorted = sort_by_zone_score(&plants, 5);
        assert_eq!(ids(&sorted), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_sort_by_zone_score_is_idempotent() {
        let plants = vec![
            plant("a", "A", Some((1, 3))),
            plant("b", "B", None),
            plant("c", "C", Some((5, 6))),
            plant("d", "D", Some((6, 10))),
            plant("e", "E", Some((7, 7))),
        ];
        let once = sort_by_zone_score(&plants, 6);
        let twice = sort_by_zone_score(once.clone(), 6);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_default_cascade_prefers_confirmed_true() {
        let native = Plant { is_native: Some(true), ..plant("n", "Zinnia", None) };
        let pollinator = Plant {
            is_pollinator_friendly: Some(true),
            ..plant("p", "Aster", None)
        };
        let beginner = Plant { beginner_friendly: Some(true), ..plant("b", "Aster", None) };
        let unknown = plant("u", "Aster", None);
        let explicit_no = Plant { is_native: Some(false), ..plant("x", "Allium", None) };

        let plants = vec![unknown, explicit_no, beginner, pollinator, native];
        let sorted = default_order(&plants);
        assert_eq!(ids(&sorted), vec!["n", "p", "b", "x", "u"]);
    }

    #[test]
    fn test_default_order_alphabetical_is_case_insensitive() {
        let plants = vec![
            plant("1", "yarrow", None),
            plant("2", "Bee Balm", None),
            plant("3", "aster", None),
        ];
        let sorted = default_order(&plants);
        assert_eq!(ids(&sorted), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_rank_plants_uses_cascade_as_zone_tie_break() {
        let plants = vec![
            plant("far", "Aaron's Beard", Some((10, 11))),
            Plant { is_native: Some(true), ..plant("native", "Zigzag Goldenrod", Some((3, 8))) },
            plant("plain", "Bluestar", Some((3, 8))),
        ];

        let ranked = rank_plants(&plants, Some(6));
        assert_eq!(ids(&ranked), vec!["native", "plain", "far"]);

        let no_zone = rank_plants(&plants, None);
        assert_eq!(ids(&no_zone), vec!["native", "far", "plain"]);
    }

    #[test]
    fn test_empty_input() {
        let plants: Vec<Plant> = Vec::new();
        assert!(sort_by_zone_score(&plants, 6).is_empty());
        assert!(rank_plants(&plants, None).is_empty());
    }
}
