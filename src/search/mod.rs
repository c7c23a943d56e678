//! Catalog Search
//!
//! Resolves a free-text query against the catalog. Recognised shapes
//! (zone numbers, attribute keywords) short-circuit to exact filters;
//! anything else goes through the weighted fuzzy index.

pub mod fuzzy_index;
pub mod keywords;

pub use fuzzy_index::{FuzzyIndex, SearchField, SearchHit, RELEVANCE_THRESHOLD};
pub use keywords::{AttributeKeyword, SearchIntent};

use crate::data::PlantCatalog;
use crate::ranking::rank_plants;
use crate::types::Plant;
use crate::zone::range_contains;

/// Plants matching `query`, in display order
///
/// - empty query: whole catalog ranked for `zone`
/// - zone query: plants whose range contains it, ranked for that zone
/// - attribute keyword: matching plants ranked for `zone`
/// - free text: fuzzy hits by relevance (zone does not reorder them)
pub fn search_plants<'a>(catalog: &'a PlantCatalog, query: &str, zone: Option<i32>) -> Vec<&'a Plant> {
    let plants = catalog.plants();

    match SearchIntent::parse(query) {
        SearchIntent::Empty => rank_plants(plants, zone),
        SearchIntent::Zone(n) => {
            let matching = plants.iter().filter(|plant| range_contains(plant, n));
            rank_plants(matching, Some(n))
        }
        SearchIntent::Attribute(keyword) => {
            let matching = plants.iter().filter(|plant| keyword.matches(plant));
            rank_plants(matching, zone)
        }
        SearchIntent::FreeText(text) => catalog
            .search_index()
            .search(&text)
            .into_iter()
            .filter_map(|hit| plants.get(hit.plant))
            .collect(),
    }
}
