//! FST-backed Fuzzy Term Index
//!
//! Every searchable field of every plant is tokenized into lowercase terms.
//! Terms go into an FST map (term -> postings slot) so a query token can be
//! matched exactly, by prefix, or within a small edit distance using the
//! FST's automata instead of scanning the catalog.
//!
//! Relevance per plant = mean over query tokens of the best
//! `tier * field weight`, normalized by the heaviest field weight.
//! Plants below `RELEVANCE_THRESHOLD` are excluded.

use crate::types::Plant;
use fst::automaton::{Levenshtein, Str};
use fst::{Automaton, IntoStreamer, Map, Streamer};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

pub const RELEVANCE_THRESHOLD: f64 = 0.2;

const TIER_EXACT: f64 = 1.0;
const TIER_PREFIX: f64 = 0.8;
const TIER_ONE_EDIT: f64 = 0.6;
const TIER_TWO_EDITS: f64 = 0.4;

/// Minimum token length before typos are tolerated
const ONE_EDIT_MIN_LEN: usize = 4;
const TWO_EDITS_MIN_LEN: usize = 7;

const MIN_TOKEN_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    CommonName,
    ScientificName,
    PlantType,
    Pollinators,
    SunExposure,
    WaterNeeds,
    SuggestedUse,
    Description,
}

impl SearchField {
    pub fn weight(&self) -> f64 {
        match self {
            SearchField::CommonName => 3.0,
            SearchField::ScientificName => 2.0,
            SearchField::PlantType => 1.5,
            SearchField::Pollinators
            | SearchField::SunExposure
            | SearchField::WaterNeeds
            | SearchField::SuggestedUse => 1.0,
            SearchField::Description => 0.75,
        }
    }

    const MAX_WEIGHT: f64 = 3.0;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Posting {
    plant: usize,
    field: SearchField,
}

/// Catalog position and relevance of a fuzzy match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    pub plant: usize,
    pub relevance: f64,
}

pub struct FuzzyIndex {
    map: Map<Vec<u8>>,
    postings: Vec<Vec<Posting>>,
}

/// Lowercase alphanumeric runs of at least two characters
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

fn field_texts(plant: &Plant) -> Vec<(SearchField, &str)> {
    let mut texts = vec![
        (SearchField::CommonName, plant.common_name.as_str()),
        (SearchField::ScientificName, plant.scientific_name.as_str()),
    ];

    if let Some(plant_type) = plant.plant_type {
        texts.push((SearchField::PlantType, plant_type.as_str()));
    }
    texts.extend(
        plant
            .pollinators
            .iter()
            .map(|p| (SearchField::Pollinators, p.as_str())),
    );
    texts.extend(
        plant
            .sun_exposure
            .iter()
            .map(|s| (SearchField::SunExposure, s.as_str())),
    );
    if let Some(water) = plant.water_needs {
        texts.push((SearchField::WaterNeeds, water.as_str()));
    }
    if let Some(use_) = plant.suggested_use.as_deref() {
        texts.push((SearchField::SuggestedUse, use_));
    }
    if let Some(description) = plant.description.as_deref() {
        texts.push((SearchField::Description, description));
    }

    texts
}

impl FuzzyIndex {
    pub fn build(plants: &[Plant]) -> Self {
        let mut terms: BTreeMap<String, Vec<Posting>> = BTreeMap::new();

        for (idx, plant) in plants.iter().enumerate() {
            for (field, text) in field_texts(plant) {
                for token in tokenize(text) {
                    let posting = Posting { plant: idx, field };
                    let entry = terms.entry(token).or_default();
                    if !entry.contains(&posting) {
                        entry.push(posting);
                    }
                }
            }
        }

        // BTreeMap iteration is sorted and unique, as the FST requires
        let map = match Map::from_iter(
            terms
                .keys()
                .enumerate()
                .map(|(slot, term)| (term.as_bytes(), slot as u64)),
        ) {
            Ok(map) => map,
            Err(e) => {
                tracing::error!("Failed to build search index: {}", e);
                Map::default()
            }
        };

        Self {
            map,
            postings: terms.into_values().collect(),
        }
    }

    pub fn term_count(&self) -> usize {
        self.map.len()
    }

    /// Weighted fuzzy search; hits ordered by relevance, then catalog order
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut totals: FxHashMap<usize, f64> = FxHashMap::default();
        for token in &tokens {
            for (plant, score) in self.best_scores_for_token(token) {
                *totals.entry(plant).or_insert(0.0) += score;
            }
        }

        let denominator = tokens.len() as f64 * SearchField::MAX_WEIGHT;
        let mut hits: Vec<SearchHit> = totals
            .into_iter()
            .map(|(plant, total)| SearchHit {
                plant,
                relevance: total / denominator,
            })
            .filter(|hit| hit.relevance >= RELEVANCE_THRESHOLD)
            .collect();

        hits.sort_by(|a, b| {
            b.relevance
                .total_cmp(&a.relevance)
                .then_with(|| a.plant.cmp(&b.plant))
        });
        hits
    }

    /// Best `tier * weight` per plant for a single query token
    fn best_scores_for_token(&self, token: &str) -> FxHashMap<usize, f64> {
        let mut best: FxHashMap<usize, f64> = FxHashMap::default();

        if let Some(slot) = self.map.get(token) {
            self.credit(slot, TIER_EXACT, &mut best);
        }

        let prefix = Str::new(token).starts_with();
        self.credit_matches(prefix, TIER_PREFIX, &mut best);

        let len = token.chars().count();
        if len >= ONE_EDIT_MIN_LEN {
            match Levenshtein::new(token, 1) {
                Ok(lev) => self.credit_matches(lev, TIER_ONE_EDIT, &mut best),
                Err(e) => tracing::debug!("Skipping edit-distance match for '{}': {}", token, e),
            }
        }
        if len >= TWO_EDITS_MIN_LEN {
            match Levenshtein::new(token, 2) {
                Ok(lev) => self.credit_matches(lev, TIER_TWO_EDITS, &mut best),
                Err(e) => tracing::debug!("Skipping edit-distance match for '{}': {}", token, e),
            }
        }

        best
    }

    fn credit_matches<A: Automaton>(&self, automaton: A, tier: f64, best: &mut FxHashMap<usize, f64>) {
        let mut stream = self.map.search(automaton).into_stream();
        while let Some((_term, slot)) = stream.next() {
            self.credit(slot, tier, best);
        }
    }

    fn credit(&self, slot: u64, tier: f64, best: &mut FxHashMap<usize, f64>) {
        let Some(postings) = self.postings.get(slot as usize) else {
            return;
        };
        for posting in postings {
            let score = tier * posting.field.weight();
            let current = best.entry(posting.plant).or_insert(0.0);
            if score > *current {
                *current = score;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_plants;
    use approx::assert_relative_eq;

    fn index() -> (Vec<Plant>, FuzzyIndex) {
        let plants = seed_plants();
        let index = FuzzyIndex::build(&plants);
        (plants, index)
    }

    fn names<'a>(plants: &'a [Plant], hits: &[SearchHit]) -> Vec<&'a str> {
        hits.iter().map(|h| plants[h.plant].common_name.as_str()).collect()
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("Black-Eyed Susan"), vec!["black", "eyed", "susan"]);
        assert_eq!(tokenize("Birds (seeds), a"), vec!["birds", "seeds"]);
        assert!(tokenize("  ").is_empty());
    }

    #[test]
    fn test_exact_common_name_is_full_relevance() {
        let (plants, index) = index();
        let hits = index.search("Lavender");
        assert_eq!(names(&plants, &hits)[0], "English Lavender");
        assert_relative_eq!(hits[0].relevance, 1.0);
    }

    #[test]
    fn test_prefix_and_typo_tiers() {
        let (plants, index) = index();

        let prefix = index.search("lave");
        assert_eq!(names(&plants, &prefix), vec!["English Lavender"]);
        assert_relative_eq!(prefix[0].relevance, 0.8);

        let typo = index.search("lavendar");
        assert_eq!(names(&plants, &typo)[0], "English Lavender");
        assert_relative_eq!(typo[0].relevance, 0.6);
    }

    #[test]
    fn test_multi_token_relevance_is_mean() {
        let (plants, index) = index();
        let hits = index.search("purple coneflower");
        assert_eq!(names(&plants, &hits)[0], "Purple Coneflower");
        assert_relative_eq!(hits[0].relevance, 1.0);
    }

    #[test]
    fn test_low_weight_fields_still_match() {
        let (plants, index) = index();
        let hits = index.search("hummingbirds");
        let found = names(&plants, &hits);
        assert!(found.contains(&"Wild Columbine"));
        assert!(found.contains(&"Woodland Sage"));
        for hit in &hits {
            assert_relative_eq!(hit.relevance, 1.0 / 3.0);
        }
        // equal relevance keeps catalog order
        let positions: Vec<usize> = hits.iter().map(|h| h.plant).collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_below_threshold_is_excluded() {
        let (_, index) = index();
        assert!(index.search("xylophone").is_empty());
        assert!(index.search("").is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let index = FuzzyIndex::build(&[]);
        assert_eq!(index.term_count(), 0);
        assert!(index.search("anything").is_empty());
    }
}
