//! Bundle theme table
//!
//! Each theme is data: a set of hard requirements, an additive bonus
//! table, and its display copy. The builder in `bundles` is shared.

use crate::types::{Plant, PlantType, SunExposure, WaterNeeds};

/// Single attribute test used by theme requirements and bonuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantCheck {
    Native,
    PollinatorFriendly,
    BeginnerFriendly,
    /// Confirmed non-toxic
    NonToxic,
    /// Not confirmed toxic (unknown passes)
    NotToxic,
    /// Water needs not confirmed high (unknown passes)
    NotHighWater,
    Sun(SunExposure),
    Water(WaterNeeds),
    Type(PlantType),
}

impl PlantCheck {
    pub fn passes(&self, plant: &Plant) -> bool {
        match self {
            PlantCheck::Native => plant.is_native(),
            PlantCheck::PollinatorFriendly => plant.is_pollinator_friendly(),
            PlantCheck::BeginnerFriendly => plant.is_beginner_friendly(),
            PlantCheck::NonToxic => plant.is_non_toxic(),
            PlantCheck::NotToxic => !plant.is_toxic(),
            PlantCheck::NotHighWater => plant.water_needs != Some(WaterNeeds::High),
            PlantCheck::Sun(exposure) => plant.has_sun_exposure(*exposure),
            PlantCheck::Water(needs) => plant.water_needs == Some(*needs),
            PlantCheck::Type(plant_type) => plant.plant_type == Some(*plant_type),
        }
    }
}

#[derive(Debug)]
pub struct BundleTheme {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub criteria: &'static [&'static str],
    /// All must pass (in addition to an ideal zone match)
    pub requires: &'static [PlantCheck],
    pub bonuses: &'static [(PlantCheck, i32)],
}

impl BundleTheme {
    pub fn accepts(&self, plant: &Plant) -> bool {
        self.requires.iter().all(|check| check.passes(plant))
    }

    pub fn bonus(&self, plant: &Plant) -> i32 {
        self.bonuses
            .iter()
            .filter(|(check, _)| check.passes(plant))
            .map(|(_, points)| points)
            .sum()
    }
}

pub static BEGINNER_STARTER: BundleTheme = BundleTheme {
    id: "beginner-starter",
    name: "Beginner Starter Pack",
    description: "Easy-to-grow, forgiving plants perfect for first-time gardeners. These low-maintenance beauties will build your confidence!",
    criteria: &[
        "Beginner-friendly",
        "Pet-safe or unknown toxicity",
        "Zone-appropriate",
        "Low to medium water needs",
        "Includes pollinator-friendly options",
    ],
    requires: &[PlantCheck::BeginnerFriendly, PlantCheck::NotToxic, PlantCheck::NotHighWater],
    bonuses: &[
        (PlantCheck::PollinatorFriendly, 30),
        (PlantCheck::Native, 20),
        (PlantCheck::NonToxic, 15),
        (PlantCheck::Water(WaterNeeds::Low), 10),
    ],
};

pub static POLLINATOR_GARDEN: BundleTheme = BundleTheme {
    id: "pollinator-garden",
    name: "Pollinator Garden Pack",
    description: "Create a buzzing paradise for bees, butterflies, and hummingbirds with this carefully selected collection of nectar-rich plants.",
    criteria: &[
        "All pollinator-friendly",
        "Extended bloom season",
        "Mix of plant types and heights",
        "Zone-appropriate",
        "Native plants prioritized",
    ],
    requires: &[PlantCheck::PollinatorFriendly],
    bonuses: &[
        (PlantCheck::Native, 40),
        (PlantCheck::Type(PlantType::Perennial), 20),
        (PlantCheck::BeginnerFriendly, 15),
        (PlantCheck::Type(PlantType::Shrub), 10),
        (PlantCheck::Type(PlantType::Tree), 10),
    ],
};

pub static NATIVE_GARDEN: BundleTheme = BundleTheme {
    id: "native-garden",
    name: "Native Garden Pack",
    description: "Embrace your local ecosystem with these native plants that support wildlife, require less water, and thrive in your climate.",
    criteria: &[
        "All native plants",
        "Pollinator-friendly prioritized",
        "Drought-tolerant options",
        "Zone-appropriate",
        "Low-maintenance selections",
    ],
    requires: &[PlantCheck::Native],
    bonuses: &[
        (PlantCheck::PollinatorFriendly, 50),
        (PlantCheck::Water(WaterNeeds::Low), 30),
        (PlantCheck::BeginnerFriendly, 20),
        (PlantCheck::Type(PlantType::Perennial), 15),
    ],
};

pub static SHADE_GARDEN: BundleTheme = BundleTheme {
    id: "shade-garden",
    name: "Shade Garden Pack",
    description: "Transform shady spots into lush gardens with these shade-loving plants that bring color and life to darker areas.",
    criteria: &[
        "Shade-tolerant",
        "Low to medium water needs",
        "Zone-appropriate",
        "Native options prioritized",
        "Mix of textures and colors",
    ],
    requires: &[PlantCheck::Sun(SunExposure::Shade)],
    bonuses: &[
        (PlantCheck::Native, 30),
        (PlantCheck::BeginnerFriendly, 25),
        (PlantCheck::NonToxic, 20),
        (PlantCheck::Water(WaterNeeds::Low), 15),
        (PlantCheck::Type(PlantType::Perennial), 10),
    ],
};

pub static LOW_WATER_GARDEN: BundleTheme = BundleTheme {
    id: "low-water-garden",
    name: "Drought-Resistant Garden Pack",
    description: "Perfect for water conservation! These tough plants thrive with minimal irrigation once established.",
    criteria: &[
        "Low water needs",
        "Drought-tolerant once established",
        "Zone-appropriate",
        "Native and pollinator-friendly options",
        "Low-maintenance",
    ],
    requires: &[PlantCheck::Water(WaterNeeds::Low)],
    bonuses: &[
        (PlantCheck::Native, 40),
        (PlantCheck::PollinatorFriendly, 30),
        (PlantCheck::BeginnerFriendly, 20),
        (PlantCheck::Type(PlantType::Perennial), 15),
    ],
};

pub static FULL_SUN_GARDEN: BundleTheme = BundleTheme {
    id: "full-sun-garden",
    name: "Full Sun Garden Pack",
    description: "Brighten up sunny spots with these sun-loving plants that thrive in direct sunlight.",
    criteria: &[
        "Full sun tolerance",
        "Zone-appropriate",
        "Pollinator-friendly prioritized",
        "Mix of heights and colors",
        "Drought-tolerant options included",
    ],
    requires: &[PlantCheck::Sun(SunExposure::FullSun)],
    bonuses: &[
        (PlantCheck::PollinatorFriendly, 35),
        (PlantCheck::Native, 30),
        (PlantCheck::BeginnerFriendly, 20),
        (PlantCheck::Water(WaterNeeds::Low), 15),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToxicityToPets;

    #[test]
    fn test_unknown_values_and_requirements() {
        let unknown = Plant::new("u", "Unknown", "U u");
        assert!(PlantCheck::NotToxic.passes(&unknown));
        assert!(PlantCheck::NotHighWater.passes(&unknown));
        assert!(!PlantCheck::NonToxic.passes(&unknown));
        assert!(!PlantCheck::Water(WaterNeeds::Low).passes(&unknown));
        // beginner flag must be confirmed
        assert!(!BEGINNER_STARTER.accepts(&unknown));
    }

    #[test]
    fn test_beginner_theme_rejects_toxic_and_thirsty() {
        let base = Plant { beginner_friendly: Some(true), ..Plant::new("b", "B", "B b") };
        assert!(BEGINNER_STARTER.accepts(&base));

        let toxic = Plant { toxicity_to_pets: ToxicityToPets::Toxic, ..base.clone() };
        assert!(!BEGINNER_STARTER.accepts(&toxic));

        let thirsty = Plant { water_needs: Some(WaterNeeds::High), ..base };
        assert!(!BEGINNER_STARTER.accepts(&thirsty));
    }

    #[test]
    fn test_bonus_tables_are_additive() {
        let plant = Plant {
            is_native: Some(true),
            is_pollinator_friendly: Some(true),
            beginner_friendly: Some(true),
            toxicity_to_pets: ToxicityToPets::NonToxic,
            water_needs: Some(WaterNeeds::Low),
            plant_type: Some(PlantType::Shrub),
            ..Plant::new("all", "All", "A a")
        };
        assert_eq!(BEGINNER_STARTER.bonus(&plant), 75);
        assert_eq!(POLLINATOR_GARDEN.bonus(&plant), 65);
        assert_eq!(NATIVE_GARDEN.bonus(&plant), 100);
        assert_eq!(SHADE_GARDEN.bonus(&plant), 90);
        assert_eq!(LOW_WATER_GARDEN.bonus(&plant), 90);
        assert_eq!(FULL_SUN_GARDEN.bonus(&plant), 100);

        assert_eq!(NATIVE_GARDEN.bonus(&Plant::new("none", "None", "N n")), 0);
    }
}
