//! Recognizer label taxonomy and its mapping onto front-end categories.

use serde::{Deserialize, Serialize};

/// Person names.
pub const PERSON: &str = "PERSON";
/// Nationalities, religious and political groups.
pub const NORP: &str = "NORP";
/// Countries, cities, states.
pub const GPE: &str = "GPE";
/// Non-GPE locations: mountain ranges, bodies of water, regions.
pub const LOC: &str = "LOC";
/// Buildings, airports, highways, bridges.
pub const FAC: &str = "FAC";
/// Companies, agencies, institutions.
pub const ORG: &str = "ORG";
/// Absolute or relative dates and periods.
pub const DATE: &str = "DATE";
/// Times smaller than a day.
pub const TIME: &str = "TIME";
/// Monetary values.
pub const MONEY: &str = "MONEY";
/// Percentages.
pub const PERCENT: &str = "PERCENT";
/// Measurements with units.
pub const QUANTITY: &str = "QUANTITY";
/// "first", "2nd", ...
pub const ORDINAL: &str = "ORDINAL";
/// Numerals that fit no other label.
pub const CARDINAL: &str = "CARDINAL";

/// Front-end entity categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    /// People and groups of people.
    People,
    /// Geopolitical entities, locations, and facilities.
    Places,
    /// Organizations.
    Organizations,
    /// Dates and times.
    Dates,
    /// Monetary values.
    Money,
    /// Percentages.
    Percentages,
    /// Quantities, ordinals, and cardinals.
    Values,
    /// Anything the lookup table does not know.
    Custom,
}

impl EntityCategory {
    /// Lowercase wire name of the category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Places => "places",
            Self::Organizations => "organizations",
            Self::Dates => "dates",
            Self::Money => "money",
            Self::Percentages => "percentages",
            Self::Values => "values",
            Self::Custom => "custom",
        }
    }
}

/// Map a recognizer label onto its front-end category; unknown labels become `Custom`.
pub fn category_for_label(label: &str) -> EntityCategory {
    match label {
        PERSON | NORP => EntityCategory::People,
        GPE | LOC | FAC => EntityCategory::Places,
        ORG => EntityCategory::Organizations,
        DATE | TIME => EntityCategory::Dates,
        MONEY => EntityCategory::Money,
        PERCENT => EntityCategory::Percentages,
        QUANTITY | ORDINAL | CARDINAL => EntityCategory::Values,
        _ => EntityCategory::Custom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpe_maps_to_places() {
        assert_eq!(category_for_label("GPE"), EntityCategory::Places);
        assert_eq!(category_for_label(GPE).as_str(), "places");
    }

    #[test]
    fn every_known_label_has_a_category() {
        let expected = [
            (PERSON, "people"),
            (NORP, "people"),
            (GPE, "places"),
            (LOC, "places"),
            (FAC, "places"),
            (ORG, "organizations"),
            (DATE, "dates"),
            (TIME, "dates"),
            (MONEY, "money"),
            (PERCENT, "percentages"),
            (QUANTITY, "values"),
            (ORDINAL, "values"),
            (CARDINAL, "values"),
        ];
        for (label, category) in expected {
            assert_eq!(category_for_label(label).as_str(), category, "{label}");
        }
    }

    #[test]
    fn unknown_labels_fall_back_to_custom() {
        assert_eq!(category_for_label("LAW"), EntityCategory::Custom);
        assert_eq!(category_for_label("gpe"), EntityCategory::Custom);
        assert_eq!(category_for_label(""), EntityCategory::Custom);
    }

    #[test]
    fn categories_serialize_lowercase() {
        let json = serde_json::to_string(&EntityCategory::Organizations).expect("json");
        assert_eq!(json, "\"organizations\"");
        let parsed: EntityCategory = serde_json::from_str("\"money\"").expect("parse");
        assert_eq!(parsed, EntityCategory::Money);
    }
}
