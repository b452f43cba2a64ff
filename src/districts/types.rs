//! District record type.
//!
//! Field names serialize to the camelCase keys used by `data.json`.

use serde::Serialize;

/// Descriptive attributes of one district.
///
/// All text is embedded at compile time; records live in a `static` table
/// and are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictRecord {
    /// District name. Used as the map key, not serialized as a field.
    #[serde(skip)]
    pub name: &'static str,
    pub tagline: &'static str,
    pub geography: &'static str, // rivers, terrain, climate
    pub historical_places: &'static [&'static str],
    /// Each entry is itself a comma-separated list of festivals/arts.
    pub culture_festivals: &'static [&'static str],
    pub folk_dances: &'static [&'static str],
    /// "Name — role" strings
    pub notable_personalities: &'static [&'static str],
    pub food: &'static [&'static str],
    pub agriculture_economy: &'static [&'static str],
    pub industries: &'static [&'static str],
    /// May be empty
    pub natural_sanctuaries: &'static [&'static str],
    pub tourist_attractions: &'static [&'static str],
}

impl DistrictRecord {
    /// Serialized field names, in declaration order.
    pub const FIELD_NAMES: [&'static str; 11] = [
        "tagline",
        "geography",
        "historicalPlaces",
        "cultureFestivals",
        "folkDances",
        "notablePersonalities",
        "food",
        "agricultureEconomy",
        "industries",
        "naturalSanctuaries",
        "touristAttractions",
    ];

    /// True if `candidate` names this district, ignoring ASCII case and
    /// surrounding whitespace.
    pub fn matches_name(&self, candidate: &str) -> bool {
        self.name.eq_ignore_ascii_case(candidate.trim())
    }
}
