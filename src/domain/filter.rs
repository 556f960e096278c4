//! # Planet Filter
//!
//! Turns a partially-populated planet template into an explicit, typed
//! filter: every empty field is excluded, every non-empty field becomes a
//! case-insensitive substring predicate, and the predicates are combined
//! with AND. The id never participates.
//!
//! This is the one piece of non-obvious query semantics in the system; any
//! store backend must route its "find by template" primitive through
//! [`PlanetFilter::matches`] so all backends agree on matching behavior.

use serde::{Deserialize, Serialize};

use super::planet::Planet;

/// Business fields a filter can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanetField {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "climate")]
    Climate,
    #[serde(rename = "terrain")]
    Terrain,
}

impl PlanetField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanetField::Name => "name",
            PlanetField::Climate => "climate",
            PlanetField::Terrain => "terrain",
        }
    }
}

/// A single active predicate: field value must contain `needle`,
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFilter {
    pub field: PlanetField,
    /// Stored lowercased so matching lowercases only the record side.
    needle: String,
}

impl FieldFilter {
    /// Create a substring predicate on the given field.
    pub fn contains(field: PlanetField, needle: &str) -> Self {
        Self {
            field,
            needle: needle.to_lowercase(),
        }
    }

    /// Check a planet record against this predicate.
    pub fn matches(&self, planet: &Planet) -> bool {
        planet.field(self.field).to_lowercase().contains(&self.needle)
    }
}

/// The full filter specification: zero or more predicates ANDed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetFilter {
    pub filters: Vec<FieldFilter>,
}

impl PlanetFilter {
    /// Build a filter from a template planet.
    ///
    /// Total over all inputs: an all-empty template yields an unrestricted
    /// filter that matches every record.
    pub fn from_template(template: &Planet) -> Self {
        let mut filters = Vec::new();
        for field in [PlanetField::Name, PlanetField::Climate, PlanetField::Terrain] {
            let value = template.field(field);
            if !value.is_empty() {
                filters.push(FieldFilter::contains(field, value));
            }
        }
        Self { filters }
    }

    /// Whether this filter matches every record.
    pub fn is_unrestricted(&self) -> bool {
        self.filters.is_empty()
    }

    /// Check a planet record against all predicates.
    pub fn matches(&self, planet: &Planet) -> bool {
        self.filters.iter().all(|f| f.matches(planet))
    }
}
