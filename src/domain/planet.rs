//! Planet entity
//!
//! The sole resource this service manages. A planet with `id == None` is a
//! transient instance (a creation payload or a filter template); the store
//! assigns the id on first successful insert and it never changes afterwards.

use serde::{Deserialize, Serialize};

use super::filter::PlanetField;

/// A planet record.
///
/// Equality is by value over all four fields, which is what both the tests
/// and template matching rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    /// Surrogate identifier, assigned by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Unique planet name (case-sensitive exact uniqueness).
    pub name: String,

    /// Climate description; may be empty.
    #[serde(default)]
    pub climate: String,

    /// Terrain description; may be empty.
    #[serde(default)]
    pub terrain: String,
}

impl Planet {
    /// Create a transient planet, ready for insertion.
    pub fn new(
        name: impl Into<String>,
        climate: impl Into<String>,
        terrain: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            climate: climate.into(),
            terrain: terrain.into(),
        }
    }

    /// Create a filter template with only climate/terrain populated.
    ///
    /// `None` and `Some("")` are equivalent here: both leave the field out
    /// of any filter built from this template.
    pub fn template(climate: Option<&str>, terrain: Option<&str>) -> Self {
        Self {
            id: None,
            name: String::new(),
            climate: climate.unwrap_or_default().to_string(),
            terrain: terrain.unwrap_or_default().to_string(),
        }
    }

    /// Value of one business field. The id is not addressable here on
    /// purpose: filters are only ever built over business fields.
    pub fn field(&self, field: PlanetField) -> &str {
        match field {
            PlanetField::Name => &self.name,
            PlanetField::Climate => &self.climate,
            PlanetField::Terrain => &self.terrain,
        }
    }

    /// Whether this instance has been persisted.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Copy of this planet with the given id assigned.
    pub fn with_id(&self, id: u64) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }
}
