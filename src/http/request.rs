//! Request payload types and field validation
//!
//! Non-blank validation happens here, before any service call. Whitespace
//! counts as blank.

use serde::Deserialize;

use crate::domain::Planet;

use super::errors::{ApiError, ApiResult};

/// Body of `POST /planets`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanetRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub climate: String,
    #[serde(default)]
    pub terrain: String,
}

impl CreatePlanetRequest {
    /// Validate all fields and convert into a transient planet.
    pub fn into_planet(self) -> ApiResult<Planet> {
        for (field, value) in [
            ("name", &self.name),
            ("climate", &self.climate),
            ("terrain", &self.terrain),
        ] {
            if value.trim().is_empty() {
                return Err(ApiError::Validation(format!("{field} must not be blank")));
            }
        }
        Ok(Planet::new(self.name, self.climate, self.terrain))
    }
}

/// Query string of `GET /planets`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPlanetsQuery {
    pub terrain: Option<String>,
    pub climate: Option<String>,
}
