//! # Planet Routes
//!
//! Axum handlers for the planet resource. The id and name lookups use
//! distinct path segments (`/planets/{id}` vs `/planets/name/{name}`) so
//! both are unambiguously reachable.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::domain::{Planet, PlanetService};
use crate::observability::{Logger, Severity};
use crate::store::PlanetStore;

use super::errors::ApiError;
use super::request::{CreatePlanetRequest, ListPlanetsQuery};

/// State shared across handlers.
pub struct AppState<S: PlanetStore> {
    pub service: PlanetService<S>,
}

/// Shared state type
type RouterState<S> = Arc<AppState<S>>;

/// Create the planet resource router.
pub fn planet_routes<S: PlanetStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/planets", get(list_handler::<S>).post(create_handler::<S>))
        .route(
            "/planets/{id}",
            get(get_by_id_handler::<S>).delete(delete_handler::<S>),
        )
        .route("/planets/name/{name}", get(get_by_name_handler::<S>))
        .with_state(state)
}

/// Create planet handler
async fn create_handler<S: PlanetStore + 'static>(
    State(state): State<RouterState<S>>,
    Json(body): Json<CreatePlanetRequest>,
) -> Result<(StatusCode, Json<Planet>), ApiError> {
    let planet = body.into_planet()?;
    let created = state.service.create(planet).map_err(|e| {
        let api_err = ApiError::from(e);
        if matches!(api_err, ApiError::Conflict(_)) {
            Logger::log(Severity::Warn, "planet_create_conflict", &[("error", &api_err.to_string())]);
        }
        api_err
    })?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List planets handler (optional terrain/climate filters)
async fn list_handler<S: PlanetStore + 'static>(
    State(state): State<RouterState<S>>,
    Query(query): Query<ListPlanetsQuery>,
) -> Result<Json<Vec<Planet>>, ApiError> {
    let planets = state
        .service
        .find_all(query.terrain.as_deref(), query.climate.as_deref())?;
    Ok(Json(planets))
}

/// Get planet by id handler
async fn get_by_id_handler<S: PlanetStore + 'static>(
    State(state): State<RouterState<S>>,
    Path(id): Path<u64>,
) -> Result<Json<Planet>, ApiError> {
    let planet = state.service.find_by_id(id)?;
    Ok(Json(planet))
}

/// Get planet by exact name handler
async fn get_by_name_handler<S: PlanetStore + 'static>(
    State(state): State<RouterState<S>>,
    Path(name): Path<String>,
) -> Result<Json<Planet>, ApiError> {
    let planet = state.service.find_by_name(&name)?;
    Ok(Json(planet))
}

/// Delete planet handler
async fn delete_handler<S: PlanetStore + 'static>(
    State(state): State<RouterState<S>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_by_id(id).map_err(|e| {
        let api_err = ApiError::from(e);
        if matches!(api_err, ApiError::NotFound) {
            Logger::log(Severity::Warn, "planet_delete_miss", &[("id", &id.to_string())]);
        }
        api_err
    })?;
    Ok(StatusCode::NO_CONTENT)
}
