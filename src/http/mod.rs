//! # HTTP Module
//!
//! Axum-based HTTP surface for the planet catalog. Maps requests to service
//! calls and service outcomes to status codes, and performs the non-blank
//! field validation that must never reach the service.

pub mod config;
pub mod errors;
pub mod request;
pub mod routes;
pub mod server;

pub use config::HttpConfig;
pub use errors::{ApiError, ApiResult};
pub use request::CreatePlanetRequest;
pub use routes::{planet_routes, AppState};
pub use server::HttpServer;
