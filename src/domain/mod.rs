//! # Domain Module
//!
//! The planet entity, the template-to-filter builder, and the resource
//! service that owns every business rule (uniqueness conflicts, existence
//! checks). Everything above this module is transport plumbing; everything
//! below it is storage plumbing.

pub mod errors;
pub mod filter;
pub mod planet;
pub mod service;

pub use errors::{ServiceError, ServiceResult};
pub use filter::{FieldFilter, PlanetField, PlanetFilter};
pub use planet::Planet;
pub use service::PlanetService;
