//! # Observability Module
//!
//! Structured logging for the planet service.

mod logger;

pub use logger::{Logger, Severity};
