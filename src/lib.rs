//! planetd - A small, self-hostable HTTP catalog service for planet records
//!
//! CRUD over a single resource with query-by-template filtering: empty
//! template fields are ignored, populated fields match as case-insensitive
//! substrings, and the store enforces exact uniqueness on planet names.

pub mod cli;
pub mod domain;
pub mod http;
pub mod observability;
pub mod store;
