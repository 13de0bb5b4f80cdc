//! Read-side API for listing KOL records.
//!
//! One route, `GET /kols`, returning a paginated, filterable, sortable page
//! of records with diacritic-insensitive keyword search. The library exposes
//! the pieces the binary and the integration tests assemble: the entity
//! mapping, the parameter interpreters, the query executor and the response
//! types.

pub mod config;
pub mod entity;
pub mod errors;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod query;
pub mod routes;
pub mod search;
pub mod sort;

pub use models::{KolDto, KolListResponse, ResultStatus};
