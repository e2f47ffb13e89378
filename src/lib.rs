//! # atorbazar
//!
//! Filtered, paginated read API for the Atorbazar e-commerce backend.
//!
//! Query strings are turned into typed predicates by per-resource composers
//! ([`filtering`]), run against a [`ReadStore`] by the paginator
//! ([`pagination`]) and served through Axum ([`routes`]).

pub mod config;
pub mod entities;
pub mod errors;
pub mod filtering;
pub mod pagination;
pub mod routes;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use errors::ApiError;
pub use filtering::{QueryDescriptor, QueryParams, ResourceKind, apply_filters};
pub use pagination::{PageEnvelope, PageRequest, PaginationSettings, paginate};
pub use routes::{AppState, router};
pub use store::ReadStore;
