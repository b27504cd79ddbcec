//! Core workout engine: catalog access, draw pools, and series generation.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: exercises, categories, request/series structs |
//! | `config`     | Default and minimum round counts, catalog location |
//! | `error`      | `WorkoutError` and `CatalogError` |
//! | `validation` | Rule checks on a request, reporting every violation |
//! | `shuffle`    | Fisher-Yates shuffle used for the rotation and the pools |
//! | `pool`       | Per-category draw pool with refill-on-empty |
//! | `catalog`    | `CatalogProvider` trait, JSON and in-memory catalogs |
//! | `generator`  | `generate_workout()` and friends |

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod pool;
pub mod shuffle;
pub mod validation;

// Re-export the public API surface so callers can use
// `workout_engine::generate_workout` without reaching into sub-modules.
pub use catalog::{CatalogProvider, JsonCatalog, StaticCatalog};
pub use error::{CatalogError, WorkoutError};
pub use generator::{generate_from_provider, generate_workout, generate_workout_with_rng};
pub use models::{
    Category, CategorySummary, Exercise, WorkoutEntry, WorkoutRequest, WorkoutSeries,
};
pub use validation::validate_request;
