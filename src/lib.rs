//! # hiit_workout_gen
//!
//! Randomised HIIT workout series from a set of exercise categories.
//!
//! A workout is a sequence of rounds, one exercise per round. The caller picks
//! which categories to train, how many rounds to do, and how many consecutive
//! rounds stay on one category before switching to the next.
//!
//! ## How it works
//!
//! 1. Build a [`WorkoutRequest`] with the selected categories, round counts and
//!    an optional RNG seed.
//! 2. Call [`generate_from_provider`] with a [`CatalogProvider`] (or
//!    [`generate_workout`] with categories already in hand). The categories are
//!    put in a random rotation, and each visit draws up to `rounds_per_switch`
//!    exercises from that category before moving on.
//! 3. The returned [`WorkoutSeries`] holds exactly `total_rounds` entries.
//!
//! ## Key properties
//!
//! - **No early repeats**: within a category, an exercise comes back only after
//!   every other exercise of that category has been used since the last reshuffle.
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces the same series, and
//!   [`generate_workout_with_rng`] accepts any [`rand::Rng`].
//! - **All or nothing**: errors never come with a partial series.
//!
//! ## Quick start
//!
//! ```rust
//! use hiit_workout_gen::{generate_from_provider, JsonCatalog, WorkoutRequest};
//!
//! let catalog = JsonCatalog::builtin().unwrap();
//! let request = WorkoutRequest::new(["Legs", "Abs"])
//!     .rounds(12)
//!     .switch_every(2)
//!     .seed(42);
//!
//! let series = generate_from_provider(&catalog, &request).unwrap();
//! assert_eq!(series.len(), 12);
//! for entry in &series {
//!     println!("{entry}");
//! }
//! ```

pub mod workout_engine;

// Convenience re-exports so callers can use `hiit_workout_gen::generate_workout`
// directly without reaching into `workout_engine::`.
pub use workout_engine::{
    generate_from_provider, generate_workout, generate_workout_with_rng, validate_request,
    CatalogError, CatalogProvider, Category, CategorySummary, Exercise, JsonCatalog,
    StaticCatalog, WorkoutEntry, WorkoutError, WorkoutRequest, WorkoutSeries,
};
