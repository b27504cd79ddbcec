//! Defaults and limits for workout requests, plus where the catalog comes from.

/// Rounds in a workout when the caller does not choose.
pub const DEFAULT_ROUNDS: u32 = 10;

/// Rounds drawn from one category before switching, when the caller does not choose.
pub const DEFAULT_ROUNDS_PER_SWITCH: u32 = 1;

/// Smallest allowed `total_rounds`.
pub const MIN_ROUNDS: u32 = 1;

/// Smallest allowed `rounds_per_switch`.
pub const MIN_ROUNDS_PER_SWITCH: u32 = 1;

/// Environment variable pointing at a catalog JSON file that replaces the
/// embedded one.
pub const EXERCISES_PATH_ENV: &str = "HIIT_EXERCISES_PATH";

/// Catalog compiled into the crate.
pub const BUILTIN_EXERCISES_JSON: &str = include_str!("../../data/exercises.json");
