use std::fmt;
use serde::{Deserialize, Serialize};

use crate::workout_engine::config::{DEFAULT_ROUNDS, DEFAULT_ROUNDS_PER_SWITCH};

// ---------------------------------------------------------------------------
// Catalog primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub description: String,
}

impl Exercise {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Exercise { name: name.into(), description: description.into() }
    }
}

/// A themed group of exercises (e.g. legs, arms) with its display emoji.
///
/// Field names follow the catalog document (`categoryName`, `emoji`,
/// `exercises`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "categoryName")]
    pub id: String,
    pub emoji: String,
    pub exercises: Vec<Exercise>,
}

impl Category {
    pub fn new(id: impl Into<String>, emoji: impl Into<String>, exercises: Vec<Exercise>) -> Self {
        Category { id: id.into(), emoji: emoji.into(), exercises }
    }

    pub fn summary(&self) -> CategorySummary {
        CategorySummary { id: self.id.clone(), emoji: self.emoji.clone() }
    }
}

/// Category display data without its exercises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    #[serde(rename = "categoryName")]
    pub id: String,
    pub emoji: String,
}

impl fmt::Display for CategorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji, self.id)
    }
}

// ---------------------------------------------------------------------------
// Workout request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRequest {
    pub categories: Vec<String>,
    pub total_rounds: u32,
    /// Consecutive rounds drawn from one category before the rotation moves on.
    pub rounds_per_switch: u32,
    /// `Some(seed)` reproduces the exact series; `None` uses OS entropy.
    pub rng_seed: Option<u64>,
}

impl WorkoutRequest {
    /// Request over `categories` with default round counts and entropy seeding.
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WorkoutRequest {
            categories: categories.into_iter().map(Into::into).collect(),
            total_rounds: DEFAULT_ROUNDS,
            rounds_per_switch: DEFAULT_ROUNDS_PER_SWITCH,
            rng_seed: None,
        }
    }

    pub fn rounds(mut self, total_rounds: u32) -> Self {
        self.total_rounds = total_rounds;
        self
    }

    pub fn switch_every(mut self, rounds_per_switch: u32) -> Self {
        self.rounds_per_switch = rounds_per_switch;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

/// One round of the workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub category: String,
    pub emoji: String,
    pub exercise: String,
    pub description: String,
}

impl fmt::Display for WorkoutEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.emoji, self.category, self.exercise)
    }
}

/// The generated sequence, exactly `total_rounds` entries long.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutSeries {
    entries: Vec<WorkoutEntry>,
}

impl WorkoutSeries {
    pub(crate) fn with_capacity(rounds: usize) -> Self {
        WorkoutSeries { entries: Vec::with_capacity(rounds) }
    }

    pub(crate) fn push(&mut self, entry: WorkoutEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WorkoutEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkoutEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<WorkoutEntry> {
        self.entries
    }

    /// Maximal runs of consecutive same-category rounds, as `(category, length)`.
    pub fn category_runs(&self) -> Vec<(&str, usize)> {
        let mut runs: Vec<(&str, usize)> = Vec::new();
        for entry in &self.entries {
            match runs.last_mut() {
                Some((cat, len)) if *cat == entry.category => *len += 1,
                _ => runs.push((entry.category.as_str(), 1)),
            }
        }
        runs
    }
}

impl fmt::Display for WorkoutSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            writeln!(f, "{:>3}. {}", i + 1, entry)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a WorkoutSeries {
    type Item = &'a WorkoutEntry;
    type IntoIter = std::slice::Iter<'a, WorkoutEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for WorkoutSeries {
    type Item = WorkoutEntry;
    type IntoIter = std::vec::IntoIter<WorkoutEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
