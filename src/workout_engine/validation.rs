//! Rule checks on a [`WorkoutRequest`] before any catalog I/O happens.
//!
//! Every violated rule is reported, not just the first, so a caller can show
//! the user the whole list at once.

use crate::workout_engine::{
    config::{MIN_ROUNDS, MIN_ROUNDS_PER_SWITCH},
    error::WorkoutError,
    models::WorkoutRequest,
};

/// All rule violations in `request`, in a fixed order. Empty means valid.
pub fn validate_request(request: &WorkoutRequest) -> Vec<String> {
    let mut errors = Vec::new();

    if request.categories.is_empty() {
        errors.push("Select at least one exercise category.".to_string());
    }
    if request.total_rounds < MIN_ROUNDS {
        errors.push(format!("Number of rounds must be at least {MIN_ROUNDS}."));
    }
    if request.rounds_per_switch < MIN_ROUNDS_PER_SWITCH {
        errors.push(format!(
            "Rounds before category change must be at least {MIN_ROUNDS_PER_SWITCH}."
        ));
    }

    errors
}

impl WorkoutRequest {
    /// `Ok(())` when the request satisfies every rule, otherwise
    /// [`WorkoutError::InvalidInput`] carrying all messages.
    pub fn validate(&self) -> Result<(), WorkoutError> {
        let errors = validate_request(self);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(WorkoutError::InvalidInput(errors.join(" ")))
        }
    }
}
