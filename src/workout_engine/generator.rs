use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

use crate::workout_engine::{
    catalog::CatalogProvider,
    error::WorkoutError,
    models::{Category, WorkoutEntry, WorkoutRequest, WorkoutSeries},
    pool::DrawPool,
    shuffle::shuffle,
};

/// Look up each selected category in `catalog`, in selection order.
///
/// Repeated ids in the selection count once; the first catalog entry with a
/// given id wins.
fn selected_categories<'a>(
    request: &WorkoutRequest,
    catalog: &'a [Category],
) -> Result<Vec<&'a Category>, WorkoutError> {
    let mut selected: Vec<&'a Category> = Vec::with_capacity(request.categories.len());
    for id in &request.categories {
        if selected.iter().any(|c| c.id == *id) {
            continue;
        }
        let category = catalog
            .iter()
            .find(|c| c.id == *id)
            .ok_or_else(|| WorkoutError::InvalidInput(format!("Unknown exercise category: {id}")))?;
        if category.exercises.is_empty() {
            return Err(WorkoutError::InvalidInput(format!(
                "Exercise category {id} has no exercises"
            )));
        }
        selected.push(category);
    }
    Ok(selected)
}

/// Generate a workout from an already-loaded catalog.
///
/// Seeds the random source from `request.rng_seed`, or from OS entropy when it
/// is `None`.
pub fn generate_workout(
    request: &WorkoutRequest,
    catalog: &[Category],
) -> Result<WorkoutSeries, WorkoutError> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_workout_with_rng(request, catalog, &mut rng)
}

/// Generate a workout drawing all randomness from `rng`.
///
/// Categories are visited in one random rotation, fixed for the whole call.
/// Each visit fills up to `rounds_per_switch` consecutive rounds from that
/// category's [`DrawPool`], then moves to the next category. The last visit is
/// cut short so the series is exactly `total_rounds` long.
pub fn generate_workout_with_rng<R: Rng + ?Sized>(
    request: &WorkoutRequest,
    catalog: &[Category],
    rng: &mut R,
) -> Result<WorkoutSeries, WorkoutError> {
    request.validate()?;

    let mut rotation = selected_categories(request, catalog)?;
    shuffle(&mut rotation, rng);
    debug!(
        rotation = ?rotation.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        total_rounds = request.total_rounds,
        rounds_per_switch = request.rounds_per_switch,
        "generating workout"
    );

    // pools[i] belongs to rotation[i]
    let mut pools: Vec<DrawPool<'_>> =
        rotation.iter().map(|c| DrawPool::new(&c.exercises)).collect();

    let total = request.total_rounds as usize;
    let per_switch = request.rounds_per_switch as usize;
    let mut series = WorkoutSeries::with_capacity(total);
    let mut category_index = 0;

    while series.len() < total {
        let category = rotation[category_index];
        let pool = &mut pools[category_index];
        let batch = (total - series.len()).min(per_switch);
        trace!(category = %category.id, batch, "filling rounds");

        for _ in 0..batch {
            let exercise = pool.draw(rng).ok_or_else(|| {
                WorkoutError::InvalidInput(format!("Exercise category {} has no exercises", category.id))
            })?;
            series.push(WorkoutEntry {
                category: category.id.clone(),
                emoji: category.emoji.clone(),
                exercise: exercise.name.clone(),
                description: exercise.description.clone(),
            });
        }

        category_index = (category_index + 1) % rotation.len();
    }

    Ok(series)
}

/// Validate `request`, fetch its categories from `provider` once, and generate.
///
/// Provider failures come back as [`WorkoutError::CatalogUnavailable`] with the
/// provider's error untouched. Nothing is fetched for an invalid request.
pub fn generate_from_provider<P: CatalogProvider + ?Sized>(
    provider: &P,
    request: &WorkoutRequest,
) -> Result<WorkoutSeries, WorkoutError> {
    request.validate()?;
    let categories = provider.fetch_categories(Some(&request.categories))?;
    generate_workout(request, &categories)
}
