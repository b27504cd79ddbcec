//! End-to-end demo of the workout generator.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=hiit_workout_gen=trace` to watch the rotation and batches.
//! Set `HIIT_EXERCISES_PATH=/path/to/exercises.json` to use your own catalog.
//!
//! Shows:
//!
//! 1. **Categories**: the summaries offered by the catalog.
//! 2. **Seeded workout**: same seed, same series, every run.
//! 3. **Switch intervals**: one catalog, three `rounds_per_switch` values.
//! 4. **Errors**: what an invalid request looks like.

use hiit_workout_gen::{
    generate_from_provider, CatalogProvider, JsonCatalog, WorkoutError, WorkoutRequest,
};

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_workout(title: &str, catalog: &JsonCatalog, request: &WorkoutRequest) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "  {title}  rounds: {}  switch every: {}  seed: {:?}",
        request.total_rounds, request.rounds_per_switch, request.rng_seed
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    match generate_from_provider(catalog, request) {
        Ok(series) => {
            for (i, entry) in series.iter().enumerate() {
                println!("  {:>3}. {}", i + 1, entry);
                println!("       {}", entry.description);
            }
        }
        Err(err) => println!("  error: {err}"),
    }
    println!();
}

fn main() -> Result<(), WorkoutError> {
    init_tracing();

    let catalog = JsonCatalog::from_env_or_builtin()?;

    // ── Categories ───────────────────────────────────────────────────────────
    println!();
    println!("══ Categories ══");
    let summaries = catalog.category_summaries()?;
    for summary in &summaries {
        println!("  {summary}");
    }
    println!();

    let all: Vec<String> = summaries.iter().map(|s| s.id.clone()).collect();

    // ── Seeded workout ───────────────────────────────────────────────────────
    println!("══ Seeded workout ══");
    println!();
    let request = WorkoutRequest::new(all.clone()).rounds(12).switch_every(2).seed(2024);
    print_workout("All categories", &catalog, &request);

    // ── Switch intervals ─────────────────────────────────────────────────────
    println!("══ Switch intervals ══");
    println!();
    for per_switch in [1, 3, 5] {
        let request = WorkoutRequest::new(all.clone())
            .rounds(10)
            .switch_every(per_switch)
            .seed(7);
        print_workout(&format!("Switch every {per_switch}"), &catalog, &request);
    }

    // ── Errors ───────────────────────────────────────────────────────────────
    println!("══ Errors ══");
    println!();
    let invalid = WorkoutRequest::new(Vec::<String>::new()).rounds(0).seed(1);
    print_workout("Nothing selected", &catalog, &invalid);
    let unknown = WorkoutRequest::new(["Cardio"]).seed(1);
    print_workout("Unknown category", &catalog, &unknown);

    Ok(())
}
