//! Quickstart: run a random Conway board and print a few generations.
//!
//! ```text
//! RUST_LOG=tessera_engine=trace cargo run -p tessera-engine --example quickstart
//! ```

use tessera_core::{Dimensions, RuleThresholds, Variant};
use tessera_engine::{Engine, EngineConfig, ExecutionMode, SeedSpec};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tessera_engine=debug".parse()?),
        )
        .init();

    let config = EngineConfig::new(
        Dimensions::planar(40, 16),
        Variant::Binary,
        RuleThresholds::conway(),
        SeedSpec::RandomDensity { density: 0.3 },
    )
    .with_rng_seed(0x7e55)
    .with_execution(ExecutionMode::Parallel);

    let mut engine = Engine::new(config)?;
    println!("generation {}:\n{}", engine.generation(), engine.snapshot().to_ascii());

    for _ in 0..3 {
        engine.step_many(10);
        let m = engine.last_metrics();
        println!(
            "generation {} ({} live, {} changes in {} us):\n{}",
            engine.generation(),
            m.live_cells,
            m.changed_cells,
            m.total_us,
            engine.snapshot().to_ascii()
        );
    }

    engine.reset();
    println!("after reset: {} live", engine.live_count());
    Ok(())
}
