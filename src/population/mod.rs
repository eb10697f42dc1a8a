//! Instance populations: descriptors, instance state and their generation.

mod spawn;
mod types;

// Re-export public types
pub use spawn::{respawn_bubble, respawn_fish, spawn_bubbles, spawn_fish, spawn_plants};
pub use types::{
    BubbleInstance, BubbleKind, BubblePopulation, FishInstance, FishPopulation, FishSpecies,
    PlantInstance, PlantPopulation, PlantSpecies, Population,
};

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// The one random stream a scene draws from, for generation and respawns alike
pub type SceneRng = StdRng;

pub fn seeded_rng(seed: u64) -> SceneRng {
    StdRng::seed_from_u64(seed)
}

/// Seed derived from the wall clock, for runs without `--seed`
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
