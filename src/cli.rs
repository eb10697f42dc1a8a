//! Command-line argument parsing.

use clap::Parser;
use log::{info, warn};

use crate::params::{CameraPreset, DriftPath, FreeCamera, SceneConfig};
use crate::population::clock_seed;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "reefdive")]
#[command(about = "Underwater reef with schooling fish and rising bubbles", long_about = None)]
pub struct Args {
    /// Seed for every random draw; omitted means wall-clock time
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Camera preset: free (default) or drift
    #[arg(long, value_name = "PRESET", default_value = "free")]
    pub camera_preset: String,

    /// Global fish speed multiplier
    #[arg(long, value_name = "FACTOR")]
    pub fish_speed: Option<f32>,

    /// Schools generated per fish species
    #[arg(long, value_name = "COUNT")]
    pub groups_per_species: Option<usize>,

    /// Plants scattered per plant species
    #[arg(long, value_name = "COUNT")]
    pub plants_per_species: Option<usize>,

    /// Longest frame step the simulation accepts (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub max_frame_delta: Option<f32>,
}

impl Args {
    /// Parse camera preset from command-line arguments
    pub fn parse_camera_preset(&self) -> CameraPreset {
        match self.camera_preset.to_lowercase().as_str() {
            "free" => {
                info!("Camera: Free (WASD + mouse)");
                CameraPreset::Free(FreeCamera::default())
            }
            "drift" => {
                info!("Camera: Drift (straight glide)");
                CameraPreset::Drift(DriftPath::default())
            }
            other => {
                warn!("Unknown camera preset '{}', using free", other);
                CameraPreset::Free(FreeCamera::default())
            }
        }
    }

    /// Overwrite config values given on the command line
    pub fn apply_to(&self, config: &mut SceneConfig) {
        if let Some(speed) = self.fish_speed {
            config.motion.fish_global_speed = speed;
        }
        if let Some(groups) = self.groups_per_species {
            config.schooling.groups_per_species = groups;
        }
        if let Some(plants) = self.plants_per_species {
            config.plants.count_per_species = plants;
        }
        if let Some(max_delta) = self.max_frame_delta {
            config.motion.max_frame_delta_s = max_delta;
        }
    }

    /// The run's seed, from `--seed` or the clock
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }
}
