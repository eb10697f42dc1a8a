//! Parameter definitions with physical units and documented semantics.
//!
//! All tunable numbers are collected here with:
//! - Physical units (meters, seconds, Hz, etc.)
//! - Documented ranges and meanings
//! - A single `SceneConfig` aggregate validated before use

mod camera;
mod fauna;
mod motion;
mod render;
mod terrain;

// Re-export all types
pub use camera::{CameraPreset, DriftPath, FreeCamera};
pub use fauna::{BubbleParams, FishProfile, FishSchooling, PlantField, PlantProfile};
pub use motion::MotionParams;
pub use render::RenderConfig;
pub use terrain::{GridParams, GridSpec};

use thiserror::Error;

/// Rejected configuration value
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} grid must be at least 2x2 vertices, got {width}x{depth}")]
    DegenerateGrid {
        name: &'static str,
        width: usize,
        depth: usize,
    },

    #[error("{0} range is inverted or not finite")]
    InvalidRange(&'static str),

    #[error("fish group size must be at least 1 and min <= max, got {0}..={1}")]
    InvalidGroupSize(usize, usize),

    #[error("{0} must be positive and finite")]
    NotPositive(&'static str),
}

/// Complete scene configuration
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub grid: GridParams,
    pub schooling: FishSchooling,
    pub fish_species: Vec<FishProfile>,
    pub plants: PlantField,
    pub plant_species: Vec<PlantProfile>,
    pub bubbles: BubbleParams,
    pub motion: MotionParams,
    pub render: RenderConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid: GridParams::default(),
            schooling: FishSchooling::default(),
            fish_species: FishProfile::catalogue(),
            plants: PlantField::default(),
            plant_species: PlantProfile::catalogue(),
            bubbles: BubbleParams::default(),
            motion: MotionParams::default(),
            render: RenderConfig::default(),
        }
    }
}

fn check_range(name: &'static str, range: (f32, f32)) -> Result<(), ConfigError> {
    if range.0.is_finite() && range.1.is_finite() && range.0 <= range.1 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange(name))
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive(name))
    }
}

impl SceneConfig {
    /// Validate configuration (grid sizes, ordered ranges, positive rates)
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, spec) in [("ocean", &self.grid.ocean), ("ground", &self.grid.ground)] {
            if spec.width < 2 || spec.depth < 2 {
                return Err(ConfigError::DegenerateGrid {
                    name,
                    width: spec.width,
                    depth: spec.depth,
                });
            }
            check_positive("grid spacing", spec.spacing_m)?;
        }

        let (min, max) = self.schooling.group_size;
        if min == 0 || min > max {
            return Err(ConfigError::InvalidGroupSize(min, max));
        }
        check_range("fish spawn band", self.schooling.spawn_band_y)?;
        check_range("fish heading z bias", self.schooling.heading_bias_z)?;

        check_range("bubble initial speed", self.bubbles.initial_speed)?;
        check_range("bubble respawn speed", self.bubbles.respawn_speed)?;
        check_range("bubble scale", self.bubbles.scale)?;

        for profile in &self.plant_species {
            check_range("plant scale", profile.scale)?;
            check_positive("plant scale", profile.scale.1)?;
        }

        check_positive("rate", self.motion.rate_hz)?;
        check_positive("max frame delta", self.motion.max_frame_delta_s)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SceneConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_catalogues() {
        let config = SceneConfig::default();
        assert_eq!(config.fish_species.len(), 3);
        assert_eq!(config.plant_species.len(), 4);

        // Only the clownfish samples a sub-region of its atlas
        assert_eq!(config.fish_species[1].uv_scale, [1.0, 0.5]);
        assert_eq!(config.fish_species[1].uv_offset, [0.0, 0.5]);
        assert_eq!(config.fish_species[0].uv_scale, [1.0, 1.0]);
    }

    #[test]
    fn test_rejects_degenerate_grid() {
        let mut config = SceneConfig::default();
        config.grid.ground.depth = 1;

        assert_eq!(
            config.validate(),
            Err(ConfigError::DegenerateGrid {
                name: "ground",
                width: 150,
                depth: 1,
            })
        );
    }

    #[test]
    fn test_rejects_inverted_group_size() {
        let mut config = SceneConfig::default();
        config.schooling.group_size = (14, 8);
        assert_eq!(config.validate(), Err(ConfigError::InvalidGroupSize(14, 8)));

        config.schooling.group_size = (0, 0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidGroupSize(0, 0)));
    }

    #[test]
    fn test_rejects_bad_ranges_and_rates() {
        let mut config = SceneConfig::default();
        config.bubbles.scale = (0.5, 0.1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidRange("bubble scale"))
        );

        let mut config = SceneConfig::default();
        config.motion.max_frame_delta_s = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive("max frame delta"))
        );

        let mut config = SceneConfig::default();
        config.schooling.spawn_band_y = (f32::NAN, -3.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidRange("fish spawn band"))
        );
    }
}
