//! Per-frame kinematics for fish and bubbles.
//!
//! Speeds are tuned per reference tick (1/60 s), so every step scales by
//! `dt * rate_hz`. Instances never interact with one another.

use std::time::Instant;

use rand::Rng;

use crate::camera::CameraView;
use crate::params::{BubbleParams, FishSchooling, MotionParams};
use crate::population::{
    respawn_bubble, respawn_fish, BubbleInstance, BubblePopulation, FishInstance, FishPopulation,
    FishSpecies,
};

/// Clamp a raw frame delta into `[0, max]`; non-finite or negative becomes 0
pub fn sanitize_delta(raw: f32, max: f32) -> f32 {
    if !raw.is_finite() || raw < 0.0 {
        return 0.0;
    }
    raw.min(max)
}

/// Wall-clock frame timer
pub struct FrameClock {
    last: Option<Instant>,
    max_delta_s: f32,
}

impl FrameClock {
    pub fn new(max_delta_s: f32) -> Self {
        Self {
            last: None,
            max_delta_s,
        }
    }

    /// Seconds since the previous tick, sanitized; the first tick returns 0
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw = self
            .last
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last = Some(now);
        sanitize_delta(raw, self.max_delta_s)
    }
}

/// Respawn counts from one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub fish_respawned: usize,
    pub bubbles_respawned: usize,
}

/// Advances fish and bubbles one frame at a time
pub struct InstanceSimulator {
    motion: MotionParams,
    schooling: FishSchooling,
    bubbles: BubbleParams,
}

impl InstanceSimulator {
    pub fn new(motion: MotionParams, schooling: FishSchooling, bubbles: BubbleParams) -> Self {
        Self {
            motion,
            schooling,
            bubbles,
        }
    }

    /// Move one species forward; returns how many fish were respawned
    pub fn step_fish<R: Rng + ?Sized>(
        &self,
        fish: &mut [FishInstance],
        species: &FishSpecies,
        dt: f32,
        camera: &CameraView,
        rng: &mut R,
    ) -> usize {
        let step = self.motion.fish_global_speed * species.speed * dt * self.motion.rate_hz;
        let ceiling = self.schooling.max_swim_height;
        let mut respawned = 0;

        for f in fish.iter_mut() {
            f.position += f.velocity * step;

            if f.position.y > ceiling {
                f.position.y = ceiling;
                f.velocity.y = f.velocity.y.min(0.0);
            }

            if f.position.z < self.schooling.despawn_z {
                respawn_fish(f, &self.schooling, camera, rng);
                respawned += 1;
            }
        }

        respawned
    }

    /// Raise bubbles; returns how many broke the ceiling and were respawned
    pub fn step_bubbles<R: Rng + ?Sized>(
        &self,
        bubbles: &mut [BubbleInstance],
        dt: f32,
        rng: &mut R,
    ) -> usize {
        let mut respawned = 0;

        for b in bubbles.iter_mut() {
            b.position.y += b.speed * dt * self.motion.rate_hz;

            if b.position.y > self.bubbles.ceiling_y {
                respawn_bubble(b, &self.bubbles, rng);
                respawned += 1;
            }
        }

        respawned
    }

    /// One frame for every mobile population
    pub fn advance<R: Rng + ?Sized>(
        &self,
        fish: &mut [FishPopulation],
        bubbles: &mut BubblePopulation,
        dt: f32,
        camera: &CameraView,
        rng: &mut R,
    ) -> TickStats {
        let bubbles_respawned = self.step_bubbles(&mut bubbles.instances, dt, rng);

        let fish_respawned = fish
            .iter_mut()
            .map(|population| {
                self.step_fish(
                    &mut population.instances,
                    &population.descriptor,
                    dt,
                    camera,
                    rng,
                )
            })
            .sum();

        TickStats {
            fish_respawned,
            bubbles_respawned,
        }
    }
}
