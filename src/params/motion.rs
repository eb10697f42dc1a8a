//! Frame-tick integration constants.

/// Kinematic scaling shared by every mobile instance
#[derive(Debug, Clone)]
pub struct MotionParams {
    /// Global fish speed multiplier (dimensionless)
    pub fish_global_speed: f32,

    /// Reference tick rate; speeds are expressed per 1/rate seconds (Hz)
    pub rate_hz: f32,

    /// Upper bound on a single frame delta (seconds)
    /// Keeps instances from jumping after a stall
    pub max_frame_delta_s: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            fish_global_speed: 0.1,
            rate_hz: 60.0,
            max_frame_delta_s: 0.1,
        }
    }
}
