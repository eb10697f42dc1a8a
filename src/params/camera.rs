//! Camera configuration and presets.

/// First-person free-look camera
#[derive(Debug, Clone)]
pub struct FreeCamera {
    /// Start position (meters)
    pub position: [f32; 3],

    /// Initial yaw (degrees, -90 looks down -Z)
    pub yaw_deg: f32,

    /// Initial pitch (degrees)
    pub pitch_deg: f32,

    /// Movement speed (meters per second)
    pub speed_m_per_s: f32,

    /// Speed multiplier while boost is held
    pub boost_multiplier: f32,

    /// Mouse sensitivity; degrees per pixel = sensitivity / 1000
    pub sensitivity: f32,

    /// Pitch is clamped to ±this (degrees)
    pub pitch_limit_deg: f32,
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self {
            position: [0.0, 8.0, 15.0],
            yaw_deg: -90.0,
            pitch_deg: 0.0,
            speed_m_per_s: 2.5,
            boost_multiplier: 4.0,
            sensitivity: 100.0,
            pitch_limit_deg: 89.0,
        }
    }
}

/// Hands-off straight-line drift through the reef
#[derive(Debug, Clone)]
pub struct DriftPath {
    /// Start position (meters)
    pub position: [f32; 3],

    /// Heading (degrees, same convention as `FreeCamera::yaw_deg`)
    pub yaw_deg: f32,

    /// Downward look angle (degrees, negative looks down)
    pub pitch_deg: f32,

    /// Forward movement speed (meters per second)
    pub speed_m_per_s: f32,
}

impl Default for DriftPath {
    fn default() -> Self {
        Self {
            position: [0.0, -4.0, 15.0],
            yaw_deg: -90.0,
            pitch_deg: -10.0,
            speed_m_per_s: 3.0,
        }
    }
}

/// Camera preset selection
#[derive(Debug, Clone)]
pub enum CameraPreset {
    /// Free preset: keyboard movement and mouse look
    Free(FreeCamera),

    /// Drift preset: constant-speed glide, input ignored
    Drift(DriftPath),
}

impl Default for CameraPreset {
    fn default() -> Self {
        Self::Free(FreeCamera::default())
    }
}
