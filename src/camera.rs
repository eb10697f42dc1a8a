//! First-person camera: free-look flying or a hands-off drift.

use glam::{Mat4, Vec3};

use crate::params::{CameraPreset, RenderConfig};

/// What the simulation needs to know about the viewer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraView {
    pub position: Vec3,
    /// Unit view direction
    pub forward: Vec3,
}

/// Movement keys currently held
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub boost: bool,
}

/// Camera system with free-look and drift presets
pub struct CameraSystem {
    preset: CameraPreset,
    position: Vec3,
    yaw_deg: f32,
    pitch_deg: f32,
}

impl CameraSystem {
    /// Create new camera system with specified preset
    pub fn new(preset: CameraPreset) -> Self {
        let (position, yaw_deg, pitch_deg) = match &preset {
            CameraPreset::Free(p) => (p.position, p.yaw_deg, p.pitch_deg),
            CameraPreset::Drift(p) => (p.position, p.yaw_deg, p.pitch_deg),
        };

        Self {
            preset,
            position: Vec3::from_array(position),
            yaw_deg,
            pitch_deg,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction from yaw and pitch
    pub fn forward(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw_deg.to_radians(), self.pitch_deg.to_radians());
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            position: self.position,
            forward: self.forward(),
        }
    }

    /// Advance the camera by `dt` seconds
    ///
    /// Free: fly along the view direction (W/S), strafe (A/D), rise/sink.
    /// Drift: glide forward at constant speed, input ignored.
    pub fn update(&mut self, dt: f32, input: &MoveInput) {
        let forward = self.forward();

        match &self.preset {
            CameraPreset::Free(p) => {
                let boost = if input.boost { p.boost_multiplier } else { 1.0 };
                let step = p.speed_m_per_s * dt * boost;
                let right = forward.cross(Vec3::Y).normalize_or_zero();

                let mut delta = Vec3::ZERO;
                if input.forward {
                    delta += forward;
                }
                if input.back {
                    delta -= forward;
                }
                if input.right {
                    delta += right;
                }
                if input.left {
                    delta -= right;
                }
                if input.up {
                    delta += Vec3::Y;
                }
                if input.down {
                    delta -= Vec3::Y;
                }
                self.position += delta * step;
            }
            CameraPreset::Drift(p) => {
                self.position += forward * p.speed_m_per_s * dt;
            }
        }
    }

    /// Mouse look from a raw pointer delta (pixels); drift ignores it
    pub fn apply_mouse_delta(&mut self, dx: f64, dy: f64) {
        let CameraPreset::Free(p) = &self.preset else {
            return;
        };

        let sensitivity = p.sensitivity / 1000.0;
        self.yaw_deg += dx as f32 * sensitivity;
        // Screen Y grows downward
        self.pitch_deg = (self.pitch_deg - dy as f32 * sensitivity)
            .clamp(-p.pitch_limit_deg, p.pitch_limit_deg);
    }

    /// Create view-projection matrix for rendering
    pub fn view_proj(&self, render_config: &RenderConfig) -> Mat4 {
        // Always keep Y as up vector (camera never rolls)
        let view = Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane_m,
            render_config.far_plane_m,
        );

        proj * view
    }
}
