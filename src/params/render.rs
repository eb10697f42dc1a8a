//! Rendering configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (meters)
    pub near_plane_m: f32,

    /// Far clipping plane (meters)
    pub far_plane_m: f32,

    /// Background / fog colour (RGB)
    pub clear_color: [f32; 3],

    /// Point light position (meters)
    pub light_position: [f32; 3],

    /// Light colour (RGB)
    pub light_color: [f32; 3],

    /// Exponential fog density (per meter)
    pub fog_density: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 45.0,
            near_plane_m: 0.1,
            far_plane_m: 1000.0,
            clear_color: [0.1, 0.2, 0.4],
            light_position: [500.0, 1000.0, 300.0],
            light_color: [1.0, 1.0, 0.95],
            fog_density: 0.015,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }

    /// Track a window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_width = width.max(1);
        self.window_height = height.max(1);
    }
}
