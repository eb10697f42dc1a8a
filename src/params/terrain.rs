//! Ocean surface and seabed grid parameters.

/// Tessellation request for a flat grid mesh
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    /// Vertices along X (must be >= 2)
    pub width: usize,

    /// Vertices along Z (must be >= 2)
    pub depth: usize,

    /// Distance between neighbouring vertices (meters)
    pub spacing_m: f32,

    /// Emit UVs spanning [0, 1] across the grid (zeroed otherwise)
    pub with_uv: bool,
}

impl GridSpec {
    pub fn new(width: usize, depth: usize) -> Self {
        Self {
            width,
            depth,
            spacing_m: 2.0,
            with_uv: false,
        }
    }

    pub fn with_uv(mut self) -> Self {
        self.with_uv = true;
        self
    }
}

/// Water surface and seabed layout
#[derive(Debug, Clone)]
pub struct GridParams {
    /// Ocean surface tessellation (no UVs, flat tint)
    pub ocean: GridSpec,

    /// Seabed tessellation (UVs for the sand texture)
    pub ground: GridSpec,

    /// Height of the water surface (meters)
    pub water_surface_y: f32,

    /// Height of the seabed (meters)
    pub ground_level_y: f32,

    /// Ocean surface tint (RGBA, alpha blended)
    pub ocean_color: [f32; 4],

    /// Seabed tint (RGBA)
    pub ground_color: [f32; 4],
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            ocean: GridSpec::new(150, 150),
            ground: GridSpec::new(150, 150).with_uv(),
            water_surface_y: 0.0,
            ground_level_y: -10.0,
            ocean_color: [0.15, 0.45, 0.7, 0.55],
            ground_color: [0.76, 0.7, 0.5, 1.0],
        }
    }
}
