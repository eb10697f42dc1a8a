//! Fish schooling, bubble and plant population parameters.

/// Fish school spawning, ceiling and respawn volume
#[derive(Debug, Clone)]
pub struct FishSchooling {
    /// Schools generated per species
    pub groups_per_species: usize,

    /// Fish per school, inclusive (min, max)
    pub group_size: (usize, usize),

    /// Side of the XZ square around the camera where school centers land (meters)
    pub spawn_extent_xz: f32,

    /// Height band for school centers and respawns (meters)
    pub spawn_band_y: (f32, f32),

    /// Full width of the heading X jitter (dimensionless, before normalization)
    pub heading_jitter_x: f32,

    /// Full width of the heading Y jitter
    pub heading_jitter_y: f32,

    /// Range of the heading Z component; dominates the X/Y jitter
    pub heading_bias_z: (f32, f32),

    /// Per-fish offset from the school center, full width per axis (meters)
    pub member_jitter: [f32; 3],

    /// Fish never swim above this height (meters)
    pub max_swim_height: f32,

    /// Fish whose Z drops below this are respawned (meters)
    pub despawn_z: f32,

    /// Half-width of the X respawn range around the world origin (meters)
    pub respawn_radius_xz: f32,

    /// Respawned fish start at least this far ahead of the camera in -Z (meters)
    pub respawn_z_offset: f32,

    /// Additional random depth of the respawn Z band (meters)
    pub respawn_z_depth: f32,
}

impl Default for FishSchooling {
    fn default() -> Self {
        Self {
            groups_per_species: 60,
            group_size: (8, 14),
            spawn_extent_xz: 100.0,
            spawn_band_y: (-9.0, -3.0),
            heading_jitter_x: 0.4,
            heading_jitter_y: 0.2,
            heading_bias_z: (-0.6, 0.6),
            member_jitter: [6.0, 2.0, 6.0],
            max_swim_height: -0.5,
            despawn_z: -120.0,
            respawn_radius_xz: 15.0,
            respawn_z_offset: 5.0,
            respawn_z_depth: 10.0,
        }
    }
}

/// Per-species fish tuning, independent of loaded assets
#[derive(Debug, Clone)]
pub struct FishProfile {
    pub name: String,

    /// Species speed multiplier (dimensionless)
    pub speed: f32,

    /// Uniform model scale
    pub scale: f32,

    /// Model-space heading correction (degrees)
    pub yaw_offset_deg: f32,

    /// Atlas sub-region: UV scale
    pub uv_scale: [f32; 2],

    /// Atlas sub-region: UV offset
    pub uv_offset: [f32; 2],

    /// Base colour of the species atlas (RGB)
    pub color: [f32; 3],
}

impl FishProfile {
    fn new(name: &str, speed: f32, scale: f32, yaw_offset_deg: f32, color: [f32; 3]) -> Self {
        Self {
            name: name.to_string(),
            speed,
            scale,
            yaw_offset_deg,
            uv_scale: [1.0, 1.0],
            uv_offset: [0.0, 0.0],
            color,
        }
    }

    /// Default catalogue: striped, clownfish (one half of its atlas), reef fish
    pub fn catalogue() -> Vec<Self> {
        let mut clown = Self::new("clownfish", 0.76, 0.85, 90.0, [0.95, 0.45, 0.1]);
        clown.uv_scale = [1.0, 0.5];
        clown.uv_offset = [0.0, 0.5];

        vec![
            Self::new("striped", 0.33, 0.30, 180.0, [0.7, 0.75, 0.8]),
            clown,
            Self::new("reef", 0.20, 0.20, -90.0, [0.3, 0.8, 0.6]),
        ]
    }
}

/// Rising bubble pool
#[derive(Debug, Clone)]
pub struct BubbleParams {
    /// Bubbles in the pool
    pub count: usize,

    /// Side of the XZ square centered on the origin (meters)
    pub spawn_extent_xz: f32,

    /// Bubbles spawn below this height (meters)
    pub floor_y: f32,

    /// Initial spawn depth below the floor (meters)
    pub initial_depth_span: f32,

    /// Respawn depth below the floor (meters)
    pub respawn_depth_span: f32,

    /// Rise speed at program start (units per 1/60 s)
    pub initial_speed: (f32, f32),

    /// Rise speed after respawn (units per 1/60 s)
    pub respawn_speed: (f32, f32),

    /// Uniform scale range
    pub scale: (f32, f32),

    /// Bubbles above this height are respawned (meters)
    pub ceiling_y: f32,

    /// Bubble tint (RGBA)
    pub color: [f32; 4],
}

impl Default for BubbleParams {
    fn default() -> Self {
        Self {
            count: 10,
            spawn_extent_xz: 300.0,
            floor_y: -10.0,
            initial_depth_span: 4.0,
            respawn_depth_span: 10.0,
            initial_speed: (0.01, 0.11),
            respawn_speed: (0.1, 0.2),
            scale: (0.0001, 0.0011),
            ceiling_y: -0.1,
            color: [0.8, 0.9, 1.0, 0.6],
        }
    }
}

/// Seabed vegetation scatter
#[derive(Debug, Clone)]
pub struct PlantField {
    /// Plants generated per species
    pub count_per_species: usize,

    /// Side of the XZ square centered on the origin (meters)
    pub extent_xz: f32,

    /// Plants sit at this height (meters)
    pub ground_y: f32,
}

impl Default for PlantField {
    fn default() -> Self {
        Self {
            count_per_species: 400,
            extent_xz: 300.0,
            ground_y: -10.0,
        }
    }
}

/// Per-species plant tuning
#[derive(Debug, Clone)]
pub struct PlantProfile {
    pub name: String,

    /// Uniform scale range (min, max)
    pub scale: (f32, f32),

    /// Base colour (RGB)
    pub color: [f32; 3],

    /// Rotation about X that stands the model upright (degrees)
    pub tilt_deg: f32,
}

impl PlantProfile {
    fn new(name: &str, scale: (f32, f32), color: [f32; 3], tilt_deg: f32) -> Self {
        Self {
            name: name.to_string(),
            scale,
            color,
            tilt_deg,
        }
    }

    /// Default catalogue: green coral, pink coral, red coral, starfish
    pub fn catalogue() -> Vec<Self> {
        vec![
            Self::new("coral", (0.03, 0.05), [0.0, 0.128, 0.0], 270.0),
            Self::new("pink coral", (0.1, 0.4), [1.0, 0.5, 0.8], 0.0),
            Self::new("red coral", (0.03, 0.06), [0.9, 0.1, 0.1], 270.0),
            Self::new("starfish", (0.2, 0.4), [0.3, 0.6, 1.0], 270.0),
        ]
    }
}
