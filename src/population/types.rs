//! Instance state and the read-only type descriptors they share.

use glam::Vec3;

use crate::params::{FishProfile, PlantProfile};
use crate::scene::{MeshHandle, TextureHandle, UvRegion};

/// One swimming fish; identity is its slot in the species list
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FishInstance {
    pub position: Vec3,
    /// Unit heading shared with the rest of its school at spawn
    pub velocity: Vec3,
    /// Heading angle about Y, fixed at spawn
    pub yaw: f32,
}

/// One rising bubble
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleInstance {
    pub position: Vec3,
    pub speed: f32,
    pub scale: f32,
}

/// One seabed plant; never simulated
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlantInstance {
    pub position: Vec3,
    pub scale: f32,
    pub yaw: f32,
}

/// Fish species descriptor
#[derive(Clone, Debug)]
pub struct FishSpecies {
    pub name: String,
    pub mesh: MeshHandle,
    pub vertex_count: u32,
    pub texture: TextureHandle,
    pub uv: UvRegion,
    pub speed: f32,
    pub scale: f32,
    /// Model-space heading correction (radians)
    pub yaw_offset: f32,
}

impl FishSpecies {
    pub fn from_profile(
        profile: &FishProfile,
        mesh: MeshHandle,
        vertex_count: u32,
        texture: TextureHandle,
    ) -> Self {
        Self {
            name: profile.name.clone(),
            mesh,
            vertex_count,
            texture,
            uv: UvRegion {
                scale: profile.uv_scale,
                offset: profile.uv_offset,
            },
            speed: profile.speed,
            scale: profile.scale,
            yaw_offset: profile.yaw_offset_deg.to_radians(),
        }
    }
}

/// Plant species descriptor
#[derive(Clone, Debug)]
pub struct PlantSpecies {
    pub name: String,
    pub mesh: MeshHandle,
    pub vertex_count: u32,
    pub scale_range: (f32, f32),
    pub color: [f32; 3],
    /// Rotation about X applied after yaw (radians)
    pub tilt: f32,
}

impl PlantSpecies {
    pub fn from_profile(profile: &PlantProfile, mesh: MeshHandle, vertex_count: u32) -> Self {
        Self {
            name: profile.name.clone(),
            mesh,
            vertex_count,
            scale_range: profile.scale,
            color: profile.color,
            tilt: profile.tilt_deg.to_radians(),
        }
    }
}

/// Bubble descriptor
#[derive(Clone, Debug)]
pub struct BubbleKind {
    pub mesh: MeshHandle,
    pub vertex_count: u32,
    pub color: [f32; 4],
    /// Multiplier on every bubble's own scale
    pub scale: f32,
}

/// A type descriptor and every instance of that type
///
/// The instance count is fixed once generated; simulation only mutates
/// instances in place.
#[derive(Clone, Debug)]
pub struct Population<D, I> {
    pub descriptor: D,
    pub instances: Vec<I>,
}

impl<D, I> Population<D, I> {
    pub fn new(descriptor: D, instances: Vec<I>) -> Self {
        Self {
            descriptor,
            instances,
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

pub type FishPopulation = Population<FishSpecies, FishInstance>;
pub type PlantPopulation = Population<PlantSpecies, PlantInstance>;
pub type BubblePopulation = Population<BubbleKind, BubbleInstance>;
