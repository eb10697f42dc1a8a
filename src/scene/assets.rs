//! Stand-in geometry for every species, uploaded through the renderer.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Quat;

use super::{Renderer, TextureHandle};
use crate::mesh::ProxyMesh;
use crate::params::{FishProfile, SceneConfig};
use crate::population::{BubbleKind, FishSpecies, PlantSpecies};

/// Proxy fish body length before species scale (m)
const FISH_LENGTH_M: f32 = 1.0;

/// Tallest plant after scaling (m)
const PLANT_HEIGHT_M: f32 = 1.0;

/// Bubble model scale; per-instance scales are tiny
const BUBBLE_MODEL_SCALE: f32 = 200.0;

/// Species descriptors with their uploaded meshes
#[derive(Clone, Debug)]
pub struct SceneAssets {
    pub fish: Vec<FishSpecies>,
    pub plants: Vec<PlantSpecies>,
    pub bubble: BubbleKind,
    /// Sampled by the seabed grid's UVs when present
    pub seabed_texture: Option<TextureHandle>,
}

impl SceneAssets {
    /// Build and upload proxy meshes for every configured species
    ///
    /// `texture_for` supplies the texture each fish species samples.
    pub fn proxies<R, F>(config: &SceneConfig, renderer: &mut R, mut texture_for: F) -> Self
    where
        R: Renderer + ?Sized,
        F: FnMut(&FishProfile) -> TextureHandle,
    {
        let fish = config
            .fish_species
            .iter()
            .map(|profile| {
                let yaw_offset = profile.yaw_offset_deg.to_radians();
                // Undo the model-space correction so the nose follows the heading
                let mesh =
                    ProxyMesh::spindle(FISH_LENGTH_M, FISH_LENGTH_M * 0.2, -(yaw_offset + PI));
                let handle = renderer.upload_mesh(&profile.name, &mesh.vertices, &mesh.indices);
                FishSpecies::from_profile(profile, handle, mesh.index_count(), texture_for(profile))
            })
            .collect();

        let plants = config
            .plant_species
            .iter()
            .map(|profile| {
                let height = PLANT_HEIGHT_M / profile.scale.1;
                // Stand upright once the species tilt is applied
                let upright = Quat::from_rotation_x(-FRAC_PI_2 - profile.tilt_deg.to_radians());
                let mesh = ProxyMesh::frond(height, height * 0.4).rotated(upright);
                let handle = renderer.upload_mesh(&profile.name, &mesh.vertices, &mesh.indices);
                PlantSpecies::from_profile(profile, handle, mesh.index_count())
            })
            .collect();

        let bubble_mesh = ProxyMesh::octahedron(1.0);
        let bubble = BubbleKind {
            mesh: renderer.upload_mesh("bubble", &bubble_mesh.vertices, &bubble_mesh.indices),
            vertex_count: bubble_mesh.index_count(),
            color: config.bubbles.color,
            scale: BUBBLE_MODEL_SCALE,
        };

        Self {
            fish,
            plants,
            bubble,
            seabed_texture: None,
        }
    }

    pub fn with_seabed_texture(mut self, texture: TextureHandle) -> Self {
        self.seabed_texture = Some(texture);
        self
    }
}
