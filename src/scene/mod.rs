//! Scene ownership and per-frame composition.
//!
//! A `Scene` owns the grids and every population. Each frame it advances the
//! simulation once and then replays draw requests into a `Renderer`.

mod assets;
mod draw;

pub use assets::SceneAssets;
pub use draw::{DrawBinding, MeshHandle, Renderer, TextureHandle, UvRegion};

use std::f32::consts::PI;

use glam::{Mat4, Quat, Vec3};
use log::{debug, info, trace};

use crate::camera::CameraView;
use crate::mesh::{GridMesh, MeshError};
use crate::params::{GridSpec, SceneConfig};
use crate::population::{
    seeded_rng, spawn_bubbles, spawn_fish, spawn_plants, BubbleInstance, BubbleKind,
    BubblePopulation, FishInstance, FishPopulation, FishSpecies, PlantInstance, PlantPopulation,
    PlantSpecies, Population, SceneRng,
};
use crate::simulation::{sanitize_delta, InstanceSimulator, TickStats};

/// A flat grid uploaded once and drawn at a fixed height
pub struct GridLayer {
    pub mesh: GridMesh,
    pub handle: MeshHandle,
    pub level_y: f32,
    pub color: [f32; 4],
    pub texture: Option<TextureHandle>,
}

impl GridLayer {
    fn build<R: Renderer + ?Sized>(
        label: &str,
        spec: &GridSpec,
        level_y: f32,
        color: [f32; 4],
        texture: Option<TextureHandle>,
        renderer: &mut R,
    ) -> Result<Self, MeshError> {
        let mesh = GridMesh::new(spec)?;
        let handle = renderer.upload_mesh(label, &mesh.vertices, &mesh.indices);
        Ok(Self {
            mesh,
            handle,
            level_y,
            color,
            texture,
        })
    }

    fn binding(&self) -> DrawBinding {
        DrawBinding {
            mesh: self.handle,
            count: self.mesh.index_count(),
            texture: self.texture,
            uv: UvRegion::default(),
            tint: self.color,
        }
    }

    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.level_y, 0.0))
    }
}

/// Fish model transform: translate, heading plus model correction, uniform scale
pub fn fish_transform(fish: &FishInstance, species: &FishSpecies) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(species.scale),
        Quat::from_rotation_y(fish.yaw + species.yaw_offset + PI),
        fish.position,
    )
}

/// Plant model transform: translate, yaw, species tilt, scale
pub fn plant_transform(plant: &PlantInstance, species: &PlantSpecies) -> Mat4 {
    Mat4::from_translation(plant.position)
        * Mat4::from_rotation_y(plant.yaw)
        * Mat4::from_rotation_x(species.tilt)
        * Mat4::from_scale(Vec3::splat(plant.scale))
}

/// Bubble model transform: translate then scale
pub fn bubble_transform(bubble: &BubbleInstance, kind: &BubbleKind) -> Mat4 {
    Mat4::from_translation(bubble.position)
        * Mat4::from_scale(Vec3::splat(bubble.scale * kind.scale))
}

/// Everything visible in the reef and the state that moves it
pub struct Scene {
    seabed: GridLayer,
    ocean: GridLayer,
    bubbles: BubblePopulation,
    plants: Vec<PlantPopulation>,
    fish: Vec<FishPopulation>,
    simulator: InstanceSimulator,
    max_frame_delta_s: f32,
    rng: SceneRng,
}

impl Scene {
    /// Upload both grids and generate every population from one seeded stream
    ///
    /// Generation order is bubbles, plants, fish so a seed always yields the
    /// same reef.
    pub fn new<R: Renderer + ?Sized>(
        config: &SceneConfig,
        assets: SceneAssets,
        renderer: &mut R,
        camera: &CameraView,
        seed: u64,
    ) -> Result<Self, MeshError> {
        let grid = &config.grid;
        let seabed = GridLayer::build(
            "seabed",
            &grid.ground,
            grid.ground_level_y,
            grid.ground_color,
            assets.seabed_texture,
            renderer,
        )?;
        let ocean = GridLayer::build(
            "ocean surface",
            &grid.ocean,
            grid.water_surface_y,
            grid.ocean_color,
            None,
            renderer,
        )?;

        let mut rng = seeded_rng(seed);

        let bubbles = Population::new(assets.bubble, spawn_bubbles(&config.bubbles, &mut rng));

        let plants: Vec<PlantPopulation> = assets
            .plants
            .into_iter()
            .map(|species| {
                let instances = spawn_plants(&species, &config.plants, &mut rng);
                Population::new(species, instances)
            })
            .collect();

        let fish: Vec<FishPopulation> = assets
            .fish
            .into_iter()
            .map(|species| {
                let instances = spawn_fish(&config.schooling, camera, &mut rng);
                debug!("{}: {} fish", species.name, instances.len());
                Population::new(species, instances)
            })
            .collect();

        let scene = Self {
            seabed,
            ocean,
            bubbles,
            plants,
            fish,
            simulator: InstanceSimulator::new(
                config.motion.clone(),
                config.schooling.clone(),
                config.bubbles.clone(),
            ),
            max_frame_delta_s: config.motion.max_frame_delta_s,
            rng,
        };

        info!(
            "Scene ready (seed {}): {} fish, {} plants, {} bubbles",
            seed,
            scene.fish_count(),
            scene.plant_count(),
            scene.bubble_count()
        );

        Ok(scene)
    }

    /// Advance every mobile instance by one frame
    pub fn tick(&mut self, dt: f32, camera: &CameraView) -> TickStats {
        let dt = sanitize_delta(dt, self.max_frame_delta_s);
        let stats = self
            .simulator
            .advance(&mut self.fish, &mut self.bubbles, dt, camera, &mut self.rng);

        if stats.fish_respawned > 0 || stats.bubbles_respawned > 0 {
            trace!(
                "respawned {} fish, {} bubbles",
                stats.fish_respawned,
                stats.bubbles_respawned
            );
        }

        stats
    }

    /// Issue draw requests: seabed, ocean surface, bubbles, plants, fish
    pub fn compose<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for grid in [&self.seabed, &self.ocean] {
            renderer.bind(&grid.binding());
            renderer.draw(grid.transform());
        }

        let kind = &self.bubbles.descriptor;
        renderer.bind(&DrawBinding {
            mesh: kind.mesh,
            count: kind.vertex_count,
            texture: None,
            uv: UvRegion::default(),
            tint: kind.color,
        });
        for bubble in &self.bubbles.instances {
            renderer.draw(bubble_transform(bubble, kind));
        }

        for population in &self.plants {
            let species = &population.descriptor;
            let [r, g, b] = species.color;
            renderer.bind(&DrawBinding {
                mesh: species.mesh,
                count: species.vertex_count,
                texture: None,
                uv: UvRegion::default(),
                tint: [r, g, b, 1.0],
            });
            for plant in &population.instances {
                renderer.draw(plant_transform(plant, species));
            }
        }

        for population in &self.fish {
            let species = &population.descriptor;
            renderer.bind(&DrawBinding {
                mesh: species.mesh,
                count: species.vertex_count,
                texture: Some(species.texture),
                uv: species.uv,
                tint: [1.0; 4],
            });
            for fish in &population.instances {
                renderer.draw(fish_transform(fish, species));
            }
        }
    }

    /// Simulate then compose; the whole per-frame contract
    pub fn frame<R: Renderer + ?Sized>(
        &mut self,
        dt: f32,
        camera: &CameraView,
        renderer: &mut R,
    ) -> TickStats {
        let stats = self.tick(dt, camera);
        self.compose(renderer);
        stats
    }

    pub fn fish(&self) -> &[FishPopulation] {
        &self.fish
    }

    pub fn plants(&self) -> &[PlantPopulation] {
        &self.plants
    }

    pub fn bubbles(&self) -> &BubblePopulation {
        &self.bubbles
    }

    pub fn fish_count(&self) -> usize {
        self.fish.iter().map(Population::len).sum()
    }

    pub fn plant_count(&self) -> usize {
        self.plants.iter().map(Population::len).sum()
    }

    pub fn bubble_count(&self) -> usize {
        self.bubbles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Vertex;
    use crate::params::GridParams;

    #[derive(Debug, PartialEq)]
    enum Call {
        Bind(DrawBinding),
        Draw(Mat4),
    }

    /// Records every request instead of rendering
    #[derive(Default)]
    struct RecordingRenderer {
        uploads: Vec<(String, usize, usize)>,
        calls: Vec<Call>,
    }

    impl Renderer for RecordingRenderer {
        fn upload_mesh(&mut self, label: &str, vertices: &[Vertex], indices: &[u32]) -> MeshHandle {
            self.uploads
                .push((label.to_string(), vertices.len(), indices.len()));
            MeshHandle(self.uploads.len() as u32 - 1)
        }

        fn bind(&mut self, binding: &DrawBinding) {
            self.calls.push(Call::Bind(*binding));
        }

        fn draw(&mut self, model: Mat4) {
            self.calls.push(Call::Draw(model));
        }
    }

    impl RecordingRenderer {
        fn bindings(&self) -> Vec<DrawBinding> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Bind(b) => Some(*b),
                    Call::Draw(_) => None,
                })
                .collect()
        }

        fn draw_count(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, Call::Draw(_)))
                .count()
        }
    }

    /// Small reef so tests stay fast
    fn small_config() -> SceneConfig {
        let mut config = SceneConfig::default();
        config.grid = GridParams {
            ocean: GridSpec::new(8, 8),
            ground: GridSpec::new(6, 5).with_uv(),
            ..GridParams::default()
        };
        config.schooling.groups_per_species = 4;
        config.plants.count_per_species = 20;
        config
    }

    fn camera() -> CameraView {
        CameraView {
            position: Vec3::new(0.0, 8.0, 15.0),
            forward: Vec3::NEG_Z,
        }
    }

    fn build(config: &SceneConfig, seed: u64) -> (Scene, RecordingRenderer) {
        let mut renderer = RecordingRenderer::default();
        let assets = SceneAssets::proxies(config, &mut renderer, |_| TextureHandle(7));
        let scene = Scene::new(config, assets, &mut renderer, &camera(), seed)
            .expect("scene should build");
        (scene, renderer)
    }

    #[test]
    fn test_scene_generates_configured_counts() {
        let config = small_config();
        let (scene, renderer) = build(&config, 1);

        assert_eq!(scene.bubble_count(), config.bubbles.count);
        assert_eq!(
            scene.plant_count(),
            config.plants.count_per_species * config.plant_species.len()
        );
        assert_eq!(scene.fish().len(), config.fish_species.len());
        for population in scene.fish() {
            let (min, max) = config.schooling.group_size;
            assert!(population.len() >= min * config.schooling.groups_per_species);
            assert!(population.len() <= max * config.schooling.groups_per_species);
        }

        // Species meshes, the bubble, then both grids
        let labels: Vec<&str> = renderer.uploads.iter().map(|u| u.0.as_str()).collect();
        assert_eq!(labels[labels.len() - 2..], ["seabed", "ocean surface"]);
        assert_eq!(renderer.uploads[labels.len() - 2].1, 30);
    }

    #[test]
    fn test_same_seed_same_reef() {
        let config = small_config();
        let (a, _) = build(&config, 99);
        let (b, _) = build(&config, 99);
        let (c, _) = build(&config, 100);

        assert_eq!(a.bubbles().instances, b.bubbles().instances);
        for (pa, pb) in a.fish().iter().zip(b.fish()) {
            assert_eq!(pa.instances, pb.instances);
        }
        for (pa, pb) in a.plants().iter().zip(b.plants()) {
            assert_eq!(pa.instances, pb.instances);
        }
        assert_ne!(a.fish()[0].instances, c.fish()[0].instances);
    }

    #[test]
    fn test_compose_order_and_counts() {
        let config = small_config();
        let (scene, mut renderer) = build(&config, 5);
        renderer.calls.clear();

        scene.compose(&mut renderer);

        let bindings = renderer.bindings();
        let plant_types = scene.plants().len();
        let fish_types = scene.fish().len();
        assert_eq!(bindings.len(), 3 + plant_types + fish_types);

        assert_eq!(bindings[0].mesh, scene.seabed.handle);
        assert_eq!(bindings[1].mesh, scene.ocean.handle);
        assert_eq!(bindings[2].mesh, scene.bubbles().descriptor.mesh);
        for (binding, population) in bindings[3..3 + plant_types].iter().zip(scene.plants()) {
            assert_eq!(binding.mesh, population.descriptor.mesh);
            assert_eq!(binding.texture, None);
        }
        for (binding, population) in bindings[3 + plant_types..].iter().zip(scene.fish()) {
            assert_eq!(binding.mesh, population.descriptor.mesh);
            assert_eq!(binding.texture, Some(TextureHandle(7)));
            assert_eq!(binding.uv, population.descriptor.uv);
        }

        let instances = scene.fish_count() + scene.plant_count() + scene.bubble_count();
        assert_eq!(renderer.draw_count(), instances + 2);
    }

    #[test]
    fn test_each_batch_draws_its_instances() {
        let config = small_config();
        let (scene, mut renderer) = build(&config, 5);
        renderer.calls.clear();

        scene.compose(&mut renderer);

        // Count draws following each bind
        let mut per_batch = Vec::new();
        for call in &renderer.calls {
            match call {
                Call::Bind(_) => per_batch.push(0),
                Call::Draw(_) => *per_batch.last_mut().expect("draw before bind") += 1,
            }
        }

        let mut expected = vec![1, 1, scene.bubble_count()];
        expected.extend(scene.plants().iter().map(Population::len));
        expected.extend(scene.fish().iter().map(Population::len));
        assert_eq!(per_batch, expected);
    }

    #[test]
    fn test_seabed_texture_and_grid_heights() {
        let config = small_config();
        let mut renderer = RecordingRenderer::default();
        let assets = SceneAssets::proxies(&config, &mut renderer, |_| TextureHandle(0))
            .with_seabed_texture(TextureHandle(3));
        let scene = Scene::new(&config, assets, &mut renderer, &camera(), 2).expect("scene");

        scene.compose(&mut renderer);
        let bindings = renderer.bindings();
        assert_eq!(bindings[0].texture, Some(TextureHandle(3)));
        assert_eq!(bindings[1].texture, None);

        let origin = scene.seabed.transform().transform_point3(Vec3::ZERO);
        assert_eq!(origin.y, config.grid.ground_level_y);
        let origin = scene.ocean.transform().transform_point3(Vec3::ZERO);
        assert_eq!(origin.y, config.grid.water_surface_y);
    }

    #[test]
    fn test_degenerate_grid_rejected() {
        let mut config = small_config();
        config.grid.ocean = GridSpec::new(1, 10);
        let mut renderer = RecordingRenderer::default();
        let assets = SceneAssets::proxies(&config, &mut renderer, |_| TextureHandle(0));

        let result = Scene::new(&config, assets, &mut renderer, &camera(), 0);
        assert!(matches!(result, Err(MeshError::Degenerate { .. })));
    }

    #[test]
    fn test_fish_transform_translate_rotate_scale() {
        let species = FishSpecies {
            name: "test".to_string(),
            mesh: MeshHandle(0),
            vertex_count: 3,
            texture: TextureHandle(0),
            uv: UvRegion::default(),
            speed: 1.0,
            scale: 0.5,
            yaw_offset: 0.0,
        };
        let fish = FishInstance {
            position: Vec3::new(1.0, -2.0, 3.0),
            velocity: Vec3::NEG_Z,
            yaw: 0.0,
        };

        let model = fish_transform(&fish, &species);

        assert!((model.transform_point3(Vec3::ZERO) - fish.position).length() < 1e-6);
        // Half turn about Y plus half scale: +Z model axis lands on -Z
        let tip = model.transform_point3(Vec3::Z);
        assert!((tip - (fish.position + Vec3::new(0.0, 0.0, -0.5))).length() < 1e-5);
    }

    #[test]
    fn test_plant_and_bubble_transforms() {
        let species = PlantSpecies {
            name: "test".to_string(),
            mesh: MeshHandle(0),
            vertex_count: 3,
            scale_range: (1.0, 1.0),
            color: [0.0, 1.0, 0.0],
            tilt: -std::f32::consts::FRAC_PI_2,
        };
        let plant = PlantInstance {
            position: Vec3::new(5.0, -10.0, 5.0),
            scale: 2.0,
            yaw: 1.0,
        };

        // Tilt stands +Z up, yaw leaves the vertical untouched
        let top = plant_transform(&plant, &species).transform_point3(Vec3::Z);
        assert!((top - Vec3::new(5.0, -8.0, 5.0)).length() < 1e-5);

        let kind = BubbleKind {
            mesh: MeshHandle(1),
            vertex_count: 3,
            color: [1.0; 4],
            scale: 100.0,
        };
        let bubble = BubbleInstance {
            position: Vec3::new(0.0, -5.0, 0.0),
            speed: 0.1,
            scale: 0.01,
        };
        let edge = bubble_transform(&bubble, &kind).transform_point3(Vec3::X);
        assert!((edge - Vec3::new(1.0, -5.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_tick_keeps_counts_and_ignores_bad_delta() {
        let config = small_config();
        let (mut scene, mut renderer) = build(&config, 3);
        let fish_before = scene.fish_count();
        let snapshot: Vec<_> = scene.fish().iter().map(|p| p.instances.clone()).collect();

        let stats = scene.tick(f32::NAN, &camera());
        assert_eq!(stats, TickStats::default());
        let after: Vec<_> = scene.fish().iter().map(|p| p.instances.clone()).collect();
        assert_eq!(snapshot, after);

        for _ in 0..500 {
            scene.frame(1.0, &camera(), &mut renderer);
        }
        assert_eq!(scene.fish_count(), fish_before);
        assert_eq!(scene.bubble_count(), config.bubbles.count);
        assert!(scene.fish().iter().all(|p| p
            .instances
            .iter()
            .all(|f| f.position.y <= config.schooling.max_swim_height)));
    }
}
