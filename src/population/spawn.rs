//! Randomized placement of fish schools, bubbles and plants.
//!
//! Every draw is `lo + r * (hi - lo)` with `r` uniform in [0, 1), so ranges
//! with equal bounds are valid and nothing here can fail.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::types::{BubbleInstance, FishInstance, PlantInstance, PlantSpecies};
use crate::camera::CameraView;
use crate::params::{BubbleParams, FishSchooling, PlantField};

/// Uniform draw over `(lo, hi)`
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}

/// Uniform draw over `[-span / 2, span / 2)`
fn centered<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}

/// Scatter one species across the seabed
pub fn spawn_plants<R: Rng + ?Sized>(
    species: &PlantSpecies,
    field: &PlantField,
    rng: &mut R,
) -> Vec<PlantInstance> {
    (0..field.count_per_species)
        .map(|_| {
            let x = centered(rng, field.extent_xz);
            let z = centered(rng, field.extent_xz);
            PlantInstance {
                position: Vec3::new(x, field.ground_y, z),
                scale: uniform(rng, species.scale_range),
                yaw: rng.gen::<f32>() * TAU,
            }
        })
        .collect()
}

/// Fill the bubble pool below the floor
pub fn spawn_bubbles<R: Rng + ?Sized>(params: &BubbleParams, rng: &mut R) -> Vec<BubbleInstance> {
    (0..params.count)
        .map(|_| {
            let x = centered(rng, params.spawn_extent_xz);
            let z = centered(rng, params.spawn_extent_xz);
            let y = params.floor_y - rng.gen::<f32>() * params.initial_depth_span;
            BubbleInstance {
                position: Vec3::new(x, y, z),
                speed: uniform(rng, params.initial_speed),
                scale: uniform(rng, params.scale),
            }
        })
        .collect()
}

/// Reset a bubble in place: new spot below the floor, new speed and scale
pub fn respawn_bubble<R: Rng + ?Sized>(
    bubble: &mut BubbleInstance,
    params: &BubbleParams,
    rng: &mut R,
) {
    let x = centered(rng, params.spawn_extent_xz);
    let y = params.floor_y - rng.gen::<f32>() * params.respawn_depth_span;
    let z = centered(rng, params.spawn_extent_xz);
    bubble.position = Vec3::new(x, y, z);
    bubble.speed = uniform(rng, params.respawn_speed);
    bubble.scale = uniform(rng, params.scale);
}

/// A school while it is being placed
///
/// Members copy the heading and start near the center; after that the school
/// no longer exists and each fish moves on its own.
struct SchoolBuilder {
    center: Vec3,
    heading: Vec3,
    size: usize,
}

impl SchoolBuilder {
    fn draw<R: Rng + ?Sized>(schooling: &FishSchooling, origin: Vec3, rng: &mut R) -> Self {
        let (min, max) = schooling.group_size;
        let size = rng.gen_range(min..=max.max(min));

        let x = origin.x + centered(rng, schooling.spawn_extent_xz);
        let z = origin.z + centered(rng, schooling.spawn_extent_xz);
        let y = uniform(rng, schooling.spawn_band_y);

        let heading = Vec3::new(
            centered(rng, schooling.heading_jitter_x),
            centered(rng, schooling.heading_jitter_y),
            uniform(rng, schooling.heading_bias_z),
        )
        .try_normalize()
        .unwrap_or(Vec3::NEG_Z);

        Self {
            center: Vec3::new(x, y, z),
            heading,
            size,
        }
    }

    fn place_members<R: Rng + ?Sized>(
        &self,
        schooling: &FishSchooling,
        rng: &mut R,
        out: &mut Vec<FishInstance>,
    ) {
        let yaw = self.heading.x.atan2(self.heading.z);
        let [jx, jy, jz] = schooling.member_jitter;

        for _ in 0..self.size {
            let offset = Vec3::new(centered(rng, jx), centered(rng, jy), centered(rng, jz));
            let mut position = self.center + offset;
            position.y = position.y.min(schooling.max_swim_height);

            out.push(FishInstance {
                position,
                velocity: self.heading,
                yaw,
            });
        }
    }
}

/// Generate every school of one species around the camera
pub fn spawn_fish<R: Rng + ?Sized>(
    schooling: &FishSchooling,
    camera: &CameraView,
    rng: &mut R,
) -> Vec<FishInstance> {
    let mut fish = Vec::with_capacity(schooling.groups_per_species * schooling.group_size.1);

    for _ in 0..schooling.groups_per_species {
        SchoolBuilder::draw(schooling, camera.position, rng).place_members(
            schooling,
            rng,
            &mut fish,
        );
    }

    fish
}

/// Move a fish that left the volume back in front of the camera
///
/// Heading and yaw are kept so the fish rejoins its original direction.
/// Once the camera has passed the despawn line, the band is laid out past
/// the line instead, so the fish does not cross it again on the next tick.
pub fn respawn_fish<R: Rng + ?Sized>(
    fish: &mut FishInstance,
    schooling: &FishSchooling,
    camera: &CameraView,
    rng: &mut R,
) {
    fish.position.x = centered(rng, 2.0 * schooling.respawn_radius_xz);
    fish.position.y = uniform(rng, schooling.spawn_band_y).min(schooling.max_swim_height);

    let depth = rng.gen::<f32>() * schooling.respawn_z_depth;
    let ahead = camera.position.z - schooling.respawn_z_offset - depth;
    fish.position.z = if ahead >= schooling.despawn_z {
        ahead
    } else {
        schooling.despawn_z + schooling.respawn_z_offset + depth
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::seeded_rng;
    use crate::scene::MeshHandle;

    fn camera_at(position: Vec3) -> CameraView {
        CameraView {
            position,
            forward: Vec3::NEG_Z,
        }
    }

    fn coral() -> PlantSpecies {
        PlantSpecies {
            name: "coral".to_string(),
            mesh: MeshHandle(0),
            vertex_count: 24,
            scale_range: (0.03, 0.05),
            color: [0.0, 0.5, 0.0],
            tilt: 0.0,
        }
    }

    #[test]
    fn test_plants_cover_field_at_ground_level() {
        let field = PlantField::default();
        let plants = spawn_plants(&coral(), &field, &mut seeded_rng(7));

        assert_eq!(plants.len(), field.count_per_species);
        let half = field.extent_xz / 2.0;
        for p in &plants {
            assert_eq!(p.position.y, field.ground_y);
            assert!(p.position.x >= -half && p.position.x < half);
            assert!(p.position.z >= -half && p.position.z < half);
            assert!(p.scale >= 0.03 && p.scale <= 0.05);
            assert!(p.yaw >= 0.0 && p.yaw <= TAU);
        }
    }

    #[test]
    fn test_bubbles_start_below_floor() {
        let params = BubbleParams::default();
        let bubbles = spawn_bubbles(&params, &mut seeded_rng(3));

        assert_eq!(bubbles.len(), params.count);
        for b in &bubbles {
            assert!(b.position.y <= params.floor_y);
            assert!(b.position.y >= params.floor_y - params.initial_depth_span);
            assert!(b.speed >= params.initial_speed.0 && b.speed <= params.initial_speed.1);
            assert!(b.scale >= params.scale.0 && b.scale <= params.scale.1);
        }
    }

    #[test]
    fn test_fish_schools_share_heading() {
        let schooling = FishSchooling::default();
        let camera = camera_at(Vec3::new(0.0, 8.0, 15.0));
        let fish = spawn_fish(&schooling, &camera, &mut seeded_rng(11));

        let (min, max) = schooling.group_size;
        assert!(fish.len() >= schooling.groups_per_species * min);
        assert!(fish.len() <= schooling.groups_per_species * max);

        // Headings only change at school boundaries
        let mut schools = 1;
        for pair in fish.windows(2) {
            if pair[0].velocity != pair[1].velocity {
                schools += 1;
            }
        }
        assert!(schools <= schooling.groups_per_species);

        for f in &fish {
            assert!((f.velocity.length() - 1.0).abs() < 1e-4);
            assert!((f.yaw - f.velocity.x.atan2(f.velocity.z)).abs() < 1e-6);
            assert!(f.position.y <= schooling.max_swim_height);
        }
    }

    #[test]
    fn test_fish_spawn_around_camera() {
        let schooling = FishSchooling::default();
        let camera = camera_at(Vec3::new(400.0, -5.0, -250.0));
        let fish = spawn_fish(&schooling, &camera, &mut seeded_rng(5));

        let reach = schooling.spawn_extent_xz / 2.0 + schooling.member_jitter[0] / 2.0;
        for f in &fish {
            assert!((f.position.x - camera.position.x).abs() <= reach);
            assert!((f.position.z - camera.position.z).abs() <= reach);
        }
    }

    #[test]
    fn test_same_seed_same_population() {
        let schooling = FishSchooling::default();
        let camera = camera_at(Vec3::ZERO);

        let a = spawn_fish(&schooling, &camera, &mut seeded_rng(42));
        let b = spawn_fish(&schooling, &camera, &mut seeded_rng(42));
        let c = spawn_fish(&schooling, &camera, &mut seeded_rng(43));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_respawn_fish_lands_ahead_of_camera() {
        let schooling = FishSchooling::default();
        let mut rng = seeded_rng(9);
        let velocity = Vec3::new(0.1, 0.0, -0.99).normalize();

        for camera_z in [15.0, -60.0] {
            let mut fish = FishInstance {
                position: Vec3::new(3.0, -4.0, -130.0),
                velocity,
                yaw: 1.25,
            };
            let camera = camera_at(Vec3::new(0.0, 0.0, camera_z));
            respawn_fish(&mut fish, &schooling, &camera, &mut rng);

            assert!(fish.position.z >= schooling.despawn_z);
            assert!(fish.position.z <= camera_z - schooling.respawn_z_offset);
            assert!(
                fish.position.z
                    >= camera_z - schooling.respawn_z_offset - schooling.respawn_z_depth
            );
            assert!(fish.position.x.abs() <= schooling.respawn_radius_xz);
            assert!(fish.position.y >= schooling.spawn_band_y.0);
            assert!(fish.position.y <= schooling.spawn_band_y.1);
            assert_eq!(fish.velocity, velocity);
            assert_eq!(fish.yaw, 1.25);
        }
    }

    #[test]
    fn test_respawn_fish_with_camera_past_despawn_line() {
        let schooling = FishSchooling::default();
        let camera = camera_at(Vec3::new(0.0, 0.0, schooling.despawn_z - 45.0));
        let mut rng = seeded_rng(13);

        for _ in 0..50 {
            let mut fish = FishInstance {
                position: Vec3::new(0.0, -4.0, schooling.despawn_z - 0.1),
                velocity: Vec3::NEG_Z,
                yaw: std::f32::consts::PI,
            };
            respawn_fish(&mut fish, &schooling, &camera, &mut rng);

            let clear = fish.position.z - schooling.despawn_z;
            assert!(clear >= schooling.respawn_z_offset);
            assert!(clear <= schooling.respawn_z_offset + schooling.respawn_z_depth);
        }
    }
}
