//! Flat-shaded stand-in meshes for models that are loaded externally.
//!
//! Each shape is built from a small indexed point set and then expanded to
//! one vertex per triangle corner so every face carries its own normal.
//! UVs are a side projection onto the XY plane, so V runs from the top of
//! the shape (0) to the bottom (1).

use glam::{Quat, Vec3};

use super::Vertex;

/// Small indexed mesh ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl ProxyMesh {
    /// Double-ended diamond body for fish, long axis rotated by `axis_yaw` about Y
    pub fn spindle(length: f32, radius: f32, axis_yaw: f32) -> Self {
        let half = length / 2.0;
        let points = [
            Vec3::new(0.0, 0.0, half),
            Vec3::new(0.0, 0.0, -half),
            Vec3::new(radius, 0.0, 0.0),
            Vec3::new(0.0, radius, 0.0),
            Vec3::new(-radius, 0.0, 0.0),
            Vec3::new(0.0, -radius * 0.6, 0.0),
        ];
        let rotation = Quat::from_rotation_y(axis_yaw);
        let points = points.map(|p| rotation * p);

        Self::flat_shaded(&points, &RING_FACES)
    }

    /// Regular octahedron for bubbles
    pub fn octahedron(radius: f32) -> Self {
        let points = [
            Vec3::new(0.0, 0.0, radius),
            Vec3::new(0.0, 0.0, -radius),
            Vec3::new(radius, 0.0, 0.0),
            Vec3::new(0.0, radius, 0.0),
            Vec3::new(-radius, 0.0, 0.0),
            Vec3::new(0.0, -radius, 0.0),
        ];

        Self::flat_shaded(&points, &RING_FACES)
    }

    /// Four-sided pyramid rising along +Z (Z-up, like the source plant models)
    pub fn frond(height: f32, base: f32) -> Self {
        let h = base / 2.0;
        let points = [
            Vec3::new(-h, -h, 0.0),
            Vec3::new(h, -h, 0.0),
            Vec3::new(h, h, 0.0),
            Vec3::new(-h, h, 0.0),
            Vec3::new(0.0, 0.0, height),
        ];
        let faces = [[0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4], [0, 2, 1], [0, 3, 2]];

        Self::flat_shaded(&points, &faces)
    }

    /// Rotate positions and normals in model space
    pub fn rotated(mut self, rotation: Quat) -> Self {
        for v in &mut self.vertices {
            v.position = (rotation * Vec3::from_array(v.position)).to_array();
            v.normal = (rotation * Vec3::from_array(v.normal)).to_array();
        }
        self
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    fn flat_shaded(points: &[Vec3], faces: &[[usize; 3]]) -> Self {
        let mut vertices = Vec::with_capacity(faces.len() * 3);
        let mut indices = Vec::with_capacity(faces.len() * 3);
        let extent = points
            .iter()
            .map(|p| p.length())
            .fold(f32::EPSILON, f32::max);

        for face in faces {
            let [a, b, c] = face.map(|i| points[i]);
            let normal = (b - a).cross(c - a).normalize_or_zero();

            for p in [a, b, c] {
                indices.push(vertices.len() as u32);
                vertices.push(Vertex {
                    position: p.to_array(),
                    normal: normal.to_array(),
                    uv: [0.5 + p.x / (2.0 * extent), 0.5 - p.y / (2.0 * extent)],
                });
            }
        }

        Self { vertices, indices }
    }
}

/// Faces of a six-point bipyramid: tips 0 (+Z) and 1 (-Z), ring 2..=5
const RING_FACES: [[usize; 3]; 8] = [
    [0, 2, 3],
    [0, 3, 4],
    [0, 4, 5],
    [0, 5, 2],
    [1, 3, 2],
    [1, 4, 3],
    [1, 5, 4],
    [1, 2, 5],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(mesh: &ProxyMesh, faces: usize) {
        assert_eq!(mesh.indices.len(), faces * 3);
        assert_eq!(mesh.vertices.len(), faces * 3);
        assert!(mesh
            .indices
            .iter()
            .all(|&i| (i as usize) < mesh.vertices.len()));

        for v in &mesh.vertices {
            let n = Vec3::from_array(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-4, "degenerate face normal");
            assert!(v.uv.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_proxy_shapes_are_well_formed() {
        assert_well_formed(&ProxyMesh::spindle(2.0, 0.4, 0.0), 8);
        assert_well_formed(&ProxyMesh::octahedron(1.0), 8);
        assert_well_formed(&ProxyMesh::frond(3.0, 1.0), 6);
    }

    #[test]
    fn test_octahedron_normals_point_outward() {
        let mesh = ProxyMesh::octahedron(1.0);
        for tri in mesh.indices.chunks(3) {
            let v = &mesh.vertices[tri[0] as usize];
            let centroid = tri
                .iter()
                .map(|&i| Vec3::from_array(mesh.vertices[i as usize].position))
                .sum::<Vec3>()
                / 3.0;
            assert!(centroid.dot(Vec3::from_array(v.normal)) > 0.0);
        }
    }

    #[test]
    fn test_spindle_axis_rotation() {
        let mesh = ProxyMesh::spindle(2.0, 0.2, std::f32::consts::FRAC_PI_2);
        let max_x = mesh
            .vertices
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MIN, f32::max);

        // A quarter turn about Y carries the +Z tip onto +X
        assert!((max_x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotated_frond_stands_on_y() {
        let mesh = ProxyMesh::frond(3.0, 1.0)
            .rotated(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2));
        let max_y = mesh
            .vertices
            .iter()
            .map(|v| v.position[1])
            .fold(f32::MIN, f32::max);

        assert!((max_y - 3.0).abs() < 1e-5);
        for v in &mesh.vertices {
            assert!((Vec3::from_array(v.normal).length() - 1.0).abs() < 1e-4);
        }
    }
}
