//! Flat tessellated grid shared by the ocean surface and the seabed.

use thiserror::Error;

use super::Vertex;
use crate::params::GridSpec;

/// Grid tessellation precondition violation
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    #[error("grid needs at least 2x2 vertices, got {width}x{depth}")]
    Degenerate { width: usize, depth: usize },

    #[error("grid of {width}x{depth} vertices overflows 32-bit indices")]
    TooLarge { width: usize, depth: usize },
}

/// Immutable grid mesh: row-major vertices, two triangles per cell
#[derive(Debug, Clone, PartialEq)]
pub struct GridMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl GridMesh {
    /// Build a grid of `width` x `depth` vertices centered on the origin
    pub fn new(spec: &GridSpec) -> Result<Self, MeshError> {
        let (width, depth) = (spec.width, spec.depth);
        if width < 2 || depth < 2 {
            return Err(MeshError::Degenerate { width, depth });
        }
        let vertex_count = width
            .checked_mul(depth)
            .filter(|&n| n <= u32::MAX as usize)
            .ok_or(MeshError::TooLarge { width, depth })?;

        let half_x = (width - 1) as f32 / 2.0;
        let half_z = (depth - 1) as f32 / 2.0;

        let mut vertices = Vec::with_capacity(vertex_count);
        let mut indices = Vec::with_capacity(6 * (width - 1) * (depth - 1));

        // Generate flat XZ plane grid
        for z in 0..depth {
            for x in 0..width {
                let uv = if spec.with_uv {
                    [x as f32 / (width - 1) as f32, z as f32 / (depth - 1) as f32]
                } else {
                    [0.0, 0.0]
                };

                vertices.push(Vertex {
                    position: [
                        (x as f32 - half_x) * spec.spacing_m,
                        0.0,
                        (z as f32 - half_z) * spec.spacing_m,
                    ],
                    normal: [0.0, 1.0, 0.0],
                    uv,
                });
            }
        }

        // Two triangles per cell, split along the tr-bl diagonal
        for z in 0..depth - 1 {
            for x in 0..width - 1 {
                let top_left = (z * width + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((z + 1) * width + x) as u32;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        log::debug!(
            "Grid mesh {}x{}: {} vertices, {} indices",
            width,
            depth,
            vertices.len(),
            indices.len()
        );

        Ok(Self {
            vertices,
            indices,
        })
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_counts_and_index_bounds() {
        for (width, depth) in [(2, 2), (3, 2), (5, 7), (16, 9)] {
            let grid = GridMesh::new(&GridSpec::new(width, depth)).unwrap();

            assert_eq!(grid.vertices.len(), width * depth);
            assert_eq!(grid.indices.len(), 6 * (width - 1) * (depth - 1));
            assert!(grid
                .indices
                .iter()
                .all(|&i| (i as usize) < grid.vertices.len()));
        }
    }

    #[test]
    fn test_three_by_two_grid_indices() {
        let grid = GridMesh::new(&GridSpec::new(3, 2)).unwrap();

        assert_eq!(grid.vertices.len(), 6);
        assert_eq!(grid.indices.len(), 12);
        // First cell: (tl=0, bl=3, tr=1), (tr=1, bl=3, br=4)
        assert_eq!(&grid.indices[..6], &[0, 3, 1, 1, 3, 4]);
        assert_eq!(&grid.indices[6..], &[1, 4, 2, 2, 4, 5]);
    }

    #[test]
    fn test_grid_is_deterministic() {
        let spec = GridSpec::new(12, 8).with_uv();
        assert_eq!(GridMesh::new(&spec), GridMesh::new(&spec));
    }

    #[test]
    fn test_grid_is_centered_with_spacing() {
        let grid = GridMesh::new(&GridSpec::new(3, 3)).unwrap();

        assert_eq!(grid.vertices[0].position, [-2.0, 0.0, -2.0]);
        assert_eq!(grid.vertices[4].position, [0.0, 0.0, 0.0]);
        assert_eq!(grid.vertices[8].position, [2.0, 0.0, 2.0]);
        assert!(grid.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_uv_spans_unit_square() {
        let grid = GridMesh::new(&GridSpec::new(4, 3).with_uv()).unwrap();
        assert_eq!(grid.vertices[0].uv, [0.0, 0.0]);
        assert_eq!(grid.vertices[11].uv, [1.0, 1.0]);

        let plain = GridMesh::new(&GridSpec::new(4, 3)).unwrap();
        assert!(plain.vertices.iter().all(|v| v.uv == [0.0, 0.0]));
    }

    #[test]
    fn test_rejects_degenerate_grid() {
        assert_eq!(
            GridMesh::new(&GridSpec::new(1, 5)),
            Err(MeshError::Degenerate { width: 1, depth: 5 })
        );
        assert_eq!(
            GridMesh::new(&GridSpec::new(4, 0)),
            Err(MeshError::Degenerate { width: 4, depth: 0 })
        );
    }
    #[test]
    fn test_rejects_grid_beyond_u32_indices() {
        assert_eq!(
            GridMesh::new(&GridSpec::new(70_000, 70_000)),
            Err(MeshError::TooLarge {
                width: 70_000,
                depth: 70_000
            })
        );
    }
}
