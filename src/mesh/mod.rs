//! Procedural geometry: tessellated grids and proxy shapes.

mod grid;
mod proxy;

// Re-export public types
pub use grid::{GridMesh, MeshError};
pub use proxy::ProxyMesh;

use bytemuck::{Pod, Zeroable};

/// Vertex layout shared by every uploaded mesh (position + normal + UV)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}
