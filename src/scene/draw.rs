//! Draw-request boundary between the scene and a rendering backend.

use glam::Mat4;

use crate::mesh::Vertex;

/// Opaque handle to an uploaded vertex/index buffer pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// Opaque handle to a texture owned by the backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Sub-rectangle of a texture atlas (scale then offset applied to UVs)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UvRegion {
    pub scale: [f32; 2],
    pub offset: [f32; 2],
}

impl Default for UvRegion {
    fn default() -> Self {
        Self {
            scale: [1.0, 1.0],
            offset: [0.0, 0.0],
        }
    }
}

/// State bound once per batch; every following `draw` reuses it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawBinding {
    pub mesh: MeshHandle,
    /// Indices drawn per instance
    pub count: u32,
    pub texture: Option<TextureHandle>,
    pub uv: UvRegion,
    /// Colour used when no texture is bound; alpha drives blending
    pub tint: [f32; 4],
}

/// Rendering backend driven by the scene
pub trait Renderer {
    /// Upload static geometry and return its handle
    fn upload_mesh(&mut self, label: &str, vertices: &[Vertex], indices: &[u32]) -> MeshHandle;

    /// Start a batch sharing mesh, texture and tint
    fn bind(&mut self, binding: &DrawBinding);

    /// Draw the bound mesh once with the given model transform
    fn draw(&mut self, model: Mat4);
}
