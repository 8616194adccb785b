use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

/// Position + color vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    #[inline]
    pub const fn new(position: [f32; 3], color: Color) -> Self {
        Self {
            position,
            color: color.to_rgb_array(),
        }
    }
}

/// How a vertex stream is grouped into faces.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Primitive {
    Triangles,
    /// Planar quads, split into two triangles on upload.
    Quads,
}

impl Primitive {
    #[inline]
    pub const fn vertices_per_face(self) -> usize {
        match self {
            Primitive::Triangles => 3,
            Primitive::Quads => 4,
        }
    }
}

/// Immutable mesh backed by static vertex data.
///
/// `label` identifies the mesh to the renderer's buffer cache; it must be unique
/// among meshes drawn through the same renderer.
#[derive(Debug)]
pub struct Mesh {
    pub label: &'static str,
    pub primitive: Primitive,
    pub vertices: &'static [Vertex],
}

impl Mesh {
    pub const fn new(label: &'static str, primitive: Primitive, vertices: &'static [Vertex]) -> Self {
        Self {
            label,
            primitive,
            vertices,
        }
    }

    pub fn face_count(&self) -> usize {
        self.vertices.len() / self.primitive.vertices_per_face()
    }

    /// Iterates faces in submission order. A trailing partial face is skipped.
    pub fn faces(&self) -> impl Iterator<Item = &'static [Vertex]> {
        self.vertices.chunks_exact(self.primitive.vertices_per_face())
    }

    /// Triangle-list indices for this mesh.
    ///
    /// Quads `a b c d` become `a b c` + `a c d`, preserving the winding of the
    /// source face.
    pub fn triangle_indices(&self) -> Vec<u16> {
        let faces = self.face_count();
        match self.primitive {
            Primitive::Triangles => (0..(faces * 3) as u16).collect(),
            Primitive::Quads => {
                let mut out = Vec::with_capacity(faces * 6);
                for face in 0..faces {
                    let base = (face * 4) as u16;
                    out.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
                }
                out
            }
        }
    }
}
