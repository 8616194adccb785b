//! Literal cube and pyramid geometry.

use shapes3d_engine::paint::Color;
use shapes3d_engine::scene::{Mesh, Primitive, Vertex};

const fn v(x: f32, y: f32, z: f32, color: Color) -> Vertex {
    Vertex::new([x, y, z], color)
}

/// Unit cube (edge length 2) as 6 quads, one color per face.
#[rustfmt::skip]
static CUBE_VERTICES: [Vertex; 24] = [
    // top (y = 1)
    v( 1.0,  1.0, -1.0, Color::GREEN),
    v(-1.0,  1.0, -1.0, Color::GREEN),
    v(-1.0,  1.0,  1.0, Color::GREEN),
    v( 1.0,  1.0,  1.0, Color::GREEN),
    // bottom (y = -1)
    v( 1.0, -1.0,  1.0, Color::ORANGE),
    v(-1.0, -1.0,  1.0, Color::ORANGE),
    v(-1.0, -1.0, -1.0, Color::ORANGE),
    v( 1.0, -1.0, -1.0, Color::ORANGE),
    // front (z = 1)
    v( 1.0,  1.0,  1.0, Color::RED),
    v(-1.0,  1.0,  1.0, Color::RED),
    v(-1.0, -1.0,  1.0, Color::RED),
    v( 1.0, -1.0,  1.0, Color::RED),
    // back (z = -1)
    v( 1.0, -1.0, -1.0, Color::YELLOW),
    v(-1.0, -1.0, -1.0, Color::YELLOW),
    v(-1.0,  1.0, -1.0, Color::YELLOW),
    v( 1.0,  1.0, -1.0, Color::YELLOW),
    // left (x = -1)
    v(-1.0,  1.0,  1.0, Color::BLUE),
    v(-1.0,  1.0, -1.0, Color::BLUE),
    v(-1.0, -1.0, -1.0, Color::BLUE),
    v(-1.0, -1.0,  1.0, Color::BLUE),
    // right (x = 1)
    v( 1.0,  1.0, -1.0, Color::MAGENTA),
    v( 1.0,  1.0,  1.0, Color::MAGENTA),
    v( 1.0, -1.0,  1.0, Color::MAGENTA),
    v( 1.0, -1.0, -1.0, Color::MAGENTA),
];

/// Square pyramid without a base: 4 triangles, red apex, base corners
/// alternating green and blue.
#[rustfmt::skip]
static PYRAMID_VERTICES: [Vertex; 12] = [
    // front
    v( 0.0,  1.0,  0.0, Color::RED),
    v(-1.0, -1.0,  1.0, Color::GREEN),
    v( 1.0, -1.0,  1.0, Color::BLUE),
    // right
    v( 0.0,  1.0,  0.0, Color::RED),
    v( 1.0, -1.0,  1.0, Color::BLUE),
    v( 1.0, -1.0, -1.0, Color::GREEN),
    // back
    v( 0.0,  1.0,  0.0, Color::RED),
    v( 1.0, -1.0, -1.0, Color::GREEN),
    v(-1.0, -1.0, -1.0, Color::BLUE),
    // left
    v( 0.0,  1.0,  0.0, Color::RED),
    v(-1.0, -1.0, -1.0, Color::BLUE),
    v(-1.0, -1.0,  1.0, Color::GREEN),
];

pub static CUBE: Mesh = Mesh::new("cube", Primitive::Quads, &CUBE_VERTICES);
pub static PYRAMID: Mesh = Mesh::new("pyramid", Primitive::Triangles, &PYRAMID_VERTICES);

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(mesh: &Mesh) -> Vec<[f32; 3]> {
        mesh.vertices.iter().map(|v| v.position).collect()
    }

    #[test]
    fn cube_has_six_quads() {
        assert_eq!(CUBE.primitive, Primitive::Quads);
        assert_eq!(CUBE.vertices.len(), 24);
        assert_eq!(CUBE.face_count(), 6);
        assert_eq!(CUBE.triangle_indices().len(), 36);
    }

    #[test]
    fn pyramid_has_four_triangles() {
        assert_eq!(PYRAMID.primitive, Primitive::Triangles);
        assert_eq!(PYRAMID.vertices.len(), 12);
        assert_eq!(PYRAMID.face_count(), 4);
    }

    #[test]
    fn cube_faces_are_flat_colored() {
        let expected = [
            [0.0, 1.0, 0.0], // top
            [1.0, 0.5, 0.0], // bottom
            [1.0, 0.0, 0.0], // front
            [1.0, 1.0, 0.0], // back
            [0.0, 0.0, 1.0], // left
            [1.0, 0.0, 1.0], // right
        ];
        for (face, color) in CUBE.faces().zip(expected) {
            assert!(face.iter().all(|v| v.color == color), "{face:?}");
        }
    }

    #[test]
    fn cube_faces_lie_on_their_planes() {
        // (axis, value) per face in submission order.
        let planes = [(1, 1.0), (1, -1.0), (2, 1.0), (2, -1.0), (0, -1.0), (0, 1.0)];
        for (face, (axis, value)) in CUBE.faces().zip(planes) {
            assert!(face.iter().all(|v| v.position[axis] == value), "{face:?}");
        }
    }

    #[test]
    fn cube_golden_positions() {
        #[rustfmt::skip]
        let expected: [[f32; 3]; 24] = [
            [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0],
            [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0], [-1.0, -1.0, -1.0], [1.0, -1.0, -1.0],
            [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, -1.0, 1.0], [1.0, -1.0, 1.0],
            [1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0],
            [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0],
            [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0], [1.0, -1.0, -1.0],
        ];
        assert_eq!(positions(&CUBE), expected.to_vec());
    }

    #[test]
    fn pyramid_golden_data() {
        const R: [f32; 3] = [1.0, 0.0, 0.0];
        const G: [f32; 3] = [0.0, 1.0, 0.0];
        const B: [f32; 3] = [0.0, 0.0, 1.0];
        #[rustfmt::skip]
        let expected: [([f32; 3], [f32; 3]); 12] = [
            ([0.0, 1.0, 0.0], R), ([-1.0, -1.0, 1.0], G), ([1.0, -1.0, 1.0], B),
            ([0.0, 1.0, 0.0], R), ([1.0, -1.0, 1.0], B), ([1.0, -1.0, -1.0], G),
            ([0.0, 1.0, 0.0], R), ([1.0, -1.0, -1.0], G), ([-1.0, -1.0, -1.0], B),
            ([0.0, 1.0, 0.0], R), ([-1.0, -1.0, -1.0], B), ([-1.0, -1.0, 1.0], G),
        ];
        let actual: Vec<_> = PYRAMID.vertices.iter().map(|v| (v.position, v.color)).collect();
        assert_eq!(actual, expected.to_vec());
    }

    #[test]
    fn pyramid_apex_is_shared_and_red() {
        for face in PYRAMID.faces() {
            assert_eq!(face[0].position, [0.0, 1.0, 0.0]);
            assert_eq!(face[0].color, [1.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn each_base_corner_keeps_one_color() {
        // A corner shared by two faces must carry the same color in both so the
        // gradients meet without a seam.
        for a in PYRAMID.vertices {
            for b in PYRAMID.vertices {
                if a.position == b.position {
                    assert_eq!(a.color, b.color);
                }
            }
        }
    }

    #[test]
    fn mesh_labels_are_unique() {
        assert_ne!(CUBE.label, PYRAMID.label);
    }
}
