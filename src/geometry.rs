//! Hard-coded tutorial geometry.
//!
//! The vertex structs are `#[repr(C)]` so their in-memory layout is exactly
//! the interleaved buffer the attribute pointers describe. Attribute
//! locations are sequential from 0 and must match the `layout (location = n)`
//! declarations in the corresponding shaders.

use glam::{Vec2, Vec3};
use glow::HasContext;

use crate::abs::Vertex;

#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct PosVertex {
    pub position: Vec3,
}

impl Vertex for PosVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = size_of::<PosVertex>() as i32;
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        }
    }
}

#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct ColorVertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl Vertex for ColorVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = size_of::<ColorVertex>() as i32;
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, size_of::<Vec3>() as i32);
        }
    }
}

#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct TexVertex {
    pub position: Vec3,
    pub tex_coord: Vec2,
}

impl Vertex for TexVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = size_of::<TexVertex>() as i32;
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 2, glow::FLOAT, false, stride, size_of::<Vec3>() as i32);
        }
    }
}

#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct ColorTexVertex {
    pub position: Vec3,
    pub color: Vec3,
    pub tex_coord: Vec2,
}

impl Vertex for ColorTexVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = size_of::<ColorTexVertex>() as i32;
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, size_of::<Vec3>() as i32);
            gl.enable_vertex_attrib_array(2);
            gl.vertex_attrib_pointer_f32(
                2,
                2,
                glow::FLOAT,
                false,
                stride,
                (2 * size_of::<Vec3>()) as i32,
            );
        }
    }
}

#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct NormalVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

impl Vertex for NormalVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = size_of::<NormalVertex>() as i32;
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, size_of::<Vec3>() as i32);
        }
    }
}

const fn pos(x: f32, y: f32, z: f32) -> PosVertex {
    PosVertex {
        position: Vec3::new(x, y, z),
    }
}

const fn col(x: f32, y: f32, z: f32, r: f32, g: f32, b: f32) -> ColorVertex {
    ColorVertex {
        position: Vec3::new(x, y, z),
        color: Vec3::new(r, g, b),
    }
}

const fn tex(x: f32, y: f32, z: f32, u: f32, v: f32) -> TexVertex {
    TexVertex {
        position: Vec3::new(x, y, z),
        tex_coord: Vec2::new(u, v),
    }
}

const fn coltex(x: f32, y: f32, z: f32, r: f32, g: f32, b: f32, u: f32, v: f32) -> ColorTexVertex {
    ColorTexVertex {
        position: Vec3::new(x, y, z),
        color: Vec3::new(r, g, b),
        tex_coord: Vec2::new(u, v),
    }
}

const fn norm(x: f32, y: f32, z: f32, nx: f32, ny: f32, nz: f32) -> NormalVertex {
    NormalVertex {
        position: Vec3::new(x, y, z),
        normal: Vec3::new(nx, ny, nz),
    }
}

/// Two triangles covering the corners 0-1-2 and 1-2-3 of a four-vertex quad.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 1, 2, 3];

/// Slightly skewed quad for the hello-triangle lesson.
pub const QUADRANGLE: [PosVertex; 4] = [
    pos(-0.5, -0.5, 0.0),
    pos(0.5, -0.5, 0.0),
    pos(-0.45, 0.5, 0.0),
    pos(0.45, 0.5, 0.0),
];

/// Second shape for the hello-triangle lesson, partly off screen on purpose.
pub const RECTANGLE: [PosVertex; 4] = [
    pos(0.5, -0.8, 0.0),
    pos(0.7, 0.5, 0.0),
    pos(1.1, -0.5, 0.0),
    pos(1.0, 0.5, 0.0),
];

/// Quad with one primary color per corner for the uniform lesson.
pub const GRADIENT_QUAD: [ColorVertex; 4] = [
    col(-0.5, -0.5, 0.0, 1.0, 0.0, 0.0),
    col(0.5, -0.5, 0.0, 0.0, 1.0, 0.0),
    col(-0.45, 0.5, 0.0, 0.0, 0.0, 1.0),
    col(0.45, 0.5, 0.0, 1.0, 0.0, 0.0),
];

/// Textured quad for the texture lesson. The texture coordinates run to 2.0
/// so the wrap modes are visible.
pub const BLEND_QUAD: [ColorTexVertex; 4] = [
    coltex(-0.5, -0.5, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0),
    coltex(0.5, -0.5, 0.0, 0.0, 1.0, 0.0, 2.0, 0.0),
    coltex(-0.5, 0.5, 0.0, 0.0, 0.0, 1.0, 0.0, 2.0),
    coltex(0.5, 0.5, 0.0, 1.0, 0.0, 0.0, 2.0, 2.0),
];

/// Unit-texture quad for the transformation lesson.
pub const TEXTURED_QUAD: [TexVertex; 4] = [
    tex(-0.5, -0.5, 0.0, 0.0, 0.0),
    tex(0.5, -0.5, 0.0, 1.0, 0.0),
    tex(-0.5, 0.5, 0.0, 0.0, 1.0),
    tex(0.5, 0.5, 0.0, 1.0, 1.0),
];

/// Unit cube, six faces of two triangles each, with texture coordinates.
pub const CUBE_TEX: [TexVertex; 36] = [
    tex(-0.5, -0.5, -0.5, 0.0, 0.0),
    tex(0.5, -0.5, -0.5, 1.0, 0.0),
    tex(0.5, 0.5, -0.5, 1.0, 1.0),
    tex(0.5, 0.5, -0.5, 1.0, 1.0),
    tex(-0.5, 0.5, -0.5, 0.0, 1.0),
    tex(-0.5, -0.5, -0.5, 0.0, 0.0),
    //
    tex(-0.5, -0.5, 0.5, 0.0, 0.0),
    tex(0.5, -0.5, 0.5, 1.0, 0.0),
    tex(0.5, 0.5, 0.5, 1.0, 1.0),
    tex(0.5, 0.5, 0.5, 1.0, 1.0),
    tex(-0.5, 0.5, 0.5, 0.0, 1.0),
    tex(-0.5, -0.5, 0.5, 0.0, 0.0),
    //
    tex(-0.5, 0.5, 0.5, 1.0, 0.0),
    tex(-0.5, 0.5, -0.5, 1.0, 1.0),
    tex(-0.5, -0.5, -0.5, 0.0, 1.0),
    tex(-0.5, -0.5, -0.5, 0.0, 1.0),
    tex(-0.5, -0.5, 0.5, 0.0, 0.0),
    tex(-0.5, 0.5, 0.5, 1.0, 0.0),
    //
    tex(0.5, 0.5, 0.5, 1.0, 0.0),
    tex(0.5, 0.5, -0.5, 1.0, 1.0),
    tex(0.5, -0.5, -0.5, 0.0, 1.0),
    tex(0.5, -0.5, -0.5, 0.0, 1.0),
    tex(0.5, -0.5, 0.5, 0.0, 0.0),
    tex(0.5, 0.5, 0.5, 1.0, 0.0),
    //
    tex(-0.5, -0.5, -0.5, 0.0, 1.0),
    tex(0.5, -0.5, -0.5, 1.0, 1.0),
    tex(0.5, -0.5, 0.5, 1.0, 0.0),
    tex(0.5, -0.5, 0.5, 1.0, 0.0),
    tex(-0.5, -0.5, 0.5, 0.0, 0.0),
    tex(-0.5, -0.5, -0.5, 0.0, 1.0),
    //
    tex(-0.5, 0.5, -0.5, 0.0, 1.0),
    tex(0.5, 0.5, -0.5, 1.0, 1.0),
    tex(0.5, 0.5, 0.5, 1.0, 0.0),
    tex(0.5, 0.5, 0.5, 1.0, 0.0),
    tex(-0.5, 0.5, 0.5, 0.0, 0.0),
    tex(-0.5, 0.5, -0.5, 0.0, 1.0),
];

/// The same unit cube with per-face normals for the lighting lessons.
pub const CUBE_NORMALS: [NormalVertex; 36] = [
    norm(-0.5, -0.5, -0.5, 0.0, 0.0, -1.0),
    norm(0.5, -0.5, -0.5, 0.0, 0.0, -1.0),
    norm(0.5, 0.5, -0.5, 0.0, 0.0, -1.0),
    norm(0.5, 0.5, -0.5, 0.0, 0.0, -1.0),
    norm(-0.5, 0.5, -0.5, 0.0, 0.0, -1.0),
    norm(-0.5, -0.5, -0.5, 0.0, 0.0, -1.0),
    //
    norm(-0.5, -0.5, 0.5, 0.0, 0.0, 1.0),
    norm(0.5, -0.5, 0.5, 0.0, 0.0, 1.0),
    norm(0.5, 0.5, 0.5, 0.0, 0.0, 1.0),
    norm(0.5, 0.5, 0.5, 0.0, 0.0, 1.0),
    norm(-0.5, 0.5, 0.5, 0.0, 0.0, 1.0),
    norm(-0.5, -0.5, 0.5, 0.0, 0.0, 1.0),
    //
    norm(-0.5, 0.5, 0.5, -1.0, 0.0, 0.0),
    norm(-0.5, 0.5, -0.5, -1.0, 0.0, 0.0),
    norm(-0.5, -0.5, -0.5, -1.0, 0.0, 0.0),
    norm(-0.5, -0.5, -0.5, -1.0, 0.0, 0.0),
    norm(-0.5, -0.5, 0.5, -1.0, 0.0, 0.0),
    norm(-0.5, 0.5, 0.5, -1.0, 0.0, 0.0),
    //
    norm(0.5, 0.5, 0.5, 1.0, 0.0, 0.0),
    norm(0.5, 0.5, -0.5, 1.0, 0.0, 0.0),
    norm(0.5, -0.5, -0.5, 1.0, 0.0, 0.0),
    norm(0.5, -0.5, -0.5, 1.0, 0.0, 0.0),
    norm(0.5, -0.5, 0.5, 1.0, 0.0, 0.0),
    norm(0.5, 0.5, 0.5, 1.0, 0.0, 0.0),
    //
    norm(-0.5, -0.5, -0.5, 0.0, -1.0, 0.0),
    norm(0.5, -0.5, -0.5, 0.0, -1.0, 0.0),
    norm(0.5, -0.5, 0.5, 0.0, -1.0, 0.0),
    norm(0.5, -0.5, 0.5, 0.0, -1.0, 0.0),
    norm(-0.5, -0.5, 0.5, 0.0, -1.0, 0.0),
    norm(-0.5, -0.5, -0.5, 0.0, -1.0, 0.0),
    //
    norm(-0.5, 0.5, -0.5, 0.0, 1.0, 0.0),
    norm(0.5, 0.5, -0.5, 0.0, 1.0, 0.0),
    norm(0.5, 0.5, 0.5, 0.0, 1.0, 0.0),
    norm(0.5, 0.5, 0.5, 0.0, 1.0, 0.0),
    norm(-0.5, 0.5, 0.5, 0.0, 1.0, 0.0),
    norm(-0.5, 0.5, -0.5, 0.0, 1.0, 0.0),
];

/// Scattered world positions for the camera lesson's ten cubes.
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// The cube positions without texture coordinates, for the flat-color and
/// light-marker meshes.
pub fn cube_pos_vertices() -> Vec<PosVertex> {
    CUBE_TEX
        .iter()
        .map(|v| PosVertex {
            position: v.position,
        })
        .collect()
}

/// `0..count` indices for meshes that are drawn as a plain vertex run.
pub fn sequential_indices(count: u32) -> Vec<u32> {
    (0..count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_structs_match_their_gl_stride() {
        assert_eq!(size_of::<PosVertex>(), 3 * size_of::<f32>());
        assert_eq!(size_of::<ColorVertex>(), 6 * size_of::<f32>());
        assert_eq!(size_of::<TexVertex>(), 5 * size_of::<f32>());
        assert_eq!(size_of::<ColorTexVertex>(), 8 * size_of::<f32>());
        assert_eq!(size_of::<NormalVertex>(), 6 * size_of::<f32>());
    }

    #[test]
    fn cubes_have_six_faces_of_two_triangles() {
        assert_eq!(CUBE_TEX.len(), 36);
        assert_eq!(CUBE_NORMALS.len(), 36);
    }

    #[test]
    fn lit_cube_normals_are_unit_axis_vectors() {
        for vertex in CUBE_NORMALS {
            assert_eq!(vertex.normal.length(), 1.0);
            assert_eq!(vertex.normal.abs().max_element(), 1.0);
        }
    }

    #[test]
    fn lit_cube_normals_point_away_from_center() {
        for vertex in CUBE_NORMALS {
            assert!(vertex.normal.dot(vertex.position) > 0.0);
        }
    }

    #[test]
    fn flat_cube_shares_the_textured_positions() {
        let flat = cube_pos_vertices();
        assert_eq!(flat.len(), CUBE_TEX.len());
        for (a, b) in flat.iter().zip(CUBE_TEX.iter()) {
            assert_eq!(a.position, b.position);
        }
    }

    #[test]
    fn sequential_indices_cover_the_run() {
        let indices = sequential_indices(36);
        assert_eq!(indices.len(), 36);
        assert_eq!(indices[0], 0);
        assert_eq!(indices[35], 35);
    }
}
