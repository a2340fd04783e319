//! OpenGL and windowing abstractions shared by every tutorial binary:
//! application setup, shader management, textures and meshes.

pub mod app;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use app::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;
