//! Reusable plumbing for the tutorial binaries in `src/bin/`.
//!
//! Each binary is a self-contained OpenGL lesson; the shared pieces live
//! here: window/context setup, shader and texture wrappers, mesh handling,
//! the fly camera, hard-coded geometry tables and input state.

pub mod abs;
pub mod camera;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod settings;

/// Builds a [`abs::ShaderProgram`] from the `vert.glsl`/`frag.glsl` pair in
/// `src/shaders/<name>/`. Compile and link failures print the driver's info
/// log and terminate the process.
#[macro_export]
macro_rules! shader_program {
    ($name:ident, $gl:expr, $path_prefix:literal) => {{
        let vert = $crate::abs::Shader::new(
            &$gl,
            glow::VERTEX_SHADER,
            include_str!(concat!(
                $path_prefix,
                "/shaders/",
                stringify!($name),
                "/vert.glsl"
            )),
        )
        .unwrap_or_else(|info_log| {
            log::error!(
                "vertex shader `{}` failed to compile:\n{}",
                stringify!($name),
                info_log
            );
            std::process::exit(1);
        });
        let frag = $crate::abs::Shader::new(
            &$gl,
            glow::FRAGMENT_SHADER,
            include_str!(concat!(
                $path_prefix,
                "/shaders/",
                stringify!($name),
                "/frag.glsl"
            )),
        )
        .unwrap_or_else(|info_log| {
            log::error!(
                "fragment shader `{}` failed to compile:\n{}",
                stringify!($name),
                info_log
            );
            std::process::exit(1);
        });
        $crate::abs::ShaderProgram::new(&$gl, &[&vert, &frag]).unwrap_or_else(|info_log| {
            log::error!(
                "shader program `{}` failed to link:\n{}",
                stringify!($name),
                info_log
            );
            std::process::exit(1);
        })
    }};
}
