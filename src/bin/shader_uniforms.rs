//! Shader uniforms lesson: the quad orbits the center and its palette cycles
//! through the primaries, both driven by per-frame uniform writes.

use glam::Vec3;
use glow::HasContext;
use learngl::{abs::*, geometry, settings::Settings, shader_program};

/// Fades the palette through green, blue and red, one channel at a time.
fn cycling_color(time: f32) -> Vec3 {
    let phase = time * 4.0;
    let intensity = phase.fract();
    match phase as i32 % 3 {
        0 => Vec3::new(0.0, 1.0 - intensity, intensity),
        1 => Vec3::new(intensity, 0.0, 1.0 - intensity),
        _ => Vec3::new(1.0 - intensity, intensity, 0.0),
    }
}

fn main() {
    learngl::logging::init();
    let settings = Settings::load_or_default("settings.json");
    let mut app = App::new("Shader Uniforms", &settings).unwrap_or_else(|err| {
        log::error!("failed to create window: {err}");
        std::process::exit(1);
    });

    let shader = shader_program!(gradient, app.gl, "..");

    let quad = Mesh::new(
        &app.gl,
        &geometry::GRADIENT_QUAD,
        &geometry::QUAD_INDICES,
        glow::TRIANGLES,
    );

    let start = std::time::Instant::now();

    'running: loop {
        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::KeyDown {
                    keycode: Some(sdl2::keyboard::Keycode::Escape),
                    ..
                } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(width, height),
                    ..
                } => unsafe {
                    app.gl.viewport(0, 0, width, height);
                },
                _ => {}
            }
        }

        unsafe {
            app.gl.clear_color(0.2, 0.3, 0.3, 1.0);
            app.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        let time = start.elapsed().as_secs_f32();
        shader.use_program();
        shader.set_uniform(
            "xy_offset",
            Vec3::new(time.cos() / 2.0, time.sin() / 2.0, 0.0),
        );
        shader.set_uniform("colors", cycling_color(time));
        quad.draw();

        app.window.gl_swap_window();
    }
}
