//! Transformation lesson: the same textured quad drawn twice per frame with
//! different model transforms, a spinning copy and a pulsing copy.

use glam::{Mat4, Quat, Vec3};
use glow::HasContext;
use learngl::{abs::*, geometry, settings::Settings, shader_program};

fn main() {
    learngl::logging::init();
    let settings = Settings::load_or_default("settings.json");
    let mut app = App::new("Transformations", &settings).unwrap_or_else(|err| {
        log::error!("failed to create window: {err}");
        std::process::exit(1);
    });

    let shader = shader_program!(transform, app.gl, "..");

    let quad = Mesh::new(
        &app.gl,
        &geometry::TEXTURED_QUAD,
        &geometry::QUAD_INDICES,
        glow::TRIANGLES,
    );

    let container = Texture::open(&app.gl, "assets/container.png", TextureSettings::default())
        .unwrap_or_else(|err| {
            log::error!("failed to load assets/container.png: {err}");
            std::process::exit(1);
        });
    let face = Texture::open(&app.gl, "assets/awesomeface.png", TextureSettings::default())
        .unwrap_or_else(|err| {
            log::error!("failed to load assets/awesomeface.png: {err}");
            std::process::exit(1);
        });

    shader.use_program();
    shader.set_uniform("texture0", 0i32);
    shader.set_uniform("texture1", 1i32);

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
        container.bind(0);
        face.bind(1);
        shader.use_program();

        // Bottom right: rotate around Z over time.
        let spinning = Mat4::from_translation(Vec3::new(0.5, -0.5, 0.0))
            * Mat4::from_rotation_z(time);
        shader.set_uniform("transform", spinning);
        quad.draw();

        // Top left: pulse between 0.27 and 0.93 of the original size.
        let magnitude = 0.6 - time.cos() / 3.0;
        let pulsing = Mat4::from_scale_rotation_translation(
            Vec3::splat(magnitude),
            Quat::IDENTITY,
            Vec3::new(-0.5, 0.5, 0.0),
        );
        shader.set_uniform("transform", pulsing);
        quad.draw();

        app.window.gl_swap_window();
    }
}
