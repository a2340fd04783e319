//! Texturing lesson: one quad samples two textures with different wrap and
//! filter settings, blended by an animated `transparency` uniform. The quad's
//! texture coordinates run to 2.0 so the clamp and mirror modes show.

use glow::HasContext;
use learngl::{abs::*, geometry, settings::Settings, shader_program};

fn main() {
    learngl::logging::init();
    let settings = Settings::load_or_default("settings.json");
    let mut app = App::new("Textures", &settings).unwrap_or_else(|err| {
        log::error!("failed to create window: {err}");
        std::process::exit(1);
    });

    let shader = shader_program!(blend, app.gl, "..");

    let quad = Mesh::new(
        &app.gl,
        &geometry::BLEND_QUAD,
        &geometry::QUAD_INDICES,
        glow::TRIANGLES,
    );

    let container = Texture::open(
        &app.gl,
        "assets/container.png",
        TextureSettings {
            wrap: glow::CLAMP_TO_EDGE,
            min_filter: glow::NEAREST,
            mag_filter: glow::NEAREST,
            mipmaps: false,
            ..TextureSettings::default()
        },
    )
    .unwrap_or_else(|err| {
        log::error!("failed to load assets/container.png: {err}");
        std::process::exit(1);
    });
    let face = Texture::open(
        &app.gl,
        "assets/awesomeface.png",
        TextureSettings {
            wrap: glow::MIRRORED_REPEAT,
            min_filter: glow::LINEAR,
            mag_filter: glow::LINEAR,
            mipmaps: false,
            ..TextureSettings::default()
        },
    )
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
        shader.set_uniform("transparency", -time.cos() / 2.0 + 0.5);
        quad.draw();

        app.window.gl_swap_window();
    }
}
