//! First lesson: two indexed shapes drawn with one minimal shader.

use glow::HasContext;
use learngl::{abs::*, geometry, settings::Settings, shader_program};

fn main() {
    learngl::logging::init();
    let settings = Settings::load_or_default("settings.json");
    let mut app = App::new("Hello Triangle", &settings).unwrap_or_else(|err| {
        log::error!("failed to create window: {err}");
        std::process::exit(1);
    });

    let shader = shader_program!(triangle, app.gl, "..");

    let quadrangle = Mesh::new(
        &app.gl,
        &geometry::QUADRANGLE,
        &geometry::QUAD_INDICES,
        glow::TRIANGLES,
    );
    let rectangle = Mesh::new(
        &app.gl,
        &geometry::RECTANGLE,
        &geometry::QUAD_INDICES,
        glow::TRIANGLES,
    );

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

        shader.use_program();
        quadrangle.draw();
        rectangle.draw();

        app.window.gl_swap_window();
    }
}
