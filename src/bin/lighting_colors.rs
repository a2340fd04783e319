//! First lighting lesson: a cube whose fragment color is simply
//! `light_color * object_color`, viewed through the fly camera.

use glam::{Mat4, Vec3};
use glow::HasContext;
use learngl::{
    abs::*,
    camera::{Camera, CameraMovement},
    geometry,
    input::{KeyboardState, MouseState},
    settings::Settings,
    shader_program,
};
use sdl2::keyboard::Keycode;

fn main() {
    learngl::logging::init();
    let settings = Settings::load_or_default("settings.json");
    let mut app = App::new("Lighting: Colors", &settings).unwrap_or_else(|err| {
        log::error!("failed to create window: {err}");
        std::process::exit(1);
    });

    unsafe {
        app.gl.enable(glow::DEPTH_TEST);
    }

    let shader = shader_program!(object, app.gl, "..");

    let cube = Mesh::new(
        &app.gl,
        &geometry::cube_pos_vertices(),
        &geometry::sequential_indices(36),
        glow::TRIANGLES,
    );

    let object_color = Vec3::new(1.0, 0.5, 0.31);
    let light_color = Vec3::new(1.0, 1.0, 1.0);

    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
    let mut keyboard = KeyboardState::default();
    let mut mouse = MouseState::default();
    let mut aspect_ratio = app.aspect_ratio();
    let mut grabbed = true;
    app.sdl.mouse().set_relative_mouse_mode(true);

    let mut last_frame = std::time::Instant::now();

    'running: loop {
        let now = std::time::Instant::now();
        let delta_time = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        keyboard.begin_frame();
        mouse.begin_frame();
        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(width, height),
                    ..
                } => {
                    unsafe {
                        app.gl.viewport(0, 0, width, height);
                    }
                    aspect_ratio = width as f32 / height as f32;
                }
                sdl2::event::Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => keyboard.key_down(keycode),
                sdl2::event::Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => keyboard.key_up(keycode),
                sdl2::event::Event::MouseMotion { xrel, yrel, .. } => {
                    mouse.delta.x += xrel as f32;
                    mouse.delta.y += yrel as f32;
                }
                sdl2::event::Event::MouseWheel { x, y, .. } => {
                    mouse.scroll_delta.x += x as f32;
                    mouse.scroll_delta.y += y as f32;
                }
                _ => {}
            }
        }

        if keyboard.pressed.contains(&Keycode::Escape) {
            grabbed = !grabbed;
            app.sdl.mouse().set_relative_mouse_mode(grabbed);
        }

        if grabbed {
            camera.process_mouse_motion(mouse.delta.x, -mouse.delta.y);
            camera.process_mouse_scroll(mouse.scroll_delta.y);
        }
        if keyboard.down.contains(&Keycode::W) {
            camera.process_keyboard(CameraMovement::Forward, delta_time);
        }
        if keyboard.down.contains(&Keycode::S) {
            camera.process_keyboard(CameraMovement::Backward, delta_time);
        }
        if keyboard.down.contains(&Keycode::A) {
            camera.process_keyboard(CameraMovement::Left, delta_time);
        }
        if keyboard.down.contains(&Keycode::D) {
            camera.process_keyboard(CameraMovement::Right, delta_time);
        }

        unsafe {
            app.gl.clear_color(0.2, 0.3, 0.3, 1.0);
            app.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        shader.use_program();
        shader.set_uniform("object_color", object_color);
        shader.set_uniform("light_color", light_color);
        shader.set_uniform("model", Mat4::IDENTITY);
        shader.set_uniform("view", camera.view_matrix());
        shader.set_uniform("projection", camera.projection_matrix(aspect_ratio));
        cube.draw();

        app.window.gl_swap_window();
    }
}
