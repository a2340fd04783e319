//! SDL2 and OpenGL application management.
//!
//! The [`App`] struct bundles the SDL2 subsystems and the glow context a
//! tutorial needs. Creation failures are reported as `Err(String)` so the
//! caller can log them and terminate; there is nothing to recover once the
//! window or the GL loader is gone.

use std::sync::Arc;

use glow::HasContext;

use crate::settings::Settings;

/// The SDL2 window, OpenGL context and event pump for one tutorial.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates a window with a GL 3.3 core context sized from `settings`.
    /// The configured width and height are ignored when `settings.fullscreen`
    /// is set.
    pub fn new(title: &str, settings: &Settings) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video_subsystem = sdl.video()?;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let display_mode = video_subsystem.current_display_mode(0)?;
        let (width, height) = if settings.fullscreen {
            (display_mode.w as u32, display_mode.h as u32)
        } else {
            (settings.width, settings.height)
        };

        let mut window = video_subsystem
            .window(title, width, height)
            .opengl()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;
        window
            .set_fullscreen(if settings.fullscreen {
                sdl2::video::FullscreenType::Desktop
            } else {
                sdl2::video::FullscreenType::Off
            })
            .map_err(|e| e.to_string())?;

        let gl_context = window.gl_create_context()?;
        window.gl_make_current(&gl_context)?;
        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let gl = Arc::new(gl);

        let swap_interval = if settings.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(err) = video_subsystem.gl_set_swap_interval(swap_interval) {
            log::warn!("could not set swap interval: {err}");
        }

        unsafe {
            log::info!(
                "OpenGL {} on {}",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER)
            );
        }

        let event_pump = sdl.event_pump()?;

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl,
            event_pump,
        })
    }

    /// Width over height of the current drawable.
    pub fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.window.drawable_size();
        width as f32 / height as f32
    }
}
