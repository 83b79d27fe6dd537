//! The SDL2 + OpenGL backend.

mod conversions;
mod input;
mod platform;
mod renderer;
mod window;

pub use input::copied_text;
pub use platform::{Sdl2Platform, native_pixels_per_point};
pub use renderer::GlowRenderer;
pub use window::GlWindow;

use crate::{EventSource, FrameLoop, SetupError, ShellOptions, TerminationEvent};

impl EventSource for sdl2::EventPump {
    type Event = sdl2::event::Event;

    fn poll_event(&mut self) -> Option<Self::Event> {
        Self::poll_event(self)
    }
}

impl TerminationEvent for sdl2::event::Event {
    fn is_termination(&self) -> bool {
        use sdl2::event::{Event, WindowEvent};

        matches!(
            self,
            Event::Quit { .. }
                | Event::Window {
                    win_event: WindowEvent::Close,
                    ..
                }
        )
    }
}

/// Open a window and run `build_ui` once per frame until the window is closed.
///
/// Returns the number of frames presented.
///
/// Everything is created on, and stays on, the calling thread.
/// Whatever was acquired is released in reverse order, also when setup fails halfway.
///
/// # Errors
/// Any failure during setup. Nothing can fail once the loop is running.
pub fn run_native(
    options: &ShellOptions,
    build_ui: impl FnMut(&egui::Context),
) -> Result<u64, SetupError> {
    let gl_window = GlWindow::new(options)?;
    let gl = gl_window.load_gl();
    let event_pump = gl_window.event_pump()?;

    let egui_ctx = egui::Context::default();
    let mut platform = Sdl2Platform::new(gl_window.window());
    let renderer = GlowRenderer::new(gl, options.shader_version, options.clear_color)?;
    platform.set_max_texture_side(renderer.max_texture_side());

    let frame_loop = FrameLoop::new(gl_window, event_pump, egui_ctx, platform, renderer);
    Ok(frame_loop.run(build_ui))
}
