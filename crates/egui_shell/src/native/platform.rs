use std::time::Instant;

use sdl2::event::{Event, WindowEvent};
use sdl2::mouse::{Cursor, SystemCursor};
use sdl2::video::Window;

use super::conversions::system_cursor;
use super::input::{InputState, copied_text, wheel_delta};
use crate::PlatformAdapter;

/// The OS cursor we are currently showing.
///
/// SDL only keeps a pointer to the cursor, so we must keep it alive.
struct FusedCursor {
    _cursor: Option<Cursor>,
    icon: Option<SystemCursor>,
}

/// Translates SDL2 events into [`egui::RawInput`], and egui's requests back to SDL.
pub struct Sdl2Platform {
    window: Window,
    start_time: Instant,
    input: InputState,
    fused_cursor: FusedCursor,
}

impl Sdl2Platform {
    /// The display size egui starts with is the window's current drawable size.
    pub fn new(window: &Window) -> Self {
        let native_pixels_per_point = native_pixels_per_point(window);
        log::debug!("Native pixels per point: {native_pixels_per_point}");
        let (width, height) = window.drawable_size();

        Self {
            window: window.clone(),
            start_time: Instant::now(),
            input: InputState::new(native_pixels_per_point, [width, height]),
            fused_cursor: FusedCursor {
                _cursor: None,
                icon: Some(SystemCursor::Arrow),
            },
        }
    }

    /// Call once the renderer knows how large a texture the GPU accepts.
    pub fn set_max_texture_side(&mut self, max_texture_side: usize) {
        self.input.raw_input.max_texture_side = Some(max_texture_side);
    }

    fn set_clipboard_text(&self, text: &str) {
        if let Err(err) = self.window.subsystem().clipboard().set_clipboard_text(text) {
            log::warn!("Failed to write clipboard text: {err}");
        }
    }
}

impl PlatformAdapter<Event> for Sdl2Platform {
    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Window {
                win_event: WindowEvent::Leave,
                ..
            } => self.input.pointer_gone(),
            Event::Window {
                win_event: WindowEvent::FocusGained,
                ..
            } => self.input.focused(true),
            Event::Window {
                win_event: WindowEvent::FocusLost,
                ..
            } => self.input.focused(false),

            Event::MouseMotion { x, y, .. } => {
                let native_pixels_per_point = native_pixels_per_point(&self.window);
                self.input.pointer_moved(*x, *y, native_pixels_per_point);
            }
            Event::MouseButtonDown { mouse_btn, .. } => self.input.mouse_button(*mouse_btn, true),
            Event::MouseButtonUp { mouse_btn, .. } => self.input.mouse_button(*mouse_btn, false),
            Event::MouseWheel {
                precise_x,
                precise_y,
                direction,
                ..
            } => {
                self.input.mouse_wheel(wheel_delta(*precise_x, *precise_y, *direction));
            }

            Event::KeyDown {
                scancode,
                keymod,
                repeat,
                ..
            } => {
                let window = &self.window;
                self.input.key(*scancode, *keymod, true, *repeat, || clipboard_text(window));
            }
            Event::KeyUp {
                scancode, keymod, ..
            } => {
                self.input.key(*scancode, *keymod, false, false, || None);
            }
            Event::TextInput { text, .. } => self.input.text(text),

            _ => {}
        }
    }

    /// Prepare for a new frame by extracting the accumulated input,
    /// as well as setting [the time](egui::RawInput::time)
    /// and [screen rectangle](egui::RawInput::screen_rect).
    fn take_egui_input(&mut self) -> egui::RawInput {
        let time = self.start_time.elapsed().as_secs_f64();
        let screen_size_px = self.screen_size_in_pixels();
        let native_pixels_per_point = native_pixels_per_point(&self.window);
        self.input.take(time, screen_size_px, native_pixels_per_point)
    }

    fn handle_platform_output(
        &mut self,
        egui_ctx: &egui::Context,
        platform_output: egui::PlatformOutput,
    ) {
        // Someone can have changed it to scale the UI.
        self.input.pixels_per_point = egui_ctx.pixels_per_point();
        self.set_cursor_icon(platform_output.cursor_icon);

        if let Some(text) = copied_text(&platform_output.commands) {
            self.set_clipboard_text(text);
        }
    }

    fn screen_size_in_pixels(&self) -> [u32; 2] {
        let (width, height) = self.window.drawable_size();
        [width, height]
    }
}

impl Sdl2Platform {
    fn set_cursor_icon(&mut self, cursor_icon: egui::CursorIcon) {
        let icon = system_cursor(cursor_icon);
        if icon == self.fused_cursor.icon {
            return;
        }

        let mouse = self.window.subsystem().sdl().mouse();
        match icon {
            None => {
                mouse.show_cursor(false);
                self.fused_cursor.icon = None;
            }
            Some(system_cursor) => match Cursor::from_system(system_cursor) {
                Ok(cursor) => {
                    cursor.set();
                    if self.fused_cursor.icon.is_none() {
                        mouse.show_cursor(true);
                    }
                    self.fused_cursor = FusedCursor {
                        _cursor: Some(cursor),
                        icon,
                    };
                }
                Err(err) => {
                    log::warn!("Failed to create cursor {system_cursor:?}: {err}");
                }
            },
        }
    }
}

fn clipboard_text(window: &Window) -> Option<String> {
    let clipboard = window.subsystem().clipboard();
    if !clipboard.has_clipboard_text() {
        return None;
    }
    clipboard
        .clipboard_text()
        .map_err(|err| log::warn!("Failed to read clipboard text: {err}"))
        .ok()
}

/// Ratio between the drawable (framebuffer) size and the window size.
pub fn native_pixels_per_point(window: &Window) -> f32 {
    let (drawable_width, _) = window.drawable_size();
    let (window_width, _) = window.size();
    if window_width == 0 {
        1.0
    } else {
        drawable_width as f32 / window_width as f32
    }
}
