//! SDL input turned into [`egui::RawInput`].
//!
//! Nothing in here touches a window: the caller passes in the DPI ratio
//! and the clipboard contents, which keeps the translation testable.

use egui::{Modifiers, Pos2};
use sdl2::keyboard::{Mod, Scancode};
use sdl2::mouse::{MouseButton, MouseWheelDirection};

use super::conversions::{key_from_scancode, modifiers_from_keymod, pointer_button};

/// Input accumulated since the last frame.
pub(crate) struct InputState {
    pub raw_input: egui::RawInput,
    pointer_pos: Option<Pos2>,
    modifiers: Modifiers,

    /// What egui uses.
    pub pixels_per_point: f32,
}

impl InputState {
    pub fn new(native_pixels_per_point: f32, screen_size_px: [u32; 2]) -> Self {
        let mut raw_input = egui::RawInput {
            screen_rect: screen_rect(screen_size_px, native_pixels_per_point),
            ..Default::default()
        };
        if let Some(viewport) = raw_input.viewports.get_mut(&egui::ViewportId::ROOT) {
            viewport.native_pixels_per_point = Some(native_pixels_per_point);
        }

        Self {
            raw_input,
            pointer_pos: None,
            modifiers: Modifiers::default(),
            pixels_per_point: native_pixels_per_point,
        }
    }

    /// `x` and `y` are in window coordinates, which the OS has already scaled.
    pub fn pointer_moved(&mut self, x: i32, y: i32, native_pixels_per_point: f32) {
        let scale = self.pixels_per_point / native_pixels_per_point;
        let pos = egui::pos2(x as f32 / scale, y as f32 / scale);
        self.pointer_pos = Some(pos);
        self.raw_input.events.push(egui::Event::PointerMoved(pos));
    }

    pub fn pointer_gone(&mut self) {
        self.pointer_pos = None;
        self.raw_input.events.push(egui::Event::PointerGone);
    }

    pub fn focused(&mut self, focused: bool) {
        self.raw_input.focused = focused;
        self.raw_input.events.push(egui::Event::WindowFocused(focused));
    }

    /// Ignored until we know where the pointer is.
    pub fn mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if let (Some(pos), Some(button)) = (self.pointer_pos, pointer_button(button)) {
            self.raw_input.events.push(egui::Event::PointerButton {
                pos,
                button,
                pressed,
                modifiers: self.modifiers,
            });
        }
    }

    /// `delta` is in lines, see [`wheel_delta`].
    pub fn mouse_wheel(&mut self, delta: egui::Vec2) {
        if self.modifiers.ctrl || self.modifiers.command {
            // Treat as zoom instead:
            let factor = (delta.y * 8.0 / 125.0).exp();
            self.raw_input.events.push(egui::Event::Zoom(factor));
        } else {
            self.raw_input.events.push(egui::Event::MouseWheel {
                unit: egui::MouseWheelUnit::Line,
                delta,
                modifiers: self.modifiers,
            });
        }
    }

    /// `clipboard_text` is only called for a paste shortcut.
    pub fn key(
        &mut self,
        scancode: Option<Scancode>,
        keymod: Mod,
        pressed: bool,
        repeat: bool,
        clipboard_text: impl FnOnce() -> Option<String>,
    ) {
        // Modifier keys have no egui key, but still change the modifier state.
        self.modifiers = modifiers_from_keymod(keymod);
        self.raw_input.modifiers = self.modifiers;

        let Some(key) = scancode.and_then(key_from_scancode) else {
            return;
        };

        if pressed && self.modifiers.command {
            match key {
                egui::Key::C => self.raw_input.events.push(egui::Event::Copy),
                egui::Key::X => self.raw_input.events.push(egui::Event::Cut),
                egui::Key::V => {
                    if let Some(contents) = clipboard_text() {
                        let contents = contents.replace("\r\n", "\n");
                        if !contents.is_empty() {
                            self.raw_input.events.push(egui::Event::Paste(contents));
                        }
                    }
                }
                _ => {}
            }
        }

        self.raw_input.events.push(egui::Event::Key {
            key,
            physical_key: Some(key),
            pressed,
            repeat,
            modifiers: self.modifiers,
        });
    }

    pub fn text(&mut self, text: &str) {
        // On some platforms we get here when the user presses Cmd-C (copy), ctrl-W, etc.
        // We need to ignore these characters that are side-effects of commands.
        let Modifiers {
            ctrl,
            command,
            mac_cmd,
            ..
        } = self.modifiers;
        let is_cmd = ctrl || command || mac_cmd;
        if !is_cmd && !text.is_empty() {
            self.raw_input
                .events
                .push(egui::Event::Text(text.replace("\r\n", "\n")));
        }
    }

    /// Everything since the last call, stamped for the coming frame.
    pub fn take(
        &mut self,
        time: f64,
        screen_size_px: [u32; 2],
        native_pixels_per_point: f32,
    ) -> egui::RawInput {
        self.raw_input.time = Some(time);
        self.raw_input.screen_rect = screen_rect(screen_size_px, self.pixels_per_point);
        if let Some(viewport) = self.raw_input.viewports.get_mut(&egui::ViewportId::ROOT) {
            viewport.native_pixels_per_point = Some(native_pixels_per_point);
        }
        self.raw_input.take()
    }
}

/// The screen in points, or `None` while the drawable has no area (e.g. minimized).
pub(crate) fn screen_rect(
    screen_size_px: [u32; 2],
    pixels_per_point: f32,
) -> Option<egui::Rect> {
    let [width, height] = screen_size_px;
    let size = egui::vec2(width as f32, height as f32) / pixels_per_point;
    (size.x > 0.0 && size.y > 0.0).then(|| egui::Rect::from_min_size(Pos2::ZERO, size))
}

/// Wheel movement in lines.
///
/// `precise_x`/`precise_y` keep the fractional scrolling of touchpads.
/// With natural scrolling SDL reports the direction as flipped.
pub(crate) fn wheel_delta(
    precise_x: f32,
    precise_y: f32,
    direction: MouseWheelDirection,
) -> egui::Vec2 {
    let delta = egui::vec2(precise_x, precise_y);
    if direction == MouseWheelDirection::Flipped {
        -delta
    } else {
        delta
    }
}

/// The text egui wants on the clipboard, if any. The last copy wins.
pub fn copied_text(commands: &[egui::OutputCommand]) -> Option<&str> {
    commands.iter().rev().find_map(|command| match command {
        egui::OutputCommand::CopyText(text) => Some(text.as_str()),
        _ => None,
    })
}
