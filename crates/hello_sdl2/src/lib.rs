//! A window with a label in it, drawn with egui on SDL2 + OpenGL.

/// Title of the egui window inside the OS window.
pub const WINDOW_TITLE: &str = "Hello, SDL2 + egui";

pub const GREETING: &str = "This is egui running with SDL2 and OpenGL in Rust.";

/// Build this frame's UI.
///
/// The content is static, so every frame emits the same shapes.
pub fn hello_ui(ctx: &egui::Context) {
    egui::Window::new(WINDOW_TITLE).show(ctx, |ui| {
        ui.label(GREETING);
    });
}
