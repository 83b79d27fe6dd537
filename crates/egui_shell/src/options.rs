/// The OpenGL profile to request from the windowing layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlProfile {
    #[default]
    Core,
    Compatibility,
    GlEs,
}

/// Options controlling the window and graphics context.
///
/// Negotiated once, before the window is created.
///
/// ```
/// let options = egui_shell::ShellOptions {
///     title: "My shell".to_owned(),
///     inner_size: [1024, 768],
///     ..Default::default()
/// };
/// assert_eq!(options.gl_version, (2, 1));
/// ```
#[derive(Clone, Debug)]
pub struct ShellOptions {
    /// Window title.
    pub title: String,

    /// Size of the window's client area, in logical pixels.
    pub inner_size: [u32; 2],

    /// `(major, minor)` OpenGL version to request.
    pub gl_version: (u8, u8),

    pub gl_profile: GlProfile,

    pub resizable: bool,

    /// Try to sync buffer swaps to the display refresh.
    ///
    /// If the driver refuses, we log a warning and run unsynced.
    pub vsync: bool,

    /// The color the viewport is cleared to before egui paints, in linear RGBA.
    pub clear_color: [f32; 4],

    /// GLSL version used by the painter. `None` means auto-detect.
    #[cfg(feature = "sdl2")]
    pub shader_version: Option<egui_glow::ShaderVersion>,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            title: "Hello, SDL2 + egui".to_owned(),
            inner_size: [800, 600],
            gl_version: (2, 1),
            gl_profile: GlProfile::Core,
            resizable: true,
            vsync: true,
            clear_color: [0.1, 0.1, 0.1, 1.0],

            #[cfg(feature = "sdl2")]
            shader_version: None,
        }
    }
}
