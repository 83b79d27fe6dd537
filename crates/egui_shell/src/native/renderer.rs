use std::sync::Arc;

use egui_glow::glow;

use crate::{DrawData, RenderAdapter, SetupError};

/// Paints egui draw data with [`egui_glow::Painter`].
///
/// The GPU resources (shader program, buffers, textures) are released on drop,
/// so this must be dropped while the GL context is still alive.
pub struct GlowRenderer {
    painter: egui_glow::Painter,
    clear_color: [f32; 4],
}

impl GlowRenderer {
    /// For automatic shader version detection set `shader_version` to `None`.
    ///
    /// `gl` comes from [`super::GlWindow::load_gl`], so the context exists and is current.
    ///
    /// # Errors
    /// [`SetupError::Painter`] if the shaders fail to compile or link.
    pub fn new(
        gl: Arc<glow::Context>,
        shader_version: Option<egui_glow::ShaderVersion>,
        clear_color: [f32; 4],
    ) -> Result<Self, SetupError> {
        let painter = egui_glow::Painter::new(gl, "", shader_version, false)
            .map_err(|err| SetupError::Painter(err.to_string()))?;
        log::debug!("Max texture side: {}", painter.max_texture_side());

        Ok(Self {
            painter,
            clear_color,
        })
    }

    pub fn max_texture_side(&self) -> usize {
        self.painter.max_texture_side()
    }
}

impl RenderAdapter for GlowRenderer {
    fn begin_frame(&mut self, screen_size_px: [u32; 2]) {
        egui_glow::painter::clear(self.painter.gl(), screen_size_px, self.clear_color);
    }

    fn render(&mut self, draw_data: &DrawData) {
        self.painter.paint_and_update_textures(
            draw_data.screen_size_px,
            draw_data.pixels_per_point,
            &draw_data.clipped_primitives,
            &draw_data.textures_delta,
        );
    }
}

impl Drop for GlowRenderer {
    fn drop(&mut self) {
        log::trace!("Destroying the painter");
        self.painter.destroy();
    }
}
