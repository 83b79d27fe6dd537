use egui::epaint::{ClippedPrimitive, Primitive};

/// Everything a [`crate::RenderAdapter`] needs to paint one frame.
pub struct DrawData {
    /// Tessellated meshes, each with its clip rectangle and texture.
    pub clipped_primitives: Vec<ClippedPrimitive>,

    /// Textures to upload before painting, and textures to free after.
    pub textures_delta: egui::TexturesDelta,

    pub pixels_per_point: f32,

    /// Size of the framebuffer, in physical pixels.
    pub screen_size_px: [u32; 2],
}

impl DrawData {
    pub fn stats(&self) -> DrawStats {
        let mut stats = DrawStats {
            batches: self.clipped_primitives.len(),
            ..Default::default()
        };
        for ClippedPrimitive { primitive, .. } in &self.clipped_primitives {
            match primitive {
                Primitive::Mesh(mesh) => {
                    stats.vertices += mesh.vertices.len();
                    stats.indices += mesh.indices.len();
                }
                Primitive::Callback(_) => {
                    stats.callbacks += 1;
                }
            }
        }
        stats
    }
}

/// Size of the draw data of one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub vertices: usize,
    pub indices: usize,

    /// Number of clipped primitives, i.e. draw calls.
    pub batches: usize,

    /// How many of the batches are paint callbacks rather than meshes.
    pub callbacks: usize,
}

impl std::fmt::Display for DrawStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            vertices,
            indices,
            batches,
            callbacks,
        } = self;
        write!(
            f,
            "{batches} batches ({callbacks} callbacks), {vertices} vertices, {indices} indices"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::epaint::{Mesh, Vertex};
    use egui::{Color32, Pos2, Rect, TextureId};

    fn quad(texture_id: TextureId) -> ClippedPrimitive {
        let mut mesh = Mesh::with_texture(texture_id);
        mesh.add_rect_with_uv(
            Rect::from_min_max(Pos2::ZERO, Pos2::new(10.0, 10.0)),
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
        ClippedPrimitive {
            clip_rect: Rect::EVERYTHING,
            primitive: Primitive::Mesh(mesh),
        }
    }

    #[test]
    fn empty_frame_has_no_batches() {
        let draw_data = DrawData {
            clipped_primitives: vec![],
            textures_delta: Default::default(),
            pixels_per_point: 1.0,
            screen_size_px: [800, 600],
        };
        assert_eq!(draw_data.stats(), DrawStats::default());
    }

    #[test]
    fn stats_sum_over_batches() {
        let mut triangle = Mesh::default();
        for x in [0.0, 1.0, 2.0] {
            triangle.vertices.push(Vertex {
                pos: Pos2::new(x, 0.0),
                uv: Pos2::ZERO,
                color: Color32::RED,
            });
        }
        triangle.indices.extend([0, 1, 2]);

        let draw_data = DrawData {
            clipped_primitives: vec![
                quad(TextureId::default()),
                quad(TextureId::User(1)),
                ClippedPrimitive {
                    clip_rect: Rect::EVERYTHING,
                    primitive: Primitive::Mesh(triangle),
                },
            ],
            textures_delta: Default::default(),
            pixels_per_point: 2.0,
            screen_size_px: [1600, 1200],
        };

        let stats = draw_data.stats();
        assert_eq!(
            stats,
            DrawStats {
                vertices: 4 + 4 + 3,
                indices: 6 + 6 + 3,
                batches: 3,
                callbacks: 0,
            }
        );
        assert_eq!(
            stats.to_string(),
            "3 batches (0 callbacks), 11 vertices, 15 indices"
        );
    }
}
