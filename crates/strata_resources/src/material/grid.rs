use glam::Vec2;
use strata_core::color::Color;

use crate::uniform_slot::UniformSlot;
use crate::uniforms::GridUniforms;

/// Grid-lines material.
///
/// Rows live in the `x` lane of `line_count`/`line_thickness`, columns in `y`.
#[derive(Debug, Clone)]
pub struct GridMaterial {
    pub uniforms: UniformSlot<GridUniforms>,
}

impl GridMaterial {
    #[must_use]
    pub fn new(uniforms: GridUniforms) -> Self {
        Self {
            uniforms: UniformSlot::new(uniforms, "GridUniforms"),
        }
    }

    #[inline]
    pub fn uniforms(&self) -> &GridUniforms {
        self.uniforms.get()
    }

    pub fn set_color(&mut self, color: Color) {
        self.uniforms.color = color;
    }

    pub fn set_cell_alpha(&mut self, alpha: f32) {
        self.uniforms.cell_alpha = alpha;
    }

    pub fn set_line_count(&mut self, rows: f32, columns: f32) {
        self.uniforms.line_count = Vec2::new(rows, columns);
    }

    pub fn set_line_thickness(&mut self, rows: f32, columns: f32) {
        self.uniforms.line_thickness = Vec2::new(rows, columns);
    }
}

impl Default for GridMaterial {
    fn default() -> Self {
        Self::new(GridUniforms::default())
    }
}
