use strata_core::color::Color;

use crate::uniform_slot::UniformSlot;
use crate::uniforms::ColorUniforms;

/// Solid color material.
#[derive(Debug, Clone)]
pub struct ColorMaterial {
    pub uniforms: UniformSlot<ColorUniforms>,
}

impl ColorMaterial {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            uniforms: UniformSlot::new(ColorUniforms { color }, "ColorUniforms"),
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.uniforms.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.uniforms.color = color;
    }
}

impl Default for ColorMaterial {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}
