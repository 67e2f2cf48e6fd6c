use glam::Vec2;

use strata_core::color::Color;

// ============================================================================
// Record definition macro
// ============================================================================

/// Declares a `#[repr(C)]` Pod uniform record whose `Default` comes from the
/// field initializers. Fields without an initializer use their own `Default`.
macro_rules! define_uniform_struct {
    (
        $(#[$meta:meta])* struct $name:ident {
            $(
                $vis:vis $field_name:ident : $field_type:ty $(= $default_val:expr)?
            ),* $(,)?
        }
    ) => {
        #[repr(C)]
        #[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
        $(#[$meta])*
        pub struct $name {
            $( $vis $field_name : $field_type, )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field_name: define_uniform_struct!(@val_or_default $field_type $(, $default_val)?), )*
                }
            }
        }
    };

    (@val_or_default $type:ty, $val:expr) => { $val };
    (@val_or_default $type:ty) => { <$type as Default>::default() };
}

// ============================================================================
// Material records
// ============================================================================

define_uniform_struct!(
    /// Solid color material.
    struct ColorUniforms {
        pub color: Color = Color::WHITE,
    }
);

define_uniform_struct!(
    /// Grid material.
    ///
    /// `line_count` and `line_thickness` pack the row value in `x` and the
    /// column value in `y`.
    struct GridUniforms {
        pub color: Color = Color::WHITE,                 // 16
        pub line_count: Vec2 = Vec2::new(8.0, 8.0),      // 8
        pub line_thickness: Vec2 = Vec2::ONE,            // 8
        pub cell_alpha: f32 = 0.1,                       // 4
        pub(crate) __padding: [f32; 3],                  // 12 (4+12=16)
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_alignment() {
        assert_eq!(mem::size_of::<GridUniforms>() % 16, 0, "Grid Uniforms not aligned to 16 bytes");
        assert_eq!(mem::size_of::<ColorUniforms>() % 16, 0, "Color Uniforms not aligned to 16 bytes");
    }

    #[test]
    fn test_grid_defaults() {
        let grid = GridUniforms::default();
        assert_eq!(grid.color, Color::WHITE);
        assert_eq!(grid.line_count, Vec2::new(8.0, 8.0));
        assert_eq!(grid.line_thickness, Vec2::ONE);
        assert!((grid.cell_alpha - 0.1).abs() < f32::EPSILON);
        assert_eq!(grid.__padding, [0.0; 3]);
    }
}
