use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};
use strata_core::color::Color;
use strata_core::errors::Result;

use crate::material::{ColorMaterial, GridMaterial, Material, MaterialKind};
use crate::uniforms::GridUniforms;

/// Initial uniform values for newly created materials.
///
/// Every field is optional in the serialized form; missing fields keep their
/// built-in default.
///
/// ```
/// use strata_resources::MaterialDefaults;
///
/// let defaults = MaterialDefaults::from_json(r#"{ "gridCellAlpha": 0.25 }"#).unwrap();
/// assert_eq!(defaults.grid_cell_alpha, 0.25);
/// assert_eq!(defaults.grid_line_count, [8.0, 8.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaterialDefaults {
    pub grid_color: Color,
    pub grid_cell_alpha: f32,
    /// `[rows, columns]`
    pub grid_line_count: [f32; 2],
    /// `[rows, columns]`
    pub grid_line_thickness: [f32; 2],
    pub solid_color: Color,
}

impl Default for MaterialDefaults {
    fn default() -> Self {
        let grid = GridUniforms::default();
        Self {
            grid_color: grid.color,
            grid_cell_alpha: grid.cell_alpha,
            grid_line_count: grid.line_count.to_array(),
            grid_line_thickness: grid.line_thickness.to_array(),
            solid_color: Color::WHITE,
        }
    }
}

impl MaterialDefaults {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn grid_uniforms(&self) -> GridUniforms {
        GridUniforms {
            color: self.grid_color,
            cell_alpha: self.grid_cell_alpha,
            line_count: Vec2::from_array(self.grid_line_count),
            line_thickness: Vec2::from_array(self.grid_line_thickness),
            ..GridUniforms::default()
        }
    }
}

/// Creates materials by kind, seeded from [`MaterialDefaults`].
#[derive(Debug, Clone, Default)]
pub struct MaterialFactory {
    defaults: MaterialDefaults,
}

impl MaterialFactory {
    #[must_use]
    pub fn new(defaults: MaterialDefaults) -> Self {
        Self { defaults }
    }

    #[must_use]
    pub fn defaults(&self) -> &MaterialDefaults {
        &self.defaults
    }

    #[must_use]
    pub fn create(&self, kind: MaterialKind) -> Material {
        debug!("Creating {kind} material");
        match kind {
            MaterialKind::Grid => GridMaterial::new(self.defaults.grid_uniforms()).into(),
            MaterialKind::Color => ColorMaterial::new(self.defaults.solid_color).into(),
        }
    }

    /// Creates a material from its type name (`"Grid"`, `"Color"`).
    pub fn create_by_name(&self, type_name: &str) -> Result<Material> {
        Ok(self.create(type_name.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::errors::StrataError;

    #[test]
    fn default_factory_matches_uniform_defaults() {
        let material = MaterialFactory::default().create(MaterialKind::Grid);
        assert_eq!(material.as_grid().unwrap().uniforms(), &GridUniforms::default());
        assert_eq!(material.uniform_version(), 0);
    }

    #[test]
    fn configured_defaults_seed_new_materials() {
        let defaults = MaterialDefaults::from_json(
            r#"{
                "gridColor": { "r": 0.0, "g": 1.0, "b": 0.0, "a": 1.0 },
                "gridLineCount": [4.0, 2.0],
                "solidColor": { "r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0 }
            }"#,
        )
        .unwrap();
        let factory = MaterialFactory::new(defaults);

        let grid = factory.create(MaterialKind::Grid);
        let uniforms = grid.as_grid().unwrap().uniforms();
        assert_eq!(uniforms.color, Color::GREEN);
        assert_eq!(uniforms.line_count, Vec2::new(4.0, 2.0));
        assert_eq!(uniforms.line_thickness, Vec2::ONE);

        let solid = factory.create(MaterialKind::Color);
        assert_eq!(solid.as_color().unwrap().color(), Color::RED);
    }

    #[test]
    fn malformed_config_is_a_json_error() {
        let err = MaterialDefaults::from_json(r#"{ "gridCellAlpha": "opaque" }"#).unwrap_err();
        assert!(matches!(err, StrataError::JsonError(_)));
    }

    #[test]
    fn create_by_name_rejects_unknown_types() {
        let factory = MaterialFactory::default();
        assert_eq!(factory.create_by_name("Color").unwrap().kind(), MaterialKind::Color);
        assert!(matches!(
            factory.create_by_name("Stripe"),
            Err(StrataError::UnknownMaterialType(_))
        ));
    }
}
