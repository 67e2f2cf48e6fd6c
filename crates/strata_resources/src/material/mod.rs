mod color;
mod grid;

pub use color::ColorMaterial;
pub use grid::GridMaterial;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use strata_core::errors::StrataError;
use uuid::Uuid;

// ============================================================================
// Material kinds
// ============================================================================

/// Material type tag.
///
/// Bindings compare tags to decide whether an existing material can be
/// rewritten in place or has to be replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    Color,
    Grid,
}

impl MaterialKind {
    #[must_use]
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Color => "Color",
            Self::Grid => "Grid",
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl FromStr for MaterialKind {
    type Err = StrataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Color" => Ok(Self::Color),
            "Grid" => Ok(Self::Grid),
            other => Err(StrataError::UnknownMaterialType(other.to_string())),
        }
    }
}

// ============================================================================
// Material data enum
// ============================================================================

#[derive(Debug, Clone)]
pub enum MaterialData {
    Color(ColorMaterial),
    Grid(GridMaterial),
}

impl MaterialData {
    #[must_use]
    pub fn kind(&self) -> MaterialKind {
        match self {
            Self::Color(_) => MaterialKind::Color,
            Self::Grid(_) => MaterialKind::Grid,
        }
    }

    #[must_use]
    pub fn uniform_bytes(&self) -> &[u8] {
        match self {
            Self::Color(m) => m.uniforms.as_bytes(),
            Self::Grid(m) => m.uniforms.as_bytes(),
        }
    }

    #[must_use]
    pub fn uniform_version(&self) -> u64 {
        match self {
            Self::Color(m) => m.uniforms.version(),
            Self::Grid(m) => m.uniforms.version(),
        }
    }

    #[must_use]
    pub fn uniform_id(&self) -> u64 {
        match self {
            Self::Color(m) => m.uniforms.id(),
            Self::Grid(m) => m.uniforms.id(),
        }
    }
}

// ============================================================================
// Material wrapper
// ============================================================================

#[derive(Debug, Clone)]
pub struct Material {
    pub uuid: Uuid,
    pub name: Option<Cow<'static, str>>,
    pub data: MaterialData,
}

impl Material {
    #[must_use]
    pub fn new(data: MaterialData) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: None,
            data,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> MaterialKind {
        self.data.kind()
    }

    #[must_use]
    pub fn uniform_bytes(&self) -> &[u8] {
        self.data.uniform_bytes()
    }

    #[must_use]
    pub fn uniform_version(&self) -> u64 {
        self.data.uniform_version()
    }

    /// Identity of the uniform record; stable across in-place rewrites.
    #[must_use]
    pub fn uniform_id(&self) -> u64 {
        self.data.uniform_id()
    }

    pub fn as_grid(&self) -> Option<&GridMaterial> {
        match &self.data {
            MaterialData::Grid(m) => Some(m),
            MaterialData::Color(_) => None,
        }
    }

    pub fn as_grid_mut(&mut self) -> Option<&mut GridMaterial> {
        match &mut self.data {
            MaterialData::Grid(m) => Some(m),
            MaterialData::Color(_) => None,
        }
    }

    pub fn as_color(&self) -> Option<&ColorMaterial> {
        match &self.data {
            MaterialData::Color(m) => Some(m),
            MaterialData::Grid(_) => None,
        }
    }

    pub fn as_color_mut(&mut self) -> Option<&mut ColorMaterial> {
        match &mut self.data {
            MaterialData::Color(m) => Some(m),
            MaterialData::Grid(_) => None,
        }
    }
}

impl From<GridMaterial> for Material {
    fn from(material: GridMaterial) -> Self {
        Self::new(MaterialData::Grid(material))
    }
}

impl From<ColorMaterial> for Material {
    fn from(material: ColorMaterial) -> Self {
        Self::new(MaterialData::Color(material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_type_names() {
        assert_eq!("Grid".parse::<MaterialKind>().unwrap(), MaterialKind::Grid);
        assert_eq!(MaterialKind::Color.to_string(), "Color");

        let err = "Checkerboard".parse::<MaterialKind>().unwrap_err();
        assert!(matches!(err, StrataError::UnknownMaterialType(ref name) if name == "Checkerboard"));
    }

    #[test]
    fn accessors_follow_variant() {
        let mut material = Material::from(GridMaterial::default());
        assert_eq!(material.kind(), MaterialKind::Grid);
        assert!(material.as_grid().is_some());
        assert!(material.as_color().is_none());
        assert!(material.as_color_mut().is_none());
        assert_eq!(material.data.kind(), MaterialKind::Grid);
    }

    #[test]
    fn cloned_material_gets_its_own_uniform_identity() {
        let material = Material::from(ColorMaterial::default()).with_name("sky");
        let copy = material.clone();
        assert_ne!(material.uniform_id(), copy.uniform_id());
        assert_eq!(copy.name.as_deref(), Some("sky"));
    }
}
