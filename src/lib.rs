//! # Strata
//!
//! Time-varying scene properties and per-frame material synthesis.
//!
//! The workspace is split by layer; this crate only re-exports them:
//!
//! - [`base`]: errors, simulation time, colors
//! - [`animation`]: the [`Property`] system
//! - [`resources`]: materials, uniform records and the [`MaterialFactory`]
//! - [`scene`]: interval decoding, [`MaterialBinding`]s and particle emitters
//!
//! ```
//! use strata::prelude::*;
//!
//! let mut binding = GridMaterialBinding::new();
//! let data = IntervalData::from_json(r#"{ "grid": { "rowCount": 4, "cellAlpha": 0.25 } }"#)?;
//! binding.apply_interval_data(&data, None)?;
//!
//! let factory = MaterialFactory::default();
//! let material = binding.resolve(&JulianDate::J2000, &factory, None);
//! assert_eq!(material.as_grid().unwrap().uniforms().line_count.x, 4.0);
//! # Ok::<(), strata::StrataError>(())
//! ```

pub use strata_animation as animation;
pub use strata_core as base;
pub use strata_resources as resources;
pub use strata_scene as scene;

pub use strata_animation::{ConstantProperty, Property, TimeIntervalCollectionProperty};
pub use strata_core::{Color, JulianDate, Result, StrataError, TimeInterval};
pub use strata_resources::{Material, MaterialDefaults, MaterialFactory, MaterialKind};
pub use strata_scene::{
    DynamicMaterialProperty, GridMaterialBinding, IntervalData, MaterialBinding, SphereEmitter,
};

pub mod prelude {
    pub use glam::{Vec2, Vec3, Vec4};
    pub use strata_animation::{BoxedProperty, ConstantProperty, Property, PropertyValue, TimeIntervalCollectionProperty};
    pub use strata_core::{Color, JulianDate, Result, StrataError, TimeInterval};
    pub use strata_resources::{Material, MaterialDefaults, MaterialFactory, MaterialKind};
    pub use strata_scene::{
        ColorMaterialBinding, DynamicMaterialProperty, GridMaterialBinding, IntervalData, MaterialBinding, Particle,
        ResolveReport, SlotOutcome, SphereEmitter,
    };
}
