//! Renderer-facing material resources.
//!
//! Materials here are plain CPU-side data: a Pod uniform record per material
//! kind, wrapped in a [`UniformSlot`] that carries the buffer identity and a
//! dirty version for whoever uploads it.
//!
//! New materials come from a [`MaterialFactory`], configured through
//! [`MaterialDefaults`].

pub mod factory;
pub mod material;
pub mod uniform_slot;
pub mod uniforms;

pub use factory::{MaterialDefaults, MaterialFactory};
pub use material::{ColorMaterial, GridMaterial, Material, MaterialData, MaterialKind};
pub use uniform_slot::UniformSlot;
pub use uniforms::{ColorUniforms, GridUniforms};
