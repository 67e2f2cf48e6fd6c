//! Foundational types shared by every Strata crate.
//!
//! - [`errors`]: the [`StrataError`] taxonomy and [`Result`] alias
//! - [`time`]: [`JulianDate`] simulation time and [`TimeInterval`]
//! - [`color`]: the GPU-ready RGBA [`Color`]

pub mod color;
pub mod errors;
pub mod time;

pub use color::Color;
pub use errors::{Result, StrataError};
pub use time::{JulianDate, TimeInterval};
