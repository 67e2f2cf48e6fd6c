//! Property system: values that are constant or vary over simulation time.
//!
//! Every value source implements [`Property`], so consumers can hold
//! `Box<dyn Property<Value = T>>` without caring whether the value changes.
//!
//! - [`ConstantProperty`]: never changes; `is_time_varying()` is `false`
//! - [`TimeIntervalCollectionProperty`]: piecewise-constant over time intervals,
//!   undefined (`None`) outside all of them
//!
//! How a value is copied out of a property is decided once at construction
//! from its [`ValueKind`], see [`values`].

pub mod constant;
pub mod interval;
pub mod property;
pub mod values;

pub use constant::ConstantProperty;
pub use interval::TimeIntervalCollectionProperty;
pub use property::{BoxedProperty, Property};
pub use values::{CloneFn, PropertyValue, ValueKind};
