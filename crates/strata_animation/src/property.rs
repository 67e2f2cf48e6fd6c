use std::any::Any;
use std::fmt;

use strata_core::time::JulianDate;

/// A value source sampled by simulation time.
///
/// Two pull operations share the contract:
/// - [`get_value`](Property::get_value) allocates and returns a new instance
/// - [`get_value_into`](Property::get_value_into) writes into a caller-owned
///   destination, reusing its storage where the value type allows it
///
/// Both return "no value" (`None` / `false`) when the property is undefined at
/// `time`; that is a valid outcome, not an error. Neither may mutate the value
/// the property stores.
pub trait Property: fmt::Debug + Any {
    type Value;

    /// Fixed for the lifetime of the property.
    fn is_time_varying(&self) -> bool;

    fn get_value(&self, time: &JulianDate) -> Option<Self::Value>;

    /// Returns `true` if `result` was written.
    fn get_value_into(&self, time: &JulianDate, result: &mut Self::Value) -> bool;

    /// Downcast support (used by the packet decoder to extend interval collections).
    fn as_any(&self) -> &dyn Any;

    /// Downcast support (mutable).
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Owned, type-erased property slot.
pub type BoxedProperty<T> = Box<dyn Property<Value = T>>;
