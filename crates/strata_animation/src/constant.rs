use std::any::Any;

use strata_core::errors::{Result, StrataError};
use strata_core::time::JulianDate;

use crate::property::Property;
use crate::values::{CloneFn, PropertyValue, ValueKind};

/// A [`Property`] whose value never changes.
///
/// The clone strategy is picked once here, so [`get_value`](Property::get_value)
/// is a direct call with no branching on the value's kind.
#[derive(Debug)]
pub struct ConstantProperty<T: PropertyValue> {
    value: T,
    clone: CloneFn<T>,
}

impl<T: PropertyValue> ConstantProperty<T> {
    /// Creates a constant property using the value's own clone operation.
    ///
    /// Fails with [`StrataError::InvalidArgument`] if `value` is `None`, or if
    /// `T` is a composite type that provides no clone operation.
    pub fn new(value: impl Into<Option<T>>) -> Result<Self> {
        Self::with_clone(value, None)
    }

    /// Like [`new`](Self::new), but an explicit `clone` takes precedence over
    /// the value's own.
    pub fn with_clone(value: impl Into<Option<T>>, clone: Option<CloneFn<T>>) -> Result<Self> {
        let Some(value) = value.into() else {
            return Err(StrataError::InvalidArgument("value is required.".into()));
        };

        let own = T::own_clone();
        debug_assert!(
            !T::KIND.is_passthrough() || own.is_some(),
            "{:?} values must provide their own clone",
            T::KIND
        );

        let clone = clone.or(own).ok_or_else(|| {
            StrataError::InvalidArgument("clone is a required function.".into())
        })?;

        Ok(Self { value, clone })
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        T::KIND
    }

    /// Borrows the stored value without copying it.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// A second property holding a copy of this one's value.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            value: self.clone.fresh(&self.value),
            clone: self.clone,
        }
    }
}

impl<T: PropertyValue> Property for ConstantProperty<T> {
    type Value = T;

    fn is_time_varying(&self) -> bool {
        false
    }

    #[inline]
    fn get_value(&self, _time: &JulianDate) -> Option<T> {
        Some(self.clone.fresh(&self.value))
    }

    #[inline]
    fn get_value_into(&self, _time: &JulianDate, result: &mut T) -> bool {
        self.clone.write(&self.value, result);
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Opaque(u32);

    impl PropertyValue for Opaque {
        const KIND: ValueKind = ValueKind::Composite;

        fn own_clone() -> Option<CloneFn<Self>> {
            None
        }
    }

    #[derive(Debug)]
    struct BrokenPrimitive;

    impl PropertyValue for BrokenPrimitive {
        const KIND: ValueKind = ValueKind::Primitive;

        fn own_clone() -> Option<CloneFn<Self>> {
            None
        }
    }

    #[test]
    fn missing_value_is_rejected() {
        let err = ConstantProperty::<f64>::new(None).unwrap_err();
        assert!(matches!(err, StrataError::InvalidArgument(_)));
    }

    #[test]
    fn composite_without_clone_is_rejected() {
        let err = ConstantProperty::<Opaque>::new(Opaque(1)).unwrap_err();
        assert!(matches!(err, StrataError::InvalidArgument(ref msg) if msg.contains("clone")));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Primitive values must provide their own clone")]
    fn passthrough_kind_without_own_clone_is_a_contract_violation() {
        let _ = ConstantProperty::new(BrokenPrimitive);
    }

    #[test]
    fn supplied_clone_rescues_composite() {
        let clone = CloneFn::new(|v: &Opaque| Opaque(v.0), |v: &Opaque, r: &mut Opaque| r.0 = v.0);
        let property = ConstantProperty::with_clone(Opaque(7), Some(clone)).unwrap();

        let mut dst = Opaque(0);
        assert!(property.get_value_into(&JulianDate::J2000, &mut dst));
        assert_eq!(dst, Opaque(7));
        assert_eq!(property.value(), &Opaque(7));
    }

    #[test]
    fn duplicate_copies_value() {
        let property = ConstantProperty::<String>::new(String::from("grid")).unwrap();
        let copy = property.duplicate();
        assert_eq!(copy.value(), "grid");
        assert_ne!(copy.value().as_ptr(), property.value().as_ptr());
    }
}
