//! Value kinds and clone strategies.
//!
//! A property copies its stored value out on every pull. How that copy is made
//! depends on the value's kind:
//!
//! | Kind          | Examples                         | Strategy                          |
//! |---------------|----------------------------------|-----------------------------------|
//! | `Primitive`   | `f64`, `bool`, `String`          | passthrough (plain copy)          |
//! | `Enumeration` | fieldless enums                  | passthrough                       |
//! | `Sequence`    | `Arc<[T]>`                       | passthrough (shares the storage)  |
//! | `Composite`   | `Color`, `Vec2`, user structs    | the value's own clone, or a supplied [`CloneFn`] |
//!
//! The kind is an associated constant, so the choice is made per type at
//! compile time and the per-frame pull is a single function-pointer call.

use std::fmt;
use std::sync::Arc;

use glam::{Vec2, Vec3, Vec4};
use strata_core::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Primitive,
    Enumeration,
    Sequence,
    Composite,
}

impl ValueKind {
    /// Primitive, enumeration and sequence values are treated as immutable, so
    /// handing out a copy of the handle is always safe.
    #[must_use]
    pub fn is_passthrough(self) -> bool {
        !matches!(self, ValueKind::Composite)
    }
}

/// A clone operation as a pair of plain function pointers.
///
/// `fresh` produces a new instance; `write` copies into an existing one and may
/// reuse its storage.
pub struct CloneFn<T> {
    fresh: fn(&T) -> T,
    write: fn(&T, &mut T),
}

impl<T> CloneFn<T> {
    #[must_use]
    pub const fn new(fresh: fn(&T) -> T, write: fn(&T, &mut T)) -> Self {
        Self { fresh, write }
    }

    #[inline]
    pub fn fresh(&self, value: &T) -> T {
        (self.fresh)(value)
    }

    #[inline]
    pub fn write(&self, value: &T, result: &mut T) {
        (self.write)(value, result);
    }
}

impl<T: Clone> CloneFn<T> {
    /// Uses `Clone::clone` and `Clone::clone_from`.
    #[must_use]
    pub fn from_clone() -> Self {
        Self::new(clone_value::<T>, clone_value_into::<T>)
    }
}

fn clone_value<T: Clone>(value: &T) -> T {
    value.clone()
}

fn clone_value_into<T: Clone>(value: &T, result: &mut T) {
    result.clone_from(value);
}

impl<T> Clone for CloneFn<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CloneFn<T> {}

impl<T> fmt::Debug for CloneFn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CloneFn")
    }
}

/// A type that can be stored in a property.
pub trait PropertyValue: fmt::Debug + Sized + 'static {
    const KIND: ValueKind;

    /// The clone operation the type provides itself.
    ///
    /// Passthrough kinds must return `Some`; [`ConstantProperty`] asserts it.
    /// Composite types that cannot copy themselves return `None` and then need
    /// a [`CloneFn`] at construction.
    ///
    /// [`ConstantProperty`]: crate::constant::ConstantProperty
    fn own_clone() -> Option<CloneFn<Self>>;
}

/// Implements [`PropertyValue`] for `Clone` types.
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Copy)]
/// enum LabelStyle { Fill, Outline }
///
/// strata_animation::impl_property_value!(LabelStyle => Enumeration);
/// ```
#[macro_export]
macro_rules! impl_property_value {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl $crate::values::PropertyValue for $ty {
                const KIND: $crate::values::ValueKind = $crate::values::ValueKind::$kind;

                fn own_clone() -> Option<$crate::values::CloneFn<Self>> {
                    Some($crate::values::CloneFn::from_clone())
                }
            }
        )*
    };
}

impl_property_value!(
    bool => Primitive,
    i32 => Primitive,
    u32 => Primitive,
    f32 => Primitive,
    f64 => Primitive,
    String => Primitive,
    Arc<str> => Primitive,
    Color => Composite,
    Vec2 => Composite,
    Vec3 => Composite,
    Vec4 => Composite,
);

impl<T: fmt::Debug + 'static> PropertyValue for Arc<[T]> {
    const KIND: ValueKind = ValueKind::Sequence;

    fn own_clone() -> Option<CloneFn<Self>> {
        Some(CloneFn::from_clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_kinds_provide_their_own_clone() {
        assert!(<f64 as PropertyValue>::own_clone().is_some());
        assert!(<String as PropertyValue>::own_clone().is_some());
        assert!(<Arc<[u32]> as PropertyValue>::own_clone().is_some());
        assert!(f64::KIND.is_passthrough());
        assert!(!Color::KIND.is_passthrough());
    }

    #[test]
    fn sequence_clone_shares_storage() {
        let seq: Arc<[u32]> = Arc::from(vec![1, 2, 3]);
        let clone = CloneFn::<Arc<[u32]>>::from_clone();
        let copy = clone.fresh(&seq);
        assert!(Arc::ptr_eq(&seq, &copy));
    }

    #[test]
    fn write_reuses_destination() {
        let clone = CloneFn::<String>::from_clone();
        let mut dst = String::with_capacity(64);
        let capacity = dst.capacity();
        clone.write(&"grid".to_string(), &mut dst);
        assert_eq!(dst, "grid");
        assert_eq!(dst.capacity(), capacity);
    }
}
