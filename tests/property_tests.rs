//! Property System Tests
//!
//! Tests for:
//! - ConstantProperty passthrough and composite clone strategies
//! - In-place pulls through get_value_into
//! - Construction failures (missing value, missing clone)
//! - TimeIntervalCollectionProperty lookup and override semantics

use std::sync::Arc;

use glam::Vec3;

use strata::animation::{CloneFn, ConstantProperty, Property, PropertyValue, TimeIntervalCollectionProperty, ValueKind};
use strata::{Color, JulianDate, StrataError, TimeInterval};

const EPSILON: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn at(seconds: f64) -> JulianDate {
    JulianDate::from_seconds_since_j2000(seconds)
}

fn sample_times() -> [JulianDate; 4] {
    [JulianDate::J2000, at(-1.0e6), at(0.5), at(3.0e8)]
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Pattern {
    Solid,
    Dashed,
}

strata::animation::impl_property_value!(Pattern => Enumeration);

/// Composite without a clone of its own.
#[derive(Debug, PartialEq)]
struct Polyline {
    points: Vec<Vec3>,
}

impl PropertyValue for Polyline {
    const KIND: ValueKind = ValueKind::Composite;

    fn own_clone() -> Option<CloneFn<Self>> {
        None
    }
}

fn polyline_clone() -> CloneFn<Polyline> {
    CloneFn::new(
        |v| Polyline { points: v.points.clone() },
        |v, r| r.points.clone_from(&v.points),
    )
}

// ============================================================================
// ConstantProperty: passthrough kinds
// ============================================================================

#[test]
fn constant_primitive_is_identity_at_every_time() {
    let property = ConstantProperty::new(42.5_f64).unwrap();
    for time in sample_times() {
        let value = property.get_value(&time).unwrap();
        assert!(approx(value, 42.5), "Expected 42.5, got {value}");
    }
}

#[test]
fn constant_string_and_enumeration() {
    let label = ConstantProperty::new(String::from("grid")).unwrap();
    let pattern = ConstantProperty::new(Pattern::Dashed).unwrap();
    for time in sample_times() {
        assert_eq!(label.get_value(&time).as_deref(), Some("grid"));
        assert_eq!(pattern.get_value(&time), Some(Pattern::Dashed));
    }
    assert_ne!(pattern.get_value(&JulianDate::J2000), Some(Pattern::Solid));
}

#[test]
fn constant_sequence_shares_storage() {
    let points: Arc<[f64]> = Arc::from(vec![1.0, 2.0, 3.0]);
    let property = ConstantProperty::new(Arc::clone(&points)).unwrap();
    assert_eq!(property.kind(), ValueKind::Sequence);

    let value = property.get_value(&at(10.0)).unwrap();
    assert!(Arc::ptr_eq(&points, &value));
}

#[test]
fn constant_is_never_time_varying() {
    let scalar = ConstantProperty::new(1.0_f64).unwrap();
    let color = ConstantProperty::new(Color::RED).unwrap();
    for _ in 0..3 {
        assert!(!scalar.is_time_varying());
        assert!(!color.is_time_varying());
    }
}

// ============================================================================
// ConstantProperty: composite kinds
// ============================================================================

#[test]
fn constant_composite_returns_equal_copy() {
    let property = ConstantProperty::new(Color::new(0.2, 0.4, 0.6, 1.0)).unwrap();
    assert_eq!(property.kind(), ValueKind::Composite);
    assert_eq!(property.get_value(&JulianDate::J2000), Some(Color::new(0.2, 0.4, 0.6, 1.0)));
}

#[test]
fn constant_composite_copy_is_distinct_storage() {
    let line = Polyline {
        points: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
    };
    let property = ConstantProperty::with_clone(line, Some(polyline_clone())).unwrap();

    let copy = property.get_value(&JulianDate::J2000).unwrap();
    assert_eq!(&copy, property.value());
    assert_ne!(copy.points.as_ptr(), property.value().points.as_ptr());
}

#[test]
fn constant_composite_writes_into_result() {
    let property = ConstantProperty::with_clone(
        Polyline {
            points: vec![Vec3::ONE; 2],
        },
        Some(polyline_clone()),
    )
    .unwrap();

    let mut result = Polyline {
        points: Vec::with_capacity(16),
    };
    let buffer = result.points.as_ptr();

    assert!(property.get_value_into(&at(99.0), &mut result));
    assert_eq!(result.points, vec![Vec3::ONE; 2]);
    // Storage of the caller's record is reused.
    assert_eq!(result.points.as_ptr(), buffer);
}

#[test]
fn constant_color_writes_into_result() {
    let property = ConstantProperty::new(Color::GREEN).unwrap();
    let mut result = Color::BLACK;
    assert!(property.get_value_into(&JulianDate::J2000, &mut result));
    assert_eq!(result, Color::GREEN);
}

// ============================================================================
// ConstantProperty: construction failures
// ============================================================================

#[test]
fn constant_without_value_fails() {
    let err = ConstantProperty::<f64>::new(None).unwrap_err();
    assert!(matches!(err, StrataError::InvalidArgument(ref msg) if msg == "value is required."));
}

#[test]
fn constant_composite_without_clone_fails() {
    let err = ConstantProperty::new(Polyline { points: Vec::new() }).unwrap_err();
    assert!(matches!(err, StrataError::InvalidArgument(ref msg) if msg == "clone is a required function."));
}

// ============================================================================
// TimeIntervalCollectionProperty
// ============================================================================

#[test]
fn interval_collection_is_time_varying_and_absent_outside() {
    let mut property = TimeIntervalCollectionProperty::<f64>::new();
    property.add_interval(TimeInterval::closed(at(0.0), at(10.0)), 4.0).unwrap();

    assert!(property.is_time_varying());
    assert_eq!(property.get_value(&at(5.0)), Some(4.0));
    assert_eq!(property.get_value(&at(10.5)), None);

    let mut result = -1.0;
    assert!(!property.get_value_into(&at(-3.0), &mut result));
    assert!(approx(result, -1.0), "Result must be left untouched, got {result}");
}

#[test]
fn interval_collection_later_interval_overrides_overlap() {
    let mut property = TimeIntervalCollectionProperty::<f64>::new();
    property.add_interval(TimeInterval::closed(at(0.0), at(100.0)), 1.0).unwrap();
    property.add_interval(TimeInterval::closed(at(40.0), at(60.0)), 2.0).unwrap();

    assert_eq!(property.len(), 3);
    assert_eq!(property.get_value(&at(20.0)), Some(1.0));
    assert_eq!(property.get_value(&at(40.0)), Some(2.0));
    assert_eq!(property.get_value(&at(60.0)), Some(2.0));
    assert_eq!(property.get_value(&at(80.0)), Some(1.0));

    let starts: Vec<JulianDate> = property.intervals().map(|i| i.start).collect();
    assert!(starts.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn interval_collection_rejects_missing_value() {
    let mut property = TimeIntervalCollectionProperty::<Color>::new();
    let err = property
        .add_interval(TimeInterval::closed(at(0.0), at(1.0)), None)
        .unwrap_err();
    assert!(matches!(err, StrataError::InvalidArgument(_)));
    assert!(property.is_empty());
}

#[test]
fn boxed_properties_share_one_interface() {
    let mut varying = TimeIntervalCollectionProperty::<f64>::new();
    varying.add_interval(TimeInterval::closed(at(0.0), at(1.0)), 7.0).unwrap();

    let slots: Vec<strata::animation::BoxedProperty<f64>> =
        vec![Box::new(ConstantProperty::new(3.0_f64).unwrap()), Box::new(varying)];

    let flags: Vec<bool> = slots.iter().map(|p| p.is_time_varying()).collect();
    assert_eq!(flags, vec![false, true]);
    assert!(slots[1].as_any().is::<TimeIntervalCollectionProperty<f64>>());
}
