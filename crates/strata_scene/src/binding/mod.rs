//! Material bindings.
//!
//! A binding owns a fixed set of optional property slots for one material
//! kind. [`MaterialBinding::apply_interval_data`] fills the slots from raw
//! interval records; [`MaterialBinding::resolve`] evaluates them at a given
//! time and writes the results into a material's uniform record.
//!
//! Writes follow one rule: a slot whose property yields a value overwrites its
//! field, everything else leaves the field as it was. An unset slot and a
//! time-varying slot with no value at `time` look the same in the output;
//! [`ResolveReport`] tells them apart for callers that care.

mod color;
mod grid;

pub use color::ColorMaterialBinding;
pub use grid::GridMaterialBinding;

use std::fmt;

use log::{debug, trace};
use smallvec::SmallVec;
use strata_animation::BoxedProperty;
use strata_core::errors::Result;
use strata_core::time::JulianDate;
use strata_resources::{Material, MaterialFactory, MaterialKind};

use crate::interval::IntervalData;

// ============================================================================
// Resolve diagnostics
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotOutcome {
    /// The property produced a value and it was written.
    Applied,
    /// The property exists but has no value at the requested time.
    NoValue,
    /// No property is bound to the slot.
    Unset,
}

/// Per-slot outcome of one [`MaterialBinding::resolve_with_report`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolveReport {
    slots: SmallVec<[(&'static str, SlotOutcome); 6]>,
}

impl ResolveReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, slot: &'static str, outcome: SlotOutcome) {
        trace!("  {slot}: {outcome:?}");
        self.slots.push((slot, outcome));
    }

    /// Outcome for the named slot, `None` if the binding has no such slot.
    #[must_use]
    pub fn outcome(&self, slot: &str) -> Option<SlotOutcome> {
        self.slots.iter().find(|(name, _)| *name == slot).map(|(_, outcome)| *outcome)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, SlotOutcome)> + '_ {
        self.slots.iter().copied()
    }

    #[must_use]
    pub fn any_applied(&self) -> bool {
        self.slots.iter().any(|(_, outcome)| *outcome == SlotOutcome::Applied)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

// ============================================================================
// MaterialBinding
// ============================================================================

pub trait MaterialBinding: fmt::Debug {
    /// The material kind this binding produces.
    fn kind(&self) -> MaterialKind;

    /// Whether `interval` carries data for this binding.
    fn handles(&self, interval: &IntervalData) -> bool;

    /// Decodes the binding's sub-object of `interval` into its slots.
    ///
    /// Does nothing when the sub-object is absent. Sub-fields that are absent
    /// leave their slot as it was.
    fn apply_interval_data(&mut self, interval: &IntervalData, source_uri: Option<&str>) -> Result<()>;

    /// Evaluates every slot at `time` and writes present values into a
    /// material of [`kind`](Self::kind).
    ///
    /// `existing` is rewritten in place when it already has the right kind;
    /// otherwise it is dropped and a fresh material comes from `factory`.
    fn resolve_with_report(
        &self,
        time: &JulianDate,
        factory: &MaterialFactory,
        existing: Option<Material>,
    ) -> (Material, ResolveReport);

    fn resolve(&self, time: &JulianDate, factory: &MaterialFactory, existing: Option<Material>) -> Material {
        self.resolve_with_report(time, factory, existing).0
    }
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Returns `existing` if it is of `kind`, otherwise a new material.
pub(crate) fn material_of_kind(kind: MaterialKind, factory: &MaterialFactory, existing: Option<Material>) -> Material {
    match existing {
        Some(material) if material.kind() == kind => material,
        Some(material) => {
            debug!("Replacing {} material {} with a new {kind} material", material.kind(), material.uuid);
            factory.create(kind)
        }
        None => factory.create(kind),
    }
}

/// Pulls `slot` at `time` directly into `field`.
pub(crate) fn pull_into<T: 'static>(slot: Option<&BoxedProperty<T>>, time: &JulianDate, field: &mut T) -> SlotOutcome {
    match slot {
        None => SlotOutcome::Unset,
        Some(property) if property.get_value_into(time, field) => SlotOutcome::Applied,
        Some(_) => SlotOutcome::NoValue,
    }
}

/// Pulls a scalar slot at `time` and narrows it into an `f32` field.
pub(crate) fn pull_scalar(slot: Option<&BoxedProperty<f64>>, time: &JulianDate, field: &mut f32) -> SlotOutcome {
    let Some(property) = slot else {
        return SlotOutcome::Unset;
    };
    match property.get_value(time) {
        Some(value) => {
            *field = value as f32;
            SlotOutcome::Applied
        }
        None => SlotOutcome::NoValue,
    }
}
