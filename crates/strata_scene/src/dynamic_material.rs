use log::{debug, trace};
use strata_core::errors::Result;
use strata_core::time::{JulianDate, TimeInterval};
use strata_resources::{Material, MaterialFactory, MaterialKind};

use crate::binding::{ColorMaterialBinding, GridMaterialBinding, MaterialBinding};
use crate::interval::IntervalData;

#[derive(Debug)]
struct MaterialEntry {
    /// `None` covers all time.
    interval: Option<TimeInterval>,
    binding: Box<dyn MaterialBinding>,
}

/// Picks a material binding per time interval.
///
/// Each interval record is routed to the binding kind whose data it carries.
/// Records for the same interval accumulate into one binding; a record of a
/// different kind replaces that interval's binding. When intervals overlap,
/// the most recently added one wins.
#[derive(Debug, Default)]
pub struct DynamicMaterialProperty {
    entries: Vec<MaterialEntry>,
}

impl DynamicMaterialProperty {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Routes one interval record to its binding. Records with no known
    /// material data are ignored.
    pub fn process_interval(&mut self, data: &IntervalData, source_uri: Option<&str>) -> Result<()> {
        let Some(kind) = binding_kind_for(data) else {
            trace!("Interval record carries no material data");
            return Ok(());
        };

        let existing = self.entries.iter().position(|e| e.interval == data.interval);
        if let Some(entry) = existing.map(|index| &mut self.entries[index])
            && entry.binding.kind() == kind
        {
            return entry.binding.apply_interval_data(data, source_uri);
        }

        // Fresh binding; nothing is stored unless the record applies cleanly.
        let mut binding = new_binding(kind);
        binding.apply_interval_data(data, source_uri)?;
        match existing {
            Some(index) => {
                let entry = &mut self.entries[index];
                debug!("Replacing {} binding with {kind} binding", entry.binding.kind());
                entry.binding = binding;
            }
            None => self.entries.push(MaterialEntry {
                interval: data.interval,
                binding,
            }),
        }
        Ok(())
    }

    /// The binding in effect at `time`.
    #[must_use]
    pub fn binding_at(&self, time: &JulianDate) -> Option<&dyn MaterialBinding> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.interval.as_ref().is_none_or(|interval| interval.contains(time)))
            .map(|e| e.binding.as_ref())
    }

    /// Resolves the binding in effect at `time`; returns `existing` untouched
    /// when no interval covers `time`.
    pub fn resolve(&self, time: &JulianDate, factory: &MaterialFactory, existing: Option<Material>) -> Option<Material> {
        match self.binding_at(time) {
            Some(binding) => Some(binding.resolve(time, factory, existing)),
            None => existing,
        }
    }
}

fn binding_kind_for(data: &IntervalData) -> Option<MaterialKind> {
    if GridMaterialBinding::has_data(data) {
        Some(MaterialKind::Grid)
    } else if ColorMaterialBinding::has_data(data) {
        Some(MaterialKind::Color)
    } else {
        None
    }
}

fn new_binding(kind: MaterialKind) -> Box<dyn MaterialBinding> {
    match kind {
        MaterialKind::Grid => Box::new(GridMaterialBinding::new()),
        MaterialKind::Color => Box::new(ColorMaterialBinding::new()),
    }
}
