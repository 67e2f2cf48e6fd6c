use serde_json::Value;
use strata_animation::BoxedProperty;
use strata_core::color::Color;
use strata_core::errors::{Result, StrataError};
use strata_core::time::JulianDate;
use strata_resources::{Material, MaterialFactory, MaterialKind};

use super::{MaterialBinding, ResolveReport, SlotOutcome, material_of_kind, pull_into};
use crate::interval::IntervalData;
use crate::packet::process_packet_data;

/// Binds a single time-varying color to a solid color material.
#[derive(Debug, Default)]
pub struct ColorMaterialBinding {
    pub color: Option<BoxedProperty<Color>>,
}

impl ColorMaterialBinding {
    pub const KEY: &'static str = "solidColor";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `interval` has a `"solidColor"` sub-object.
    #[must_use]
    pub fn has_data(interval: &IntervalData) -> bool {
        interval.contains_key(Self::KEY)
    }
}

impl MaterialBinding for ColorMaterialBinding {
    fn kind(&self) -> MaterialKind {
        MaterialKind::Color
    }

    fn handles(&self, interval: &IntervalData) -> bool {
        Self::has_data(interval)
    }

    fn apply_interval_data(&mut self, interval: &IntervalData, source_uri: Option<&str>) -> Result<()> {
        match interval.get(Self::KEY) {
            None => Ok(()),
            Some(Value::Object(fields)) => {
                process_packet_data(&mut self.color, "color", fields.get("color"), None, source_uri)
            }
            Some(_) => Err(StrataError::invalid_packet(Self::KEY, "expected an object")),
        }
    }

    fn resolve_with_report(
        &self,
        time: &JulianDate,
        factory: &MaterialFactory,
        existing: Option<Material>,
    ) -> (Material, ResolveReport) {
        let mut material = material_of_kind(MaterialKind::Color, factory, existing);
        let mut report = ResolveReport::new();

        if let Some(solid) = material.as_color_mut() {
            let outcome = pull_into(self.color.as_ref(), time, &mut solid.uniforms.get_mut().color);
            report.record("color", outcome);
            if outcome == SlotOutcome::Applied {
                solid.uniforms.mark_dirty();
            }
        }

        (material, report)
    }
}
