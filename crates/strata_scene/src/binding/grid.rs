use log::trace;
use serde_json::Value;
use strata_animation::BoxedProperty;
use strata_core::color::Color;
use strata_core::errors::{Result, StrataError};
use strata_core::time::JulianDate;
use strata_resources::{Material, MaterialFactory, MaterialKind};

use super::{MaterialBinding, ResolveReport, material_of_kind, pull_into, pull_scalar};
use crate::interval::IntervalData;
use crate::packet::{apply_packet_updates, decode_packet_data};

/// Binds time-varying grid parameters to a grid material.
///
/// `row_*` slots drive the `x` lane of the line uniforms, `column_*` slots the
/// `y` lane.
#[derive(Debug, Default)]
pub struct GridMaterialBinding {
    pub color: Option<BoxedProperty<Color>>,
    pub cell_alpha: Option<BoxedProperty<f64>>,
    pub row_count: Option<BoxedProperty<f64>>,
    pub column_count: Option<BoxedProperty<f64>>,
    pub row_thickness: Option<BoxedProperty<f64>>,
    pub column_thickness: Option<BoxedProperty<f64>>,
}

impl GridMaterialBinding {
    pub const KEY: &'static str = "grid";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `interval` has a `"grid"` sub-object.
    #[must_use]
    pub fn has_data(interval: &IntervalData) -> bool {
        interval.contains_key(Self::KEY)
    }

    /// Whether any slot is time-varying.
    #[must_use]
    pub fn is_time_varying(&self) -> bool {
        [
            self.cell_alpha.as_ref(),
            self.row_count.as_ref(),
            self.column_count.as_ref(),
            self.row_thickness.as_ref(),
            self.column_thickness.as_ref(),
        ]
        .into_iter()
        .flatten()
        .any(|p| p.is_time_varying())
            || self.color.as_ref().is_some_and(|p| p.is_time_varying())
    }
}

impl MaterialBinding for GridMaterialBinding {
    fn kind(&self) -> MaterialKind {
        MaterialKind::Grid
    }

    fn handles(&self, interval: &IntervalData) -> bool {
        Self::has_data(interval)
    }

    fn apply_interval_data(&mut self, interval: &IntervalData, source_uri: Option<&str>) -> Result<()> {
        let Some(grid) = interval.get(Self::KEY) else {
            return Ok(());
        };
        let Value::Object(fields) = grid else {
            return Err(StrataError::invalid_packet(Self::KEY, "expected an object"));
        };

        // Scoping to the record's interval is the caller's job. Every field is
        // decoded before any slot is written.
        let decode = |name: &str| decode_packet_data::<f64>(name, fields.get(name), None, source_uri);
        let color = decode_packet_data::<Color>("color", fields.get("color"), None, source_uri)?;
        let cell_alpha = decode("cellAlpha")?;
        let row_count = decode("rowCount")?;
        let column_count = decode("columnCount")?;
        let row_thickness = decode("rowThickness")?;
        let column_thickness = decode("columnThickness")?;

        apply_packet_updates(&mut self.color, color)?;
        apply_packet_updates(&mut self.cell_alpha, cell_alpha)?;
        apply_packet_updates(&mut self.row_count, row_count)?;
        apply_packet_updates(&mut self.column_count, column_count)?;
        apply_packet_updates(&mut self.row_thickness, row_thickness)?;
        apply_packet_updates(&mut self.column_thickness, column_thickness)
    }

    fn resolve_with_report(
        &self,
        time: &JulianDate,
        factory: &MaterialFactory,
        existing: Option<Material>,
    ) -> (Material, ResolveReport) {
        let mut material = material_of_kind(MaterialKind::Grid, factory, existing);
        let mut report = ResolveReport::new();

        if let Some(grid) = material.as_grid_mut() {
            trace!("Resolving grid material at {time}");
            let uniforms = grid.uniforms.get_mut();

            report.record("color", pull_into(self.color.as_ref(), time, &mut uniforms.color));
            report.record("cell_alpha", pull_scalar(self.cell_alpha.as_ref(), time, &mut uniforms.cell_alpha));
            report.record("row_count", pull_scalar(self.row_count.as_ref(), time, &mut uniforms.line_count.x));
            report.record(
                "column_count",
                pull_scalar(self.column_count.as_ref(), time, &mut uniforms.line_count.y),
            );
            report.record(
                "row_thickness",
                pull_scalar(self.row_thickness.as_ref(), time, &mut uniforms.line_thickness.x),
            );
            report.record(
                "column_thickness",
                pull_scalar(self.column_thickness.as_ref(), time, &mut uniforms.line_thickness.y),
            );

            if report.any_applied() {
                grid.uniforms.mark_dirty();
            }
        }

        (material, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::SlotOutcome;
    use serde_json::json;
    use strata_animation::{ConstantProperty, TimeIntervalCollectionProperty};

    fn record(value: serde_json::Value) -> IntervalData {
        IntervalData::from_value(value).unwrap()
    }

    #[test]
    fn has_data_checks_grid_key() {
        assert!(GridMaterialBinding::has_data(&record(json!({ "grid": {} }))));
        assert!(!GridMaterialBinding::has_data(&record(json!({ "solidColor": {} }))));
    }

    #[test]
    fn apply_fills_only_present_fields() {
        let mut binding = GridMaterialBinding::new();
        binding
            .apply_interval_data(&record(json!({ "grid": { "rowCount": 4, "cellAlpha": { "number": 0.5 } } })), None)
            .unwrap();

        assert!(binding.row_count.is_some());
        assert!(binding.cell_alpha.is_some());
        assert!(binding.color.is_none());
        assert!(binding.column_count.is_none());
        assert!(!binding.is_time_varying());
    }

    #[test]
    fn packet_interval_makes_slot_time_varying() {
        let mut binding = GridMaterialBinding::new();
        binding
            .apply_interval_data(
                &record(json!({ "grid": { "rowCount": [
                    { "interval": { "start": 0.0, "stop": 10.0 }, "number": 2 },
                    { "interval": { "start": 10.0, "stop": 20.0, "isStartIncluded": false }, "number": 6 }
                ] } })),
                None,
            )
            .unwrap();

        let row_count = binding.row_count.as_ref().unwrap();
        assert!(row_count.is_time_varying());
        assert!(row_count.as_any().is::<TimeIntervalCollectionProperty<f64>>());
        assert!(binding.is_time_varying());

        let t = JulianDate::from_seconds_since_j2000(15.0);
        assert_eq!(row_count.get_value(&t), Some(6.0));
    }

    #[test]
    fn failed_apply_leaves_slots_unchanged() {
        let mut binding = GridMaterialBinding {
            row_count: Some(Box::new(ConstantProperty::<f64>::new(1.0).unwrap())),
            ..GridMaterialBinding::default()
        };
        let err = binding
            .apply_interval_data(
                &record(json!({ "grid": { "rowCount": 4, "columnCount": "bad", "rowThickness": 2 } })),
                None,
            )
            .unwrap_err();
        assert!(matches!(err, StrataError::InvalidPacket { ref property, .. } if property == "columnCount"));

        let row_count = binding.row_count.as_ref().unwrap();
        assert_eq!(row_count.get_value(&JulianDate::J2000), Some(1.0));
        assert!(binding.column_count.is_none());
        assert!(binding.row_thickness.is_none());
    }

    #[test]
    fn non_object_grid_is_rejected() {
        let mut binding = GridMaterialBinding::new();
        let err = binding.apply_interval_data(&record(json!({ "grid": 3 })), None).unwrap_err();
        assert!(matches!(err, StrataError::InvalidPacket { .. }));
    }

    #[test]
    fn report_separates_unset_from_missing_value() {
        let mut interval = TimeIntervalCollectionProperty::<f64>::new();
        interval
            .add_interval(
                strata_core::time::TimeInterval::closed(
                    JulianDate::from_seconds_since_j2000(100.0),
                    JulianDate::from_seconds_since_j2000(200.0),
                ),
                3.0,
            )
            .unwrap();

        let binding = GridMaterialBinding {
            cell_alpha: Some(Box::new(ConstantProperty::<f64>::new(0.3).unwrap())),
            row_count: Some(Box::new(interval)),
            ..GridMaterialBinding::default()
        };

        let (material, report) =
            binding.resolve_with_report(&JulianDate::J2000, &MaterialFactory::default(), None);

        assert_eq!(report.len(), 6);
        assert_eq!(report.outcome("cell_alpha"), Some(SlotOutcome::Applied));
        assert_eq!(report.outcome("row_count"), Some(SlotOutcome::NoValue));
        assert_eq!(report.outcome("column_count"), Some(SlotOutcome::Unset));
        assert_eq!(report.outcome("opacity"), None);

        let uniforms = material.as_grid().unwrap().uniforms();
        assert!((uniforms.line_count.x - 8.0).abs() < f32::EPSILON);
        assert!((uniforms.cell_alpha - 0.3).abs() < 1e-6);
        assert_eq!(material.uniform_version(), 1);
    }
}
