use serde::Deserialize;
use serde_json::{Map, Value};
use strata_core::errors::{Result, StrataError};
use strata_core::time::{JulianDate, TimeInterval};

/// One raw interval record from an animation document.
///
/// `payload` holds the remaining top-level keys (`"grid"`, `"solidColor"`,
/// ...). The optional `"interval"` key is lifted into `interval`; a record
/// without one applies at all times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalData {
    pub interval: Option<TimeInterval>,
    pub payload: Map<String, Value>,
}

impl IntervalData {
    #[must_use]
    pub fn new(payload: Map<String, Value>) -> Self {
        Self {
            interval: None,
            payload,
        }
    }

    #[must_use]
    pub fn with_interval(mut self, interval: TimeInterval) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut payload) = value else {
            return Err(StrataError::invalid_packet("interval", "expected a JSON object"));
        };
        let interval = payload
            .remove("interval")
            .map(|raw| parse_interval(&raw))
            .transpose()
            .map_err(|reason| StrataError::invalid_packet("interval", reason))?;
        Ok(Self { interval, payload })
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.payload.contains_key(key)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntervalBounds {
    start: f64,
    stop: f64,
    #[serde(default = "included")]
    is_start_included: bool,
    #[serde(default = "included")]
    is_stop_included: bool,
}

fn included() -> bool {
    true
}

/// Parses `{ "start": s, "stop": s }` with bounds in seconds since J2000.
/// Either end may be made open with `isStartIncluded` / `isStopIncluded`.
pub(crate) fn parse_interval(value: &Value) -> std::result::Result<TimeInterval, String> {
    let bounds = IntervalBounds::deserialize(value).map_err(|e| format!("bad interval: {e}"))?;
    let bound = |seconds: f64| {
        JulianDate::checked_from_seconds_since_j2000(seconds)
            .ok_or_else(|| format!("interval bound {seconds} is outside the representable date range"))
    };
    Ok(TimeInterval::new(
        bound(bounds.start)?,
        bound(bounds.stop)?,
        bounds.is_start_included,
        bounds.is_stop_included,
    ))
}
