//! Decoding of raw packet sub-fields into property slots.
//!
//! A packet is the JSON value found under one sub-field of an interval
//! record, e.g. the `5` in `"grid": { "rowCount": 5 }`. Packets may be a
//! bare value, a value wrapped in a type key (`{ "number": 5 }`), an object
//! carrying its own `"interval"`, or an array of any of those.

use log::warn;
use serde_json::Value;
use strata_animation::{BoxedProperty, ConstantProperty, PropertyValue, TimeIntervalCollectionProperty};
use strata_core::color::Color;
use strata_core::errors::{Result, StrataError};
use strata_core::time::TimeInterval;

use crate::interval::parse_interval;

/// Outcome of decoding one packet.
#[derive(Debug, Clone, PartialEq)]
pub enum PacketSample<T> {
    Constant(T),
    /// Time-tagged samples; these need an interpolating property and are not
    /// turned into slots here.
    Sampled,
}

/// A value type that can be decoded from a packet.
pub trait PacketValue: PropertyValue {
    fn decode(packet: &Value, source_uri: Option<&str>) -> std::result::Result<PacketSample<Self>, String>;
}

impl PacketValue for f64 {
    fn decode(packet: &Value, _source_uri: Option<&str>) -> std::result::Result<PacketSample<Self>, String> {
        let raw = packet.get("number").unwrap_or(packet);
        match raw {
            Value::Number(n) => n
                .as_f64()
                .map(PacketSample::Constant)
                .ok_or_else(|| format!("{n} is not representable as f64")),
            Value::Array(samples) if samples.len() > 1 => Ok(PacketSample::Sampled),
            other => Err(format!("expected a number, got {other}")),
        }
    }
}

impl PacketValue for Color {
    fn decode(packet: &Value, _source_uri: Option<&str>) -> std::result::Result<PacketSample<Self>, String> {
        if let Some(rgba) = packet.get("rgba") {
            let components = color_components(rgba, "rgba")?;
            return match components {
                Components::Packed(c) => {
                    let bytes = c.map(|v| v.round().clamp(0.0, 255.0) as u8);
                    Ok(PacketSample::Constant(Color::from_bytes(bytes[0], bytes[1], bytes[2], bytes[3])))
                }
                Components::Sampled => Ok(PacketSample::Sampled),
            };
        }
        if let Some(rgbaf) = packet.get("rgbaf") {
            let components = color_components(rgbaf, "rgbaf")?;
            return match components {
                Components::Packed([r, g, b, a]) => {
                    Ok(PacketSample::Constant(Color::new(r as f32, g as f32, b as f32, a as f32)))
                }
                Components::Sampled => Ok(PacketSample::Sampled),
            };
        }
        Err("expected an object with `rgba` or `rgbaf`".to_string())
    }
}

enum Components {
    Packed([f64; 4]),
    Sampled,
}

fn color_components(value: &Value, key: &str) -> std::result::Result<Components, String> {
    let Value::Array(items) = value else {
        return Err(format!("`{key}` must be an array"));
    };
    let numbers = items
        .iter()
        .map(|v| v.as_f64().ok_or_else(|| format!("`{key}` holds a non-numeric entry: {v}")))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    match numbers.as_slice() {
        [r, g, b, a] => Ok(Components::Packed([*r, *g, *b, *a])),
        // [time, r, g, b, a, time, r, g, b, a, ...]
        samples if !samples.is_empty() && samples.len() % 5 == 0 => Ok(Components::Sampled),
        _ => Err(format!("`{key}` needs 4 components, got {}", numbers.len())),
    }
}

/// One decoded packet element, validated and ready to be written into a slot.
#[derive(Debug)]
pub struct PacketUpdate<T: PropertyValue> {
    interval: Option<TimeInterval>,
    data: ConstantProperty<T>,
}

impl<T: PropertyValue> PacketUpdate<T> {
    #[must_use]
    pub fn interval(&self) -> Option<&TimeInterval> {
        self.interval.as_ref()
    }

    #[must_use]
    pub fn value(&self) -> &T {
        self.data.value()
    }
}

/// Applies one packet to a property slot.
///
/// - `None` leaves the slot untouched.
/// - An array is processed element by element, in order.
/// - A packet without an interval (after applying `constraint`) replaces the
///   slot with a [`ConstantProperty`].
/// - A packet with an interval is added to the slot's
///   [`TimeIntervalCollectionProperty`], which is created when the slot holds
///   anything else.
///
/// A packet whose interval does not overlap `constraint` is skipped, as is
/// sampled data. Undecodable data fails with [`StrataError::InvalidPacket`]
/// and leaves the slot as it was.
pub fn process_packet_data<T: PacketValue>(
    slot: &mut Option<BoxedProperty<T>>,
    name: &str,
    packet: Option<&Value>,
    constraint: Option<&TimeInterval>,
    source_uri: Option<&str>,
) -> Result<()> {
    let updates = decode_packet_data::<T>(name, packet, constraint, source_uri)?;
    apply_packet_updates(slot, updates)
}

/// Decoding half of [`process_packet_data`]; touches no slot.
///
/// Callers filling several slots from one record decode them all first, so
/// a bad sub-field cannot leave the others half written.
pub fn decode_packet_data<T: PacketValue>(
    name: &str,
    packet: Option<&Value>,
    constraint: Option<&TimeInterval>,
    source_uri: Option<&str>,
) -> Result<Vec<PacketUpdate<T>>> {
    match packet {
        None => Ok(Vec::new()),
        Some(Value::Array(elements)) => elements
            .iter()
            .filter_map(|element| decode_packet(name, element, constraint, source_uri).transpose())
            .collect(),
        Some(packet) => Ok(decode_packet(name, packet, constraint, source_uri)?.into_iter().collect()),
    }
}

/// Writes decoded updates into `slot`, in order.
pub fn apply_packet_updates<T: PropertyValue>(
    slot: &mut Option<BoxedProperty<T>>,
    updates: Vec<PacketUpdate<T>>,
) -> Result<()> {
    for PacketUpdate { interval, data } in updates {
        let Some(interval) = interval else {
            *slot = Some(Box::new(data));
            continue;
        };

        let is_collection = slot
            .as_ref()
            .is_some_and(|property| property.as_any().is::<TimeIntervalCollectionProperty<T>>());
        if !is_collection {
            *slot = Some(Box::new(TimeIntervalCollectionProperty::<T>::new()));
        }
        if let Some(collection) = slot
            .as_mut()
            .and_then(|property| property.as_any_mut().downcast_mut::<TimeIntervalCollectionProperty<T>>())
        {
            collection.insert(interval, data)?;
        }
    }
    Ok(())
}

/// `Ok(None)` for packets that are skipped.
fn decode_packet<T: PacketValue>(
    name: &str,
    packet: &Value,
    constraint: Option<&TimeInterval>,
    source_uri: Option<&str>,
) -> Result<Option<PacketUpdate<T>>> {
    let own_interval = packet
        .get("interval")
        .map(parse_interval)
        .transpose()
        .map_err(|reason| StrataError::invalid_packet(name, reason))?;

    let interval = match (own_interval, constraint) {
        (Some(own), Some(constraint)) => match own.intersect(constraint) {
            Some(overlap) => Some(overlap),
            None => {
                warn!("Skipping `{name}` packet: interval {own} lies outside {constraint}");
                return Ok(None);
            }
        },
        (own, constraint) => own.or(constraint.copied()),
    };

    let value = match T::decode(packet, source_uri).map_err(|reason| StrataError::invalid_packet(name, reason))? {
        PacketSample::Constant(value) => value,
        PacketSample::Sampled => {
            warn!("Skipping sampled `{name}` packet; interpolated properties are not supported");
            return Ok(None);
        }
    };

    if let Some(interval) = interval.filter(TimeInterval::is_empty) {
        warn!("Skipping `{name}` packet: empty interval {interval}");
        return Ok(None);
    }

    Ok(Some(PacketUpdate {
        interval,
        data: ConstantProperty::<T>::new(value)?,
    }))
}
