use std::any::Any;
use std::cell::Cell;
use std::cmp::Ordering;

use log::trace;
use strata_core::errors::{Result, StrataError};
use strata_core::time::{JulianDate, TimeInterval};

use crate::constant::ConstantProperty;
use crate::property::Property;
use crate::values::PropertyValue;

/// How many neighbouring intervals the cursor scan visits before falling back
/// to a binary search.
const MAX_SCAN_OFFSET: usize = 3;

#[derive(Debug)]
struct IntervalEntry<T: PropertyValue> {
    interval: TimeInterval,
    data: ConstantProperty<T>,
}

/// A time-varying [`Property`] holding one constant value per time interval.
///
/// Entries are kept sorted by start and never overlap: adding an interval
/// trims (or splits) whatever earlier data it covers, so the most recently
/// added value wins. Outside every interval the property has no value.
#[derive(Debug)]
pub struct TimeIntervalCollectionProperty<T: PropertyValue> {
    entries: Vec<IntervalEntry<T>>,
    /// Index of the last interval hit; per-frame lookups usually land on the
    /// same entry or the next one.
    cursor: Cell<usize>,
}

impl<T: PropertyValue> Default for TimeIntervalCollectionProperty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PropertyValue> TimeIntervalCollectionProperty<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: Cell::new(0),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Intervals in ascending start order.
    pub fn intervals(&self) -> impl Iterator<Item = &TimeInterval> {
        self.entries.iter().map(|e| &e.interval)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor.set(0);
    }

    /// Adds `value` over `interval`, overriding any earlier data it overlaps.
    ///
    /// The value is validated exactly like [`ConstantProperty::new`].
    pub fn add_interval(&mut self, interval: TimeInterval, value: impl Into<Option<T>>) -> Result<()> {
        if interval.is_empty() {
            return Err(StrataError::InvalidArgument("interval is empty.".into()));
        }
        self.insert(interval, ConstantProperty::new(value)?)
    }

    /// Adds an already validated constant over `interval`, with the same
    /// override rules as [`add_interval`](Self::add_interval).
    pub fn insert(&mut self, interval: TimeInterval, data: ConstantProperty<T>) -> Result<()> {
        if interval.is_empty() {
            return Err(StrataError::InvalidArgument("interval is empty.".into()));
        }

        let previous = std::mem::take(&mut self.entries);
        let mut entries = Vec::with_capacity(previous.len() + 2);

        for entry in previous {
            if entry.interval.intersect(&interval).is_none() {
                entries.push(entry);
                continue;
            }

            let left = TimeInterval::new(
                entry.interval.start,
                interval.start,
                entry.interval.is_start_included,
                !interval.is_start_included,
            );
            let right = TimeInterval::new(
                interval.stop,
                entry.interval.stop,
                !interval.is_stop_included,
                entry.interval.is_stop_included,
            );

            match (left.is_empty(), right.is_empty()) {
                (true, true) => {}
                (false, true) => entries.push(IntervalEntry { interval: left, data: entry.data }),
                (true, false) => entries.push(IntervalEntry { interval: right, data: entry.data }),
                (false, false) => {
                    trace!("Splitting interval {} around {}", entry.interval, interval);
                    entries.push(IntervalEntry {
                        interval: right,
                        data: entry.data.duplicate(),
                    });
                    entries.push(IntervalEntry { interval: left, data: entry.data });
                }
            }
        }

        entries.push(IntervalEntry { interval, data });
        entries.sort_by(|a, b| a.interval.start.compare(&b.interval.start));

        self.entries = entries;
        self.cursor.set(0);
        Ok(())
    }

    fn find_index(&self, time: &JulianDate) -> Option<usize> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }

        // Fast path: scan forward from the last hit.
        let from = self.cursor.get().min(len - 1);
        for idx in from..len.min(from + MAX_SCAN_OFFSET + 1) {
            let interval = &self.entries[idx].interval;
            if interval.contains(time) {
                self.cursor.set(idx);
                return Some(idx);
            }
            if time.compare(&interval.start) == Ordering::Less {
                break;
            }
        }

        // Large jump (scrubbing, time running backwards): binary search on start.
        let next = self
            .entries
            .partition_point(|e| e.interval.start.compare(time) != Ordering::Greater);

        // An open start can hand the boundary instant to the previous entry.
        for idx in (next.saturating_sub(2)..next).rev() {
            if self.entries[idx].interval.contains(time) {
                self.cursor.set(idx);
                return Some(idx);
            }
        }
        None
    }
}

impl<T: PropertyValue> Property for TimeIntervalCollectionProperty<T> {
    type Value = T;

    fn is_time_varying(&self) -> bool {
        true
    }

    fn get_value(&self, time: &JulianDate) -> Option<T> {
        let idx = self.find_index(time)?;
        self.entries[idx].data.get_value(time)
    }

    fn get_value_into(&self, time: &JulianDate, result: &mut T) -> bool {
        match self.find_index(time) {
            Some(idx) => self.entries[idx].data.get_value_into(time, result),
            None => false,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
