use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Number of seconds in one Julian day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// A simulation instant stored as a whole Julian day number plus the seconds
/// elapsed within that day.
///
/// Splitting the day from the seconds keeps sub-millisecond precision for
/// dates thousands of years away from the epoch, which a single `f64` of days
/// cannot. The value is always normalized so that
/// `0.0 <= seconds_of_day < 86400.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JulianDate {
    day_number: i32,
    seconds_of_day: f64,
}

impl JulianDate {
    /// 2000-01-01T12:00:00 (the J2000 epoch).
    pub const J2000: JulianDate = JulianDate {
        day_number: 2_451_545,
        seconds_of_day: 43_200.0,
    };

    #[must_use]
    pub fn new(day_number: i32, seconds_of_day: f64) -> Self {
        let whole_days = (seconds_of_day / SECONDS_PER_DAY).floor();
        let mut seconds = seconds_of_day - whole_days * SECONDS_PER_DAY;
        // Days past the i32 range pin to its ends.
        let mut day = day_number.saturating_add(whole_days as i32);
        // Rounding can land exactly on the next day boundary.
        if seconds >= SECONDS_PER_DAY {
            seconds -= SECONDS_PER_DAY;
            day = day.saturating_add(1);
        }
        Self {
            day_number: day,
            seconds_of_day: seconds,
        }
    }

    #[must_use]
    pub fn from_total_days(total_days: f64) -> Self {
        let day = total_days.floor();
        Self::new(day as i32, (total_days - day) * SECONDS_PER_DAY)
    }

    /// Seconds relative to [`JulianDate::J2000`]; negative values lie before it.
    #[must_use]
    pub fn from_seconds_since_j2000(seconds: f64) -> Self {
        Self::J2000.add_seconds(seconds)
    }

    /// Like [`from_seconds_since_j2000`](Self::from_seconds_since_j2000), but
    /// `None` when `seconds` is not finite or the day number would leave the
    /// `i32` range.
    #[must_use]
    pub fn checked_from_seconds_since_j2000(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() {
            return None;
        }
        let days = Self::J2000.total_days() + seconds / SECONDS_PER_DAY;
        let in_range = days >= f64::from(i32::MIN) && days < f64::from(i32::MAX);
        in_range.then(|| Self::from_seconds_since_j2000(seconds))
    }

    #[inline]
    #[must_use]
    pub fn day_number(&self) -> i32 {
        self.day_number
    }

    #[inline]
    #[must_use]
    pub fn seconds_of_day(&self) -> f64 {
        self.seconds_of_day
    }

    #[must_use]
    pub fn total_days(&self) -> f64 {
        f64::from(self.day_number) + self.seconds_of_day / SECONDS_PER_DAY
    }

    #[must_use]
    pub fn add_seconds(&self, seconds: f64) -> Self {
        Self::new(self.day_number, self.seconds_of_day + seconds)
    }

    /// `self - other`, in seconds.
    #[must_use]
    pub fn seconds_difference(&self, other: &JulianDate) -> f64 {
        let days = f64::from(self.day_number) - f64::from(other.day_number);
        days * SECONDS_PER_DAY + (self.seconds_of_day - other.seconds_of_day)
    }

    /// Total ordering; NaN seconds sort after every finite value.
    #[must_use]
    pub fn compare(&self, other: &JulianDate) -> Ordering {
        self.day_number
            .cmp(&other.day_number)
            .then_with(|| self.seconds_of_day.total_cmp(&other.seconds_of_day))
    }
}

impl PartialOrd for JulianDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {} + {:.3}s", self.day_number, self.seconds_of_day)
    }
}

/// A span of simulation time with independently open or closed ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval {
    pub start: JulianDate,
    pub stop: JulianDate,
    pub is_start_included: bool,
    pub is_stop_included: bool,
}

impl TimeInterval {
    #[must_use]
    pub fn new(
        start: JulianDate,
        stop: JulianDate,
        is_start_included: bool,
        is_stop_included: bool,
    ) -> Self {
        Self {
            start,
            stop,
            is_start_included,
            is_stop_included,
        }
    }

    /// `[start, stop]`
    #[must_use]
    pub fn closed(start: JulianDate, stop: JulianDate) -> Self {
        Self::new(start, stop, true, true)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self.stop.compare(&self.start) {
            Ordering::Less => true,
            Ordering::Equal => !(self.is_start_included && self.is_stop_included),
            Ordering::Greater => false,
        }
    }

    #[must_use]
    pub fn contains(&self, date: &JulianDate) -> bool {
        if self.is_empty() {
            return false;
        }

        let after_start = match date.compare(&self.start) {
            Ordering::Greater => true,
            Ordering::Equal => self.is_start_included,
            Ordering::Less => false,
        };
        let before_stop = match date.compare(&self.stop) {
            Ordering::Less => true,
            Ordering::Equal => self.is_stop_included,
            Ordering::Greater => false,
        };
        after_start && before_stop
    }

    /// Overlap of two intervals, or `None` when they do not overlap.
    #[must_use]
    pub fn intersect(&self, other: &TimeInterval) -> Option<TimeInterval> {
        let (start, is_start_included) = match self.start.compare(&other.start) {
            Ordering::Greater => (self.start, self.is_start_included),
            Ordering::Less => (other.start, other.is_start_included),
            Ordering::Equal => (
                self.start,
                self.is_start_included && other.is_start_included,
            ),
        };
        let (stop, is_stop_included) = match self.stop.compare(&other.stop) {
            Ordering::Less => (self.stop, self.is_stop_included),
            Ordering::Greater => (other.stop, other.is_stop_included),
            Ordering::Equal => (self.stop, self.is_stop_included && other.is_stop_included),
        };

        let result = TimeInterval::new(start, stop, is_start_included, is_stop_included);
        (!result.is_empty()).then_some(result)
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.is_start_included { '[' } else { '(' };
        let close = if self.is_stop_included { ']' } else { ')' };
        write!(f, "{open}{}, {}{close}", self.start, self.stop)
    }
}
