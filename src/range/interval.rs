//! Closed interval `[start, end]` over an [`Instant`].

use std::fmt::Display;

use qtty::{Millisecond, Quantity};

use super::error::{RangeError, Result};
use super::interval_set::IntervalSet;
use super::range::Range;
use super::step::{self, Step};
use crate::instant::{CalendarUnit, Gap, Instant};
use crate::units::{self, Millis, SameDim};

/// Continuous closed range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T: Instant> {
    start: T,
    end: T,
}

impl<T: Instant> Interval<T> {
    /// Creates interval `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn new(start: T, end: T) -> Self {
        assert!(start <= end, "Interval start must be <= end");
        Self { start, end }
    }

    /// Creates interval `[start, end]`, or `None` if `start > end`.
    pub fn try_new(start: T, end: T) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Creates the zero-length interval `[at, at]`.
    pub fn point(at: T) -> Self {
        Self { start: at, end: at }
    }

    /// The calendar `unit` that contains `anchor`, e.g. the whole month.
    pub fn of_unit(anchor: T, unit: CalendarUnit) -> Self {
        Self::new(anchor.start_of(unit), anchor.end_of(unit))
    }

    pub const fn start(&self) -> T {
        self.start
    }

    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns true if `position` ∈ `[start, end]`.
    pub fn contains(&self, position: T) -> bool {
        self.start <= position && position <= self.end
    }

    /// Returns true if `other` lies entirely within this interval.
    pub fn contains_interval(&self, other: &Interval<T>) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Checks if this interval overlaps with another interval. Sharing a
    /// single boundary instant counts as overlap.
    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn intersection(&self, other: &Interval<T>) -> Option<Interval<T>> {
        if self.overlaps(other) {
            Some(Interval {
                start: self.start.max(other.start),
                end: self.end.min(other.end),
            })
        } else {
            None
        }
    }

    /// Smallest interval covering both `self` and `other`.
    pub fn hull(&self, other: &Interval<T>) -> Interval<T> {
        Interval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Joins two intervals.
    ///
    /// Overlapping or touching intervals merge into one covering interval;
    /// disjoint ones come back as a two-member set ordered by start.
    pub fn union(&self, other: &Interval<T>) -> Range<T> {
        if self.overlaps(other) {
            Range::Single(self.hull(other))
        } else {
            let (first, second) = if other.start < self.start {
                (*other, *self)
            } else {
                (*self, *other)
            };
            Range::Set(IntervalSet::from_sorted_unchecked(vec![first, second]))
        }
    }

    /// Removes `other` from this interval.
    ///
    /// The surviving pieces stay `gap` away from `other`. A piece that the gap
    /// pushes past its own far bound is dropped, and so is one whose boundary
    /// the gap cannot move off `other` (arithmetic saturated at the edge of
    /// the instant's range).
    pub fn difference(&self, other: &Interval<T>, gap: Gap) -> IntervalSet<T> {
        if !self.overlaps(other) {
            return IntervalSet::from(*self);
        }
        let head = (self.start < other.start)
            .then(|| other.start.subtract_gap(gap))
            .filter(|end| *end < other.start)
            .and_then(|end| Interval::try_new(self.start, end));
        let tail = (other.end < self.end)
            .then(|| other.end.add_gap(gap))
            .filter(|start| *start > other.end)
            .and_then(|start| Interval::try_new(start, self.end));
        IntervalSet::from_sorted_unchecked(head.into_iter().chain(tail).collect())
    }

    /// `end - start` in milliseconds, or in whole `unit`s when given.
    pub fn diff(&self, unit: Option<CalendarUnit>) -> i64 {
        self.end
            .diff(&self.start, unit.unwrap_or(CalendarUnit::Millisecond))
    }

    pub fn duration(&self) -> Millis {
        units::millis(self.diff(None))
    }

    /// Calls `f` with `start`, then every `unit` after it while still inside
    /// the interval (the end is inclusive).
    pub fn step_by<F: FnMut(T)>(&self, unit: CalendarUnit, mut f: F) {
        let mut current = self.start;
        while self.contains(current) {
            f(current);
            let next = current.add(1, unit);
            if next <= current {
                break;
            }
            current = next;
        }
    }

    /// Calls `f` with `start + i * span` for `i` in `0..=round(duration / span)`.
    ///
    /// # Errors
    ///
    /// [`RangeError::DegenerateStep`] if `span` is shorter than a millisecond
    /// or not finite.
    pub fn step_by_span<S, F>(&self, span: Quantity<S>, mut f: F) -> Result<()>
    where
        S: SameDim<Millisecond>,
        F: FnMut(T),
    {
        let span = step::checked_span(units::convert(span))?;
        let count = (self.duration().value() / span).round();
        if !count.is_finite() || count > u64::MAX as f64 {
            return Err(RangeError::DegenerateStep);
        }
        for i in 0..=(count as u64) {
            f(self.start.add_millis((i as f64 * span).round() as i64));
        }
        Ok(())
    }

    /// Dispatches to [`step_by`](Self::step_by) or
    /// [`step_by_span`](Self::step_by_span).
    pub fn iterate<F: FnMut(T)>(&self, step: Step, f: F) -> Result<()> {
        match step {
            Step::Unit(unit) => {
                self.step_by(unit, f);
                Ok(())
            }
            Step::Span(span) => self.step_by_span(span, f),
        }
    }

    pub fn is_same(&self, other: &Interval<T>) -> bool {
        self.start == other.start && self.end == other.end
    }

    pub fn to_instant_pair(&self) -> (T, T) {
        (self.start, self.end)
    }

    /// Both bounds formatted by the instant delegate.
    pub fn to_display_pair(&self) -> (String, String) {
        (self.start.display(), self.end.display())
    }
}

impl<T: Instant> Display for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start.display(), self.end.display())
    }
}

// =============================================================================
// Interval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: Instant + serde::Serialize> serde::Serialize for Interval<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Interval", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Interval<T>
where
    T: Instant + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(bound = "T: serde::Deserialize<'de>")]
        struct Raw<T> {
            start: T,
            end: T,
        }

        let raw = <Raw<T> as serde::Deserialize>::deserialize(deserializer)?;
        Interval::try_new(raw.start, raw.end)
            .ok_or_else(|| serde::de::Error::custom("Interval start must be <= end"))
    }
}
