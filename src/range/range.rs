//! The public range value: one interval or an ordered set of them.

use std::fmt::Display;

use super::error::{RangeError, Result};
use super::interval::Interval;
use super::interval_set::IntervalSet;
use super::step::Step;
use crate::instant::{CalendarUnit, Gap, Instant};
use crate::units::Millis;

/// Either a single interval or a set of disjoint intervals.
///
/// Every operation dispatches on the variant. `Set` with no members is the
/// empty range produced when a difference consumes everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        rename_all = "lowercase",
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: serde::Deserialize<'de>"
        )
    )
)]
pub enum Range<T: Instant> {
    Single(Interval<T>),
    Set(IntervalSet<T>),
}

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> Range<T> {
    /// `[start, end]` as a single interval.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn from_bounds(start: T, end: T) -> Self {
        Range::Single(Interval::new(start, end))
    }

    /// The whole calendar `unit` around `anchor`.
    pub fn from_calendar_unit(anchor: T, unit: CalendarUnit) -> Self {
        Range::Single(Interval::of_unit(anchor, unit))
    }

    /// A set from arbitrary intervals, sorted and merged where they overlap.
    pub fn from_list(intervals: Vec<Interval<T>>) -> Self {
        Range::Set(IntervalSet::from(intervals))
    }

    /// The empty range.
    pub fn empty() -> Self {
        Range::Set(IntervalSet::new())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> Range<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Range::Set(set) if set.is_empty())
    }

    /// Members in ascending order; a single interval yields one member.
    pub fn intervals(&self) -> Vec<Interval<T>> {
        match self {
            Range::Single(interval) => vec![*interval],
            Range::Set(set) => set.to_vec(),
        }
    }

    /// Span from the first start to the last end.
    pub fn envelope(&self) -> Option<Interval<T>> {
        match self {
            Range::Single(interval) => Some(*interval),
            Range::Set(set) => set.envelope(),
        }
    }

    /// Returns true if `position` is in the range. Sets answer for their
    /// envelope, see [`IntervalSet::contains`].
    pub fn contains(&self, position: T) -> bool {
        match self {
            Range::Single(interval) => interval.contains(position),
            Range::Set(set) => set.contains(position),
        }
    }

    pub fn contains_interval(&self, other: &Interval<T>) -> bool {
        match self {
            Range::Single(interval) => interval.contains_interval(other),
            Range::Set(set) => set.contains_interval(other),
        }
    }

    /// Compares against the envelope of `other`. An empty `other` is never
    /// contained.
    pub fn contains_range(&self, other: &Range<T>) -> bool {
        other
            .envelope()
            .is_some_and(|env| self.contains_interval(&env))
    }

    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        match self {
            Range::Single(interval) => interval.overlaps(other),
            Range::Set(set) => set.overlaps(other),
        }
    }

    /// `end - start` for a single interval, the envelope length for a set.
    pub fn duration(&self) -> Millis {
        match self {
            Range::Single(interval) => interval.duration(),
            Range::Set(set) => set.envelope_duration(),
        }
    }

    /// `end - start` in milliseconds, or in whole `unit`s when given.
    ///
    /// # Errors
    ///
    /// [`RangeError::UnsupportedOperation`] for a set.
    pub fn diff(&self, unit: Option<CalendarUnit>) -> Result<i64> {
        match self {
            Range::Single(interval) => Ok(interval.diff(unit)),
            Range::Set(_) => Err(RangeError::UnsupportedOperation(
                "cannot diff a set-mode range",
            )),
        }
    }

    /// True if every member has the same bounds as `other`.
    pub fn is_same(&self, other: &Interval<T>) -> bool {
        match self {
            Range::Single(interval) => interval.is_same(other),
            Range::Set(set) => set.is_same(other),
        }
    }

    pub fn to_instant_pairs(&self) -> Vec<(T, T)> {
        match self {
            Range::Single(interval) => vec![interval.to_instant_pair()],
            Range::Set(set) => set.to_instant_pairs(),
        }
    }

    pub fn to_display_pairs(&self) -> Vec<(String, String)> {
        match self {
            Range::Single(interval) => vec![interval.to_display_pair()],
            Range::Set(set) => set.to_display_pairs(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Algebra
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> Range<T> {
    pub fn union(&self, other: &Interval<T>) -> Range<T> {
        match self {
            Range::Single(interval) => interval.union(other),
            Range::Set(set) => Range::Set(set.union(other)),
        }
    }

    /// Removes `other`, leaving a one-second gap around it.
    pub fn difference(&self, other: &Interval<T>) -> Range<T> {
        self.difference_with_gap(other, Gap::default())
    }

    /// Always yields a set, possibly empty.
    pub fn difference_with_gap(&self, other: &Interval<T>, gap: Gap) -> Range<T> {
        match self {
            Range::Single(interval) => Range::Set(interval.difference(other, gap)),
            Range::Set(set) => Range::Set(set.difference(other, gap)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Iteration
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> Range<T> {
    /// Calls `f` for every step through each member in order.
    ///
    /// # Errors
    ///
    /// [`RangeError::DegenerateStep`] for a zero or invalid span.
    pub fn iterate<F: FnMut(T)>(&self, step: impl Into<Step>, f: F) -> Result<()> {
        match self {
            Range::Single(interval) => interval.iterate(step.into(), f),
            Range::Set(set) => set.iterate(step.into(), f),
        }
    }

    /// Collects the instants visited by [`iterate`](Self::iterate).
    pub fn steps(&self, step: impl Into<Step>) -> Result<Vec<T>> {
        let mut out = Vec::new();
        self.iterate(step, |instant| out.push(instant))?;
        Ok(out)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> From<Interval<T>> for Range<T> {
    fn from(interval: Interval<T>) -> Self {
        Range::Single(interval)
    }
}

impl<T: Instant> From<IntervalSet<T>> for Range<T> {
    fn from(set: IntervalSet<T>) -> Self {
        Range::Set(set)
    }
}

impl<T: Instant> Display for Range<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Range::Single(interval) => write!(f, "{interval}"),
            Range::Set(set) => write!(f, "{set}"),
        }
    }
}
