//! An ordered container of disjoint intervals.
//!
//! [`IntervalSet`] wraps a `Vec<Interval<T>>` and guarantees the **canonical
//! invariant** at all times: intervals are sorted by start and no two
//! intervals overlap. Intervals may sit right next to each other (one gap
//! apart) after a difference has cut between them.
//!
//! Read access is transparent via `Deref<Target = [Interval<T>]>`. Union and
//! difference never touch the existing vector: they build a new one.

use std::fmt::Display;
use std::ops::Deref;

use qtty::{Millisecond, Quantity};

use super::error::Result;
use super::interval::Interval;
use super::step::{self, Step};
use crate::instant::{CalendarUnit, Gap, Instant};
use crate::units::{self, Millis, SameDim};

/// A sorted, non-overlapping set of closed intervals.
///
/// # Containment is envelope based
///
/// [`contains`](Self::contains) and
/// [`contains_interval`](Self::contains_interval) test against the span from
/// the first member's start to the last member's end. An instant that falls in
/// a hole between two members is still reported as contained. Use
/// [`covers`](Self::covers) for exact per-member coverage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalSet<T: Instant>(Vec<Interval<T>>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> IntervalSet<T> {
    /// Creates an empty interval set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Wraps a `Vec` that is **already in canonical form** without re-sorting.
    ///
    /// In debug builds this asserts the invariant.
    pub fn from_sorted_unchecked(vec: Vec<Interval<T>>) -> Self {
        debug_assert!(
            super::assertions::is_canonical(&vec),
            "IntervalSet::from_sorted_unchecked called with non-canonical input"
        );
        Self(vec)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Internal helpers
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> IntervalSet<T> {
    /// Sorts by start and merges overlapping / touching intervals in place.
    fn normalize(&mut self) {
        if self.0.len() <= 1 {
            return;
        }
        self.0.sort_by_key(|iv| iv.start());
        let mut merged: Vec<Interval<T>> = Vec::with_capacity(self.0.len());
        for interval in self.0.drain(..) {
            match merged.last_mut() {
                Some(last) if last.overlaps(&interval) => *last = last.hull(&interval),
                _ => merged.push(interval),
            }
        }
        self.0 = merged;
    }
}

// ─────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> IntervalSet<T> {
    /// Span from the first member's start to the last member's end.
    pub fn envelope(&self) -> Option<Interval<T>> {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => Some(Interval::new(first.start(), last.end())),
            _ => None,
        }
    }

    /// Returns true if `position` lies within the envelope.
    pub fn contains(&self, position: T) -> bool {
        self.envelope().is_some_and(|env| env.contains(position))
    }

    /// Returns true if `other` lies within the envelope.
    pub fn contains_interval(&self, other: &Interval<T>) -> bool {
        self.envelope()
            .is_some_and(|env| env.contains_interval(other))
    }

    /// Returns true if some member contains `position`.
    pub fn covers(&self, position: T) -> bool {
        let idx = self.0.partition_point(|iv| iv.end() < position);
        self.0.get(idx).is_some_and(|iv| iv.contains(position))
    }

    /// Returns true if any member overlaps `other`.
    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        self.0.iter().any(|iv| iv.overlaps(other))
    }

    /// Envelope length; zero for an empty set. This is not the sum of the
    /// member durations.
    pub fn envelope_duration(&self) -> Millis {
        self.envelope()
            .map_or_else(|| units::millis(0), |env| env.duration())
    }

    /// True when every member has the same bounds as `other`.
    pub fn is_same(&self, other: &Interval<T>) -> bool {
        self.0.iter().all(|iv| iv.is_same(other))
    }

    pub fn to_instant_pairs(&self) -> Vec<(T, T)> {
        self.0.iter().map(Interval::to_instant_pair).collect()
    }

    pub fn to_display_pairs(&self) -> Vec<(String, String)> {
        self.0.iter().map(Interval::to_display_pair).collect()
    }

    /// Consumes the set and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<Interval<T>> {
        self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Set operations
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> IntervalSet<T> {
    /// Adds `other` to the set.
    ///
    /// The run of members that overlap or touch `other` is replaced by one
    /// interval covering the run and `other`. When nothing overlaps, `other`
    /// is inserted at its sorted position.
    pub fn union(&self, other: &Interval<T>) -> IntervalSet<T> {
        let lo = self.0.partition_point(|iv| iv.end() < other.start());
        let hi = self.0.partition_point(|iv| iv.start() <= other.end());

        let merged = self.0[lo..hi.max(lo)]
            .iter()
            .fold(*other, |acc, iv| acc.hull(iv));

        let mut ranges = Vec::with_capacity(self.0.len() + 1);
        ranges.extend_from_slice(&self.0[..lo]);
        ranges.push(merged);
        ranges.extend_from_slice(&self.0[hi.max(lo)..]);
        IntervalSet::from_sorted_unchecked(ranges)
    }

    /// Removes `other` from every member it intersects, keeping the surviving
    /// pieces `gap` away from it.
    pub fn difference(&self, other: &Interval<T>, gap: Gap) -> IntervalSet<T> {
        let ranges = self
            .0
            .iter()
            .flat_map(|iv| {
                if iv.overlaps(other) {
                    iv.difference(other, gap).into_inner()
                } else {
                    vec![*iv]
                }
            })
            .collect();
        IntervalSet::from_sorted_unchecked(ranges)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Iteration
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> IntervalSet<T> {
    /// Steps through each member in order, see [`Interval::step_by`].
    pub fn step_by<F: FnMut(T)>(&self, unit: CalendarUnit, mut f: F) {
        for iv in &self.0 {
            iv.step_by(unit, &mut f);
        }
    }

    /// Steps through each member in order, see [`Interval::step_by_span`].
    pub fn step_by_span<S, F>(&self, span: Quantity<S>, mut f: F) -> Result<()>
    where
        S: SameDim<Millisecond>,
        F: FnMut(T),
    {
        let span: Millis = units::convert(span);
        step::checked_span(span)?;
        for iv in &self.0 {
            iv.step_by_span(span, &mut f)?;
        }
        Ok(())
    }

    pub fn iterate<F: FnMut(T)>(&self, step: Step, mut f: F) -> Result<()> {
        if let Step::Span(span) = step {
            step::checked_span(span)?;
        }
        for iv in &self.0 {
            iv.iterate(step, &mut f)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Transparent read access
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> Deref for IntervalSet<T> {
    type Target = [Interval<T>];

    fn deref(&self) -> &[Interval<T>] {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> From<Vec<Interval<T>>> for IntervalSet<T> {
    /// Creates an `IntervalSet` from an unsorted `Vec`, normalizing on construction.
    fn from(vec: Vec<Interval<T>>) -> Self {
        let mut set = Self(vec);
        set.normalize();
        set
    }
}

impl<T: Instant> From<Interval<T>> for IntervalSet<T> {
    /// Creates a single-element `IntervalSet` (always canonical).
    fn from(interval: Interval<T>) -> Self {
        Self(vec![interval])
    }
}

impl<T: Instant> FromIterator<Interval<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let vec: Vec<Interval<T>> = iter.into_iter().collect();
        Self::from(vec)
    }
}

impl<T: Instant> IntoIterator for IntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Instant> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> Default for IntervalSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Instant> Display for IntervalSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

/// Enables `assert_eq!(interval_set, vec![...])` in tests.
impl<T: Instant> PartialEq<Vec<Interval<T>>> for IntervalSet<T> {
    fn eq(&self, other: &Vec<Interval<T>>) -> bool {
        self.0 == *other
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<T: Instant + serde::Serialize> serde::Serialize for IntervalSet<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for IntervalSet<T>
where
    T: Instant + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec = <Vec<Interval<T>> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(vec))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────
