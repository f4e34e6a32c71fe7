//! The point-in-time capability consumed by the interval algebra.
//!
//! The algebra never performs calendar math itself. Everything it needs from a
//! date library (parsing, formatting, calendar-unit arithmetic, ordering and
//! diffing) is expressed by the [`Instant`] trait. A `chrono` adapter is
//! provided behind the `chrono` feature.

#[cfg(feature = "chrono")]
mod chrono_utc;
mod unit;

use std::fmt::Debug;

pub use unit::{CalendarUnit, Gap, ParseUnitError};

/// A totally ordered point in time backed by an external date library.
pub trait Instant: Copy + Ord + Debug {
    /// Parses `text` into an instant, or `None` if the text is not a date.
    fn parse(text: &str) -> Option<Self>;

    /// Formats the instant as text.
    fn display(&self) -> String;

    /// Returns the first instant of the `unit` containing `self`.
    fn start_of(&self, unit: CalendarUnit) -> Self;

    /// Returns the last instant of the `unit` containing `self`.
    fn end_of(&self, unit: CalendarUnit) -> Self;

    /// Moves forward by `quantity` calendar units.
    fn add(&self, quantity: i64, unit: CalendarUnit) -> Self;

    /// Moves backward by `quantity` calendar units.
    fn subtract(&self, quantity: i64, unit: CalendarUnit) -> Self;

    /// Moves by an exact number of milliseconds (negative moves backward).
    fn add_millis(&self, millis: i64) -> Self;

    /// Returns `self - earlier` in whole `unit`s, truncated toward zero.
    fn diff(&self, earlier: &Self, unit: CalendarUnit) -> i64;

    /// Returns the current instant, used as the anchor of calendar-unit ranges.
    fn now() -> Self;

    /// Shifts forward by a [`Gap`].
    fn add_gap(&self, gap: Gap) -> Self {
        self.add(gap.quantity(), gap.unit())
    }

    /// Shifts backward by a [`Gap`].
    fn subtract_gap(&self, gap: Gap) -> Self {
        self.subtract(gap.quantity(), gap.unit())
    }
}
