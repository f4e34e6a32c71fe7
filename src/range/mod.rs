//! Interval algebra over an [`Instant`](crate::instant::Instant).
//!
//! [`Interval`] is a closed `[start, end]` pair, [`IntervalSet`] keeps a sorted
//! run of disjoint intervals, and [`Range`] is the tagged union the rest of the
//! crate hands around.

pub(crate) mod assertions;
mod error;
mod interval;
mod interval_set;
#[allow(clippy::module_inception)]
mod range;
mod step;

pub use error::{RangeError, Result};
pub use interval::Interval;
pub use interval_set::IntervalSet;
pub use range::Range;
pub use step::Step;
