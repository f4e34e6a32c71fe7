//! chronoset - date/time interval algebra
//!
//! Single intervals and sorted sets of disjoint intervals with containment,
//! overlap, union, difference and stepping, plus a small selector language
//! that folds groups such as `(1990>>2000)(^1995>>1996)` into a range.
//!
//! Calendar math is delegated to an [`Instant`] implementation; the `chrono`
//! feature (on by default) provides one for `chrono::DateTime<Utc>`.

pub mod instant;
pub mod range;
pub mod selector;
pub mod units;

pub use instant::{CalendarUnit, Gap, Instant};
pub use range::{Interval, IntervalSet, Range, RangeError, Result, Step};
pub use selector::{Selection, Selector, SelectorConfig, SelectorDescriptor};

/// Builds the single interval `[start, end]`.
///
/// # Panics
///
/// Panics if `start > end`.
pub fn make_range<T: Instant>(start: T, end: T) -> Range<T> {
    Range::from_bounds(start, end)
}

/// The calendar `unit` containing the current instant, e.g. this month.
pub fn make_range_for<T: Instant>(unit: CalendarUnit) -> Range<T> {
    make_range_at(T::now(), unit)
}

/// The calendar `unit` containing `anchor`.
pub fn make_range_at<T: Instant>(anchor: T, unit: CalendarUnit) -> Range<T> {
    Range::from_calendar_unit(anchor, unit)
}

/// Parses and evaluates a selector with the default configuration.
///
/// # Errors
///
/// [`RangeError::EmptyRange`] when the selector covers nothing.
pub fn parse_selector<T: Instant>(selector: &str) -> Result<Selection<T>> {
    Selector::new().parse(selector)
}

/// Returns true if `instant` lies within `range`.
pub fn is_in_range<T: Instant>(instant: T, range: &Range<T>) -> bool {
    range.contains(instant)
}

#[cfg(all(test, feature = "chrono"))]
pub(crate) mod test_support {
    use crate::instant::Instant;
    use crate::range::Interval;

    pub type UtcInstant = chrono::DateTime<chrono::Utc>;

    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    pub fn at(text: &str) -> UtcInstant {
        <UtcInstant as Instant>::parse(text).unwrap()
    }

    pub fn iv(start: &str, end: &str) -> Interval<UtcInstant> {
        Interval::new(at(start), at(end))
    }

    /// `[from-01-01T00:00:00, to-12-31T23:59:59]`, the span a selector
    /// `(from>>to)` produces.
    pub fn years(from: i32, to: i32) -> Interval<UtcInstant> {
        iv(&format!("{from}-01-01"), &format!("{to}-12-31T23:59:59"))
    }
}
