use std::fmt::Display;

use qtty::Quantity;

use super::error::{RangeError, Result};
use crate::instant::CalendarUnit;
use crate::units::{self, Millis, SameDim};

/// How an iteration advances through a range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// One calendar unit at a time, e.g. every month.
    Unit(CalendarUnit),
    /// A fixed span, spread evenly from each interval's start.
    Span(Millis),
}

impl Step {
    /// Fixed span given in any time unit.
    pub fn span<S: SameDim<qtty::Millisecond>>(span: Quantity<S>) -> Self {
        Step::Span(units::convert(span))
    }
}

impl From<CalendarUnit> for Step {
    fn from(unit: CalendarUnit) -> Self {
        Step::Unit(unit)
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Unit(unit) => write!(f, "every {unit}"),
            Step::Span(span) => write!(f, "every {} ms", span.value()),
        }
    }
}

/// Shortest span an iteration accepts: instants move in whole milliseconds.
const MIN_SPAN_MS: f64 = 1.0;

/// Validates a span, returning its length in milliseconds.
pub(crate) fn checked_span(span: Millis) -> Result<f64> {
    let value = span.value();
    if value.is_finite() && value >= MIN_SPAN_MS {
        Ok(value)
    } else {
        Err(RangeError::DegenerateStep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::{Hour, Second};

    #[test]
    fn spans_are_converted_to_millis() {
        let step = Step::span(Quantity::<Hour>::new(1.0));
        assert_eq!(step, Step::Span(units::millis(3_600_000)));
        assert_eq!(step.to_string(), "every 3600000 ms");
    }

    #[test]
    fn span_below_a_millisecond_is_degenerate() {
        assert_eq!(checked_span(Millis::new(0.25)), Err(RangeError::DegenerateStep));
        assert_eq!(checked_span(Millis::new(1e-290)), Err(RangeError::DegenerateStep));
        assert_eq!(checked_span(Millis::new(1.0)), Ok(1.0));
        assert!(checked_span(units::convert(Quantity::<Second>::new(0.0005))).is_err());
    }
}
