//! Time quantity helpers.
//!
//! Durations and iteration spans are `qtty` quantities expressed in
//! milliseconds. Callers may hand in any unit of the time dimension (seconds,
//! hours, days) and it is converted at the boundary.

use qtty::{Millisecond, Quantity, Unit};

/// Duration type returned by range measurements.
pub type Millis = Quantity<Millisecond>;

/// Marker trait for units that share the same physical dimension.
///
/// Automatically implemented for any pair of units where
/// `From::Dim == To::Dim`, so a span given in hours is accepted wherever a
/// millisecond span is expected.
///
/// # Example
///
/// ```ignore
/// use qtty::{Hour, Millisecond};
/// use chronoset::units::SameDim;
///
/// fn accepts_time<From: SameDim<Millisecond>>() {}
///
/// accepts_time::<Hour>(); // OK
/// // accepts_time::<Meter>(); // Error: different dimensions
/// ```
pub trait SameDim<To: Unit>: Unit<Dim = To::Dim> {}

impl<From, To> SameDim<To> for From
where
    From: Unit,
    To: Unit<Dim = From::Dim>,
{
}

/// Converts a quantity from one unit to another unit of the same dimension.
#[inline]
pub const fn convert<From, To>(q: Quantity<From>) -> Quantity<To>
where
    From: SameDim<To>,
    To: Unit,
{
    q.to_const::<To>()
}

/// Builds a millisecond quantity from an integral delta between two instants.
pub(crate) fn millis(delta: i64) -> Millis {
    Millis::new(delta as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::{Day, Hour, Second};

    #[test]
    fn hours_to_millis() {
        let hours = Quantity::<Hour>::new(2.0);
        let ms: Millis = convert(hours);
        assert!((ms.value() - 7_200_000.0).abs() < 1e-6);
    }

    #[test]
    fn millis_to_days() {
        let day: Quantity<Day> = convert(millis(86_400_000));
        assert!((day.value() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn seconds_round_trip_through_millis() {
        let seconds = Quantity::<Second>::new(1.5);
        let ms: Millis = convert(seconds);
        let back: Quantity<Second> = convert(ms);
        assert!((ms.value() - 1500.0).abs() < 1e-9);
        assert!((back.value() - 1.5).abs() < 1e-12);
    }
}
