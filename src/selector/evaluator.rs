use tracing::{debug, trace};

use super::SelectorDescriptor;
use crate::instant::{Gap, Instant};
use crate::range::{Range, RangeError, Result};

/// Folds descriptors left to right into one range.
///
/// The first descriptor seeds the range whatever its exclude flag; each later
/// one is added, or subtracted with `gap`, when excluded.
///
/// # Errors
///
/// [`RangeError::EmptyRange`] when there are no descriptors or the fold ends
/// with nothing covered.
pub fn evaluate<T: Instant>(descriptors: &[SelectorDescriptor<T>], gap: Gap) -> Result<Range<T>> {
    let mut range: Option<Range<T>> = None;
    for descriptor in descriptors {
        let interval = &descriptor.interval;
        range = Some(match range {
            None => Range::from(*interval),
            Some(current) if descriptor.exclude => current.difference_with_gap(interval, gap),
            Some(current) => current.union(interval),
        });
        trace!(
            exclude = descriptor.exclude,
            %interval,
            "folded selector descriptor"
        );
    }

    match range {
        Some(range) if !range.is_empty() => {
            debug!(%range, "evaluated selector");
            Ok(range)
        }
        _ => Err(RangeError::EmptyRange),
    }
}

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use crate::test_support::{years, UtcInstant};

    fn add(from: i32, to: i32) -> SelectorDescriptor<UtcInstant> {
        SelectorDescriptor {
            exclude: false,
            interval: years(from, to),
        }
    }

    fn sub(from: i32, to: i32) -> SelectorDescriptor<UtcInstant> {
        SelectorDescriptor {
            exclude: true,
            interval: years(from, to),
        }
    }

    #[test]
    fn no_descriptors_is_empty() {
        let result = evaluate::<UtcInstant>(&[], Gap::default());
        assert_eq!(result, Err(RangeError::EmptyRange));
    }

    #[test]
    fn first_descriptor_seeds_even_when_excluded() {
        let range = evaluate(&[sub(2055, 2070)], Gap::default()).unwrap();
        assert_eq!(range, Range::Single(years(2055, 2070)));
    }

    #[test]
    fn fold_applies_union_and_difference() {
        let range = evaluate(
            &[add(1990, 2000), add(2010, 2020), sub(2010, 2020)],
            Gap::default(),
        )
        .unwrap();
        assert_eq!(range.intervals(), vec![years(1990, 2000)]);
    }

    #[test]
    fn fully_consumed_is_empty() {
        let result = evaluate(&[add(1990, 2000), sub(1980, 2010)], Gap::default());
        assert_eq!(result, Err(RangeError::EmptyRange));
    }
}
