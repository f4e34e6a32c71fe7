use super::interval::Interval;
use crate::instant::Instant;

/// Returns true if `intervals` is canonical: sorted by start and pairwise
/// disjoint (each end strictly before the next start).
pub fn is_canonical<T: Instant>(intervals: &[Interval<T>]) -> bool {
    intervals.windows(2).all(|w| w[0].end() < w[1].start())
}
