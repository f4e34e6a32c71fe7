//! Configuration for selector parsing and evaluation.

use crate::instant::Gap;

/// Knobs of the selector pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectorConfig {
    /// Margin used for exclusions and for closing bare-year tokens: `2001`
    /// ends one gap before `2002` starts.
    pub gap: Gap,
}

impl SelectorConfig {
    pub fn with_gap(mut self, gap: Gap) -> Self {
        self.gap = gap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instant::CalendarUnit;

    #[test]
    fn default_uses_one_second_gap() {
        assert_eq!(SelectorConfig::default().gap, Gap::ONE_SECOND);
    }

    #[test]
    fn with_gap_overrides() {
        let config = SelectorConfig::default().with_gap(Gap::new(1, CalendarUnit::Millisecond).unwrap());
        assert_eq!(config.gap.unit(), CalendarUnit::Millisecond);
    }

    #[test]
    fn zero_gap_is_rejected_before_it_reaches_the_config() {
        let gap = Gap::new(0, CalendarUnit::Second);
        assert_eq!(gap, Err(crate::range::RangeError::InvalidGap(0)));
    }
}
