//! End-to-end selector suite: text in, range out.

use super::*;
use crate::instant::{CalendarUnit, Gap};
use crate::range::RangeError;
use crate::test_support::{at, init_tracing, iv, years, UtcInstant};

fn select(input: &str) -> Result<Selection<UtcInstant>> {
    init_tracing();
    Selector::new().parse(input)
}

fn intervals(input: &str) -> Vec<Interval<UtcInstant>> {
    select(input).unwrap().intervals()
}

mod scenarios {
    use super::*;

    #[test]
    fn single_year_span() {
        let selection = select("(1990>>2001)").unwrap();
        assert_eq!(
            *selection.range(),
            Range::Single(iv("1990-01-01T00:00:00", "2001-12-31T23:59:59"))
        );
    }

    #[test]
    fn exclusions_consume_earlier_groups() {
        assert_eq!(
            intervals("(1990>>2000)(2010>>2050)(^2010>>2050)(2002>>2005)(^1985>>2001)"),
            vec![iv("2002-01-01T00:00:00", "2005-12-31T23:59:59")]
        );
    }

    #[test]
    fn exclusion_trims_head_of_first_member() {
        assert_eq!(
            intervals("(1990>>2000)(2010>>2050)(2080>>2090)(2100>>2200)(^1980>>1995)"),
            vec![
                iv("1996-01-01T00:00:00", "2000-12-31T23:59:59"),
                years(2010, 2050),
                years(2080, 2090),
                years(2100, 2200),
            ]
        );
    }

    #[test]
    fn adding_then_removing_the_same_span_is_empty() {
        assert_eq!(
            select("(2055>>2070)(^2055>>2070)"),
            Err(RangeError::EmptyRange)
        );
    }

    #[test]
    fn leading_exclusion_still_seeds_the_range() {
        assert_eq!(
            intervals("(^2055>>2070)(2055>>2070)(^2055>>2070)(2055>>2070)"),
            vec![iv("2055-01-01T00:00:00", "2070-12-31T23:59:59")]
        );
    }
}

mod composition {
    use super::*;

    #[test]
    fn two_disjoint_groups() {
        assert_eq!(
            intervals("(1990>>2001)(2005>>2008)"),
            vec![years(1990, 2001), years(2005, 2008)]
        );
    }

    #[test]
    fn exclusion_in_a_hole_changes_nothing() {
        assert_eq!(
            intervals("(1990>>2000)(1980>>2050)(2060>>2080)(^2055>>2057)"),
            vec![years(1980, 2050), years(2060, 2080)]
        );
    }

    #[test]
    fn alternating_ending_on_exclusion_is_empty() {
        assert_eq!(
            select("(2055>>2070)(^2055>>2070)(2055>>2070)(^2055>>2070)"),
            Err(RangeError::EmptyRange)
        );
        assert_eq!(
            select("(1990>>2000)(1950>>2050)(^1950>>2050)"),
            Err(RangeError::EmptyRange)
        );
    }

    #[test]
    fn exclusion_leaves_tail_of_later_member() {
        assert_eq!(
            intervals("(1990>>2000)(2010>>2050)(^1985>>2025)"),
            vec![iv("2026-01-01T00:00:00", "2050-12-31T23:59:59")]
        );
        assert_eq!(
            intervals("(1990>>2000)(2010>>2050)(2070>>2080)(^1985>>2065)"),
            vec![years(2070, 2080)]
        );
        assert_eq!(
            intervals("(1990>>2000)(2010>>2050)(2080>>2090)(2100>>2200)(^1985>>2095)"),
            vec![years(2100, 2200)]
        );
        assert_eq!(
            intervals("(1990>>2000)(2010>>2050)(2080>>2090)(2100>>2200)(^1980>>2150)"),
            vec![iv("2151-01-01T00:00:00", "2200-12-31T23:59:59")]
        );
    }

    #[test]
    fn exclusion_leaves_head_of_first_member() {
        assert_eq!(
            intervals("(1990>>2000)(2010>>2050)(2080>>2090)(2100>>2200)(^1995>>2300)"),
            vec![iv("1990-01-01T00:00:00", "1994-12-31T23:59:59")]
        );
    }

    #[test]
    fn overlapping_groups_merge_before_exclusion() {
        assert_eq!(
            intervals("(1990>>2000)(1995>>2050)(2080>>2090)(2100>>2200)(^2150>>2300)"),
            vec![
                years(1990, 2050),
                years(2080, 2090),
                iv("2100-01-01T00:00:00", "2149-12-31T23:59:59"),
            ]
        );
    }

    #[test]
    fn exclusion_in_the_middle_splits() {
        assert_eq!(
            intervals("(2000>>2010)(^2004>>2005)"),
            vec![
                iv("2000-01-01T00:00:00", "2003-12-31T23:59:59"),
                iv("2006-01-01T00:00:00", "2010-12-31T23:59:59"),
            ]
        );
    }
}

mod leniency {
    use super::*;

    #[test]
    fn dated_tokens() {
        assert_eq!(
            intervals("(2020-03-01>>2020-03-15T12:00:00)"),
            vec![iv("2020-03-01", "2020-03-15T12:00:00")]
        );
    }

    #[test]
    fn single_token_is_a_point() {
        let selection = select("(2020-03-01)").unwrap();
        assert!(selection.contains(at("2020-03-01")));
        assert!(!selection.contains(at("2020-03-01T00:00:01")));
    }

    #[test]
    fn single_year_token_covers_the_year() {
        assert_eq!(intervals("(2020)"), vec![years(2020, 2020)]);
    }

    #[test]
    fn bad_groups_are_skipped() {
        assert_eq!(
            intervals("(garbage)(2001>>1990)(1990>>2000)"),
            vec![years(1990, 2000)]
        );
    }

    #[test]
    fn bad_tokens_are_skipped() {
        assert_eq!(intervals("(1990>>whenever>>2000)"), vec![years(1990, 2000)]);
    }

    #[test]
    fn whitespace_is_tolerated() {
        assert_eq!(
            intervals("  ( 1990 >> 2000 )   ( ^ 1995 >> 2000 ) "),
            vec![iv("1990-01-01T00:00:00", "1994-12-31T23:59:59")]
        );
    }

    #[test]
    fn nothing_parseable_is_empty() {
        assert_eq!(select(""), Err(RangeError::EmptyRange));
        assert_eq!(select("(nope)(never)"), Err(RangeError::EmptyRange));
    }
}

mod provenance {
    use super::*;

    #[test]
    fn descriptors_are_kept_in_order() {
        let selection = select("(1990>>2000)(garbage)(^1995>>1996)").unwrap();
        let descriptors = selection.descriptors();
        assert_eq!(descriptors.len(), 2);
        assert!(!descriptors[0].exclude);
        assert_eq!(descriptors[0].interval, years(1990, 2000));
        assert!(descriptors[1].exclude);
        assert_eq!(descriptors[1].interval, years(1995, 1996));
    }

    #[test]
    fn into_range_drops_descriptors() {
        let range = select("(1990>>2000)").unwrap().into_range();
        assert_eq!(range, Range::Single(years(1990, 2000)));
    }
}

mod configuration {
    use super::*;

    #[test]
    fn custom_gap_applies_to_years_and_exclusions() {
        init_tracing();
        let selector = Selector::with_config(
            SelectorConfig::default().with_gap(Gap::new(1, CalendarUnit::Day).unwrap()),
        );
        let selection: Selection<UtcInstant> = selector.parse("(2000>>2001)(^2000-06-01)").unwrap();
        assert_eq!(
            selection.intervals(),
            vec![
                iv("2000-01-01", "2000-05-31"),
                iv("2000-06-02", "2001-12-31"),
            ]
        );
        assert_eq!(selector.config().gap, Gap::new(1, CalendarUnit::Day).unwrap());
    }
}
