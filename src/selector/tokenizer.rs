//! Splits a selector string into groups and groups into descriptors.
//!
//! Parsing is lenient: tokens that are not dates and groups whose instants go
//! backwards are dropped (and logged) rather than reported.

use tracing::debug;

use super::SelectorDescriptor;
use crate::instant::{CalendarUnit, Gap, Instant};
use crate::range::Interval;

const EXCLUDE_MARKER: char = '^';
const TOKEN_SEPARATOR: &str = ">>";

/// One group of a selector before its tokens are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGroup {
    pub exclude: bool,
    pub tokens: Vec<String>,
}

/// Collapses runs of whitespace into a single space.
fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits around `( ... )` pairs. Text between groups is kept as a segment of
/// its own; an unmatched `(` leaves the remainder as one segment.
fn segments(input: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = input;
    while let Some(open) = rest.find('(') {
        let inner = &rest[open + 1..];
        let Some(close) = inner.find(')') else {
            break;
        };
        out.push(&rest[..open]);
        out.push(&inner[..close]);
        rest = &inner[close + 1..];
    }
    out.push(rest);
    out
}

/// Splits `input` into groups, detecting the exclude marker and separating
/// tokens. Blank segments are skipped.
pub fn tokenize(input: &str) -> Vec<RawGroup> {
    let collapsed = collapse_whitespace(input);
    segments(&collapsed)
        .into_iter()
        .filter_map(|segment| {
            let segment = segment.trim_start();
            let (exclude, body) = match segment.strip_prefix(EXCLUDE_MARKER) {
                Some(body) => (true, body),
                None => (false, segment),
            };
            let tokens: Vec<String> = body
                .split(TOKEN_SEPARATOR)
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect();
            (!tokens.is_empty()).then_some(RawGroup { exclude, tokens })
        })
        .collect()
}

fn is_bare_year(token: &str) -> bool {
    token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit())
}

/// Expands one token into zero, one or two instants.
///
/// A bare four-digit year covers the whole year and ends one `gap` before the
/// next year starts.
pub fn expand_token<T: Instant>(token: &str, gap: Gap) -> Vec<T> {
    let Some(instant) = T::parse(token) else {
        debug!(token, "dropping unparseable selector token");
        return Vec::new();
    };
    if is_bare_year(token) {
        let start = instant.start_of(CalendarUnit::Year);
        let end = start.add(1, CalendarUnit::Year).subtract_gap(gap);
        vec![start, end]
    } else {
        vec![instant]
    }
}

/// Interprets a group, or returns `None` when it contributes nothing.
///
/// The expanded instants must be non-decreasing. Only the first and last
/// become the descriptor's bounds; the ones in between only have to respect
/// the ordering.
pub fn parse_group<T: Instant>(group: &RawGroup, gap: Gap) -> Option<SelectorDescriptor<T>> {
    let instants: Vec<T> = group
        .tokens
        .iter()
        .flat_map(|token| expand_token::<T>(token, gap))
        .collect();

    let (first, last) = match (instants.first(), instants.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => {
            debug!(tokens = ?group.tokens, "dropping selector group without instants");
            return None;
        }
    };
    if instants.windows(2).any(|pair| pair[0] > pair[1]) {
        debug!(tokens = ?group.tokens, "dropping selector group with decreasing instants");
        return None;
    }

    Some(SelectorDescriptor {
        exclude: group.exclude,
        interval: Interval::new(first, last),
    })
}
