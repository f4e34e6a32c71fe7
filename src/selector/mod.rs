//! The selector mini-language.
//!
//! A selector describes a range as a left-to-right fold of parenthesised
//! groups:
//!
//! ```text
//! (1990>>2000)(2010>>2050)(^1980>>1995)
//! ```
//!
//! Each group holds one or more date tokens separated by `>>`. A bare
//! four-digit year stands for the whole year. A leading `^` turns the group
//! into an exclusion. The first group seeds the range; later groups are added
//! or, when excluded, subtracted.
//!
//! Parsing runs in two stages that can be used on their own:
//! - [`tokenize`] splits the text into [`RawGroup`]s,
//! - [`parse_group`] turns a group into a [`SelectorDescriptor`],
//!
//! and [`evaluate`] folds the descriptors into a [`Range`].

mod config;
mod evaluator;
mod tokenizer;

#[cfg(all(test, feature = "chrono"))]
mod tests;

use std::ops::Deref;

use tracing::debug;

use crate::instant::Instant;
use crate::range::{Interval, Range, Result};

pub use config::SelectorConfig;
pub use evaluator::evaluate;
pub use tokenizer::{expand_token, parse_group, tokenize, RawGroup};

/// One interpreted group of a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize",
        deserialize = "T: serde::Deserialize<'de>"
    ))
)]
pub struct SelectorDescriptor<T: Instant> {
    pub exclude: bool,
    pub interval: Interval<T>,
}

/// An evaluated selector: the resulting range plus the descriptors it was
/// built from.
///
/// Dereferences to the [`Range`]. The descriptors are kept for inspection
/// only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T: Instant> {
    range: Range<T>,
    descriptors: Vec<SelectorDescriptor<T>>,
}

impl<T: Instant> Selection<T> {
    pub fn range(&self) -> &Range<T> {
        &self.range
    }

    pub fn descriptors(&self) -> &[SelectorDescriptor<T>] {
        &self.descriptors
    }

    pub fn into_range(self) -> Range<T> {
        self.range
    }
}

impl<T: Instant> Deref for Selection<T> {
    type Target = Range<T>;

    fn deref(&self) -> &Range<T> {
        &self.range
    }
}

/// Parses and evaluates selectors with a fixed [`SelectorConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Selector {
    config: SelectorConfig,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Tokenizes and interprets `input` without evaluating it.
    pub fn descriptors<T: Instant>(&self, input: &str) -> Vec<SelectorDescriptor<T>> {
        tokenize(input)
            .iter()
            .filter_map(|group| parse_group(group, self.config.gap))
            .collect()
    }

    /// Parses and evaluates `input`.
    ///
    /// # Errors
    ///
    /// [`RangeError::EmptyRange`](crate::range::RangeError::EmptyRange) when
    /// no group survives parsing or the result covers nothing.
    pub fn parse<T: Instant>(&self, input: &str) -> Result<Selection<T>> {
        let descriptors = self.descriptors(input);
        debug!(
            selector = input,
            groups = descriptors.len(),
            "parsed selector"
        );
        let range = evaluate(&descriptors, self.config.gap)?;
        Ok(Selection { range, descriptors })
    }
}
