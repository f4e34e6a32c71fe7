//! Calendar units and the boundary gap used by interval difference.

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

use crate::range::RangeError;

/// Calendar unit understood by the instant delegate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CalendarUnit {
    Year,
    Quarter,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl CalendarUnit {
    /// Length in milliseconds for units of fixed length, `None` for
    /// calendar-dependent ones (month, quarter, year).
    pub const fn fixed_millis(self) -> Option<i64> {
        match self {
            CalendarUnit::Millisecond => Some(1),
            CalendarUnit::Second => Some(1_000),
            CalendarUnit::Minute => Some(60_000),
            CalendarUnit::Hour => Some(3_600_000),
            CalendarUnit::Day => Some(86_400_000),
            CalendarUnit::Week => Some(604_800_000),
            CalendarUnit::Month | CalendarUnit::Quarter | CalendarUnit::Year => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CalendarUnit::Year => "year",
            CalendarUnit::Quarter => "quarter",
            CalendarUnit::Month => "month",
            CalendarUnit::Week => "week",
            CalendarUnit::Day => "day",
            CalendarUnit::Hour => "hour",
            CalendarUnit::Minute => "minute",
            CalendarUnit::Second => "second",
            CalendarUnit::Millisecond => "millisecond",
        }
    }
}

impl Display for CalendarUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a calendar unit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown calendar unit: {0}")]
pub struct ParseUnitError(pub String);

impl FromStr for CalendarUnit {
    type Err = ParseUnitError;

    /// Accepts singular and plural names plus the short aliases.
    /// Aliases are case sensitive (`M` is month, `m` is minute).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s {
            "y" => CalendarUnit::Year,
            "Q" => CalendarUnit::Quarter,
            "M" => CalendarUnit::Month,
            "w" => CalendarUnit::Week,
            "d" => CalendarUnit::Day,
            "h" => CalendarUnit::Hour,
            "m" => CalendarUnit::Minute,
            "s" => CalendarUnit::Second,
            "ms" => CalendarUnit::Millisecond,
            other => match other.to_ascii_lowercase().trim_end_matches('s') {
                "year" => CalendarUnit::Year,
                "quarter" => CalendarUnit::Quarter,
                "month" => CalendarUnit::Month,
                "week" => CalendarUnit::Week,
                "day" => CalendarUnit::Day,
                "hour" => CalendarUnit::Hour,
                "minute" => CalendarUnit::Minute,
                "second" => CalendarUnit::Second,
                "millisecond" => CalendarUnit::Millisecond,
                _ => return Err(ParseUnitError(s.to_string())),
            },
        };
        Ok(unit)
    }
}

/// Margin that separates the remaining pieces of a difference from the
/// subtracted interval.
///
/// Intervals are always closed, so excluding a boundary is expressed by
/// shifting it by one minimal unit. The quantity is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gap {
    quantity: i64,
    unit: CalendarUnit,
}

impl Gap {
    /// One second.
    pub const ONE_SECOND: Gap = Gap {
        quantity: 1,
        unit: CalendarUnit::Second,
    };

    /// Creates a gap of `quantity` `unit`s.
    ///
    /// # Errors
    ///
    /// [`RangeError::InvalidGap`] if `quantity` is zero or negative.
    pub const fn new(quantity: i64, unit: CalendarUnit) -> Result<Self, RangeError> {
        if quantity > 0 {
            Ok(Self { quantity, unit })
        } else {
            Err(RangeError::InvalidGap(quantity))
        }
    }

    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    pub const fn unit(&self) -> CalendarUnit {
        self.unit
    }
}

impl Default for Gap {
    fn default() -> Self {
        Self::ONE_SECOND
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Gap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            quantity: i64,
            unit: CalendarUnit,
        }

        let raw = <Raw as serde::Deserialize>::deserialize(deserializer)?;
        Gap::new(raw.quantity, raw.unit).map_err(serde::de::Error::custom)
    }
}

impl Display for Gap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.quantity, self.unit)
    }
}
