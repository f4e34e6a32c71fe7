//! [`Instant`] adapter for `chrono::DateTime<Utc>`.

use chrono::{
    DateTime, Datelike, Months, NaiveDate, NaiveDateTime, SecondsFormat, TimeDelta, Utc,
};

use super::{CalendarUnit, Instant};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

fn clamp_millis(millis: i128) -> DateTime<Utc> {
    let min = DateTime::<Utc>::MIN_UTC.timestamp_millis() as i128;
    let max = DateTime::<Utc>::MAX_UTC.timestamp_millis() as i128;
    let clamped = millis.clamp(min, max) as i64;
    DateTime::from_timestamp_millis(clamped).unwrap_or(if millis < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

fn shift_months(instant: DateTime<Utc>, months: i64) -> DateTime<Utc> {
    let saturated = if months < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    };
    let Ok(magnitude) = u32::try_from(months.unsigned_abs()) else {
        return saturated;
    };
    let shifted = if months < 0 {
        instant.checked_sub_months(Months::new(magnitude))
    } else {
        instant.checked_add_months(Months::new(magnitude))
    };
    shifted.unwrap_or(saturated)
}

fn months_per(unit: CalendarUnit) -> Option<i64> {
    match unit {
        CalendarUnit::Month => Some(1),
        CalendarUnit::Quarter => Some(3),
        CalendarUnit::Year => Some(12),
        _ => None,
    }
}

/// Whole calendar months from `earlier` to `later`, truncated toward zero.
fn month_diff(later: &DateTime<Utc>, earlier: &DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());
    if months > 0 && shift_months(*earlier, months) > *later {
        months -= 1;
    } else if months < 0 && shift_months(*earlier, months) < *later {
        months += 1;
    }
    months
}

impl Instant for DateTime<Utc> {
    /// Accepts RFC 3339, naive date-times (read as UTC), `YYYY-MM-DD`,
    /// `YYYY-MM` and a bare four-digit `YYYY`.
    fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Some(parsed.with_timezone(&Utc));
        }
        for format in DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
                return Some(naive.and_utc());
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Some(midnight(date));
        }
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d") {
            return Some(midnight(date));
        }
        if text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit()) {
            let year = text.parse::<i32>().ok()?;
            return NaiveDate::from_ymd_opt(year, 1, 1).map(midnight);
        }
        None
    }

    fn display(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    /// Weeks start on Monday.
    fn start_of(&self, unit: CalendarUnit) -> Self {
        let date = self.date_naive();
        let first_day = match unit {
            CalendarUnit::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1),
            CalendarUnit::Quarter => {
                NaiveDate::from_ymd_opt(date.year(), (date.month0() / 3) * 3 + 1, 1)
            }
            CalendarUnit::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1),
            CalendarUnit::Week => {
                let back = i64::from(date.weekday().num_days_from_monday());
                date.checked_sub_signed(TimeDelta::days(back))
            }
            CalendarUnit::Day => Some(date),
            CalendarUnit::Hour | CalendarUnit::Minute | CalendarUnit::Second => {
                let step = i128::from(unit.fixed_millis().unwrap_or(1));
                let millis = i128::from(self.timestamp_millis());
                return clamp_millis(millis.div_euclid(step) * step);
            }
            CalendarUnit::Millisecond => {
                return clamp_millis(i128::from(self.timestamp_millis()));
            }
        };
        first_day.map(midnight).unwrap_or(*self)
    }

    fn end_of(&self, unit: CalendarUnit) -> Self {
        self.start_of(unit).add(1, unit).add_millis(-1)
    }

    fn add(&self, quantity: i64, unit: CalendarUnit) -> Self {
        match (unit.fixed_millis(), months_per(unit)) {
            (Some(step), _) => {
                let millis = i128::from(self.timestamp_millis())
                    + i128::from(quantity) * i128::from(step);
                // Keep sub-millisecond precision of the original instant.
                let sub_millis = self.timestamp_subsec_nanos() % 1_000_000;
                let base = clamp_millis(millis);
                base.checked_add_signed(TimeDelta::nanoseconds(i64::from(sub_millis)))
                    .unwrap_or(base)
            }
            (None, Some(months)) => shift_months(*self, quantity.saturating_mul(months)),
            (None, None) => *self,
        }
    }

    fn subtract(&self, quantity: i64, unit: CalendarUnit) -> Self {
        self.add(quantity.saturating_neg(), unit)
    }

    fn add_millis(&self, millis: i64) -> Self {
        self.add(millis, CalendarUnit::Millisecond)
    }

    fn diff(&self, earlier: &Self, unit: CalendarUnit) -> i64 {
        match (unit.fixed_millis(), months_per(unit)) {
            (Some(step), _) => {
                let delta = self.timestamp_millis() - earlier.timestamp_millis();
                delta / step
            }
            (None, Some(months)) => month_diff(self, earlier) / months,
            (None, None) => 0,
        }
    }

    fn now() -> Self {
        Utc::now()
    }
}
