//! Publication dates and date ranges.
//!
//! A catalog date may be as precise as the source allows: a year (`1969`),
//! a month (`1969-03`) or a day (`1969-03-15`). Each [`PartialDate`] covers
//! the whole interval of calendar days it names, and a [`DateQuery`] matches
//! a stored date when the two intervals overlap.
//!
//! # Examples
//!
//! ```
//! use bookcat::date::{DateQuery, PartialDate};
//!
//! let published = PartialDate::parse("1969-03-15").unwrap();
//! assert!(DateQuery::parse("1969").unwrap().matches(&published));
//! assert!(DateQuery::parse("1960..1970").unwrap().matches(&published));
//! assert!(!DateQuery::parse("1970..").unwrap().matches(&published));
//! ```

use crate::error::{CatalogError, Result};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref DATE_PATTERN: Regex =
        Regex::new(r"^(\d{4})(?:-(\d{2})(?:-(\d{2}))?)?$").expect("date pattern is valid");
}

/// Range separator in date queries.
const RANGE_SEPARATOR: &str = "..";

/// How much of a date was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// `YYYY`
    Year,
    /// `YYYY-MM`
    Month,
    /// `YYYY-MM-DD`
    Day,
}

/// A calendar date known to year, month or day precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialDate {
    first: NaiveDate,
    last: NaiveDate,
    precision: Precision,
}

impl PartialDate {
    /// Parse `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if the text has another shape or
    /// names a day that does not exist (such as `2023-02-30`).
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || {
            CatalogError::Validation(format!(
                "`{text}` is not a date (expected YYYY, YYYY-MM or YYYY-MM-DD)"
            ))
        };

        let caps = DATE_PATTERN.captures(text).ok_or_else(invalid)?;
        let year: i32 = caps[1].parse().map_err(|_| invalid())?;
        let month: Option<u32> = caps
            .get(2)
            .map(|m| m.as_str().parse())
            .transpose()
            .map_err(|_| invalid())?;
        let day: Option<u32> = caps
            .get(3)
            .map(|m| m.as_str().parse())
            .transpose()
            .map_err(|_| invalid())?;

        let (first, last, precision) = match (month, day) {
            (None, _) => (
                NaiveDate::from_ymd_opt(year, 1, 1),
                NaiveDate::from_ymd_opt(year, 12, 31),
                Precision::Year,
            ),
            (Some(month), None) => (
                NaiveDate::from_ymd_opt(year, month, 1),
                last_day_of_month(year, month),
                Precision::Month,
            ),
            (Some(month), Some(day)) => {
                let date = NaiveDate::from_ymd_opt(year, month, day);
                (date, date, Precision::Day)
            },
        };

        match (first, last) {
            (Some(first), Some(last)) => Ok(PartialDate {
                first,
                last,
                precision,
            }),
            _ => Err(invalid()),
        }
    }

    /// First calendar day covered by this date.
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Last calendar day covered by this date.
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        self.last
    }

    /// How precisely this date was given.
    #[must_use]
    pub fn precision(&self) -> Precision {
        self.precision
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

impl fmt::Display for PartialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern = match self.precision {
            Precision::Year => "%Y",
            Precision::Month => "%Y-%m",
            Precision::Day => "%Y-%m-%d",
        };
        write!(f, "{}", self.first.format(pattern))
    }
}

/// A date predicate: a single date or an inclusive, possibly open, range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateQuery {
    /// Matches dates overlapping this one
    On(PartialDate),
    /// Matches dates overlapping `from..to`; a missing bound is unbounded
    Between {
        /// Lower bound (inclusive)
        from: Option<PartialDate>,
        /// Upper bound (inclusive)
        to: Option<PartialDate>,
    },
}

impl DateQuery {
    /// Parse `D`, `D..D`, `D..` or `..D` where each `D` is a [`PartialDate`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] for malformed dates, a bare `..`,
    /// or a range whose start lies after its end.
    pub fn parse(text: &str) -> Result<Self> {
        let Some((from, to)) = text.split_once(RANGE_SEPARATOR) else {
            return PartialDate::parse(text).map(DateQuery::On);
        };

        let bound = |part: &str| {
            let part = part.trim();
            if part.is_empty() {
                Ok(None)
            } else {
                PartialDate::parse(part).map(Some)
            }
        };
        let from = bound(from)?;
        let to = bound(to)?;

        match (from, to) {
            (None, None) => Err(CatalogError::Validation(
                "a date range needs at least one bound".to_string(),
            )),
            (Some(start), Some(end)) if start.first > end.last => Err(CatalogError::Validation(
                format!("date range `{text}` starts after it ends"),
            )),
            _ => Ok(DateQuery::Between { from, to }),
        }
    }

    /// Check whether a stored date overlaps this query.
    #[must_use]
    pub fn matches(&self, date: &PartialDate) -> bool {
        match self {
            DateQuery::On(on) => date.first <= on.last && on.first <= date.last,
            DateQuery::Between { from, to } => {
                from.map_or(true, |from| from.first <= date.last)
                    && to.map_or(true, |to| date.first <= to.last)
            },
        }
    }

    /// The single date of an [`DateQuery::On`] query.
    #[must_use]
    pub fn as_single(&self) -> Option<&PartialDate> {
        match self {
            DateQuery::On(date) => Some(date),
            DateQuery::Between { .. } => None,
        }
    }
}

impl fmt::Display for DateQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateQuery::On(date) => write!(f, "{date}"),
            DateQuery::Between { from, to } => {
                if let Some(from) = from {
                    write!(f, "{from}")?;
                }
                f.write_str(RANGE_SEPARATOR)?;
                if let Some(to) = to {
                    write!(f, "{to}")?;
                }
                Ok(())
            },
        }
    }
}
