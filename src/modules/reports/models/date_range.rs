use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::timezone::{end_of_day, start_of_day};
use crate::core::{AppError, ReportTimezone, Result};

/// Inclusive calendar-day range a report covers
///
/// Runs from 00:00:00.000 on `start_date` to 23:59:59.999 on `end_date`,
/// both read in the report timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Build a range from user-supplied bounds
    ///
    /// Each bound is `YYYY-MM-DD` or an RFC 3339 timestamp (its calendar date in
    /// `timezone` is used). Returns `Ok(None)` when either bound is absent or blank,
    /// meaning "no filtering". A bound that is present but unparseable is an
    /// `InvalidArgument` error even when the other bound is missing.
    pub fn from_bounds(
        start: Option<&str>,
        end: Option<&str>,
        timezone: &ReportTimezone,
    ) -> Result<Option<Self>> {
        let start_date = parse_bound("start", start, timezone)?;
        let end_date = parse_bound("end", end, timezone)?;

        Ok(match (start_date, end_date) {
            (Some(start_date), Some(end_date)) => Some(Self::new(start_date, end_date)),
            _ => None,
        })
    }

    /// A range ending before it starts matches nothing
    pub fn is_inverted(&self) -> bool {
        self.start_date > self.end_date
    }

    /// Whether a UTC instant falls inside the range, boundaries included
    pub fn contains(&self, instant: DateTime<Utc>, timezone: &ReportTimezone) -> bool {
        let local = timezone.to_local(instant);
        local >= start_of_day(self.start_date) && local <= end_of_day(self.end_date)
    }
}

fn parse_bound(
    label: &str,
    raw: Option<&str>,
    timezone: &ReportTimezone,
) -> Result<Option<NaiveDate>> {
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(None),
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|instant| Some(timezone.local_date(instant.with_timezone(&Utc))))
        .map_err(|_| {
            AppError::invalid_argument(format!(
                "{} date '{}' must be YYYY-MM-DD or an RFC 3339 timestamp",
                label, raw
            ))
        })
}
