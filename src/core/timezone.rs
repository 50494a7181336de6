use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::core::{AppError, Result};

/// Brasília time (UTC-3), no daylight saving since 2019
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = -180;

/// Fixed offset in which calendar-day boundaries of a report are evaluated.
/// Order timestamps are stored as UTC and converted to this offset for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportTimezone {
    offset: FixedOffset,
}

impl ReportTimezone {
    /// Build from an offset in minutes east of UTC (negative for the Americas)
    pub fn from_offset_minutes(minutes: i32) -> Result<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(|offset| Self { offset })
            .ok_or_else(|| {
                AppError::configuration(format!("UTC offset out of range: {} minutes", minutes))
            })
    }

    pub fn utc() -> Self {
        Self {
            offset: FixedOffset::east_opt(0).expect("Valid offset"),
        }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Wall-clock time of a UTC instant in this timezone
    pub fn to_local(&self, utc_time: DateTime<Utc>) -> NaiveDateTime {
        utc_time.with_timezone(&self.offset).naive_local()
    }

    /// Calendar date of a UTC instant in this timezone
    pub fn local_date(&self, utc_time: DateTime<Utc>) -> NaiveDate {
        self.to_local(utc_time).date()
    }
}

impl Default for ReportTimezone {
    fn default() -> Self {
        Self {
            offset: FixedOffset::east_opt(DEFAULT_UTC_OFFSET_MINUTES * 60).expect("Valid offset"),
        }
    }
}

/// 00:00:00.000 of the given day
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(0, 0, 0, 0).expect("Valid time")
}

/// 23:59:59.999 of the given day
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999).expect("Valid time")
}
