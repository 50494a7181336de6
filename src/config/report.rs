use serde::Deserialize;

use crate::core::{AppError, ReportTimezone, Result};
use crate::modules::orders::services::{NegativeTotalPolicy, OrderTotalCalculator};
use crate::modules::reports::services::ReportOptions;

/// Largest offset any real timezone uses
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// How reports are computed
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Offset east of UTC in which report days start and end
    pub utc_offset_minutes: i32,
    pub negative_totals: NegativeTotalPolicy,
}

impl ReportConfig {
    pub fn validate(&self) -> Result<()> {
        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(AppError::configuration(format!(
                "REPORT_UTC_OFFSET_MINUTES must be within ±{}, got {}",
                MAX_OFFSET_MINUTES, self.utc_offset_minutes
            )));
        }
        Ok(())
    }

    pub fn options(&self) -> Result<ReportOptions> {
        Ok(ReportOptions {
            timezone: ReportTimezone::from_offset_minutes(self.utc_offset_minutes)?,
            calculator: OrderTotalCalculator::new(self.negative_totals),
        })
    }
}
