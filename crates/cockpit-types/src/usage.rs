//! Plan usage quota reported by the remote usage endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageData {
    pub plan_name: String,
    /// Percent of the rolling five hour window used
    pub five_hour: f64,
    /// Percent of the rolling seven day window used
    pub seven_day: f64,
    pub five_hour_reset_at: Option<DateTime<Utc>>,
    pub seven_day_reset_at: Option<DateTime<Utc>>,
}
