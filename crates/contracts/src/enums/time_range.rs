use serde::{Deserialize, Serialize};

/// Time window selected in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "24h")]
    Last24Hours,
    #[serde(rename = "2d")]
    Last2Days,
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "custom")]
    Custom,
}

impl TimeRange {
    pub fn code(&self) -> &'static str {
        match self {
            TimeRange::Last24Hours => "24h",
            TimeRange::Last2Days => "2d",
            TimeRange::Last7Days => "7d",
            TimeRange::Last30Days => "30d",
            TimeRange::Custom => "custom",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TimeRange::Last24Hours => "Last 24 hours",
            TimeRange::Last2Days => "Last 2 days",
            TimeRange::Last7Days => "Last 7 days",
            TimeRange::Last30Days => "Last 30 days",
            TimeRange::Custom => "Custom Range",
        }
    }

    pub fn all() -> Vec<TimeRange> {
        vec![
            TimeRange::Last24Hours,
            TimeRange::Last2Days,
            TimeRange::Last7Days,
            TimeRange::Last30Days,
            TimeRange::Custom,
        ]
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        TimeRange::Last2Days
    }
}
