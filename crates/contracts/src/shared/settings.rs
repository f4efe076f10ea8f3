use anyhow::{bail, Context};
use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};

use super::date_utils::iso_date;

/// Which calendar an instant is truncated in when computing "today"
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimeZonePolicy {
    /// Date of the instant in UTC
    #[default]
    Utc,
    /// Date in the host's local time zone
    Local,
    /// Date at a fixed offset east of UTC
    FixedOffset { seconds: i32 },
}

impl TimeZonePolicy {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let TimeZonePolicy::FixedOffset { seconds } = *self {
            if FixedOffset::east_opt(seconds).is_none() {
                bail!("fixed offset out of range: {} seconds", seconds);
            }
        }
        Ok(())
    }

    /// `YYYY-MM-DD` of `instant` under this policy.
    /// An out-of-range fixed offset falls back to UTC.
    pub fn date_of(&self, instant: DateTime<Utc>) -> String {
        match *self {
            TimeZonePolicy::Utc => iso_date(&instant),
            TimeZonePolicy::Local => iso_date(&instant.with_timezone(&Local)),
            TimeZonePolicy::FixedOffset { seconds } => match FixedOffset::east_opt(seconds) {
                Some(offset) => iso_date(&instant.with_timezone(&offset)),
                None => iso_date(&instant),
            },
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DateFieldSettings {
    pub time_zone: TimeZonePolicy,
}

impl DateFieldSettings {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let settings: Self =
            serde_json::from_str(json).context("failed to parse date field settings")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.time_zone
            .validate()
            .context("invalid time_zone in date field settings")
    }
}
