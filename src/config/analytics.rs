//! Progress analytics and mentor context configuration

use chrono::FixedOffset;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Analytics configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Upper bound on waiting for a progress narrative, in seconds
    #[serde(default = "default_narrative_timeout")]
    pub narrative_timeout_secs: u64,

    /// Offset of the calendar used for streaks and consistency, in minutes east of UTC
    #[serde(default)]
    pub utc_offset_minutes: i32,

    /// Most recent entries loaded for a progress report
    #[serde(default = "default_progress_entry_limit")]
    pub progress_entry_limit: u32,

    /// Most recent entries read for emotional insights
    #[serde(default = "default_insights_entry_limit")]
    pub insights_entry_limit: u32,

    /// Most recent entries loaded as mentor context, the new entry included
    #[serde(default = "default_mentor_history_limit")]
    pub mentor_history_limit: u32,
}

impl AnalyticsConfig {
    pub fn narrative_timeout(&self) -> Duration {
        Duration::from_secs(self.narrative_timeout_secs)
    }

    /// The configured offset as a chrono `FixedOffset`.
    pub fn utc_offset(&self) -> Result<FixedOffset, ValidationError> {
        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ValidationError::InvalidUtcOffset);
        }
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or(ValidationError::InvalidUtcOffset)
    }

    /// Validate analytics configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.narrative_timeout_secs == 0 || self.narrative_timeout_secs > 120 {
            return Err(ValidationError::InvalidNarrativeTimeout);
        }
        self.utc_offset()?;
        if self.progress_entry_limit == 0 {
            return Err(ValidationError::InvalidLimit("progress_entry_limit"));
        }
        if self.insights_entry_limit == 0 {
            return Err(ValidationError::InvalidLimit("insights_entry_limit"));
        }
        if self.mentor_history_limit == 0 {
            return Err(ValidationError::InvalidLimit("mentor_history_limit"));
        }
        Ok(())
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            narrative_timeout_secs: default_narrative_timeout(),
            utc_offset_minutes: 0,
            progress_entry_limit: default_progress_entry_limit(),
            insights_entry_limit: default_insights_entry_limit(),
            mentor_history_limit: default_mentor_history_limit(),
        }
    }
}

fn default_narrative_timeout() -> u64 {
    15
}

fn default_progress_entry_limit() -> u32 {
    100
}

fn default_insights_entry_limit() -> u32 {
    20
}

fn default_mentor_history_limit() -> u32 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_defaults() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.narrative_timeout(), Duration::from_secs(15));
        assert_eq!(config.progress_entry_limit, 100);
        assert_eq!(config.insights_entry_limit, 20);
        assert_eq!(config.mentor_history_limit, 5);
        assert_eq!(config.utc_offset().unwrap().local_minus_utc(), 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_offset_in_minutes() {
        let config = AnalyticsConfig {
            utc_offset_minutes: 330,
            ..Default::default()
        };
        assert_eq!(config.utc_offset().unwrap().local_minus_utc(), 330 * 60);
    }

    #[test]
    fn test_offset_beyond_fourteen_hours_is_rejected() {
        for minutes in [841, -841] {
            let config = AnalyticsConfig {
                utc_offset_minutes: minutes,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidUtcOffset));
        }
        let edge = AnalyticsConfig {
            utc_offset_minutes: -840,
            ..Default::default()
        };
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_zero_limits_are_rejected() {
        let config = AnalyticsConfig {
            progress_entry_limit: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLimit("progress_entry_limit"))
        );

        let config = AnalyticsConfig {
            insights_entry_limit: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLimit("insights_entry_limit"))
        );

        let config = AnalyticsConfig {
            mentor_history_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_narrative_timeout_bounds() {
        let config = AnalyticsConfig {
            narrative_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidNarrativeTimeout));
    }
}
