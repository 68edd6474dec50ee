//! Schedule configuration

use serde::Deserialize;

use core_kernel::{Currency, Timezone};

use crate::error::ScheduleError;
use crate::labels::{LabelFormat, DEFAULT_DAY_FORMAT, DEFAULT_MONTH_FORMAT, DEFAULT_RANGE_SEPARATOR};
use crate::stay::{NightlyRate, StayPeriod};

/// Environment variable prefix for schedule settings
pub const ENV_PREFIX: &str = "SCHEDULE";

/// Schedule configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Currency nightly prices are quoted in
    pub currency: Currency,
    /// Jurisdiction used to turn timestamps into calendar dates
    pub timezone: Timezone,
    /// strftime pattern for `stay_month`
    pub month_format: String,
    /// strftime pattern for each end of `stay_dates`
    pub day_format: String,
    /// Text between the two ends of `stay_dates`
    pub range_separator: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            timezone: Timezone::default(),
            month_format: DEFAULT_MONTH_FORMAT.to_string(),
            day_format: DEFAULT_DAY_FORMAT.to_string(),
            range_separator: DEFAULT_RANGE_SEPARATOR.to_string(),
        }
    }
}

impl ScheduleConfig {
    /// Loads configuration from `SCHEDULE_*` environment variables
    pub fn from_env() -> Result<Self, ScheduleError> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads a `.env` file if present, then reads the environment
    pub fn load() -> Result<Self, ScheduleError> {
        dotenvy::dotenv().ok();
        let config = Self::from_env()?;

        tracing::debug!(
            currency = %config.currency,
            timezone = %config.timezone.0.name(),
            "Loaded schedule configuration"
        );
        Ok(config)
    }

    fn from_environment(environment: config::Environment) -> Result<Self, ScheduleError> {
        let config = config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Returns the validated label format
    pub fn label_format(&self) -> Result<LabelFormat, ScheduleError> {
        LabelFormat::new(&self.month_format, &self.day_format, &self.range_separator)
    }

    /// Creates a nightly rate in the configured currency
    pub fn nightly_rate(&self, amount: f64) -> Result<NightlyRate, ScheduleError> {
        NightlyRate::from_f64(amount, self.currency)
    }

    /// Creates a stay from textual dates, resolving timestamps in the
    /// configured timezone and pricing in the configured currency
    pub fn stay(&self, check_in: &str, check_out: &str, price_per_night: f64) -> Result<StayPeriod, ScheduleError> {
        StayPeriod::parse(check_in, check_out, self.nightly_rate(price_per_night)?, &self.timezone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_defaults_when_environment_empty() {
        let config = ScheduleConfig::from_environment(environment(&[])).unwrap();

        assert_eq!(config.currency, Currency::GBP);
        assert_eq!(config.timezone, Timezone::default());
        assert_eq!(config.month_format, DEFAULT_MONTH_FORMAT);
        assert!(config.label_format().is_ok());
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = ScheduleConfig::from_environment(environment(&[
            ("SCHEDULE_CURRENCY", "EUR"),
            ("SCHEDULE_TIMEZONE", "Europe/Dublin"),
            ("SCHEDULE_DAY_FORMAT", "%d/%m"),
        ]))
        .unwrap();

        assert_eq!(config.currency, Currency::EUR);
        assert_eq!(config.timezone.0.name(), "Europe/Dublin");
        assert_eq!(config.day_format, "%d/%m");
    }

    #[test]
    fn test_nightly_rate_uses_configured_currency() {
        let config = ScheduleConfig::from_environment(environment(&[("SCHEDULE_CURRENCY", "EUR")])).unwrap();
        let rate = config.nightly_rate(25.0).unwrap();

        assert_eq!(rate.currency(), Currency::EUR);
        assert!(matches!(config.nightly_rate(0.0), Err(ScheduleError::InvalidRate(_))));
    }

    #[test]
    fn test_stay_uses_configured_timezone_and_currency() {
        let config = ScheduleConfig::from_environment(environment(&[
            ("SCHEDULE_CURRENCY", "AUD"),
            ("SCHEDULE_TIMEZONE", "Australia/Sydney"),
        ]))
        .unwrap();

        // 20:00 UTC on 14 Jan is the morning of 15 Jan in Sydney.
        let stay = config.stay("2024-01-14T20:00:00Z", "2024-01-31", 20.0).unwrap();

        assert_eq!(stay.check_in(), chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(stay.price_per_night().currency(), Currency::AUD);
    }

    #[test]
    fn test_unknown_timezone_is_config_error() {
        let result = ScheduleConfig::from_environment(environment(&[("SCHEDULE_TIMEZONE", "Nowhere/Land")]));
        assert!(matches!(result, Err(ScheduleError::Config(_))));
    }

    #[test]
    fn test_bad_label_format_rejected() {
        let config = ScheduleConfig {
            month_format: "%Q".to_string(),
            ..ScheduleConfig::default()
        };
        assert!(matches!(config.label_format(), Err(ScheduleError::InvalidLabelFormat(_))));
    }
}
