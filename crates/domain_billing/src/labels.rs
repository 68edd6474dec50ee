//! Human-readable labels for line items

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use core_kernel::{CalendarMonth, DateRange};

use crate::error::ScheduleError;

pub const DEFAULT_MONTH_FORMAT: &str = "%B %Y";
pub const DEFAULT_DAY_FORMAT: &str = "%-d %b";
pub const DEFAULT_RANGE_SEPARATOR: &str = " - ";

/// Validated strftime patterns for `stay_month` and `stay_dates`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFormat {
    month_format: String,
    day_format: String,
    range_separator: String,
}

impl LabelFormat {
    /// Creates a label format
    ///
    /// # Errors
    ///
    /// Returns `InvalidLabelFormat` if either pattern contains an unknown
    /// specifier, since chrono only reports those when rendering.
    pub fn new(
        month_format: impl Into<String>,
        day_format: impl Into<String>,
        range_separator: impl Into<String>,
    ) -> Result<Self, ScheduleError> {
        let month_format = month_format.into();
        let day_format = day_format.into();
        validate_pattern(&month_format)?;
        validate_pattern(&day_format)?;

        Ok(Self {
            month_format,
            day_format,
            range_separator: range_separator.into(),
        })
    }

    /// Renders the month label, e.g. "January 2024"
    pub fn month_label(&self, month: CalendarMonth) -> String {
        month.first_day().format(&self.month_format).to_string()
    }

    /// Renders the day-range label, e.g. "15 Jan - 31 Jan"
    pub fn range_label(&self, range: &DateRange) -> String {
        format!(
            "{}{}{}",
            self.day_label(range.start),
            self.range_separator,
            self.day_label(range.end)
        )
    }

    fn day_label(&self, date: NaiveDate) -> String {
        date.format(&self.day_format).to_string()
    }
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self {
            month_format: DEFAULT_MONTH_FORMAT.to_string(),
            day_format: DEFAULT_DAY_FORMAT.to_string(),
            range_separator: DEFAULT_RANGE_SEPARATOR.to_string(),
        }
    }
}

fn validate_pattern(pattern: &str) -> Result<(), ScheduleError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ScheduleError::InvalidLabelFormat(pattern.to_string()));
    }
    Ok(())
}
