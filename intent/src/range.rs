//! Date-range resolution. Pure functions; "now" is always a parameter.

use chrono::{Days, Months, NaiveDate};
use serde::Serialize;

use crate::model::{AnalysisType, Intent, PeriodType, TimeRange};

/// A concrete calendar window, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

impl DateRange {
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            from_date: day,
            to_date: day,
        }
    }
}

/// `from = today − value·unit`, `to = today`. Month and year subtraction is
/// calendar-aware (e.g. March 31 minus one month clamps to February 28/29).
///
/// `period_value` is model-supplied and untrusted: negatives clamp to zero
/// and oversized values saturate, bottoming out at `NaiveDate::MIN`.
pub fn resolve_period(period_type: PeriodType, period_value: i64, today: NaiveDate) -> DateRange {
    let value = period_value.max(0) as u64;
    let months = u32::try_from(period_value.max(0)).unwrap_or(u32::MAX);
    let from_date = match period_type {
        PeriodType::Day => today.checked_sub_days(Days::new(value)),
        PeriodType::Week => today.checked_sub_days(Days::new(value.saturating_mul(7))),
        PeriodType::Month => today.checked_sub_months(Months::new(months)),
        PeriodType::Year => today.checked_sub_months(Months::new(months.saturating_mul(12))),
    }
    .unwrap_or(NaiveDate::MIN);

    DateRange {
        from_date,
        to_date: today,
    }
}

/// Resolves the query window for an intent.
///
/// Precedence: today/yesterday time ranges force a single-day window over
/// everything else; a custom analysis with both dates uses them verbatim;
/// otherwise the derived period applies, defaulting to one month.
pub fn resolve_window(intent: &Intent, today: NaiveDate) -> DateRange {
    match intent.time_range {
        TimeRange::Today => return DateRange::single_day(today),
        TimeRange::Yesterday => {
            return DateRange::single_day(today.pred_opt().unwrap_or(today));
        }
        _ => {}
    }

    if intent.analysis_type == AnalysisType::Custom {
        if let (Some(from_date), Some(to_date)) = (intent.from_date, intent.to_date) {
            return DateRange { from_date, to_date };
        }
    }

    let default_type = match intent.time_range {
        TimeRange::LastWeek => PeriodType::Week,
        _ => PeriodType::Month,
    };
    let period_type = intent.period_type.unwrap_or(default_type);
    let period_value = intent.period_value.unwrap_or(1);
    resolve_period(period_type, period_value, today)
}
