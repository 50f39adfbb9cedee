//! The Intent record and its enums. Ephemeral, in-memory only.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

/// Coarse time range named by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    Today,
    Yesterday,
    LastWeek,
    LastMonth,
    #[default]
    Recent,
    Custom,
}

impl TimeRange {
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "today" => Some(Self::Today),
            "yesterday" => Some(Self::Yesterday),
            "last_week" => Some(Self::LastWeek),
            "last_month" => Some(Self::LastMonth),
            "recent" => Some(Self::Recent),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    #[default]
    Period,
    Custom,
    Specific,
}

impl AnalysisType {
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "period" => Some(Self::Period),
            "custom" => Some(Self::Custom),
            "specific" => Some(Self::Specific),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Period => "period",
            Self::Custom => "custom",
            Self::Specific => "specific",
        }
    }
}

/// Period unit for derived date ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Day,
    Week,
    Month,
    Year,
}

impl PeriodType {
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }
}

/// Structured classification of one chat message.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub is_analysis_request: bool,
    pub needs_records: bool,
    pub needs_chat_history: bool,
    pub needs_chart: bool,
    pub is_simple_greeting: bool,
    pub time_range: TimeRange,
    pub topic: Option<String>,
    pub analysis_type: AnalysisType,
    pub period_type: Option<PeriodType>,
    pub period_value: Option<i64>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl Intent {
    /// Builds an Intent from the model's JSON object, field by field.
    ///
    /// Total: junk in any individual field degrades that field to its
    /// default instead of failing the whole record. The model output is an
    /// untrusted oracle; this is the schema-validation boundary.
    pub fn from_model_json(value: &Value) -> Self {
        let bool_field = |name: &str| value.get(name).and_then(Value::as_bool).unwrap_or(false);
        let str_field = |name: &str| value.get(name).and_then(Value::as_str);
        let date_field =
            |name: &str| str_field(name).and_then(|s| s.parse::<NaiveDate>().ok());

        Self {
            is_analysis_request: bool_field("isAnalysisRequest"),
            needs_records: bool_field("needsRecords"),
            needs_chat_history: bool_field("needsChatHistory"),
            needs_chart: bool_field("needsChart"),
            is_simple_greeting: bool_field("isSimpleGreeting"),
            time_range: str_field("timeRange")
                .and_then(TimeRange::from_str_opt)
                .unwrap_or_default(),
            topic: str_field("topic").map(str::to_string),
            analysis_type: str_field("analysisType")
                .and_then(AnalysisType::from_str_opt)
                .unwrap_or_default(),
            period_type: str_field("periodType").and_then(PeriodType::from_str_opt),
            period_value: value.get("periodValue").and_then(Value::as_i64),
            from_date: date_field("fromDate"),
            to_date: date_field("toDate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_model_json_reads_all_fields() {
        let v = json!({
            "isAnalysisRequest": true,
            "needsRecords": true,
            "needsChart": true,
            "timeRange": "custom",
            "topic": "수면",
            "analysisType": "custom",
            "periodType": "week",
            "periodValue": 2,
            "fromDate": "2025-03-01",
            "toDate": "2025-03-14"
        });
        let intent = Intent::from_model_json(&v);
        assert!(intent.is_analysis_request);
        assert!(intent.needs_chart);
        assert_eq!(intent.time_range, TimeRange::Custom);
        assert_eq!(intent.analysis_type, AnalysisType::Custom);
        assert_eq!(intent.period_type, Some(PeriodType::Week));
        assert_eq!(intent.period_value, Some(2));
        assert_eq!(intent.topic.as_deref(), Some("수면"));
        assert!(intent.from_date.is_some() && intent.to_date.is_some());
    }

    #[test]
    fn from_model_json_degrades_junk_fields_to_defaults() {
        let v = json!({
            "isAnalysisRequest": "yes",
            "timeRange": "fortnight",
            "analysisType": 3,
            "periodType": "decade",
            "periodValue": "two",
            "fromDate": "03/01/2025"
        });
        let intent = Intent::from_model_json(&v);
        assert!(!intent.is_analysis_request);
        assert_eq!(intent.time_range, TimeRange::Recent);
        assert_eq!(intent.analysis_type, AnalysisType::Period);
        assert!(intent.period_type.is_none());
        assert!(intent.period_value.is_none());
        assert!(intent.from_date.is_none());
    }
}
