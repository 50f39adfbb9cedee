//! # Chart
//!
//! Maps a free-text question plus fetched mood rows to one of four fixed
//! chart shapes for the mobile renderer. Pure and total: bad input degrades
//! to the no-data descriptor, never to an error.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Value};

/// Chart kind rendered by the mobile client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
    Pie,
    Radar,
    /// Placeholder kind for the no-data descriptor.
    Message,
}

impl ChartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Radar => "radar",
            Self::Message => "message",
        }
    }
}

/// Chart payload returned to the caller and optionally persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDescriptor {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: Value,
    pub options: Value,
    pub no_data: bool,
}

/// One source row as the synthesizer sees it. Fields are optional because the
/// rows come from an external store; invalid rows are filtered, not rejected.
#[derive(Debug, Clone, Default)]
pub struct ChartRow {
    pub date: Option<String>,
    pub fatigue: Option<i64>,
    pub emotion: Option<String>,
}

/// Fixed presentation palette; not derived from data.
const PALETTE: [&str; 6] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
];

const LINE_TERMS: [&str; 8] = [
    "변화", "추이", "흐름", "패턴", "change", "trend", "flow", "pattern",
];
const BAR_TERMS: [&str; 6] = ["분포", "빈도", "얼마나", "몇 번", "distribution", "frequency"];
const PIE_TERMS: [&str; 7] = ["비율", "구성", "퍼센트", "비중", "ratio", "percentage", "share"];
const RADAR_TERMS: [&str; 4] = ["비교", "대비", "vs", "compare"];

/// Descriptor signaling that the period had nothing to draw.
pub fn no_data_descriptor() -> ChartDescriptor {
    ChartDescriptor {
        chart_type: ChartType::Message,
        data: Value::Null,
        options: json!({ "message": "표시할 데이터가 없습니다" }),
        no_data: true,
    }
}

/// Picks the chart kind from the question text. Pure function of the text;
/// unmatched questions default to a line chart.
pub fn select_chart_type(question: &str) -> ChartType {
    let text = question.to_lowercase();
    let contains_any = |terms: &[&str]| terms.iter().any(|t| text.contains(t));

    if contains_any(&LINE_TERMS) {
        ChartType::Line
    } else if contains_any(&BAR_TERMS) {
        ChartType::Bar
    } else if contains_any(&PIE_TERMS) {
        ChartType::Pie
    } else if contains_any(&RADAR_TERMS) {
        ChartType::Radar
    } else {
        ChartType::Line
    }
}

/// Builds a chart descriptor for the question from the fetched rows.
///
/// Rows missing a parseable date or a fatigue value are dropped first; if
/// none survive the result is the no-data descriptor.
pub fn synthesize(question: &str, rows: &[ChartRow]) -> ChartDescriptor {
    let mut valid: Vec<(NaiveDate, i64, Option<&str>)> = rows
        .iter()
        .filter_map(|row| {
            let date = row.date.as_deref()?.parse::<NaiveDate>().ok()?;
            let fatigue = row.fatigue?;
            Some((date, fatigue, row.emotion.as_deref()))
        })
        .collect();

    if valid.is_empty() {
        return no_data_descriptor();
    }
    valid.sort_by_key(|(date, _, _)| *date);

    match select_chart_type(question) {
        ChartType::Line => line_chart(&valid),
        ChartType::Bar => emotion_chart(&valid, ChartType::Bar, "감정 분포"),
        ChartType::Pie => emotion_chart(&valid, ChartType::Pie, "감정 비율"),
        ChartType::Radar => emotion_chart(&valid, ChartType::Radar, "감정 비교"),
        ChartType::Message => no_data_descriptor(),
    }
}

/// Fatigue per date, ascending.
fn line_chart(rows: &[(NaiveDate, i64, Option<&str>)]) -> ChartDescriptor {
    let labels: Vec<String> = rows
        .iter()
        .map(|(date, _, _)| date.format("%Y-%m-%d").to_string())
        .collect();
    let values: Vec<i64> = rows.iter().map(|(_, fatigue, _)| *fatigue).collect();

    ChartDescriptor {
        chart_type: ChartType::Line,
        data: json!({
            "labels": labels,
            "datasets": [{
                "label": "피로도",
                "data": values,
                "borderColor": PALETTE[1],
                "backgroundColor": PALETTE[1],
            }]
        }),
        options: json!({ "title": "피로도 변화 추이" }),
        no_data: false,
    }
}

/// Occurrence counts per emotion label, in first-appearance order. Bar, pie
/// and radar all reuse this tally and differ only in kind and title.
fn emotion_chart(
    rows: &[(NaiveDate, i64, Option<&str>)],
    chart_type: ChartType,
    title: &str,
) -> ChartDescriptor {
    let mut labels: Vec<String> = Vec::new();
    let mut counts: Vec<i64> = Vec::new();
    for (_, _, emotion) in rows {
        let label = emotion.unwrap_or("기록 없음");
        match labels.iter().position(|l| l == label) {
            Some(idx) => counts[idx] += 1,
            None => {
                labels.push(label.to_string());
                counts.push(1);
            }
        }
    }

    let colors: Vec<&str> = labels
        .iter()
        .enumerate()
        .map(|(i, _)| PALETTE[i % PALETTE.len()])
        .collect();

    ChartDescriptor {
        chart_type,
        data: json!({
            "labels": labels,
            "datasets": [{
                "label": "감정 기록 횟수",
                "data": counts,
                "backgroundColor": colors,
            }]
        }),
        options: json!({ "title": title }),
        no_data: false,
    }
}
