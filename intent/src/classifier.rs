//! Intent classifiers: model-backed primary and keyword fallback, plus the
//! needs-data yes/no decision call.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use llm_client::LlmClient;
use prompt::ChatMessage;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::extract::extract_json_object;
use crate::model::{Intent, TimeRange};

/// Classifies a message into an [`Intent`]. Implementations are total: they
/// always return a complete intent, never an error.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(&self, message: &str, now: DateTime<FixedOffset>) -> Intent;
}

/// Deterministic keyword classifier; the fallback path and the baseline for
/// what the model classifier must at least match.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

const ANALYSIS_TERMS: [&str; 4] = ["분석", "analysis", "analyze", "analyse"];
const CHART_TERMS: [&str; 4] = ["차트", "그래프", "chart", "graph"];
const RECORD_TERMS: [&str; 4] = ["기록", "데이터", "record", "data"];
const FEELING_TERMS: [&str; 4] = ["기분", "감정", "느낌", "feeling"];
const WEEK_TERMS: [&str; 5] = ["지난주", "저번 주", "일주일", "주간", "week"];
const MONTH_TERMS: [&str; 6] = ["지난달", "이번 달", "한 달", "개월", "월간", "month"];

impl KeywordClassifier {
    /// Keyword scan over the lowercased message. Never fails.
    pub fn classify_message(message: &str) -> Intent {
        let text = message.to_lowercase();
        let contains_any = |terms: &[&str]| terms.iter().any(|t| text.contains(t));

        let mut intent = Intent::default();

        if contains_any(&ANALYSIS_TERMS) {
            intent.is_analysis_request = true;
            intent.needs_records = true;
        }
        if contains_any(&CHART_TERMS) {
            intent.is_analysis_request = true;
            intent.needs_records = true;
            intent.needs_chart = true;
        }
        if contains_any(&RECORD_TERMS) {
            intent.needs_records = true;
        }

        // Single syllables like "주" or "달" false-positive on ordinary verbs,
        // so only multi-character period markers count.
        intent.time_range = if text.contains("오늘") || text.contains("today") {
            TimeRange::Today
        } else if text.contains("어제") || text.contains("yesterday") {
            TimeRange::Yesterday
        } else if WEEK_TERMS.iter().any(|t| text.contains(t)) {
            TimeRange::LastWeek
        } else if MONTH_TERMS.iter().any(|t| text.contains(t)) {
            TimeRange::LastMonth
        } else {
            TimeRange::Recent
        };

        let mentions_period = intent.time_range != TimeRange::Recent;
        if !intent.is_analysis_request
            && !intent.needs_records
            && !mentions_period
            && !contains_any(&FEELING_TERMS)
        {
            intent.is_simple_greeting = true;
        }

        intent
    }
}

#[async_trait]
impl IntentClassifier for KeywordClassifier {
    async fn classify(&self, message: &str, _now: DateTime<FixedOffset>) -> Intent {
        Self::classify_message(message)
    }
}

/// Model-backed classifier with total keyword fallback.
#[derive(Clone)]
pub struct LlmIntentClassifier {
    llm: Arc<dyn LlmClient>,
}

impl LlmIntentClassifier {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    async fn classify_with_model(
        &self,
        message: &str,
        now: DateTime<FixedOffset>,
    ) -> anyhow::Result<Intent> {
        let prompt_text = prompt::classification_prompt(message, now);
        let reply = self
            .llm
            .get_llm_response_with_messages(vec![ChatMessage::user(prompt_text)])
            .await?;

        let json_span = extract_json_object(&reply)
            .ok_or_else(|| anyhow::anyhow!("no JSON object in classification reply"))?;
        let value: serde_json::Value = serde_json::from_str(json_span)?;
        Ok(Intent::from_model_json(&value))
    }
}

#[async_trait]
impl IntentClassifier for LlmIntentClassifier {
    #[instrument(skip(self, message))]
    async fn classify(&self, message: &str, now: DateTime<FixedOffset>) -> Intent {
        match self.classify_with_model(message, now).await {
            Ok(intent) => {
                debug!(?intent, "Model classified intent");
                intent
            }
            Err(e) => {
                warn!(error = %e, "Intent classification failed, using keyword fallback");
                KeywordClassifier::classify_message(message)
            }
        }
    }
}

/// Asks the model whether answering requires a database lookup. The reply
/// must be the literal word YES or NO (trailing punctuation tolerated);
/// anything else is an error and the caller falls back to the intent flags.
/// Substring matching would let "no" inside words like "not" or a reply
/// containing both words pass as a confident answer.
pub async fn needs_database_lookup(llm: &dyn LlmClient, message: &str) -> anyhow::Result<bool> {
    let reply = llm
        .get_llm_response_with_messages(vec![ChatMessage::user(prompt::needs_data_prompt(
            message,
        ))])
        .await?;

    let normalized = reply
        .trim()
        .trim_end_matches(['.', '!'])
        .to_lowercase();
    match normalized.as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => anyhow::bail!("needs-data reply was neither YES nor NO: {}", reply),
    }
}
