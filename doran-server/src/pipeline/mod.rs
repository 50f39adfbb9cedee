//! The chat pipeline: intent classification, conditional record retrieval,
//! response composition, chart synthesis, and fire-and-forget persistence.

use chart::{ChartDescriptor, ChartRow};
use chrono::{DateTime, FixedOffset};
use doran_core::Clock;
use intent::{needs_database_lookup, DateRange, Intent, IntentClassifier};
use llm_client::LlmClient;
use prompt::ChatMessage;
use serde::Serialize;
use std::sync::Arc;
use storage::{
    ChatMessageRecord, ChatMessageRepository, MoodRecord, MoodRecordRepository, SavedChart,
    SavedChartRepository,
};
use tracing::{error, info, instrument, warn};

use crate::http::error::ApiError;
use crate::http::metrics;

/// Per-user cap on saved charts; cleanup deletes the oldest beyond it.
pub const SAVED_CHART_CAP: i64 = 20;

/// Fixed reply when the model is unreachable on a composition call. Upstream
/// failures degrade, they never surface as HTTP errors.
pub const UPSTREAM_FALLBACK_REPLY: &str =
    "지금은 답변을 만들기 어려워요. 잠시 후 다시 이야기해 주세요.";

/// Wire shape of a successful POST /chat.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub ai_response: String,
    pub analysis_type: String,
    pub date_range: Option<DateRange>,
    pub is_analysis: bool,
    /// Always empty; kept for the mobile client's response shape.
    pub chat_history: Vec<serde_json::Value>,
    pub chart_data: Option<ChartDescriptor>,
}

pub struct ChatPipeline {
    classifier: Arc<dyn IntentClassifier>,
    llm: Arc<dyn LlmClient>,
    chat_repo: ChatMessageRepository,
    mood_repo: MoodRecordRepository,
    chart_repo: SavedChartRepository,
    clock: Arc<dyn Clock>,
}

impl ChatPipeline {
    pub fn new(
        classifier: Arc<dyn IntentClassifier>,
        llm: Arc<dyn LlmClient>,
        chat_repo: ChatMessageRepository,
        mood_repo: MoodRecordRepository,
        chart_repo: SavedChartRepository,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            classifier,
            llm,
            chat_repo,
            mood_repo,
            chart_repo,
            clock,
        }
    }

    /// Runs the whole pipeline for one inbound message.
    ///
    /// The inbound row insert is the only persistence on the critical path;
    /// its failure aborts the request before any model call. The answer
    /// update and chart save are spawned after the response is built.
    #[instrument(skip(self, message, recent_messages), fields(user_id = %user_id))]
    pub async fn handle(
        &self,
        user_id: &str,
        message: &str,
        recent_messages: &[String],
    ) -> Result<ChatResponse, ApiError> {
        let inbound = ChatMessageRecord::new(user_id, message);
        self.chat_repo.save(&inbound).await?;

        let now = self.clock.now();
        let intent = self.classifier.classify(message, now).await;
        info!(?intent, "Classified intent");

        let needs_data = match needs_database_lookup(self.llm.as_ref(), message).await {
            Ok(decision) => {
                metrics::observe_llm_call("needs_data", true);
                decision
            }
            Err(e) => {
                metrics::observe_llm_call("needs_data", false);
                warn!(error = %e, "Needs-data call failed, falling back to intent flags");
                intent.needs_records || intent.is_analysis_request
            }
        };

        let response = if needs_data {
            self.data_path(user_id, message, &intent, now).await?
        } else {
            self.direct_path(message, recent_messages, now).await
        };

        // Fire and forget: the caller never waits on the answer update.
        let chat_repo = self.chat_repo.clone();
        let message_id = inbound.id.clone();
        let answer = response.ai_response.clone();
        tokio::spawn(async move {
            if let Err(e) = chat_repo.set_answer(&message_id, &answer).await {
                error!(error = %e, message_id = %message_id, "Failed to persist chat answer");
            }
        });

        Ok(response)
    }

    /// Conversational reply without touching the record store.
    async fn direct_path(
        &self,
        message: &str,
        recent_messages: &[String],
        now: DateTime<FixedOffset>,
    ) -> ChatResponse {
        let mut messages = vec![ChatMessage::system(prompt::persona_preamble(now))];
        let context = prompt::conversation_context(recent_messages);
        let user_content = if context.is_empty() {
            message.to_string()
        } else {
            format!("{}\n{}", context, message)
        };
        messages.push(ChatMessage::user(user_content));

        let ai_response = match self.llm.get_llm_response_with_messages(messages).await {
            Ok(text) => {
                metrics::observe_llm_call("direct_reply", true);
                text
            }
            Err(e) => {
                metrics::observe_llm_call("direct_reply", false);
                warn!(error = %e, "Direct reply call failed, using fixed fallback");
                UPSTREAM_FALLBACK_REPLY.to_string()
            }
        };

        ChatResponse {
            ai_response,
            analysis_type: "general".to_string(),
            date_range: None,
            is_analysis: false,
            chat_history: Vec::new(),
            chart_data: None,
        }
    }

    /// Analysis reply over the resolved record window.
    async fn data_path(
        &self,
        user_id: &str,
        message: &str,
        intent: &Intent,
        now: DateTime<FixedOffset>,
    ) -> Result<ChatResponse, ApiError> {
        let window = intent::resolve_window(intent, now.date_naive());
        let rows = self
            .mood_repo
            .find_in_range(user_id, window.from_date, window.to_date)
            .await?;

        if rows.is_empty() {
            // Terminal state: fixed message, no-data chart, no model call.
            return Ok(ChatResponse {
                ai_response: prompt::NO_RECORDS_MESSAGE.to_string(),
                analysis_type: intent.analysis_type.as_str().to_string(),
                date_range: Some(window),
                is_analysis: true,
                chat_history: Vec::new(),
                chart_data: Some(chart::no_data_descriptor()),
            });
        }

        let block: Vec<String> = rows
            .iter()
            .map(|r| {
                prompt::render_record_line(r.date, r.fatigue, &r.title, &r.notes, r.emotion.as_deref())
            })
            .collect();
        let messages = vec![
            ChatMessage::system(prompt::analysis_system_prompt()),
            ChatMessage::user(format!(
                "질문: {}\n\n기록 블록:\n{}",
                message,
                block.join("\n")
            )),
        ];

        let ai_response = match self.llm.get_llm_response_with_messages(messages).await {
            Ok(text) => {
                metrics::observe_llm_call("analysis", true);
                text
            }
            Err(e) => {
                metrics::observe_llm_call("analysis", false);
                warn!(error = %e, "Analysis call failed, using fixed fallback");
                UPSTREAM_FALLBACK_REPLY.to_string()
            }
        };

        let chart_data = if intent.needs_chart {
            let descriptor = chart::synthesize(message, &to_chart_rows(&rows));
            if !descriptor.no_data {
                self.spawn_chart_save(user_id, &descriptor, window);
            }
            Some(descriptor)
        } else {
            None
        };

        Ok(ChatResponse {
            ai_response,
            analysis_type: intent.analysis_type.as_str().to_string(),
            date_range: Some(window),
            is_analysis: true,
            chat_history: Vec::new(),
            chart_data,
        })
    }

    /// Saves the chart and prunes the user's charts over the cap; best-effort
    /// and detached from the response.
    fn spawn_chart_save(&self, user_id: &str, descriptor: &ChartDescriptor, window: DateRange) {
        let chart_repo = self.chart_repo.clone();
        let saved = SavedChart::new(
            user_id,
            format!("{} 분석 차트", window.from_date.format("%Y-%m-%d")),
            descriptor.chart_type.as_str(),
            descriptor.data.to_string(),
            descriptor.options.to_string(),
            window.from_date,
            window.to_date,
        );
        tokio::spawn(async move {
            let user_id = saved.user_id.clone();
            if let Err(e) = chart_repo.save(&saved).await {
                error!(error = %e, user_id = %user_id, "Failed to save chart");
                return;
            }
            if let Err(e) = chart_repo.prune_to_cap(&user_id, SAVED_CHART_CAP).await {
                error!(error = %e, user_id = %user_id, "Failed to prune saved charts");
            }
        });
    }
}

fn to_chart_rows(rows: &[MoodRecord]) -> Vec<ChartRow> {
    rows.iter()
        .map(|r| ChartRow {
            date: Some(r.date.format("%Y-%m-%d").to_string()),
            fatigue: Some(r.fatigue),
            emotion: r.emotion.clone(),
        })
        .collect()
}
