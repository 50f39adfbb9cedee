//! Tests for the intent classifiers: keyword fallback behavior, model-path
//! parsing, and fallback on model failure. Uses a canned-response mock
//! LlmClient; no network.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone};
use intent::{
    needs_database_lookup, IntentClassifier, KeywordClassifier, LlmIntentClassifier, TimeRange,
};
use llm_client::LlmClient;
use prompt::ChatMessage;
use std::sync::Arc;

/// Mock LlmClient returning a fixed reply, or an error when `reply` is None.
struct MockLlm {
    reply: Option<String>,
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn get_llm_response_with_messages(
        &self,
        _messages: Vec<ChatMessage>,
    ) -> anyhow::Result<String> {
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => anyhow::bail!("mock: upstream unreachable"),
        }
    }
}

fn now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(9 * 3600)
        .unwrap()
        .with_ymd_and_hms(2025, 3, 14, 10, 0, 0)
        .unwrap()
}

// --- keyword fallback ---

/// **Test: analysis/chart terms flag an analysis request; chart terms also
/// flag needs_chart.**
#[test]
fn test_keyword_analysis_and_chart() {
    let intent = KeywordClassifier::classify_message("이번 달 피로도 분석해줘");
    assert!(intent.is_analysis_request);
    assert!(intent.needs_records);
    assert!(!intent.needs_chart);
    assert_eq!(intent.time_range, TimeRange::LastMonth);

    let intent = KeywordClassifier::classify_message("감정 그래프 보여줘");
    assert!(intent.is_analysis_request);
    assert!(intent.needs_chart);
}

/// **Test: record/data terms flag needs_records without analysis.**
#[test]
fn test_keyword_records() {
    let intent = KeywordClassifier::classify_message("어제 기록 보여줘");
    assert!(intent.needs_records);
    assert!(!intent.is_analysis_request);
    assert_eq!(intent.time_range, TimeRange::Yesterday);
}

/// **Test: plain greeting with no keywords is a simple greeting.**
#[test]
fn test_keyword_simple_greeting() {
    let intent = KeywordClassifier::classify_message("안녕하세요!");
    assert!(intent.is_simple_greeting);
    assert!(!intent.needs_records);
    assert_eq!(intent.time_range, TimeRange::Recent);
}

/// **Test: mentioning feelings suppresses the greeting flag.**
#[test]
fn test_keyword_feeling_is_not_greeting() {
    let intent = KeywordClassifier::classify_message("요즘 기분이 그래요");
    assert!(!intent.is_simple_greeting);
}

/// **Test: time markers pick the expected ranges.**
#[test]
fn test_keyword_time_markers() {
    assert_eq!(
        KeywordClassifier::classify_message("오늘 데이터 어때?").time_range,
        TimeRange::Today
    );
    assert_eq!(
        KeywordClassifier::classify_message("지난주 기록 분석").time_range,
        TimeRange::LastWeek
    );
}

// --- model path ---

/// **Test: model classifier parses a fenced JSON reply.**
#[tokio::test]
async fn test_llm_classifier_parses_fenced_json() {
    let reply = "```json\n{\"isAnalysisRequest\": true, \"needsChart\": true, \
                 \"timeRange\": \"last_week\"}\n```";
    let classifier = LlmIntentClassifier::new(Arc::new(MockLlm {
        reply: Some(reply.to_string()),
    }));

    let intent = classifier.classify("지난주 감정 변화 보여줘", now()).await;
    assert!(intent.is_analysis_request);
    assert!(intent.needs_chart);
    assert_eq!(intent.time_range, TimeRange::LastWeek);
}

/// **Test: model call failure falls back to the keyword classifier.**
#[tokio::test]
async fn test_llm_classifier_falls_back_on_error() {
    let classifier = LlmIntentClassifier::new(Arc::new(MockLlm { reply: None }));
    let intent = classifier.classify("이번 달 피로도 분석해줘", now()).await;
    assert!(intent.is_analysis_request);
    assert_eq!(intent.time_range, TimeRange::LastMonth);
}

/// **Test: malformed JSON falls back to the keyword classifier.**
#[tokio::test]
async fn test_llm_classifier_falls_back_on_malformed_json() {
    let classifier = LlmIntentClassifier::new(Arc::new(MockLlm {
        reply: Some("분석 요청으로 보입니다".to_string()),
    }));
    let intent = classifier.classify("안녕!", now()).await;
    assert!(intent.is_simple_greeting);
}

// --- needs-data decision ---

/// **Test: YES/NO replies parse; anything else errors.**
#[tokio::test]
async fn test_needs_database_lookup_parsing() {
    let yes = MockLlm {
        reply: Some("YES".to_string()),
    };
    assert!(needs_database_lookup(&yes, "지난주 기록 보여줘").await.unwrap());

    let no = MockLlm {
        reply: Some("No.".to_string()),
    };
    assert!(!needs_database_lookup(&no, "안녕").await.unwrap());

    let junk = MockLlm {
        reply: Some("잘 모르겠어요".to_string()),
    };
    assert!(needs_database_lookup(&junk, "안녕").await.is_err());

    let down = MockLlm { reply: None };
    assert!(needs_database_lookup(&down, "안녕").await.is_err());
}

/// **Test: the answer must be the whole reply, not a substring of it.**
///
/// A reply containing both words, or "no" buried inside another word, is a
/// parse failure rather than a confident answer.
#[tokio::test]
async fn test_needs_database_lookup_rejects_embedded_tokens() {
    let both = MockLlm {
        reply: Some("yes and no".to_string()),
    };
    assert!(needs_database_lookup(&both, "안녕").await.is_err());

    let embedded = MockLlm {
        reply: Some("I do not know".to_string()),
    };
    assert!(needs_database_lookup(&embedded, "안녕").await.is_err());

    let padded = MockLlm {
        reply: Some("  NO! ".to_string()),
    };
    assert!(!needs_database_lookup(&padded, "안녕").await.unwrap());
}
