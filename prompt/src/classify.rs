//! Prompts for the two classification calls: intent extraction and the
//! needs-data yes/no decision.

use chrono::{DateTime, FixedOffset};

/// Builds the intent classification prompt. Embeds the current KST date so
/// the model can ground relative expressions ("지난주", "이번 달").
///
/// The model is told to answer with a single JSON object only. Whatever it
/// returns is treated as untrusted input downstream; today/yesterday date
/// arithmetic from the model is discarded and recomputed locally.
pub fn classification_prompt(message: &str, now: DateTime<FixedOffset>) -> String {
    format!(
        "오늘 날짜는 {} (KST)입니다.\n\
         아래 사용자 메시지의 의도를 분석해 JSON 객체 하나만 출력하세요. \
         설명이나 다른 텍스트는 출력하지 마세요.\n\n\
         필드:\n\
         - isAnalysisRequest: 기록 분석/차트/그래프 요청이면 true\n\
         - needsRecords: 저장된 육아 기록 조회가 필요하면 true\n\
         - needsChatHistory: 이전 대화 내용이 필요하면 true\n\
         - needsChart: 차트나 그래프를 그려 달라는 요청이면 true\n\
         - isSimpleGreeting: 단순 인사이면 true\n\
         - timeRange: \"today\" | \"yesterday\" | \"last_week\" | \"last_month\" | \"recent\" | \"custom\"\n\
         - topic: 메시지의 주제 (문자열)\n\
         - analysisType: \"period\" | \"custom\" | \"specific\"\n\
         - periodType: \"day\" | \"week\" | \"month\" | \"year\"\n\
         - periodValue: 기간 수치 (정수)\n\
         - fromDate, toDate: \"YYYY-MM-DD\" (analysisType이 custom일 때만)\n\n\
         timeRange가 today나 yesterday이면 fromDate/toDate는 계산하지 마세요. \
         서버가 직접 계산합니다.\n\n\
         사용자 메시지: {}",
        now.format("%Y-%m-%d"),
        message
    )
}

/// Prompt for the binary needs-data decision. The model must answer with the
/// literal word YES or NO; anything else is treated as a failed call.
pub fn needs_data_prompt(message: &str) -> String {
    format!(
        "다음 질문에 답하려면 사용자의 육아 기록 데이터베이스 조회가 필요합니까? \
         반드시 YES 또는 NO 한 단어로만 답하세요.\n\n질문: {}",
        message
    )
}
