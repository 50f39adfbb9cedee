//! Analysis-path prompt pieces: record line rendering, fatigue labels, the
//! no-fabrication system prompt, and the fixed no-records reply.

use chrono::NaiveDate;

/// Fixed reply when the resolved period has no records. Returned verbatim,
/// without any model call.
pub const NO_RECORDS_MESSAGE: &str =
    "해당 기간에는 기록이 없어요. 아이의 하루를 먼저 기록해 주시면 꼼꼼히 분석해 드릴게요.";

/// Maps a fatigue score on the canonical 0–5 scale to a qualitative label.
pub fn fatigue_label(fatigue: i64) -> &'static str {
    match fatigue {
        i64::MIN..=1 => "낮음",
        2..=3 => "보통",
        _ => "높음",
    }
}

/// Renders one mood record into one line of the record block.
pub fn render_record_line(
    date: NaiveDate,
    fatigue: i64,
    title: &str,
    notes: &str,
    emotion: Option<&str>,
) -> String {
    let mut line = format!(
        "- {} [{}] 피로도 {}/5({})",
        date.format("%Y-%m-%d"),
        title,
        fatigue,
        fatigue_label(fatigue)
    );
    if !notes.trim().is_empty() {
        line.push_str(" · 메모: ");
        line.push_str(notes.trim());
    }
    if let Some(emotion) = emotion {
        line.push_str(" · 감정: ");
        line.push_str(emotion);
    }
    line
}

/// System prompt for the analysis call. The no-fabrication rule is a hard
/// constraint: the model may only reference what is in the record block.
pub fn analysis_system_prompt() -> String {
    "당신은 육아 기록을 분석하는 따뜻한 상담사 '도란'입니다. \
     아래 사용자 메시지에 포함된 '기록 블록'의 데이터만 사용하세요. \
     블록에 없는 날짜, 수치, 사건을 지어내는 것은 금지됩니다. \
     다음 구성으로 한국어로 답하세요: \
     1) 한 문장 요약 \
     2) 관찰된 패턴 2~3개 \
     3) 실천 항목 3개 (아이를 위한 2개, 보호자 자신을 위한 1개) \
     4) 응원 한마디."
        .to_string()
}
