//! Persona preamble for the direct-reply path and recent-conversation context.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

/// Section title for the recent conversation block.
pub const SECTION_RECENT: &str = "최근 대화:";

const WEEKDAYS_KO: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

/// System preamble for conversational replies: current KST date, time and
/// weekday, plus the persona constraints (warm Korean parenting-support tone).
pub fn persona_preamble(now: DateTime<FixedOffset>) -> String {
    let weekday = WEEKDAYS_KO[now.weekday().num_days_from_monday() as usize];
    format!(
        "오늘은 {}년 {}월 {}일 {}요일이고, 현재 시각은 {:02}:{:02}입니다. \
         당신은 육아로 지친 보호자를 돕는 따뜻한 상담사 '도란'입니다. \
         한국어로, 부드럽고 공감하는 말투로 답하세요. \
         의학적 진단은 하지 말고, 필요하면 전문가 상담을 권하세요. \
         답변은 간결하게 유지하세요.",
        now.year(),
        now.month(),
        now.day(),
        weekday,
        now.hour(),
        now.minute()
    )
}

/// Formats recent conversation lines into a context block, empty input gives
/// an empty string so callers can append unconditionally.
pub fn conversation_context<I, S>(recent_messages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<String> = recent_messages
        .into_iter()
        .map(|l| l.as_ref().to_string())
        .collect();
    if lines.is_empty() {
        return String::new();
    }
    let mut out = String::from(SECTION_RECENT);
    out.push('\n');
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}
