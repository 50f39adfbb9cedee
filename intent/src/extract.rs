//! Pulls the first JSON object out of a model reply.
//!
//! Models wrap JSON in code fences or prose despite being told not to; the
//! extraction strips fence markers and then takes the first balanced `{...}`
//! span, honoring string literals and escapes.

/// Returns the first balanced `{...}` span of the reply, or `None`.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let text = strip_code_fences(raw);

    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Drops leading/trailing ``` fence lines (with or without a language tag).
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Skip the language tag on the opening fence line.
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_object() {
        assert_eq!(extract_json_object(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn fenced_object() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json_object(raw), Some("{\"a\": 1}"));
    }

    #[test]
    fn object_surrounded_by_prose() {
        let raw = "분석 결과는 다음과 같습니다: {\"a\": {\"b\": 2}} 입니다.";
        assert_eq!(extract_json_object(raw), Some("{\"a\": {\"b\": 2}}"));
    }

    #[test]
    fn braces_inside_strings_are_ignored() {
        let raw = r#"{"text": "중괄호 } 포함"}"#;
        assert_eq!(extract_json_object(raw), Some(raw));
    }

    #[test]
    fn no_object_yields_none() {
        assert_eq!(extract_json_object("그냥 텍스트"), None);
        assert_eq!(extract_json_object("{unclosed"), None);
    }
}
