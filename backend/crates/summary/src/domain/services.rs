//! Domain Services
//!
//! Input limits and prompt construction for post summaries.

use crate::error::{SummaryError, SummaryResult};

pub const TITLE_MAX_CHARS: usize = 200;
pub const CONTENT_MIN_CHARS: usize = 100;
pub const CONTENT_MAX_CHARS: usize = 50_000;

/// Content beyond this many characters is dropped from the prompt
pub const PROMPT_CONTENT_CHARS: usize = 10_000;

pub const SUMMARY_SYSTEM_PROMPT: &str =
    "당신은 블로그 콘텐츠를 명확하고 간결하게 요약하는 전문가입니다. 반드시 한국어로 답변하세요.";

/// Check title and content lengths (in characters)
pub fn validate_summary_input(title: &str, content: &str) -> SummaryResult<()> {
    let title_len = title.chars().count();
    if title_len == 0 || title_len > TITLE_MAX_CHARS {
        return Err(SummaryError::InvalidRequest(format!(
            "title must be 1 to {} characters",
            TITLE_MAX_CHARS
        )));
    }

    let content_len = content.chars().count();
    if !(CONTENT_MIN_CHARS..=CONTENT_MAX_CHARS).contains(&content_len) {
        return Err(SummaryError::InvalidRequest(format!(
            "content must be {} to {} characters",
            CONTENT_MIN_CHARS, CONTENT_MAX_CHARS
        )));
    }

    Ok(())
}

/// First `max_chars` characters of `s`, never splitting a character
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// User prompt asking for exactly three summary lines
pub fn build_summary_prompt(title: &str, content: &str) -> String {
    format!(
        "다음 블로그 포스트를 정확히 3줄로 요약해주세요. 각 줄은 핵심 내용을 담고 있어야 합니다.\n\n\
         제목: {title}\n\n\
         내용:\n{content}\n\n\
         요약 형식:\n\
         1. [첫 번째 핵심 포인트]\n\
         2. [두 번째 핵심 포인트]\n\
         3. [세 번째 핵심 포인트]",
        title = title,
        content = truncate_chars(content, PROMPT_CONTENT_CHARS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bounds() {
        let content = "가".repeat(CONTENT_MIN_CHARS);
        assert!(validate_summary_input("제목", &content).is_ok());
        assert!(validate_summary_input("", &content).is_err());
        assert!(validate_summary_input(&"t".repeat(201), &content).is_err());
        assert!(validate_summary_input(&"t".repeat(200), &content).is_ok());
        assert!(validate_summary_input("t", &"a".repeat(99)).is_err());
        assert!(validate_summary_input("t", &"a".repeat(CONTENT_MAX_CHARS)).is_ok());
        assert!(validate_summary_input("t", &"a".repeat(CONTENT_MAX_CHARS + 1)).is_err());
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("가나다라", 2), "가나");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_prompt_truncates_content() {
        let content = format!("{}{}", "a".repeat(PROMPT_CONTENT_CHARS), "TAIL");
        let prompt = build_summary_prompt("Title", &content);

        assert!(prompt.contains("제목: Title"));
        assert!(prompt.contains(&"a".repeat(PROMPT_CONTENT_CHARS)));
        assert!(!prompt.contains("TAIL"));
        assert!(prompt.contains("정확히 3줄"));
        assert!(prompt.ends_with("3. [세 번째 핵심 포인트]"));
    }
}
