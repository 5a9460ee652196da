const MAX_VISIBLE_CHARS: usize = 120;

const SECRET_KEYS: [&str; 6] = [
    "Bearer ",
    "api_key=",
    "client_secret=",
    "access_token=",
    "password=",
    "secret=",
];

/// Shortens free text (questions, transcripts, skills) and masks anything
/// that looks like a credential before it reaches the logs.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let visible = if total > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total)
    } else {
        trimmed.to_string()
    };

    redact_secrets(&visible)
}

fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();
    for key in SECRET_KEYS {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(key) {
            let value_start = search_from + found + key.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(value_start..value_end, "[REDACTED]");
            search_from = value_start + "[REDACTED]".len();
        }
    }
    result
}
