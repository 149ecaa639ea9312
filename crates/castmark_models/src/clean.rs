//! Fence stripping for model text output.

/// Strip a wrapping code fence from the model's raw text, if present.
///
/// Removes a leading ```` ``` ```` (optionally followed by a language tag)
/// at the very start of the text and a trailing ```` ``` ```` at the very
/// end, then trims surrounding whitespace. Text without fences comes back
/// trimmed and otherwise untouched, so the operation is idempotent.
///
/// # Examples
///
/// ```
/// use castmark_models::strip_fences;
///
/// assert_eq!(strip_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
/// assert_eq!(strip_fences("{\"a\":1}"), "{\"a\":1}");
/// ```
pub fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        text = rest.strip_prefix('\n').unwrap_or(rest);
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest.strip_suffix('\n').unwrap_or(rest);
    }

    text.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_tagged_fences() {
        let raw = "```json\n{\"titles\":[\"A\"]}\n```";
        assert_eq!(strip_fences(raw), "{\"titles\":[\"A\"]}");
    }

    #[test]
    fn strips_bare_fences() {
        let raw = "```\n[1,2,3]\n```";
        assert_eq!(strip_fences(raw), "[1,2,3]");
    }

    #[test]
    fn leaves_unfenced_text_alone() {
        assert_eq!(strip_fences("  {\"a\": true} \n"), "{\"a\": true}");
    }

    #[test]
    fn stripping_is_idempotent() {
        let body = "{\"titles\":[\"A\"],\"tags\":[]}";
        let fenced = format!("```json\n{body}\n```");
        let once = strip_fences(&fenced);
        assert_eq!(once, body);
        assert_eq!(strip_fences(once), body);
    }

    #[test]
    fn does_not_touch_fences_in_the_middle() {
        let raw = "{\"text\": \"use ``` for code\"}";
        assert_eq!(strip_fences(raw), raw);
    }
}
