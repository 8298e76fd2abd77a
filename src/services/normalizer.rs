//! Normalization of free-form model replies into structured data.
//!
//! The generation service routinely wraps JSON in markdown fences, leaves
//! trailing commas, or answers in prose bullets despite instructions. This
//! module strips the noise, repairs what it can, and exposes a line-split
//! fallback for keyword lists.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static TRAILING_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*([\]}])").expect("trailing comma pattern is valid"));

/// Result of running a raw reply through the parse pipeline. `degraded` is
/// set when even the repaired text could not be parsed; the caller decides
/// whether that is fatal and owns routing the raw text to a diagnostic sink.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOutcome {
    pub value: Option<Value>,
    pub degraded: bool,
}

/// Removes every line that is a fenced-code-block marker (three backticks,
/// optionally followed by a language tag).
pub fn strip_code_fences(raw: &str) -> String {
    raw.lines()
        .filter(|line| !line.trim().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Removes trailing commas that immediately precede a closing bracket or
/// brace, and strips carriage returns.
pub fn repair_json(raw: &str) -> String {
    TRAILING_COMMA
        .replace_all(&raw.replace('\r', ""), "$1")
        .into_owned()
}

/// Strict parse of a fence-stripped reply, with one repair-and-retry pass on
/// failure.
pub fn normalize_and_parse(raw: &str) -> NormalizeOutcome {
    let stripped = strip_code_fences(raw);

    if let Ok(value) = serde_json::from_str(stripped.trim()) {
        return NormalizeOutcome {
            value: Some(value),
            degraded: false,
        };
    }

    let repaired = repair_json(&stripped);
    match serde_json::from_str(repaired.trim()) {
        Ok(value) => NormalizeOutcome {
            value: Some(value),
            degraded: false,
        },
        Err(err) => {
            log::debug!("reply still unparseable after repair: {err}");
            NormalizeOutcome {
                value: None,
                degraded: true,
            }
        }
    }
}

/// Interprets a reply as a keyword list. A JSON array yields its string
/// items; a top-level string scalar or an unparseable reply falls back to
/// splitting lines and stripping bullet markers. The flag reports whether
/// the fallback was used.
pub fn keyword_list(raw: &str) -> (Vec<String>, bool) {
    match normalize_and_parse(raw).value {
        Some(Value::Array(items)) => {
            let keywords = items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect();
            (keywords, false)
        }
        Some(Value::String(text)) => (split_keyword_lines(&text), true),
        _ => (split_keyword_lines(&strip_code_fences(raw)), true),
    }
}

fn split_keyword_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            line.trim_matches(|c: char| c.is_whitespace() || c == '-' || c == '•')
                .to_string()
        })
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_bare_json_array() {
        let outcome = normalize_and_parse(r#"["for", "while"]"#);

        assert_eq!(outcome.value, Some(json!(["for", "while"])));
        assert!(!outcome.degraded);
    }

    #[test]
    fn fenced_array_parses_identically_to_bare_array() {
        let fenced = "```json\n[\"for\", \"while\"]\n```";
        let bare = r#"["for", "while"]"#;

        assert_eq!(
            normalize_and_parse(fenced).value,
            normalize_and_parse(bare).value
        );
    }

    #[test]
    fn repairs_trailing_comma_before_bracket() {
        let outcome = normalize_and_parse(r#"["for","while",]"#);

        assert_eq!(outcome.value, Some(json!(["for", "while"])));
        assert!(!outcome.degraded);
    }

    #[test]
    fn repairs_trailing_commas_and_carriage_returns_in_objects() {
        let outcome = normalize_and_parse("{\"title\": \"T\",\r\n \"questions\": [1, 2,],\r\n}");

        assert_eq!(
            outcome.value,
            Some(json!({"title": "T", "questions": [1, 2]}))
        );
    }

    #[test]
    fn unparseable_input_is_degraded() {
        let outcome = normalize_and_parse("not json at all {{{");

        assert!(outcome.value.is_none());
        assert!(outcome.degraded);
    }

    #[test]
    fn reparsing_reserialized_output_yields_same_value() {
        let first = normalize_and_parse("```\n[\"for\", \"while\", \"loops\"]\n```");
        let reserialized = serde_json::to_string(first.value.as_ref().unwrap()).unwrap();
        let second = normalize_and_parse(&reserialized);

        assert_eq!(first.value, second.value);
    }

    #[test]
    fn keyword_list_from_json_array() {
        let (keywords, degraded) = keyword_list(r#"["for", "while", "loops"]"#);

        assert_eq!(keywords, vec!["for", "while", "loops"]);
        assert!(!degraded);
    }

    #[test]
    fn keyword_list_splits_bulleted_lines() {
        let (keywords, degraded) = keyword_list("- for\n- while\n- loops");

        assert_eq!(keywords, vec!["for", "while", "loops"]);
        assert!(degraded);
    }

    #[test]
    fn keyword_list_splits_scalar_string_reply() {
        let (keywords, degraded) = keyword_list("\"• for\\n• while\"");

        assert_eq!(keywords, vec!["for", "while"]);
        assert!(degraded);
    }

    #[test]
    fn keyword_list_skips_blank_lines() {
        let (keywords, degraded) = keyword_list("- for\n\n   \n- while");

        assert_eq!(keywords, vec!["for", "while"]);
        assert!(degraded);
    }

    #[test]
    fn keyword_list_ignores_non_string_array_items() {
        let (keywords, degraded) = keyword_list(r#"["for", 42, "while"]"#);

        assert_eq!(keywords, vec!["for", "while"]);
        assert!(!degraded);
    }
}
