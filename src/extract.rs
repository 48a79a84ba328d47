//! Tolerant JSON extraction from model output.
//!
//! LLM completions are not guaranteed to be pure JSON: the model may
//! prepend commentary ("Here is the analysis:") or wrap the object in
//! markdown code fences. The extractor takes the outermost `{...}` span
//! and parses that, failing closed with diagnostics when no span exists
//! or the span does not parse.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The output contained no identifiable `{...}` span.
    #[error("no JSON object found in model output:\n{text}")]
    NoJsonFound { text: String },

    /// A `{...}` span was found but failed to parse.
    #[error("failed to parse JSON block: {message}\n\nJSON block:\n{candidate}")]
    MalformedJson { message: String, candidate: String },
}

/// Extract the single JSON object embedded somewhere in `text`.
///
/// Takes the substring from the first `{` to the last `}` inclusive and
/// parses it. Does not balance braces: when the model emits exactly one
/// object (the common case) this has no false negatives, and when it
/// emits zero or malformed JSON it fails with the offending text rather
/// than returning partial data. Multiple `{...}` regions may yield a
/// candidate that fails to parse; that is an accepted limitation.
pub fn extract_json(text: &str) -> Result<Value, ExtractError> {
    let (start, end) = match (text.find('{'), text.rfind('}')) {
        // A `}` before the first `{` means there is no span to slice.
        (Some(start), Some(end)) if start < end => (start, end),
        _ => {
            return Err(ExtractError::NoJsonFound {
                text: text.to_string(),
            })
        }
    };

    let candidate = &text[start..=end];
    serde_json::from_str(candidate).map_err(|e| ExtractError::MalformedJson {
        message: e.to_string(),
        candidate: candidate.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_pure_json() {
        let text = r#"{"summary": "ok", "clarity_score": 80}"#;
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"summary": "ok", "clarity_score": 80}));
    }

    #[test]
    fn test_extract_json_with_surrounding_prose() {
        let text = "Sure! Here is the analysis:\n{\"a\": 1}\nLet me know if you need more.";
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_extract_json_inside_code_fence() {
        let text = "```json\n{\"a\": [1, 2], \"b\": \"x\"}\n```";
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"a": [1, 2], "b": "x"}));
    }

    #[test]
    fn test_extract_nested_object() {
        let text = "prefix {\"outer\": {\"inner\": true}} suffix";
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"outer": {"inner": true}}));
    }

    #[test]
    fn test_empty_string_is_no_json_found() {
        match extract_json("") {
            Err(ExtractError::NoJsonFound { text }) => assert_eq!(text, ""),
            other => panic!("expected NoJsonFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_braces_is_no_json_found() {
        assert!(matches!(
            extract_json("I cannot help with that."),
            Err(ExtractError::NoJsonFound { .. })
        ));
        assert!(matches!(
            extract_json("only an opening { here"),
            Err(ExtractError::NoJsonFound { .. })
        ));
        assert!(matches!(
            extract_json("only a closing } here"),
            Err(ExtractError::NoJsonFound { .. })
        ));
    }

    #[test]
    fn test_closing_brace_before_opening_is_no_json_found() {
        // end index < start index must not attempt an invalid slice
        assert!(matches!(
            extract_json("} and later {"),
            Err(ExtractError::NoJsonFound { .. })
        ));
    }

    #[test]
    fn test_no_json_found_carries_original_text() {
        let input = "I cannot help with that.";
        match extract_json(input) {
            Err(ExtractError::NoJsonFound { text }) => assert_eq!(text, input),
            other => panic!("expected NoJsonFound, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_carries_candidate() {
        let text = "output: {not valid json} done";
        match extract_json(text) {
            Err(ExtractError::MalformedJson { candidate, message }) => {
                assert_eq!(candidate, "{not valid json}");
                assert!(!message.is_empty());
            }
            other => panic!("expected MalformedJson, got {:?}", other),
        }
    }

    #[test]
    fn test_multiple_objects_span_may_fail_to_parse() {
        // Outermost-span heuristic: the candidate includes the text
        // between the two objects, which does not parse.
        let text = "{\"a\": 1} and also {\"b\": 2}";
        assert!(matches!(
            extract_json(text),
            Err(ExtractError::MalformedJson { .. })
        ));
    }

    #[test]
    fn test_extract_is_idempotent_through_reserialization() {
        let text = "noise {\"k\": [\"v1\", \"v2\"], \"n\": 3} noise";
        let first = extract_json(text).unwrap();
        let reserialized = serde_json::to_string_pretty(&first).unwrap();
        let second = extract_json(&reserialized).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_with_multibyte_text_around_json() {
        let text = "résumé → {\"clé\": \"vàlue\"} ← fin";
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"clé": "vàlue"}));
    }
}
