// ABOUTME: Best-effort cleanup of near-JSON completion output into parseable text
// ABOUTME: Folds whitespace, escapes backslashes, strips control characters, extracts the brace span
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge Labs

//! # Response Sanitizer
//!
//! Completion services asked for JSON routinely return *almost* JSON:
//! literal newlines inside string values, stray backslashes, code-fence
//! markers, and prose wrapped around the object. [`sanitize`] applies a
//! fixed cleanup pipeline and returns best-effort text; verifying that the
//! result actually parses is the caller's job.

use regex::Regex;
use std::sync::LazyLock;

static CONTROL_CHARS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // C0 and C1 control ranges; \n \r \t are folded to spaces beforehand
    Regex::new(r"[\x00-\x1F\x7F-\x9F]").ok()
});

/// Clean a raw completion response into best-effort JSON text
///
/// The pipeline, in order:
///
/// 1. Newlines, carriage returns, and tabs become single spaces - models
///    frequently emit literal newlines inside JSON string values, which is
///    invalid JSON.
/// 2. Backslashes are doubled so lone escapes cannot break the parse.
/// 3. Remaining C0/C1 control characters are stripped.
/// 4. The span from the first `{` to the last `}` is extracted when both
///    exist; everything outside it (prose, code fences) is discarded.
///
/// Pure function with no side effects. The output is *not* guaranteed to be
/// valid JSON.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let mut text = raw
        .replace(['\n', '\r', '\t'], " ")
        .replace('\\', "\\\\");

    if let Some(re) = CONTROL_CHARS.as_ref() {
        text = re.replace_all(&text, "").into_owned();
    }

    match extract_object_span(&text) {
        Some(span) => span.to_owned(),
        None => text,
    }
}

/// Extract the greedy first-`{`-to-last-`}` span, if one exists
fn extract_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_newlines_become_parseable() {
        let raw = "{\"name\": \"Oat\nBowl\",\n\t\"calories\": 500}";
        let cleaned = sanitize(raw);
        let value: serde_json::Value = serde_json::from_str(&cleaned).unwrap();
        assert_eq!(value["name"], "Oat Bowl");
    }

    #[test]
    fn test_surrounding_prose_is_discarded() {
        let raw = "Sure! Here is your meal:\n```json\n{\"calories\": 500}\n```\nEnjoy!";
        let cleaned = sanitize(raw);
        assert!(cleaned.starts_with('{'));
        assert!(cleaned.ends_with('}'));
        assert!(serde_json::from_str::<serde_json::Value>(&cleaned).is_ok());
    }

    #[test]
    fn test_no_braces_passes_through_cleaned() {
        let cleaned = sanitize("no json here\nat all");
        assert_eq!(cleaned, "no json here at all");
    }

    #[test]
    fn test_reversed_braces_not_extracted() {
        let cleaned = sanitize("} nothing {");
        assert_eq!(cleaned, "} nothing {");
    }

    #[test]
    fn test_control_characters_stripped() {
        let raw = "{\"a\": \"b\u{0007}c\u{009C}\"}";
        let cleaned = sanitize(raw);
        assert_eq!(cleaned, "{\"a\": \"bc\"}");
    }
}
