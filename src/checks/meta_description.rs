// SPDX-License-Identifier: PMPL-1.0-or-later
//! Meta description check. Optimal band is 120-160 characters, the snippet
//! length search engines display.

use super::{CheckResult, CheckValue};
use scraper::{Html, Selector};

pub fn check(doc: &Html) -> CheckResult {
    let selector = Selector::parse(r#"meta[name="description"]"#).expect("valid selector");

    let Some(element) = doc.select(&selector).next() else {
        return CheckResult::fail(0.0, "Meta description is missing");
    };

    let content = element.value().attr("content").unwrap_or("").to_string();
    let length = content.chars().count();

    if length == 0 {
        return CheckResult::fail(0.0, "Meta description is empty")
            .with_value(CheckValue::Text(content));
    }

    if length < 120 {
        return CheckResult::fail(
            10.0,
            "Meta description is too short (recommended: 120-160 characters)",
        )
        .with_value(CheckValue::Text(content));
    }

    if length > 160 {
        return CheckResult::fail(
            10.0,
            "Meta description is too long (recommended: 120-160 characters)",
        )
        .with_value(CheckValue::Text(content));
    }

    CheckResult::pass(15.0, "Meta description is optimal").with_value(CheckValue::Text(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_description(content: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><head><meta name="description" content="{}"></head><body></body></html>"#,
            content
        ))
    }

    #[test]
    fn missing_description() {
        let doc = Html::parse_document("<html><head></head><body></body></html>");
        let result = check(&doc);
        assert!(!result.passed);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.message, "Meta description is missing");
    }

    #[test]
    fn empty_description() {
        let result = check(&doc_with_description(""));
        assert!(!result.passed);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.message, "Meta description is empty");
    }

    #[test]
    fn boundary_lengths() {
        let cases = [
            (119, 10.0, false),
            (120, 15.0, true),
            (160, 15.0, true),
            (161, 10.0, false),
        ];
        for (len, score, passed) in cases {
            let result = check(&doc_with_description(&"d".repeat(len)));
            assert_eq!(result.score, score, "length {}", len);
            assert_eq!(result.passed, passed, "length {}", len);
        }
    }

    #[test]
    fn other_meta_tags_are_ignored() {
        let doc = Html::parse_document(
            r#"<html><head><meta name="author" content="someone"></head><body></body></html>"#,
        );
        assert_eq!(check(&doc).message, "Meta description is missing");
    }
}
