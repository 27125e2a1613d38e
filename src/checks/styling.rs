// SPDX-License-Identifier: PMPL-1.0-or-later
//! Styling practices check.
//!
//! Starts from a full score and deducts: 3 points when more than five
//! elements carry inline `style` attributes, 2 points when no external
//! stylesheet is linked. Passing means keeping at least 8 of 10.

use super::{CheckResult, CheckStatus, CheckValue};
use scraper::{Html, Selector};

const INLINE_STYLE_LIMIT: usize = 5;

pub fn check(doc: &Html) -> CheckResult {
    let inline_selector = Selector::parse("[style]").expect("valid selector");
    let css_selector = Selector::parse(r#"link[rel="stylesheet"]"#).expect("valid selector");

    let inline_styles = doc.select(&inline_selector).count();
    let external_css = doc.select(&css_selector).count();

    let mut score: f64 = 10.0;
    let mut issues = Vec::new();

    if inline_styles > INLINE_STYLE_LIMIT {
        score -= 3.0;
        issues.push("Too many inline styles detected".to_string());
    }
    if external_css == 0 {
        score -= 2.0;
        issues.push("No external CSS files found".to_string());
    }
    score = score.max(0.0);

    let passed = score >= 8.0;
    let message = if passed {
        "Styling practices are good".to_string()
    } else {
        issues.join(", ")
    };
    let status = if passed {
        CheckStatus::Passed
    } else {
        CheckStatus::Failed
    };

    CheckResult::fail(score, &message)
        .with_status(status)
        .with_value(CheckValue::StyleCounts {
            inline_styles,
            external_css,
        })
        .with_issues(issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(head: &str, body: &str) -> Html {
        Html::parse_document(&format!(
            "<html><head>{}</head><body>{}</body></html>",
            head, body
        ))
    }

    #[test]
    fn external_css_and_no_inline_styles() {
        let result = check(&doc(r#"<link rel="stylesheet" href="a.css">"#, "<p>x</p>"));
        assert!(result.passed);
        assert_eq!(result.score, 10.0);
        assert_eq!(result.message, "Styling practices are good");
    }

    #[test]
    fn few_inline_styles_are_tolerated() {
        let body = r#"<p style="color:red">a</p>"#.repeat(5);
        let result = check(&doc(r#"<link rel="stylesheet" href="a.css">"#, &body));
        assert!(result.passed);
        assert_eq!(result.score, 10.0);
    }

    #[test]
    fn too_many_inline_styles() {
        let body = r#"<p style="color:red">a</p>"#.repeat(6);
        let result = check(&doc(r#"<link rel="stylesheet" href="a.css">"#, &body));
        assert!(!result.passed);
        assert_eq!(result.score, 7.0);
        assert_eq!(result.issues, vec!["Too many inline styles detected".to_string()]);
    }

    #[test]
    fn missing_external_css_alone_still_passes_threshold() {
        // -2 leaves the score at 8, which meets the pass bar
        let result = check(&doc("", "<p>x</p>"));
        assert!(result.passed);
        assert_eq!(result.score, 8.0);
        assert_eq!(result.issues, vec!["No external CSS files found".to_string()]);
    }

    #[test]
    fn both_deductions() {
        let body = r#"<p style="color:red">a</p>"#.repeat(6);
        let result = check(&doc("", &body));
        assert!(!result.passed);
        assert_eq!(result.score, 5.0);
        assert_eq!(result.issues.len(), 2);
        assert_eq!(
            result.message,
            "Too many inline styles detected, No external CSS files found"
        );
    }

    #[test]
    fn counts_are_recorded() {
        let result = check(&doc(
            r#"<link rel="stylesheet" href="a.css"><link rel="stylesheet" href="b.css">"#,
            r#"<p style="x">a</p>"#,
        ));
        assert_eq!(
            result.value,
            Some(CheckValue::StyleCounts {
                inline_styles: 1,
                external_css: 2
            })
        );
    }
}
