// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading structure check.
//!
//! A page should carry exactly one h1 (5 points), and hierarchy bonuses
//! reward h1+h2 (3 points) and h2+h3 (2 points) appearing together. Issues
//! accumulate independently of the bonuses, and the check only passes with
//! no issues at all.

use super::{CheckResult, CheckStatus, CheckValue};
use scraper::{Html, Selector};

pub fn check(doc: &Html) -> CheckResult {
    let h1_count = count(doc, "h1");
    let h2_count = count(doc, "h2");
    let h3_count = count(doc, "h3");

    let mut score = 0.0;
    let mut issues = Vec::new();

    if h1_count == 0 {
        issues.push("No H1 tag found".to_string());
    } else if h1_count > 1 {
        issues.push(format!("Multiple H1 tags found ({})", h1_count));
    } else {
        score += 5.0;
    }

    if h1_count > 0 && h2_count > 0 {
        score += 3.0;
    }
    if h2_count > 0 && h3_count > 0 {
        score += 2.0;
    }

    let message = if issues.is_empty() {
        "Heading structure is good".to_string()
    } else {
        issues.join(", ")
    };
    let status = if issues.is_empty() {
        CheckStatus::Passed
    } else {
        CheckStatus::Failed
    };

    CheckResult::fail(score, &message)
        .with_status(status)
        .with_value(CheckValue::HeadingCounts {
            h1: h1_count,
            h2: h2_count,
            h3: h3_count,
        })
        .with_issues(issues)
}

fn count(doc: &Html, tag: &str) -> usize {
    let selector = Selector::parse(tag).expect("valid selector");
    doc.select(&selector).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><head></head><body>{}</body></html>", body))
    }

    #[test]
    fn single_h1_with_full_hierarchy() {
        let result = check(&doc("<h1>a</h1><h2>b</h2><h3>c</h3>"));
        assert!(result.passed);
        assert_eq!(result.score, 10.0);
        assert_eq!(result.message, "Heading structure is good");
        assert!(result.issues.is_empty());
    }

    #[test]
    fn single_h1_and_h2_only() {
        let result = check(&doc("<h1>a</h1><h2>b</h2>"));
        assert!(result.passed);
        assert_eq!(result.score, 8.0);
    }

    #[test]
    fn no_h1_is_an_issue() {
        let result = check(&doc("<h2>b</h2><h3>c</h3>"));
        assert!(!result.passed);
        // h2+h3 bonus still applies without an h1
        assert_eq!(result.score, 2.0);
        assert_eq!(result.issues, vec!["No H1 tag found".to_string()]);
        assert_eq!(result.message, "No H1 tag found");
    }

    #[test]
    fn multiple_h1s_reported_with_count() {
        let result = check(&doc("<h1>a</h1><h1>b</h1><h1>c</h1><h2>d</h2>"));
        assert!(!result.passed);
        // no single-h1 points, but the h1+h2 bonus is independent
        assert_eq!(result.score, 3.0);
        assert_eq!(result.issues, vec!["Multiple H1 tags found (3)".to_string()]);
    }

    #[test]
    fn counts_are_recorded() {
        let result = check(&doc("<h1>a</h1><h2>b</h2><h2>c</h2>"));
        assert_eq!(
            result.value,
            Some(CheckValue::HeadingCounts { h1: 1, h2: 2, h3: 0 })
        );
    }

    #[test]
    fn empty_body_scores_zero() {
        let result = check(&doc(""));
        assert!(!result.passed);
        assert_eq!(result.score, 0.0);
    }
}
