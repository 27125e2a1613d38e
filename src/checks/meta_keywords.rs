// SPDX-License-Identifier: PMPL-1.0-or-later
//! Meta keywords check. The tag is ignored by modern search engines, so its
//! absence is not penalized; an empty tag present in the markup is.

use super::{CheckResult, CheckValue};
use scraper::{Html, Selector};

pub fn check(doc: &Html) -> CheckResult {
    let selector = Selector::parse(r#"meta[name="keywords"]"#).expect("valid selector");

    let Some(element) = doc.select(&selector).next() else {
        return CheckResult::pass(5.0, "Meta keywords are optional (not required for modern SEO)");
    };

    let content = element.value().attr("content").unwrap_or("").to_string();
    if content.is_empty() {
        return CheckResult::fail(0.0, "Meta keywords tag is empty")
            .with_value(CheckValue::Text(content));
    }

    CheckResult::pass(5.0, "Meta keywords present").with_value(CheckValue::Text(content))
}
