// SPDX-License-Identifier: PMPL-1.0-or-later
//! Viewport meta tag check. A tag without `width=device-width` still earns
//! partial credit since some viewport is better than none.

use super::{CheckResult, CheckValue};
use scraper::{Html, Selector};

pub fn check(doc: &Html) -> CheckResult {
    let selector = Selector::parse(r#"meta[name="viewport"]"#).expect("valid selector");

    let Some(element) = doc.select(&selector).next() else {
        return CheckResult::fail(0.0, "Viewport meta tag is missing");
    };

    let content = element.value().attr("content").unwrap_or("").to_string();
    if content.contains("width=device-width") {
        return CheckResult::pass(10.0, "Mobile viewport is properly configured")
            .with_value(CheckValue::Text(content));
    }

    CheckResult::fail(5.0, "Viewport tag exists but may not be mobile-optimized")
        .with_value(CheckValue::Text(content))
}
