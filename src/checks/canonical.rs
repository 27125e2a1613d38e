// SPDX-License-Identifier: PMPL-1.0-or-later
//! Canonical link check

use super::{CheckResult, CheckValue};
use scraper::{Html, Selector};

pub fn check(doc: &Html) -> CheckResult {
    let selector = Selector::parse(r#"link[rel="canonical"]"#).expect("valid selector");

    let Some(element) = doc.select(&selector).next() else {
        return CheckResult::fail(0.0, "Canonical tag is missing");
    };

    match element.value().attr("href") {
        None => CheckResult::fail(0.0, "Canonical URL is empty"),
        Some("") => CheckResult::fail(0.0, "Canonical URL is empty")
            .with_value(CheckValue::Text(String::new())),
        Some(href) => CheckResult::pass(5.0, "Canonical tag is present")
            .with_value(CheckValue::Text(href.to_string())),
    }
}
