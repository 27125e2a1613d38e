// SPDX-License-Identifier: PMPL-1.0-or-later
//! Title tag check.
//!
//! Search engines truncate titles around 60 characters and treat very short
//! ones as weak signals, so the optimal band is 30-60 characters inclusive.

use super::{CheckResult, CheckValue};
use scraper::{Html, Selector};

pub fn check(doc: &Html) -> CheckResult {
    let selector = Selector::parse("title").expect("valid selector");

    let Some(element) = doc.select(&selector).next() else {
        return CheckResult::fail(0.0, "Title tag is missing");
    };

    let text = element.text().collect::<String>().trim().to_string();
    let length = text.chars().count();

    if length == 0 {
        return CheckResult::fail(0.0, "Title tag is empty").with_value(CheckValue::Text(text));
    }

    if length < 30 {
        return CheckResult::fail(10.0, "Title is too short (recommended: 30-60 characters)")
            .with_value(CheckValue::Text(text));
    }

    if length > 60 {
        return CheckResult::fail(10.0, "Title is too long (recommended: 30-60 characters)")
            .with_value(CheckValue::Text(text));
    }

    CheckResult::pass(15.0, "Title tag is optimal").with_value(CheckValue::Text(text))
}
