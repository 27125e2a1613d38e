// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt-text check.
//!
//! Scored by the share of images carrying non-empty alt text: 100% earns 10
//! points, then 8 / 6 / 3 at the 80% and 60% tiers. A page without images
//! passes vacuously.

use super::{CheckResult, CheckValue};
use scraper::{Html, Selector};

pub fn check(doc: &Html) -> CheckResult {
    let selector = Selector::parse("img").expect("valid selector");

    let mut total = 0;
    let mut with_alt = 0;
    for element in doc.select(&selector) {
        total += 1;
        if element
            .value()
            .attr("alt")
            .is_some_and(|alt| !alt.trim().is_empty())
        {
            with_alt += 1;
        }
    }

    if total == 0 {
        return CheckResult::pass(10.0, "No images found")
            .with_value(CheckValue::ImageCounts { total: 0, with_alt: 0 });
    }

    let percentage = with_alt as f64 / total as f64 * 100.0;
    let score = if percentage == 100.0 {
        10.0
    } else if percentage >= 80.0 {
        8.0
    } else if percentage >= 60.0 {
        6.0
    } else {
        3.0
    };

    let message = format!(
        "{}/{} images have alt text ({:.1}%)",
        with_alt, total, percentage
    );
    let result = if percentage >= 80.0 {
        CheckResult::pass(score, &message)
    } else {
        CheckResult::fail(score, &message)
    };
    result.with_value(CheckValue::ImageCounts { total, with_alt })
}
