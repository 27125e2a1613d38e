// SPDX-License-Identifier: PMPL-1.0-or-later
//! Open Graph check.
//!
//! Presence-only: each of og:title, og:description, og:image is worth 5
//! points, and the status bucket gives partial credit between "none" and
//! "all three".

use super::{status_bucket, CheckResult, CheckValue};
use scraper::{Html, Selector};
use std::collections::BTreeMap;

const OG_TAGS: &[(&str, &str)] = &[
    ("title", r#"meta[property="og:title"]"#),
    ("description", r#"meta[property="og:description"]"#),
    ("image", r#"meta[property="og:image"]"#),
];

const POINTS_PER_TAG: f64 = 5.0;

pub fn check(doc: &Html) -> CheckResult {
    let mut presence = BTreeMap::new();
    let mut found = 0;

    for (name, selector) in OG_TAGS {
        let selector = Selector::parse(selector).expect("valid selector");
        let present = doc.select(&selector).next().is_some();
        if present {
            found += 1;
        }
        presence.insert((*name).to_string(), present);
    }

    let total = OG_TAGS.len();
    let status = status_bucket(found, total);
    let message = format!("{}/{} Open Graph tags present", found, total);

    CheckResult::fail(found as f64 * POINTS_PER_TAG, &message)
        .with_status(status)
        .with_value(CheckValue::TagPresence(presence))
}
