// SPDX-License-Identifier: PMPL-1.0-or-later
//! Twitter Card check. Same presence-counting shape as the Open Graph check
//! over four tags, 2.5 points each. The fractional step is deliberate and
//! only the report aggregate rounds.

use super::{status_bucket, CheckResult, CheckValue};
use scraper::{Html, Selector};
use std::collections::BTreeMap;

const TWITTER_TAGS: &[(&str, &str)] = &[
    ("card", r#"meta[name="twitter:card"]"#),
    ("title", r#"meta[name="twitter:title"]"#),
    ("description", r#"meta[name="twitter:description"]"#),
    ("image", r#"meta[name="twitter:image"]"#),
];

const POINTS_PER_TAG: f64 = 2.5;

pub fn check(doc: &Html) -> CheckResult {
    let mut presence = BTreeMap::new();
    let mut found = 0;

    for (name, selector) in TWITTER_TAGS {
        let selector = Selector::parse(selector).expect("valid selector");
        let present = doc.select(&selector).next().is_some();
        if present {
            found += 1;
        }
        presence.insert((*name).to_string(), present);
    }

    let total = TWITTER_TAGS.len();
    let status = status_bucket(found, total);
    let message = format!("{}/{} Twitter Card tags present", found, total);

    CheckResult::fail(found as f64 * POINTS_PER_TAG, &message)
        .with_status(status)
        .with_value(CheckValue::TagPresence(presence))
}
