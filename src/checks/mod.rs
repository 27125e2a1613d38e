// SPDX-License-Identifier: PMPL-1.0-or-later
//! On-page SEO checks.
//!
//! Each check module inspects the parsed document independently and returns
//! a [`CheckResult`]. [`analyze`] runs all ten, sums the scores into the
//! 0-100 aggregate, and derives the suggestion list. The whole pass is pure:
//! no I/O, no clock reads, no state shared between calls.

pub mod canonical;
pub mod headings;
pub mod images;
pub mod meta_description;
pub mod meta_keywords;
pub mod open_graph;
pub mod styling;
pub mod title;
pub mod twitter;
pub mod viewport;

use crate::suggestions::{self, Suggestion};
use scraper::Html;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Three-way outcome classification. Single-tag checks map directly from
/// `passed`; presence-counting checks use the middle bucket for partial
/// credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Warning,
    Failed,
}

/// Raw data a check inspected, kept for display and export. Renderers
/// pattern-match on the variant instead of probing the shape at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckValue {
    /// Tag text or attribute content
    Text(String),
    /// Per-tag presence for multi-tag checks
    TagPresence(BTreeMap<String, bool>),
    /// Heading element counts
    HeadingCounts { h1: usize, h2: usize, h3: usize },
    /// Image totals for the alt-text check
    ImageCounts { total: usize, with_alt: usize },
    /// Inline vs external styling counts
    StyleCounts {
        inline_styles: usize,
        external_css: usize,
    },
}

/// Outcome of one rule evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the check meets its optimal criterion
    pub passed: bool,
    /// Points awarded. Fractional on purpose: the Twitter Card check awards
    /// 2.5 per tag; rounding happens once, at aggregation.
    pub score: f64,
    /// The inspected raw data, absent when the tag itself is absent
    pub value: Option<CheckValue>,
    /// Human-readable explanation of the outcome
    pub message: String,
    /// Three-way classification
    pub status: CheckStatus,
    /// Itemized problems, for checks where more than one can coexist
    pub issues: Vec<String>,
}

impl CheckResult {
    /// A satisfied check
    pub fn pass(score: f64, message: &str) -> Self {
        Self {
            passed: true,
            score,
            value: None,
            message: message.to_string(),
            status: CheckStatus::Passed,
            issues: Vec::new(),
        }
    }

    /// An unsatisfied check (partial credit still possible via `score`)
    pub fn fail(score: f64, message: &str) -> Self {
        Self {
            passed: false,
            score,
            value: None,
            message: message.to_string(),
            status: CheckStatus::Failed,
            issues: Vec::new(),
        }
    }

    /// Attach the inspected value
    pub fn with_value(mut self, value: CheckValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Override the status bucket; `passed` follows the new status
    pub fn with_status(mut self, status: CheckStatus) -> Self {
        self.passed = status == CheckStatus::Passed;
        self.status = status;
        self
    }

    /// Attach itemized issues
    pub fn with_issues(mut self, issues: Vec<String>) -> Self {
        self.issues = issues;
        self
    }
}

/// Status bucket for presence-counting checks: under half the tags is a
/// failure, anything short of all of them is a warning.
pub(crate) fn status_bucket(found: usize, total: usize) -> CheckStatus {
    let percentage = found as f64 / total as f64 * 100.0;
    if percentage < 50.0 {
        CheckStatus::Failed
    } else if percentage < 100.0 {
        CheckStatus::Warning
    } else {
        CheckStatus::Passed
    }
}

/// Aggregate report for one analyzed document.
///
/// A typed record rather than a keyed map: adding a check means adding a
/// field, and every renderer gets exhaustiveness checking for free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub title: CheckResult,
    pub meta_description: CheckResult,
    pub meta_keywords: CheckResult,
    pub canonical: CheckResult,
    pub open_graph: CheckResult,
    pub twitter: CheckResult,
    pub headings: CheckResult,
    pub images: CheckResult,
    pub viewport: CheckResult,
    pub styling: CheckResult,
    /// Sum of all check scores, rounded, capped at 100
    pub score: u32,
    /// Remediation items ordered by descending priority
    pub suggestions: Vec<Suggestion>,
}

impl AnalysisReport {
    /// The ten checks in report order, for renderers that walk the record
    pub fn checks(&self) -> [(&'static str, &CheckResult); 10] {
        [
            ("title", &self.title),
            ("meta_description", &self.meta_description),
            ("meta_keywords", &self.meta_keywords),
            ("canonical", &self.canonical),
            ("open_graph", &self.open_graph),
            ("twitter", &self.twitter),
            ("headings", &self.headings),
            ("images", &self.images),
            ("viewport", &self.viewport),
            ("styling", &self.styling),
        ]
    }
}

/// Run every check against the document and assemble the report
pub fn analyze(doc: &Html) -> AnalysisReport {
    let mut report = AnalysisReport {
        title: title::check(doc),
        meta_description: meta_description::check(doc),
        meta_keywords: meta_keywords::check(doc),
        canonical: canonical::check(doc),
        open_graph: open_graph::check(doc),
        twitter: twitter::check(doc),
        headings: headings::check(doc),
        images: images::check(doc),
        viewport: viewport::check(doc),
        styling: styling::check(doc),
        score: 0,
        suggestions: Vec::new(),
    };

    report.score = total_score(&report);
    report.suggestions = suggestions::generate(&report);
    report
}

/// Parse markup and analyze it. `Html::parse_document` is lenient; callers
/// wanting to reject junk input run [`crate::fetcher::validate_html`] first.
pub fn analyze_html(html: &str) -> AnalysisReport {
    let doc = Html::parse_document(html);
    analyze(&doc)
}

fn total_score(report: &AnalysisReport) -> u32 {
    let sum: f64 = report.checks().iter().map(|(_, c)| c.score).sum();
    // Check maxima sum past 100 (heading bonuses, keywords-absent credit),
    // so the cap is load-bearing for fully optimal pages
    (sum.round() as u32).min(100)
}
