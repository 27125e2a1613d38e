// SPDX-License-Identifier: PMPL-1.0-or-later
//! Fleet integration types for gitbot-fleet shared-context compatibility.
//!
//! These types mirror the gitbot-shared-context crate API so that seobot
//! can produce findings consumable by the fleet coordinator. When
//! gitbot-shared-context is published as a crate, this module can be
//! replaced with a direct dependency.

use crate::checks::AnalysisReport;
use crate::suggestions::SuggestionKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity levels for findings (mirrors gitbot-shared-context::Severity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Critical issue - blocks release
    Error,
    /// Should be addressed
    Warning,
    /// Informational
    Info,
}

impl Severity {
    /// Whether this severity blocks releases
    pub fn blocks_release(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Info => write!(f, "INFO"),
        }
    }
}

impl From<SuggestionKind> for Severity {
    fn from(kind: SuggestionKind) -> Self {
        match kind {
            SuggestionKind::Error => Severity::Error,
            SuggestionKind::Warning => Severity::Warning,
            SuggestionKind::Info => Severity::Info,
        }
    }
}

/// A finding from an SEO analysis, in the fleet coordinator's shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Unique identifier
    pub id: Uuid,
    /// Source bot identifier
    pub source: String,
    /// Human-readable rule name
    pub rule_name: String,
    /// Severity level
    pub severity: Severity,
    /// Detailed message
    pub message: String,
    /// Remediation priority as reported by the suggestion engine
    pub priority: String,
    /// When this finding was created
    pub created_at: DateTime<Utc>,
}

impl Finding {
    /// Create a new finding
    pub fn new(rule_name: &str, severity: Severity, message: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: "seobot".to_string(),
            rule_name: rule_name.to_string(),
            severity,
            message: message.to_string(),
            priority: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Set the remediation priority label
    pub fn with_priority(mut self, priority: &str) -> Self {
        self.priority = priority.to_string();
        self
    }
}

/// A collection of findings plus the page score, for fleet consumption
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindingSet {
    /// Aggregate page score, 0-100
    pub score: u32,
    /// All findings
    pub findings: Vec<Finding>,
}

impl FindingSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finding
    pub fn add(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Get findings by severity
    pub fn by_severity(&self, severity: Severity) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .collect()
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    /// Check if release should be blocked
    pub fn blocks_release(&self) -> bool {
        self.findings.iter().any(|f| f.severity.blocks_release())
    }

    /// Total count
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Is empty
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Convert a report's suggestions into fleet findings
pub fn findings_from_report(report: &AnalysisReport) -> FindingSet {
    let mut set = FindingSet {
        score: report.score,
        findings: Vec::new(),
    };

    for suggestion in &report.suggestions {
        set.add(
            Finding::new(
                &suggestion.title,
                suggestion.kind.into(),
                &suggestion.description,
            )
            .with_priority(&suggestion.priority.to_string()),
        );
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::analyze_html;

    #[test]
    fn failing_page_produces_blocking_findings() {
        let set = findings_from_report(&analyze_html("<html><head></head><body></body></html>"));
        assert!(set.has_errors());
        assert!(set.blocks_release());
        assert!(set.by_severity(Severity::Error).len() >= 2);
        assert!(set.findings.iter().all(|f| f.source == "seobot"));
    }

    #[test]
    fn clean_page_produces_no_findings() {
        let html = r#"<html><head>
            <title>A descriptive page title within the optimal band</title>
            <meta name="description" content="A sufficiently long meta description that lands inside the recommended one hundred twenty to one hundred sixty character window for snippets.">
            <link rel="canonical" href="https://example.com/">
            <meta property="og:title" content="t">
            <meta property="og:description" content="d">
            <meta property="og:image" content="i">
            <meta name="twitter:card" content="summary">
            <meta name="twitter:title" content="t">
            <meta name="twitter:description" content="d">
            <meta name="twitter:image" content="i">
            <meta name="viewport" content="width=device-width">
            <link rel="stylesheet" href="a.css">
        </head><body><h1>a</h1></body></html>"#;
        let set = findings_from_report(&analyze_html(html));
        assert!(set.is_empty());
        assert!(!set.blocks_release());
    }

    #[test]
    fn priority_labels_carry_through() {
        let set = findings_from_report(&analyze_html("<html><head></head><body></body></html>"));
        let errors = set.by_severity(Severity::Error);
        assert!(errors.iter().all(|f| f.priority == "high"));
    }
}
