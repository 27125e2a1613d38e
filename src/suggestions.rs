// SPDX-License-Identifier: PMPL-1.0-or-later
//! Remediation suggestions derived from a report.
//!
//! A fixed rule list, evaluated in order, each contributing at most one
//! suggestion; the final list is sorted by descending priority weight with
//! rule order as the tiebreak.

use crate::checks::{AnalysisReport, CheckValue};
use serde::{Deserialize, Serialize};

/// Suggestion class, mirrored in the rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Error,
    Warning,
    Info,
}

/// Remediation urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort weight, larger first
    pub fn weight(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// One remediation recommendation. Constructed once during report assembly,
/// immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl Suggestion {
    fn new(kind: SuggestionKind, title: &str, description: String, priority: Priority) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description,
            priority,
        }
    }
}

/// Derive the suggestion list from the per-check outcomes
pub fn generate(report: &AnalysisReport) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if !report.title.passed {
        suggestions.push(Suggestion::new(
            SuggestionKind::Error,
            "Fix Title Tag",
            report.title.message.clone(),
            Priority::High,
        ));
    }

    if !report.meta_description.passed {
        suggestions.push(Suggestion::new(
            SuggestionKind::Error,
            "Add Meta Description",
            report.meta_description.message.clone(),
            Priority::High,
        ));
    }

    if !report.headings.passed {
        suggestions.push(Suggestion::new(
            SuggestionKind::Warning,
            "Improve Heading Structure",
            report.headings.message.clone(),
            Priority::Medium,
        ));
    }

    if !report.images.passed {
        let missing = match &report.images.value {
            Some(CheckValue::ImageCounts { total, with_alt }) => total - with_alt,
            _ => 0,
        };
        suggestions.push(Suggestion::new(
            SuggestionKind::Warning,
            "Add Alt Text to Images",
            format!("Add descriptive alt text to {} images", missing),
            Priority::Medium,
        ));
    }

    if !report.viewport.passed {
        suggestions.push(Suggestion::new(
            SuggestionKind::Warning,
            "Mobile Optimization",
            "Add viewport meta tag for mobile responsiveness".to_string(),
            Priority::Medium,
        ));
    }

    if !report.open_graph.passed {
        suggestions.push(Suggestion::new(
            SuggestionKind::Info,
            "Social Media Optimization",
            "Add Open Graph tags for better social media sharing".to_string(),
            Priority::Low,
        ));
    }

    if !report.twitter.passed {
        suggestions.push(Suggestion::new(
            SuggestionKind::Info,
            "Twitter Card Optimization",
            "Add Twitter Card tags for better Twitter sharing".to_string(),
            Priority::Low,
        ));
    }

    // sort_by is stable, so equal priorities keep rule order
    suggestions.sort_by(|a, b| b.priority.weight().cmp(&a.priority.weight()));
    suggestions
}
