// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report rendering.
//!
//! Two formats: human-readable text and structured JSON (the serde
//! serialization of [`AnalysisReport`], lossless for downstream tooling).

use crate::checks::{AnalysisReport, CheckStatus};

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Generate a report in the requested format
pub fn generate_report(report: &AnalysisReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_text_report(report),
        OutputFormat::Json => generate_json_report(report),
    }
}

fn status_label(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Passed => "PASS",
        CheckStatus::Warning => "WARN",
        CheckStatus::Failed => "FAIL",
    }
}

/// Render fractional points without a trailing `.0`
fn format_points(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{:.1}", score)
    }
}

fn generate_text_report(report: &AnalysisReport) -> String {
    let mut output = String::new();

    output.push_str("=== Seobot On-Page SEO Report ===\n\n");
    output.push_str(&format!("Score: {}/100\n\n", report.score));

    output.push_str("--- Checks ---\n");
    for (name, check) in report.checks() {
        output.push_str(&format!(
            "[{}] {}: {} ({} pts)\n",
            status_label(check.status),
            name,
            check.message,
            format_points(check.score)
        ));
        for issue in &check.issues {
            output.push_str(&format!("       - {}\n", issue));
        }
    }

    if report.suggestions.is_empty() {
        output.push_str("\nNo suggestions. The page covers every rule.\n");
        return output;
    }

    output.push_str(&format!(
        "\n--- Suggestions ({}) ---\n",
        report.suggestions.len()
    ));
    for suggestion in &report.suggestions {
        output.push_str(&format!(
            "[{}] {}: {}\n",
            suggestion.priority, suggestion.title, suggestion.description
        ));
    }

    output
}

fn generate_json_report(report: &AnalysisReport) -> String {
    serde_json::to_string_pretty(report)
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize report: {}\"}}", e))
}
