// SPDX-License-Identifier: PMPL-1.0-or-later
//! Seobot - On-Page SEO Analysis Bot
//!
//! Part of the gitbot-fleet ecosystem. Seobot evaluates a single HTML
//! document against a fixed set of on-page SEO rules and produces a
//! composite 0-100 score plus prioritized improvement suggestions.
//!
//! ## Checks
//!
//! - **Title**: tag present, 30-60 characters
//! - **Meta Description**: tag present, 120-160 characters
//! - **Meta Keywords**: optional; only an empty tag is penalized
//! - **Canonical**: `link[rel="canonical"]` with a non-empty href
//! - **Open Graph**: og:title / og:description / og:image presence
//! - **Twitter Card**: twitter:card / title / description / image presence
//! - **Headings**: exactly one h1, hierarchy bonuses for h1+h2 and h2+h3
//! - **Images**: share of `<img>` elements with non-empty alt text
//! - **Viewport**: mobile viewport configuration
//! - **Styling**: inline style count and external stylesheet presence
//!
//! The analysis core ([`analyze`]) is a pure function over a parsed
//! document: no I/O, no clock, safe to call concurrently. Retrieval
//! ([`fetcher`]) and rendering ([`report`]) live at the boundary.

pub mod checks;
pub mod error;
pub mod fetcher;
pub mod fleet;
pub mod report;
pub mod suggestions;

pub use checks::{analyze, analyze_html, AnalysisReport, CheckResult, CheckStatus, CheckValue};
pub use error::{Result, SeobotError};
pub use suggestions::{Priority, Suggestion, SuggestionKind};
