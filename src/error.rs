// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for seobot

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeobotError>;

#[derive(Error, Debug)]
pub enum SeobotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Invalid HTML input: {0}")]
    Validation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
