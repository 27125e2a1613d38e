// SPDX-License-Identifier: PMPL-1.0-or-later
//! Website content retrieval through public CORS proxies.
//!
//! Direct cross-origin fetches are refused by many origins, so page markup
//! is routed through a chain of public proxy services, tried in order.
//! Retrieval failures surface before analysis ever starts; the analysis
//! core itself performs no I/O.

use crate::error::{Result, SeobotError};
use reqwest::Client;
use tracing::{info, warn};
use url::Url;

/// How a proxy expects the target URL to be supplied
#[derive(Debug, Clone, Copy)]
enum ProxyKind {
    /// Target appended verbatim to the endpoint
    PathPrefix,
    /// Target appended percent-encoded
    QueryEncoded,
    /// Target passed as a `url` query parameter; the response is a JSON
    /// envelope whose `contents` field holds the markup
    JsonEnvelope,
}

struct ProxyService {
    name: &'static str,
    endpoint: &'static str,
    kind: ProxyKind,
}

const PROXY_SERVICES: &[ProxyService] = &[
    ProxyService {
        name: "CORS Anywhere",
        endpoint: "https://cors-anywhere.herokuapp.com/",
        kind: ProxyKind::PathPrefix,
    },
    ProxyService {
        name: "CORS Proxy",
        endpoint: "https://corsproxy.io/?",
        kind: ProxyKind::QueryEncoded,
    },
    ProxyService {
        name: "AllOrigins",
        endpoint: "https://api.allorigins.win/get",
        kind: ProxyKind::JsonEnvelope,
    },
];

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

impl ProxyService {
    fn request_url(&self, target: &str) -> String {
        match self.kind {
            ProxyKind::PathPrefix => format!("{}{}", self.endpoint, target),
            ProxyKind::QueryEncoded => format!("{}{}", self.endpoint, encode(target)),
            ProxyKind::JsonEnvelope => format!("{}?url={}", self.endpoint, encode(target)),
        }
    }

    fn extract(&self, body: String) -> Result<String> {
        match self.kind {
            ProxyKind::JsonEnvelope => {
                let envelope: serde_json::Value = serde_json::from_str(&body)?;
                Ok(envelope
                    .get("contents")
                    .and_then(|c| c.as_str())
                    .unwrap_or_default()
                    .to_string())
            }
            ProxyKind::PathPrefix | ProxyKind::QueryEncoded => Ok(body),
        }
    }
}

fn encode(target: &str) -> String {
    url::form_urlencoded::byte_serialize(target.as_bytes()).collect()
}

/// Fetch a page's markup, falling back through the proxy chain. Every proxy
/// failing yields a single `Fetch` error carrying the last cause.
pub async fn fetch_website_content(client: &Client, target: &str) -> Result<String> {
    // Reject malformed targets before any network round trip
    Url::parse(target)?;

    let mut last_error = String::from("no proxy services configured");

    for proxy in PROXY_SERVICES {
        info!("Trying {} proxy", proxy.name);
        match fetch_via(client, proxy, target).await {
            Ok(content) if !content.is_empty() => {
                info!("Fetched content using {}", proxy.name);
                return Ok(content);
            }
            Ok(_) => {
                warn!("{} returned empty content", proxy.name);
                last_error = format!("{}: empty content received", proxy.name);
            }
            Err(e) => {
                warn!("{} failed: {}", proxy.name, e);
                last_error = format!("{}: {}", proxy.name, e);
            }
        }
    }

    Err(SeobotError::Fetch(format!(
        "All proxy services failed. Last error: {}. Try analyzing a saved HTML file instead.",
        last_error
    )))
}

async fn fetch_via(client: &Client, proxy: &ProxyService, target: &str) -> Result<String> {
    let response = client
        .get(proxy.request_url(target))
        .header("Accept", ACCEPT_HTML)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SeobotError::Fetch(format!(
            "HTTP {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("unknown status")
        )));
    }

    proxy.extract(response.text().await?)
}

/// Reject input that cannot plausibly be an HTML document. Runs before
/// `analyze`; the checks themselves treat missing tags as findings, not
/// errors.
pub fn validate_html(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(SeobotError::Validation("content is empty".to_string()));
    }
    if content.len() < 100 {
        return Err(SeobotError::Validation(
            "content seems too short to be valid HTML".to_string(),
        ));
    }
    if !content.contains("<html") && !content.contains("<body") {
        return Err(SeobotError::Validation(
            "content does not appear to be valid HTML".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_prefix_keeps_target_verbatim() {
        let proxy = &PROXY_SERVICES[0];
        assert_eq!(
            proxy.request_url("https://example.com/page?x=1"),
            "https://cors-anywhere.herokuapp.com/https://example.com/page?x=1"
        );
    }

    #[test]
    fn query_encoded_escapes_the_target() {
        let proxy = &PROXY_SERVICES[1];
        let url = proxy.request_url("https://example.com/page");
        assert!(url.starts_with("https://corsproxy.io/?"));
        assert!(url.contains("https%3A%2F%2Fexample.com%2Fpage"));
    }

    #[test]
    fn json_envelope_builds_query_parameter() {
        let proxy = &PROXY_SERVICES[2];
        let url = proxy.request_url("https://example.com/");
        assert!(url.starts_with("https://api.allorigins.win/get?url="));
    }

    #[test]
    fn json_envelope_extracts_contents() {
        let proxy = &PROXY_SERVICES[2];
        let body = r#"{"contents":"<html><body>hi</body></html>","status":{"http_code":200}}"#;
        assert_eq!(
            proxy.extract(body.to_string()).unwrap(),
            "<html><body>hi</body></html>"
        );
    }

    #[test]
    fn json_envelope_without_contents_is_empty() {
        let proxy = &PROXY_SERVICES[2];
        assert_eq!(proxy.extract("{}".to_string()).unwrap(), "");
    }

    #[test]
    fn validate_rejects_empty_and_short_content() {
        assert!(validate_html("").is_err());
        assert!(validate_html("   \n  ").is_err());
        assert!(validate_html("<html></html>").is_err());
    }

    #[test]
    fn validate_requires_html_markers() {
        let long_but_not_html = "x".repeat(200);
        assert!(validate_html(&long_but_not_html).is_err());
    }

    #[test]
    fn validate_accepts_plausible_documents() {
        let html = format!("<html><head></head><body>{}</body></html>", "x".repeat(100));
        assert!(validate_html(&html).is_ok());
    }
}
