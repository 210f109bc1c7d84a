//! Client for the plan usage endpoint.

use chrono::{DateTime, Utc};
use cockpit_types::UsageData;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::UsageErrorCode;
use crate::{CockpitError, Result};

pub const USAGE_API_URL: &str = "https://api.claude.ai/api/usage";
pub const USAGE_TIMEOUT: Duration = Duration::from_secs(3);
/// Environment variable holding the session cookie.
pub const SESSION_KEY_ENV: &str = "CLAUDE_SESSION_KEY";

#[derive(Debug, Deserialize)]
struct UsageResponse {
    plan_name: Option<String>,
    five_hour: Option<UsageWindow>,
    seven_day: Option<UsageWindow>,
}

#[derive(Debug, Deserialize)]
struct UsageWindow {
    #[serde(default)]
    usage_percent: f64,
    reset_at: Option<String>,
}

/// Fetch usage with the given session key. Every failure, a missing key
/// included, is reported as `None`.
pub async fn fetch_usage(session_key: Option<&str>) -> Option<UsageData> {
    let Some(key) = session_key.filter(|k| !k.is_empty()) else {
        debug!(target: "cockpit::usage", "No session key, skipping usage fetch");
        return None;
    };

    match request_usage(USAGE_API_URL, key, USAGE_TIMEOUT).await {
        Ok(usage) => Some(usage),
        Err(e) => {
            debug!(target: "cockpit::usage", "{}", e);
            None
        }
    }
}

/// One GET against `url`, no retries.
pub async fn request_usage(url: &str, session_key: &str, timeout: Duration) -> Result<UsageData> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| CockpitError::usage(UsageErrorCode::Network, e.to_string()))?;

    let response = client
        .get(url)
        .header(reqwest::header::COOKIE, format!("sessionKey={}", session_key))
        .header(reqwest::header::ACCEPT, "application/json")
        .header(
            reqwest::header::USER_AGENT,
            concat!("claude-code-cockpit/", env!("CARGO_PKG_VERSION")),
        )
        .send()
        .await
        .map_err(transport_error)?;

    let status = response.status().as_u16();
    if let Some(code) = classify_status(status) {
        return Err(CockpitError::usage(code, format!("HTTP {}", status)));
    }

    let body = response.text().await.map_err(transport_error)?;
    parse_response(&body)
}

fn transport_error(e: reqwest::Error) -> CockpitError {
    if e.is_timeout() {
        CockpitError::usage(UsageErrorCode::Timeout, "Request timeout")
    } else {
        CockpitError::usage(UsageErrorCode::Network, e.to_string())
    }
}

/// Error class for a non-success status.
fn classify_status(status: u16) -> Option<UsageErrorCode> {
    match status {
        200 => None,
        401 | 403 => Some(UsageErrorCode::Auth),
        429 => Some(UsageErrorCode::RateLimit),
        other => Some(UsageErrorCode::Http(other)),
    }
}

pub fn parse_response(body: &str) -> Result<UsageData> {
    let response: UsageResponse = serde_json::from_str(body)
        .map_err(|e| CockpitError::usage(UsageErrorCode::Parse, format!("Invalid JSON response: {}", e)))?;

    let window = |w: &Option<UsageWindow>| {
        w.as_ref()
            .map(|w| (w.usage_percent, parse_reset(w.reset_at.as_deref())))
            .unwrap_or((0.0, None))
    };
    let (five_hour, five_hour_reset_at) = window(&response.five_hour);
    let (seven_day, seven_day_reset_at) = window(&response.seven_day);

    Ok(UsageData {
        plan_name: response
            .plan_name
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "Unknown".to_string()),
        five_hour,
        seven_day,
        five_hour_reset_at,
        seven_day_reset_at,
    })
}

fn parse_reset(value: Option<&str>) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value?)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Serve one canned HTTP response on a local port.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}/api/usage", addr)
    }

    fn code_of(err: CockpitError) -> UsageErrorCode {
        match err {
            CockpitError::UsageApi { code, .. } => code,
            other => panic!("unexpected error: {}", other),
        }
    }

    // ==================== Parsing ====================

    #[test]
    fn test_parse_response() {
        let usage = parse_response(
            r#"{"plan_name":"Max","five_hour":{"usage_percent":42.5,"reset_at":"2025-06-01T14:30:00Z"},"seven_day":{"usage_percent":10,"reset_at":null}}"#,
        )
        .unwrap();
        assert_eq!(usage.plan_name, "Max");
        assert_eq!(usage.five_hour, 42.5);
        assert_eq!(usage.seven_day, 10.0);
        assert_eq!(
            usage.five_hour_reset_at,
            Some(Utc.with_ymd_and_hms(2025, 6, 1, 14, 30, 0).unwrap())
        );
        assert_eq!(usage.seven_day_reset_at, None);
    }

    #[test]
    fn test_parse_response_defaults() {
        let usage = parse_response("{}").unwrap();
        assert_eq!(usage.plan_name, "Unknown");
        assert_eq!(usage.five_hour, 0.0);
        assert!(usage.five_hour_reset_at.is_none());
    }

    #[test]
    fn test_parse_response_bad_json() {
        let err = parse_response("<html>").unwrap_err();
        assert_eq!(code_of(err), UsageErrorCode::Parse);
    }

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(200), None);
        assert_eq!(classify_status(401), Some(UsageErrorCode::Auth));
        assert_eq!(classify_status(403), Some(UsageErrorCode::Auth));
        assert_eq!(classify_status(429), Some(UsageErrorCode::RateLimit));
        assert_eq!(classify_status(500), Some(UsageErrorCode::Http(500)));
    }

    // ==================== Requests ====================

    #[tokio::test]
    async fn test_request_success() {
        let url = serve_once("200 OK", r#"{"plan_name":"Pro","five_hour":{"usage_percent":81}}"#);
        let usage = request_usage(&url, "key", USAGE_TIMEOUT).await.unwrap();
        assert_eq!(usage.plan_name, "Pro");
        assert_eq!(usage.five_hour, 81.0);
    }

    #[tokio::test]
    async fn test_request_rate_limited() {
        let url = serve_once("429 Too Many Requests", "{}");
        let err = request_usage(&url, "key", USAGE_TIMEOUT).await.unwrap_err();
        assert_eq!(code_of(err), UsageErrorCode::RateLimit);
    }

    #[tokio::test]
    async fn test_request_auth_failure() {
        let url = serve_once("401 Unauthorized", "{}");
        let err = request_usage(&url, "bad", USAGE_TIMEOUT).await.unwrap_err();
        assert_eq!(code_of(err), UsageErrorCode::Auth);
    }

    #[tokio::test]
    async fn test_fetch_without_key_is_none() {
        assert!(fetch_usage(None).await.is_none());
        assert!(fetch_usage(Some("")).await.is_none());
    }
}
