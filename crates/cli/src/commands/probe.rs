//! HTTP smoke test.
//!
//! Issues a single GET, buffers the whole body and tries to parse it as JSON.
//!
//! ```bash
//! zzt-cli probe
//! zzt-cli probe --url http://localhost:3000/api/quotations/ZZT-2025-0042/images
//! zzt-cli probe --require-success   # exit 1 unless 2xx + JSON
//! ```

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;

use super::CommandError;
use crate::output;

/// Endpoint probed when no URL is given.
pub const DEFAULT_URL: &str = "http://localhost:3000/api/packages";

/// The buffered response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ProbeBody {
    /// The body parsed as JSON.
    Json(Value),
    /// The body did not parse; kept as (lossy UTF-8) text.
    Text(String),
}

/// What the probe saw.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: ProbeBody,
}

impl ProbeReport {
    /// 2xx status and a JSON body.
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        self.status >= 200 && self.status < 300 && matches!(self.body, ProbeBody::Json(_))
    }
}

/// Perform the GET and classify the body.
///
/// A non-2xx status is part of the report, not an error.
///
/// # Errors
///
/// Returns `CommandError::Http` if the client cannot be built, the request
/// cannot be sent, times out, or the body cannot be read.
pub async fn probe(url: &str, timeout: Duration) -> Result<ProbeReport, CommandError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    tracing::info!(%url, "Sending probe request");
    let response = client.get(url).send().await?;

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = response.bytes().await?;

    let body = match serde_json::from_slice::<Value>(&bytes) {
        Ok(value) => ProbeBody::Json(value),
        Err(e) => {
            tracing::warn!(error = %e, "Response body is not valid JSON");
            ProbeBody::Text(String::from_utf8_lossy(&bytes).into_owned())
        }
    };

    Ok(ProbeReport {
        url: url.to_owned(),
        status: status.as_u16(),
        content_type,
        body,
    })
}

/// Run the smoke test and print the status line and body.
///
/// # Errors
///
/// Transport failures are always errors. With `require_success`, a non-2xx
/// status or a non-JSON body is an error too.
pub async fn run(
    url: &str,
    timeout: Duration,
    require_success: bool,
) -> Result<ProbeReport, CommandError> {
    let report = probe(url, timeout).await?;

    output::emit(&format!(
        "HTTP {} {}{}",
        report.status,
        report.url,
        report
            .content_type
            .as_deref()
            .map(|ct| format!(" ({ct})"))
            .unwrap_or_default()
    ))?;
    match &report.body {
        ProbeBody::Json(value) => output::emit_json(value)?,
        ProbeBody::Text(text) => output::emit(text)?,
    }

    if require_success && !report.is_healthy() {
        return Err(CommandError::ProbeFailed(format!(
            "expected a 2xx JSON response from {}, got HTTP {}{}",
            report.url,
            report.status,
            if matches!(report.body, ProbeBody::Json(_)) {
                ""
            } else {
                " with a non-JSON body"
            }
        )));
    }

    Ok(report)
}
