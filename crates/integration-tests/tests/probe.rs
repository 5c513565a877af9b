//! The HTTP smoke test against live in-process servers.

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use zzt_cli::commands::CommandError;
use zzt_cli::commands::probe::{ProbeBody, probe, run};
use zzt_integration_tests::offline_state;

const TIMEOUT: Duration = Duration::from_secs(5);

/// Serve `app` on an ephemeral port and return its base URL.
async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });
    format!("http://{addr}")
}

fn fixture_app() -> Router {
    Router::new()
        .route(
            "/api/packages",
            get(|| async { Json(json!([{"id": 1, "slug": "phi-phi-day-trip"}])) }),
        )
        .route("/plain", get(|| async { "not json at all" }))
        .route(
            "/broken",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Internal server error"})),
                )
            }),
        )
}

#[tokio::test]
async fn test_probe_parses_json_body() {
    let base = serve(fixture_app()).await;
    let report = probe(&format!("{base}/api/packages"), TIMEOUT)
        .await
        .expect("probe");

    assert_eq!(report.status, 200);
    assert!(
        report
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("application/json"))
    );
    assert_eq!(
        report.body,
        ProbeBody::Json(json!([{"id": 1, "slug": "phi-phi-day-trip"}]))
    );
    assert!(report.is_healthy());
}

#[tokio::test]
async fn test_probe_keeps_non_json_as_text() {
    let base = serve(fixture_app()).await;
    let report = probe(&format!("{base}/plain"), TIMEOUT).await.expect("probe");

    assert_eq!(report.status, 200);
    assert_eq!(report.body, ProbeBody::Text("not json at all".to_owned()));
    assert!(!report.is_healthy());
}

#[tokio::test]
async fn test_probe_reports_error_status_without_failing() {
    let base = serve(fixture_app()).await;
    let report = probe(&format!("{base}/broken"), TIMEOUT).await.expect("probe");
    assert_eq!(report.status, 500);
    assert!(matches!(report.body, ProbeBody::Json(_)));
}

#[tokio::test]
async fn test_require_success_turns_bad_status_into_error() {
    let base = serve(fixture_app()).await;

    let err = run(&format!("{base}/broken"), TIMEOUT, true)
        .await
        .expect_err("500 must fail");
    assert!(matches!(err, CommandError::ProbeFailed(_)));

    let ok = run(&format!("{base}/api/packages"), TIMEOUT, true).await;
    assert!(ok.is_ok());
}

#[tokio::test]
async fn test_probe_against_site_router() {
    let base = serve(zzt_site::routes::app(offline_state())).await;

    let health = probe(&format!("{base}/health"), TIMEOUT).await.expect("probe");
    assert_eq!(health.status, 200);
    assert_eq!(health.body, ProbeBody::Text("ok".to_owned()));

    let bad = probe(&format!("{base}/api/quotations/nope/images"), TIMEOUT)
        .await
        .expect("probe");
    assert_eq!(bad.status, 400);
    assert!(matches!(bad.body, ProbeBody::Json(_)));
}

#[tokio::test]
async fn test_probe_times_out() {
    let slow = Router::new().route(
        "/slow",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "late"
        }),
    );
    let base = serve(slow).await;

    let result = probe(&format!("{base}/slow"), Duration::from_millis(200)).await;
    assert!(matches!(result, Err(CommandError::Http(_))));
}
