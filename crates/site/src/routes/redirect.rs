//! Legacy route redirects.
//!
//! The old booking form moved to the quotation flow. Bookmarks and printed
//! links still point at `/booking`, so it answers every method with a
//! temporary redirect. The query string is dropped.

use axum::response::Redirect;

/// Path of the retired booking form.
pub const LEGACY_BOOKING_PATH: &str = "/booking";

/// Where the booking form lives now.
pub const QUOTATION_PATH: &str = "/quotation";

/// Redirect `/booking` to `/quotation` (307).
pub async fn legacy_booking() -> Redirect {
    Redirect::temporary(QUOTATION_PATH)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header::LOCATION},
        routing::any,
    };
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        Router::new().route(LEGACY_BOOKING_PATH, any(legacy_booking))
    }

    async fn send(method: Method, uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let location = response
            .headers()
            .get(LOCATION)
            .map(|v| v.to_str().unwrap().to_owned())
            .unwrap_or_default();
        (response.status(), location)
    }

    #[tokio::test]
    async fn test_redirects_temporarily() {
        let (status, location) = send(Method::GET, "/booking").await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location, "/quotation");
    }

    #[tokio::test]
    async fn test_ignores_query_and_method() {
        for (method, uri) in [
            (Method::GET, "/booking?tour=phuket&pax=4"),
            (Method::POST, "/booking"),
            (Method::HEAD, "/booking?x=1"),
        ] {
            let (status, location) = send(method, uri).await;
            assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
            assert_eq!(location, QUOTATION_PATH);
        }
    }
}
