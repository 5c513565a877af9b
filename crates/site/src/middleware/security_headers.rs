//! Security headers middleware.
//!
//! The Content-Security-Policy `img-src` directive is derived from the image
//! allowlist, so pages can only load vehicle and package images from hosts
//! the site is configured for.

use axum::{
    extract::{Request, State},
    http::{
        HeaderValue,
        header::{CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS},
    },
    middleware::Next,
    response::Response,
};
use zzt_core::ImageDomainAllowlist;

use crate::state::AppState;

/// Build the CSP header value for an image allowlist.
#[must_use]
pub fn content_security_policy(images: &ImageDomainAllowlist) -> String {
    format!(
        "default-src 'self'; \
         img-src {}; \
         object-src 'none'; \
         base-uri 'self'; \
         frame-ancestors 'none'",
        images.csp_sources()
    )
}

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY`
/// - `X-Content-Type-Options: nosniff`
/// - `Referrer-Policy: strict-origin-when-cross-origin`
/// - `Content-Security-Policy` (see [`content_security_policy`])
pub async fn security_headers_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(
        REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(CONTENT_SECURITY_POLICY, state.csp().clone());

    response
}
