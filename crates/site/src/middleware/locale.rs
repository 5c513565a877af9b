//! Locale negotiation middleware.

use axum::{
    extract::{Request, State},
    http::{
        HeaderValue,
        header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE},
    },
    middleware::Next,
    response::Response,
};
use crate::state::AppState;

/// Pick a locale from `Accept-Language`, expose it to handlers as a
/// `zzt_core::Locale` extension and set `Content-Language` on the response.
pub async fn locale_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let locale = state
        .config()
        .locales
        .negotiate(
            request
                .headers()
                .get(ACCEPT_LANGUAGE)
                .and_then(|h| h.to_str().ok()),
        )
        .clone();

    request.extensions_mut().insert(locale.clone());

    let mut response = next.run(request).await;

    if !response.headers().contains_key(CONTENT_LANGUAGE)
        && let Ok(value) = HeaderValue::from_str(locale.as_str())
    {
        response.headers_mut().insert(CONTENT_LANGUAGE, value);
    }

    response
}
