//! HTTP middleware stack for the site.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Locale negotiation (`Content-Language`)
//! 5. Security headers (CSP with the image allowlist, framing, sniffing)

pub mod locale;
pub mod request_id;
pub mod security_headers;

pub use locale::locale_middleware;
pub use request_id::{RequestId, request_id_middleware};
pub use security_headers::security_headers_middleware;
