//! Application state shared across handlers.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;
use sqlx::PgPool;

use crate::config::SiteConfig;
use crate::middleware::security_headers::content_security_policy;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    pool: PgPool,
    csp: HeaderValue,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Site configuration
    /// * `pool` - `PostgreSQL` connection pool
    ///
    /// # Errors
    ///
    /// Returns an error if the configured image domains cannot be rendered
    /// into a Content-Security-Policy header.
    pub fn new(config: SiteConfig, pool: PgPool) -> Result<Self, InvalidHeaderValue> {
        let csp = HeaderValue::from_str(&content_security_policy(&config.image_domains))?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, pool, csp }),
        })
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// The precomputed Content-Security-Policy header value.
    #[must_use]
    pub fn csp(&self) -> &HeaderValue {
        &self.inner.csp
    }
}
