//! Tour package listing.

use axum::{Json, extract::State};

use crate::db::PackageRepository;
use crate::error::Result;
use crate::models::Record;
use crate::state::AppState;

/// `GET /api/packages` - every package row as a JSON object.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Record>>> {
    let packages = PackageRepository::new(state.pool()).list_all().await?;
    tracing::debug!(count = packages.len(), "Listed packages");
    Ok(Json(packages))
}
