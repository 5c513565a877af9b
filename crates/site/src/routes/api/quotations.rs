//! Quotation image lookup.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use zzt_core::QuotationNumber;

use crate::db::QuotationRepository;
use crate::error::{AppError, Result};
use crate::models::QuotationImage;
use crate::state::AppState;

/// Response body for [`images`].
#[derive(Debug, Serialize)]
pub struct QuotationImagesResponse {
    pub quotation_number: QuotationNumber,
    pub images: Vec<QuotationImage>,
}

/// `GET /api/quotations/{number}/images`
///
/// # Errors
///
/// 400 for a malformed number, 404 for an unknown quotation.
pub async fn images(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<QuotationImagesResponse>> {
    let number =
        QuotationNumber::parse(&number).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let quotation = QuotationRepository::new(state.pool())
        .get_by_number(&number)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("quotation {number}")))?;

    Ok(Json(QuotationImagesResponse {
        images: quotation.images(&state.config().image_domains),
        quotation_number: quotation.quotation_number,
    }))
}
