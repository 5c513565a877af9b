//! Quotation repository (read-only).

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use zzt_core::{QuotationId, QuotationNumber, VehicleImages};

use super::RepositoryError;
use crate::models::Quotation;

#[derive(Debug, sqlx::FromRow)]
struct QuotationRow {
    id: QuotationId,
    quotation_number: String,
    customer_name: Option<String>,
    vehicle_images: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<QuotationRow> for Quotation {
    type Error = RepositoryError;

    fn try_from(row: QuotationRow) -> Result<Self, Self::Error> {
        let quotation_number = QuotationNumber::parse(&row.quotation_number).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid quotation number in database: {e}"))
        })?;

        Ok(Self {
            id: row.id,
            quotation_number,
            customer_name: row.customer_name,
            vehicle_images: VehicleImages::from_column(row.vehicle_images.as_deref()),
            vehicle_images_raw: row.vehicle_images,
            created_at: row.created_at,
        })
    }
}

/// Repository for quotation lookups.
pub struct QuotationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> QuotationRepository<'a> {
    /// Create a new quotation repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a quotation by its number.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored number is malformed.
    pub async fn get_by_number(
        &self,
        number: &QuotationNumber,
    ) -> Result<Option<Quotation>, RepositoryError> {
        let row = sqlx::query_as::<_, QuotationRow>(
            r"
            SELECT id, quotation_number, customer_name, vehicle_images, created_at
            FROM quotations
            WHERE quotation_number = $1
            ",
        )
        .bind(number.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }
}
