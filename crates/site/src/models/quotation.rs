//! Quotation domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use zzt_core::{ImageDomainAllowlist, QuotationId, QuotationNumber, VehicleImages};

/// A generated price quote (domain type).
///
/// Only the columns the tooling reads are mapped; pricing lives elsewhere.
#[derive(Debug, Clone, Serialize)]
pub struct Quotation {
    /// Database ID.
    pub id: QuotationId,
    /// Human-readable number, e.g. `ZZT-2025-0042`.
    pub quotation_number: QuotationNumber,
    /// Customer the quote was made for, if recorded.
    pub customer_name: Option<String>,
    /// The image column exactly as stored.
    pub vehicle_images_raw: Option<String>,
    /// The image column parsed into URLs.
    pub vehicle_images: VehicleImages,
    /// When the quote was generated.
    pub created_at: DateTime<Utc>,
}

/// A vehicle image URL annotated with the allowlist decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotationImage {
    pub url: String,
    pub allowed: bool,
}

impl Quotation {
    /// Pair each image URL with whether its host is on `allowlist`.
    #[must_use]
    pub fn images(&self, allowlist: &ImageDomainAllowlist) -> Vec<QuotationImage> {
        self.vehicle_images
            .iter()
            .map(|url| QuotationImage {
                url: url.to_owned(),
                allowed: allowlist.allows(url),
            })
            .collect()
    }
}
