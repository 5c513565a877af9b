//! Quotation image dump.
//!
//! # Usage
//!
//! ```bash
//! zzt-cli quotation images ZZT-2025-0042
//! zzt-cli --format json quotation images ZZT-2025-0042
//! ```

use std::fmt::Write;

use serde::Serialize;
use zzt_core::{ImageDomainAllowlist, QuotationNumber};
use zzt_site::db::QuotationRepository;
use zzt_site::models::{Quotation, QuotationImage};

use super::{CommandError, connect};
use crate::output::{self, OutputFormat};

#[derive(Serialize)]
struct ImagesDump<'a> {
    quotation_number: &'a QuotationNumber,
    raw: Option<&'a str>,
    images: Vec<QuotationImage>,
}

/// Look up a quotation by number and print its vehicle image URLs.
///
/// The number is validated before any connection is made.
///
/// # Errors
///
/// Returns `CommandError::InvalidQuotationNumber` for a malformed number,
/// `CommandError::QuotationNotFound` if no row matches, or a database error.
pub async fn images(number: &str, format: OutputFormat) -> Result<Quotation, CommandError> {
    let number = QuotationNumber::parse(number)?;
    let allowlist = zzt_site::config::image_domains_from_env();

    let pool = connect().await?;
    tracing::info!(quotation_number = %number, "Looking up quotation");
    let result = QuotationRepository::new(&pool).get_by_number(&number).await;
    pool.close().await;

    let quotation = result?.ok_or_else(|| CommandError::QuotationNotFound(number.to_string()))?;

    match format {
        OutputFormat::Text => output::emit(&render(&quotation, &allowlist))?,
        OutputFormat::Json => output::emit_json(&ImagesDump {
            quotation_number: &quotation.quotation_number,
            raw: quotation.vehicle_images_raw.as_deref(),
            images: quotation.images(&allowlist),
        })?,
    }

    Ok(quotation)
}

/// Render the raw image field followed by one line per parsed URL.
#[must_use]
pub fn render(quotation: &Quotation, allowlist: &ImageDomainAllowlist) -> String {
    let mut out = format!("Quotation {}\n", quotation.quotation_number);
    let _ = writeln!(
        out,
        "Raw vehicle_images: {}",
        quotation.vehicle_images_raw.as_deref().unwrap_or("<null>")
    );

    let images = quotation.images(allowlist);
    if images.is_empty() {
        out.push_str("No vehicle images.\n");
        return out;
    }

    let _ = writeln!(out, "Parsed {} image URL(s):", images.len());
    for (i, image) in images.iter().enumerate() {
        let note = if image.allowed { "" } else { "  [host not in image allowlist]" };
        let _ = writeln!(out, "  {}. {}{}", i + 1, image.url, note);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use zzt_core::{QuotationId, VehicleImages};

    use super::*;

    fn quotation(raw: Option<&str>) -> Quotation {
        Quotation {
            id: QuotationId::new(1),
            quotation_number: QuotationNumber::parse("ZZT-2025-0042").unwrap(),
            customer_name: Some("Khun Dao".to_owned()),
            vehicle_images_raw: raw.map(str::to_owned),
            vehicle_images: VehicleImages::from_column(raw),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_flags_disallowed_hosts() {
        let q = quotation(Some(
            r#"["https://res.cloudinary.com/zzt/van.jpg","https://cdn.other.io/suv.jpg"]"#,
        ));
        let text = render(&q, &ImageDomainAllowlist::default());
        assert!(text.starts_with("Quotation ZZT-2025-0042\n"));
        assert!(text.contains("Parsed 2 image URL(s):"));
        assert!(text.contains("  1. https://res.cloudinary.com/zzt/van.jpg\n"));
        assert!(text.contains("  2. https://cdn.other.io/suv.jpg  [host not in image allowlist]"));
    }

    #[test]
    fn test_render_null_field() {
        let text = render(&quotation(None), &ImageDomainAllowlist::default());
        assert!(text.contains("Raw vehicle_images: <null>"));
        assert!(text.contains("No vehicle images."));
    }

    #[tokio::test]
    async fn test_invalid_number_fails_before_connecting() {
        let err = images("QT-2025-1", OutputFormat::Text).await.unwrap_err();
        assert!(matches!(err, CommandError::InvalidQuotationNumber(_)));
    }
}
