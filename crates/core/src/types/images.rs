//! Vehicle image lists and the image-domain allowlist.
//!
//! Quotations store their vehicle images in a single text column. Depending
//! on which form wrote the row, that column holds a JSON array, a single JSON
//! string, or a plain delimited list. [`VehicleImages`] accepts all of them.

use serde::{Deserialize, Serialize};
use url::Url;

/// The ordered, de-duplicated image URLs attached to a quotation.
///
/// ## Examples
///
/// ```
/// use zzt_core::VehicleImages;
///
/// let json = VehicleImages::parse(r#"["https://a.test/1.jpg", "https://a.test/2.jpg"]"#);
/// assert_eq!(json.len(), 2);
///
/// let plain = VehicleImages::parse("https://a.test/1.jpg, https://a.test/2.jpg");
/// assert_eq!(plain, json);
///
/// assert!(VehicleImages::parse("   ").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleImages(Vec<String>);

impl VehicleImages {
    /// Parse the raw image field.
    ///
    /// Never fails: anything that is not JSON is treated as a delimited list
    /// (commas, semicolons or newlines). Blank entries are dropped and
    /// repeated URLs are kept once, at their first position.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::default();
        }

        let entries: Vec<String> = match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            Ok(serde_json::Value::String(s)) => split_plain(&s),
            _ => split_plain(raw),
        };

        Self::from_entries(entries)
    }

    /// Parse an optional column value; `None` yields an empty list.
    #[must_use]
    pub fn from_column(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    fn from_entries(entries: impl IntoIterator<Item = String>) -> Self {
        let mut urls: Vec<String> = Vec::new();
        for entry in entries {
            let entry = entry.trim();
            if entry.is_empty() || urls.iter().any(|u| u == entry) {
                continue;
            }
            urls.push(entry.to_owned());
        }
        Self(urls)
    }

    /// Number of image URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the URLs in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Consume the list and return the URLs.
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

fn split_plain(s: &str) -> Vec<String> {
    s.split([',', ';', '\n', '\r'])
        .map(str::to_owned)
        .collect()
}

/// Hosts that vehicle and package images may be served from.
///
/// Matching is exact on the host (no subdomain wildcarding) and
/// case-insensitive. Only `http` and `https` URLs can match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDomainAllowlist {
    domains: Vec<String>,
}

impl ImageDomainAllowlist {
    /// Domains allowed when nothing is configured.
    pub const DEFAULT_DOMAINS: &'static [&'static str] =
        &["res.cloudinary.com", "images.unsplash.com", "localhost"];

    /// Build an allowlist from domain names. Blank and repeated entries are ignored.
    #[must_use]
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list: Vec<String> = Vec::new();
        for domain in domains {
            let domain = domain.as_ref().trim().to_ascii_lowercase();
            if !domain.is_empty() && !list.contains(&domain) {
                list.push(domain);
            }
        }
        Self { domains: list }
    }

    /// Parse a comma-separated list such as `ZZT_IMAGE_DOMAINS`.
    #[must_use]
    pub fn from_csv(csv: &str) -> Self {
        Self::new(csv.split(','))
    }

    /// The configured domains, lower-cased, in configuration order.
    #[must_use]
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Whether `url` points at an allowlisted host.
    #[must_use]
    pub fn allows(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        if !matches!(parsed.scheme(), "http" | "https") {
            return false;
        }
        parsed
            .host_str()
            .is_some_and(|host| self.domains.iter().any(|d| d.eq_ignore_ascii_case(host)))
    }

    /// Render the `img-src` sources for a Content-Security-Policy header.
    ///
    /// Each domain is listed for both schemes on any port, matching what
    /// [`ImageDomainAllowlist::allows`] accepts.
    #[must_use]
    pub fn csp_sources(&self) -> String {
        let mut sources = vec!["'self'".to_owned()];
        for domain in &self.domains {
            sources.push(format!("http://{domain}:*"));
            sources.push(format!("https://{domain}:*"));
        }
        sources.join(" ")
    }
}

impl Default for ImageDomainAllowlist {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DOMAINS)
    }
}
