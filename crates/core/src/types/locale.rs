//! Supported site locales.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`Locale`] or [`LocaleSet`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// The tag is not a 2-3 letter language code with an optional region.
    #[error("invalid locale tag: {0:?}")]
    InvalidTag(String),
    /// No locales were configured.
    #[error("at least one locale must be configured")]
    Empty,
    /// The default locale is not in the configured list.
    #[error("default locale {0} is not one of the configured locales")]
    DefaultNotSupported(String),
}

/// A BCP 47 style locale tag, normalized to `ll` or `ll-RR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Parse a locale tag such as `en`, `th` or `en_us`.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::InvalidTag`] if the tag is not a 2-3 letter
    /// language code optionally followed by a 2 letter region.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let tag = tag.trim();
        let invalid = || LocaleError::InvalidTag(tag.to_owned());

        let mut parts = tag.split(['-', '_']);
        let language = parts.next().ok_or_else(invalid)?;
        if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        let normalized = match (parts.next(), parts.next()) {
            (None, _) => language.to_ascii_lowercase(),
            (Some(region), None)
                if region.len() == 2 && region.bytes().all(|b| b.is_ascii_alphabetic()) =>
            {
                format!(
                    "{}-{}",
                    language.to_ascii_lowercase(),
                    region.to_ascii_uppercase()
                )
            }
            _ => return Err(invalid()),
        };

        Ok(Self(normalized))
    }

    /// The normalized tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag (`en` for `en-US`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

/// The locales the site is served in, with one default.
///
/// The default is always a member of the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    locales: Vec<Locale>,
    default: Locale,
}

impl LocaleSet {
    /// Build a set from a list and a default.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Empty`] for an empty list and
    /// [`LocaleError::DefaultNotSupported`] if `default` is not listed.
    pub fn new(locales: Vec<Locale>, default: Locale) -> Result<Self, LocaleError> {
        if locales.is_empty() {
            return Err(LocaleError::Empty);
        }
        if !locales.contains(&default) {
            return Err(LocaleError::DefaultNotSupported(default.0));
        }

        let mut unique: Vec<Locale> = Vec::with_capacity(locales.len());
        for locale in locales {
            if !unique.contains(&locale) {
                unique.push(locale);
            }
        }

        Ok(Self {
            locales: unique,
            default,
        })
    }

    /// Parse a comma-separated list; the default falls back to the first entry.
    ///
    /// # Errors
    ///
    /// Returns an error if any tag is invalid, the list is empty, or the
    /// default is not in the list.
    pub fn from_csv(csv: &str, default: Option<&str>) -> Result<Self, LocaleError> {
        let locales = csv
            .split(',')
            .filter(|tag| !tag.trim().is_empty())
            .map(Locale::parse)
            .collect::<Result<Vec<_>, _>>()?;

        let default = match default {
            Some(tag) => Locale::parse(tag)?,
            None => locales.first().cloned().ok_or(LocaleError::Empty)?,
        };

        Self::new(locales, default)
    }

    /// All supported locales in configuration order.
    #[must_use]
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// The default locale.
    #[must_use]
    pub const fn default_locale(&self) -> &Locale {
        &self.default
    }

    /// Pick the best supported locale for an `Accept-Language` header value.
    ///
    /// Entries are tried in descending `q` order (ties keep header order);
    /// an exact tag match wins over a primary-language match. Entries with
    /// `q=0` and the `*` wildcard never select a locale. Falls back to the
    /// default.
    #[must_use]
    pub fn negotiate(&self, accept_language: Option<&str>) -> &Locale {
        let Some(header) = accept_language else {
            return &self.default;
        };

        let mut ranges: Vec<(Locale, f32)> = header
            .split(',')
            .filter_map(|entry| {
                let mut pieces = entry.split(';');
                let tag = pieces.next()?.trim();
                let quality = pieces
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .map_or(Some(1.0), |q| q.trim().parse::<f32>().ok())?;
                let locale = Locale::parse(tag).ok()?;
                (quality > 0.0).then_some((locale, quality))
            })
            .collect();
        ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

        for (wanted, _) in &ranges {
            if let Some(found) = self.locales.iter().find(|l| *l == wanted) {
                return found;
            }
            if let Some(found) = self
                .locales
                .iter()
                .find(|l| l.language() == wanted.language())
            {
                return found;
            }
        }

        &self.default
    }
}

impl Default for LocaleSet {
    fn default() -> Self {
        let en = Locale("en".to_owned());
        Self {
            locales: vec![en.clone(), Locale("th".to_owned())],
            default: en,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn set() -> LocaleSet {
        LocaleSet::default()
    }

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(Locale::parse("EN").unwrap().as_str(), "en");
        assert_eq!(Locale::parse("en_us").unwrap().as_str(), "en-US");
        assert_eq!(Locale::parse("th-TH").unwrap().language(), "th");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Locale::parse("").is_err());
        assert!(Locale::parse("*").is_err());
        assert!(Locale::parse("english").is_err());
        assert!(Locale::parse("en-USA-x").is_err());
    }

    #[test]
    fn test_default_set_has_two_locales() {
        let set = set();
        assert_eq!(set.locales().len(), 2);
        assert_eq!(set.default_locale().as_str(), "en");
    }

    #[test]
    fn test_from_csv_default_must_be_member() {
        assert_eq!(
            LocaleSet::from_csv("en,th", Some("fr")),
            Err(LocaleError::DefaultNotSupported("fr".to_owned()))
        );
        assert_eq!(LocaleSet::from_csv(" , ", None), Err(LocaleError::Empty));
        let set = LocaleSet::from_csv("th, en", None).unwrap();
        assert_eq!(set.default_locale().as_str(), "th");
    }

    #[test]
    fn test_negotiate_prefers_quality() {
        let set = set();
        assert_eq!(set.negotiate(Some("en;q=0.5, th;q=0.9")).as_str(), "th");
        assert_eq!(set.negotiate(Some("th-TH,en;q=0.8")).as_str(), "th");
    }

    #[test]
    fn test_negotiate_falls_back_to_default() {
        let set = set();
        assert_eq!(set.negotiate(None).as_str(), "en");
        assert_eq!(set.negotiate(Some("fr-FR, de;q=0.7")).as_str(), "en");
        assert_eq!(set.negotiate(Some("*")).as_str(), "en");
        assert_eq!(set.negotiate(Some("th;q=0")).as_str(), "en");
    }
}
