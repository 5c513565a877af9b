//! Quotation numbers (`ZZT-<year>-<sequence>`).

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when parsing a [`QuotationNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuotationNumberError {
    /// The input string is empty.
    #[error("quotation number cannot be empty")]
    Empty,
    /// The input does not start with the `ZZT` prefix.
    #[error("quotation number must start with {expected}-, got {found:?}")]
    InvalidPrefix {
        /// The required prefix.
        expected: &'static str,
        /// What was found instead.
        found: String,
    },
    /// The input does not have exactly three dash-separated parts.
    #[error("quotation number must look like ZZT-<year>-<sequence>")]
    Malformed,
    /// The year part is not exactly four digits.
    #[error("quotation year must be four digits, got {0:?}")]
    InvalidYear(String),
    /// The sequence part is empty or not all digits.
    #[error("quotation sequence must be one or more digits, got {0:?}")]
    InvalidSequence(String),
}

/// A human-readable quotation identifier such as `ZZT-2025-0042`.
///
/// The prefix is matched case-insensitively and normalized to upper case.
/// The sequence keeps the digits it was written with, so `ZZT-2025-42` and
/// `ZZT-2025-0042` are distinct numbers as far as the database is concerned.
///
/// ## Examples
///
/// ```
/// use zzt_core::QuotationNumber;
///
/// let number = QuotationNumber::parse("zzt-2025-0042").unwrap();
/// assert_eq!(number.as_str(), "ZZT-2025-0042");
/// assert_eq!(number.year(), 2025);
/// assert_eq!(number.sequence(), Some(42));
///
/// assert_eq!(QuotationNumber::new(2024, 7).unwrap().as_str(), "ZZT-2024-0007");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuotationNumber {
    raw: String,
    year: u16,
}

impl QuotationNumber {
    /// Prefix shared by every quotation number.
    pub const PREFIX: &'static str = "ZZT";

    /// Minimum number of digits [`QuotationNumber::new`] pads the sequence to.
    pub const SEQUENCE_WIDTH: usize = 4;

    /// Largest year that still fits the four-digit year field.
    pub const MAX_YEAR: u16 = 9999;

    /// Build a quotation number from its parts, zero-padding the sequence.
    ///
    /// # Errors
    ///
    /// Returns `QuotationNumberError::InvalidYear` if `year` needs more than
    /// four digits.
    pub fn new(year: u16, sequence: u64) -> Result<Self, QuotationNumberError> {
        if year > Self::MAX_YEAR {
            return Err(QuotationNumberError::InvalidYear(year.to_string()));
        }
        let raw = format!(
            "{}-{year:04}-{sequence:0width$}",
            Self::PREFIX,
            width = Self::SEQUENCE_WIDTH
        );
        Ok(Self { raw, year })
    }

    /// Parse a quotation number.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is not `ZZT`, the year is not four
    /// digits, or the sequence is not all digits.
    pub fn parse(s: &str) -> Result<Self, QuotationNumberError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(QuotationNumberError::Empty);
        }

        let mut parts = s.split('-');
        let (Some(prefix), Some(year), Some(sequence), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(QuotationNumberError::Malformed);
        };

        if !prefix.eq_ignore_ascii_case(Self::PREFIX) {
            return Err(QuotationNumberError::InvalidPrefix {
                expected: Self::PREFIX,
                found: prefix.to_owned(),
            });
        }

        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(QuotationNumberError::InvalidYear(year.to_owned()));
        }
        let year_value = year
            .parse::<u16>()
            .map_err(|_| QuotationNumberError::InvalidYear(year.to_owned()))?;

        if sequence.is_empty() || !sequence.bytes().all(|b| b.is_ascii_digit()) {
            return Err(QuotationNumberError::InvalidSequence(sequence.to_owned()));
        }

        Ok(Self {
            raw: format!("{}-{year}-{sequence}", Self::PREFIX),
            year: year_value,
        })
    }

    /// The normalized textual form, as stored in the database.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The year component.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// The sequence digits as written, leading zeros included.
    #[must_use]
    pub fn sequence_digits(&self) -> &str {
        self.raw.rsplit('-').next().unwrap_or_default()
    }

    /// The numeric sequence, or `None` if it does not fit in a `u64`.
    #[must_use]
    pub fn sequence(&self) -> Option<u64> {
        self.sequence_digits().parse().ok()
    }
}

impl fmt::Display for QuotationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for QuotationNumber {
    type Err = QuotationNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for QuotationNumber {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl Serialize for QuotationNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for QuotationNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
