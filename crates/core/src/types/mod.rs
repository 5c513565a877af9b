//! Core types for ZZT Tours.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod images;
pub mod locale;
pub mod quotation;

pub use email::{Email, EmailError};
pub use id::*;
pub use images::{ImageDomainAllowlist, VehicleImages};
pub use locale::{Locale, LocaleError, LocaleSet};
pub use quotation::{QuotationNumber, QuotationNumberError};
