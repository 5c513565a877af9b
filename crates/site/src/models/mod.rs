//! Domain models read from the database.

pub mod admin_user;
pub mod quotation;

pub use admin_user::AdminUser;
pub use quotation::{Quotation, QuotationImage};

/// A blanket-read row (every column), as returned for feedback and packages.
pub type Record = serde_json::Value;
