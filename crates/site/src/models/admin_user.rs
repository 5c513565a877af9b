//! Admin user domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use zzt_core::AdminUserId;

/// A back-office admin account (domain type).
#[derive(Debug, Clone, Serialize)]
pub struct AdminUser {
    /// Unique admin user ID.
    pub id: AdminUserId,
    /// Login name.
    pub username: String,
    /// Admin's email address, exactly as stored.
    pub email: String,
    /// Admin's full name.
    pub full_name: String,
    /// Whether the account may sign in.
    pub is_active: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
