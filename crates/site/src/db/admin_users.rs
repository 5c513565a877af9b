//! Admin user repository (read-only).

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use zzt_core::{AdminUserId, Email};

use super::RepositoryError;
use crate::models::AdminUser;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for `PostgreSQL` admin user queries.
#[derive(Debug, sqlx::FromRow)]
struct AdminUserRow {
    id: AdminUserId,
    username: String,
    email: String,
    full_name: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<AdminUserRow> for AdminUser {
    fn from(row: AdminUserRow) -> Self {
        // The column is plain TEXT; a malformed address is listed as stored
        if let Err(e) = Email::parse(&row.email) {
            tracing::warn!(
                admin_id = %row.id,
                username = %row.username,
                error = %e,
                "Admin user has an invalid email address"
            );
        }

        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            full_name: row.full_name,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for admin user database operations.
pub struct AdminUserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminUserRepository<'a> {
    /// Create a new admin user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List admin users whose active flag is set, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_active(&self) -> Result<Vec<AdminUser>, RepositoryError> {
        let rows = sqlx::query_as::<_, AdminUserRow>(
            r"
            SELECT id, username, email, full_name, is_active, created_at
            FROM admin_users
            WHERE is_active = $1
            ORDER BY id ASC
            ",
        )
        .bind(true)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(AdminUser::from).collect())
    }

    /// List every admin user, active or not, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<AdminUser>, RepositoryError> {
        let rows = sqlx::query_as::<_, AdminUserRow>(
            r"
            SELECT id, username, email, full_name, is_active, created_at
            FROM admin_users
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(AdminUser::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(email: &str) -> AdminUserRow {
        AdminUserRow {
            id: AdminUserId::new(3),
            username: "ops".to_owned(),
            email: email.to_owned(),
            full_name: "Ops Desk".to_owned(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_invalid_email_is_kept_verbatim() {
        for stored in ["admin@localhost", "", "not-an-email"] {
            let admin = AdminUser::from(row(stored));
            assert_eq!(admin.email, stored);
            assert_eq!(admin.id, AdminUserId::new(3));
        }
    }

    #[test]
    fn test_valid_email_is_not_rewritten() {
        let admin = AdminUser::from(row("Ops@ZZT-Tours.com"));
        assert_eq!(admin.email, "Ops@ZZT-Tours.com");
    }
}
