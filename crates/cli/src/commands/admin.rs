//! Admin user dump.
//!
//! # Usage
//!
//! ```bash
//! # Active admins only
//! zzt-cli admin list
//!
//! # Everyone, including deactivated accounts
//! zzt-cli admin list --all
//! ```

use std::fmt::Write;

use zzt_site::db::AdminUserRepository;
use zzt_site::models::AdminUser;

use super::{CommandError, connect};
use crate::output::{self, OutputFormat};

/// List admin users and print them.
///
/// Only accounts with the active flag set are listed unless `all` is true.
///
/// # Errors
///
/// Returns an error if the database is unreachable or the query fails.
pub async fn list(all: bool, format: OutputFormat) -> Result<Vec<AdminUser>, CommandError> {
    let pool = connect().await?;

    let repo = AdminUserRepository::new(&pool);
    let result = if all {
        repo.list_all().await
    } else {
        repo.list_active().await
    };
    pool.close().await;
    let admins = result?;

    tracing::info!(count = admins.len(), include_inactive = all, "Fetched admin users");

    match format {
        OutputFormat::Text => output::emit(&render(&admins))?,
        OutputFormat::Json => output::emit_json(&admins)?,
    }

    Ok(admins)
}

/// Render admins as aligned text columns.
#[must_use]
pub fn render(admins: &[AdminUser]) -> String {
    if admins.is_empty() {
        return "No admin users found.".to_owned();
    }

    let username_width = admins
        .iter()
        .map(|a| a.username.len())
        .max()
        .unwrap_or(0)
        .max("USERNAME".len());
    let email_width = admins
        .iter()
        .map(|a| a.email.len())
        .max()
        .unwrap_or(0)
        .max("EMAIL".len());

    let mut out = format!(
        "{:>5}  {:<username_width$}  {:<email_width$}  {:<6}  FULL NAME\n",
        "ID", "USERNAME", "EMAIL", "ACTIVE"
    );
    for admin in admins {
        let _ = writeln!(
            out,
            "{:>5}  {:<username_width$}  {:<email_width$}  {:<6}  {}",
            admin.id.as_i32(),
            admin.username,
            admin.email,
            if admin.is_active { "yes" } else { "no" },
            admin.full_name
        );
    }
    out
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use chrono::Utc;
    use zzt_core::AdminUserId;

    use super::*;

    fn admin(id: i32, username: &str, active: bool) -> AdminUser {
        AdminUser {
            id: AdminUserId::new(id),
            username: username.to_owned(),
            email: format!("{username}@zzt-tours.com"),
            full_name: format!("{username} Full"),
            is_active: active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "No admin users found.");
    }

    #[test]
    fn test_render_columns() {
        let text = render(&[admin(1, "nok", true), admin(12, "somchai", false)]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("   ID  USERNAME"));
        assert!(lines[1].contains("nok@zzt-tours.com"));
        assert!(lines[1].contains("yes"));
        assert!(lines[2].starts_with("   12  somchai"));
        assert!(lines[2].contains("no "));
        assert!(lines[2].ends_with("somchai Full"));
    }
}
