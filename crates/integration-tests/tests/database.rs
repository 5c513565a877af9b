//! Repository tests against a real `PostgreSQL`.
//!
//! These tests require `ZZT_TEST_DATABASE_URL` pointing at a disposable
//! database; migrations are applied on connect.
//!
//! Run with: cargo test -p zzt-integration-tests -- --ignored

use std::time::{SystemTime, UNIX_EPOCH};

use sqlx::PgPool;
use zzt_core::QuotationNumber;
use zzt_site::db::{AdminUserRepository, FeedbackRepository, PackageRepository, QuotationRepository};

async fn test_pool() -> PgPool {
    let url = std::env::var("ZZT_TEST_DATABASE_URL").expect("ZZT_TEST_DATABASE_URL not set");
    let pool = PgPool::connect(&url).await.expect("connect");
    sqlx::migrate!("../site/migrations")
        .run(&pool)
        .await
        .expect("migrate");
    pool
}

/// A suffix unique enough to keep parallel test runs apart.
fn unique() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .subsec_nanos()
}

#[tokio::test]
#[ignore = "Requires ZZT_TEST_DATABASE_URL"]
async fn test_list_active_returns_only_active_admins() {
    let pool = test_pool().await;
    let tag = unique();
    let active = format!("active_{tag}");
    let inactive = format!("inactive_{tag}");

    sqlx::query(
        "INSERT INTO admin_users (username, email, full_name, is_active)
         VALUES ($1, $2, 'Active Admin', TRUE), ($3, $4, 'Gone Admin', FALSE)",
    )
    .bind(&active)
    .bind(format!("{active}@zzt-tours.com"))
    .bind(&inactive)
    .bind(format!("{inactive}@zzt-tours.com"))
    .execute(&pool)
    .await
    .expect("insert admins");

    let repo = AdminUserRepository::new(&pool);
    let listed = repo.list_active().await.expect("list active");
    assert!(listed.iter().all(|a| a.is_active));
    assert!(listed.iter().any(|a| a.username == active));
    assert!(!listed.iter().any(|a| a.username == inactive));

    let everyone = repo.list_all().await.expect("list all");
    assert!(everyone.iter().any(|a| a.username == inactive));

    sqlx::query("DELETE FROM admin_users WHERE username IN ($1, $2)")
        .bind(&active)
        .bind(&inactive)
        .execute(&pool)
        .await
        .expect("cleanup");
    pool.close().await;
}

#[tokio::test]
#[ignore = "Requires ZZT_TEST_DATABASE_URL"]
async fn test_quotation_lookup_by_number() {
    let pool = test_pool().await;
    let number = QuotationNumber::new(2099, u64::from(unique()) + 1).expect("number");

    sqlx::query("INSERT INTO quotations (quotation_number, vehicle_images) VALUES ($1, $2)")
        .bind(number.as_str())
        .bind(r#"["https://res.cloudinary.com/zzt/van.jpg","https://cdn.other.io/suv.jpg"]"#)
        .execute(&pool)
        .await
        .expect("insert quotation");

    let repo = QuotationRepository::new(&pool);
    let found = repo
        .get_by_number(&number)
        .await
        .expect("query")
        .expect("quotation exists");
    assert_eq!(found.quotation_number, number);
    assert_eq!(found.vehicle_images.len(), 2);

    let missing = QuotationNumber::new(1900, 1).expect("number");
    assert!(repo.get_by_number(&missing).await.expect("query").is_none());

    sqlx::query("DELETE FROM quotations WHERE quotation_number = $1")
        .bind(number.as_str())
        .execute(&pool)
        .await
        .expect("cleanup");
    pool.close().await;
}

#[tokio::test]
#[ignore = "Requires ZZT_TEST_DATABASE_URL"]
async fn test_admin_with_malformed_email_is_still_listed() {
    let pool = test_pool().await;
    let username = format!("local_{}", unique());

    sqlx::query(
        "INSERT INTO admin_users (username, email, full_name, is_active)
         VALUES ($1, 'admin@localhost', 'Local Admin', TRUE)",
    )
    .bind(&username)
    .execute(&pool)
    .await
    .expect("insert admin");

    let listed = AdminUserRepository::new(&pool)
        .list_active()
        .await
        .expect("list active");
    let admin = listed
        .iter()
        .find(|a| a.username == username)
        .expect("admin listed");
    assert_eq!(admin.email, "admin@localhost");

    sqlx::query("DELETE FROM admin_users WHERE username = $1")
        .bind(&username)
        .execute(&pool)
        .await
        .expect("cleanup");
    pool.close().await;
}

#[tokio::test]
#[ignore = "Requires ZZT_TEST_DATABASE_URL"]
async fn test_all_zero_sequence_can_be_looked_up() {
    let pool = test_pool().await;
    let year = 2000 + u16::try_from(unique() % 1000).expect("year");
    let number = QuotationNumber::parse(&format!("ZZT-{year}-0000")).expect("number");

    sqlx::query("INSERT INTO quotations (quotation_number) VALUES ($1) ON CONFLICT DO NOTHING")
        .bind(number.as_str())
        .execute(&pool)
        .await
        .expect("insert quotation");

    let found = QuotationRepository::new(&pool)
        .get_by_number(&number)
        .await
        .expect("query");
    assert!(found.is_some());

    sqlx::query("DELETE FROM quotations WHERE quotation_number = $1")
        .bind(number.as_str())
        .execute(&pool)
        .await
        .expect("cleanup");
    pool.close().await;
}

#[tokio::test]
#[ignore = "Requires ZZT_TEST_DATABASE_URL"]
async fn test_blanket_reads_return_every_column() {
    let pool = test_pool().await;
    let slug = format!("similan-{}", unique());

    sqlx::query("INSERT INTO tour_packages (slug, title, duration_days) VALUES ($1, 'Similan Islands', 2)")
        .bind(&slug)
        .execute(&pool)
        .await
        .expect("insert package");

    let packages = PackageRepository::new(&pool).list_all().await.expect("list");
    let package = packages
        .iter()
        .find(|p| p["slug"] == slug.as_str())
        .expect("package listed");
    for column in ["id", "slug", "title", "duration_days", "price", "created_at"] {
        assert!(package.get(column).is_some(), "missing column {column}");
    }

    let feedback = FeedbackRepository::new(&pool)
        .list(Some(1))
        .await
        .expect("list feedback");
    assert!(feedback.len() <= 1);

    sqlx::query("DELETE FROM tour_packages WHERE slug = $1")
        .bind(&slug)
        .execute(&pool)
        .await
        .expect("cleanup");
    pool.close().await;
}
