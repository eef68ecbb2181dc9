use std::str::FromStr;

use axum::extract::State;
use chrono::{Days, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use banksampah_api::{
    db::DbPool,
    dto::auth::{LoginRequest, RegisterRequest},
    routes::{collection_points, education, news, waste_types},
    seed,
    services::auth_service::{login_user, register_user},
};

/// In-memory database; a single connection so every query sees the same data.
async fn setup_pool() -> anyhow::Result<DbPool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    seed::run(&pool).await?;
    Ok(pool)
}

fn register_payload(email: &str) -> RegisterRequest {
    RegisterRequest {
        name: Some("Siti Aminah".to_string()),
        email: Some(email.to_string()),
        phone: Some("081211112222".to_string()),
        password: Some("rahasia1".to_string()),
        address: Some("Jl. Anggrek No. 7".to_string()),
    }
}

async fn user_count(pool: &DbPool) -> anyhow::Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

#[tokio::test]
async fn register_unique_email_succeeds_with_sequential_id() -> anyhow::Result<()> {
    let pool = setup_pool().await?;

    let resp = register_user(&pool, register_payload("siti@example.com")).await?;
    assert!(resp.success);
    let user_id = resp.user_id.expect("member id on success");
    assert!(user_id.starts_with("BSB"));
    // Seed data ends at BSB100001.
    assert_eq!(user_id, "BSB100002");

    let next = register_user(&pool, register_payload("joko@example.com")).await?;
    assert_eq!(next.user_id.as_deref(), Some("BSB100003"));
    Ok(())
}

#[tokio::test]
async fn register_duplicate_email_fails_without_insert() -> anyhow::Result<()> {
    let pool = setup_pool().await?;
    let before = user_count(&pool).await?;

    let resp = register_user(&pool, register_payload("budi@example.com")).await?;
    assert!(!resp.success);
    assert_eq!(resp.message, "Email sudah terdaftar");
    assert!(resp.user_id.is_none());
    assert_eq!(user_count(&pool).await?, before);
    Ok(())
}

#[tokio::test]
async fn register_missing_field_fails_before_any_write() -> anyhow::Result<()> {
    let pool = setup_pool().await?;
    let before = user_count(&pool).await?;

    let mut payload = register_payload("siti@example.com");
    payload.phone = None;

    let resp = register_user(&pool, payload).await?;
    assert!(!resp.success);
    assert_eq!(resp.message, "Data tidak lengkap");
    assert_eq!(user_count(&pool).await?, before);
    Ok(())
}

#[tokio::test]
async fn admin_login_succeeds_and_omits_password() -> anyhow::Result<()> {
    let pool = setup_pool().await?;

    let resp = login_user(
        &pool,
        LoginRequest {
            email: "admin@banksampah.com".to_string(),
            password: "admin123".to_string(),
        },
    )
    .await?;

    assert!(resp.success);
    let user = serde_json::to_value(resp.user.expect("user on success"))?;
    let fields = user.as_object().expect("user is an object");
    assert!(fields.contains_key("user_id"));
    assert_eq!(fields["user_id"], "ADMIN001");
    assert_eq!(fields["is_admin"], true);
    // The password field must be absent, not null.
    assert!(fields.keys().all(|key| !key.contains("password")));
    Ok(())
}

#[tokio::test]
async fn login_failures_are_indistinguishable() -> anyhow::Result<()> {
    let pool = setup_pool().await?;

    let wrong_password = login_user(
        &pool,
        LoginRequest {
            email: "budi@example.com".to_string(),
            password: "wrong".to_string(),
        },
    )
    .await?;
    let unknown_email = login_user(
        &pool,
        LoginRequest {
            email: "nonexistent@x.com".to_string(),
            password: "user123".to_string(),
        },
    )
    .await?;

    assert!(!wrong_password.success);
    assert_eq!(
        serde_json::to_string(&wrong_password)?,
        serde_json::to_string(&unknown_email)?
    );
    Ok(())
}

#[tokio::test]
async fn waste_types_sorted_strictly_by_price_descending() -> anyhow::Result<()> {
    let pool = setup_pool().await?;

    let items = waste_types::list_waste_types(State(pool)).await?.0;
    assert_eq!(items.len(), 9);

    let first = items.first().expect("seeded catalog");
    assert_eq!(first.name, "Kaleng Aluminium");
    assert_eq!(first.price_per_kg, 7000.0);

    let last = items.last().expect("seeded catalog");
    assert_eq!(last.name, "Sampah Organik");
    assert_eq!(last.price_per_kg, 500.0);

    for pair in items.windows(2) {
        assert!(pair[0].price_per_kg >= pair[1].price_per_kg);
    }
    Ok(())
}

#[tokio::test]
async fn news_never_returns_expired_items() -> anyhow::Result<()> {
    let pool = setup_pool().await?;
    let today = Utc::now().date_naive();
    let last_week = today - Days::new(7);
    let yesterday = today - Days::new(1);

    sqlx::query(
        r#"
        INSERT INTO news (title, content, category, author, publish_date, expiry_date)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind("Pengumuman Kedaluwarsa")
    .bind("<p>sudah lewat</p>")
    .bind("PENGUMUMAN")
    .bind("Manajemen")
    .bind(last_week)
    .bind(yesterday)
    .execute(&pool)
    .await?;

    let items = news::list_news(State(pool)).await?.0;
    assert!(!items.is_empty());
    assert!(items.iter().all(|n| n.title != "Pengumuman Kedaluwarsa"));
    assert!(
        items
            .iter()
            .all(|n| n.expiry_date.is_none_or(|expiry| expiry >= today))
    );
    Ok(())
}

#[tokio::test]
async fn collection_points_lists_only_active_sites() -> anyhow::Result<()> {
    let pool = setup_pool().await?;

    sqlx::query("UPDATE collection_points SET status = 'INACTIVE' WHERE name = $1")
        .bind("TPS Pondok Cabe")
        .execute(&pool)
        .await?;

    let points = collection_points::list_collection_points(State(pool)).await?.0;
    assert_eq!(points.len(), 3);
    assert!(points.iter().all(|p| p.status == "ACTIVE"));
    Ok(())
}

#[tokio::test]
async fn education_and_tips_return_seeded_rows() -> anyhow::Result<()> {
    let pool = setup_pool().await?;

    let materials = education::list_education(State(pool.clone())).await?.0;
    assert_eq!(materials.len(), 2);

    let tips = education::list_tips(State(pool)).await?.0;
    assert_eq!(tips.len(), 6);
    Ok(())
}

#[tokio::test]
async fn seeding_twice_leaves_row_counts_unchanged() -> anyhow::Result<()> {
    let pool = setup_pool().await?;

    seed::run(&pool).await?;

    let (waste_types,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM waste_types")
        .fetch_one(&pool)
        .await?;
    assert_eq!(waste_types, 9);
    assert_eq!(user_count(&pool).await?, 2);
    Ok(())
}
