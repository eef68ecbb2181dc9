use axum::{Json, extract::State};

use crate::{db::DbPool, error::AppResult, models::News};

#[utoipa::path(
    get,
    path = "/api/news",
    responses(
        (status = 200, description = "Up to 10 active, unexpired announcements, newest first", body = [News])
    ),
    tag = "Content"
)]
pub async fn list_news(State(pool): State<DbPool>) -> AppResult<Json<Vec<News>>> {
    let items = sqlx::query_as::<_, News>(
        r#"
        SELECT * FROM news
        WHERE is_active = 1 AND (expiry_date IS NULL OR expiry_date >= date('now'))
        ORDER BY publish_date DESC
        LIMIT 10
        "#,
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(items))
}
