use axum::{Json, extract::State};

use crate::{db::DbPool, error::AppResult, models::CollectionPoint};

#[utoipa::path(
    get,
    path = "/api/collection-points",
    responses(
        (status = 200, description = "Active waste banks and TPS drop-off sites", body = [CollectionPoint])
    ),
    tag = "Catalog"
)]
pub async fn list_collection_points(
    State(pool): State<DbPool>,
) -> AppResult<Json<Vec<CollectionPoint>>> {
    let points = sqlx::query_as::<_, CollectionPoint>(
        "SELECT * FROM collection_points WHERE status = 'ACTIVE'",
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(points))
}
