use axum::{Json, extract::State};

use crate::{db::DbPool, error::AppResult, models::WasteType};

#[utoipa::path(
    get,
    path = "/api/waste-types",
    responses(
        (status = 200, description = "Active waste types, highest price per kg first", body = [WasteType])
    ),
    tag = "Catalog"
)]
pub async fn list_waste_types(State(pool): State<DbPool>) -> AppResult<Json<Vec<WasteType>>> {
    let items = sqlx::query_as::<_, WasteType>(
        "SELECT * FROM waste_types WHERE status = 'ACTIVE' ORDER BY price_per_kg DESC",
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(items))
}
