use axum::{Json, extract::State};

use crate::{
    db::DbPool,
    error::AppResult,
    models::{EducationMaterial, Tip},
};

#[utoipa::path(
    get,
    path = "/api/education",
    responses(
        (status = 200, description = "Up to 10 education materials, newest first", body = [EducationMaterial])
    ),
    tag = "Content"
)]
pub async fn list_education(
    State(pool): State<DbPool>,
) -> AppResult<Json<Vec<EducationMaterial>>> {
    let materials = sqlx::query_as::<_, EducationMaterial>(
        "SELECT * FROM education_materials ORDER BY created_at DESC LIMIT 10",
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(materials))
}

#[utoipa::path(
    get,
    path = "/api/tips",
    responses(
        (status = 200, description = "All waste-handling tips, newest first", body = [Tip])
    ),
    tag = "Content"
)]
pub async fn list_tips(State(pool): State<DbPool>) -> AppResult<Json<Vec<Tip>>> {
    let tips = sqlx::query_as::<_, Tip>("SELECT * FROM tips ORDER BY created_at DESC")
        .fetch_all(&pool)
        .await?;

    Ok(Json(tips))
}
