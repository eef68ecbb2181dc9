use axum::Json;
use chrono::Local;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = HealthData),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthData> {
    Json(HealthData {
        status: "ok".to_string(),
    })
}

#[derive(Serialize, ToSchema)]
pub struct ApiTestInfo {
    pub status: String,
    pub message: String,
    pub timestamp: String,
    #[schema(value_type = Object)]
    pub endpoints: serde_json::Value,
}

#[utoipa::path(
    get,
    path = "/api/test",
    responses(
        (status = 200, description = "Liveness echo with the endpoint directory", body = ApiTestInfo),
    ),
    tag = "Health"
)]
pub async fn api_test() -> Json<ApiTestInfo> {
    Json(ApiTestInfo {
        status: "success".to_string(),
        message: "API Bank Sampah berjalan dengan baik!".to_string(),
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        endpoints: serde_json::json!({
            "waste_types": "/api/waste-types",
            "collection_points": "/api/collection-points",
            "news": "/api/news",
            "education": "/api/education",
            "tips": "/api/tips",
            "login": "/api/login (POST)",
            "register": "/api/register (POST)",
        }),
    })
}
