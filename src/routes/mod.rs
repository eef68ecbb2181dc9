use axum::{Router, routing::get};

use crate::db::DbPool;

pub mod auth;
pub mod collection_points;
pub mod doc;
pub mod education;
pub mod health;
pub mod home;
pub mod news;
pub mod waste_types;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<DbPool> {
    Router::new()
        .route("/test", get(health::api_test))
        .route("/waste-types", get(waste_types::list_waste_types))
        .route(
            "/collection-points",
            get(collection_points::list_collection_points),
        )
        .route("/news", get(news::list_news))
        .route("/education", get(education::list_education))
        .route("/tips", get(education::list_tips))
        .merge(auth::router())
}
