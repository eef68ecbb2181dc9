use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
    models::{
        CollectionPoint, EducationMaterial, News, PickupRequest, PickupSchedule, PriceUpdate,
        Saving, Statistic, Tip, Transaction, UserProfile, WasteType,
    },
    response::ApiStatus,
    routes::{auth, collection_points, education, health, home, news, waste_types},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        home::index,
        health::health_check,
        health::api_test,
        auth::login,
        auth::register,
        waste_types::list_waste_types,
        collection_points::list_collection_points,
        news::list_news,
        education::list_education,
        education::list_tips,
    ),
    components(
        schemas(
            UserProfile,
            WasteType,
            Transaction,
            PickupSchedule,
            PickupRequest,
            CollectionPoint,
            Saving,
            PriceUpdate,
            News,
            EducationMaterial,
            Tip,
            Statistic,
            ApiStatus,
            LoginRequest,
            LoginResponse,
            RegisterRequest,
            RegisterResponse,
            health::HealthData,
            health::ApiTestInfo,
        )
    ),
    tags(
        (name = "Health", description = "Landing page and liveness endpoints"),
        (name = "Auth", description = "Registration and login"),
        (name = "Catalog", description = "Waste-type price list and collection points"),
        (name = "Content", description = "News, education materials, and tips"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
