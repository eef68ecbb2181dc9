use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full `users` row. Deliberately not `Serialize`: responses go through
/// [`UserProfile`], which has no password hash field at all.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub address: String,
    pub balance: f64,
    pub points: i64,
    pub join_date: NaiveDate,
    pub is_admin: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserProfile {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub balance: f64,
    pub points: i64,
    pub join_date: NaiveDate,
    pub is_admin: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_id: user.user_id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            address: user.address,
            balance: user.balance,
            points: user.points,
            join_date: user.join_date,
            is_admin: user.is_admin,
            latitude: user.latitude,
            longitude: user.longitude,
            status: user.status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct WasteType {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub price_per_kg: f64,
    pub image_url: Option<String>,
    pub recycling_process: Option<String>,
    pub benefits: Option<String>,
    pub status: String,
}

/// Deposit settlement record. Status runs PENDING -> SCHEDULED -> COLLECTED
/// -> PAID; no handler drives the transition yet.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Transaction {
    pub id: i64,
    pub user_id: String,
    pub transaction_id: String,
    pub waste_type_id: i64,
    pub weight: f64,
    pub total: f64,
    pub pickup_schedule_id: Option<i64>,
    pub location: String,
    pub status: String,
    pub pickup_date: Option<NaiveDate>,
    pub pickup_time: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct PickupSchedule {
    pub id: i64,
    pub user_id: String,
    pub schedule_date: NaiveDate,
    pub schedule_time: String,
    pub area: String,
    pub driver_name: Option<String>,
    pub driver_phone: Option<String>,
    pub vehicle_number: Option<String>,
    pub status: String,
    pub completed_at: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct PickupRequest {
    pub id: i64,
    pub user_id: String,
    pub request_date: NaiveDate,
    pub waste_types: String,
    pub estimated_weight: Option<f64>,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: String,
    pub scheduled_pickup_id: Option<i64>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct CollectionPoint {
    pub id: i64,
    pub name: String,
    /// BANK_SAMPAH or TPS.
    pub r#type: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub operating_hours: String,
    pub capacity: Option<String>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
    pub facilities: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

/// Savings ledger entry; `balance_after` is a snapshot taken at write time.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Saving {
    pub id: i64,
    pub user_id: String,
    pub transaction_type: String,
    pub amount: f64,
    pub balance_after: f64,
    pub description: Option<String>,
    pub reference_id: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct PriceUpdate {
    pub id: i64,
    pub waste_type_id: i64,
    pub old_price: f64,
    pub new_price: f64,
    pub effective_date: NaiveDate,
    pub reason: Option<String>,
    pub updated_by: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct News {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub image_url: Option<String>,
    pub author: String,
    pub publish_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub is_active: bool,
    pub views: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct EducationMaterial {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub r#type: String,
    pub category: String,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub author: Option<String>,
    pub views: i64,
    pub likes: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Tip {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub icon: Option<String>,
    pub category: String,
    pub difficulty: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Daily aggregate snapshot; written by reporting jobs, none wired up yet.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Statistic {
    pub id: i64,
    pub date: NaiveDate,
    pub total_users: i64,
    pub total_transactions: i64,
    pub total_waste_kg: f64,
    pub total_value: f64,
    pub active_pickups: i64,
    pub collection_points_count: i64,
    pub created_at: NaiveDateTime,
}
