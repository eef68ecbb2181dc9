use chrono::Utc;

use crate::{
    db::DbPool,
    dto::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
    error::{AppError, AppResult},
    models::User,
    password,
};

/// Member ids look like BSB100001; the numeric suffix is a plain increment
/// over the highest one already issued.
const USER_ID_PREFIX: &str = "BSB";
const USER_ID_SEED: i64 = 100_000;

/// Two registrations can race on the same computed suffix; the unique
/// constraint on users.user_id rejects the loser and we recompute.
const ID_CONFLICT_RETRIES: u32 = 3;

pub async fn register_user(
    pool: &DbPool,
    payload: RegisterRequest,
) -> AppResult<RegisterResponse> {
    let RegisterRequest {
        name,
        email,
        phone,
        password,
        address,
    } = payload;

    let (Some(name), Some(email), Some(phone), Some(password), Some(address)) =
        (name, email, phone, password, address)
    else {
        return Ok(RegisterResponse::rejected("Data tidak lengkap"));
    };

    // Fast path only; the unique constraint on users.email stays the source
    // of truth when two registrations race past this check.
    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Ok(RegisterResponse::rejected("Email sudah terdaftar"));
    }

    let password_hash = password::hash_password(&password)?;
    let join_date = Utc::now().date_naive();

    for _ in 0..ID_CONFLICT_RETRIES {
        let user_id = next_user_id(pool).await?;
        let result = sqlx::query(
            r#"
            INSERT INTO users (user_id, name, email, phone, password_hash, address, join_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&user_id)
        .bind(&name)
        .bind(&email)
        .bind(&phone)
        .bind(&password_hash)
        .bind(&address)
        .bind(join_date)
        .execute(pool)
        .await;

        match result {
            Ok(_) => {
                tracing::info!(user_id = %user_id, "user registered");
                return Ok(RegisterResponse {
                    success: true,
                    message: "Pendaftaran berhasil".to_string(),
                    user_id: Some(user_id),
                });
            }
            Err(err) if is_unique_violation(&err, "users.email") => {
                return Ok(RegisterResponse::rejected("Email sudah terdaftar"));
            }
            Err(err) if is_unique_violation(&err, "users.user_id") => {
                tracing::debug!(user_id = %user_id, "member id taken, retrying");
                continue;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(AppError::Internal(anyhow::anyhow!(
        "could not allocate a member id after {ID_CONFLICT_RETRIES} attempts"
    )))
}

pub async fn login_user(pool: &DbPool, payload: LoginRequest) -> AppResult<LoginResponse> {
    let LoginRequest { email, password } = payload;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;

    let Some(user) = user else {
        return Ok(LoginResponse::rejected());
    };

    if !password::verify_password(&user.password_hash, &password) {
        return Ok(LoginResponse::rejected());
    }

    tracing::info!(user_id = %user.user_id, "user logged in");
    Ok(LoginResponse {
        success: true,
        message: "Login berhasil".to_string(),
        user: Some(user.into()),
    })
}

/// Next member id: highest numeric suffix among existing BSB ids, plus one.
async fn next_user_id(pool: &DbPool) -> AppResult<String> {
    let suffix_start = USER_ID_PREFIX.len() as i64 + 1;
    let (max_suffix,): (i64,) = sqlx::query_as(
        r#"
        SELECT COALESCE(MAX(CAST(substr(user_id, $1) AS INTEGER)), $2)
        FROM users
        WHERE user_id LIKE $3
        "#,
    )
    .bind(suffix_start)
    .bind(USER_ID_SEED)
    .bind(format!("{USER_ID_PREFIX}%"))
    .fetch_one(pool)
    .await?;

    Ok(format!("{USER_ID_PREFIX}{}", max_suffix + 1))
}

fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation() && db.message().contains(constraint))
}
