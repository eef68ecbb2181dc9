use banksampah_api::{config::AppConfig, db::create_pool, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    seed::run(&pool).await?;

    println!("Seed completed.");
    Ok(())
}
