//! Seed the database with the sample K-beauty promotion dataset.
//!
//! ```text
//! promotor-seed            apply migrations and insert the sample data
//! promotor-seed --reset    truncate all tables first, then seed
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use promotor_db::DatabaseConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promotor_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let reset = std::env::args().any(|arg| arg == "--reset");

    let db_config = DatabaseConfig::from_env();
    let pool = promotor_db::connect(&db_config).await?;
    promotor_db::run_migrations(&pool).await?;

    if reset {
        promotor_db::seed::clear(&pool).await?;
        tracing::info!("Cleared existing data");
    }

    promotor_db::seed::run(&pool).await?;

    promotor_db::shutdown(&pool).await;
    Ok(())
}
