use once_cell::sync::Lazy;
use sea_orm::{Database, DatabaseConnection};
use std::env;

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").unwrap_or_else(|_| configs::default_database_url())
});

/// Connect using the process-wide URL (env, falling back to the bundled
/// single-file default).
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    connect_with(DATABASE_URL.as_str()).await
}

/// Connect to an explicit URL. Tests thread isolated file paths through
/// here instead of mutating process state.
pub async fn connect_with(url: &str) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(url).await?;
    Ok(db)
}
